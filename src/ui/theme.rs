use ratatui::style::Color;

// Night-sky palette.
pub const SPACE_BLUE: Color = Color::Rgb(0x0b, 0x3d, 0x91);
pub const NASA_RED: Color = Color::Rgb(0xfc, 0x3d, 0x21);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x2c, 0x3e, 0x66);
pub const HEADER_TEXT: Color = Color::Rgb(0xf0, 0xf4, 0xff);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x7a, 0x8b, 0xb0);
pub const POPUP_BORDER: Color = Color::Rgb(0xc8, 0xd4, 0xf0);
pub const STATUS_OK: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xff, 0x6b, 0x6b);
/// Background of the selected tile.
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x14, 0x1e, 0x3c);
pub const LINK_TEXT: Color = Color::Rgb(0x60, 0xa5, 0xfa);
