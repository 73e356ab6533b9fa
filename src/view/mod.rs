//! Pure rendering rules for a single gallery item.

mod media;

pub use media::{detail, tile, tiles, Detail, DetailVisual, Tile, TileVisual, UNTITLED};
