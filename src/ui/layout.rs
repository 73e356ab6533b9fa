//! Screen geometry.
//!
//! Everything here is a pure function of the terminal area so that the
//! renderer and mouse hit-testing always agree on where things are.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;
pub const CONTROLS_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;

pub const TILE_WIDTH: u16 = 32;
pub const TILE_HEIGHT: u16 = 6;

/// Width of the start-date input box inside the controls row.
pub const DATE_FIELD_WIDTH: u16 = 20;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into the date controls row, the status line and the grid.
pub fn body_regions(body: Rect) -> (Rect, Rect, Rect) {
    let controls_height = body.height.min(CONTROLS_HEIGHT);
    let status_height = STATUS_HEIGHT.min(body.height.saturating_sub(controls_height));
    let controls = Rect {
        height: controls_height,
        ..body
    };
    let status = Rect {
        y: body.y + controls_height,
        height: status_height,
        ..body
    };
    let grid = Rect {
        y: body.y + controls_height + status_height,
        height: body.height.saturating_sub(controls_height + status_height),
        ..body
    };
    (controls, status, grid)
}

/// Start-date field, end-date field and fetch button.
pub fn control_fields(controls: Rect) -> (Rect, Rect, Rect) {
    let [start, end, button] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(DATE_FIELD_WIDTH),
            Constraint::Length(DATE_FIELD_WIDTH),
            Constraint::Length(16),
        ])
        .areas(controls);
    (start, end, button)
}

pub fn grid_area(area: Rect) -> Rect {
    let (_, body, _) = layout_regions(area);
    body_regions(body).2
}

pub fn start_field_area(area: Rect) -> Rect {
    let (_, body, _) = layout_regions(area);
    control_fields(body_regions(body).0).0
}

pub fn grid_columns(grid: Rect) -> usize {
    (grid.width / TILE_WIDTH).max(1) as usize
}

pub fn grid_visible_rows(grid: Rect) -> usize {
    (grid.height / TILE_HEIGHT).max(1) as usize
}

/// Rectangles of the tiles currently on screen, scrolled so that
/// `selected` is visible.
pub fn tile_rects(grid: Rect, count: usize, selected: usize) -> Vec<(usize, Rect)> {
    if count == 0 || grid.width == 0 || grid.height == 0 {
        return Vec::new();
    }
    let columns = grid_columns(grid);
    let visible_rows = grid_visible_rows(grid);
    let selected_row = selected.min(count - 1) / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let first = first_row * columns;
    let last = (first + columns * visible_rows).min(count);
    (first..last)
        .map(|index| {
            let row = (index / columns - first_row) as u16;
            let column = (index % columns) as u16;
            let x = grid.x + column * TILE_WIDTH;
            let y = grid.y + row * TILE_HEIGHT;
            let rect = Rect {
                x,
                y,
                width: TILE_WIDTH.min(grid.right().saturating_sub(x)),
                height: TILE_HEIGHT.min(grid.bottom().saturating_sub(y)),
            };
            (index, rect)
        })
        .collect()
}

/// Detail overlay area for the full terminal `area`.
pub fn modal_rect(area: Rect) -> Rect {
    let (_, body, _) = layout_regions(area);
    centered_rect(80, 90, body)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
