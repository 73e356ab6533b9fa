use chrono::NaiveDate;
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::apod::{FetchError, MediaItem};
use crate::range::{DateRange, DateRangeManager};
use crate::ui::gallery::{FetchTicket, GalleryController, GalleryViewState};
use crate::ui::layout::{
    contains, grid_area, grid_columns, modal_rect, start_field_area, tile_rects,
};
use crate::ui::modal::{ModalController, ModalViewState};
use crate::ui::viewport::{TerminalViewPort, ViewSnapshot};

/// Longest text a `YYYY-MM-DD` field accepts.
const DATE_INPUT_MAX: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Gallery,
    StartDate,
}

#[derive(Debug)]
pub enum UiCommand {
    Fetch(FetchTicket),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    view: TerminalViewPort,
    gallery: GalleryController,
    modal: ModalController,
    /// Text of the start-date field while it is being edited.
    start_input: String,
    /// Window in effect when the start-date field gained focus.
    edit_origin: Option<DateRange>,
    selection: usize,
    today: NaiveDate,
    fact: &'static str,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(today: NaiveDate, fact: &'static str) -> Self {
        let view = TerminalViewPort::new();
        let range = DateRangeManager::new(today);
        let start_input = range.range().start_param();
        let gallery = GalleryController::new(range, Arc::new(view.clone()));
        let modal = ModalController::new(Arc::new(view.clone()));
        Self {
            should_quit: false,
            focus: Focus::Gallery,
            size: None,
            view,
            gallery,
            modal,
            start_input,
            edit_origin: None,
            selection: 0,
            today,
            fact,
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn fact(&self) -> &'static str {
        self.fact
    }

    pub fn range(&self) -> DateRange {
        self.gallery.range()
    }

    pub fn start_input(&self) -> &str {
        &self.start_input
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn view_snapshot(&self) -> ViewSnapshot {
        self.view.snapshot()
    }

    pub fn gallery_state(&self) -> &GalleryViewState {
        self.gallery.state()
    }

    pub fn modal_state(&self) -> &ModalViewState {
        self.modal.state()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Full terminal area as last reported, or a conventional 80x24.
    pub fn screen_area(&self) -> Rect {
        let (cols, rows) = self.size.unwrap_or((80, 24));
        Rect::new(0, 0, cols, rows)
    }

    // ========================================================================
    // Start-date field
    // ========================================================================

    pub fn focus_start_date(&mut self) {
        if self.focus != Focus::StartDate {
            self.edit_origin = Some(self.range());
        }
        self.focus = Focus::StartDate;
        self.start_input = self.range().start_param();
    }

    /// Leaves the field without applying the edit.
    ///
    /// The window is recomputed on every keystroke, so this puts back the
    /// one that was in effect when the field was focused.
    pub fn leave_start_date(&mut self) {
        if let Some(origin) = self.edit_origin.take() {
            self.gallery.restore_range(origin);
        }
        self.finish_editing();
    }

    fn finish_editing(&mut self) {
        self.edit_origin = None;
        self.focus = Focus::Gallery;
        self.start_input = self.range().start_param();
    }

    pub fn push_start_char(&mut self, ch: char) {
        if !(ch.is_ascii_digit() || ch == '-') || self.start_input.len() >= DATE_INPUT_MAX {
            return;
        }
        self.start_input.push(ch);
        self.gallery.edit_start(&self.start_input);
    }

    pub fn pop_start_char(&mut self) {
        self.start_input.pop();
        self.gallery.edit_start(&self.start_input);
    }

    /// Applies `input` as the new start date. Invalid text is ignored.
    pub fn apply_start_date(&mut self, input: &str) -> DateRange {
        let range = self.gallery.edit_start(input);
        if self.focus != Focus::StartDate {
            self.start_input = range.start_param();
        }
        range
    }

    /// Enter in the start-date field: apply, leave the field, fetch.
    pub fn submit_start_date(&mut self) -> FetchTicket {
        let input = self.start_input.clone();
        self.gallery.edit_start(&input);
        self.finish_editing();
        self.request_fetch()
    }

    // ========================================================================
    // Fetching
    // ========================================================================

    /// Issues a fetch for the current window and hands it to the worker.
    pub fn request_fetch(&mut self) -> FetchTicket {
        let ticket = self.gallery.request_fetch();
        self.selection = 0;

        if let Some(sender) = &self.command_sender {
            if let Err(err) = sender.try_send(UiCommand::Fetch(ticket)) {
                tracing::error!(error = %err, "could not hand fetch to worker");
                self.gallery.complete_fetch(
                    ticket.token,
                    Err(FetchError::Transport(format!("fetch worker unavailable: {}", err))),
                );
            }
        }
        ticket
    }

    pub fn on_fetch_completed(&mut self, token: u64, result: Result<Vec<MediaItem>, FetchError>) {
        if self.gallery.complete_fetch(token, result) {
            self.selection = 0;
        }
    }

    // ========================================================================
    // Tile selection and detail overlay
    // ========================================================================

    pub fn tile_count(&self) -> usize {
        self.gallery.tile_count()
    }

    /// Moves the selection by `dx` columns and `dy` rows, clamped to the grid.
    pub fn move_selection(&mut self, dx: i32, dy: i32) {
        let count = self.gallery.tile_count();
        if count == 0 {
            self.selection = 0;
            return;
        }
        let columns = grid_columns(grid_area(self.screen_area())) as i64;
        let current = self.selection.min(count - 1) as i64;
        let next = current + i64::from(dx) + i64::from(dy) * columns;
        self.selection = next.clamp(0, count as i64 - 1) as usize;
    }

    pub fn open_selected(&mut self) -> bool {
        self.open_tile(self.selection)
    }

    pub fn open_tile(&mut self, index: usize) -> bool {
        let Some(item) = self.gallery.tile_item(index).cloned() else {
            return false;
        };
        self.selection = index;
        self.modal.open(item);
        true
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Left click at terminal cell (`column`, `row`).
    pub fn on_click(&mut self, column: u16, row: u16) {
        let area = self.screen_area();

        if self.modal.is_open() {
            if !contains(modal_rect(area), column, row) {
                self.modal.close();
            }
            return;
        }

        if contains(start_field_area(area), column, row) {
            self.focus_start_date();
            return;
        }

        let grid = grid_area(area);
        let hit = tile_rects(grid, self.gallery.tile_count(), self.selection)
            .into_iter()
            .find(|(_, rect)| contains(*rect, column, row));
        if let Some((index, _)) = hit {
            self.open_tile(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        App::new(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(), "fact")
    }

    #[test]
    fn starts_with_default_range_and_idle() {
        let app = make_app();
        assert_eq!(app.range().start_param(), "2024-01-01");
        assert_eq!(app.start_input(), "2024-01-01");
        assert_eq!(app.gallery_state(), &GalleryViewState::Idle);
        assert!(!app.is_modal_open());
    }

    #[test]
    fn editing_recomputes_range_once_valid() {
        let mut app = make_app();
        app.focus_start_date();
        for _ in 0..10 {
            app.pop_start_char();
        }
        assert_eq!(app.range().start_param(), "2024-01-01");
        for ch in "2023-05-".chars() {
            app.push_start_char(ch);
        }
        // Partial input is a quiet no-op.
        assert_eq!(app.range().start_param(), "2024-01-01");
        app.push_start_char('1');
        app.push_start_char('0');
        assert_eq!(app.range().start_param(), "2023-05-10");
        assert_eq!(app.range().end_param(), "2023-05-18");
    }

    #[test]
    fn leaving_the_field_restores_the_window_it_started_with() {
        let mut app = make_app();
        app.focus_start_date();
        for _ in 0..10 {
            app.pop_start_char();
        }
        for ch in "2023-05-10".chars() {
            app.push_start_char(ch);
        }
        assert_eq!(app.range().start_param(), "2023-05-10");

        app.leave_start_date();
        assert_eq!(app.focus(), Focus::Gallery);
        assert_eq!(app.range().start_param(), "2024-01-01");
        assert_eq!(app.start_input(), "2024-01-01");
    }

    #[test]
    fn field_rejects_letters_and_long_input() {
        let mut app = make_app();
        app.focus_start_date();
        app.push_start_char('x');
        app.push_start_char('1');
        assert_eq!(app.start_input(), "2024-01-01");
    }

    #[test]
    fn send_failure_becomes_error_state() {
        let mut app = make_app();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        app.set_command_sender(tx);
        app.request_fetch();
        assert!(matches!(app.gallery_state(), GalleryViewState::Error { .. }));
    }

    #[test]
    fn open_selected_without_tiles_does_nothing() {
        let mut app = make_app();
        assert!(!app.open_selected());
        assert!(!app.is_modal_open());
    }
}
