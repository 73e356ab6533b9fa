use std::sync::Arc;

use crate::apod::{FetchError, GalleryFetchService, MediaItem};
use crate::range::{DateRange, DateRangeManager};
use crate::ui::mvi::Reducer;
use crate::ui::viewport::{Status, ViewPort};
use crate::view;

use super::intent::GalleryIntent;
use super::reducer::GalleryReducer;
use super::state::GalleryViewState;

/// Leading text of every fetch failure shown to the user.
pub const FETCH_ERROR_PREFIX: &str = "Error fetching images";

/// One issued fetch. The caller runs it and reports back with the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub range: DateRange,
}

/// Owns the gallery state and sequences fetch → render.
///
/// Overlapping fetches are resolved by token: each request supersedes the
/// previous one and only the newest completion is rendered.
pub struct GalleryController {
    state: GalleryViewState,
    range: DateRangeManager,
    view: Arc<dyn ViewPort>,
    last_token: u64,
    /// Items behind the rendered tiles, index-aligned with them.
    shown: Vec<MediaItem>,
}

impl GalleryController {
    pub fn new(range: DateRangeManager, view: Arc<dyn ViewPort>) -> Self {
        view.set_gallery_items(Vec::new());
        view.set_status(Status::Idle);
        Self {
            state: GalleryViewState::default(),
            range,
            view,
            last_token: 0,
            shown: Vec::new(),
        }
    }

    pub fn state(&self) -> &GalleryViewState {
        &self.state
    }

    pub fn range(&self) -> DateRange {
        self.range.range()
    }

    /// Applies a start-date edit. Invalid input keeps the current window.
    pub fn edit_start(&mut self, input: &str) -> DateRange {
        self.range.normalize(input)
    }

    /// Puts back a window saved earlier, e.g. when an edit is cancelled.
    pub fn restore_range(&mut self, range: DateRange) -> DateRange {
        self.range.normalize_date(range.start())
    }

    /// Number of tiles currently on screen.
    pub fn tile_count(&self) -> usize {
        self.shown.len()
    }

    /// Item behind the tile at `index`.
    pub fn tile_item(&self, index: usize) -> Option<&MediaItem> {
        self.shown.get(index)
    }

    /// Starts a new fetch for the current window.
    ///
    /// The gallery is cleared immediately so stale tiles never sit next to
    /// the loading indicator.
    pub fn request_fetch(&mut self) -> FetchTicket {
        self.last_token += 1;
        let ticket = FetchTicket {
            token: self.last_token,
            range: self.range.range(),
        };
        tracing::info!(token = ticket.token, range = %ticket.range, "fetch requested");

        self.dispatch(GalleryIntent::Request {
            token: ticket.token,
        });
        self.render();
        ticket
    }

    /// Reports the outcome of the fetch identified by `token`.
    ///
    /// Returns `false` when the result belongs to a superseded request and
    /// was dropped.
    pub fn complete_fetch(
        &mut self,
        token: u64,
        result: Result<Vec<MediaItem>, FetchError>,
    ) -> bool {
        if self.state.pending_token() != Some(token) {
            tracing::debug!(token, latest = self.last_token, "discarding stale fetch result");
            return false;
        }

        let intent = match result {
            Ok(items) => {
                tracing::info!(token, count = items.len(), "fetch succeeded");
                GalleryIntent::Succeeded { token, items }
            }
            Err(err) => {
                tracing::warn!(token, error = %err, "fetch failed");
                GalleryIntent::Failed {
                    token,
                    message: format!("{}: {}", FETCH_ERROR_PREFIX, err),
                }
            }
        };
        self.dispatch(intent);
        self.render();
        true
    }

    /// Runs one full cycle against `service` on the current task.
    pub async fn fetch_with(&mut self, service: &dyn GalleryFetchService) -> bool {
        let ticket = self.request_fetch();
        let result = service.fetch(ticket.range).await;
        self.complete_fetch(ticket.token, result)
    }

    fn dispatch(&mut self, intent: GalleryIntent) {
        self.state = GalleryReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    fn render(&mut self) {
        match &self.state {
            GalleryViewState::Idle => {
                self.shown.clear();
                self.view.set_gallery_items(Vec::new());
                self.view.set_status(Status::Idle);
            }
            GalleryViewState::Loading { .. } => {
                self.shown.clear();
                self.view.set_gallery_items(Vec::new());
                self.view.set_status(Status::Loading);
            }
            GalleryViewState::Loaded { items } => {
                let (tiles, shown): (Vec<_>, Vec<_>) = view::tiles(items).into_iter().unzip();
                self.shown = shown;
                self.view.set_status(Status::Ready { count: tiles.len() });
                self.view.set_gallery_items(tiles);
            }
            GalleryViewState::Error { message } => {
                self.shown.clear();
                self.view.set_gallery_items(Vec::new());
                self.view.set_status(Status::Failed(message.clone()));
            }
        }
    }
}
