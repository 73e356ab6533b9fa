//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_apod;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use skywindow::apod::{FetchError, GalleryFetchService, MediaItem};
use skywindow::range::{DateRange, DateRangeManager};
use skywindow::ui::app::App;
use skywindow::ui::viewport::{Status, ViewPort};
use skywindow::view::{Detail, Tile};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Range manager whose default window is 2024-01-01..=2024-01-09.
pub fn january_range() -> DateRangeManager {
    DateRangeManager::new(date(2024, 1, 9))
}

pub fn make_app() -> App {
    App::new(date(2024, 1, 9), "A day on Venus is longer than a year on Venus.")
}

// -- ViewPort spy -------------------------------------------------------------

/// One call made through the [`ViewPort`] boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    GalleryItems(Vec<Tile>),
    Status(Status),
    Modal(Option<Detail>),
}

/// Records every write and keeps the latest value of each slot.
#[derive(Clone, Default)]
pub struct RecordingViewPort {
    calls: Arc<Mutex<Vec<ViewCall>>>,
}

impl RecordingViewPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    pub fn tiles(&self) -> Vec<Tile> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                ViewCall::GalleryItems(tiles) => Some(tiles.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn status(&self) -> Status {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                ViewCall::Status(status) => Some(status.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn modal(&self) -> Option<Detail> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                ViewCall::Modal(detail) => Some(detail.clone()),
                _ => None,
            })
            .flatten()
    }
}

impl ViewPort for RecordingViewPort {
    fn set_gallery_items(&self, tiles: Vec<Tile>) {
        self.calls.lock().push(ViewCall::GalleryItems(tiles));
    }

    fn set_status(&self, status: Status) {
        self.calls.lock().push(ViewCall::Status(status));
    }

    fn set_modal(&self, detail: Option<Detail>) {
        self.calls.lock().push(ViewCall::Modal(detail));
    }
}

// -- Fetch service fake -------------------------------------------------------

/// Returns queued results in order and records the ranges it was asked for.
#[derive(Clone, Default)]
pub struct ScriptedFetcher {
    results: Arc<Mutex<VecDeque<Result<Vec<MediaItem>, FetchError>>>>,
    ranges: Arc<Mutex<Vec<DateRange>>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, result: Result<Vec<MediaItem>, FetchError>) -> &Self {
        self.results.lock().push_back(result);
        self
    }

    pub fn ranges(&self) -> Vec<DateRange> {
        self.ranges.lock().clone()
    }
}

#[async_trait]
impl GalleryFetchService for ScriptedFetcher {
    async fn fetch(&self, range: DateRange) -> Result<Vec<MediaItem>, FetchError> {
        self.ranges.lock().push(range);
        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted result".to_string())))
    }
}
