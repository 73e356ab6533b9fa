//! Boundary between the controllers and whatever draws the screen.
//!
//! Controllers only ever write through [`ViewPort`]; the terminal front end
//! keeps a [`ViewSnapshot`] that the renderer reads each frame.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::view::{Detail, Tile};

/// Text shown above the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Ready { count: usize },
    Failed(String),
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Status::Idle => "Pick a start date and press f to fetch images.".to_string(),
            Status::Loading => "Loading…".to_string(),
            Status::Ready { count: 0 } => "No images in this window.".to_string(),
            Status::Ready { count: 1 } => "1 image".to_string(),
            Status::Ready { count } => format!("{} images", count),
            Status::Failed(message) => message.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Failed(_))
    }
}

/// Typed setters the controllers use to publish what should be on screen.
pub trait ViewPort: Send + Sync {
    fn set_gallery_items(&self, tiles: Vec<Tile>);
    fn set_status(&self, status: Status);
    fn set_modal(&self, detail: Option<Detail>);
}

/// Everything the core has written to the view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewSnapshot {
    pub tiles: Vec<Tile>,
    pub status: Status,
    pub modal: Option<Detail>,
}

/// [`ViewPort`] backing the terminal renderer.
#[derive(Clone, Default)]
pub struct TerminalViewPort {
    inner: Arc<Mutex<ViewSnapshot>>,
}

impl TerminalViewPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.inner.lock().clone()
    }
}

impl ViewPort for TerminalViewPort {
    fn set_gallery_items(&self, tiles: Vec<Tile>) {
        self.inner.lock().tiles = tiles;
    }

    fn set_status(&self, status: Status) {
        self.inner.lock().status = status;
    }

    fn set_modal(&self, detail: Option<Detail>) {
        self.inner.lock().modal = detail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text() {
        assert_eq!(Status::Loading.text(), "Loading…");
        assert_eq!(Status::Ready { count: 0 }.text(), "No images in this window.");
        assert_eq!(Status::Ready { count: 1 }.text(), "1 image");
        assert_eq!(Status::Ready { count: 9 }.text(), "9 images");
        assert!(Status::Failed("boom".to_string()).is_error());
    }

    #[test]
    fn clones_share_the_snapshot() {
        let view = TerminalViewPort::new();
        let writer = view.clone();
        writer.set_status(Status::Loading);
        assert_eq!(view.snapshot().status, Status::Loading);
    }
}
