use crate::apod::MediaItem;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GalleryIntent {
    /// User asked for a new fetch tagged with `token`.
    Request { token: u64 },
    /// Fetch `token` returned items.
    Succeeded { token: u64, items: Vec<MediaItem> },
    /// Fetch `token` failed with a user-facing message.
    Failed { token: u64, message: String },
}

impl Intent for GalleryIntent {}
