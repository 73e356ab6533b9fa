use crate::apod::MediaItem;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ModalIntent {
    /// Show `item`, replacing whatever was open.
    Open { item: MediaItem },
    /// Close button, click outside the content, or the cancel key.
    Close,
}

impl Intent for ModalIntent {}
