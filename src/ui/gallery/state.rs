use crate::apod::MediaItem;
use crate::ui::mvi::UiState;

/// Visible state of the gallery area.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GalleryViewState {
    #[default]
    Idle,
    /// A request is in flight. `token` identifies the newest request.
    Loading { token: u64 },
    /// Items in the order the service layer returned them (ascending date).
    Loaded { items: Vec<MediaItem> },
    Error { message: String },
}

impl UiState for GalleryViewState {}

impl GalleryViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Token of the request currently awaited, if any.
    pub fn pending_token(&self) -> Option<u64> {
        match self {
            Self::Loading { token } => Some(*token),
            _ => None,
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        match self {
            Self::Loaded { items } => items,
            _ => &[],
        }
    }
}
