use crate::apod::MediaItem;
use crate::ui::mvi::UiState;

/// Detail overlay. At most one item is open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalViewState {
    #[default]
    Closed,
    Open {
        item: MediaItem,
    },
}

impl UiState for ModalViewState {}

impl ModalViewState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn item(&self) -> Option<&MediaItem> {
        match self {
            Self::Open { item } => Some(item),
            Self::Closed => None,
        }
    }
}
