use std::sync::Arc;

use crate::apod::MediaItem;
use crate::ui::mvi::Reducer;
use crate::ui::viewport::ViewPort;
use crate::view;

use super::intent::ModalIntent;
use super::reducer::ModalReducer;
use super::state::ModalViewState;

/// Owns the detail overlay and fills it from the selected item.
pub struct ModalController {
    state: ModalViewState,
    view: Arc<dyn ViewPort>,
}

impl ModalController {
    pub fn new(view: Arc<dyn ViewPort>) -> Self {
        view.set_modal(None);
        Self {
            state: ModalViewState::default(),
            view,
        }
    }

    pub fn state(&self) -> &ModalViewState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn open(&mut self, item: MediaItem) {
        tracing::debug!(date = %item.date, "opening detail view");
        let detail = view::detail(&item);
        self.dispatch(ModalIntent::Open { item });
        self.view.set_modal(detail);
    }

    pub fn close(&mut self) {
        if self.state.is_open() {
            tracing::debug!("closing detail view");
        }
        self.dispatch(ModalIntent::Close);
        self.view.set_modal(None);
    }

    fn dispatch(&mut self, intent: ModalIntent) {
        self.state = ModalReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
