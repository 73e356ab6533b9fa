use crate::ui::mvi::Reducer;

use super::intent::ModalIntent;
use super::state::ModalViewState;

pub struct ModalReducer;

impl Reducer for ModalReducer {
    type State = ModalViewState;
    type Intent = ModalIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ModalIntent::Open { item } => ModalViewState::Open { item },
            ModalIntent::Close => ModalViewState::Closed,
        }
    }
}
