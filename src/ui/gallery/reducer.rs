//! Reducer for the gallery state machine.

use crate::ui::mvi::Reducer;

use super::intent::GalleryIntent;
use super::state::GalleryViewState;

/// `Idle → Loading → {Loaded | Error} → Loading → …`
///
/// A completion only lands while the gallery is still waiting for that exact
/// token. Anything else is a superseded request and leaves the state alone.
pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryViewState;
    type Intent = GalleryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::Request { token } => GalleryViewState::Loading { token },

            GalleryIntent::Succeeded { token, items } => match state {
                GalleryViewState::Loading { token: pending } if pending == token => {
                    GalleryViewState::Loaded { items }
                }
                other => other,
            },

            GalleryIntent::Failed { token, message } => match state {
                GalleryViewState::Loading { token: pending } if pending == token => {
                    GalleryViewState::Error { message }
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::MediaItem;
    use chrono::NaiveDate;

    fn item(day: u32) -> MediaItem {
        MediaItem::image(NaiveDate::from_ymd_opt(2024, 1, day).unwrap(), "u")
    }

    #[test]
    fn request_from_any_state_starts_loading() {
        for state in [
            GalleryViewState::Idle,
            GalleryViewState::Loading { token: 1 },
            GalleryViewState::Loaded { items: vec![item(1)] },
            GalleryViewState::Error {
                message: "x".to_string(),
            },
        ] {
            let next = GalleryReducer::reduce(state, GalleryIntent::Request { token: 7 });
            assert_eq!(next, GalleryViewState::Loading { token: 7 });
        }
    }

    #[test]
    fn matching_success_loads_items() {
        let next = GalleryReducer::reduce(
            GalleryViewState::Loading { token: 3 },
            GalleryIntent::Succeeded {
                token: 3,
                items: vec![item(1), item(2)],
            },
        );
        assert_eq!(next.items().len(), 2);
    }

    #[test]
    fn matching_failure_sets_error() {
        let next = GalleryReducer::reduce(
            GalleryViewState::Loading { token: 3 },
            GalleryIntent::Failed {
                token: 3,
                message: "429".to_string(),
            },
        );
        assert_eq!(
            next,
            GalleryViewState::Error {
                message: "429".to_string()
            }
        );
    }

    #[test]
    fn stale_success_is_ignored_while_loading() {
        let next = GalleryReducer::reduce(
            GalleryViewState::Loading { token: 4 },
            GalleryIntent::Succeeded {
                token: 3,
                items: vec![item(1)],
            },
        );
        assert_eq!(next, GalleryViewState::Loading { token: 4 });
    }

    #[test]
    fn late_failure_does_not_replace_loaded() {
        let loaded = GalleryViewState::Loaded { items: vec![item(1)] };
        let next = GalleryReducer::reduce(
            loaded.clone(),
            GalleryIntent::Failed {
                token: 1,
                message: "late".to_string(),
            },
        );
        assert_eq!(next, loaded);
    }

    #[test]
    fn completion_without_request_is_ignored() {
        let next = GalleryReducer::reduce(
            GalleryViewState::Idle,
            GalleryIntent::Succeeded {
                token: 1,
                items: vec![item(1)],
            },
        );
        assert_eq!(next, GalleryViewState::Idle);
    }
}
