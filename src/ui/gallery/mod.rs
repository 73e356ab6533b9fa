mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{FetchTicket, GalleryController, FETCH_ERROR_PREFIX};
pub use intent::GalleryIntent;
pub use reducer::GalleryReducer;
pub use state::GalleryViewState;
