mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::ModalController;
pub use intent::ModalIntent;
pub use reducer::ModalReducer;
pub use state::ModalViewState;
