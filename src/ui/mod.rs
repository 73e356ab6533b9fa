pub mod app;
pub mod events;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod input;
pub mod layout;
pub mod modal;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod viewport;
pub mod worker;

pub use runtime::{run, LaunchOptions};
