pub mod apod;
pub mod config;
pub mod facts;
pub mod logging;
pub mod range;
pub mod ui;
pub mod view;
