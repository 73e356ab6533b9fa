//! Remote image-of-the-day service: record types, errors, and the HTTP client.

mod client;
mod error;
mod types;

pub use client::{parse_items, ApodClient, GalleryFetchService};
pub use error::FetchError;
pub use types::{MediaItem, MediaType};
