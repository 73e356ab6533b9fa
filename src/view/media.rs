use chrono::NaiveDate;

use crate::apod::{MediaItem, MediaType};

/// Caption used when a record has no title.
pub const UNTITLED: &str = "(untitled)";

const VIDEO_LABEL: &str = "▶ Video";

/// What a grid tile shows in place of the media itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileVisual {
    /// Clickable thumbnail of a still image.
    Thumbnail { src: String, alt: String },
    /// Static surface marking playable content. Nothing is embedded in the grid.
    VideoPlaceholder { label: &'static str },
}

/// Compact grid form of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub visual: TileVisual,
    pub caption: String,
    pub date: NaiveDate,
}

/// Media shown in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailVisual {
    FullImage { src: String, alt: String },
    EmbeddedVideo { src: String },
}

/// Enlarged, fully described form of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub title: String,
    pub date: NaiveDate,
    pub visual: DetailVisual,
    pub explanation: String,
}

fn caption(item: &MediaItem) -> String {
    item.title.clone().unwrap_or_else(|| UNTITLED.to_string())
}

fn alt_text(item: &MediaItem) -> String {
    item.title.clone().unwrap_or_default()
}

/// Grid form of `item`, or `None` for media types the grid does not show.
pub fn tile(item: &MediaItem) -> Option<Tile> {
    let visual = match &item.media_type {
        MediaType::Image => TileVisual::Thumbnail {
            src: item.url.clone(),
            alt: alt_text(item),
        },
        MediaType::Video => TileVisual::VideoPlaceholder { label: VIDEO_LABEL },
        MediaType::Unknown | MediaType::Other(_) => {
            tracing::debug!(
                date = %item.date,
                media_type = item.media_type.as_str(),
                "skipping item with unsupported media type"
            );
            return None;
        }
    };

    Some(Tile {
        visual,
        caption: caption(item),
        date: item.date,
    })
}

/// Tiles for every showable item, paired with the item each came from.
pub fn tiles(items: &[MediaItem]) -> Vec<(Tile, MediaItem)> {
    items
        .iter()
        .filter_map(|item| tile(item).map(|t| (t, item.clone())))
        .collect()
}

/// Detail form of `item`. Images prefer the high-resolution URL.
pub fn detail(item: &MediaItem) -> Option<Detail> {
    let visual = match &item.media_type {
        MediaType::Image => DetailVisual::FullImage {
            src: item.hd_url.clone().unwrap_or_else(|| item.url.clone()),
            alt: alt_text(item),
        },
        MediaType::Video => DetailVisual::EmbeddedVideo {
            src: item.url.clone(),
        },
        MediaType::Unknown | MediaType::Other(_) => return None,
    };

    Some(Detail {
        title: caption(item),
        date: item.date,
        visual,
        explanation: item.explanation.clone().unwrap_or_default(),
    })
}
