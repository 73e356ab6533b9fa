use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::apod::error::FetchError;
use crate::apod::types::MediaItem;
use crate::config::ApiConfig;
use crate::range::DateRange;

/// Source of gallery items for one date window.
///
/// Implementations return items sorted ascending by date.
#[async_trait]
pub trait GalleryFetchService: Send + Sync {
    async fn fetch(&self, range: DateRange) -> Result<Vec<MediaItem>, FetchError>;
}

/// HTTP client for the image-of-the-day endpoint.
pub struct ApodClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl ApodClient {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&api.endpoint).map_err(|e| {
            FetchError::Transport(format!("invalid endpoint '{}': {}", api.endpoint, e))
        })?;

        let mut builder = Client::builder();
        if api.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(api.timeout_seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: api.key.clone(),
        })
    }

    /// Full request URL for `range`, including the access key.
    pub fn request_url(&self, range: DateRange) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("start_date", &range.start_param())
            .append_pair("end_date", &range.end_param());
        url
    }
}

#[async_trait]
impl GalleryFetchService for ApodClient {
    async fn fetch(&self, range: DateRange) -> Result<Vec<MediaItem>, FetchError> {
        tracing::info!(start = %range.start_param(), end = %range.end_param(), "requesting gallery");

        let response = self.client.get(self.request_url(range)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RemoteService {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.bytes().await?;
        parse_items(&body)
    }
}

/// Decodes a response body and orders it by date.
///
/// The service does not promise any ordering, so the sort is part of the
/// contract. It is stable: items sharing a date keep their wire order.
pub fn parse_items(body: &[u8]) -> Result<Vec<MediaItem>, FetchError> {
    let mut items: Vec<MediaItem> = serde_json::from_slice(body)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    items.sort_by_key(|item| item.date);
    Ok(items)
}
