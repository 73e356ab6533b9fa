use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Kind of media one record points at.
///
/// Anything other than `image` or `video` is kept as [`MediaType::Other`] so a
/// single unexpected record does not fail the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MediaType {
    Image,
    Video,
    #[default]
    Unknown,
    Other(String),
}

impl MediaType {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            "" => MediaType::Unknown,
            other => MediaType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Unknown => "",
            MediaType::Other(value) => value,
        }
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(|v| MediaType::from_wire(&v)).unwrap_or_default())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// An empty `hdurl` counts as missing so the detail view falls back to `url`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|v| !v.trim().is_empty()))
}

/// One image-of-the-day record. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaItem {
    pub date: NaiveDate,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(rename = "hdurl", default, deserialize_with = "blank_as_none")]
    pub hd_url: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl MediaItem {
    pub fn image(date: NaiveDate, url: impl Into<String>) -> Self {
        Self {
            date,
            title: None,
            media_type: MediaType::Image,
            url: url.into(),
            hd_url: None,
            explanation: None,
        }
    }

    pub fn video(date: NaiveDate, url: impl Into<String>) -> Self {
        Self {
            media_type: MediaType::Video,
            ..Self::image(date, url)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_hd_url(mut self, hd_url: impl Into<String>) -> Self {
        self.hd_url = Some(hd_url.into());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}
