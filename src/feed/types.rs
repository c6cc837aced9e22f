use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One untrusted item as delivered by the upstream feed API.
///
/// `raw_content` may contain raw HTML, macro placeholders, BBCode
/// tokens, bare newlines, or any mixture, with no well-formedness
/// guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFeedItem {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub raw_content: String,
    #[serde(default)]
    pub excerpt: String,
    pub published_at_epoch_seconds: i64,
    #[serde(default)]
    pub author: Option<String>,
}

impl RawFeedItem {
    /// Publication time as a proper timestamp. Out-of-range values from
    /// a hostile feed collapse to the epoch rather than failing.
    pub fn published_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.published_at_epoch_seconds, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// A feed item ready for display: content is sanitized markup, the
/// preview image (if any) is an absolute http(s) URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub content: String,
    pub preview_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub author: Option<String>,
}

/// All display-ready news for one game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    pub game_id: String,
    pub items: Vec<NewsItem>,
    pub assembled_at: DateTime<Utc>,
}
