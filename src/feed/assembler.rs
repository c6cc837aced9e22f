use chrono::Utc;
use tracing::{instrument, warn};

use crate::config::Config;
use crate::feed::types::{FeedEntry, NewsItem, RawFeedItem};
use crate::sanitizer::{self, ProcessedContent, SanitizeError};

/// Turn one game's raw feed items into the display entity.
///
/// Each item is processed independently; `fallback_image` (typically the
/// game's library artwork) stands in when no safe preview image can be
/// extracted from the content itself.
#[instrument(skip(fallback_image, items, config), fields(game_id = %game_id, item_count = items.len()))]
pub fn assemble_entry(
    game_id: &str,
    fallback_image: Option<&str>,
    items: Vec<RawFeedItem>,
    config: &Config,
) -> FeedEntry {
    let items = items
        .into_iter()
        .map(|item| assemble_item(item, fallback_image, config))
        .collect();
    FeedEntry {
        game_id: game_id.to_owned(),
        items,
        assembled_at: Utc::now(),
    }
}

fn assemble_item(item: RawFeedItem, fallback_image: Option<&str>, config: &Config) -> NewsItem {
    let processed = match sanitizer::process(&item.raw_content, config) {
        Ok(processed) => processed,
        Err(SanitizeError::ContentTooLarge { size, limit }) => {
            // Oversized content is never rendered partially sanitized.
            // The excerpt is the next-best source; failing that, the
            // item survives with empty content.
            warn!(item_id = %item.id, size, limit, "content over limit, falling back to excerpt");
            sanitizer::process(&item.excerpt, config).unwrap_or_else(|_| ProcessedContent {
                html: String::new(),
                preview_image: None,
            })
        }
    };

    let preview_image = processed
        .preview_image
        .or_else(|| fallback_image.map(str::to_owned));

    NewsItem {
        published_at: item.published_at(),
        id: item.id,
        title: item.title,
        url: item.url,
        content: processed.html,
        preview_image,
        author: item.author,
    }
}
