use scraper::{Html, Selector};

use crate::sanitizer::urls;

/// Pick a representative preview image from feed markup.
///
/// Returns the first `img` whose `src`, after normalization, passes the
/// same URL gate the sanitizer applies: an absolute http(s) URL or
/// nothing. Runs on preprocessed (not necessarily sanitized) content;
/// the gate holds either way. Never fails: unparseable markup simply
/// yields `None`.
pub fn extract_preview_image(markup: &str) -> Option<String> {
    let fragment = Html::parse_fragment(markup);
    let selector = Selector::parse("img[src]").ok()?;
    for element in fragment.select(&selector) {
        if let Some(src) = element.value().attr("src") {
            let src = urls::normalize(src);
            if urls::is_safe_absolute_url(&src) {
                return Some(src);
            }
        }
    }
    None
}
