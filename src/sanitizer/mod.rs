pub mod cleaner;
pub mod errors;
pub mod model;
pub mod preprocess;
pub mod preview;
pub mod urls;

#[cfg(test)]
mod tests;

pub use errors::SanitizeError;
pub use model::ProcessedContent;

use crate::config::Config;
use tracing::{instrument, warn};

/// Run one raw feed payload through the full pipeline.
///
/// Order matters: preprocessing normalizes macros and BBCode into HTML
/// syntax but performs no validation, so its output must always go
/// through [`cleaner::sanitize`] before rendering. Preview extraction
/// runs on the preprocessed form, applying the same URL gate
/// independently.
#[instrument(skip_all, fields(len = raw.len()))]
pub fn process(raw: &str, config: &Config) -> Result<ProcessedContent, SanitizeError> {
    if raw.len() > config.max_content_len() {
        warn!(
            size = raw.len(),
            limit = config.max_content_len(),
            "refusing oversized content"
        );
        return Err(SanitizeError::ContentTooLarge {
            size: raw.len(),
            limit: config.max_content_len(),
        });
    }

    let prepared = preprocess::preprocess(raw);
    let html = cleaner::sanitize(&prepared);
    let preview_image = preview::extract_preview_image(&prepared);

    Ok(ProcessedContent {
        html,
        preview_image,
    })
}
