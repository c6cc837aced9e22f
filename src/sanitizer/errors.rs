use thiserror::Error;

/// The pipeline's only signalled failure.
///
/// Everything else fails safe and silent: unknown tags are unwrapped,
/// blocked elements and unsafe URLs are dropped, malformed markup
/// degrades to whatever the parser recovers. Oversized input is the one
/// case where a silent fallback would produce subtly-wrong output, so
/// callers get an explicit error and decide whether to skip or truncate.
#[derive(Error, Debug)]
pub enum SanitizeError {
    #[error("content too large ({size} bytes, limit {limit})")]
    ContentTooLarge { size: usize, limit: usize },
}
