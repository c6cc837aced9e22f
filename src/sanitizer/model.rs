use serde::{Deserialize, Serialize};

/// Output of one pipeline pass over a raw feed payload.
///
/// `html` parses with only allow-listed tags and carries no attribute
/// that was not reconstructed by the sanitizer. `preview_image`, when
/// present, is an absolute http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedContent {
    pub html: String,
    pub preview_image: Option<String>,
}
