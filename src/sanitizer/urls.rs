use url::Url;

/// Rewrite a protocol-relative URL (`//host/path`) to explicit `https`.
///
/// All other strings pass through unchanged apart from surrounding
/// whitespace, which is trimmed so that padded attribute values behave
/// the same here, in the sanitizer and in preview extraction. No
/// validation happens at this stage.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(rest) = trimmed.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        trimmed.to_owned()
    }
}

/// The sole gate for accepting any `href` or media `src`.
///
/// True iff the value, after [`normalize`], parses as a URL with scheme
/// exactly `http` or `https`. Anything else is rejected: relative
/// paths, parse failures, `javascript:`, `data:`, `file:`, `vbscript:`.
///
/// Only the scheme is validated, not the host: an attacker-controlled
/// `https://` URL to an arbitrary host is accepted. Host allow-listing
/// is a policy decision that belongs to the embedding application.
pub fn is_safe_absolute_url(value: &str) -> bool {
    match Url::parse(&normalize(value)) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
