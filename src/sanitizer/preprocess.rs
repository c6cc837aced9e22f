//! Textual normalization of feed payloads ahead of sanitization.
//!
//! Expands the Steam CDN macro placeholders, rewrites protocol-relative
//! attribute openings, converts the feed's BBCode dialect into HTML and
//! backfills line breaks for plain-prose items. Pure syntax rewriting:
//! nothing here validates URLs or removes content, so the output is
//! still untrusted and must go through the sanitizer before rendering.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const CLAN_IMAGE_MACRO: &str = "{STEAM_CLAN_IMAGE}";
const CLAN_IMAGE_BASE: &str = "https://clan.cloudflare.steamstatic.com/images";
const APP_IMAGE_MACRO: &str = "{STEAM_APP_IMAGE}";
const APP_IMAGE_BASE: &str = "https://cdn.cloudflare.steamstatic.com/steam/apps";

// Restricted to src/href openings so unrelated "//" in text survives.
static PROTOCOL_RELATIVE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)(src|href)=(["'])//"#).unwrap());

static BBCODE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[url=(.*?)\](.*?)\[/url\]").unwrap());

static BBCODE_IMG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[img\](.*?)\[/img\]").unwrap());

static BBCODE_INLINE: LazyLock<[(Regex, &'static str); 4]> = LazyLock::new(|| {
    [
        (
            Regex::new(r"(?is)\[b\](.*?)\[/b\]").unwrap(),
            "<strong>$1</strong>",
        ),
        (Regex::new(r"(?is)\[i\](.*?)\[/i\]").unwrap(), "<em>$1</em>"),
        (Regex::new(r"(?is)\[u\](.*?)\[/u\]").unwrap(), "<u>$1</u>"),
        (Regex::new(r"(?is)\[s\](.*?)\[/s\]").unwrap(), "<s>$1</s>"),
    ]
});

static BBCODE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[list\](.*?)\[/list\]").unwrap());

static BLOCK_OR_MEDIA_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:p|br|div|img|ul|ol|h[1-6]|blockquote|table|figure)\b").unwrap()
});

/// Normalize macros, protocol-relative attributes and BBCode into HTML.
///
/// Total: never fails, empty input yields empty output. Unmatched or
/// unclosed BBCode tags are left as literal text.
pub fn preprocess(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    // Macro and protocol substitutions run before BBCode expansion so
    // expanded attribute values are already absolute where possible.
    let text = raw
        .replace(CLAN_IMAGE_MACRO, CLAN_IMAGE_BASE)
        .replace(APP_IMAGE_MACRO, APP_IMAGE_BASE);
    let text = PROTOCOL_RELATIVE_ATTR
        .replace_all(&text, "${1}=${2}https://")
        .into_owned();

    let text = BBCODE_URL
        .replace_all(&text, r#"<a href="$1">$2</a>"#)
        .into_owned();
    let mut text = BBCODE_IMG
        .replace_all(&text, r#"<img src="$1" />"#)
        .into_owned();
    for (pattern, replacement) in BBCODE_INLINE.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    let mut text = BBCODE_LIST
        .replace_all(&text, |caps: &Captures<'_>| {
            format!("<ul>{}</ul>", expand_list_items(&caps[1]))
        })
        .into_owned();
    // Stray items outside any [list] scope run to end of input.
    if text.contains("[*]") {
        text = expand_list_items(&text);
    }

    // Plain prose: no block or media tag anywhere, so bare newlines are
    // the only paragraph structure the feed sent. Keep it.
    if !BLOCK_OR_MEDIA_TAG.is_match(&text) {
        text = text.replace("\r\n", "<br />").replace('\n', "<br />");
    }

    text
}

/// `[*]item` runs up to the next `[*]` or the end of the scope.
fn expand_list_items(scope: &str) -> String {
    let mut parts = scope.split("[*]");
    let mut out = String::from(parts.next().unwrap_or(""));
    for item in parts {
        out.push_str("<li>");
        out.push_str(item);
        out.push_str("</li>");
    }
    out
}
