use std::fs;

use crate::config::Config;
use crate::sanitizer::{SanitizeError, process};

#[test]
fn test_process_steam_event_fixture() {
    let raw = fs::read_to_string("src/sanitizer/tests/fixtures/steam_event.txt")
        .expect("Failed to read test fixture");

    let result = process(&raw, &Config::default()).unwrap();

    // the hard block: nothing from the script survives
    assert!(!result.html.contains("script"));
    assert!(!result.html.contains("evil.example"));
    // no attribute is ever copied from input
    assert!(!result.html.contains("onerror"));

    assert!(result.html.contains("<h2>Midseason Update</h2>"));
    assert!(result.html.contains("<strong>Midseason Update</strong>"));
    assert!(result.html.contains("<ul>"));
    assert!(result.html.contains("<li>New ranked rotation"));
    assert!(result.html.contains("<li>Weapon balance pass"));
    // disallowed font wrapper vanishes, its allowed child survives
    assert!(result.html.contains("<b>clutch plays</b>"));
    assert!(!result.html.contains("<font"));
    assert!(result.html.contains(
        r#"<a href="https://store.steampowered.com/news/app/730" target="_blank" rel="noopener noreferrer">here</a>"#
    ));
    // BBCode image expanded through the macro, protocol-relative one rewritten
    assert!(result.html.contains(
        r#"<img src="https://clan.cloudflare.steamstatic.com/images/27766192/banner.png" loading="lazy">"#
    ));
    assert!(result.html.contains(
        r#"<img src="https://cdn.akamai.steamstatic.com/steam/apps/730/capsule.jpg" loading="lazy">"#
    ));

    // preview is the first safe image in document order
    assert_eq!(
        result.preview_image.as_deref(),
        Some("https://clan.cloudflare.steamstatic.com/images/27766192/banner.png")
    );
}

#[test]
fn test_process_is_idempotent_on_fixture() {
    let raw = fs::read_to_string("src/sanitizer/tests/fixtures/steam_event.txt")
        .expect("Failed to read test fixture");

    let config = Config::default();
    let first = process(&raw, &config).unwrap();
    let second = process(&first.html, &config).unwrap();
    assert_eq!(second.html, first.html);
}

#[test]
fn test_process_plain_prose() {
    let result = process("Server maintenance tonight.\nBack at 04:00 UTC.", &Config::default())
        .unwrap();
    assert_eq!(
        result.html,
        "Server maintenance tonight.<br>Back at 04:00 UTC."
    );
    assert_eq!(result.preview_image, None);
}

#[test]
fn test_process_rejects_oversized_content() {
    let config = Config::new(16, std::time::Duration::from_secs(300));
    let err = process(&"a".repeat(17), &config).unwrap_err();
    match err {
        SanitizeError::ContentTooLarge { size, limit } => {
            assert_eq!(size, 17);
            assert_eq!(limit, 16);
        }
    }
}

#[test]
fn test_process_empty_input() {
    let result = process("", &Config::default()).unwrap();
    assert_eq!(result.html, "");
    assert_eq!(result.preview_image, None);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use proptest::prelude::*;

    use crate::sanitizer::{cleaner, preprocess, preview, urls};

    fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z0-9 .,!?]{0,24}",
            Just("<b>bold</b>".to_string()),
            Just("<script>alert(1)</script>".to_string()),
            Just(r#"<font color="red">wrapped</font>"#.to_string()),
            Just(r#"<img src="https://cdn.test/a.png">"#.to_string()),
            Just(r#"<img src="/relative.png">"#.to_string()),
            Just(r#"<a href="javascript:alert(1)">x</a>"#.to_string()),
            Just(r#"<a href="//cdn.test/page">go</a>"#.to_string()),
            Just("<p>para</p>".to_string()),
            Just("[b]bb bold[/b]".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn test_pipeline_never_panics(raw in ".*") {
            let prepared = preprocess::preprocess(&raw);
            let _ = cleaner::sanitize(&prepared);
            let _ = preview::extract_preview_image(&prepared);
            let _ = urls::is_safe_absolute_url(&raw);
        }

        #[test]
        fn test_no_disallowed_tag_survives(raw in ".*") {
            let cleaned = cleaner::sanitize(&preprocess::preprocess(&raw));
            let reparsed = scraper::Html::parse_fragment(&cleaned);
            for node in reparsed.tree.nodes() {
                if let scraper::Node::Element(element) = node.value() {
                    prop_assert!(
                        element.name() == "html" || cleaner::is_allowed_tag(element.name()),
                        "disallowed tag survived: {}",
                        element.name()
                    );
                }
            }
        }

        #[test]
        fn test_sanitize_idempotent(fragments in prop::collection::vec(fragment(), 0..8)) {
            let raw = fragments.concat();
            let once = cleaner::sanitize(&raw);
            prop_assert_eq!(cleaner::sanitize(&once), once);
        }

        #[test]
        fn test_preview_is_absolute_http(raw in ".*") {
            if let Some(preview) = preview::extract_preview_image(&preprocess::preprocess(&raw)) {
                prop_assert!(preview.starts_with("http://") || preview.starts_with("https://"));
            }
        }
    }
}
