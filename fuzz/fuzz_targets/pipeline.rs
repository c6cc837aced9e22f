#![no_main]

use libfuzzer_sys::fuzz_target;

use gazette::sanitizer::{cleaner, preprocess, preview};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let raw = String::from_utf8_lossy(data);

    // The pipeline must never panic, whatever the feed sends
    let prepared = preprocess::preprocess(&raw);
    let cleaned = cleaner::sanitize(&prepared);
    let _ = preview::extract_preview_image(&prepared);

    // Re-sanitizing safe markup must be a no-op
    assert_eq!(cleaner::sanitize(&cleaned), cleaned);
});
