//! Untrusted news-feed ingestion for a game-launcher client.
//!
//! Third-party feed payloads arrive as a mix of raw HTML, CDN macro
//! placeholders and BBCode-style markup, with no guarantee of
//! well-formedness and no reason to trust any of it. This crate turns
//! that content into markup that is safe to inject into the launcher's
//! rendering surface, and picks a representative preview image per item.
//!
//! The pipeline is `preprocess` (normalize macros/BBCode into HTML
//! syntax) followed by `sanitize` (allow-list tree filter), with preview
//! extraction running on the preprocessed form. Every stage is a pure,
//! synchronous function with no I/O; items can be processed concurrently
//! without coordination.

pub mod config;
pub mod feed;
pub mod sanitizer;

pub use config::Config;
pub use sanitizer::{ProcessedContent, SanitizeError};
