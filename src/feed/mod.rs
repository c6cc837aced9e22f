pub mod assembler;
pub mod cache;
pub mod types;

pub use assembler::assemble_entry;
pub use cache::NewsCache;
pub use types::{FeedEntry, NewsItem, RawFeedItem};
