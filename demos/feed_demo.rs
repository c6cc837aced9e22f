//! Feeds a captured Steam-style payload through the assembler and
//! prints what the launcher UI would render.
//!
//! Run with: `cargo run --example feed_demo`

use anyhow::Result;
use gazette::config::Config;
use gazette::feed::{RawFeedItem, assemble_entry};

const SAMPLE_FEED: &str = r#"[
  {
    "id": "5124801",
    "title": "Midseason Update",
    "url": "https://store.steampowered.com/news/app/730/view/5124801",
    "rawContent": "[img]{STEAM_CLAN_IMAGE}/27766192/banner.png[/img]\n[b]Midseason Update[/b] is live!\n[list]\n[*]New ranked rotation\n[*]Weapon balance pass\n[/list]\nFull notes [url=https://store.steampowered.com/news/app/730]here[/url].",
    "excerpt": "Midseason Update is live!",
    "publishedAtEpochSeconds": 1721995200,
    "author": "dev-team"
  },
  {
    "id": "5124802",
    "title": "Server maintenance",
    "url": "https://store.steampowered.com/news/app/730/view/5124802",
    "rawContent": "Servers go down tonight at 02:00 UTC.\nExpected downtime: 2 hours.",
    "excerpt": "Servers go down tonight.",
    "publishedAtEpochSeconds": 1722081600
  }
]"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let items: Vec<RawFeedItem> = serde_json::from_str(SAMPLE_FEED)?;
    let config = Config::from_env()?;
    let entry = assemble_entry(
        "730",
        Some("https://cdn.cloudflare.steamstatic.com/steam/apps/730/header.jpg"),
        items,
        &config,
    );

    for item in &entry.items {
        println!("== {} ({})", item.title, item.published_at);
        if let Some(preview) = &item.preview_image {
            println!("preview: {preview}");
        }
        println!("{}\n", item.content);
    }

    Ok(())
}
