//! Explicit cache for assembled feed entries.
//!
//! Owned by whichever component performs the upstream fetch and passed
//! by handle, deliberately not process-global state. Entries expire
//! after a TTL and can be invalidated explicitly (e.g. on a user-forced
//! refresh).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::feed::types::FeedEntry;

#[derive(Debug)]
pub struct NewsCache {
    ttl: Duration,
    entries: HashMap<String, CachedEntry>,
}

#[derive(Debug)]
struct CachedEntry {
    stored_at: Instant,
    entry: FeedEntry,
}

impl NewsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Fresh entry for the game, if any. Expired entries are misses.
    pub fn get(&self, game_id: &str) -> Option<&FeedEntry> {
        let cached = self.entries.get(game_id)?;
        if cached.stored_at.elapsed() > self.ttl {
            return None;
        }
        Some(&cached.entry)
    }

    /// Store an entry under its own game id, replacing any previous one.
    pub fn insert(&mut self, entry: FeedEntry) {
        self.entries.insert(
            entry.game_id.clone(),
            CachedEntry {
                stored_at: Instant::now(),
                entry,
            },
        );
    }

    /// Drop one game's entry. Returns whether anything was removed.
    pub fn invalidate(&mut self, game_id: &str) -> bool {
        self.entries.remove(game_id).is_some()
    }

    /// Drop everything past its TTL, bounding memory on long sessions.
    pub fn purge_expired(&mut self) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, cached| cached.stored_at.elapsed() <= ttl);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
