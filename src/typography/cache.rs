/*!
 * Shared appearance cache.
 *
 * This module provides the flyweight cache for font appearances. Identical
 * attribute tuples resolve to the identical `Arc<Appearance>` instance, so
 * a document with thousands of glyphs only ever holds a handful of
 * appearance records.
 */

use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use log::{debug, info};

use crate::events::{Event, EventLog};
use crate::typography::appearance::{Appearance, AppearanceKey, FontStyle};

/// Appearance cache for storing and sharing font configurations
///
/// The cache lives for the whole process and never evicts; unbounded growth
/// is an accepted limitation for the bounded set of appearances a document
/// uses.
pub struct AppearanceCache {
    /// Internal cache storage
    cache: Arc<RwLock<HashMap<AppearanceKey, Arc<Appearance>>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Event log receiving construction events
    events: EventLog,
}

impl AppearanceCache {
    /// Create a new appearance cache recording into the given event log
    pub fn new(events: EventLog) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            events,
        }
    }

    /// Get the shared appearance for an attribute tuple, constructing it on
    /// first request
    ///
    /// For all calls with identical arguments the returned `Arc` points to
    /// the same instance; construction fires a `FontConstructed` event
    /// exactly once per distinct key.
    pub fn get(&self, family: &str, size: u32, style: FontStyle, color: &str) -> Arc<Appearance> {
        let key = AppearanceKey::new(family, size, style, color);

        {
            let cache = self.cache.read();
            if let Some(appearance) = cache.get(&key) {
                let mut hits = self.hits.write();
                *hits += 1;

                debug!("Appearance cache hit for {}", appearance.descriptor());
                return Arc::clone(appearance);
            }
        }

        let mut cache = self.cache.write();

        // Re-check under the write lock: a concurrent caller may have
        // inserted the same key after our read section released.
        if let Some(appearance) = cache.get(&key) {
            let mut hits = self.hits.write();
            *hits += 1;
            return Arc::clone(appearance);
        }

        let mut misses = self.misses.write();
        *misses += 1;

        let appearance = Arc::new(Appearance::new(family, size, style, color));

        info!(
            "Creating new font configuration: {}, {}pt, {}, {}",
            family, size, style, color
        );

        self.events.record(Event::FontConstructed {
            family: family.to_string(),
            size,
            style: style.to_string(),
            color: color.to_string(),
        });

        cache.insert(key, Arc::clone(&appearance));
        appearance
    }

    /// Get cache statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Get the event log this cache records into
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Get the number of distinct appearances constructed so far
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Drop all cached appearances and reset the counters
    ///
    /// Glyphs holding an `Arc` to a cleared appearance keep it alive; only
    /// the sharing of *future* requests is reset.
    pub fn clear(&self) {
        let mut cache = self.cache.write();
        cache.clear();

        let mut hits = self.hits.write();
        *hits = 0;

        let mut misses = self.misses.write();
        *misses = 0;

        debug!("Appearance cache cleared");
    }
}

impl Default for AppearanceCache {
    fn default() -> Self {
        Self::new(EventLog::new())
    }
}

impl Clone for AppearanceCache {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            events: self.events.clone(),
        }
    }
}
