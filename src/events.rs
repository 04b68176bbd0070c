/*!
 * Structured demo events.
 *
 * Every observable side effect of the typography and streaming cores is
 * recorded as an `Event` in a shared `EventLog` in addition to being logged
 * through the `log` facade. Tests assert on the recorded events instead of
 * scraping console output.
 */

use std::fmt;
use std::sync::Arc;
use parking_lot::RwLock;

use crate::streaming::policy::{Quality, Tier};

/// One observable side effect of a demo run
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A new font appearance was constructed by the cache (cache miss)
    FontConstructed {
        /// Font family name
        family: String,
        /// Point size
        size: u32,
        /// Style label (normal, bold, italic)
        style: String,
        /// Color name
        color: String,
    },

    /// A glyph was drawn through its shared appearance
    GlyphRendered {
        /// The character drawn
        character: char,
        /// Horizontal position
        x: i32,
        /// Vertical position
        y: i32,
        /// Appearance descriptor, e.g. "Arial 12pt normal, black"
        descriptor: String,
    },

    /// Heavyweight streaming content was loaded (at most once per proxy)
    ContentLoaded {
        /// Content title
        title: String,
    },

    /// A permitted play was recorded for usage analysis
    AccessAudited {
        /// Content title
        title: String,
        /// Wall-clock timestamp, HH:MM:SS
        timestamp: String,
    },

    /// Playback of loaded content started
    PlaybackStarted {
        /// Content title
        title: String,
        /// Quality the content plays at
        quality: Quality,
    },

    /// A play request was denied by the access policy
    AccessDenied {
        /// Content title
        title: String,
        /// Quality that was requested
        quality: Quality,
        /// Quality the caller is allowed to fall back to
        fallback: Quality,
    },

    /// Content details were queried (always permitted)
    DetailsQueried {
        /// Content title
        title: String,
        /// Tier of the querying viewer
        tier: Tier,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::FontConstructed { family, size, style, color } => {
                write!(f, "Creating new font configuration: {}, {}pt, {}, {}", family, size, style, color)
            }
            Event::GlyphRendered { character, x, y, descriptor } => {
                write!(f, "Rendering '{}' at ({}, {}) with font {}", character, x, y, descriptor)
            }
            Event::ContentLoaded { title } => write!(f, "Loading content: {}", title),
            Event::AccessAudited { title, timestamp } => {
                write!(f, "[{}] Access to '{}' recorded for usage analysis", timestamp, title)
            }
            Event::PlaybackStarted { title, quality } => {
                write!(f, "Playing '{}' in {} quality", title, quality)
            }
            Event::AccessDenied { title, quality, fallback } => {
                write!(f, "Access denied to '{}' in {} quality, fallback {}", title, quality, fallback)
            }
            Event::DetailsQueried { title, tier } => {
                write!(f, "Details of '{}' queried by a {} plan viewer", title, tier)
            }
        }
    }
}

/// Shared recorder for demo events
///
/// Cloning an `EventLog` shares the underlying storage, so the same log can
/// be handed to the cache, the document and any number of proxies. There is
/// no process-wide instance: every owner receives its log explicitly.
#[derive(Debug, Default)]
pub struct EventLog {
    /// Recorded events, in occurrence order
    events: Arc<RwLock<Vec<Event>>>,
}

impl EventLog {
    /// Create a new, empty event log
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append an event to the log
    pub fn record(&self, event: Event) {
        self.events.write().push(event);
    }

    /// Get a copy of all recorded events, in occurrence order
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.read().clone()
    }

    /// Count the events matching a predicate
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Event) -> bool,
    {
        self.events.read().iter().filter(|e| predicate(e)).count()
    }

    /// Get the number of recorded events
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Check if no events have been recorded
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Discard all recorded events
    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl Clone for EventLog {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}
