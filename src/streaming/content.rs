/*!
 * Heavyweight streaming content.
 *
 * `RealContent` stands in for the expensive part of a streaming stack:
 * loading it is the detectable event the proxy defers for as long as
 * possible.
 */

use log::info;

use crate::events::{Event, EventLog};
use crate::streaming::policy::Quality;
use crate::streaming::{PlayOutcome, StreamableContent};

/// Concrete heavyweight resource behind the proxy
#[derive(Debug)]
pub struct RealContent {
    /// Content title
    title: String,

    /// Running time in minutes
    duration_mins: u32,

    /// Quality this content plays at
    quality: Quality,

    /// Event log receiving playback events
    events: EventLog,
}

impl RealContent {
    /// Load the content
    ///
    /// Loading is the expensive step; it records a `ContentLoaded` event so
    /// callers can verify it happens at most once per owning proxy.
    pub fn load(title: &str, duration_mins: u32, quality: Quality, events: &EventLog) -> Self {
        info!("Loading content: {}", title);

        events.record(Event::ContentLoaded {
            title: title.to_string(),
        });

        Self {
            title: title.to_string(),
            duration_mins,
            quality,
            events: events.clone(),
        }
    }

    /// Get the content title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the running time in minutes
    pub fn duration_mins(&self) -> u32 {
        self.duration_mins
    }

    /// Get the playback quality
    pub fn quality(&self) -> Quality {
        self.quality
    }
}

impl StreamableContent for RealContent {
    /// Play the loaded content; the real resource has no gate of its own
    fn play(&mut self) -> PlayOutcome {
        info!("Playing '{}' in {} quality", self.title, self.quality);

        self.events.record(Event::PlaybackStarted {
            title: self.title.clone(),
            quality: self.quality,
        });

        PlayOutcome::Played {
            title: self.title.clone(),
            quality: self.quality,
        }
    }

    fn details(&mut self) -> String {
        format!(
            "Title: {}\nDuration: {} min\nQuality: {}",
            self.title, self.duration_mins, self.quality
        )
    }
}
