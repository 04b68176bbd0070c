/*!
 * Access-gating content proxy.
 *
 * `ContentProxy` carries the content identity and defers loading the
 * heavyweight `RealContent` until it is first needed. Every play request
 * goes through the access policy first; a denied request leaves the proxy
 * completely unchanged (no load, no view-count change).
 */

use chrono::Local;
use log::{info, warn};

use crate::events::{Event, EventLog};
use crate::streaming::content::RealContent;
use crate::streaming::policy::{self, AccessDecision, Quality, Tier};
use crate::streaming::{PlayOutcome, StreamableContent};

/// Proxy gating access to lazily loaded streaming content
///
/// The wrapped `RealContent` is loaded at most once per proxy, on the first
/// permitted `play` or the first `details` call, whichever comes first.
#[derive(Debug)]
pub struct ContentProxy {
    /// Content title
    title: String,

    /// Running time in minutes
    duration_mins: u32,

    /// Quality this content plays at
    quality: Quality,

    /// Subscription tier of the viewer
    tier: Tier,

    /// Number of successful plays so far
    view_count: u32,

    /// Lazily loaded heavyweight resource
    real_content: Option<RealContent>,

    /// Event log receiving access events
    events: EventLog,
}

impl ContentProxy {
    /// Create a new proxy for a content item and viewer tier
    ///
    /// Nothing heavyweight happens here; the real content is not loaded
    /// until first use.
    pub fn new(title: &str, duration_mins: u32, quality: Quality, tier: Tier, events: EventLog) -> Self {
        Self {
            title: title.to_string(),
            duration_mins,
            quality,
            tier,
            view_count: 0,
            real_content: None,
            events,
        }
    }

    /// Get the content title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the quality this proxy requests
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Get the viewer tier this proxy checks against
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Get the number of successful plays so far
    pub fn view_count(&self) -> u32 {
        self.view_count
    }

    /// Check whether the heavyweight content has been loaded yet
    pub fn is_loaded(&self) -> bool {
        self.real_content.is_some()
    }

    /// Get or lazily load the wrapped content
    ///
    /// This is the only place the heavyweight load happens, shared by
    /// `play` and `details`, which is what makes the load-at-most-once
    /// guarantee hold across any interleaving of the two.
    fn loaded_content(&mut self) -> &mut RealContent {
        let Self {
            title,
            duration_mins,
            quality,
            events,
            real_content,
            ..
        } = self;

        real_content.get_or_insert_with(|| RealContent::load(title, *duration_mins, *quality, events))
    }
}

impl StreamableContent for ContentProxy {
    /// Request playback through the access policy
    ///
    /// On denial the proxy reports the fallback quality for this tier and
    /// changes nothing: the view count stays put and the real content is
    /// not loaded.
    fn play(&mut self) -> PlayOutcome {
        match policy::evaluate(self.tier, self.quality, self.view_count) {
            AccessDecision::Denied { fallback } => {
                warn!("Access denied to '{}' in {} quality", self.title, self.quality);
                warn!("Upgrade your subscription or choose {} quality", fallback);

                self.events.record(Event::AccessDenied {
                    title: self.title.clone(),
                    quality: self.quality,
                    fallback,
                });

                PlayOutcome::Denied {
                    title: self.title.clone(),
                    quality: self.quality,
                    fallback,
                }
            }
            AccessDecision::Allowed => {
                // Record viewing time for usage analysis
                let timestamp = Local::now().format("%H:%M:%S").to_string();
                info!("[{}] Access recorded for usage analysis", timestamp);

                self.events.record(Event::AccessAudited {
                    title: self.title.clone(),
                    timestamp,
                });

                self.view_count += 1;
                self.loaded_content().play()
            }
        }
    }

    /// Get the content details
    ///
    /// Detail queries bypass the play gate: every tier may ask, the query
    /// is recorded, and the view count is not touched. The query does load
    /// the content if nothing has yet.
    fn details(&mut self) -> String {
        info!("Details queried by a viewer on the {} plan", self.tier);

        self.events.record(Event::DetailsQueried {
            title: self.title.clone(),
            tier: self.tier,
        });

        self.loaded_content().details()
    }
}
