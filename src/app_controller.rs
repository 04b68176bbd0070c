use anyhow::Result;
use log::{debug, info};

use crate::app_config::{Config, ScenarioConfig};
use crate::events::EventLog;
use crate::streaming::proxy::ContentProxy;
use crate::streaming::StreamableContent;
use crate::typography::cache::AppearanceCache;
use crate::typography::document::Document;

// @module: Application controller for the demo runs

/// Counts gathered over one full demo run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoSummary {
    /// Glyphs placed in the typeset document
    pub glyph_count: usize,

    /// Distinct appearances constructed by the cache
    pub appearance_count: usize,

    /// Play requests that started playback
    pub plays_allowed: usize,

    /// Play requests refused by the access policy
    pub plays_denied: usize,
}

/// Main application controller for the typography and streaming demos
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Get the configuration this controller runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run both demos, recording every observable step into `events`
    pub fn run(&self, events: &EventLog) -> Result<DemoSummary> {
        let (glyph_count, appearance_count) = self.run_typography(events)?;
        let (plays_allowed, plays_denied) = self.run_streaming(events)?;

        Ok(DemoSummary {
            glyph_count,
            appearance_count,
            plays_allowed,
            plays_denied,
        })
    }

    /// Typeset and render the configured document through a shared
    /// appearance cache
    ///
    /// Returns (glyph count, distinct appearance count).
    pub fn run_typography(&self, events: &EventLog) -> Result<(usize, usize)> {
        let cache = AppearanceCache::new(events.clone());
        let mut document = Document::new(events.clone());

        info!("Adding {} passages to the document", self.config.document.passages.len());

        for passage in &self.config.document.passages {
            let appearance = cache.get(&passage.family, passage.size, passage.style, &passage.color);
            document.add_text(&passage.text, &appearance, passage.x, passage.y, passage.x_step);
        }

        document.render();

        let (hits, misses, hit_rate) = cache.stats();
        info!(
            "Document statistics: {} glyphs, {} appearance objects, {:.2} glyphs per appearance",
            document.glyph_count(),
            cache.len(),
            document.sharing_ratio(&cache)
        );
        debug!(
            "Appearance cache: {} hits, {} misses ({:.0}% hit rate)",
            hits,
            misses,
            hit_rate * 100.0
        );

        Ok((document.glyph_count(), cache.len()))
    }

    /// Play through the configured streaming scenarios
    ///
    /// Returns (plays allowed, plays denied).
    pub fn run_streaming(&self, events: &EventLog) -> Result<(usize, usize)> {
        let mut plays_allowed = 0;
        let mut plays_denied = 0;

        for scenario in &self.config.scenarios {
            let (allowed, denied) = self.run_scenario(scenario, events);
            plays_allowed += allowed;
            plays_denied += denied;
        }

        Ok((plays_allowed, plays_denied))
    }

    /// Play one scenario through a fresh proxy
    fn run_scenario(&self, scenario: &ScenarioConfig, events: &EventLog) -> (usize, usize) {
        info!(
            "Viewer on the {} plan requests '{}' in {} quality",
            scenario.tier, scenario.title, scenario.quality
        );

        let mut proxy = ContentProxy::new(
            &scenario.title,
            scenario.duration_mins,
            scenario.quality,
            scenario.tier,
            events.clone(),
        );

        let mut allowed = 0;
        let mut denied = 0;

        for attempt in 1..=scenario.attempts {
            debug!("Play attempt {} of {}", attempt, scenario.attempts);

            if proxy.play().is_played() {
                allowed += 1;
            } else {
                denied += 1;
            }
        }

        if scenario.query_details {
            let details = proxy.details();
            info!("Details:\n{}", details);
        }

        (allowed, denied)
    }
}
