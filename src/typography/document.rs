/*!
 * Glyphs and documents.
 *
 * A `Glyph` is one placed character holding a shared reference to its
 * `Appearance`; a `Document` is an ordered collection of glyphs. Rendering
 * walks the glyphs in insertion order and delegates drawing to each
 * glyph's appearance.
 */

use std::sync::Arc;
use log::info;

use crate::events::EventLog;
use crate::typography::appearance::Appearance;
use crate::typography::cache::AppearanceCache;

/// One placed unit of content referencing a shared appearance
#[derive(Debug, Clone)]
pub struct Glyph {
    // @field: The character to draw
    character: char,

    // @field: Shared appearance (flyweight reference, not owned)
    appearance: Arc<Appearance>,

    // @field: Horizontal position
    x: i32,

    // @field: Vertical position
    y: i32,
}

impl Glyph {
    /// Create a new glyph at a position
    pub fn new(character: char, appearance: Arc<Appearance>, x: i32, y: i32) -> Self {
        Self {
            character,
            appearance,
            x,
            y,
        }
    }

    /// Get the character this glyph draws
    pub fn character(&self) -> char {
        self.character
    }

    /// Get the shared appearance this glyph renders with
    pub fn appearance(&self) -> &Arc<Appearance> {
        &self.appearance
    }

    /// Get the glyph position as (x, y)
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Draw the glyph through its shared appearance
    pub fn draw(&self, events: &EventLog) {
        self.appearance.render(self.character, self.x, self.y, events);
    }
}

/// An ordered collection of glyphs rendering through shared appearances
pub struct Document {
    /// Glyphs in insertion order
    glyphs: Vec<Glyph>,

    /// Event log receiving render events
    events: EventLog,
}

impl Document {
    /// Create a new, empty document recording into the given event log
    pub fn new(events: EventLog) -> Self {
        Self {
            glyphs: Vec::new(),
            events,
        }
    }

    /// Append one glyph referencing the given shared appearance
    pub fn add_glyph(&mut self, character: char, appearance: Arc<Appearance>, x: i32, y: i32) {
        self.glyphs.push(Glyph::new(character, appearance, x, y));
    }

    /// Append a whole string on one line, advancing x by `x_step` per glyph
    pub fn add_text(&mut self, text: &str, appearance: &Arc<Appearance>, x: i32, y: i32, x_step: i32) {
        for (i, character) in text.chars().enumerate() {
            self.add_glyph(character, Arc::clone(appearance), x + (i as i32) * x_step, y);
        }
    }

    /// Render the document
    ///
    /// Glyphs are drawn in insertion order; render order is deterministic.
    pub fn render(&self) {
        info!("Rendering document ({} glyphs)", self.glyphs.len());

        for glyph in &self.glyphs {
            glyph.draw(&self.events);
        }
    }

    /// Get the glyphs in insertion order
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Get the number of glyphs in the document
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if the document has no glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyphs per distinct appearance in the given cache
    ///
    /// Returns 0.0 for an empty cache.
    pub fn sharing_ratio(&self, cache: &AppearanceCache) -> f64 {
        if cache.is_empty() {
            0.0
        } else {
            self.glyphs.len() as f64 / cache.len() as f64
        }
    }
}
