/*!
 * Font appearance records.
 *
 * An `Appearance` bundles the rendering attributes shared by many glyphs:
 * family, size, style and color. Appearances are immutable after
 * construction and are only created by the `AppearanceCache`, which
 * guarantees one shared instance per distinct attribute tuple.
 */

use std::fmt;
use anyhow::{anyhow, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::events::{Event, EventLog};

/// Font style variants supported by the renderer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    // @style: Regular weight
    #[default]
    Normal,
    // @style: Heavy weight
    Bold,
    // @style: Slanted
    Italic,
}

impl FontStyle {
    // @returns: Lowercase style label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Italic => "italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FontStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            _ => Err(anyhow!("Invalid font style: {}", s)),
        }
    }
}

/// Cache key identifying one appearance configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppearanceKey {
    /// Font family name
    family: String,

    /// Point size
    size: u32,

    /// Font style
    style: FontStyle,

    /// Color name
    color: String,
}

impl AppearanceKey {
    /// Create a new appearance key
    pub fn new(family: &str, size: u32, style: FontStyle, color: &str) -> Self {
        Self {
            family: family.to_string(),
            size,
            style,
            color: color.to_string(),
        }
    }
}

/// Immutable shared rendering-attribute record
///
/// Holds the four defining attributes of an appearance. Instances are owned
/// by the cache and shared read-only by every glyph referencing them.
#[derive(Debug, PartialEq, Eq)]
pub struct Appearance {
    /// Font family name
    family: String,

    /// Point size
    size: u32,

    /// Font style
    style: FontStyle,

    /// Color name
    color: String,
}

impl Appearance {
    /// Create a new appearance record
    ///
    /// Only the cache should call this; going through
    /// `AppearanceCache::get` is what preserves the sharing guarantee.
    pub(crate) fn new(family: &str, size: u32, style: FontStyle, color: &str) -> Self {
        Self {
            family: family.to_string(),
            size,
            style,
            color: color.to_string(),
        }
    }

    /// Get the font family name
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Get the point size
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get the font style
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Get the color name
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Human-readable descriptor, e.g. "Arial 12pt normal, black"
    pub fn descriptor(&self) -> String {
        format!("{} {}pt {}, {}", self.family, self.size, self.style, self.color)
    }

    /// Get the cache key for this appearance
    pub fn key(&self) -> AppearanceKey {
        AppearanceKey::new(&self.family, self.size, self.style, &self.color)
    }

    /// Draw one character at a position using this appearance
    ///
    /// Records a `GlyphRendered` event carrying the full descriptor.
    pub fn render(&self, character: char, x: i32, y: i32, events: &EventLog) {
        debug!(
            "Rendering '{}' at ({}, {}) with font {}",
            character,
            x,
            y,
            self.descriptor()
        );

        events.record(Event::GlyphRendered {
            character,
            x,
            y,
            descriptor: self.descriptor(),
        });
    }
}
