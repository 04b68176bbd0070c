use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::streaming::policy::{Quality, Tier};
use crate::typography::appearance::FontStyle;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Document to typeset in the typography demo
    #[serde(default)]
    pub document: DocumentConfig,

    /// Streaming scenarios to play through in the proxy demo
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<ScenarioConfig>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for the typeset document
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentConfig {
    /// Text passages, placed in order
    #[serde(default = "default_passages")]
    pub passages: Vec<PassageConfig>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            passages: default_passages(),
        }
    }
}

/// One text passage placed on a single line
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PassageConfig {
    // @field: The text to place
    pub text: String,

    // @field: Font family name
    #[serde(default = "default_family")]
    pub family: String,

    // @field: Point size
    #[serde(default = "default_size")]
    pub size: u32,

    // @field: Font style
    #[serde(default)]
    pub style: FontStyle,

    // @field: Color name
    #[serde(default = "default_color")]
    pub color: String,

    // @field: Left edge of the passage
    #[serde(default = "default_x")]
    pub x: i32,

    // @field: Baseline of the passage
    #[serde(default)]
    pub y: i32,

    // @field: Horizontal advance per glyph
    #[serde(default = "default_x_step")]
    pub x_step: i32,
}

/// One streaming scenario: a content item viewed from one tier
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScenarioConfig {
    // @field: Content title
    pub title: String,

    // @field: Running time in minutes
    #[serde(default = "default_duration_mins")]
    pub duration_mins: u32,

    // @field: Requested quality
    #[serde(default)]
    pub quality: Quality,

    // @field: Viewer subscription tier
    #[serde(default)]
    pub tier: Tier,

    // @field: Number of play attempts
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    // @field: Whether to also query details
    #[serde(default)]
    pub query_details: bool,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_family() -> String {
    "Arial".to_string()
}

fn default_size() -> u32 {
    12
}

fn default_color() -> String {
    "black".to_string()
}

fn default_x() -> i32 {
    10
}

fn default_x_step() -> i32 {
    8
}

fn default_duration_mins() -> u32 {
    90
}

fn default_attempts() -> u32 {
    1
}

// The canonical demo document: a title line, body text, one emphasized
// word, a code snippet, and a body-font reuse line.
fn default_passages() -> Vec<PassageConfig> {
    vec![
        PassageConfig {
            text: "SAMPLE DOCUMENT".to_string(),
            family: "Times New Roman".to_string(),
            size: 18,
            style: FontStyle::Bold,
            color: "blue".to_string(),
            x: 10,
            y: 10,
            x_step: 10,
        },
        PassageConfig {
            text: "This text renders through shared appearances.".to_string(),
            family: default_family(),
            size: default_size(),
            style: FontStyle::Normal,
            color: default_color(),
            x: 10,
            y: 40,
            x_step: 8,
        },
        PassageConfig {
            text: "optimizes".to_string(),
            family: default_family(),
            size: default_size(),
            style: FontStyle::Italic,
            color: default_color(),
            x: 10,
            y: 60,
            x_step: 8,
        },
        PassageConfig {
            text: "class Example: pass".to_string(),
            family: "Courier New".to_string(),
            size: 10,
            style: FontStyle::Normal,
            color: "gray".to_string(),
            x: 10,
            y: 80,
            x_step: 8,
        },
        PassageConfig {
            text: "Memory is saved.".to_string(),
            family: default_family(),
            size: default_size(),
            style: FontStyle::Normal,
            color: default_color(),
            x: 10,
            y: 100,
            x_step: 8,
        },
    ]
}

// The canonical demo scenarios: a free viewer hitting the 4K gate, the
// same movie on premium, and a free viewer running into the view cap.
fn default_scenarios() -> Vec<ScenarioConfig> {
    vec![
        ScenarioConfig {
            title: "The Enigma Code".to_string(),
            duration_mins: 114,
            quality: Quality::FourK,
            tier: Tier::Free,
            attempts: 1,
            query_details: true,
        },
        ScenarioConfig {
            title: "The Enigma Code".to_string(),
            duration_mins: 114,
            quality: Quality::FourK,
            tier: Tier::Premium,
            attempts: 1,
            query_details: false,
        },
        ScenarioConfig {
            title: "Wild Life".to_string(),
            duration_mins: 45,
            quality: Quality::Hd,
            tier: Tier::Free,
            attempts: 4,
            query_details: false,
        },
    ]
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        for passage in &self.document.passages {
            if passage.text.is_empty() {
                return Err(anyhow!("Passage text must not be empty"));
            }
            if passage.size == 0 {
                return Err(anyhow!("Font size must be at least 1pt for passage '{}'", passage.text));
            }
        }

        for scenario in &self.scenarios {
            if scenario.title.is_empty() {
                return Err(anyhow!("Scenario title must not be empty"));
            }
            if scenario.attempts == 0 {
                return Err(anyhow!("Scenario '{}' must attempt at least one play", scenario.title));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            document: DocumentConfig::default(),
            scenarios: default_scenarios(),
            log_level: LogLevel::default(),
        }
    }
}
