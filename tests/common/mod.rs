/*!
 * Common test utilities for the rendergate test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

use rendergate::events::{Event, EventLog};
use rendergate::streaming::{ContentProxy, Quality, Tier};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a proxy for a standard test movie viewed from the given tier
pub fn create_test_proxy(quality: Quality, tier: Tier, events: &EventLog) -> ContentProxy {
    ContentProxy::new("Test Movie", 120, quality, tier, events.clone())
}

/// Counts `ContentLoaded` events recorded for the given title
pub fn count_loads(events: &EventLog, title: &str) -> usize {
    events.count_where(|e| matches!(e, Event::ContentLoaded { title: t } if t == title))
}

/// Counts `PlaybackStarted` events recorded for the given title
pub fn count_plays(events: &EventLog, title: &str) -> usize {
    events.count_where(|e| matches!(e, Event::PlaybackStarted { title: t, .. } if t == title))
}

/// Counts `AccessDenied` events recorded for the given title
pub fn count_denials(events: &EventLog, title: &str) -> usize {
    events.count_where(|e| matches!(e, Event::AccessDenied { title: t, .. } if t == title))
}

/// Counts `FontConstructed` events recorded for the given family
pub fn count_constructions(events: &EventLog, family: &str) -> usize {
    events.count_where(|e| matches!(e, Event::FontConstructed { family: f, .. } if f == family))
}
