/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use rendergate::app_config::{Config, LogLevel};
use rendergate::streaming::{Quality, Tier};
use rendergate::typography::FontStyle;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    // The canonical demo document and scenarios
    assert_eq!(config.document.passages.len(), 5);
    assert_eq!(config.scenarios.len(), 3);
    assert_eq!(config.log_level, LogLevel::Info);

    let heading = &config.document.passages[0];
    assert_eq!(heading.family, "Times New Roman");
    assert_eq!(heading.size, 18);
    assert_eq!(heading.style, FontStyle::Bold);

    let first = &config.scenarios[0];
    assert_eq!(first.title, "The Enigma Code");
    assert_eq!(first.quality, Quality::FourK);
    assert_eq!(first.tier, Tier::Free);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Empty passage text
    config.document.passages[0].text = "".to_string();
    assert!(config.validate().is_err());
    config.document.passages[0].text = "SAMPLE DOCUMENT".to_string();

    // Zero font size
    config.document.passages[1].size = 0;
    assert!(config.validate().is_err());
    config.document.passages[1].size = 12;

    // Empty scenario title
    config.scenarios[0].title = "".to_string();
    assert!(config.validate().is_err());
    config.scenarios[0].title = "The Enigma Code".to_string();

    // Zero play attempts
    config.scenarios[0].attempts = 0;
    assert!(config.validate().is_err());
    config.scenarios[0].attempts = 1;

    assert!(config.validate().is_ok());
}

/// Test writing and re-reading a config file
#[test]
fn test_config_file_roundtrip_withDefaultConfig_shouldPreserveValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("rendergate.json");

    let config = Config::default();
    config.to_file(&config_path)?;

    let loaded = Config::from_file(&config_path)?;
    assert_eq!(loaded.document.passages.len(), config.document.passages.len());
    assert_eq!(loaded.scenarios.len(), config.scenarios.len());
    assert_eq!(loaded.log_level, config.log_level);
    assert_eq!(loaded.scenarios[0].title, config.scenarios[0].title);
    assert_eq!(loaded.scenarios[0].quality, config.scenarios[0].quality);

    Ok(())
}

/// Test loading a minimal config relying on serde defaults
#[test]
fn test_from_file_withMinimalJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let content = r#"{
        "document": { "passages": [ { "text": "Hello" } ] },
        "scenarios": [ { "title": "Wild Life" } ]
    }"#;
    let config_path = common::create_test_file(&dir, "minimal.json", content)?;

    let config = Config::from_file(&config_path)?;

    let passage = &config.document.passages[0];
    assert_eq!(passage.text, "Hello");
    assert_eq!(passage.family, "Arial");
    assert_eq!(passage.size, 12);
    assert_eq!(passage.style, FontStyle::Normal);
    assert_eq!(passage.color, "black");
    assert_eq!(passage.x, 10);
    assert_eq!(passage.y, 0);
    assert_eq!(passage.x_step, 8);

    let scenario = &config.scenarios[0];
    assert_eq!(scenario.title, "Wild Life");
    assert_eq!(scenario.duration_mins, 90);
    assert_eq!(scenario.quality, Quality::Hd);
    assert_eq!(scenario.tier, Tier::Free);
    assert_eq!(scenario.attempts, 1);
    assert!(!scenario.query_details);

    Ok(())
}

/// Test loading a config with quality and tier labels
#[test]
fn test_from_file_withExplicitLabels_shouldParseEnums() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let content = r#"{
        "scenarios": [
            { "title": "The Enigma Code", "quality": "4K", "tier": "premium", "attempts": 2 }
        ],
        "log_level": "debug"
    }"#;
    let config_path = common::create_test_file(&dir, "labels.json", content)?;

    let config = Config::from_file(&config_path)?;

    assert_eq!(config.scenarios[0].quality, Quality::FourK);
    assert_eq!(config.scenarios[0].tier, Tier::Premium);
    assert_eq!(config.scenarios[0].attempts, 2);
    assert_eq!(config.log_level, LogLevel::Debug);

    Ok(())
}

/// Test loading a config with an invalid tier label
#[test]
fn test_from_file_withUnknownTier_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let content = r#"{ "scenarios": [ { "title": "X", "tier": "gold" } ] }"#;
    let config_path = common::create_test_file(&dir, "bad_tier.json", content)?;

    assert!(Config::from_file(&config_path).is_err());

    Ok(())
}

/// Test loading a missing file
#[test]
fn test_from_file_withMissingFile_shouldFail() {
    let result = Config::from_file("does-not-exist/rendergate.json");
    assert!(result.is_err());
}
