/*!
 * Tests for glyphs and documents
 */

use std::sync::Arc;

use rendergate::events::{Event, EventLog};
use rendergate::typography::appearance::FontStyle;
use rendergate::typography::cache::AppearanceCache;
use rendergate::typography::document::{Document, Glyph};

/// Test glyph accessors
#[test]
fn test_glyph_withConstructedValues_shouldExposeThem() {
    let cache = AppearanceCache::default();
    let appearance = cache.get("Arial", 12, FontStyle::Normal, "black");

    let glyph = Glyph::new('A', Arc::clone(&appearance), 10, 20);

    assert_eq!(glyph.character(), 'A');
    assert_eq!(glyph.position(), (10, 20));
    assert!(Arc::ptr_eq(glyph.appearance(), &appearance));
}

/// Test that add_text places one glyph per character with advancing x
#[test]
fn test_add_text_withMultipleCharacters_shouldAdvanceX() {
    let events = EventLog::new();
    let cache = AppearanceCache::new(events.clone());
    let mut document = Document::new(events);

    let appearance = cache.get("Arial", 12, FontStyle::Normal, "black");
    document.add_text("Hi!", &appearance, 10, 40, 8);

    assert_eq!(document.glyph_count(), 3);
    let glyphs = document.glyphs();
    assert_eq!(glyphs[0].character(), 'H');
    assert_eq!(glyphs[0].position(), (10, 40));
    assert_eq!(glyphs[1].character(), 'i');
    assert_eq!(glyphs[1].position(), (18, 40));
    assert_eq!(glyphs[2].character(), '!');
    assert_eq!(glyphs[2].position(), (26, 40));
}

/// Test that rendering draws the glyphs in insertion order
#[test]
fn test_render_withSeveralPassages_shouldDrawInInsertionOrder() {
    let events = EventLog::new();
    let cache = AppearanceCache::new(events.clone());
    let mut document = Document::new(events.clone());

    let heading = cache.get("Times New Roman", 18, FontStyle::Bold, "blue");
    let body = cache.get("Arial", 12, FontStyle::Normal, "black");

    document.add_text("AB", &heading, 10, 10, 10);
    document.add_text("cd", &body, 10, 40, 8);

    document.render();

    let drawn: Vec<char> = events
        .snapshot()
        .into_iter()
        .filter_map(|e| match e {
            Event::GlyphRendered { character, .. } => Some(character),
            _ => None,
        })
        .collect();

    assert_eq!(drawn, vec!['A', 'B', 'c', 'd']);
}

/// Test that rendering twice draws the same sequence twice
#[test]
fn test_render_calledTwice_shouldRepeatTheSequence() {
    let events = EventLog::new();
    let cache = AppearanceCache::new(events.clone());
    let mut document = Document::new(events.clone());

    let appearance = cache.get("Arial", 12, FontStyle::Normal, "black");
    document.add_text("ok", &appearance, 0, 0, 8);

    document.render();
    document.render();

    let drawn = events.count_where(|e| matches!(e, Event::GlyphRendered { .. }));
    assert_eq!(drawn, 4);
}

/// Test rendering an empty document
#[test]
fn test_render_withEmptyDocument_shouldDrawNothing() {
    let events = EventLog::new();
    let document = Document::new(events.clone());

    assert!(document.is_empty());
    document.render();

    assert_eq!(events.count_where(|e| matches!(e, Event::GlyphRendered { .. })), 0);
}

/// Test that glyphs of one passage share a single appearance
#[test]
fn test_add_text_withOnePassage_shouldShareOneAppearance() {
    let events = EventLog::new();
    let cache = AppearanceCache::new(events.clone());
    let mut document = Document::new(events);

    let appearance = cache.get("Arial", 12, FontStyle::Normal, "black");
    document.add_text("shared appearance", &appearance, 10, 40, 8);

    for glyph in document.glyphs() {
        assert!(Arc::ptr_eq(glyph.appearance(), &appearance));
    }
    assert_eq!(cache.len(), 1);
}

/// Test the sharing ratio statistic
#[test]
fn test_sharing_ratio_withTwoAppearances_shouldDivideGlyphsByAppearances() {
    let events = EventLog::new();
    let cache = AppearanceCache::new(events.clone());
    let mut document = Document::new(events);

    let heading = cache.get("Times New Roman", 18, FontStyle::Bold, "blue");
    let body = cache.get("Arial", 12, FontStyle::Normal, "black");

    document.add_text("AAAA", &heading, 10, 10, 10);
    document.add_text("BBBB", &body, 10, 40, 8);

    assert!((document.sharing_ratio(&cache) - 4.0).abs() < f64::EPSILON);
}

/// Test the sharing ratio against an empty cache
#[test]
fn test_sharing_ratio_withEmptyCache_shouldBeZero() {
    let document = Document::new(EventLog::new());
    let cache = AppearanceCache::default();

    assert_eq!(document.sharing_ratio(&cache), 0.0);
}
