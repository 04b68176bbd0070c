/*!
 * Shared-appearance typography.
 *
 * This module implements document rendering over deduplicated font
 * appearances:
 * - `appearance`: immutable font-appearance records and their cache key
 * - `cache`: the shared appearance cache (get-or-create with identity sharing)
 * - `document`: glyphs and documents rendering through shared appearances
 *
 * An `Appearance` is expensive to construct and immutable once built, so
 * the cache hands out one shared instance per distinct attribute tuple.
 * Equal requests return the *same* instance, not merely an equal one.
 */

pub mod appearance;
pub mod cache;
pub mod document;

// Re-export main types
pub use appearance::{Appearance, AppearanceKey, FontStyle};
pub use cache::AppearanceCache;
pub use document::{Document, Glyph};
