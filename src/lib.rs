/*!
 * # rendergate
 *
 * A Rust library demonstrating shared-appearance document rendering and
 * tier-gated streaming playback.
 *
 * ## Features
 *
 * - Deduplicated font appearances: identical attribute tuples resolve to
 *   the identical shared instance
 * - Documents of placed glyphs rendering through shared appearances
 * - A streaming content proxy that defers loading the heavyweight resource
 *   until first permitted use
 * - A subscription-tier access policy (free/basic/premium) with quality
 *   gating and a free-tier view cap
 * - Structured demo events for every observable side effect
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `typography`: Shared-appearance rendering:
 *   - `typography::appearance`: Immutable appearance records
 *   - `typography::cache`: The shared appearance cache
 *   - `typography::document`: Glyphs and documents
 * - `streaming`: Tier-gated content access:
 *   - `streaming::policy`: Tiers, qualities and the access rule set
 *   - `streaming::content`: The heavyweight real resource
 *   - `streaming::proxy`: The access-gating proxy
 * - `events`: Structured demo events and the shared event log
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod events;
pub mod streaming;
pub mod typography;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, DemoSummary};
pub use events::{Event, EventLog};
pub use streaming::{ContentProxy, PlayOutcome, Quality, RealContent, StreamableContent, Tier};
pub use typography::{Appearance, AppearanceCache, Document, FontStyle};
pub use errors::{AppError, StreamingError, TypographyError};
