/*!
 * Tier-gated streaming access.
 *
 * This module implements policy-gated access to lazily constructed
 * streaming content:
 * - `policy`: subscription tiers, quality labels and the access rule set
 * - `content`: the heavyweight `RealContent` resource
 * - `proxy`: the access-gating `ContentProxy` wrapping lazy construction
 *
 * `RealContent` and `ContentProxy` both implement `StreamableContent`, so
 * callers can hold either behind the same interface.
 */

pub mod content;
pub mod policy;
pub mod proxy;

// Re-export main types
pub use content::RealContent;
pub use policy::{AccessDecision, Quality, Tier};
pub use proxy::ContentProxy;

/// Result of a play request
///
/// A denial is an ordinary value, not an error: the caller gets the
/// suggested fallback quality and can retry at that quality or upgrade.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayOutcome {
    /// Playback started
    Played {
        /// Content title
        title: String,
        /// Quality the content plays at
        quality: Quality,
    },

    /// The access policy denied the request
    Denied {
        /// Content title
        title: String,
        /// Quality that was requested
        quality: Quality,
        /// Quality the viewer is allowed to fall back to
        fallback: Quality,
    },
}

impl PlayOutcome {
    /// Check whether playback actually started
    pub fn is_played(&self) -> bool {
        matches!(self, Self::Played { .. })
    }
}

/// Common trait for playable streaming content
///
/// This trait defines the interface shared by the real resource and its
/// access-gating proxy, allowing them to be used interchangeably.
///
/// Note the documented asymmetry: `play` is subject to the access policy
/// (on the proxy), while `details` is always answered.
pub trait StreamableContent {
    /// Request playback
    ///
    /// # Returns
    /// * `PlayOutcome` - `Played` when playback starts, `Denied` with a
    ///   fallback suggestion when the access policy refuses
    fn play(&mut self) -> PlayOutcome;

    /// Get a formatted description of the content
    ///
    /// Always answered, regardless of the play policy.
    fn details(&mut self) -> String;
}
