/*!
 * Subscription tiers and the access rule set.
 *
 * The policy is a pure function over (tier, requested quality, view count).
 * Tiers and qualities are closed enums parsed strictly at the boundary, so
 * the rules never see a malformed tier string.
 */

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::errors::StreamingError;

/// Number of plays a free-tier viewer gets per content item
pub const FREE_VIEW_LIMIT: u32 = 3;

/// Subscription level gating access
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    // @tier: No subscription, capped views, no 4K
    #[default]
    Free,
    // @tier: Paid entry level, no 4K
    Basic,
    // @tier: Full access
    Premium,
}

impl Tier {
    // @returns: Lowercase tier identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Basic => "basic",
            Self::Premium => "premium",
        }
    }

    /// Quality a denied viewer of this tier is pointed at
    pub fn fallback_quality(&self) -> Quality {
        match self {
            Self::Basic => Quality::Hd,
            _ => Quality::Sd,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = StreamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            _ => Err(StreamingError::UnknownTier(s.to_string())),
        }
    }
}

/// Playback quality label
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    // @quality: Standard definition
    #[serde(rename = "SD")]
    Sd,
    // @quality: High definition
    #[default]
    #[serde(rename = "HD")]
    Hd,
    // @quality: Ultra high definition
    #[serde(rename = "4K")]
    FourK,
}

impl Quality {
    // @returns: Display label as used in catalogs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sd => "SD",
            Self::Hd => "HD",
            Self::FourK => "4K",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Quality {
    type Err = StreamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sd" => Ok(Self::Sd),
            "hd" => Ok(Self::Hd),
            "4k" => Ok(Self::FourK),
            _ => Err(StreamingError::UnknownQuality(s.to_string())),
        }
    }
}

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The play request may proceed
    Allowed,

    /// The play request is refused
    Denied {
        /// Quality the viewer is allowed to fall back to
        fallback: Quality,
    },
}

impl AccessDecision {
    /// Check whether the request may proceed
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Evaluate the access rule set for one play request
///
/// Rules, in order:
/// - free tier never gets 4K;
/// - free tier is capped at `FREE_VIEW_LIMIT` plays;
/// - basic tier never gets 4K;
/// - everything else is allowed.
pub fn evaluate(tier: Tier, quality: Quality, view_count: u32) -> AccessDecision {
    let denied = match tier {
        Tier::Free => quality == Quality::FourK || view_count >= FREE_VIEW_LIMIT,
        Tier::Basic => quality == Quality::FourK,
        Tier::Premium => false,
    };

    if denied {
        AccessDecision::Denied {
            fallback: tier.fallback_quality(),
        }
    } else {
        AccessDecision::Allowed
    }
}
