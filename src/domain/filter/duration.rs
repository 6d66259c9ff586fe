// SPDX-License-Identifier: MPL-2.0
//! Duration buckets for the drill library.
//!
//! Boundaries are closed on the lower bucket:
//!
//! | Bucket   | Minutes          |
//! |----------|------------------|
//! | `Short`  | `d <= 15`        |
//! | `Medium` | `15 < d <= 30`   |
//! | `Long`   | `d > 30`         |

/// Upper bound (inclusive) of the short bucket, in minutes.
pub const SHORT_MAX_MINUTES: u32 = 15;

/// Upper bound (inclusive) of the medium bucket, in minutes.
pub const MEDIUM_MAX_MINUTES: u32 = 30;

/// Coarse duration class selected from the duration dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationBucket {
    Short,
    Medium,
    Long,
}

impl DurationBucket {
    /// All buckets in display order.
    pub const ALL: [DurationBucket; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Classifies a duration in minutes. Every value lands in exactly one bucket.
    #[must_use]
    pub fn classify(minutes: u32) -> Self {
        if minutes <= SHORT_MAX_MINUTES {
            Self::Short
        } else if minutes <= MEDIUM_MAX_MINUTES {
            Self::Medium
        } else {
            Self::Long
        }
    }

    /// Returns `true` if `minutes` falls in this bucket.
    #[must_use]
    pub fn contains(self, minutes: u32) -> bool {
        Self::classify(minutes) == self
    }

    /// Parses the control token (`short`, `medium`, `long`).
    ///
    /// Unknown tokens yield `None`, which callers treat as "no constraint".
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    /// Returns the control token for this bucket.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl std::fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short => write!(f, "Short (≤ {SHORT_MAX_MINUTES} min)"),
            Self::Medium => write!(f, "Medium ({SHORT_MAX_MINUTES}–{MEDIUM_MAX_MINUTES} min)"),
            Self::Long => write!(f, "Long (> {MEDIUM_MAX_MINUTES} min)"),
        }
    }
}
