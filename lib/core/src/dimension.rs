//! Lifestyle dimensions
//!
//! The eight axes every neighbourhood is scored on. [`Dimension::ALL`] is the one
//! ordering shared by the keyword dictionary, the score table columns and the
//! user preference vector.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of lifestyle dimensions
pub const DIMENSION_COUNT: usize = 8;

/// A fixed lifestyle axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Nightlife,
    Peaceful,
    Walkability,
    Nature,
    Food,
    Safety,
    Transport,
    Family,
}

impl Dimension {
    /// All dimensions in table/vector order
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Nightlife,
        Dimension::Peaceful,
        Dimension::Walkability,
        Dimension::Nature,
        Dimension::Food,
        Dimension::Safety,
        Dimension::Transport,
        Dimension::Family,
    ];

    /// Position of this dimension in every vector and table row
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name used in the persisted table and in preference maps
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Nightlife => "Nightlife & Bars",
            Dimension::Peaceful => "Peaceful & Quiet",
            Dimension::Walkability => "Walkability",
            Dimension::Nature => "Nature & Parks",
            Dimension::Food => "Food & Restaurants",
            Dimension::Safety => "Safety",
            Dimension::Transport => "Public Transport",
            Dimension::Family => "Family-Friendly",
        }
    }

    /// Lower-case substrings that tag a review with this dimension.
    ///
    /// Peaceful & Quiet mixes calm and noise terms; a match does not flip the
    /// sign of the review polarity.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Dimension::Nightlife => &[
                "bar", "nightlife", "club", "pub", "party", "drinks", "cocktail", "tapas", "nightout",
            ],
            Dimension::Peaceful => &[
                "quiet", "peaceful", "calm", "relaxing", "tranquil", "silent", "noisy", "loud", "noise",
            ],
            Dimension::Walkability => &[
                "walk", "walking distance", "stroll", "walkable", "on foot", "nearby", "close to everything",
            ],
            Dimension::Nature => &[
                "park", "garden", "nature", "green", "trees", "outdoor", "fresh air", "beach",
            ],
            Dimension::Food => &[
                "restaurant", "food", "eat", "cafe", "coffee", "market", "cuisine", "bakery", "brunch",
            ],
            Dimension::Safety => &[
                "safe", "safety", "secure", "dangerous", "unsafe", "sketchy", "feel safe",
            ],
            Dimension::Transport => &[
                "metro", "bus", "transport", "subway", "train", "tram", "transit", "connection",
            ],
            Dimension::Family => &[
                "family", "kids", "children", "stroller", "playground", "child-friendly", "families",
            ],
        }
    }

    /// Case-insensitive containment test against any keyword
    pub fn matches(self, text: &str) -> bool {
        self.mentioned_in(&text.to_lowercase())
    }

    /// Like [`matches`](Self::matches) for text that is already lower-case
    #[inline]
    pub fn mentioned_in(self, lowered: &str) -> bool {
        contains_keyword(lowered, self.keywords())
    }

    /// Column names in table order
    pub fn column_names() -> [&'static str; DIMENSION_COUNT] {
        Self::ALL.map(Dimension::name)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownDimension(s.to_string()))
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Substring test of lower-case `lowered` against lower-case keywords
#[inline]
pub fn contains_keyword(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lowered.contains(kw))
}
