use serde::{Serialize, Serializer};
use std::fmt;

/// Human-readable fit tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitLabel {
    Excellent,
    Great,
    Good,
    Fair,
}

impl FitLabel {
    /// Lower bound of each tier, inclusive, highest first
    pub const THRESHOLDS: [(f64, FitLabel); 3] = [
        (88.0, FitLabel::Excellent),
        (78.0, FitLabel::Great),
        (68.0, FitLabel::Good),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FitLabel::Excellent => "Excellent match",
            FitLabel::Great => "Great match",
            FitLabel::Good => "Good match",
            FitLabel::Fair => "Fair match",
        }
    }

    /// Display colour as a hex string
    pub fn colour(self) -> &'static str {
        match self {
            FitLabel::Excellent => "#00A699",
            FitLabel::Great => "#FF385C",
            FitLabel::Good => "#FC642D",
            FitLabel::Fair => "#B0B0B0",
        }
    }
}

/// Map a 0-100 fit score to its tier
pub fn classify_fit(score: f64) -> FitLabel {
    FitLabel::THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, label)| *label)
        .unwrap_or(FitLabel::Fair)
}

impl fmt::Display for FitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FitLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
