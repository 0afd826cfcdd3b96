//! User preference vector

use nbhdfit_core::{Dimension, Error, Result, Vector, DIMENSION_COUNT};
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

pub const MIN_PRIORITY: i64 = 1;
pub const MAX_PRIORITY: i64 = 5;

/// Priorities at or above this count as high
pub const HIGH_PRIORITY: u8 = 4;

/// One priority in [1, 5] per dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserPreferences {
    priorities: [u8; DIMENSION_COUNT],
}

impl UserPreferences {
    /// Priorities in [`Dimension::ALL`] order
    pub fn new(priorities: [i64; DIMENSION_COUNT]) -> Result<Self> {
        let mut checked = [0u8; DIMENSION_COUNT];
        for dim in Dimension::ALL {
            let value = priorities[dim.index()];
            if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&value) {
                return Err(Error::InvalidPriority {
                    dimension: dim.name().to_string(),
                    value: value.to_string(),
                });
            }
            checked[dim.index()] = value as u8;
        }
        Ok(Self { priorities: checked })
    }

    /// Every dimension must be present; there is no default priority
    pub fn from_map(map: &HashMap<Dimension, i64>) -> Result<Self> {
        let mut priorities = [0i64; DIMENSION_COUNT];
        for dim in Dimension::ALL {
            priorities[dim.index()] = *map
                .get(&dim)
                .ok_or_else(|| Error::MissingPreference(dim.name().to_string()))?;
        }
        Self::new(priorities)
    }

    /// Parse a JSON object keyed by dimension name, e.g. `{"Safety": 4, ...}`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut map = HashMap::with_capacity(raw.len());
        for (name, value) in raw {
            let dim = name.parse::<Dimension>()?;
            let priority = value.as_i64().ok_or_else(|| Error::InvalidPriority {
                dimension: dim.name().to_string(),
                value: value.to_string(),
            })?;
            map.insert(dim, priority);
        }
        Self::from_map(&map)
    }

    #[inline]
    pub fn priority(&self, dim: Dimension) -> u8 {
        self.priorities[dim.index()]
    }

    pub fn priorities(&self) -> &[u8; DIMENSION_COUNT] {
        &self.priorities
    }

    /// The preference vector used for cosine similarity
    pub fn vector(&self) -> Vector {
        Vector::new(self.priorities.map(f64::from))
    }

    /// Dimensions rated [`HIGH_PRIORITY`] or above
    pub fn high_priority_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.priority(*d) >= HIGH_PRIORITY)
            .collect()
    }
}

impl FromStr for UserPreferences {
    type Err = Error;

    /// Eight comma-separated integers in dimension order
    fn from_str(s: &str) -> Result<Self> {
        let values: Vec<&str> = s.split(',').map(str::trim).collect();
        if values.len() != DIMENSION_COUNT {
            let missing = Dimension::ALL
                .get(values.len())
                .map(|d| d.name().to_string())
                .unwrap_or_else(|| format!("expected {} values, got {}", DIMENSION_COUNT, values.len()));
            return Err(Error::MissingPreference(missing));
        }

        let mut priorities = [0i64; DIMENSION_COUNT];
        for (dim, raw) in Dimension::ALL.into_iter().zip(values) {
            priorities[dim.index()] = raw.parse().map_err(|_| Error::InvalidPriority {
                dimension: dim.name().to_string(),
                value: raw.to_string(),
            })?;
        }
        Self::new(priorities)
    }
}
