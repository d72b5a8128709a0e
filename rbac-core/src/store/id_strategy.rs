use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a collection assigns ids to new records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// One past the highest id ever held by the collection. Ids are never
    /// reused, even after deletions.
    #[default]
    Monotonic,

    /// Current record count plus one. Matches the legacy mock API and can
    /// hand out an id that a live record already holds once records have
    /// been deleted.
    CountPlusOne,
}

impl IdStrategy {
    /// Compute the next raw id.
    ///
    /// `high_water` is the largest id the collection has ever held.
    pub fn next_id(self, len: usize, high_water: u64) -> u64 {
        match self {
            IdStrategy::Monotonic => high_water + 1,
            IdStrategy::CountPlusOne => len as u64 + 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Monotonic => "monotonic",
            IdStrategy::CountPlusOne => "count_plus_one",
        }
    }

    pub fn may_reuse_ids(&self) -> bool {
        matches!(self, IdStrategy::CountPlusOne)
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "monotonic" => Ok(IdStrategy::Monotonic),
            "count_plus_one" | "legacy" => Ok(IdStrategy::CountPlusOne),
            _ => Err(format!("Invalid id strategy: {}", s)),
        }
    }
}
