use serde::{Deserialize, Serialize};
use std::fmt;

/// Seller status level. Variant order follows rising volume thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TierName {
    Standard,
    Silver,
    Gold,
    Diamond,
}

impl TierName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierName::Standard => "Standard",
            TierName::Silver => "Silver",
            TierName::Gold => "Gold",
            TierName::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for TierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
