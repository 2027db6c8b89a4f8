use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::error::{Error, Result};

/// Sale mechanism of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    BuyItNow,
    MakeOffer,
    Classified,
}

impl ListingType {
    pub const ALL: [ListingType; 3] = [
        ListingType::BuyItNow,
        ListingType::MakeOffer,
        ListingType::Classified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::BuyItNow => "buy_it_now",
            ListingType::MakeOffer => "make_offer",
            ListingType::Classified => "classified",
        }
    }

    /// `None` for keys outside the closed set.
    pub fn from_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }
}

impl FromStr for ListingType {
    type Err = Error;

    /// Accepts `buy_it_now`, `Buy It Now`, `make-offer` and similar spellings.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c.to_ascii_lowercase() })
            .collect();

        match key.as_str() {
            "buy_it_now" => Ok(ListingType::BuyItNow),
            "make_offer" => Ok(ListingType::MakeOffer),
            "classified" => Ok(ListingType::Classified),
            _ => Err(Error::UnknownListingType(s.to_string())),
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
