pub mod amount;
pub mod listing_type;
pub mod percent;
pub mod tier;

pub use amount::Amount;
pub use listing_type::ListingType;
pub use percent::Percent;
pub use tier::TierName;
