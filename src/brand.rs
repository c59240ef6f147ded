//! Card brand labels.
//!
//! The labels match the strings the payment API reports in a card's `type`
//! field, so a brand classified locally compares equal to the one the API
//! returns for the same card.

use std::fmt;
use std::str::FromStr;

/// Card networks recognised by the brand classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardBrand {
    /// American Express - prefixes 34, 37
    AmericanExpress,
    /// Diners Club - prefixes 36, 300-305
    DinersClub,
    /// Discover - prefix 6011
    Discover,
    /// JCB - prefixes 2131, 1800 and any other 3
    Jcb,
    /// MasterCard - prefixes 51-55
    MasterCard,
    /// Visa - prefix 4
    Visa,
    /// No known prefix matched.
    #[default]
    Unknown,
}

impl CardBrand {
    /// Every brand, in label order.
    pub const ALL: [CardBrand; 7] = [
        Self::AmericanExpress,
        Self::DinersClub,
        Self::Discover,
        Self::Jcb,
        Self::MasterCard,
        Self::Visa,
        Self::Unknown,
    ];

    /// Returns the label used by the payment API.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AmericanExpress => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::MasterCard => "MasterCard",
            Self::Visa => "Visa",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for every brand except [`CardBrand::Unknown`].
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A brand label that does not name any [`CardBrand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBrandLabel(pub String);

impl fmt::Display for UnknownBrandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised card brand label {:?}", self.0)
    }
}

impl std::error::Error for UnknownBrandLabel {}

impl FromStr for CardBrand {
    type Err = UnknownBrandLabel;

    /// Parses an API label (`"Visa"`, `"American Express"`, ...). Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|brand| brand.name() == s)
            .ok_or_else(|| UnknownBrandLabel(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardBrand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// The API may report brands this crate does not classify; those read as Unknown.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CardBrand {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(label.parse().unwrap_or_default())
    }
}
