use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which list a record is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Crypto,
    Fiat,
}

impl ListType {
    pub const ALL: [ListType; 2] = [ListType::Crypto, ListType::Fiat];
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListType::Crypto => write!(f, "crypto"),
            ListType::Fiat => write!(f, "fiat"),
        }
    }
}

/// Record-set selection shown to the user. Switching it changes the
/// record snapshot and therefore requires an index rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFilter {
    Crypto,
    Fiat,
    #[default]
    All,
}

impl ListFilter {
    /// Lists included by this filter, in display order.
    pub fn list_types(self) -> &'static [ListType] {
        match self {
            ListFilter::Crypto => &[ListType::Crypto],
            ListFilter::Fiat => &[ListType::Fiat],
            ListFilter::All => &ListType::ALL,
        }
    }
}

impl fmt::Display for ListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListFilter::Crypto => write!(f, "crypto"),
            ListFilter::Fiat => write!(f, "fiat"),
            ListFilter::All => write!(f, "all"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown list filter {0:?} (expected crypto, fiat or all)")]
pub struct ParseListFilterError(String);

impl FromStr for ListFilter {
    type Err = ParseListFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crypto" => Ok(ListFilter::Crypto),
            "fiat" => Ok(ListFilter::Fiat),
            "all" => Ok(ListFilter::All),
            _ => Err(ParseListFilterError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parses_case_insensitively() {
        assert_eq!("Crypto".parse::<ListFilter>(), Ok(ListFilter::Crypto));
        assert_eq!(" fiat ".parse::<ListFilter>(), Ok(ListFilter::Fiat));
        assert_eq!("ALL".parse::<ListFilter>(), Ok(ListFilter::All));
        "stocks".parse::<ListFilter>().unwrap_err();
    }

    #[test]
    fn filter_display_round_trips() {
        for filter in [ListFilter::Crypto, ListFilter::Fiat, ListFilter::All] {
            assert_eq!(filter.to_string().parse::<ListFilter>(), Ok(filter));
        }
    }

    #[test]
    fn all_filter_lists_crypto_before_fiat() {
        assert_eq!(ListFilter::All.list_types(), &[ListType::Crypto, ListType::Fiat]);
        assert_eq!(ListFilter::Fiat.list_types(), &[ListType::Fiat]);
    }
}
