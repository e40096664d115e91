//! The key/payload pair stored in every tree node.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// Id reported by [`Record::sentinel`], used when there is no root to copy.
pub const SENTINEL_ID: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub id: i32,
    pub information: String,
}

impl Record {
    pub fn new(id: i32, information: impl Into<String>) -> Self {
        Record {
            id,
            information: information.into(),
        }
    }

    /// The `{-1, ""}` record written out when an empty tree is asked for its root.
    pub fn sentinel() -> Self {
        Record {
            id: SENTINEL_ID,
            information: String::new(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id == SENTINEL_ID && self.information.is_empty()
    }
}

impl Default for Record {
    fn default() -> Self {
        Record::sentinel()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.information)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRecordError {
    #[error("Missing ':' between id and information in {input:?}")]
    MissingSeparator { input: String },

    #[error("Invalid id {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses the `ID:INFO` form. Only the first `:` separates; the information
/// keeps any further colons and may be empty.
impl FromStr for Record {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((id, information)) = s.split_once(':') else {
            return Err(ParseRecordError::MissingSeparator {
                input: s.to_string(),
            });
        };
        let id = id
            .trim()
            .parse::<i32>()
            .map_err(|source| ParseRecordError::InvalidId {
                value: id.to_string(),
                source,
            })?;
        Ok(Record::new(id, information))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_default() {
        let record = Record::default();
        assert_eq!(record.id, -1);
        assert_eq!(record.information, "");
        assert!(record.is_sentinel());
        assert!(!Record::new(-1, "x").is_sentinel());
    }

    #[test]
    fn display_is_id_space_information() {
        assert_eq!(Record::new(5, "alpha").to_string(), "5 alpha");
        assert_eq!(Record::new(-3, "two words").to_string(), "-3 two words");
        assert_eq!(Record::new(7, "").to_string(), "7 ");
    }

    #[test]
    fn parse_splits_on_first_colon() {
        assert_eq!("5:alpha".parse::<Record>(), Ok(Record::new(5, "alpha")));
        assert_eq!(" 12 :a:b".parse::<Record>(), Ok(Record::new(12, "a:b")));
        assert_eq!("-4:".parse::<Record>(), Ok(Record::new(-4, "")));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "5 alpha".parse::<Record>(),
            Err(ParseRecordError::MissingSeparator {
                input: "5 alpha".to_string()
            })
        );
        let err = "five:alpha".parse::<Record>().unwrap_err();
        assert!(matches!(err, ParseRecordError::InvalidId { ref value, .. } if value == "five"));
        assert!(err.to_string().starts_with("Invalid id \"five\""));
    }
}
