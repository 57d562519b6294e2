//! Strongly-typed value objects used by domain entities.
//!
//! Values coming from the catalog API are converted into these wrappers at the
//! boundary so that the rest of the application can treat them as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Unique identifier of a game in the external catalog.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(pub(crate) u64);

impl GameId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: u64) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `u64` backing this identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| TypeConstraintError::InvalidValue(s.to_string()))?;
        Self::new(value)
    }
}

/// Critic aggregation score in the `0..=100` range.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct Score(pub(crate) u8);

impl Score {
    pub const MAX: u8 = 100;

    /// Creates a score, rejecting values above [`Score::MAX`].
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value <= u32::from(Self::MAX) {
            Ok(Self(value as u8))
        } else {
            Err(TypeConstraintError::InvalidValue(format!(
                "score {value} exceeds {}",
                Self::MAX
            )))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of filled stars out of five.
    pub fn stars(self) -> u8 {
        (f32::from(self.0) / 20.0).round() as u8
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Score {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u32 {
    fn from(value: Score) -> Self {
        u32::from(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_id_rejects_zero() {
        assert_eq!(GameId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(GameId::new(3328).unwrap().get(), 3328);
    }

    #[test]
    fn game_id_parses_from_path_segment() {
        assert_eq!(" 42 ".parse::<GameId>().unwrap().get(), 42);
        assert!("abc".parse::<GameId>().is_err());
        assert!("0".parse::<GameId>().is_err());
    }

    #[test]
    fn score_is_bounded() {
        assert!(Score::new(100).is_ok());
        assert!(Score::new(101).is_err());
    }

    #[test]
    fn stars_round_to_nearest() {
        assert_eq!(Score::new(0).unwrap().stars(), 0);
        assert_eq!(Score::new(49).unwrap().stars(), 2);
        assert_eq!(Score::new(50).unwrap().stars(), 3);
        assert_eq!(Score::new(92).unwrap().stars(), 5);
    }
}
