//! Travel-intent value objects: cluster ids, departure months, spontaneity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grouping id assigned by the external classifier
///
/// Only non-negative ids are valid; an unclustered plan is never represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct Cluster(i32);

impl Cluster {
    pub fn new(id: i32) -> Option<Self> {
        (id >= 0).then_some(Self(id))
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Cluster {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| format!("invalid cluster id: {value}"))
    }
}

impl From<Cluster> for i32 {
    fn from(cluster: Cluster) -> Self {
        cluster.0
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid cluster id: {s}"))?;
        Self::try_from(value)
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical departure month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartureMonth {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl DepartureMonth {
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Token exactly as the classifier was trained on it
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
            Self::July => "july",
            Self::August => "august",
            Self::September => "september",
            Self::October => "october",
            Self::November => "november",
            Self::December => "december",
        }
    }
}

/// Parses only the canonical lowercase token; callers normalize first.
impl FromStr for DepartureMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|month| month.as_str() == s)
            .ok_or_else(|| format!("'{s}' is not a month name"))
    }
}

impl fmt::Display for DepartureMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the traveler is open to spontaneous trips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spontaneity {
    Yes,
    No,
}

impl Spontaneity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub const fn is_spontaneous(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl FromStr for Spontaneity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(format!("expected 'yes' or 'no', got '{other}'")),
        }
    }
}

impl fmt::Display for Spontaneity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
