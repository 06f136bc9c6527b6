use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::geometry;

/// One of the 50 fixed two-letter state codes.
///
/// Internally an index into the static tables in [`crate::geometry`], so the
/// derived ordering is alphabetical by code. Unknown codes cannot be
/// constructed; the set of states is fixed and never user-created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u8);

impl StateId {
    /// Two-letter USPS code, e.g. `"CA"`.
    pub fn code(self) -> &'static str {
        geometry::CODES[self.0 as usize]
    }

    /// Display name, e.g. `"California"`.
    pub fn name(self) -> &'static str {
        geometry::NAMES[self.0 as usize]
    }

    /// Path geometry for the map, possibly [`geometry::PLACEHOLDER_PATH`].
    pub fn path(self) -> &'static str {
        geometry::PATHS[self.0 as usize]
    }

    /// All 50 states in code order.
    pub fn all() -> impl Iterator<Item = StateId> {
        (0..geometry::STATE_COUNT as u8).map(StateId)
    }
}

impl TryFrom<&str> for StateId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        geometry::CODES
            .binary_search(&value)
            .map(|idx| StateId(idx as u8))
            .map_err(|_| anyhow::anyhow!("Unknown state code: {value:?}"))
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for StateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for StateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        StateId::try_from(code.as_str()).map_err(serde::de::Error::custom)
    }
}

/// Who visited a state. Absence of a value means "none": an unvisited state
/// is represented by deletion, never by a stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ben,
    Matt,
    Both,
    Together,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ben => "ben",
            Status::Matt => "matt",
            Status::Both => "both",
            Status::Together => "together",
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ben" => Ok(Status::Ben),
            "matt" => Ok(Status::Matt),
            "both" => Ok(Status::Both),
            "together" => Ok(Status::Together),
            _ => Err(anyhow::anyhow!("Invalid status value: {value:?}")),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a state ended up in a user's visited list.
///
/// The derived ordering (`Individual < Separately < Together`) is the rank
/// used by the visit-kind sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VisitKind {
    Individual,
    Separately,
    Together,
}

impl VisitKind {
    pub fn label(self) -> &'static str {
        match self {
            VisitKind::Individual => "Individual",
            VisitKind::Separately => "Separately",
            VisitKind::Together => "Together",
        }
    }
}

/// Category selector for the visited-states list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCategory {
    User1,
    User2,
    Both,
    Together,
}

impl TryFrom<&str> for StatCategory {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user1" => Ok(StatCategory::User1),
            "user2" => Ok(StatCategory::User2),
            "both" => Ok(StatCategory::Both),
            "together" => Ok(StatCategory::Together),
            _ => Err(anyhow::anyhow!("Invalid category: {value:?}")),
        }
    }
}
