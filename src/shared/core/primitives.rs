use crate::shared::core::errors::ApplicationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier assigned by the store to activities and registrations.
///
/// Backed by a time-ordered UUID so ids sort in insertion order, which makes
/// them a stable tie-break for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Checks the shape of a caller supplied id before any storage access.
    pub fn parse(raw: &str) -> Result<Self, ApplicationError> {
        raw.parse()
            .map_err(|_| ApplicationError::BadRequest("Please enter correct id!".into()))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
