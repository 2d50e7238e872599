//! Employee domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Job held by a school employee.
///
/// Stored as a `i16` column (0 = Teacher, 1 = Principal, 2 = Staff).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeePosition {
    Teacher = 0,
    Principal = 1,
    Staff = 2,
}

impl EmployeePosition {
    /// Convert from the stored column value. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Teacher),
            1 => Some(Self::Principal),
            2 => Some(Self::Staff),
            _ => None,
        }
    }

    pub fn as_i16(self) -> i16 {
        self as i16
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Principal => "principal",
            Self::Staff => "staff",
        }
    }
}

impl fmt::Display for EmployeePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown employee position: {0}")]
pub struct UnknownPosition(pub String);

impl FromStr for EmployeePosition {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "teacher" => Ok(Self::Teacher),
            "principal" => Ok(Self::Principal),
            "staff" => Ok(Self::Staff),
            _ => Err(UnknownPosition(s.to_owned())),
        }
    }
}
