//! Field policies and access kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// What a field permits.
///
/// Serialized with the short forms `rw`, `r`, `w` and `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Policy {
    /// Readable and writable.
    #[default]
    #[serde(rename = "rw", alias = "read-write")]
    ReadWrite,

    /// Readable, not writable.
    #[serde(rename = "r", alias = "read-only")]
    ReadOnly,

    /// Writable, not readable.
    #[serde(rename = "w", alias = "write-only")]
    WriteOnly,

    /// Hidden: neither readable nor writable.
    #[serde(rename = "none")]
    None,
}

impl Policy {
    /// Every policy, in declaration order.
    pub const ALL: [Policy; 4] = [
        Policy::ReadWrite,
        Policy::ReadOnly,
        Policy::WriteOnly,
        Policy::None,
    ];

    /// True for `ReadWrite` and `ReadOnly`.
    pub fn can_read(self) -> bool {
        matches!(self, Policy::ReadWrite | Policy::ReadOnly)
    }

    /// True for `ReadWrite` and `WriteOnly`.
    pub fn can_write(self) -> bool {
        matches!(self, Policy::ReadWrite | Policy::WriteOnly)
    }

    /// Check whether this policy permits `access`.
    pub fn permits(self, access: Access) -> bool {
        match access {
            Access::Read => self.can_read(),
            Access::Write => self.can_write(),
        }
    }

    /// The short form used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Policy::ReadWrite => "rw",
            Policy::ReadOnly => "r",
            Policy::WriteOnly => "w",
            Policy::None => "none",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rw" | "read-write" => Ok(Policy::ReadWrite),
            "r" | "read-only" => Ok(Policy::ReadOnly),
            "w" | "write-only" => Ok(Policy::WriteOnly),
            "none" => Ok(Policy::None),
            other => Err(CoreError::InvalidPolicy(other.to_string())),
        }
    }
}

/// The operation a permission check is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => f.write_str("read"),
            Access::Write => f.write_str("write"),
        }
    }
}
