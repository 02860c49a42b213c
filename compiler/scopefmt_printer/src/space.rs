//! Spacing directives.

use std::fmt;
use std::str::FromStr;

/// Where the printer puts a space around a token.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Space {
    /// Do not add any extra spaces.
    #[default]
    None,
    /// Add a space before this token.
    Before,
    /// Add a space after this token.
    After,
    /// Add spaces before and after this token.
    Around,
}

impl Space {
    #[inline]
    pub const fn before(self) -> bool {
        matches!(self, Space::Before | Space::Around)
    }

    #[inline]
    pub const fn after(self) -> bool {
        matches!(self, Space::After | Space::Around)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Space::None => "none",
            Space::Before => "before",
            Space::After => "after",
            Space::Around => "around",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown spacing directive `{0}`, expected none, before, after or around")]
pub struct ParseSpaceError(String);

impl FromStr for Space {
    type Err = ParseSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Space::None),
            "before" => Ok(Space::Before),
            "after" => Ok(Space::After),
            "around" => Ok(Space::Around),
            _ => Err(ParseSpaceError(s.to_owned())),
        }
    }
}
