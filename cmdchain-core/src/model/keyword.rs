//!
//!  ``src/model/keyword.rs``
//!

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CmdError;

/// Closed set of command keywords a token can carry.
///
/// Serialized as its lowercase name; deserialized through `FromStr`, so config
/// files accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Keyword {
    Help,

    About,

    Version,

    Create,

    Drop,

    Database,

    Table,

    Row,

    Insert,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 9] = [
        Keyword::Help,
        Keyword::About,
        Keyword::Version,
        Keyword::Create,
        Keyword::Drop,
        Keyword::Database,
        Keyword::Table,
        Keyword::Row,
        Keyword::Insert,
    ];

    /// Lowercase name used on the command line and in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Help => "help",
            Keyword::About => "about",
            Keyword::Version => "version",
            Keyword::Create => "create",
            Keyword::Drop => "drop",
            Keyword::Database => "database",
            Keyword::Table => "table",
            Keyword::Row => "row",
            Keyword::Insert => "insert",
        }
    }

    /// Informational keywords that need no further arguments.
    #[must_use]
    pub const fn is_basic(self) -> bool {
        matches!(self, Keyword::Help | Keyword::Version | Keyword::About)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = CmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::ALL
            .into_iter()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CmdError::unknown_keyword(s))
    }
}

impl TryFrom<String> for Keyword {
    type Error = CmdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.as_str().to_owned()
    }
}
