//! Yes/no flags and the loose boolean parser that produces them.
//!
//! Downstream collaborators read these flags as the literal strings `"yes"`
//! and `"no"`. Inside the crate they are a two-valued enum; the string form
//! only appears through [`Flag::as_str`], `Display` and serde.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolved yes/no flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    pub fn as_str(self) -> &'static str {
        match self {
            Flag::Yes => "yes",
            Flag::No => "no",
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Flag::Yes } else { Flag::No }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a loosely-typed boolean environment value.
///
/// Absent or empty input returns `default`. Any other input is compared
/// case-insensitively against `true`, `1` and `yes`: a match is
/// [`Flag::Yes`], anything else is [`Flag::No`] whatever the default was.
/// Values are not trimmed.
pub fn parse_env_boolean(raw: Option<&str>, default: Flag) -> Flag {
    match raw {
        None | Some("") => default,
        Some(value) => {
            let truthy = value.eq_ignore_ascii_case("true")
                || value == "1"
                || value.eq_ignore_ascii_case("yes");
            Flag::from(truthy)
        }
    }
}
