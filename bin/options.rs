use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the board is rendered on the terminal.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "ron::ser::to_string(self).map_err(|_| std::fmt::Error)?")]
#[serde(deny_unknown_fields, rename = "options", default)]
pub struct Options {
    /// Whether to draw pieces as Unicode glyphs rather than letters.
    pub glyphs: bool,

    /// Whether to mark the legal destinations of the selected piece.
    pub hints: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            glyphs: true,
            hints: true,
        }
    }
}

/// The reason why parsing [`Options`] failed.
#[derive(Debug, Display, PartialEq, Error, From)]
#[display(fmt = "failed to parse options")]
pub struct ParseOptionsError(ron::de::SpannedError);

impl FromStr for Options {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
