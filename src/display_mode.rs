use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Criteria, Todo};

/// Which subset of todos a view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Finished,
    Unfinished,
    /// Wildcard: no constraint on `finished`.
    All,
}

impl DisplayMode {
    pub const FINISHED_BIT: u8 = 1;
    pub const UNFINISHED_BIT: u8 = 2;

    pub fn criteria(self) -> Criteria {
        match self {
            DisplayMode::Finished => Criteria::finished(true),
            DisplayMode::Unfinished => Criteria::finished(false),
            DisplayMode::All => Criteria::default(),
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            DisplayMode::Finished => todo.finished,
            DisplayMode::Unfinished => !todo.finished,
            DisplayMode::All => true,
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            DisplayMode::Finished => Self::FINISHED_BIT,
            DisplayMode::Unfinished => Self::UNFINISHED_BIT,
            DisplayMode::All => Self::FINISHED_BIT | Self::UNFINISHED_BIT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Finished => "finished",
            DisplayMode::Unfinished => "unfinished",
            DisplayMode::All => "all",
        }
    }
}

impl From<DisplayMode> for Criteria {
    fn from(mode: DisplayMode) -> Self {
        mode.criteria()
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finished" => Ok(DisplayMode::Finished),
            "unfinished" => Ok(DisplayMode::Unfinished),
            "all" => Ok(DisplayMode::All),
            other => Err(format!("unknown display mode: {other}")),
        }
    }
}
