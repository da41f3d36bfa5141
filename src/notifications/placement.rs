// SPDX-License-Identifier: MPL-2.0
//! Screen anchors where notifications stack.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five zones where notifications stack independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    RightTop,
    LeftTop,
    RightBottom,
    LeftBottom,
    Center,
}

impl Placement {
    /// Every placement, in registry order.
    pub const ALL: [Placement; 5] = [
        Placement::RightTop,
        Placement::LeftTop,
        Placement::RightBottom,
        Placement::LeftBottom,
        Placement::Center,
    ];

    /// Returns the kebab-case key used in options and config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::RightTop => "right-top",
            Placement::LeftTop => "left-top",
            Placement::RightBottom => "right-bottom",
            Placement::LeftBottom => "left-bottom",
            Placement::Center => "center",
        }
    }

    /// Position of this placement in [`Placement::ALL`].
    #[must_use]
    pub(crate) fn slot(self) -> usize {
        match self {
            Placement::RightTop => 0,
            Placement::LeftTop => 1,
            Placement::RightBottom => 2,
            Placement::LeftBottom => 3,
            Placement::Center => 4,
        }
    }

    /// Returns true for the two bottom anchors, which stack upwards.
    #[must_use]
    pub fn is_bottom(self) -> bool {
        matches!(self, Placement::RightBottom | Placement::LeftBottom)
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|placement| placement.as_str() == s)
            .ok_or_else(|| Error::Placement(s.to_string()))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
