// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The interactive flag grid
//!
//! A fixed `cols` × `rows` arena of tiles in three colours. Tiles lean
//! towards the pointer (parallax) and sway gently when idle; in puzzle mode
//! clicking a tile cycles its colour until every column band matches.
//!
//! [`FlagGrid`] is the pure state machine, driven by explicit
//! [`FlagGrid::tick`] calls. [`FlagWidget`] binds it to a [`RenderHost`]
//! that supplies pointer events and animation frames.

pub mod grid;
pub mod motion;
pub mod widget;

pub use grid::{corruption_count, ClickOutcome, FlagGrid, Tile, TileStyle};
pub use motion::{MotionSettings, Pointer};
pub use widget::{Bounds, FlagWidget, FrameHandle, RenderHost};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tile colour, in band order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileColor {
    /// First third of the columns
    Green,
    /// Middle third
    White,
    /// Last third
    Orange,
}

impl TileColor {
    /// All colours in index order
    pub const ALL: [Self; 3] = [Self::Green, Self::White, Self::Orange];

    /// Colour index: 0 green, 1 white, 2 orange
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Green => 0,
            Self::White => 1,
            Self::Orange => 2,
        }
    }

    /// Colour for an index, modulo 3
    #[must_use]
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 3]
    }

    /// The colour a click advances to
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The two colours other than this one
    #[must_use]
    pub fn others(self) -> [Self; 2] {
        [self.next(), self.next().next()]
    }

    /// Target band of column `col` in a grid of `cols` columns
    #[must_use]
    pub fn band(col: usize, cols: usize) -> Self {
        Self::from_index(col * 3 / cols.max(1))
    }

    /// CSS colour reference
    #[must_use]
    pub fn css_var(self) -> &'static str {
        match self {
            Self::Green => "var(--flag-green)",
            Self::White => "var(--flag-white)",
            Self::Orange => "var(--flag-orange)",
        }
    }

    /// Lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::White => "white",
            Self::Orange => "orange",
        }
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the grid is coloured on construction and on scramble
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagMode {
    /// Every tile at its band colour
    Banded,
    /// Equal thirds in a random arrangement; decorative
    #[default]
    Shuffled,
    /// Bands with a corrupted subset to click back into place
    Puzzle,
}

impl FlagMode {
    /// Whether tiles accept clicks as a game
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Puzzle)
    }

    /// Lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Banded => "banded",
            Self::Shuffled => "shuffled",
            Self::Puzzle => "puzzle",
        }
    }
}

impl fmt::Display for FlagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlagMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "banded" => Ok(Self::Banded),
            "shuffled" => Ok(Self::Shuffled),
            "puzzle" => Ok(Self::Puzzle),
            other => Err(format!("unknown flag mode: {other} (expected banded, shuffled or puzzle)")),
        }
    }
}

/// Construction options, also the `[flag]` section of the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagOptions {
    /// Columns
    pub cols: usize,
    /// Rows
    pub rows: usize,
    /// Colouring mode
    pub mode: FlagMode,
    /// Fixed RNG seed for reproducible layouts
    pub seed: Option<u64>,
    /// Motion tuning
    pub motion: MotionSettings,
}

impl Default for FlagOptions {
    fn default() -> Self {
        Self {
            cols: 10,
            rows: 5,
            mode: FlagMode::Shuffled,
            seed: None,
            motion: MotionSettings::default(),
        }
    }
}
