// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The tile arena: colours, puzzle state and per-tick styles

use super::motion::{
    celebration_scale, idle_delta, normalized_offset, pointer_delta, MotionSettings, Pointer,
    CELEBRATION_MS, PHASE_STEP, STAGGER_MS,
};
use super::{FlagMode, TileColor};
use crate::error::{FolioError, Result};
use crate::seo::head::escape;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Half-width of the random base rotation range, in degrees
pub const BASE_ROTATION_DEG: f64 = 6.0;
/// Share of tiles a scramble corrupts, in percent
pub const CORRUPT_PERCENT: usize = 12;
/// Fewest tiles a scramble corrupts
pub const MIN_CORRUPT: usize = 4;
/// Largest tile count a grid accepts
pub const MAX_TILES: usize = 65_536;

/// Last computed style of a tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    /// Pointer-driven rotation, degrees
    pub delta: f64,
    /// Idle rotation, degrees
    pub idle: f64,
    /// Celebration scale
    pub scale: f64,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            delta: 0.0,
            idle: 0.0,
            scale: 1.0,
        }
    }
}

/// One cell of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Column
    pub col: usize,
    /// Row
    pub row: usize,
    /// Fixed random rotation, degrees
    pub base_rotation: f64,
    /// Current colour
    pub color: TileColor,
    /// Horizontal offset from the grid centre, [-1, 1]
    pub offset_x: f64,
    /// Vertical offset from the grid centre, [-1, 1]
    pub offset_y: f64,
    /// Idle oscillation phase, radians
    pub phase: f64,
    /// Last computed style
    pub style: TileStyle,
}

impl Tile {
    /// Rendered rotation: base plus pointer and idle deltas
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.base_rotation + self.style.delta + self.style.idle
    }

    /// Offset vector from the grid centre
    #[must_use]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }
}

/// Result of clicking a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    /// The tile's new colour
    pub color: TileColor,
    /// Whether the grid is solved after the click
    pub solved: bool,
    /// Whether this click solved it
    pub just_solved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Celebration {
    started_at: Option<f64>,
}

/// The flag grid
#[derive(Debug, Clone)]
pub struct FlagGrid {
    cols: usize,
    rows: usize,
    mode: FlagMode,
    tiles: Vec<Tile>,
    pointer: Pointer,
    motion: MotionSettings,
    solved: bool,
    celebration: Option<Celebration>,
}

/// Number of tiles a scramble corrupts for a grid of `total` tiles
#[must_use]
pub fn corruption_count(total: usize) -> usize {
    // ceil(total * 12 / 100) without forming total * 12
    let fraction = total / 100 * CORRUPT_PERCENT + (total % 100 * CORRUPT_PERCENT).div_ceil(100);
    fraction.max(MIN_CORRUPT).min(total)
}

impl FlagGrid {
    /// Build a `cols` × `rows` grid coloured according to `mode`. Motion
    /// settings are brought into range first.
    pub fn new<R: Rng + ?Sized>(
        cols: usize,
        rows: usize,
        mode: FlagMode,
        motion: MotionSettings,
        rng: &mut R,
    ) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(FolioError::EmptyGrid { cols, rows });
        }
        let total = cols
            .checked_mul(rows)
            .filter(|&n| n <= MAX_TILES)
            .ok_or(FolioError::GridTooLarge { cols, rows, max: MAX_TILES })?;

        let tiles = (0..total)
            .map(|i| {
                let (col, row) = (i % cols, i / cols);
                #[allow(clippy::cast_precision_loss)]
                let phase = (col + row) as f64 * PHASE_STEP;
                Tile {
                    col,
                    row,
                    base_rotation: rng.random_range(-BASE_ROTATION_DEG..BASE_ROTATION_DEG),
                    color: TileColor::band(col, cols),
                    offset_x: normalized_offset(col, cols),
                    offset_y: normalized_offset(row, rows),
                    phase,
                    style: TileStyle::default(),
                }
            })
            .collect();

        let mut grid = Self {
            cols,
            rows,
            mode,
            tiles,
            pointer: Pointer::default(),
            motion: motion.sanitized(),
            solved: false,
            celebration: None,
        };

        match mode {
            FlagMode::Banded => {}
            FlagMode::Shuffled => grid.deal_shuffled(rng),
            FlagMode::Puzzle => grid.corrupt(rng),
        }
        grid.solved = grid.check_solved();
        Ok(grid)
    }

    /// Columns
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Construction mode
    #[must_use]
    pub fn mode(&self) -> FlagMode {
        self.mode
    }

    /// Tile count, always `cols * rows`
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a grid has at least one tile
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles, row-major
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Linear index of (`col`, `row`)
    #[must_use]
    pub fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| row * self.cols + col)
    }

    /// Tile at (`col`, `row`)
    #[must_use]
    pub fn tile(&self, col: usize, row: usize) -> Option<&Tile> {
        self.index_of(col, row).map(|i| &self.tiles[i])
    }

    /// Target colour of the tile at `index`
    #[must_use]
    pub fn target(&self, index: usize) -> TileColor {
        TileColor::band(index % self.cols, self.cols)
    }

    /// Whether every tile shows its target colour
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Tiles that differ from their target
    #[must_use]
    pub fn mismatched(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(i, t)| t.color != self.target(*i))
            .count()
    }

    /// Tile count per colour, indexed like [`TileColor::index`]
    #[must_use]
    pub fn color_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for tile in &self.tiles {
            counts[tile.color.index()] += 1;
        }
        counts
    }

    /// Whether the "scramble again" control should be shown
    #[must_use]
    pub fn show_scramble_control(&self) -> bool {
        self.mode.is_interactive() && self.solved
    }

    /// Whether assistive technology should skip the grid
    #[must_use]
    pub fn aria_hidden(&self) -> bool {
        !self.mode.is_interactive()
    }

    /// Whether the solved celebration is running
    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    /// Advance the tile at `index` to its next colour and re-check the grid
    pub fn click(&mut self, index: usize) -> Option<ClickOutcome> {
        let tile = self.tiles.get_mut(index)?;
        tile.color = tile.color.next();
        let color = tile.color;

        let was_solved = self.solved;
        self.solved = self.check_solved();
        let just_solved = self.solved && !was_solved;
        if just_solved {
            tracing::debug!("Flag solved");
            self.celebration = Some(Celebration { started_at: None });
        } else if !self.solved {
            self.celebration = None;
        }

        Some(ClickOutcome {
            color,
            solved: self.solved,
            just_solved,
        })
    }

    /// Settle a pending celebration at once. Used when no frames will run
    /// to play it.
    pub fn finish_celebration(&mut self) {
        self.celebration = None;
        for tile in &mut self.tiles {
            tile.style.scale = 1.0;
        }
    }

    /// Re-deal the shuffled layout, or corrupt the banded/puzzle layout
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.mode {
            FlagMode::Shuffled => self.deal_shuffled(rng),
            FlagMode::Banded | FlagMode::Puzzle => self.corrupt(rng),
        }
        self.solved = self.check_solved();
        self.finish_celebration();
    }

    /// Point the parallax target at (`x`, `y`) in [-1, 1]²
    pub fn set_pointer_target(&mut self, x: f64, y: f64) {
        self.pointer.set_target(x, y);
    }

    /// Let the parallax decay back to rest
    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    /// Pointer state
    #[must_use]
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Motion tuning
    #[must_use]
    pub fn motion(&self) -> &MotionSettings {
        &self.motion
    }

    /// One animation frame at `now_ms`: smooth the pointer and recompute
    /// every tile's style
    pub fn tick(&mut self, now_ms: f64) {
        let MotionSettings {
            strength,
            smoothing,
            idle_amplitude,
            idle_period_ms,
        } = self.motion;

        self.pointer.step(smoothing);
        let pointer = self.pointer.smoothed();

        let elapsed = self.celebration.as_mut().map(|c| {
            let start = *c.started_at.get_or_insert(now_ms);
            now_ms - start
        });

        for tile in &mut self.tiles {
            tile.style.delta = pointer_delta(tile.offset(), pointer, strength);
            tile.style.idle = idle_delta(now_ms, tile.phase, idle_amplitude, idle_period_ms);
            #[allow(clippy::cast_precision_loss)]
            let delay = (tile.row + tile.col) as f64 * STAGGER_MS;
            tile.style.scale = elapsed.map_or(1.0, |e| celebration_scale(e, delay));
        }

        #[allow(clippy::cast_precision_loss)]
        let total_ms = (self.cols + self.rows - 2) as f64 * STAGGER_MS + CELEBRATION_MS;
        if elapsed.is_some_and(|e| e > total_ms) {
            self.celebration = None;
        }
    }

    /// Put every tile back at rest: no parallax, no idle, scale 1
    pub fn reset_motion(&mut self) {
        self.pointer.reset();
        for tile in &mut self.tiles {
            tile.style = TileStyle::default();
        }
    }

    /// Static markup: tiles carry their rotation as CSS custom properties
    #[must_use]
    pub fn to_html(&self) -> String {
        let interactive = self.mode.is_interactive();
        let mut html = String::new();
        html.push_str(&format!(
            "<section class=\"flag\" data-mode=\"{}\" data-solved=\"{}\">\n",
            self.mode, self.solved
        ));
        html.push_str(&format!(
            "<div class=\"flag-grid\" style=\"grid-template-columns: repeat({}, minmax(0, 1fr))\"{}>\n",
            self.cols,
            if interactive { "" } else { " aria-hidden=\"true\"" }
        ));
        for (i, tile) in self.tiles.iter().enumerate() {
            let style = format!(
                "--base:{:.2}deg;--delta:{:.2}deg;--scale:{:.3};background-color:{}",
                tile.base_rotation,
                tile.style.delta + tile.style.idle,
                tile.style.scale,
                tile.color.css_var()
            );
            if interactive {
                let label = format!("Tile {}, {}: {}", tile.col + 1, tile.row + 1, tile.color);
                html.push_str(&format!(
                    "<button type=\"button\" class=\"tile\" data-index=\"{}\" aria-label=\"{}\" style=\"{}\"></button>\n",
                    i,
                    escape(&label),
                    style
                ));
            } else {
                html.push_str(&format!(
                    "<div class=\"tile\" aria-hidden=\"true\" style=\"{style}\"></div>\n"
                ));
            }
        }
        html.push_str("</div>\n</section>\n");
        html
    }

    fn check_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, t)| t.color == self.target(i))
    }

    /// Round-robin colours, then a uniform shuffle: exact thirds, new layout
    fn deal_shuffled<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut colors: Vec<TileColor> = (0..self.tiles.len()).map(TileColor::from_index).collect();
        colors.shuffle(rng);
        for (tile, color) in self.tiles.iter_mut().zip(colors) {
            tile.color = color;
        }
    }

    /// Reset to the bands, then move a subset of tiles off their target
    fn corrupt<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..self.tiles.len() {
            self.tiles[i].color = self.target(i);
        }
        let count = corruption_count(self.tiles.len());
        for i in index::sample(rng, self.tiles.len(), count) {
            let [a, b] = self.target(i).others();
            self.tiles[i].color = if rng.random_bool(0.5) { a } else { b };
        }
        tracing::debug!("Scrambled {} of {} tiles", count, self.tiles.len());
    }
}
