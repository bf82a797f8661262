// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Flag command - plays the tile grid in the terminal or prints its markup

use super::{resolve_locale, Globals};
use crate::flag::{FlagGrid, FlagMode, FlagOptions};
use crate::i18n::Translator;
use crate::tui::{self, Labels};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Overrides for the configured `[flag]` section
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FlagArgs {
    /// Columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Colouring mode (banded, shuffled, puzzle)
    #[arg(long)]
    pub mode: Option<FlagMode>,

    /// Shorthand for --mode puzzle
    #[arg(long, conflicts_with = "mode")]
    pub puzzle: bool,

    /// Fixed RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable parallax and idle motion
    #[arg(long, env = "FOLIO_REDUCED_MOTION")]
    pub reduced_motion: bool,

    /// Print static HTML instead of opening the terminal view
    #[arg(long)]
    pub html: bool,

    /// Locale for the on-screen labels
    #[arg(long)]
    pub locale: Option<String>,
}

impl FlagArgs {
    /// Apply the overrides to `base`
    #[must_use]
    pub fn options(&self, base: &FlagOptions) -> FlagOptions {
        let mut options = base.clone();
        if let Some(cols) = self.cols {
            options.cols = cols;
        }
        if let Some(rows) = self.rows {
            options.rows = rows;
        }
        if let Some(mode) = self.mode {
            options.mode = mode;
        }
        if self.puzzle {
            options.mode = FlagMode::Puzzle;
        }
        if self.seed.is_some() {
            options.seed = self.seed;
        }
        options
    }
}

/// Status line strings for `locale`
#[must_use]
pub fn labels(translator: &Translator, locale: &str) -> Labels {
    let defaults = Labels::default();
    Labels {
        title: translator.translate(locale, "flag.title", Some(&defaults.title)),
        hint: translator.translate(locale, "flag.hint", Some(&defaults.hint)),
        solved: translator.translate(locale, "flag.solved", Some(&defaults.solved)),
        remaining: translator.translate(locale, "flag.remaining", Some(&defaults.remaining)),
    }
}

/// Run the flag command
pub fn run(globals: &Globals, args: &FlagArgs) -> Result<()> {
    let options = args.options(&globals.config.flag);

    if args.html {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = FlagGrid::new(options.cols, options.rows, options.mode, options.motion, &mut rng)?;
        print!("{}", grid.to_html());
        return Ok(());
    }

    // Labels are a nicety; the flag plays without a site file
    let labels = match globals.load_site() {
        Ok(site) => {
            let locale = resolve_locale(&site, args.locale.as_deref());
            labels(site.content().translator(), &locale)
        }
        Err(e) => {
            debug!("Using built-in labels: {:#}", e);
            Labels::default()
        }
    };

    let solved = tui::run(&options, &labels, args.reduced_motion)?;
    if options.mode.is_interactive() && solved {
        println!("{}", labels.solved);
    }
    Ok(())
}
