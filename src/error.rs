// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Library error type

use std::path::PathBuf;

/// Errors raised while loading site data or constructing library objects
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// The site file has no base URL
    #[error("site_url is required in the site file")]
    MissingSiteUrl,

    /// A grid needs at least one column and one row
    #[error("grid must have at least one column and one row (got {cols}x{rows})")]
    EmptyGrid {
        /// Requested columns
        cols: usize,
        /// Requested rows
        rows: usize,
    },

    /// The grid would hold more tiles than a flag can usefully show
    #[error("grid of {cols}x{rows} exceeds the {max} tile limit")]
    GridTooLarge {
        /// Requested columns
        cols: usize,
        /// Requested rows
        rows: usize,
        /// Largest tile count accepted
        max: usize,
    },

    /// Theme mode string not recognised
    #[error("unknown theme mode: {0} (expected system, light or dark)")]
    UnknownThemeMode(String),

    /// Export format string not recognised
    #[error("unknown export format: {0} (expected html or json)")]
    UnknownFormat(String),

    /// A file could not be read or written
    #[error("failed to access {path}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A TOML file could not be parsed
    #[error("failed to parse {path}")]
    Toml {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// A JSON file could not be parsed
    #[error("failed to parse {path}")]
    Json {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for library operations
pub type Result<T, E = FolioError> = std::result::Result<T, E>;
