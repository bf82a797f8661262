// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! URL helpers for canonical and absolute links

/// Normalize a page path to exactly one leading and one trailing slash
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Canonical URL for a page: base without trailing slash + normalized path
#[must_use]
pub fn canonical_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), normalize_path(path))
}

/// Whether `url` already carries an http(s) scheme
#[must_use]
pub fn is_absolute(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Resolve `path` against `base` unless it is already absolute
#[must_use]
pub fn absolute_url(base: &str, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
