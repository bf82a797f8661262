// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Locale handling: supported locales, localized paths, display names and
//! translation dictionaries

use crate::types::LocaleConfig;
use std::collections::BTreeMap;

/// Locale code to Open Graph locale tag
const OG_LOCALES: &[(&str, &str)] = &[("en", "en_US"), ("ga", "ga_IE")];

/// Locale code to English language name (schema.org `knowsLanguage`)
const LANGUAGE_NAMES: &[(&str, &str)] = &[("en", "English"), ("ga", "Irish")];

/// (language, display locale, name) for the language switcher
const DISPLAY_NAMES: &[(&str, &str, &str)] = &[
    ("en", "en", "English"),
    ("ga", "en", "Irish"),
    ("en", "ga", "Béarla"),
    ("ga", "ga", "Gaeilge"),
];

/// Ordered set of supported locales with an optional default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    locales: Vec<String>,
    default: Option<String>,
}

impl LocaleSet {
    /// Build a locale set. Duplicates are dropped and a default that is not
    /// among the supported locales is ignored.
    #[must_use]
    pub fn new(locales: Vec<String>, default: Option<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(locales.len());
        for code in locales {
            let code = code.trim().to_string();
            if !code.is_empty() && !unique.contains(&code) {
                unique.push(code);
            }
        }
        let default = default.filter(|d| unique.contains(d));
        Self {
            locales: unique,
            default,
        }
    }

    /// Build from the `[i18n]` section of the site file
    #[must_use]
    pub fn from_config(config: &LocaleConfig) -> Self {
        Self::new(config.locales.clone(), config.default.clone())
    }

    /// Supported locale codes in order
    #[must_use]
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// The default locale, if configured
    #[must_use]
    pub fn default_locale(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Whether `code` is a supported locale
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.locales.iter().any(|l| l == code)
    }

    /// Resolve a requested locale: itself when supported, otherwise the
    /// default, otherwise the first supported locale
    #[must_use]
    pub fn resolve(&self, requested: Option<&str>) -> Option<&str> {
        requested
            .and_then(|r| self.locales.iter().find(|l| *l == r))
            .map(String::as_str)
            .or(self.default.as_deref())
            .or_else(|| self.locales.first().map(String::as_str))
    }

    /// Locale named by the first path segment, if any
    #[must_use]
    pub fn locale_of_path(&self, path: &str) -> Option<&str> {
        let first = path.split('/').find(|s| !s.is_empty())?;
        self.locales
            .iter()
            .find(|l| *l == first)
            .map(String::as_str)
    }

    /// Remove a leading locale segment, keeping a trailing slash if present
    #[must_use]
    pub fn strip_lang_from_path(&self, path: &str) -> String {
        let normalized = leading_slash(path);
        let mut segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
        if segments.first().is_some_and(|first| self.contains(first)) {
            segments.remove(0);
        }
        if segments.is_empty() {
            return "/".to_string();
        }
        let trailing = if normalized.ends_with('/') { "/" } else { "" };
        format!("/{}{trailing}", segments.join("/"))
    }

    /// Localized path for `lang`; the default locale stays unprefixed
    #[must_use]
    pub fn path_with_lang(&self, lang: &str, path: &str) -> String {
        let stripped = self.strip_lang_from_path(path);
        if self.default.as_deref() == Some(lang) {
            return trailing_slash(&stripped);
        }
        if stripped == "/" {
            return format!("/{lang}/");
        }
        trailing_slash(&format!("/{lang}{stripped}"))
    }
}

impl Default for LocaleSet {
    fn default() -> Self {
        Self::from_config(&LocaleConfig::default())
    }
}

fn leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

fn lookup<'a>(table: &'a [(&'a str, &'a str)], code: &str) -> Option<&'a str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, v)| *v)
}

/// Open Graph locale tag for `code`; overrides win, unmapped codes pass
/// through unchanged
#[must_use]
pub fn og_locale(code: &str, overrides: &BTreeMap<String, String>) -> String {
    overrides
        .get(code)
        .map(String::as_str)
        .or_else(|| lookup(OG_LOCALES, code))
        .unwrap_or(code)
        .to_string()
}

/// English language name for `code`; unmapped codes pass through
#[must_use]
pub fn language_name(code: &str, overrides: &BTreeMap<String, String>) -> String {
    overrides
        .get(code)
        .map(String::as_str)
        .or_else(|| lookup(LANGUAGE_NAMES, code))
        .unwrap_or(code)
        .to_string()
}

/// Name of `code` as written in `in_locale`, falling back to the upper-cased
/// code
#[must_use]
pub fn display_name(code: &str, in_locale: &str) -> String {
    DISPLAY_NAMES
        .iter()
        .find(|(c, l, _)| *c == code && *l == in_locale)
        .map_or_else(|| code.to_uppercase(), |(_, _, name)| (*name).to_string())
}

/// Flat key/value translation table for one locale
pub type Dictionary = BTreeMap<String, String>;

/// Translation lookup over per-locale dictionaries
#[derive(Debug, Clone, Default)]
pub struct Translator {
    dictionaries: BTreeMap<String, Dictionary>,
    default: Option<String>,
}

impl Translator {
    /// Create a translator whose misses fall back to `default`'s dictionary
    #[must_use]
    pub fn new(default: Option<String>) -> Self {
        Self {
            dictionaries: BTreeMap::new(),
            default,
        }
    }

    /// Register (or replace) the dictionary for a locale
    pub fn insert(&mut self, locale: impl Into<String>, dictionary: Dictionary) {
        self.dictionaries.insert(locale.into(), dictionary);
    }

    /// Dictionary for a locale, if one was loaded
    #[must_use]
    pub fn dictionary(&self, locale: &str) -> Option<&Dictionary> {
        self.dictionaries.get(locale)
    }

    /// Locales with a loaded dictionary
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    /// Translate `key`: the locale's dictionary, then the default locale's,
    /// then `fallback`, then the key itself. Empty entries count as missing.
    #[must_use]
    pub fn translate(&self, locale: &str, key: &str, fallback: Option<&str>) -> String {
        let find = |code: &str| {
            self.dictionaries
                .get(code)
                .and_then(|d| d.get(key))
                .filter(|v| !v.is_empty())
        };
        find(locale)
            .or_else(|| self.default.as_deref().and_then(find))
            .map(String::as_str)
            .or(fallback)
            .unwrap_or(key)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_ga() -> LocaleSet {
        LocaleSet::new(vec!["en".into(), "ga".into()], Some("en".into()))
    }

    #[test]
    fn test_default_must_be_supported() {
        let set = LocaleSet::new(vec!["en".into()], Some("fr".into()));
        assert_eq!(set.default_locale(), None);
        assert_eq!(set.resolve(Some("fr")), Some("en"));
    }

    #[test]
    fn test_duplicates_dropped() {
        let set = LocaleSet::new(vec!["en".into(), "ga".into(), "en".into()], None);
        assert_eq!(set.locales(), ["en".to_string(), "ga".to_string()]);
    }

    #[test]
    fn test_strip_lang_from_path() {
        let set = en_ga();
        assert_eq!(set.strip_lang_from_path("/ga/projects/"), "/projects/");
        assert_eq!(set.strip_lang_from_path("ga/projects"), "/projects");
        assert_eq!(set.strip_lang_from_path("/ga/"), "/");
        assert_eq!(set.strip_lang_from_path("/gallery/"), "/gallery/");
        assert_eq!(set.strip_lang_from_path(""), "/");
    }

    #[test]
    fn test_path_with_lang() {
        let set = en_ga();
        assert_eq!(set.path_with_lang("en", "/ga/projects"), "/projects/");
        assert_eq!(set.path_with_lang("ga", "/projects"), "/ga/projects/");
        assert_eq!(set.path_with_lang("ga", "/"), "/ga/");
        assert_eq!(set.path_with_lang("en", "/"), "/");
    }

    #[test]
    fn test_locale_of_path() {
        let set = en_ga();
        assert_eq!(set.locale_of_path("/ga/projects/"), Some("ga"));
        assert_eq!(set.locale_of_path("/projects/"), None);
        assert_eq!(set.locale_of_path("/"), None);
    }

    #[test]
    fn test_og_locale_lookup() {
        let none = BTreeMap::new();
        assert_eq!(og_locale("en", &none), "en_US");
        assert_eq!(og_locale("ga", &none), "ga_IE");
        assert_eq!(og_locale("fr", &none), "fr");

        let mut overrides = BTreeMap::new();
        overrides.insert("en".to_string(), "en_IE".to_string());
        assert_eq!(og_locale("en", &overrides), "en_IE");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name("ga", "ga"), "Gaeilge");
        assert_eq!(display_name("ga", "en"), "Irish");
        assert_eq!(display_name("de", "en"), "DE");
    }

    #[test]
    fn test_translate_fallback_chain() {
        let mut translator = Translator::new(Some("en".into()));
        translator.insert(
            "en",
            Dictionary::from([
                ("scramble".to_string(), "Scramble again".to_string()),
                ("solved".to_string(), "Solved!".to_string()),
            ]),
        );
        translator.insert(
            "ga",
            Dictionary::from([
                ("solved".to_string(), "Réitithe!".to_string()),
                ("scramble".to_string(), String::new()),
            ]),
        );

        assert_eq!(translator.translate("ga", "solved", None), "Réitithe!");
        assert_eq!(translator.translate("ga", "scramble", None), "Scramble again");
        assert_eq!(translator.translate("ga", "missing", Some("Fallback")), "Fallback");
        assert_eq!(translator.translate("ga", "missing", None), "missing");
    }
}
