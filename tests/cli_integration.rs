// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the folio CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SITE: &str = r#"
title = "Ann Example"
description = "Portfolio of Ann Example"
site_url = "https://example.com/"
pages = ["/", "/about"]

[social]
twitter = "@annexample"
github = "annexample"

[person]
job_title = "Software Engineer"

[i18n]
locales = ["en", "ga"]
default = "en"
"#;

const PROJECTS_EN: &str = r#"[
  {
    "slug": "folio",
    "title": "Folio",
    "description": "Portfolio toolkit",
    "icon": "/icons/folio.svg",
    "repo": "https://github.com/annexample/folio",
    "homepage": "https://folio.example.com"
  }
]"#;

/// A site file and content directory in a fresh temp dir
fn make_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("site.toml"), SITE).unwrap();

    let content = dir.path().join("content");
    fs::create_dir_all(content.join("projects")).unwrap();
    fs::create_dir_all(content.join("locales/ga")).unwrap();
    fs::write(content.join("projects/en.json"), PROJECTS_EN).unwrap();
    fs::write(
        content.join("locales/ga/common.json"),
        r#"{"nav.projects": "Tionscadail"}"#,
    )
    .unwrap();
    dir
}

/// folio with every path pointed into `dir`
fn folio(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("FOLIO_CONFIG", dir.path().join("folio.toml"))
        .env("FOLIO_DATA_DIR", dir.path().join("data"))
        .env("FOLIO_SITE_FILE", dir.path().join("site.toml"))
        .env("FOLIO_CONTENT_DIR", dir.path().join("content"))
        .env("NO_COLOR", "1");
    cmd
}

/// Helper to get stdout as string
fn stdout_str(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_robots() {
    let dir = make_site();
    let output = folio(&dir).arg("robots").output().unwrap();
    assert!(output.status.success());
    insta::assert_snapshot!(stdout_str(&output), @r"
    Sitemap: https://example.com/sitemap-index.xml
    User-agent: *
    Allow: /
    ");
}

#[test]
fn test_head_for_irish_page() {
    let dir = make_site();
    folio(&dir)
        .args(["head", "--path", "/ga/about/", "--title", "Fúm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Fúm — Ann Example</title>"))
        .stdout(predicate::str::contains(
            "<link rel=\"canonical\" href=\"https://example.com/ga/about/\">",
        ))
        .stdout(predicate::str::contains(
            "<meta name=\"twitter:site\" content=\"@annexample\">",
        ))
        .stdout(predicate::str::contains(
            "href=\"https://example.com/en/about/\" hreflang=\"x-default\"",
        ));
}

#[test]
fn test_head_json() {
    let dir = make_site();
    let output = folio(&dir)
        .args(["--json", "head", "--path", "/", "--noindex"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let meta: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(meta["canonical"], "https://example.com/");
    assert_eq!(meta["robots"], "noindex,nofollow");
    assert_eq!(meta["open_graph"]["locale"], "en_US");
    assert_eq!(meta["alternates"].as_array().unwrap().len(), 3);
}

#[test]
fn test_jsonld_with_projects() {
    let dir = make_site();
    let output = folio(&dir)
        .args(["--json", "jsonld", "--projects"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["@context"], "https://schema.org");
    let graph = doc["@graph"].as_array().unwrap();
    let code = graph
        .iter()
        .find(|n| n["@type"] == "SoftwareSourceCode")
        .unwrap();
    assert_eq!(code["url"], "https://folio.example.com");
    assert_eq!(code["image"], "https://example.com/icons/folio.svg");
    assert_eq!(code["programmingLanguage"], "TypeScript");
}

#[test]
fn test_jsonld_extra_fragment() {
    let dir = make_site();
    let extra = dir.path().join("extra.json");
    fs::write(&extra, r#"{"@type": "FAQPage", "name": "</script>"}"#).unwrap();

    folio(&dir)
        .args(["jsonld", "--ld"])
        .arg(&extra)
        .assert()
        .success()
        .stdout(predicate::str::contains("FAQPage"))
        .stdout(predicate::str::contains("</script>").not());
}

#[test]
fn test_alternates() {
    let dir = make_site();
    folio(&dir)
        .args(["alternates", "--path", "/projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/en/projects/"))
        .stdout(predicate::str::contains("https://example.com/ga/projects/"))
        .stdout(predicate::str::contains("x-default"));
}

#[test]
fn test_locales_json() {
    let dir = make_site();
    let output = folio(&dir).args(["--json", "locales"]).output().unwrap();
    assert!(output.status.success());
    let locales: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(locales[0]["code"], "en");
    assert_eq!(locales[0]["default"], true);
    assert_eq!(locales[1]["native_name"], "Gaeilge");
}

#[test]
fn test_translate_fallbacks() {
    let dir = make_site();
    folio(&dir)
        .args(["translate", "nav.projects", "--locale", "ga"])
        .assert()
        .success()
        .stdout("Tionscadail\n");

    folio(&dir)
        .args(["translate", "nav.projects", "--locale", "en", "--fallback", "Projects"])
        .assert()
        .success()
        .stdout("Projects\n");

    folio(&dir)
        .args(["translate", "nav.missing"])
        .assert()
        .success()
        .stdout("nav.missing\n");
}

#[test]
fn test_export_tree() {
    let dir = make_site();
    let out = dir.path().join("out");
    folio(&dir)
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 6 files"));

    assert!(out.join("index.html").exists());
    assert!(out.join("about/index.html").exists());
    assert!(out.join("ga/index.html").exists());
    assert!(out.join("ga/about/index.html").exists());
    assert!(out.join("robots.txt").exists());
    assert!(out.join("flag.html").exists());
}

#[test]
fn test_export_unknown_format() {
    let dir = make_site();
    folio(&dir)
        .args(["export", "--format", "yaml", "--output"])
        .arg(dir.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown export format"));
}

#[test]
fn test_flag_html() {
    let dir = make_site();
    folio(&dir)
        .args(["flag", "--html", "--cols", "6", "--rows", "3", "--puzzle", "--seed", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-mode=\"puzzle\""))
        .stdout(predicate::str::contains("repeat(6, minmax(0, 1fr))"))
        .stdout(predicate::str::contains("<button").count(18));
}

#[test]
fn test_flag_rejects_empty_grid() {
    let dir = make_site();
    folio(&dir)
        .args(["flag", "--html", "--cols", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one column"));
}

#[test]
fn test_theme_lifecycle() {
    let dir = make_site();
    folio(&dir).args(["theme"]).assert().success().stdout("system\n");
    folio(&dir).args(["theme", "toggle"]).assert().success().stdout("light\n");
    folio(&dir).args(["theme", "get"]).assert().success().stdout("light\n");
    folio(&dir).args(["theme", "set", "dark"]).assert().success().stdout("dark\n");
    folio(&dir).args(["theme", "toggle"]).assert().success().stdout("system\n");

    let prefs = fs::read_to_string(dir.path().join("data/preferences.json")).unwrap();
    assert!(!prefs.contains("theme-preference"));

    folio(&dir)
        .args(["theme", "set", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme mode"));
}

#[test]
fn test_config_set_get() {
    let dir = make_site();
    folio(&dir).args(["config", "flag.cols", "8"]).assert().success();
    folio(&dir)
        .args(["config", "flag.cols"])
        .assert()
        .success()
        .stdout("8\n");
    folio(&dir)
        .args(["config", "no.such.key"])
        .assert()
        .failure();
}

#[test]
fn test_missing_site_url() {
    let dir = make_site();
    fs::write(dir.path().join("site.toml"), "title = \"No URL\"\n").unwrap();
    folio(&dir)
        .arg("robots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("site_url is required"));
}

#[test]
fn test_completions() {
    let dir = make_site();
    folio(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_no_color_env_values() {
    let dir = make_site();
    for value in ["1", "true", "yes", "0", "false"] {
        folio(&dir)
            .env("NO_COLOR", value)
            .arg("robots")
            .assert()
            .success()
            .stdout(predicate::str::contains("User-agent: *"));
    }
}

#[test]
fn test_no_color_unset() {
    let dir = make_site();
    folio(&dir)
        .env_remove("NO_COLOR")
        .arg("robots")
        .assert()
        .success()
        .stdout(predicate::str::contains("User-agent: *"));

    folio(&dir)
        .env_remove("NO_COLOR")
        .args(["--no-color", "alternates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x-default"));
}
