// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! `<head>` markup rendering

use super::PageMeta;

/// Escape text for use inside an HTML attribute or element
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn meta_name(html: &mut String, name: &str, content: &str) {
    html.push_str(&format!("<meta name=\"{}\" content=\"{}\">\n", name, escape(content)));
}

fn meta_property(html: &mut String, property: &str, content: &str) {
    html.push_str(&format!("<meta property=\"{}\" content=\"{}\">\n", property, escape(content)));
}

/// JSON-LD serialized for an inline script; `</` is escaped so the payload
/// cannot close the element early
#[must_use]
pub fn json_ld_script(meta: &PageMeta) -> String {
    let json = serde_json::to_string(&meta.json_ld).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize JSON-LD: {}", e);
        "{}".to_string()
    });
    json.replace("</", "<\\/")
}

/// Render the tags that belong in `<head>`
#[must_use]
pub fn render_head(meta: &PageMeta) -> String {
    let mut html = String::new();

    html.push_str("<meta charset=\"utf-8\">\n");
    meta_name(&mut html, "viewport", "width=device-width, initial-scale=1");
    html.push_str(&format!("<title>{}</title>\n", escape(&meta.title)));
    if let Some(description) = &meta.description {
        meta_name(&mut html, "description", description);
    }
    meta_name(&mut html, "robots", &meta.robots);
    html.push_str(&format!("<link rel=\"canonical\" href=\"{}\">\n", escape(&meta.canonical)));
    meta_name(&mut html, "color-scheme", "light dark");

    // Open Graph
    let og = &meta.open_graph;
    meta_property(&mut html, "og:title", &og.title);
    if let Some(description) = &og.description {
        meta_property(&mut html, "og:description", description);
    }
    meta_property(&mut html, "og:type", og.kind.as_str());
    meta_property(&mut html, "og:url", &og.url);
    meta_property(&mut html, "og:site_name", &og.site_name);
    meta_property(&mut html, "og:image", &og.image);
    if let Some(alt) = &og.image_alt {
        meta_property(&mut html, "og:image:alt", alt);
    }
    meta_property(&mut html, "og:locale", &og.locale);
    for locale in &og.alternate_locales {
        meta_property(&mut html, "og:locale:alternate", locale);
    }

    // Twitter
    let tw = &meta.twitter;
    meta_name(&mut html, "twitter:card", &tw.card);
    if let Some(site) = &tw.site {
        meta_name(&mut html, "twitter:site", site);
    }
    if let Some(creator) = &tw.creator {
        meta_name(&mut html, "twitter:creator", creator);
    }
    meta_name(&mut html, "twitter:title", &tw.title);
    if let Some(description) = &tw.description {
        meta_name(&mut html, "twitter:description", description);
    }
    meta_name(&mut html, "twitter:image", &tw.image);

    for alt in &meta.alternates {
        html.push_str(&format!(
            "<link rel=\"alternate\" href=\"{}\" hreflang=\"{}\">\n",
            escape(&alt.href),
            escape(&alt.hreflang)
        ));
    }

    html.push_str(&format!(
        "<script type=\"application/ld+json\">{}</script>\n",
        json_ld_script(meta)
    ));
    html
}

/// A minimal document wrapping the head, with the page language set
#[must_use]
pub fn render_document(meta: &PageMeta, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"{}\">\n<head>\n{}</head>\n<body>\n{}</body>\n</html>\n",
        escape(&meta.lang),
        render_head(meta),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::seo::{build, PageContext};
    use crate::site::Site;
    use crate::types::{SiteConfig, SiteMetadata};
    use serde_json::json;

    fn site() -> Site {
        let config = SiteConfig {
            site: SiteMetadata {
                title: "Tom & Jerry".into(),
                site_url: "https://example.com".into(),
                ..SiteMetadata::default()
            },
            ..SiteConfig::default()
        };
        Site::new(config, Content::default()).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }

    #[test]
    fn test_render_head_contains_core_tags() {
        let site = site();
        let meta = build(&site, &PageContext::new("/ga/", "ga"), &[]);
        let html = render_head(&meta);

        assert!(html.contains("<title>Tom &amp; Jerry</title>"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://example.com/ga/\">"));
        assert!(html.contains("<meta property=\"og:locale\" content=\"ga_IE\">"));
        assert!(html.contains("<meta property=\"og:locale:alternate\" content=\"en_US\">"));
        assert!(html.contains("hreflang=\"x-default\""));
        assert!(!html.contains("twitter:site"));
        assert!(!html.contains("name=\"description\""));
    }

    #[test]
    fn test_noindex_directive() {
        let site = site();
        let mut page = PageContext::new("/", "en");
        page.noindex = true;
        let html = render_head(&build(&site, &page, &[]));
        assert!(html.contains("<meta name=\"robots\" content=\"noindex,nofollow\">"));
    }

    #[test]
    fn test_script_payload_cannot_close_element() {
        let site = site();
        let page = PageContext::new("/", "en").with_json_ld(json!({"text": "</script><b>"}));
        let script = json_ld_script(&build(&site, &page, &[]));
        assert!(!script.contains("</script>"));
    }

    #[test]
    fn test_document_lang() {
        let site = site();
        let meta = build(&site, &PageContext::new("/", "en"), &[]);
        assert!(render_document(&meta, "").contains("<html lang=\"en\">"));
    }
}
