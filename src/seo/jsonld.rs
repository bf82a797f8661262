// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! schema.org JSON-LD graph construction

use super::url::absolute_url;
use crate::i18n::language_name;
use crate::site::Site;
use crate::types::{non_empty, Project};
use serde::Serialize;
use serde_json::Value;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// The `WebSite` node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebSite {
    /// Site title
    pub name: String,
    /// Base URL
    pub url: String,
}

/// The `Person` node describing the site owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNode {
    /// Display name
    pub name: String,
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Nickname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    /// Base URL
    pub url: String,
    /// Absolute share image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// `mailto:` link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Site URL followed by social profile URLs
    pub same_as: Vec<String>,
    /// Language names derived from the supported locales
    pub knows_language: Vec<String>,
    /// Alma maters
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alumni_of: Vec<Entity>,
}

/// The `BreadcrumbList` node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    /// Breadcrumb items, in order
    pub item_list_element: Vec<Entity>,
}

/// A `SoftwareSourceCode` node for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSourceCode {
    /// Project title
    pub name: String,
    /// Project description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Homepage, else repository, else site base
    pub url: String,
    /// Repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_repository: Option<String>,
    /// Declared language or the configured default
    pub programming_language: String,
    /// License identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Project author
    pub author: Entity,
    /// Absolute icon URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Link URLs, then repository and homepage
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

/// Small typed values nested inside graph nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub enum Entity {
    /// A school or university
    EducationalOrganization {
        /// Name
        name: String,
        /// Homepage
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    /// A person reference
    Person {
        /// Name
        name: String,
        /// Homepage
        url: String,
    },
    /// One breadcrumb entry
    ListItem {
        /// 1-based position
        position: u32,
        /// Label
        name: String,
        /// Target URL
        item: String,
    },
}

/// Top-level graph nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub enum Node {
    /// See [`WebSite`]
    WebSite(WebSite),
    /// See [`PersonNode`]
    Person(PersonNode),
    /// See [`BreadcrumbList`]
    BreadcrumbList(BreadcrumbList),
    /// See [`SoftwareSourceCode`]
    SoftwareSourceCode(SoftwareSourceCode),
}

/// A graph entry: a node built here or a caller-supplied fragment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GraphEntry {
    /// Built node
    Node(Node),
    /// Fragment passed through unchanged
    Extra(Value),
}

/// A JSON-LD document with a `@graph`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonLd {
    /// Always `https://schema.org`
    #[serde(rename = "@context")]
    pub context: String,
    /// Graph entries in emission order
    #[serde(rename = "@graph")]
    pub graph: Vec<GraphEntry>,
}

impl JsonLd {
    /// Built nodes, skipping extra fragments
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.iter().filter_map(|entry| match entry {
            GraphEntry::Node(node) => Some(node),
            GraphEntry::Extra(_) => None,
        })
    }
}

/// Build the page graph: `WebSite`, `Person`, `BreadcrumbList`, one
/// `SoftwareSourceCode` per project, then `extra` unchanged
#[must_use]
pub fn build_graph(
    site: &Site,
    canonical: &str,
    image: &str,
    projects: &[Project],
    extra: &[Value],
) -> JsonLd {
    let meta = site.metadata();
    let base = site.base_url();

    let mut graph = vec![
        GraphEntry::Node(Node::WebSite(WebSite {
            name: meta.title.clone(),
            url: base.to_string(),
        })),
        GraphEntry::Node(Node::Person(person_node(site, image))),
        GraphEntry::Node(Node::BreadcrumbList(BreadcrumbList {
            item_list_element: vec![Entity::ListItem {
                position: 1,
                name: "Home".into(),
                item: canonical.to_string(),
            }],
        })),
    ];

    graph.extend(
        software_source_code(site, projects)
            .into_iter()
            .map(|node| GraphEntry::Node(Node::SoftwareSourceCode(node))),
    );
    graph.extend(extra.iter().cloned().map(GraphEntry::Extra));

    JsonLd {
        context: SCHEMA_CONTEXT.into(),
        graph,
    }
}

/// The Person node for the site owner
#[must_use]
pub fn person_node(site: &Site, image: &str) -> PersonNode {
    let meta = site.metadata();
    let base = site.base_url();
    let person = &meta.person;

    let mut same_as = vec![base.to_string()];
    same_as.extend(meta.social.profile_urls());

    PersonNode {
        name: meta.person_name().to_string(),
        given_name: owned(person.given_name.as_deref()),
        family_name: owned(person.family_name.as_deref()),
        alternate_name: owned(person.alternate_name.as_deref()),
        url: base.to_string(),
        image: owned(Some(image)),
        email: meta.social.mailto(),
        job_title: owned(person.job_title.as_deref()),
        same_as,
        knows_language: site
            .locales()
            .locales()
            .iter()
            .map(|code| language_name(code, &site.seo().language_names))
            .collect(),
        alumni_of: person
            .alumni_of
            .iter()
            .map(|a| Entity::EducationalOrganization {
                name: a.name.clone(),
                url: owned(a.url.as_deref()),
            })
            .collect(),
    }
}

/// One `SoftwareSourceCode` node per project
#[must_use]
pub fn software_source_code(site: &Site, projects: &[Project]) -> Vec<SoftwareSourceCode> {
    let base = site.base_url();
    let author = Entity::Person {
        name: site.metadata().person_name().to_string(),
        url: base.to_string(),
    };

    projects
        .iter()
        .map(|project| {
            let repo = owned(project.repo.as_deref());
            let homepage = owned(project.homepage.as_deref());

            let mut same_as: Vec<String> = project.links.iter().map(|l| l.url.clone()).collect();
            same_as.extend(repo.iter().cloned());
            same_as.extend(homepage.iter().cloned());

            SoftwareSourceCode {
                name: project.title.clone(),
                description: owned(Some(&project.description)),
                url: homepage
                    .clone()
                    .or_else(|| repo.clone())
                    .unwrap_or_else(|| base.to_string()),
                code_repository: repo,
                programming_language: owned(project.language.as_deref())
                    .unwrap_or_else(|| site.seo().default_language.clone()),
                license: owned(project.license.as_deref()),
                author: author.clone(),
                image: non_empty(Some(&project.icon)).map(|icon| absolute_url(base, icon)),
                same_as,
            }
        })
        .collect()
}

fn owned(value: Option<&str>) -> Option<String> {
    non_empty(value).map(String::from)
}
