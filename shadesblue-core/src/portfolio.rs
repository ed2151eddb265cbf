//! Project catalog and the portfolio listing query.

use crate::carousel::Slide;
use crate::query::{build_query, parse_query};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

const CATALOG_JSON: &str = include_str!("../data/projects.json");

/// Slugs pinned to the top of the listing after featured projects.
pub const PRIORITY: &[&str] = &[
    "afterschool-memphis",
    "mscs-district-template",
    "leaderboard-cms",
];

static EMBEDDED: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(CATALOG_JSON).unwrap_or_else(|err| {
        log::error!("embedded project catalog rejected: {err}");
        Catalog::default()
    })
});

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("project catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate project slug `{0}`")]
    DuplicateSlug(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectSource {
    Employment,
    Client,
    Personal,
    OpenSource,
}

impl ProjectSource {
    pub const ALL: [Self; 4] = [
        Self::Employment,
        Self::Client,
        Self::Personal,
        Self::OpenSource,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employment => "employment",
            Self::Client => "client",
            Self::Personal => "personal",
            Self::OpenSource => "open-source",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// The `source` query parameter; anything unrecognised means everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceFilter {
    #[default]
    All,
    Only(ProjectSource),
}

impl SourceFilter {
    pub const CHOICES: [Self; 5] = [
        Self::All,
        Self::Only(ProjectSource::Employment),
        Self::Only(ProjectSource::Client),
        Self::Only(ProjectSource::Personal),
        Self::Only(ProjectSource::OpenSource),
    ];

    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(ProjectSource::parse)
            .map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(source) => source.as_str(),
        }
    }

    #[must_use]
    pub fn matches(self, source: Option<ProjectSource>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => source == Some(wanted),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub role: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub hero: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub did: Vec<String>,
    #[serde(default)]
    pub impact: Vec<String>,
    #[serde(default)]
    pub training: Option<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub source: Option<ProjectSource>,
}

impl Project {
    /// Gallery images as slides, falling back to the hero alone.
    #[must_use]
    pub fn slides(&self) -> Vec<Slide> {
        let images: Vec<&String> = if self.gallery.is_empty() {
            self.hero.iter().collect()
        } else {
            self.gallery.iter().collect()
        };
        images
            .into_iter()
            .enumerate()
            .map(|(i, src)| Slide::new(src.clone(), format!("{} — screenshot {}", self.title, i + 1)))
            .collect()
    }

    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.hero
            .as_deref()
            .or_else(|| self.gallery.first().map(String::as_str))
    }

    fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.summary, self.tags.join(" ")).to_lowercase()
    }

    fn priority(&self) -> Option<usize> {
        PRIORITY.iter().position(|p| *p == self.slug)
    }
}

/// Listing order: featured first, then the priority slugs, then title.
fn listing_order(a: &Project, b: &Project) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| match (a.priority(), b.priority()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.title.cmp(&b.title))
}

/// Portfolio listing parameters carried in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub source: SourceFilter,
    pub q: String,
}

impl ListQuery {
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "source" => query.source = SourceFilter::parse(Some(value.as_ref())),
                "q" => query.q = value.as_ref().to_string(),
                _ => {}
            }
        }
        query
    }

    #[must_use]
    pub fn from_query_string(raw: &str) -> Self {
        Self::from_pairs(parse_query(raw))
    }

    #[must_use]
    pub fn with_source(mut self, source: SourceFilter) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self
    }

    /// Encoded query without a leading `?`; `all` and blank values are dropped.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if self.source != SourceFilter::All {
            pairs.push(("source", self.source.as_str()));
        }
        if !self.q.trim().is_empty() {
            pairs.push(("q", self.q.as_str()));
        }
        build_query(&pairs)
    }

    fn needle(&self) -> String {
        self.q.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or a repeated slug.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::from_projects(projects)
    }

    /// # Errors
    ///
    /// Returns an error if two projects share a slug.
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for p in &projects {
            if !seen.insert(p.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(p.slug.clone()));
            }
        }
        Ok(Self { projects })
    }

    /// The catalog compiled into the binary.
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// Sorted, then filtered by source and a case-insensitive search over
    /// title, summary and tags.
    #[must_use]
    pub fn list(&self, query: &ListQuery) -> Vec<&Project> {
        let needle = query.needle();
        let mut items: Vec<&Project> = self.projects.iter().collect();
        items.sort_by(|a, b| listing_order(a, b));
        items
            .into_iter()
            .filter(|p| query.source.matches(p.source))
            .filter(|p| needle.is_empty() || p.haystack().contains(&needle))
            .collect()
    }

    /// Featured projects in listing order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Project> {
        self.list(&ListQuery::default())
            .into_iter()
            .filter(|p| p.featured)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_source_means_all() {
        assert_eq!(SourceFilter::parse(Some("bogus")), SourceFilter::All);
        assert_eq!(SourceFilter::parse(None), SourceFilter::All);
        assert_eq!(
            SourceFilter::parse(Some("open-source")),
            SourceFilter::Only(ProjectSource::OpenSource)
        );
    }

    #[test]
    fn query_string_drops_defaults() {
        let query = ListQuery::default()
            .with_source(SourceFilter::Only(ProjectSource::Client))
            .with_search("  ");
        assert_eq!(query.to_query_string(), "source=client");
        assert_eq!(ListQuery::default().to_query_string(), "");
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let json = r#"[{"slug":"a","title":"A","role":"r"},{"slug":"a","title":"B","role":"r"}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(ContentError::DuplicateSlug(slug)) if slug == "a"
        ));
    }

    #[test]
    fn slides_fall_back_to_hero() {
        let project = Project {
            hero: Some("/h.webp".into()),
            ..Catalog::from_json(r#"[{"slug":"x","title":"X","role":"r"}]"#)
                .unwrap()
                .projects()[0]
                .clone()
        };
        let slides = project.slides();
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].alt, "X — screenshot 1");
    }
}
