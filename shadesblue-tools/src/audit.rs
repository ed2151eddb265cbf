//! Content checks over the project catalog.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use shadesblue_core::{Catalog, Project};
use std::collections::HashMap;

static KEBAB_CASE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").ok());

fn is_kebab_case(slug: &str) -> bool {
    KEBAB_CASE.as_ref().is_some_and(|re| re.is_match(slug))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    SlugFormat,
    SlugUnique,
    Title,
    Summary,
    Hero,
    Gallery,
    LinkScheme,
    Source,
}

impl Check {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SlugFormat => "slug-format",
            Self::SlugUnique => "slug-unique",
            Self::Title => "title",
            Self::Summary => "summary",
            Self::Hero => "hero",
            Self::Gallery => "gallery",
            Self::LinkScheme => "link-scheme",
            Self::Source => "source",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub check: Check,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectAudit {
    pub slug: String,
    pub title: String,
    pub findings: Vec<Finding>,
}

impl ProjectAudit {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub projects: Vec<ProjectAudit>,
}

impl AuditReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.projects.iter().all(ProjectAudit::passed)
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.projects.iter().filter(|p| !p.passed()).count()
    }
}

/// Audit every project in catalog order.
#[must_use]
pub fn audit_catalog(catalog: &Catalog) -> AuditReport {
    let mut slug_counts: HashMap<&str, usize> = HashMap::new();
    for project in catalog.projects() {
        *slug_counts.entry(project.slug.as_str()).or_default() += 1;
    }
    let projects = catalog
        .projects()
        .iter()
        .map(|project| {
            let duplicated = slug_counts.get(project.slug.as_str()).copied().unwrap_or(0) > 1;
            audit_project(project, duplicated)
        })
        .collect();
    AuditReport { projects }
}

fn audit_project(project: &Project, duplicated_slug: bool) -> ProjectAudit {
    let mut findings = Vec::new();
    let mut fail = |check: Check, message: String| findings.push(Finding { check, message });

    if !is_kebab_case(&project.slug) {
        fail(Check::SlugFormat, format!("slug `{}` is not kebab-case", project.slug));
    }
    if duplicated_slug {
        fail(Check::SlugUnique, format!("slug `{}` is used more than once", project.slug));
    }
    if project.title.trim().is_empty() {
        fail(Check::Title, "title is empty".into());
    }
    if project.summary.trim().is_empty() {
        fail(Check::Summary, "summary is empty".into());
    }
    if project.hero.as_deref().is_none_or(|hero| hero.trim().is_empty()) {
        fail(Check::Hero, "no hero image".into());
    }
    if project.gallery.is_empty() {
        fail(Check::Gallery, "gallery has no images".into());
    }
    let links = [
        ("live", project.links.live.as_deref()),
        ("repo", project.links.repo.as_deref()),
    ];
    for (name, href) in links {
        if let Some(href) = href
            && !href.starts_with("https://")
        {
            fail(Check::LinkScheme, format!("{name} link `{href}` is not https"));
        }
    }
    if project.source.is_none() {
        fail(Check::Source, "no source category".into());
    }

    ProjectAudit {
        slug: project.slug.clone(),
        title: project.title.clone(),
        findings,
    }
}
