//! `sitemap.xml` and `robots.txt` generation.

use chrono::NaiveDate;
use shadesblue_core::Catalog;
use shadesblue_core::config::STATIC_ROUTES;
use std::fmt::Write as _;

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
}

/// Static routes dated `today`, then one entry per project dated January 2nd
/// of its year. Projects without a parseable year fall back to `today`.
#[must_use]
pub fn sitemap_entries(base: &str, catalog: &Catalog, today: NaiveDate) -> Vec<SitemapEntry> {
    let base = base.trim_end_matches('/');
    let statics = STATIC_ROUTES.iter().map(|route| SitemapEntry {
        loc: format!("{base}{route}"),
        lastmod: today,
    });
    let projects = catalog.projects().iter().map(|project| {
        let lastmod = project
            .year
            .as_deref()
            .and_then(|year| year.trim().parse::<i32>().ok())
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 2))
            .unwrap_or_else(|| {
                log::debug!("project `{}` has no usable year; dating it today", project.slug);
                today
            });
        SitemapEntry {
            loc: format!("{base}/portfolio/{}", project.slug),
            lastmod,
        }
    });
    statics.chain(projects).collect()
}

#[must_use]
pub fn sitemap_xml(base: &str, catalog: &Catalog, today: NaiveDate) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in sitemap_entries(base, catalog, today) {
        let _ = writeln!(
            xml,
            "  <url><loc>{}</loc><lastmod>{}</lastmod></url>",
            escape_xml(&entry.loc),
            entry.lastmod.format("%Y-%m-%d")
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

#[must_use]
pub fn robots_txt(base: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        base.trim_end_matches('/')
    )
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
