//! Sortable, filterable, paginated employee table for the data-table demo.
//!
//! All state lives in the URL: `?q=&sort=&dir=&page=&per=`.

use crate::query::{build_query, parse_query, patch_query};
use once_cell::sync::Lazy;
use std::cmp::Ordering;

pub const ROW_COUNT: usize = 120;
pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];
pub const DEFAULT_PER: usize = 10;

const FIRST: [&str; 12] = [
    "Ava", "Noah", "Mia", "Liam", "Emma", "Elijah", "Olivia", "Lucas", "Amelia", "Mateo", "Sophia",
    "Ethan",
];
const LAST: [&str; 12] = [
    "Johnson", "Garcia", "Williams", "Brown", "Jones", "Miller", "Davis", "Martinez", "Hernandez",
    "Lopez", "Gonzalez", "Wilson",
];
const ROLES: [&str; 8] = [
    "Frontend Dev",
    "Backend Dev",
    "Full-stack Dev",
    "Designer",
    "PM",
    "QA Engineer",
    "Data Analyst",
    "DevOps",
];
const DEPTS: [&str; 6] = [
    "Web",
    "HR",
    "Operations",
    "Communications",
    "IT",
    "Student Services",
];
const LOCS: [&str; 6] = [
    "Memphis, TN",
    "Nashville, TN",
    "Knoxville, TN",
    "Atlanta, GA",
    "Dallas, TX",
    "Remote",
];

static ROWS: Lazy<Vec<Row>> = Lazy::new(|| (0..ROW_COUNT).map(Row::generate).collect());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub name: String,
    pub role: &'static str,
    pub dept: &'static str,
    pub loc: &'static str,
    /// ISO `yyyy-mm-dd`.
    pub start: String,
    /// Whole US dollars.
    pub salary: u32,
}

impl Row {
    fn generate(i: usize) -> Self {
        let year = 2020 + i % 6;
        let month = i % 12 + 1;
        let day = (i * 7) % 27 + 1;
        Self {
            id: u32::try_from(i + 1).unwrap_or(u32::MAX),
            name: format!("{} {}", FIRST[i % FIRST.len()], LAST[(i * 3) % LAST.len()]),
            role: ROLES[i % ROLES.len()],
            dept: DEPTS[(i * 2) % DEPTS.len()],
            loc: LOCS[(i * 5) % LOCS.len()],
            start: format!("{year}-{month:02}-{day:02}"),
            salary: 55_000 + u32::try_from(i % 15).unwrap_or(0) * 2_500,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        [self.name.as_str(), self.role, self.dept, self.loc]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// The generated demo rows, built once.
#[must_use]
pub fn rows() -> &'static [Row] {
    &ROWS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Role,
    Dept,
    Loc,
    Start,
    Salary,
}

impl SortKey {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Role,
        Self::Dept,
        Self::Loc,
        Self::Start,
        Self::Salary,
    ];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Role => "role",
            Self::Dept => "dept",
            Self::Loc => "loc",
            Self::Start => "start",
            Self::Salary => "salary",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Role => "Role",
            Self::Dept => "Department",
            Self::Loc => "Location",
            Self::Start => "Start",
            Self::Salary => "Salary",
        }
    }

    fn compare(self, a: &Row, b: &Row) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Role => a.role.cmp(b.role),
            Self::Dept => a.dept.cmp(b.dept),
            Self::Loc => a.loc.cmp(b.loc),
            Self::Start => a.start.cmp(&b.start),
            Self::Salary => a.salary.cmp(&b.salary),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Normalized table parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableParams {
    pub q: String,
    pub sort: SortKey,
    pub dir: SortDir,
    pub page: usize,
    pub per: usize,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            q: String::new(),
            sort: SortKey::default(),
            dir: SortDir::default(),
            page: 1,
            per: DEFAULT_PER,
        }
    }
}

impl TableParams {
    /// Normalize raw URL pairs; anything unparseable takes its default.
    pub fn normalize<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "q" => value.trim().clone_into(&mut params.q),
                "sort" => params.sort = SortKey::parse(value).unwrap_or_default(),
                "dir" => params.dir = SortDir::parse(value).unwrap_or_default(),
                "page" => {
                    params.page = leading_int(value).filter(|p| *p >= 1).unwrap_or(1);
                }
                "per" => {
                    params.per = leading_int(value)
                        .filter(|p| PAGE_SIZES.contains(p))
                        .unwrap_or(DEFAULT_PER);
                }
                _ => {}
            }
        }
        params
    }

    #[must_use]
    pub fn from_query_string(raw: &str) -> Self {
        Self::normalize(parse_query(raw))
    }

    /// Direction a header link should request: flip the active column, else ascending.
    #[must_use]
    pub fn toggle_dir(&self, column: SortKey) -> SortDir {
        if self.sort == column {
            self.dir.flipped()
        } else {
            SortDir::Asc
        }
    }

    #[must_use]
    pub fn aria_sort(&self, column: SortKey) -> &'static str {
        match (self.sort == column, self.dir) {
            (false, _) => "none",
            (true, SortDir::Asc) => "ascending",
            (true, SortDir::Desc) => "descending",
        }
    }

    fn base_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("q".to_string(), self.q.clone()),
            ("sort".to_string(), self.sort.as_str().to_string()),
            ("dir".to_string(), self.dir.as_str().to_string()),
            ("per".to_string(), self.per.to_string()),
        ]
    }

    /// Current parameters (without `page`) patched by `patch`, as `?query` or
    /// an empty string. Empty values are dropped.
    #[must_use]
    pub fn href_with(&self, patch: &[(&str, &str)]) -> String {
        let mut pairs = self.base_pairs();
        for (key, value) in patch {
            patch_query(&mut pairs, key, Some(value));
        }
        pairs.retain(|(_, v)| !v.is_empty());
        let query = build_query(&pairs);
        if query.is_empty() {
            query
        } else {
            format!("?{query}")
        }
    }

    /// Link for a sortable column header; always returns to page one.
    #[must_use]
    pub fn sort_href(&self, column: SortKey) -> String {
        self.href_with(&[
            ("sort", column.as_str()),
            ("dir", self.toggle_dir(column).as_str()),
            ("page", "1"),
        ])
    }

    #[must_use]
    pub fn page_href(&self, page: usize) -> String {
        self.href_with(&[("page", &page.to_string())])
    }
}

/// `parseInt`-style: leading ASCII digits, ignoring leading whitespace.
fn leading_int(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a Row>,
    pub total: usize,
    pub pages: usize,
    /// Clamped into `1..=pages`.
    pub page: usize,
    pub start_idx: usize,
    pub end_idx: usize,
}

impl TablePage<'_> {
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// One-based first row shown, or 0 for an empty result.
    #[must_use]
    pub const fn first_shown(&self) -> usize {
        if self.total == 0 { 0 } else { self.start_idx + 1 }
    }
}

/// Filter, then sort, then paginate.
#[must_use]
pub fn run<'a>(rows: &'a [Row], params: &TableParams) -> TablePage<'a> {
    let needle = params.q.to_lowercase();
    let mut filtered: Vec<&Row> = rows
        .iter()
        .filter(|r| needle.is_empty() || r.matches(&needle))
        .collect();
    filtered.sort_by(|a, b| {
        let ord = params.sort.compare(a, b);
        match params.dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });

    let total = filtered.len();
    let per = params.per.max(1);
    let pages = total.div_ceil(per).max(1);
    let page = params.page.clamp(1, pages);
    let start_idx = (page - 1) * per;
    let end_idx = (start_idx + per).min(total);
    let rows = filtered
        .get(start_idx..end_idx)
        .map(|slice| slice.to_vec())
        .unwrap_or_default();
    TablePage {
        rows,
        total,
        pages,
        page,
        start_idx,
        end_idx,
    }
}

/// USD with thousands separators and no cents, e.g. `$57,500`.
#[must_use]
pub fn format_money(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_deterministic() {
        let all = rows();
        assert_eq!(all.len(), ROW_COUNT);
        assert_eq!(all[0].name, "Ava Johnson");
        assert_eq!(all[0].start, "2020-01-01");
        assert_eq!(all[1].start, "2021-02-08");
        assert_eq!(all[14].salary, 90_000);
        assert_eq!(all[15].salary, 55_000);
    }

    #[test]
    fn normalize_rejects_out_of_range_values() {
        let p = TableParams::from_query_string("q=%20dev%20&sort=bogus&dir=up&page=0&per=25");
        assert_eq!(p.q, "dev");
        assert_eq!(p.sort, SortKey::Name);
        assert_eq!(p.dir, SortDir::Asc);
        assert_eq!(p.page, 1);
        assert_eq!(p.per, 10);
        assert_eq!(TableParams::from_query_string("page=3x&per=50").page, 3);
    }

    #[test]
    fn page_is_clamped_to_last() {
        let params = TableParams {
            page: 99,
            per: 50,
            ..TableParams::default()
        };
        let page = run(rows(), &params);
        assert_eq!(page.pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.rows.len(), 20);
        assert!(!page.has_next());
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let params = TableParams {
            q: "zzz".into(),
            ..TableParams::default()
        };
        let page = run(rows(), &params);
        assert_eq!((page.total, page.pages, page.first_shown()), (0, 1, 0));
    }

    #[test]
    fn salary_descending_starts_at_top_band() {
        let params = TableParams::from_query_string("sort=salary&dir=desc");
        let page = run(rows(), &params);
        assert_eq!(page.rows[0].salary, 90_000);
    }

    #[test]
    fn sort_links_flip_only_the_active_column() {
        let params = TableParams::from_query_string("sort=role&dir=asc");
        assert_eq!(params.toggle_dir(SortKey::Role), SortDir::Desc);
        assert_eq!(params.toggle_dir(SortKey::Name), SortDir::Asc);
        assert_eq!(params.aria_sort(SortKey::Role), "ascending");
        assert_eq!(params.aria_sort(SortKey::Loc), "none");
        assert_eq!(
            params.sort_href(SortKey::Role),
            "?sort=role&dir=desc&per=10&page=1"
        );
    }

    #[test]
    fn money_has_thousands_separators() {
        assert_eq!(format_money(55_000), "$55,000");
        assert_eq!(format_money(1_234_567), "$1,234,567");
        assert_eq!(format_money(999), "$999");
    }
}
