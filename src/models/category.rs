//! Category vocabulary (the enumerated maintenance items).

use serde::{Deserialize, Serialize};

/// Allowed values for `Record::item`.
///
/// An empty set accepts any non-empty item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for s in items {
            let s: String = s.into();
            let s = s.trim().to_string();
            if !s.is_empty() && !out.contains(&s) {
                out.push(s);
            }
        }
        Self(out)
    }

    /// Any item goes.
    pub fn open() -> Self {
        Self(Vec::new())
    }

    pub fn allows(&self, item: &str) -> bool {
        self.0.is_empty() || self.0.iter().any(|c| c == item)
    }

    pub fn is_open(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Category restriction applied by the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Item(String),
}

impl CategoryFilter {
    /// `None`, empty and `all` (any case) mean no restriction.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(s) if s.eq_ignore_ascii_case("all") => CategoryFilter::All,
            Some(s) => CategoryFilter::Item(s.to_string()),
        }
    }

    pub fn matches(&self, item: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Item(c) => c == item,
        }
    }
}
