// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Query string filters and paging

use url::form_urlencoded;

/// Anything that contributes parameters to a list query string
pub trait QueryFilter {
    fn query_params(&self) -> Vec<(String, String)>;
}

/// Matches resources carrying the label `key=value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLabel {
    pub key: String,
    pub value: String,
}

impl FilterLabel {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl QueryFilter for FilterLabel {
    fn query_params(&self) -> Vec<(String, String)> {
        vec![("label".to_string(), format!("{}={}", self.key, self.value))]
    }
}

/// Matches resources carrying a label named `key`, whatever its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLabelKey {
    pub key: String,
}

impl FilterLabelKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl QueryFilter for FilterLabelKey {
    fn query_params(&self) -> Vec<(String, String)> {
        vec![("label".to_string(), self.key.clone())]
    }
}

/// Filter accepted by the filterable list requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Label(FilterLabel),
    LabelKey(FilterLabelKey),
}

impl QueryFilter for Filter {
    fn query_params(&self) -> Vec<(String, String)> {
        match self {
            Filter::Label(f) => f.query_params(),
            Filter::LabelKey(f) => f.query_params(),
        }
    }
}

impl From<FilterLabel> for Filter {
    fn from(f: FilterLabel) -> Self {
        Filter::Label(f)
    }
}

impl From<FilterLabelKey> for Filter {
    fn from(f: FilterLabelKey) -> Self {
        Filter::LabelKey(f)
    }
}

/// Page of a paginated list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Items per page, between 1 and [`Page::MAX_SIZE`]
    pub size: u32,
    /// 1-based page number
    pub number: u32,
}

impl Page {
    pub const MAX_SIZE: u32 = 100;

    pub const DEFAULT: Page = Page {
        size: Self::MAX_SIZE,
        number: 1,
    };

    pub fn new(size: u32, number: u32) -> Self {
        Self { size, number }
    }

    pub fn next(self) -> Self {
        Self {
            number: self.number.max(1).saturating_add(1),
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            number: self.number.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn limit(&self) -> u32 {
        self.size.clamp(1, Self::MAX_SIZE)
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.number.max(1) - 1) * u64::from(self.limit())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl QueryFilter for Page {
    fn query_params(&self) -> Vec<(String, String)> {
        vec![
            ("limit".to_string(), self.limit().to_string()),
            ("offset".to_string(), self.offset().to_string()),
        ]
    }
}

/// Render query parameters, stable-sorted by key so repeated keys keep
/// their relative order
pub fn encode_query(mut params: Vec<(String, String)>) -> String {
    params.sort_by(|a, b| a.0.cmp(&b.0));
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &params {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Render the query string of a set of filters
pub fn render<F: QueryFilter>(filters: &[F]) -> String {
    encode_query(filters.iter().flat_map(QueryFilter::query_params).collect())
}

/// Append the encoded `params` to `path`, omitting `?` when empty
pub fn with_query(path: impl Into<String>, params: Vec<(String, String)>) -> String {
    let mut url = path.into();
    let query = encode_query(params);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}

pub(crate) fn filter_params(filters: &[Filter]) -> Vec<(String, String)> {
    filters.iter().flat_map(QueryFilter::query_params).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_filters() {
        let filters: Vec<Filter> = vec![
            FilterLabel::new("env", "prod").into(),
            FilterLabelKey::new("managed-by").into(),
        ];
        assert_eq!(render(&filters), "label=env%3Dprod&label=managed-by");
    }

    #[test]
    fn test_params_sorted_by_key() {
        let url = with_query(
            "/network",
            vec![
                ("zone".to_string(), "fi-hel1".to_string()),
                ("label".to_string(), "b".to_string()),
                ("label".to_string(), "a".to_string()),
            ],
        );
        assert_eq!(url, "/network?label=b&label=a&zone=fi-hel1");
        assert_eq!(with_query("/network", Vec::new()), "/network");
    }

    #[test]
    fn test_paging() {
        let page = Page::DEFAULT;
        assert_eq!(render(&[page]), "limit=100&offset=0");
        assert_eq!(render(&[page.next()]), "limit=100&offset=100");
        assert_eq!(render(&[page.next().next()]), "limit=100&offset=200");
        assert_eq!(
            render(&[page.next().next().previous()]),
            "limit=100&offset=100"
        );
        assert_eq!(render(&[page.previous()]), "limit=100&offset=0");
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(Page::new(10, 0).offset(), 0);
        assert_eq!(Page::new(0, 2).limit(), 1);
        assert_eq!(Page::new(500, 2).offset(), 100);
        assert_eq!(Page::new(10, 3).offset(), 20);
    }
}
