//! Client-side list filtering.
//!
//! A [`FilterBar`] holds the transient filter state of one list screen: a
//! date range, a free-text search box and a handful of categorical filters.
//! [`FilterBar::filtered_data`] narrows a slice of [`Record`]s through three
//! AND-ed stages, never reordering:
//!
//! 1. **Date range** on the configured date field. Dates are normalized with
//!    [`normalize_date`]; a record whose date is missing or unparseable is
//!    kept.
//! 2. **Committed search**: the draft text only takes effect after
//!    [`FilterBar::handle_search`]. A record passes when any search key
//!    contains the text, ignoring case.
//! 3. **Categorical filters**, see [`CategoryFilter`].
//!
//! ```rust
//! use safeline_core::filter::FilterBar;
//! use serde_json::json;
//!
//! let rows: Vec<_> = [
//!     json!({"date": "2024-03-02", "type": "정기점검"}),
//!     json!({"date": "2024-04-10", "type": "수시점검"}),
//! ]
//! .into_iter()
//! .filter_map(|v| v.as_object().cloned())
//! .collect();
//!
//! let mut bar = FilterBar::new("date", ["type"]);
//! bar.set_search_text("정기");
//! assert_eq!(bar.filtered_data(&rows).len(), 2);
//!
//! bar.handle_search();
//! assert_eq!(bar.filtered_data(&rows).len(), 1);
//! ```

use std::collections::BTreeMap;

use log::debug;

use crate::models::record::{value_text, Record};

pub mod category;
pub mod date;


pub use category::CategoryFilter;
pub use date::normalize_date;

/// Field consulted for the date range when none is configured.
pub const DEFAULT_DATE_KEY: &str = "date";

/// Filter state for one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    date_key: String,
    search_keys: Vec<String>,
    start_date: String,
    end_date: String,
    search_text: String,
    applied_search_text: String,
    categories: BTreeMap<CategoryFilter, String>,
}

impl Default for FilterBar {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_KEY, Vec::<String>::new())
    }
}

impl FilterBar {
    /// Create filter state over `date_key` with the given search keys.
    pub fn new<K, I>(date_key: impl Into<String>, search_keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            date_key: date_key.into(),
            search_keys: search_keys.into_iter().map(Into::into).collect(),
            start_date: String::new(),
            end_date: String::new(),
            search_text: String::new(),
            applied_search_text: String::new(),
            categories: BTreeMap::new(),
        }
    }

    pub fn date_key(&self) -> &str {
        &self.date_key
    }

    pub fn search_keys(&self) -> &[String] {
        &self.search_keys
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn applied_search_text(&self) -> &str {
        &self.applied_search_text
    }

    /// Current value of a categorical filter, empty when unset.
    pub fn category(&self, category: CategoryFilter) -> &str {
        self.categories
            .get(&category)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Set the lower bound. Moving it past the upper bound pulls the upper
    /// bound along. An unreadable date clears the bound.
    pub fn set_start_date(&mut self, date: impl AsRef<str>) {
        self.start_date = Self::bound(date.as_ref());
        if !self.start_date.is_empty() && !self.end_date.is_empty() && self.start_date > self.end_date
        {
            self.end_date = self.start_date.clone();
        }
    }

    /// Set the upper bound. Moving it before the lower bound pulls the lower
    /// bound along. An unreadable date clears the bound.
    pub fn set_end_date(&mut self, date: impl AsRef<str>) {
        self.end_date = Self::bound(date.as_ref());
        if !self.start_date.is_empty() && !self.end_date.is_empty() && self.end_date < self.start_date
        {
            self.start_date = self.end_date.clone();
        }
    }

    /// Update the draft search text. Has no effect on filtering until
    /// [`FilterBar::handle_search`] commits it.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Commit the draft search text. Surrounding whitespace is trimmed, so
    /// a blank draft commits as "no search".
    pub fn handle_search(&mut self) {
        self.applied_search_text = self.search_text.trim().to_string();
        debug!("search committed: {:?}", self.applied_search_text);
    }

    /// Set a categorical filter; an empty value clears it.
    pub fn set_category(&mut self, category: CategoryFilter, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.categories.remove(&category);
        } else {
            self.categories.insert(category, value);
        }
    }

    /// Clear every filter field in one step. Date and search keys are kept.
    pub fn reset_filters(&mut self) {
        self.start_date.clear();
        self.end_date.clear();
        self.search_text.clear();
        self.applied_search_text.clear();
        self.categories.clear();
    }

    /// Whether any filter would currently narrow the data.
    pub fn is_active(&self) -> bool {
        !self.start_date.is_empty()
            || !self.end_date.is_empty()
            || (!self.applied_search_text.is_empty() && !self.search_keys.is_empty())
            || !self.categories.is_empty()
    }

    /// Records passing every active filter, in input order.
    pub fn filtered_data<'a>(&self, data: &'a [Record]) -> Vec<&'a Record> {
        let filtered: Vec<&Record> = data.iter().filter(|record| self.matches(record)).collect();
        debug!("filter kept {} of {} records", filtered.len(), data.len());
        filtered
    }

    /// Whether a single record passes every active filter.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_date(record) && self.matches_search(record) && self.matches_categories(record)
    }

    fn matches_date(&self, record: &Record) -> bool {
        if self.start_date.is_empty() && self.end_date.is_empty() {
            return true;
        }
        let Some(date) = record
            .get(&self.date_key)
            .and_then(|value| value.as_str())
            .and_then(normalize_date)
        else {
            return true;
        };
        (self.start_date.is_empty() || date >= self.start_date)
            && (self.end_date.is_empty() || date <= self.end_date)
    }

    fn matches_search(&self, record: &Record) -> bool {
        if self.applied_search_text.is_empty() || self.search_keys.is_empty() {
            return true;
        }
        let query = self.applied_search_text.to_lowercase();
        self.search_keys.iter().any(|key| {
            record
                .get(key)
                .is_some_and(|value| value_text(value, true).to_lowercase().contains(&query))
        })
    }

    fn matches_categories(&self, record: &Record) -> bool {
        self.categories
            .iter()
            .all(|(category, value)| category.matches(record, value))
    }

    /// Normalized bound, or empty (unbounded) when `date` is unreadable.
    fn bound(date: &str) -> String {
        normalize_date(date.trim()).unwrap_or_default()
    }
}
