//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles the empty case with a one-line message so callers
//! never print a blank screen.

use std::{fmt, ops::Index};

use crate::{
    models::{record::value_text, ReceivedApprovalItem, Record, SentApprovalItem},
    pagination::Page,
};

/// Newtype wrapper for displaying the outbox.
///
/// # Examples
///
/// ```rust
/// use safeline_core::{
///     display::SentApprovals,
///     models::{ApprovalStatus, SentApprovalItem},
/// };
///
/// let item = SentApprovalItem {
///     id: 1,
///     date: "2024-05-02".to_string(),
///     title: "5월 정기 안전점검".to_string(),
///     document_type: "안전점검".to_string(),
///     drafter: "김안전".to_string(),
///     approvers: vec!["안전관리자".to_string()],
///     current_step: 0,
///     status: ApprovalStatus::Pending,
/// };
/// let output = SentApprovals(vec![item]).to_string();
/// assert!(output.contains("5월 정기 안전점검"));
/// assert!(SentApprovals(vec![]).to_string().contains("No sent approvals"));
/// ```
#[derive(Debug, Clone)]
pub struct SentApprovals(pub Vec<SentApprovalItem>);

impl SentApprovals {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&SentApprovalItem> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SentApprovalItem> {
        self.0.iter()
    }
}

impl Index<usize> for SentApprovals {
    type Output = SentApprovalItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a SentApprovals {
    type Item = &'a SentApprovalItem;
    type IntoIter = std::slice::Iter<'a, SentApprovalItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SentApprovals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No sent approvals.")
        } else {
            for item in &self.0 {
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying inbox entries.
#[derive(Debug, Clone)]
pub struct ReceivedApprovals(pub Vec<ReceivedApprovalItem>);

impl ReceivedApprovals {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&ReceivedApprovalItem> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReceivedApprovalItem> {
        self.0.iter()
    }
}

impl Index<usize> for ReceivedApprovals {
    type Output = ReceivedApprovalItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ReceivedApprovals {
    type Item = &'a ReceivedApprovalItem;
    type IntoIter = std::slice::Iter<'a, ReceivedApprovalItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ReceivedApprovals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No received approvals.")
        } else {
            for item in &self.0 {
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }
}

/// One page of filtered records, rendered as a markdown table.
///
/// Columns appear in the order their keys are first seen across the rows.
/// Badge values show their text.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    pub rows: Vec<Record>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl RecordTable {
    /// Copy the rows of a page into an owned table.
    pub fn from_page(page: &Page<'_, &Record>) -> Self {
        Self {
            rows: page.items.iter().map(|record| (*record).clone()).collect(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }

    /// Column names in first-appearance order.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for row in &self.rows {
            for key in row.keys() {
                if !columns.contains(&key.as_str()) {
                    columns.push(key);
                }
            }
        }
        columns
    }
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl fmt::Display for RecordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "No records found.")?;
        } else {
            let columns = self.columns();
            let header: Vec<String> = columns.iter().map(|c| cell(c)).collect();
            writeln!(f, "| {} |", header.join(" | "))?;
            writeln!(f, "|{}", "---|".repeat(columns.len()))?;
            for row in &self.rows {
                let cells: Vec<String> = columns
                    .iter()
                    .map(|column| {
                        row.get(*column)
                            .map(|value| cell(&value_text(value, true)))
                            .unwrap_or_default()
                    })
                    .collect();
                writeln!(f, "| {} |", cells.join(" | "))?;
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "Page {}/{} ({} records)",
            self.current_page, self.total_pages, self.total_items
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::pagination::Pagination;

    fn records(values: Vec<serde_json::Value>) -> Vec<Record> {
        values
            .into_iter()
            .filter_map(|v| v.as_object().cloned())
            .collect()
    }

    #[test]
    fn test_record_table_columns_first_seen_order() {
        let rows = records(vec![
            json!({"date": "2024-01-02", "title": "A"}),
            json!({"title": "B", "type": {"text": "정기", "color": "blue"}}),
        ]);
        let refs: Vec<&Record> = rows.iter().collect();
        let table = RecordTable::from_page(&Pagination::default().page(&refs));

        let columns = table.columns();
        assert_eq!(columns, vec!["date", "title", "type"]);

        let output = table.to_string();
        assert!(output.contains("| date | title | type |"));
        assert!(output.contains("| 2024-01-02 | A |  |"));
        assert!(output.contains("|  | B | 정기 |"));
        assert!(output.contains("Page 1/1 (2 records)"));
    }

    #[test]
    fn test_record_table_escapes_pipes() {
        let rows = records(vec![json!({"memo": "a|b"})]);
        let refs: Vec<&Record> = rows.iter().collect();
        let table = RecordTable::from_page(&Pagination::default().page(&refs));
        assert!(table.to_string().contains("a\\|b"));
    }

    #[test]
    fn test_empty_record_table() {
        let refs: Vec<&Record> = Vec::new();
        let table = RecordTable::from_page(&Pagination::default().page(&refs));
        let output = table.to_string();
        assert!(output.contains("No records found."));
        assert!(output.contains("Page 1/1 (0 records)"));
    }

    #[test]
    fn test_empty_inbox_message() {
        assert!(ReceivedApprovals(vec![])
            .to_string()
            .contains("No received approvals."));
    }
}
