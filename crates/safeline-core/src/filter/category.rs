//! Named single-value categorical filters.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::models::record::{first_present, value_text, Record};

/// A categorical filter a list page can expose next to the date range and
/// search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryFilter {
    /// Education records: course name
    EducationCourse,
    /// Education records: target audience
    EducationTarget,
    /// Inspections: workplace or field inspected
    InspectionField,
    /// Inspections: regular/ad-hoc/special kind
    InspectionKind,
    /// Reports: document type, often stored as a badge
    ReportDocumentType,
}

impl CategoryFilter {
    /// Every category, in declaration order.
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::EducationCourse,
        CategoryFilter::EducationTarget,
        CategoryFilter::InspectionField,
        CategoryFilter::InspectionKind,
        CategoryFilter::ReportDocumentType,
    ];

    /// Record fields consulted for this filter; the first one present wins.
    pub fn candidate_keys(&self) -> &'static [&'static str] {
        match self {
            CategoryFilter::EducationCourse => &["course", "educationCourse", "title"],
            CategoryFilter::EducationTarget => &["target", "educationTarget"],
            CategoryFilter::InspectionField => &["field", "inspectionField", "workplace"],
            CategoryFilter::InspectionKind => &["kind", "inspectionKind", "type"],
            CategoryFilter::ReportDocumentType => &["documentType", "type"],
        }
    }

    fn unwraps_badge(&self) -> bool {
        matches!(self, CategoryFilter::ReportDocumentType)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::EducationCourse => "educationCourse",
            CategoryFilter::EducationTarget => "educationTarget",
            CategoryFilter::InspectionField => "inspectionField",
            CategoryFilter::InspectionKind => "inspectionKind",
            CategoryFilter::ReportDocumentType => "reportDocumentType",
        }
    }

    /// Whether `record` passes this filter set to `value`.
    ///
    /// Substring match, case-sensitive. A record carrying none of the
    /// candidate fields does not pass.
    pub fn matches(&self, record: &Record, value: &str) -> bool {
        first_present(record, self.candidate_keys())
            .is_some_and(|field| value_text(field, self.unwraps_badge()).contains(value))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid category filter: {s}"))
    }
}
