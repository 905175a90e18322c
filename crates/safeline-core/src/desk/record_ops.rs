//! Record list filtering for the Desk.

use std::path::Path;

use serde_json::Value;
use tokio::task;

use super::Desk;
use crate::{
    display::RecordTable,
    error::{Result, SafelineError},
    models::Record,
    pagination::Pagination,
    params::FilterRecords,
};

/// Read a JSON array of objects.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path).map_err(|e| SafelineError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    let values: Vec<Value> = serde_json::from_str(&text)?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(record) => Ok(record),
            other => Err(SafelineError::invalid_input("path").with_reason(format!(
                "element {index} is not an object: {other}"
            ))),
        })
        .collect()
}

/// Filter `records` and cut out the requested page.
pub fn filter_page(records: &[Record], params: &FilterRecords) -> RecordTable {
    let filtered = params.filter_bar().filtered_data(records);

    let mut pagination = Pagination::new(params.page_size());
    if let Some(page) = params.page {
        pagination.on_page_change(page, filtered.len());
    }
    RecordTable::from_page(&pagination.page(&filtered))
}

impl Desk {
    /// Filters a JSON records file and returns one page of it.
    ///
    /// Records are not stored; the file is read on every call.
    pub async fn filter_records(&self, params: &FilterRecords) -> Result<RecordTable> {
        params.validate()?;
        let params = params.clone();

        task::spawn_blocking(move || {
            let records = load_records(&params.path)?;
            Ok(filter_page(&records, &params))
        })
        .await
        .map_err(|e| SafelineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
