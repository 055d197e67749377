//! Report table models.
//!
//! This module defines [`ReportTable`] and [`ReportColumn`], the shapes the
//! report builders produce for the external presentation/export layer to
//! render as on-screen tables, PDFs, or spreadsheets.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Metadata for one column of a report table.
///
/// Column `key` values match the serialized field names of the row type, so
/// a renderer can index rows by column. All columns produced by the base
/// generators are read-only and permanent; editable columns are appended by
/// downstream adjustment tooling, outside this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportColumn {
    /// The row field this column reads from.
    pub key: String,
    /// The human-readable column header.
    pub label: String,
    /// Whether the presentation layer allows in-place edits.
    pub editable: bool,
    /// Whether the column survives report customization.
    pub is_permanent: bool,
}

impl ReportColumn {
    /// Builds a read-only, permanent column, the only kind the base
    /// generators emit.
    pub fn permanent(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            editable: false,
            is_permanent: true,
        }
    }
}

/// A complete, render-ready statutory report.
///
/// Rows appear in the order their source aggregate records were supplied,
/// after unmatched records are filtered out; the `no` field of each row is
/// 1-based and renumbered after that filtering. A fresh table is built per
/// generation call; the engine holds no state across calls.
///
/// # Example
///
/// ```
/// use contribution_engine::models::{ReportColumn, ReportTable};
///
/// let table: ReportTable<serde_json::Value> = ReportTable::new(
///     "SSS Contributions".to_string(),
///     vec![("Employer Name".to_string(), "Acme Corp".to_string())],
///     vec![ReportColumn::permanent("no", "No.")],
///     vec![],
/// );
/// assert!(table.rows.is_empty());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ReportTable<Row> {
    /// Unique identifier for this generated report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The report title (scheme name plus period label).
    pub title: String,
    /// Ordered header fields (e.g. "Employer Name" -> value).
    pub header_data: Vec<(String, String)>,
    /// Ordered column schema.
    pub columns: Vec<ReportColumn>,
    /// Report rows, keyed by column `key` when serialized.
    pub rows: Vec<Row>,
}

impl<Row> ReportTable<Row> {
    /// Assembles a table, stamping a fresh report ID and generation time.
    pub fn new(
        title: String,
        header_data: Vec<(String, String)>,
        columns: Vec<ReportColumn>,
        rows: Vec<Row>,
    ) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            title,
            header_data,
            columns,
            rows,
        }
    }
}
