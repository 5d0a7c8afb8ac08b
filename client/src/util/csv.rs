//! CSV export for the admin tables and log viewer.
//!
//! Every field is quoted and embedded quotes are doubled, so commas, quotes
//! and line breaks inside a value survive a round trip through any RFC 4180
//! reader. Records are separated by `\n`. Export is a pure transform over the
//! rows already loaded in the page; the browser download lives in
//! [`crate::util::download`].

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

/// MIME type used for downloaded CSV blobs.
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Quote a single field, doubling any embedded `"`.
pub fn escape_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render one record.
pub fn render_record<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header row plus data rows, ready to download.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self { headers: headers.iter().map(|h| h.as_ref().to_owned()).collect(), rows: Vec::new() }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as CSV text.
    #[must_use]
    pub fn render(&self) -> String {
        std::iter::once(render_record(&self.headers))
            .chain(self.rows.iter().map(|r| render_record(r)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
