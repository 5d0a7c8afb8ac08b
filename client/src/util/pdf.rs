//! Paginated PDF table export for the log viewer.
//!
//! DESIGN
//! ======
//! Emits a self-contained PDF 1.4 document using the base-14 Helvetica fonts,
//! so no font data is embedded. Cells are clipped to their column by character
//! count (an average Helvetica glyph is half an em wide) and truncated with
//! `...`. Text outside Latin-1 is replaced with `?` because the fonts use
//! `WinAnsiEncoding`.
//!
//! Layout: A4 portrait, a title line on every page, a filled header row, and
//! zebra-striped body rows.

#[cfg(test)]
#[path = "pdf_test.rs"]
mod pdf_test;

/// MIME type used for downloaded PDF blobs.
pub const PDF_MIME: &str = "application/pdf";

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 36.0;
const TITLE_SIZE: f32 = 12.0;
const FONT_SIZE: f32 = 7.0;
const ROW_HEIGHT: f32 = 10.0;
const CELL_PADDING: f32 = 2.0;
const HEADER_FILL: &str = "0.086 0.627 0.522";
const STRIPE_FILL: &str = "0.95 0.95 0.95";

/// A column header with a relative width weight.
#[derive(Clone, Debug, PartialEq)]
pub struct PdfColumn {
    pub header: String,
    pub weight: f32,
}

impl PdfColumn {
    pub fn new(header: &str, weight: f32) -> Self {
        Self { header: header.to_owned(), weight }
    }
}

/// A titled table rendered across as many pages as needed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PdfTable {
    pub title: String,
    pub columns: Vec<PdfColumn>,
    pub rows: Vec<Vec<String>>,
}

impl PdfTable {
    pub fn new(title: &str, columns: Vec<PdfColumn>) -> Self {
        Self { title: title.to_owned(), columns, rows: Vec::new() }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of body rows that fit on one page.
    #[must_use]
    pub fn rows_per_page() -> usize {
        let body_top = header_top() - ROW_HEIGHT;
        let usable = body_top - MARGIN;
        // Truncation is intended: partial rows do not fit.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rows = (usable / ROW_HEIGHT).floor() as usize;
        rows.max(1)
    }

    /// Number of pages the document will contain (at least one).
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(Self::rows_per_page()).max(1)
    }

    /// Render the complete PDF file.
    #[must_use]
    pub fn render(&self) -> Vec<u8> {
        let pages = self.page_count();
        let widths = self.column_widths();
        let mut writer = PdfWriter::default();

        let kids = (0..pages)
            .map(|i| format!("{} 0 R", page_object_id(i)))
            .collect::<Vec<_>>()
            .join(" ");
        writer.object(1, b"<< /Type /Catalog /Pages 2 0 R >>");
        writer.object(2, format!("<< /Type /Pages /Kids [{kids}] /Count {pages} >>").as_bytes());
        writer.object(3, b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>");
        writer.object(4, b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>");

        let per_page = Self::rows_per_page();
        for page in 0..pages {
            let start = page * per_page;
            let end = (start + per_page).min(self.rows.len());
            let content = self.page_content(page, pages, &self.rows[start.min(end)..end], &widths);
            let page_id = page_object_id(page);
            let content_id = page_id + 1;
            writer.object(
                page_id,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {content_id} 0 R >>"
                )
                .as_bytes(),
            );
            let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            stream.extend_from_slice(content.as_bytes());
            stream.extend_from_slice(b"\nendstream");
            writer.object(content_id, &stream);
        }

        writer.finish()
    }

    fn column_widths(&self) -> Vec<f32> {
        let usable = PAGE_WIDTH - 2.0 * MARGIN;
        let total: f32 = self.columns.iter().map(|c| c.weight.max(0.0)).sum();
        if total <= 0.0 {
            #[allow(clippy::cast_precision_loss)]
            let even = usable / self.columns.len().max(1) as f32;
            return vec![even; self.columns.len()];
        }
        self.columns.iter().map(|c| usable * c.weight.max(0.0) / total).collect()
    }

    fn page_content(&self, page: usize, pages: usize, rows: &[Vec<String>], widths: &[f32]) -> String {
        let mut ops = String::new();

        let title = format!("{} (page {} of {pages})", self.title, page + 1);
        ops.push_str(&text_op("F2", TITLE_SIZE, MARGIN, PAGE_HEIGHT - MARGIN - TITLE_SIZE, &title));

        let top = header_top();
        let table_width: f32 = widths.iter().sum();
        ops.push_str(&format!("q {HEADER_FILL} rg {MARGIN} {} {table_width} {ROW_HEIGHT} re f Q\n", top - ROW_HEIGHT));
        ops.push_str("1 1 1 rg\n");
        let headers = self.columns.iter().map(|c| c.header.clone()).collect::<Vec<_>>();
        ops.push_str(&row_ops("F2", top, &headers, widths));
        ops.push_str("0 0 0 rg\n");

        for (i, row) in rows.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let row_top = top - ROW_HEIGHT * (i as f32 + 1.0);
            if i % 2 == 1 {
                ops.push_str(&format!("q {STRIPE_FILL} rg {MARGIN} {} {table_width} {ROW_HEIGHT} re f Q\n", row_top - ROW_HEIGHT));
            }
            ops.push_str(&row_ops("F1", row_top, row, widths));
        }
        ops
    }
}

fn header_top() -> f32 {
    PAGE_HEIGHT - MARGIN - TITLE_SIZE - 10.0
}

fn page_object_id(page: usize) -> usize {
    5 + page * 2
}

fn row_ops(font: &str, row_top: f32, cells: &[String], widths: &[f32]) -> String {
    let baseline = row_top - ROW_HEIGHT + 3.0;
    let mut x = MARGIN;
    let mut ops = String::new();
    for (i, width) in widths.iter().enumerate() {
        let value = cells.get(i).map(String::as_str).unwrap_or_default();
        let clipped = fit_to_width(value, *width - 2.0 * CELL_PADDING);
        if !clipped.is_empty() {
            ops.push_str(&text_op(font, FONT_SIZE, x + CELL_PADDING, baseline, &clipped));
        }
        x += width;
    }
    ops
}

fn text_op(font: &str, size: f32, x: f32, y: f32, text: &str) -> String {
    format!("BT /{font} {size} Tf {x:.2} {y:.2} Td ({}) Tj ET\n", escape_text(text))
}

/// Truncate `text` to the number of average-width glyphs that fit in `width`.
pub(crate) fn fit_to_width(text: &str, width: f32) -> String {
    let flattened: String = text.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max_chars = (width / (FONT_SIZE * 0.5)).floor().max(0.0) as usize;
    let count = flattened.chars().count();
    if count <= max_chars {
        return flattened;
    }
    if max_chars <= 3 {
        return flattened.chars().take(max_chars).collect();
    }
    let mut out: String = flattened.chars().take(max_chars - 3).collect();
    out.push_str("...");
    out
}

/// Escape a string for a PDF literal, mapping Latin-1 to octal escapes.
pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            ' '..='~' => out.push(c),
            '\u{a0}'..='\u{ff}' => out.push_str(&format!("\\{:03o}", u32::from(c))),
            _ => out.push('?'),
        }
    }
    out
}

#[derive(Default)]
struct PdfWriter {
    out: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    /// Append object `id`. Objects must be written in ascending id order.
    fn object(&mut self, id: usize, body: &[u8]) {
        if self.out.is_empty() {
            self.out.extend_from_slice(b"%PDF-1.4\n");
        }
        debug_assert_eq!(id, self.offsets.len() + 1);
        self.offsets.push(self.out.len());
        self.out.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
        self.out.extend_from_slice(body);
        self.out.extend_from_slice(b"\nendobj\n");
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_at = self.out.len();
        let size = self.offsets.len() + 1;
        let mut xref = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for offset in &self.offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!("trailer\n<< /Size {size} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n"));
        self.out.extend_from_slice(xref.as_bytes());
        self.out
    }
}
