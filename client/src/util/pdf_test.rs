use super::*;

fn sample(rows: usize) -> PdfTable {
    let mut table = PdfTable::new(
        "System Logs",
        vec![PdfColumn::new("Time", 2.0), PdfColumn::new("User", 1.0), PdfColumn::new("Message", 4.0)],
    );
    for i in 0..rows {
        table.push(vec![format!("2024-01-0{} 10:00:00", i % 9 + 1), format!("user{i}"), "logged in".to_owned()]);
    }
    table
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[test]
fn document_has_header_and_trailer() {
    let bytes = sample(3).render();
    assert!(bytes.starts_with(b"%PDF-1.4\n"));
    assert!(bytes.ends_with(b"%%EOF\n"));
    assert!(find(&bytes, b"/Count 1").is_some());
}

#[test]
fn startxref_points_at_xref_table() {
    let bytes = sample(3).render();
    let text = String::from_utf8_lossy(&bytes);
    let tail = text.rsplit("startxref\n").next().unwrap_or_default();
    let offset: usize = tail.lines().next().unwrap_or_default().parse().unwrap_or(0);
    assert!(bytes[offset..].starts_with(b"xref\n"));
}

#[test]
fn xref_offsets_point_at_objects() {
    let bytes = sample(2).render();
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let xref = &text[text.rfind("xref\n").unwrap_or(0)..];
    let entries: Vec<&str> = xref.lines().skip(3).take_while(|l| l.ends_with(" n ")).collect();
    assert!(!entries.is_empty());
    for (i, entry) in entries.iter().enumerate() {
        let offset: usize = entry[..10].parse().unwrap_or(0);
        let expected = format!("{} 0 obj", i + 1);
        assert!(bytes[offset..].starts_with(expected.as_bytes()), "object {} misplaced", i + 1);
    }
}

#[test]
fn long_tables_paginate() {
    let rows = PdfTable::rows_per_page() * 2 + 1;
    let table = sample(rows);
    assert_eq!(table.page_count(), 3);
    let bytes = table.render();
    assert!(find(&bytes, b"/Count 3").is_some());
    assert!(find(&bytes, b"(page 3 of 3)").is_some());
}

#[test]
fn empty_table_still_renders_one_page() {
    let table = sample(0);
    assert_eq!(table.page_count(), 1);
    assert!(find(&table.render(), b"/Count 1").is_some());
}

#[test]
fn escape_text_handles_delimiters_and_non_latin() {
    assert_eq!(escape_text("a(b)c\\"), "a\\(b\\)c\\\\");
    assert_eq!(escape_text("café"), "caf\\351");
    assert_eq!(escape_text("日本"), "??");
}

#[test]
fn fit_to_width_truncates_with_ellipsis() {
    let fitted = fit_to_width(&"x".repeat(100), 35.0);
    assert_eq!(fitted.chars().count(), 10);
    assert!(fitted.ends_with("..."));
    assert_eq!(fit_to_width("short", 35.0), "short");
    assert_eq!(fit_to_width("a\nb", 35.0), "a b");
}
