use super::*;

/// Minimal RFC 4180 reader used to check that exported text parses back.
fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => record.push(std::mem::take(&mut field)),
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                _ => field.push(c),
            }
        }
    }
    record.push(field);
    records.push(record);
    records
}

#[test]
fn escape_field_wraps_and_doubles_quotes() {
    assert_eq!(escape_field("plain"), "\"plain\"");
    assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_field(""), "\"\"");
}

#[test]
fn awkward_field_round_trips_exactly() {
    let original = "Smith, \"Jr\"\nsecond line";
    let mut table = CsvTable::new(&["Name", "Role"]);
    table.push(vec![original.to_owned(), "admin".to_owned()]);

    let parsed = parse_csv(&table.render());
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0], vec!["Name", "Role"]);
    assert_eq!(parsed[1][0], original);
    assert_eq!(parsed[1][1], "admin");
}

#[test]
fn render_joins_records_with_newlines() {
    let mut table = CsvTable::new(&["A"]);
    table.push(vec!["1".to_owned()]);
    table.push(vec!["2".to_owned()]);
    assert_eq!(table.render(), "\"A\"\n\"1\"\n\"2\"");
}

#[test]
fn header_only_table_is_empty() {
    let table = CsvTable::new(&["A", "B"]);
    assert!(table.is_empty());
    assert_eq!(table.render(), "\"A\",\"B\"");
}
