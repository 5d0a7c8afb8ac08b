//! In-memory filtering, ordering, and export for the two log streams.
//!
//! DESIGN
//! ======
//! Both streams are fetched once in full and filtered client-side. Rows are
//! ordered newest first; rows without a parseable timestamp sink to the
//! bottom and tie-break on id, descending. Date bounds are inclusive whole
//! days; once any bound is set, rows without a timestamp are excluded.
//! Choices in the filter dropdowns come from the fetched data.

#[cfg(test)]
#[path = "monitoring_test.rs"]
mod monitoring_test;

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

use crate::net::types::{InterfaceLog, LogCategory, SystemLog};
use crate::util::clock::{format_timestamp, parse_timestamp};
use crate::util::csv::CsvTable;
use crate::util::pdf::{PdfColumn, PdfTable};

/// One fetched stream and its request state.
#[derive(Clone, Debug)]
pub struct LogStream<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for LogStream<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<T> LogStream<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }
}

/// Shared date window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_set(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn contains(&self, at: Option<NaiveDateTime>) -> bool {
        if !self.is_set() {
            return true;
        }
        let Some(day) = at.map(|t| t.date()) else {
            return false;
        };
        self.start.is_none_or(|s| day >= s) && self.end.is_none_or(|e| day <= e)
    }
}

fn username_matches(needle: &str, username: Option<&str>) -> bool {
    let needle = needle.trim();
    needle.is_empty() || username.unwrap_or_default().to_lowercase().contains(&needle.to_lowercase())
}

fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Newest first; undated rows last; ties by id descending.
fn newest_first(a: (Option<NaiveDateTime>, &str), b: (Option<NaiveDateTime>, &str)) -> Ordering {
    match (a.0, b.0) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| compare_ids(b.1, a.1))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut out: Vec<String> = values.flatten().filter(|v| !v.is_empty()).map(str::to_owned).collect();
    out.sort();
    out.dedup();
    out
}

fn display_time(raw: Option<&str>) -> String {
    raw.map(format_timestamp).unwrap_or_default()
}

// =============================================================
// System logs
// =============================================================

impl SystemLog {
    pub fn parsed_time(&self) -> Option<NaiveDateTime> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }

    pub fn display_time(&self) -> String {
        display_time(self.timestamp.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemLogFilters {
    pub username: String,
    pub category: Option<LogCategory>,
    pub range: DateRange,
}

impl SystemLogFilters {
    pub fn matches(&self, log: &SystemLog) -> bool {
        username_matches(&self.username, log.user_username.as_deref())
            && self.category.is_none_or(|c| c == log.log_type)
            && self.range.contains(log.parsed_time())
    }
}

pub fn sort_system_logs(logs: &mut [SystemLog]) {
    logs.sort_by(|a, b| newest_first((a.parsed_time(), &a.id), (b.parsed_time(), &b.id)));
}

pub fn filter_system_logs(logs: &[SystemLog], filters: &SystemLogFilters) -> Vec<SystemLog> {
    logs.iter().filter(|l| filters.matches(l)).cloned().collect()
}

pub fn available_categories(logs: &[SystemLog]) -> Vec<LogCategory> {
    let mut out: Vec<LogCategory> = logs.iter().map(|l| l.log_type).collect();
    out.sort_by_key(|c| c.label());
    out.dedup();
    out
}

const SYSTEM_HEADERS: [&str; 5] = ["ID", "Username", "Action", "Timestamp", "Description"];

fn system_row(log: &SystemLog) -> Vec<String> {
    vec![
        log.id.clone(),
        log.user_username.clone().unwrap_or_default(),
        log.log_type.label().to_owned(),
        log.display_time(),
        log.log_description.clone(),
    ]
}

pub fn system_logs_csv(logs: &[SystemLog]) -> CsvTable {
    let mut table = CsvTable::new(&SYSTEM_HEADERS);
    for log in logs {
        table.push(system_row(log));
    }
    table
}

pub fn system_logs_pdf(logs: &[SystemLog]) -> PdfTable {
    let weights = [1.0, 2.0, 2.0, 2.5, 6.0];
    let columns = SYSTEM_HEADERS.iter().zip(weights).map(|(h, w)| PdfColumn::new(h, w)).collect();
    let mut table = PdfTable::new("System Logs", columns);
    for log in logs {
        table.push(system_row(log));
    }
    table
}

// =============================================================
// Interface logs
// =============================================================

impl InterfaceLog {
    pub fn parsed_time(&self) -> Option<NaiveDateTime> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }

    pub fn display_time(&self) -> String {
        display_time(self.timestamp.as_deref())
    }

    pub fn outcome_label(&self) -> &'static str {
        if self.did_fail { "Failed" } else { "Success" }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceLogFilters {
    pub username: String,
    pub alteration_type: Option<String>,
    pub did_fail: Option<bool>,
    pub interface: Option<String>,
    pub project: Option<String>,
    pub range: DateRange,
}

fn exact(filter: Option<&String>, value: Option<&String>) -> bool {
    filter.is_none_or(|f| value == Some(f))
}

impl InterfaceLogFilters {
    pub fn matches(&self, log: &InterfaceLog) -> bool {
        username_matches(&self.username, log.user_username.as_deref())
            && exact(self.alteration_type.as_ref(), log.alteration_type.as_ref())
            && self.did_fail.is_none_or(|f| f == log.did_fail)
            && exact(self.interface.as_ref(), log.interface.as_ref())
            && exact(self.project.as_ref(), log.project.as_ref())
            && self.range.contains(log.parsed_time())
    }
}

pub fn sort_interface_logs(logs: &mut [InterfaceLog]) {
    logs.sort_by(|a, b| newest_first((a.parsed_time(), &a.id), (b.parsed_time(), &b.id)));
}

pub fn filter_interface_logs(logs: &[InterfaceLog], filters: &InterfaceLogFilters) -> Vec<InterfaceLog> {
    logs.iter().filter(|l| filters.matches(l)).cloned().collect()
}

/// Dropdown choices: `(alteration types, interfaces, projects)`.
pub fn interface_filter_choices(logs: &[InterfaceLog]) -> (Vec<String>, Vec<String>, Vec<String>) {
    (
        distinct_sorted(logs.iter().map(|l| l.alteration_type.as_deref())),
        distinct_sorted(logs.iter().map(|l| l.interface.as_deref())),
        distinct_sorted(logs.iter().map(|l| l.project.as_deref())),
    )
}

const INTERFACE_HEADERS: [&str; 8] =
    ["ID", "Username", "Type", "Failed", "Interface", "Project", "Timestamp", "Description"];

fn interface_row(log: &InterfaceLog) -> Vec<String> {
    vec![
        log.id.clone(),
        log.user_username.clone().unwrap_or_default(),
        log.alteration_type.clone().unwrap_or_default(),
        if log.did_fail { "Yes" } else { "No" }.to_owned(),
        log.interface.clone().unwrap_or_default(),
        log.project.clone().unwrap_or_default(),
        log.display_time(),
        log.log_description.clone().unwrap_or_default(),
    ]
}

pub fn interface_logs_csv(logs: &[InterfaceLog]) -> CsvTable {
    let mut table = CsvTable::new(&INTERFACE_HEADERS);
    for log in logs {
        table.push(interface_row(log));
    }
    table
}

pub fn interface_logs_pdf(logs: &[InterfaceLog]) -> PdfTable {
    let weights = [1.0, 2.0, 2.0, 1.0, 2.5, 2.0, 2.5, 5.0];
    let columns = INTERFACE_HEADERS.iter().zip(weights).map(|(h, w)| PdfColumn::new(h, w)).collect();
    let mut table = PdfTable::new("Interface Logs", columns);
    for log in logs {
        table.push(interface_row(log));
    }
    table
}
