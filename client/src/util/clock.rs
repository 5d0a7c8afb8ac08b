//! Wall-clock access and timestamp display helpers.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        // f64 milliseconds from `Date.now()` are integral.
        #[allow(clippy::cast_possible_truncation)]
        let ms = js_sys::Date::now() as i64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Parse the timestamp shapes the backend emits: RFC 3339, naive ISO 8601
/// with or without fractional seconds, and `YYYY-MM-DD HH:MM:SS`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `YYYY-MM-DD HH:MM:SS`, or the raw text when it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Parse an `<input type="date">` value. Empty input means no bound.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Human-readable rendering of an epoch-millisecond instant, for audit text.
pub fn describe_instant(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map_or_else(|| ms.to_string(), |dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Wait `ms` milliseconds on the browser event loop. Returns at once
/// off-browser.
pub async fn sleep_ms(ms: u64) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
