//! URL list parsing.
//!
//! One record per line, fields separated by tabs: `loc [lastmod [changefreq [priority]]]`.
//! Blank lines and lines starting with `#` are ignored. An empty field counts as absent.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use core_smap::UrlRecord;

use crate::errors::Error;

/// Parses one line of the URL list. `line_number` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for lines that carry no record.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<UrlRecord>, Error> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() || trimmed.trim_start().starts_with('#') {
        return Ok(None);
    }

    let mut fields = trimmed.split('\t').map(str::trim).map(|f| (!f.is_empty()).then_some(f));
    let invalid = |reason: String| Error::InvalidLine {
        line: line_number,
        reason,
    };

    let location = match fields.next().flatten() {
        Some(loc) => loc,
        None => return Err(invalid("missing location".to_string())),
    };
    let mut record = UrlRecord::new(location);

    if let Some(raw) = fields.next().flatten() {
        let at = parse_lastmod(raw).ok_or_else(|| invalid(format!("unrecognized lastmod '{}'", raw)))?;
        record = record.last_modified(at);
    }

    if let Some(raw) = fields.next().flatten() {
        record = record
            .with_change_frequency_str(raw)
            .map_err(|e| invalid(e.to_string()))?;
    }

    if let Some(raw) = fields.next().flatten() {
        record = record.priority(raw);
    }

    if let Some(extra) = fields.find_map(|f| f) {
        return Err(invalid(format!("unexpected extra field '{}'", extra)));
    }

    Ok(Some(record))
}

/// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_lastmod(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).fixed_offset())
}
