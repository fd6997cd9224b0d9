//! Deadline string parsing.
//!
//! Deadlines in the dataset are free-form strings. Only three exact shapes
//! are accepted, tried in order:
//!   2026-03-01 14:30:00
//!   2026-03-01 14:30
//!   2026-03-01            (time defaults to 23:59:59)
//!
//! Placeholders ("TBD", "TBA", "N/A") and anything else yield `None`.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

const PLACEHOLDERS: &[&str] = &["TBD", "TBA", "N/A"];

static FORMATS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2}) (\d{2}):(\d{2}):(\d{2})$").expect("static pattern"),
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2}) (\d{2}):(\d{2})$").expect("static pattern"),
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("static pattern"),
    ]
});

/// Parse a raw deadline into a naive local timestamp.
///
/// The result carries no timezone; it only gains meaning once paired with the
/// cycle's timezone label (see [`crate::tz::to_reference`]).
pub fn parse_deadline(raw: Option<&str>) -> Option<NaiveDateTime> {
    let cleaned: String = raw?.trim().chars().filter(|c| *c != '"' && *c != '\'').collect();
    if cleaned.is_empty() {
        return None;
    }

    let upper = cleaned.to_uppercase();
    if PLACEHOLDERS.iter().any(|p| upper.contains(p)) {
        return None;
    }

    let caps = FORMATS.iter().find_map(|re| re.captures(&cleaned))?;
    let num = |i: usize, default: u32| -> Option<u32> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(default),
        }
    };

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, num(2, 1)?, num(3, 1)?)?.and_hms_opt(
        num(4, 23)?,
        num(5, 59)?,
        num(6, 59)?,
    )
}
