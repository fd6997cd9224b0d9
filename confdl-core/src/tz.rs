//! Time utilities: fixed-offset timezone labels and conversion to the
//! reference timezone (UTC+9, KST).

use chrono::{Duration, NaiveDateTime};

/// Reference timezone offset in minutes (UTC+9).
pub const REFERENCE_OFFSET_MINUTES: i32 = 540;

/// Offset assumed for labels we cannot resolve: Anywhere on Earth (UTC-12).
pub const DEFAULT_OFFSET_MINUTES: i32 = -720;

/// Label used when a cycle declares no timezone.
pub const DEFAULT_TIMEZONE_LABEL: &str = "UTC-12";

/// Look up a label in the fixed offset table.
pub fn fixed_offset_minutes(label: &str) -> Option<i32> {
    let minutes = match label {
        "UTC-12" | "AoE" => -720,
        "UTC-11" => -660,
        "UTC-10" => -600,
        "UTC-9" => -540,
        "UTC-8" => -480,
        "UTC-7" => -420,
        "UTC-6" => -360,
        "UTC-5" => -300,
        "UTC-4" => -240,
        "UTC-3" => -180,
        "UTC-2" => -120,
        "UTC-1" => -60,
        "UTC" | "UTC+0" => 0,
        "UTC+1" => 60,
        "UTC+2" => 120,
        "UTC+3" => 180,
        "UTC+4" => 240,
        "UTC+5" => 300,
        "UTC+6" => 360,
        "UTC+7" => 420,
        "UTC+8" => 480,
        "UTC+9" => 540,
        "UTC+10" => 600,
        "UTC+11" => 660,
        "UTC+12" => 720,
        _ => return None,
    };
    Some(minutes)
}

/// UTC offset (minutes) for `label`; anything outside the table is UTC-12.
pub fn resolve_offset_minutes(label: &str) -> i32 {
    fixed_offset_minutes(label).unwrap_or(DEFAULT_OFFSET_MINUTES)
}

/// Convert a naive wall-clock time in `label` into reference-timezone wall-clock time.
pub fn to_reference(local: NaiveDateTime, label: &str) -> NaiveDateTime {
    let offset = resolve_offset_minutes(label);
    local - Duration::minutes(offset.into()) + Duration::minutes(REFERENCE_OFFSET_MINUTES.into())
}
