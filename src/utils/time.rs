//! Time utilities: parsing HH:MM wall-clock strings, duration computations,
//! formatting minute counts.
//!
//! Schedule times are plain `HH:MM` strings with no date or timezone
//! attached. An end time numerically earlier than its start time means the
//! event runs past midnight into the next calendar day; [`minutes_diff`]
//! encodes that wraparound.

use crate::errors::{AppError, AppResult};

pub const MINUTES_PER_DAY: i32 = 1440;

/// Parse a strict `HH:MM` string into minutes since local midnight.
///
/// Exactly two zero-padded fields separated by `:`, hour `00..=23`,
/// minute `00..=59`. Anything else is `AppError::InvalidTime`.
pub fn to_minutes(t: &str) -> AppResult<i32> {
    let invalid = || AppError::InvalidTime(t.to_string());

    let (hh, mm) = t.split_once(':').ok_or_else(invalid)?;
    if hh.len() != 2 || mm.len() != 2 {
        return Err(invalid());
    }

    let h: i32 = hh.parse().map_err(|_| invalid())?;
    let m: i32 = mm.parse().map_err(|_| invalid())?;

    if !(0..=23).contains(&h) || !(0..=59).contains(&m) {
        return Err(invalid());
    }

    Ok(h * 60 + m)
}

/// Minutes from `start` to `end`, wrapping around midnight.
///
/// `end < start` (numerically) is an overnight span: `21:15` to `02:00`
/// is 285 minutes. `start == end` is a zero-length span, never a full
/// day; the guard keeps that contract independent of the modulo math.
pub fn minutes_diff(start: &str, end: &str) -> AppResult<i32> {
    let s = to_minutes(start)?;
    let e = to_minutes(end)?;

    if s == e {
        return Ok(0);
    }

    Ok((e - s).rem_euclid(MINUTES_PER_DAY))
}

/// Render a minute count as a short human-readable duration.
///
/// Zero renders as `"0m"` so a computed zero-length span stays
/// distinguishable from an event with no end time at all.
pub fn format_duration(mins: i32) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;

    match (hours, minutes) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {:02}m", h, m),
    }
}

/// Render a start/end pair for display, e.g. `"14:00 – 14:45"` or
/// `"21:15"` when no end time is set.
pub fn format_time_range(start: &str, end: Option<&str>) -> String {
    match end {
        Some(e) => format!("{} – {}", start, e),
        None => start.to_string(),
    }
}
