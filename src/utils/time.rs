//! Time utilities: parsing HH:MM:SS wall-clock stamps, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Minutes since midnight, seconds included as a fraction.
pub fn clock_minutes(t: &str) -> AppResult<f64> {
    let time = parse_clock(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(time.num_seconds_from_midnight() as f64 / 60.0)
}

/// Minutes elapsed between two wall-clock stamps. A stop earlier than the
/// start is read as a recording that crossed midnight.
pub fn elapsed_minutes(start: &str, stop: &str) -> AppResult<f64> {
    let span = clock_minutes(stop)? - clock_minutes(start)?;
    if span < 0.0 {
        Ok(span + MINUTES_PER_DAY)
    } else {
        Ok(span)
    }
}
