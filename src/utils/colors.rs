/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";

/// Battery drop color:
/// \<0 → red (battery went up, data anomaly)
/// 0 → grey
/// \>0 → reset
pub fn color_for_drop(value: f64) -> &'static str {
    if value < 0.0 {
        RED
    } else if value == 0.0 {
        GREY
    } else {
        RESET
    }
}

/// Estimation error color relative to the actual remaining time:
/// within 10% → green, within 25% → yellow, beyond → red.
pub fn color_for_error(error: f64, actual: f64) -> &'static str {
    if actual <= 0.0 {
        return RESET;
    }
    let ratio = error / actual;
    if ratio <= 0.10 {
        GREEN
    } else if ratio <= 0.25 {
        YELLOW
    } else {
        RED
    }
}

/// Grey out placeholders (`--`, `off`, `Unknown`).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "off" || v == "Unknown" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
