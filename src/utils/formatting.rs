//! Formatting utilities used for CLI and export outputs.

/// Fixed-decimals rendering; `-0.00` is printed as `0.00`.
pub fn fmt_value(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Like [`fmt_value`], with `--` for gaps.
pub fn fmt_opt(v: Option<f64>, decimals: usize) -> String {
    v.map(|x| fmt_value(x, decimals))
        .unwrap_or_else(|| "--".to_string())
}
