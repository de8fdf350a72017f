use chrono::NaiveDate;

pub const DEFAULT_DATE_FORMATS: [&str; 5] =
    ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y", "%m/%d/%Y"];

/// Try every configured format in order; the first match wins.
pub fn parse_surgery_date(s: &str, formats: &[String]) -> Option<NaiveDate> {
    let s = s.trim();
    formats
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

pub fn default_formats() -> Vec<String> {
    DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect()
}
