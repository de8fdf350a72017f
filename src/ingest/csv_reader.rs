use crate::core::normalizer::RawRecord;
use crate::errors::AppResult;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

/// Read a battery-debug CSV into one header-keyed record per row.
pub fn read_records(path: &Path) -> AppResult<Vec<RawRecord>> {
    let file = std::fs::File::open(path)?;
    let records = read_records_from(file)?;
    log::debug!("{}: {} records", path.display(), records.len());
    Ok(records)
}

/// Rows may be shorter than the header (missing trailing cells read as
/// absent); blank lines are skipped.
pub fn read_records_from<R: Read>(reader: R) -> AppResult<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if rec.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let row: RawRecord = headers
            .iter()
            .zip(rec.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        out.push(row);
    }

    Ok(out)
}
