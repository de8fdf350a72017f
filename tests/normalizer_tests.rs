use rbattlog::core::normalizer::{CarryForward, RawRecord, normalize_record, normalize_rows};
use rbattlog::models::reading::{OFF, UNKNOWN, columns};

fn record(pairs: &[(&str, &str)]) -> RawRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn diagnostics_carry_forward_over_marker() {
    let records = vec![
        record(&[(columns::ADB_TEMPERATURE, "312"), (columns::ADB_HEALTH, "Good")]),
        record(&[(columns::ADB_TEMPERATURE, "--"), (columns::ADB_HEALTH, "--")]),
        record(&[(columns::ADB_TEMPERATURE, ""), (columns::ADB_HEALTH, "")]),
        record(&[(columns::ADB_TEMPERATURE, "318"), (columns::ADB_HEALTH, "Overheat")]),
    ];

    let rows = normalize_rows(&records, "--");
    let temps: Vec<f64> = rows.iter().map(|r| r.diag.temperature_dc).collect();
    let health: Vec<&str> = rows.iter().map(|r| r.diag.health.as_str()).collect();

    assert_eq!(temps, vec![312.0, 312.0, 312.0, 318.0]);
    assert_eq!(health, vec!["Good", "Good", "Good", "Overheat"]);
}

#[test]
fn diagnostics_before_first_value_fall_back() {
    let rows = normalize_rows(
        &[record(&[(columns::ADB_VOLTAGE, "--"), (columns::ADB_STATUS, "--")])],
        "--",
    );
    assert_eq!(rows[0].diag.voltage_uv, OFF);
    assert_eq!(rows[0].diag.status, UNKNOWN);
    assert_eq!(rows[0].diag.health, UNKNOWN);
}

#[test]
fn carry_forward_is_per_field() {
    let rows = normalize_rows(
        &[
            record(&[(columns::ADB_CURRENT, "-250000"), (columns::ADB_CAPACITY, "--")]),
            record(&[(columns::ADB_CURRENT, "--"), (columns::ADB_CAPACITY, "88")]),
        ],
        "--",
    );
    assert_eq!(rows[0].diag.capacity, OFF);
    assert_eq!(rows[1].diag.current_ua, -250000.0);
    assert_eq!(rows[1].diag.capacity, 88.0);
}

#[test]
fn carry_forward_does_not_leak_between_sessions() {
    let first = normalize_rows(&[record(&[(columns::ADB_TEMPERATURE, "300")])], "--");
    let second = normalize_rows(&[record(&[(columns::ADB_TEMPERATURE, "--")])], "--");

    assert_eq!(first[0].diag.temperature_dc, 300.0);
    assert_eq!(second[0].diag.temperature_dc, OFF);
}

#[test]
fn core_telemetry_never_carries_forward() {
    let rows = normalize_rows(
        &[
            record(&[(columns::WAD_BATTERY, "80"), (columns::LS_INTENSITY, "4")]),
            record(&[(columns::WAD_BATTERY, ""), (columns::LS_INTENSITY, "abc")]),
            record(&[(columns::WAD_BATTERY, "-1"), (columns::LS_INTENSITY, "--")]),
        ],
        "--",
    );
    assert_eq!(rows[0].wad_battery, 80.0);
    assert_eq!(rows[1].wad_battery, OFF);
    assert_eq!(rows[1].ls_intensity, OFF);
    assert_eq!(rows[2].wad_battery, OFF);
    assert_eq!(rows[2].ls_intensity, OFF);
}

#[test]
fn missing_columns_become_sentinels() {
    let r = normalize_record(
        &record(&[(columns::SURGERY_TIME, "10:00:00")]),
        "--",
        &mut CarryForward::new(),
    );
    assert_eq!(r.surgery_time, "10:00:00");
    assert_eq!(r.wad_battery, OFF);
    assert_eq!(r.ls_duration, OFF);
    assert_eq!(r.diag.capacity, OFF);
    assert_eq!(r.diag.health, UNKNOWN);
}

#[test]
fn custom_marker_is_honored() {
    let rows = normalize_rows(
        &[
            record(&[(columns::ADB_TEMPERATURE, "290")]),
            record(&[(columns::ADB_TEMPERATURE, "n/a")]),
        ],
        "n/a",
    );
    assert_eq!(rows[1].diag.temperature_dc, 290.0);
}

#[test]
fn normalizing_twice_gives_the_same_rows() {
    let records = vec![
        record(&[(columns::WAD_BATTERY, "90"), (columns::ADB_HEALTH, "Good")]),
        record(&[(columns::WAD_BATTERY, "89"), (columns::ADB_HEALTH, "--")]),
    ];
    let snapshot = records.clone();

    let a = normalize_rows(&records, "--");
    let b = normalize_rows(&records, "--");

    assert_eq!(a, b);
    assert_eq!(records, snapshot);
}

#[test]
fn nan_literal_is_not_a_reading() {
    let r = normalize_record(
        &record(&[(columns::WAD_BATTERY, "NaN"), (columns::ADB_CURRENT, "inf")]),
        "--",
        &mut CarryForward::new(),
    );
    assert_eq!(r.wad_battery, OFF);
    assert_eq!(r.diag.current_ua, OFF);
}

#[test]
fn cells_are_trimmed() {
    let r = normalize_record(
        &record(&[(columns::WAD_BATTERY, " 87 "), (columns::ADB_HEALTH, " Good ")]),
        "--",
        &mut CarryForward::new(),
    );
    assert_eq!(r.wad_battery, 87.0);
    assert_eq!(r.diag.health, "Good");
}
