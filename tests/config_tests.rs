mod common;

use common::temp_dir;
use rbattlog::config::Config;
use std::fs;

#[test]
fn missing_file_gives_defaults() {
    let dir = temp_dir("config_missing");
    let cfg = Config::load(Some(&dir.join("nope.conf"))).expect("defaults");

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.missing_marker, "--");
    assert_eq!(cfg.comparison_points, 100);
    assert_eq!(cfg.date_formats.len(), 5);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = temp_dir("config_partial");
    let path = dir.join("rbattlog.conf");
    fs::write(&path, "missing_marker: \"n/a\"\nheatmap_bins: 6\n").expect("write");

    let cfg = Config::load(Some(&path)).expect("load");
    assert_eq!(cfg.missing_marker, "n/a");
    assert_eq!(cfg.heatmap_bins, 6);
    assert_eq!(cfg.comparison_points, 100);
    assert_eq!(cfg.log_level, "warn");
    assert!(cfg.check().is_empty());
}

#[test]
fn broken_yaml_is_an_error() {
    let dir = temp_dir("config_broken");
    let path = dir.join("rbattlog.conf");
    fs::write(&path, "heatmap_bins: [oops").expect("write");

    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn level_filter_falls_back_to_warn() {
    let cfg = Config {
        log_level: "chatty".to_string(),
        ..Config::default()
    };
    assert_eq!(cfg.level_filter(), log::LevelFilter::Warn);
    assert_eq!(cfg.check().len(), 1);
}
