//! Unit tests for config module

use std::path::PathBuf;

use rablog::config::{CoverageStatus, ReportConfig};
use rablog::{Config, ExportFormat};

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.input.search_paths.len(), 4);
    assert_eq!(
        config.input.search_paths[0],
        PathBuf::from("Logs/WoWCombatLog.txt")
    );
    assert_eq!(config.export.format, ExportFormat::Text);
    assert_eq!(config.export.output_stem, "rabuffs_combatlog");
    assert_eq!(config.report.good_threshold, 95);
    assert_eq!(config.report.warn_threshold, 80);
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_sections_fill_in_defaults() {
    let toml_str = r#"
[export]
format = "json"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.export.format, ExportFormat::Json);
    assert_eq!(config.export.output_stem, "rabuffs_combatlog");
    assert_eq!(config.report, ReportConfig::default());
}

#[test]
fn unknown_format_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[export]\nformat = \"xml\"\n");
    assert!(result.is_err());
}

#[test]
fn threshold_validation() {
    assert!(ReportConfig::default().validate().is_ok());

    let over = ReportConfig {
        good_threshold: 101,
        warn_threshold: 80,
    };
    assert!(over.validate().unwrap_err().contains("exceeds maximum"));

    let inverted = ReportConfig {
        good_threshold: 70,
        warn_threshold: 90,
    };
    assert!(inverted.validate().is_err());
}

#[test]
fn status_buckets_are_inclusive() {
    let report = ReportConfig::default();
    assert_eq!(report.status(100), CoverageStatus::Good);
    assert_eq!(report.status(95), CoverageStatus::Good);
    assert_eq!(report.status(94), CoverageStatus::Warning);
    assert_eq!(report.status(80), CoverageStatus::Warning);
    assert_eq!(report.status(79), CoverageStatus::Poor);
    assert_eq!(CoverageStatus::Poor.symbol(), '✗');
}
