//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use chrono::{Local, TimeZone};
use tempfile::TempDir;

use rablog::config::ReportConfig;
use rablog::{CombatLog, ExportContext};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Parse a fixture from disk
pub fn parse_fixture(name: &str) -> CombatLog {
    CombatLog::parse(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", name, e))
}

/// Create a temporary directory with a copy of a fixture
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let fixture_content = load_fixture(name);
    let temp_path = temp_dir.path().join(name);
    fs::write(&temp_path, fixture_content).expect("Failed to write temp fixture");
    (temp_dir, temp_path)
}

/// Export context with a fixed clock
pub fn fixed_context() -> ExportContext {
    ExportContext {
        generated: Local
            .with_ymd_and_hms(2024, 11, 13, 21, 0, 0)
            .single()
            .expect("valid local time"),
        source: "WoWCombatLog.txt".to_string(),
        report: ReportConfig::default(),
    }
}
