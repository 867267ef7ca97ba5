//! End-to-end parsing and export of fixture logs from disk

use std::fs;

use rablog::{CombatLog, ExportFormat};

use crate::helpers::{fixed_context, temp_fixture};

#[test]
fn crlf_log_parses_like_lf_log() {
    let (temp, path) = temp_fixture("basic.txt");
    let crlf_path = temp.path().join("crlf.txt");
    let content = fs::read_to_string(&path).unwrap().replace('\n', "\r\n");
    fs::write(&crlf_path, content).unwrap();

    let lf = CombatLog::parse(&path).unwrap();
    let crlf = CombatLog::parse(&crlf_path).unwrap();
    assert_eq!(lf.pulls, crlf.pulls);
}

#[test]
fn invalid_utf8_does_not_abort_parsing() {
    let (temp, path) = temp_fixture("basic.txt");
    let mut bytes = b"\xff\xfe garbage from another addon\n".to_vec();
    bytes.extend(fs::read(&path).unwrap());
    let dirty = temp.path().join("dirty.txt");
    fs::write(&dirty, bytes).unwrap();

    let log = CombatLog::parse(&dirty).unwrap();
    assert_eq!(log.pulls.len(), 3);
    assert_eq!(log.summary.total_lines, 19);
}

#[test]
fn export_all_formats_to_disk() {
    let (temp, path) = temp_fixture("basic.txt");
    let log = CombatLog::parse(&path).unwrap();
    let output = temp.path().join("report");

    for format in ExportFormat::All.expand() {
        let target = format.output_path(Some(&output), "unused");
        format.write(&log.pulls, &fixed_context(), &target).unwrap();
    }

    let text = fs::read_to_string(temp.path().join("report.txt")).unwrap();
    let csv = fs::read_to_string(temp.path().join("report.csv")).unwrap();
    let json = fs::read_to_string(temp.path().join("report.json")).unwrap();
    assert!(text.contains("Total Entries: 3"));
    assert_eq!(csv.matches("\r\n").count(), 6);
    assert!(json.contains("\"totalEntries\": 3"));
}
