// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore netbios

use pretty_assertions::assert_eq;
use serde_json::Value;
use ztests::new_ucmd;

const LABELS: [&str; 8] = [
    "ComputerNameNetBIOS",
    "ComputerNameDnsHostname",
    "ComputerNameDnsDomain",
    "ComputerNameDnsFullyQualified",
    "ComputerNamePhysicalNetBIOS",
    "ComputerNamePhysicalDnsHostname",
    "ComputerNamePhysicalDnsDomain",
    "ComputerNamePhysicalDnsFullyQualified",
];

#[test]
fn test_exits_zero() {
    new_ucmd!().succeeds();
}

#[test]
fn test_one_line_per_query() {
    let result = new_ucmd!().succeeds();
    let printed = result.stdout_str().lines().count();
    let failed = result
        .stderr_str()
        .lines()
        .filter(|l| l.starts_with("Error: GetLastError="))
        .count();
    assert_eq!(printed + failed, LABELS.len());
}

#[test]
fn test_labels_in_order() {
    let result = new_ucmd!().succeeds();
    let printed: Vec<&str> = result
        .stdout_str()
        .lines()
        .map(|l| l.split_once('=').expect("missing '='").0)
        .collect();
    let expected: Vec<&str> = LABELS
        .iter()
        .copied()
        .filter(|label| printed.contains(label))
        .collect();
    assert_eq!(printed, expected);
}

#[test]
fn test_stable_across_runs() {
    let first = new_ucmd!().succeeds();
    let second = new_ucmd!().succeeds();
    assert_eq!(first.stdout_str(), second.stdout_str());
    assert_eq!(first.stderr_str(), second.stderr_str());
}

#[test]
#[cfg(unix)]
fn test_unix_physical_names_match_logical() {
    let result = new_ucmd!().succeeds();
    result.no_stderr();
    let values: Vec<&str> = result
        .stdout_str()
        .lines()
        .filter_map(|l| l.split_once('=').map(|(_, value)| value))
        .collect();
    assert_eq!(values.len(), 8);
    assert_eq!(values[..4], values[4..]);
    let netbios: String = values[1].chars().take(15).collect();
    assert_eq!(values[0], netbios.to_uppercase());
}

#[test]
fn test_help() {
    new_ucmd!()
        .arg("--help")
        .succeeds()
        .stdout_contains("Usage:")
        .stdout_contains("--obj");
}

#[test]
fn test_version() {
    let result = new_ucmd!().arg("--version").succeeds();
    assert!(result.stdout_str().starts_with("zwhoami "));
}

fn assert_full_report(args: &[&str]) {
    let plain = new_ucmd!().succeeds();
    let result = new_ucmd!().args(args).succeeds();
    let printed = result.stdout_str().lines().count();
    let failed = result
        .stderr_str()
        .lines()
        .filter(|l| l.starts_with("Error: GetLastError="))
        .count();
    assert_eq!(printed + failed, LABELS.len());
    assert_eq!(result.stdout_str(), plain.stdout_str());
}

#[test]
fn test_unknown_flag_is_ignored() {
    assert_full_report(&["--definitely-invalid"]);
    assert_full_report(&["-x"]);
}

#[test]
fn test_operands_are_ignored() {
    assert_full_report(&["extra"]);
    assert_full_report(&["extra", "-x", "--more"]);
}

#[test]
fn test_field_requires_obj() {
    new_ucmd!()
        .args(&["--field", "ComputerNameNetBIOS"])
        .fails_with_code(1);
}

#[test]
fn test_obj_output() {
    let result = new_ucmd!().arg("--obj").succeeds();
    let value: Value = serde_json::from_str(result.stdout_str()).expect("invalid JSON");
    let keys: Vec<&str> = value
        .as_object()
        .expect("not an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, LABELS);
    assert_eq!(result.stdout_str().lines().count(), 1);
}

#[test]
fn test_obj_pretty() {
    let result = new_ucmd!().args(&["--obj", "--pretty"]).succeeds();
    assert!(result.stdout_str().lines().count() > 1);
    serde_json::from_str::<Value>(result.stdout_str()).expect("invalid JSON");
}

#[test]
fn test_obj_verbose() {
    let result = new_ucmd!().args(&["--obj", "--verbose-json"]).succeeds();
    let value: Value = serde_json::from_str(result.stdout_str()).expect("invalid JSON");
    let entry = &value["ComputerNamePhysicalDnsHostname"];
    assert_eq!(entry["format"], 5);
    assert_eq!(entry["physical"], true);
    assert!(entry.get("value").is_some());
    assert!(entry.get("error").is_some());
}

#[test]
fn test_obj_field() {
    let result = new_ucmd!()
        .args(&["--obj", "--field", "ComputerNameDnsHostname"])
        .succeeds();
    let value: Value = serde_json::from_str(result.stdout_str()).expect("invalid JSON");
    let object = value.as_object().expect("not an object");
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("ComputerNameDnsHostname"));
}
