use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

mod common;

#[test]
fn test_non_numeric_fields_normalize_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.csv");
    common::write_pricing_csv(
        &path,
        &[
            ["BAD-1", "abc", "twenty", "500", "", "", "x"],
            ["NEG-1", "-50", "-5", "-100", "-1", "-1", "-1"],
            ["OK-1", "100", "20", "500", "0", "0", "30"],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("seller-margin"));
    cmd.arg("batch").arg(&path);

    // Cost 0, VAT defaulted to 20, shipping 0.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "BAD-1,500.00,0.00,0.23,115.00,83.33,0.00,4.17,202.50,297.50,59.50",
        ))
        .stdout(predicate::str::contains(
            "NEG-1,0.00,0.00,0.135,0.00,0.00,0.00,0.00,0.00,0.00,0.00",
        ))
        .stdout(predicate::str::contains(
            "OK-1,500.00,100.00,0.23,115.00,83.33,30.00,4.17,332.50,167.50,33.50",
        ));
}

#[test]
fn test_unreadable_row_falls_back_to_zero_breakdown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invalid_utf8.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", common::HEADER.join(",")).unwrap();
    writeln!(file, "OK-1,100,20,500,0,0,30").unwrap();
    file.write_all(b"\xff\xfe,1,20,10,0,0,0\n").unwrap();
    writeln!(file, "OK-2,10,20,100,5,0,0").unwrap();
    drop(file);

    let output = Command::new(cargo_bin!("seller-margin"))
        .arg("batch")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error reading pricing row"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    // Header + three rows, the unreadable one replaced in place.
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("OK-1,"));
    assert_eq!(lines[2], ",0.00,0.00,0,0.00,0.00,0.00,0.00,0.00,0.00,0.00");
    assert!(lines[3].starts_with("OK-2,"));
}

#[test]
fn test_unknown_format_rejected() {
    let mut cmd = Command::new(cargo_bin!("seller-margin"));
    cmd.args(["quote", "--price", "10", "--format", "xml"]);

    cmd.assert().failure().stderr(predicate::str::contains("xml"));
}
