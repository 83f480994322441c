// End-to-end tests for the compare-matrices binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const USAGE: &str = "Usage: compare-matrices <matrix1.txt> <matrix2.txt>\n";

fn write_matrix(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn cmd() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("compare-matrices")
}

#[test]
fn test_identical_matrices_report_perfect_correlation() {
    let tmp_dir = TempDir::new().unwrap();
    let m1 = write_matrix(&tmp_dir, "matrix1.txt", "1 2\n3 4\n");
    let m2 = write_matrix(&tmp_dir, "matrix2.txt", "1 2\n3 4\n");

    let output = cmd().arg(&m1).arg(&m2).arg("--seed").arg("1").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Spearman:  (1.0, "), "{}", lines[0]);
    assert!(lines[1].starts_with("Pearson:  (1.0, "), "{}", lines[1]);
    assert!(lines[1].ends_with(", 2)"));
}

#[test]
fn test_coefficients_in_range() {
    let tmp_dir = TempDir::new().unwrap();
    let m1 = write_matrix(&tmp_dir, "a.txt", "0 1 4\n1 0 2\n4 2 0\n");
    let m2 = write_matrix(&tmp_dir, "b.txt", "0 3 1\n3 0 5\n1 5 0\n");

    let output = cmd().arg(&m1).arg(&m2).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for (line, label) in stdout.lines().zip(["Spearman:  (", "Pearson:  ("]) {
        let rest = line.strip_prefix(label).unwrap();
        let statistic: f64 = rest.split(',').next().unwrap().trim().parse().unwrap();
        assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&statistic));
    }
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    cmd().assert().success().stdout(USAGE);
    cmd().arg("only-one.txt").assert().success().stdout(USAGE);
    cmd()
        .args(["a.txt", "b.txt", "c.txt"])
        .assert()
        .success()
        .stdout(USAGE);
}

#[test]
fn test_missing_file_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let m1 = write_matrix(&tmp_dir, "present.txt", "0 1\n1 0\n");
    let missing = tmp_dir.path().join("missing.txt");

    cmd()
        .arg(&m1)
        .arg(&missing)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_mismatched_dimensions_fail() {
    let tmp_dir = TempDir::new().unwrap();
    let m1 = write_matrix(&tmp_dir, "small.txt", "0 1\n1 0\n");
    let m2 = write_matrix(&tmp_dir, "large.txt", "0 1 2\n1 0 3\n2 3 0\n");

    cmd()
        .arg(&m1)
        .arg(&m2)
        .assert()
        .failure()
        .stderr(predicate::str::contains("same shape"));
}

#[test]
fn test_malformed_matrix_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let ragged = write_matrix(&tmp_dir, "ragged.txt", "0 1 2\n1 0\n");
    let good = write_matrix(&tmp_dir, "good.txt", "0 1\n1 0\n");

    cmd().arg(&ragged).arg(&good).assert().failure();
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let tmp_dir = TempDir::new().unwrap();
    let m1 = write_matrix(&tmp_dir, "a.txt", "0 1 4 2\n1 0 2 5\n4 2 0 3\n2 5 3 0\n");
    let m2 = write_matrix(&tmp_dir, "b.txt", "0 3 1 2\n3 0 5 4\n1 5 0 6\n2 4 6 0\n");

    let run = || {
        cmd()
            .arg(&m1)
            .arg(&m2)
            .args(["--seed", "17", "--permutations", "250"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_zero_permutations_give_nan_p_value() {
    let tmp_dir = TempDir::new().unwrap();
    let m = write_matrix(&tmp_dir, "m.txt", "0 1 2\n1 0 3\n2 3 0\n");

    cmd()
        .arg(&m)
        .arg(&m)
        .args(["-p", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pearson:  (1.0, NaN, 3)"));
}

#[test]
fn test_bray_curtis_line() {
    let tmp_dir = TempDir::new().unwrap();
    let m = write_matrix(&tmp_dir, "m.txt", "0 1 2\n1 0 3\n2 3 0\n");

    cmd()
        .arg(&m)
        .arg(&m)
        .arg("--bray-curtis")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bray-Curtis:  0.0\n"));
}

#[test]
fn test_bray_curtis_distinct_matrices() {
    let tmp_dir = TempDir::new().unwrap();
    let m1 = write_matrix(&tmp_dir, "a.txt", "0 1 2\n1 0 3\n2 3 0\n");
    let m2 = write_matrix(&tmp_dir, "b.txt", "0 3 2\n3 0 1\n2 1 0\n");

    // |1-3| + |3-1| twice = 8, total = 24
    let output = cmd()
        .arg(&m1)
        .arg(&m2)
        .args(["--bray-curtis", "-p", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    let distance: f64 = lines[2]
        .strip_prefix("Bray-Curtis:  ")
        .unwrap()
        .parse()
        .unwrap();
    assert!((distance - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_bray_curtis_with_mismatched_dimensions_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let m1 = write_matrix(&tmp_dir, "small.txt", "0 1\n1 0\n");
    let m2 = write_matrix(&tmp_dir, "large.txt", "0 1 2\n1 0 3\n2 3 0\n");

    cmd()
        .arg(&m1)
        .arg(&m2)
        .arg("--bray-curtis")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_nan_cell_reports_nan_for_both_methods() {
    let tmp_dir = TempDir::new().unwrap();
    let m1 = write_matrix(&tmp_dir, "a.txt", "0 nan 2\n1 0 3\n4 5 0\n");
    let m2 = write_matrix(&tmp_dir, "b.txt", "0 9 1\n7 0 2\n3 8 0\n");

    cmd()
        .arg(&m1)
        .arg(&m2)
        .args(["-p", "0"])
        .assert()
        .success()
        .stdout("Spearman:  (NaN, NaN, 3)\nPearson:  (NaN, NaN, 3)\n");
}
