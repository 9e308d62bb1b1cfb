//! Integration tests for `riordino compute`.
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;

/// Path to the compiled `riordino` binary.
fn riordino_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("riordino");
    path
}

/// A `riordino` invocation isolated from the caller's configuration.
fn riordino() -> Command {
    let mut cmd = Command::new(riordino_bin());
    for var in [
        "RUST_LOG",
        "RIORDINO_COVERAGE_WEEKS",
        "RIORDINO_PACK_SIZE",
        "RIORDINO_UNIT_WEIGHT_KG",
        "RIORDINO_MAX_FILE_SIZE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Title rows, header on row 5, three items and a blank row.
fn write_shop_export(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Vendite").expect("name");
    sheet.write_string(0, 0, "Tabaccheria Rossi").expect("write");
    sheet.write_string(2, 0, "Settimana 14").expect("write");
    let header = [
        "Codice",
        "Descrizione",
        "Q.tà venduta",
        "Giacenza bar",
        "Quantità da ordinare",
        "Peso kg",
    ];
    for (col, label) in (0u16..).zip(header) {
        sheet.write_string(4, col, label).expect("write");
    }
    sheet.write_number(5, 0, 1001).expect("write");
    sheet.write_string(5, 1, "MS Blu").expect("write");
    sheet.write_number(5, 2, 5).expect("write");
    sheet.write_number(5, 3, 10).expect("write");
    sheet.write_number(6, 0, 1002).expect("write");
    sheet.write_string(6, 1, "Marlboro Gold").expect("write");
    sheet.write_number(6, 2, 3).expect("write");
    sheet.write_number(6, 3, 50).expect("write");
    sheet.write_string(8, 1, "Gratta e Vinci 5€").expect("write");
    sheet.write_string(8, 2, "7").expect("write");
    sheet.write_number(8, 3, 0).expect("write");
    workbook.save(path).expect("save fixture");
}

fn write_rows(path: &Path, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, cells) in (0u32..).zip(rows) {
        for (c, value) in (0u16..).zip(cells.iter()) {
            sheet.write_string(r, c, *value).expect("write");
        }
    }
    workbook.save(path).expect("save fixture");
}

fn shop_export(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("vendite.xlsx");
    write_shop_export(&path);
    path
}

fn run_json(args: &[&str]) -> (Output, serde_json::Value) {
    let out = riordino().args(args).output().expect("run riordino compute");
    let value = serde_json::from_slice(&out.stdout).unwrap_or(serde_json::Value::Null);
    (out, value)
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn number(data: Option<&Data>) -> f64 {
    match data {
        Some(Data::Float(v)) => *v,
        Some(Data::Int(v)) => *v as f64,
        other => panic!("expected a number, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// compute: human mode
// ---------------------------------------------------------------------------

#[test]
fn compute_human_prints_summary_and_preview() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let out = riordino()
        .args(["compute", file.to_str().expect("path")])
        .output()
        .expect("run riordino compute");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("header row:      5"), "stdout: {stdout}");
    assert!(stdout.contains("lines:           3 (2 to order)"), "stdout: {stdout}");
    assert!(stdout.contains("total quantity:  40"), "stdout: {stdout}");
    assert!(stdout.contains("total weight:    0.8 kg"), "stdout: {stdout}");
    assert!(stdout.contains("Marlboro Gold"), "stdout: {stdout}");
}

#[test]
fn compute_preview_limits_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let out = riordino()
        .args(["compute", "--preview", "1", file.to_str().expect("path")])
        .output()
        .expect("run riordino compute");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("MS Blu"), "stdout: {stdout}");
    assert!(!stdout.contains("Marlboro Gold"), "stdout: {stdout}");
    assert!(stdout.contains("... 2 more line(s)"), "stdout: {stdout}");
}

// ---------------------------------------------------------------------------
// compute: JSON mode
// ---------------------------------------------------------------------------

#[test]
fn compute_json_emits_full_report() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let (out, report) = run_json(&["compute", "-f", "json", file.to_str().expect("path")]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(report["coverage_weeks"], 4);
    assert_eq!(report["header_row"], 5);
    assert_eq!(report["total_order_quantity"], 40);
    let lines = report["lines"].as_array().expect("lines array");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["item_code"], "1001");
    assert_eq!(lines[0]["order_quantity"], 10);
    assert_eq!(lines[2]["description"], "Gratta e Vinci 5€");
    assert_eq!(lines[2]["order_quantity"], 30);
}

#[test]
fn compute_one_week_window() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let (out, report) = run_json(&[
        "compute",
        "-f",
        "json",
        "--weeks",
        "1",
        file.to_str().expect("path"),
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(report["coverage_weeks"], 1);
    assert_eq!(report["total_order_quantity"], 10);
}

#[test]
fn compute_weeks_from_environment() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let out = riordino()
        .env("RIORDINO_COVERAGE_WEEKS", "1")
        .args(["compute", "-f", "json", file.to_str().expect("path")])
        .output()
        .expect("run riordino compute");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON");
    assert_eq!(report["coverage_weeks"], 1);
}

#[test]
fn compute_out_of_range_weeks_are_clamped_with_warning() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let (out, report) = run_json(&[
        "compute",
        "-f",
        "json",
        "--weeks",
        "9",
        file.to_str().expect("path"),
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(report["coverage_weeks"], 4);
    assert!(
        stderr(&out).contains("coverage weeks adjusted"),
        "stderr: {}",
        stderr(&out)
    );
}

#[test]
fn compute_non_numeric_weeks_fall_back_to_four() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let (out, report) = run_json(&[
        "compute",
        "-f",
        "json",
        "--weeks",
        "tre",
        file.to_str().expect("path"),
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(report["coverage_weeks"], 4);
    assert_eq!(report["total_order_quantity"], 40);
}

#[test]
fn compute_quiet_suppresses_warnings() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let out = riordino()
        .args(["-q", "compute", "--weeks", "0", file.to_str().expect("path")])
        .output()
        .expect("run riordino compute");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(out.stderr.is_empty(), "stderr: {}", stderr(&out));
}

#[test]
fn compute_custom_pack_size() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let (out, report) = run_json(&[
        "compute",
        "-f",
        "json",
        "--pack-size",
        "6",
        file.to_str().expect("path"),
    ]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    // 20-10 → 2 packs of 6; 28-0 → 5 packs of 6.
    assert_eq!(report["lines"][0]["order_quantity"], 12);
    assert_eq!(report["lines"][2]["order_quantity"], 30);
    assert_eq!(report["total_order_quantity"], 42);
}

#[test]
fn compute_stdin_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let bytes = std::fs::read(&file).expect("read fixture");

    let mut child = riordino()
        .args(["compute", "-f", "json", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn riordino");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(&bytes)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait for riordino");

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON");
    assert_eq!(report["total_order_quantity"], 40);
}

// ---------------------------------------------------------------------------
// compute: --output
// ---------------------------------------------------------------------------

#[test]
fn compute_writes_filled_workbook() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let target = dir.path().join("ordine.xlsx");
    let out = riordino()
        .args([
            "compute",
            file.to_str().expect("path"),
            "-o",
            target.to_str().expect("path"),
        ])
        .output()
        .expect("run riordino compute");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("ordine.xlsx"), "stdout: {stdout}");

    let mut workbook: Xlsx<_> = open_workbook(&target).expect("open filled workbook");
    let range = workbook.worksheet_range("Vendite").expect("Vendite sheet");
    // Quantity in column E, weight in column F.
    assert_eq!(number(range.get_value((5, 4))), 10.0);
    assert!((number(range.get_value((5, 5))) - 0.2).abs() < 1e-9);
    assert_eq!(number(range.get_value((6, 4))), 0.0);
    assert_eq!(number(range.get_value((7, 4))), 0.0);
    assert_eq!(number(range.get_value((8, 4))), 30.0);
    assert_eq!(
        range.get_value((0, 0)),
        Some(&Data::String("Tabaccheria Rossi".to_owned()))
    );
}

#[test]
fn compute_without_output_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let out = riordino()
        .args(["compute", file.to_str().expect("path")])
        .output()
        .expect("run riordino compute");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let entries = std::fs::read_dir(dir.path()).expect("list dir").count();
    assert_eq!(entries, 1, "only the fixture should exist");
}

#[test]
fn compute_output_into_missing_directory_is_exit_1() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let target = dir.path().join("missing").join("ordine.xlsx");
    let out = riordino()
        .args([
            "compute",
            file.to_str().expect("path"),
            "-o",
            target.to_str().expect("path"),
        ])
        .output()
        .expect("run riordino compute");
    assert_eq!(out.status.code(), Some(1), "stderr: {}", stderr(&out));
    assert!(stderr(&out).contains("cannot write"), "stderr: {}", stderr(&out));
}

// ---------------------------------------------------------------------------
// compute: input failures (exit 2)
// ---------------------------------------------------------------------------

#[test]
fn compute_missing_file_is_exit_2() {
    let out = riordino()
        .args(["compute", "/no/such/dir/vendite.xlsx"])
        .output()
        .expect("run riordino compute");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("file not found"), "stderr: {}", stderr(&out));
}

#[test]
fn compute_missing_stock_column_is_exit_2() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("stock.xlsx");
    write_rows(
        &file,
        &[
            &["Codice", "Descrizione", "Venduto", "Stock", "Da ordinare", "Peso"],
            &["1001", "MS Blu", "5", "3", "0", "0"],
        ],
    );
    let out = riordino()
        .args(["compute", file.to_str().expect("path")])
        .output()
        .expect("run riordino compute");
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("current stock"), "stderr: {err}");
    assert!(err.contains("Codice, Descrizione, Venduto, Stock"), "stderr: {err}");
}

#[test]
fn compute_without_header_is_exit_2() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("report.xlsx");
    write_rows(&file, &[&["Totale"], &["12"]]);
    let out = riordino()
        .args(["compute", file.to_str().expect("path")])
        .output()
        .expect("run riordino compute");
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("header row not found"), "stderr: {err}");
    assert!(err.contains("row 1: Totale"), "stderr: {err}");
}

#[test]
fn compute_not_a_workbook_is_exit_2() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("vendite.xlsx");
    std::fs::write(&file, b"Codice;Venduto;Giacenza\n").expect("write");
    let out = riordino()
        .args(["compute", file.to_str().expect("path")])
        .output()
        .expect("run riordino compute");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("cannot read workbook"), "stderr: {}", stderr(&out));
}

#[test]
fn compute_zero_pack_size_is_exit_2() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let out = riordino()
        .args(["compute", "--pack-size", "0", file.to_str().expect("path")])
        .output()
        .expect("run riordino compute");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("invalid argument"), "stderr: {}", stderr(&out));
}

#[test]
fn compute_file_over_size_limit_is_exit_2() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = shop_export(&dir);
    let out = riordino()
        .args([
            "compute",
            "--max-file-size",
            "100",
            file.to_str().expect("path"),
        ])
        .output()
        .expect("run riordino compute");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("too large"), "stderr: {}", stderr(&out));
}
