use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_seating-chart"))
}

fn output_dir() -> &'static Path {
    Path::new("tests/output")
}

fn setup() {
    fs::create_dir_all(output_dir()).expect("Failed to create output directory");
}

fn cleanup_file(name: &str) {
    let path = output_dir().join(name);
    if path.exists() {
        fs::remove_file(&path).ok();
    }
}

fn run_with_stdin(args: &[&str], script: &str) -> Output {
    let mut child = cargo_bin()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    // The binary may exit on bad arguments before reading its input
    let mut stdin = child.stdin.take().expect("stdin is piped");
    stdin.write_all(script.as_bytes()).ok();
    drop(stdin);

    child.wait_with_output().expect("Failed to wait for command")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn test_assign_and_export() {
    let output = cargo_bin()
        .args(["--script", "tests/fixtures/assign.txt"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout_of(&output),
        "Seating plan:\n\nTables:\nTable 3: Petrov\n\nSeats:\nRow 1, Seat 1: Ivanov\n"
    );
}

#[test]
fn test_export_to_file() {
    setup();
    let output_file = "test-export.txt";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "--script", "tests/fixtures/assign.txt",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output.stdout.is_empty(), "plan should not go to stdout");

    let plan = fs::read_to_string(output_dir().join(output_file)).expect("plan file was not written");
    assert!(plan.contains("Tables:\nTable 3: Petrov\n"));
    assert!(plan.contains("Seats:\nRow 1, Seat 1: Ivanov\n"));
}

#[test]
fn test_seed_is_sorted_and_editable() {
    let output = cargo_bin()
        .args([
            "--seed", "tests/fixtures/seed.json",
            "--script", "tests/fixtures/edit_cycle.txt",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout_of(&output),
        "Seating plan:\n\
         \n\
         Tables:\n\
         Table 2: Bobrov\n\
         \n\
         Seats:\n\
         Row 1, Seat 5: Gusev\n\
         Row 2, Seat 5: Sidorov\n\
         Row 3, Seat 1: Volkov\n"
    );
}

#[test]
fn test_script_from_stdin() {
    let output = run_with_stdin(&[], "assign 4-2 Ivanov\nexport\n");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout_of(&output), "Seating plan:\n\nSeats:\nRow 4, Seat 2: Ivanov\n");
}

#[test]
fn test_empty_export() {
    let output = run_with_stdin(&[], "click seat-1-1\ntype   \nsave\nexport\n");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout_of(&output), "Seating plan:\n");
}

#[test]
fn test_russian_labels() {
    let output = run_with_stdin(&["--lang", "ru"], "assign table-1 Иванов\nassign seat-5-10 Петров\nexport\n");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout_of(&output),
        "План рассадки:\n\nСтолы:\nСтол 1: Иванов\n\nМеста:\nРяд 5, Место 10: Петров\n"
    );
}

#[test]
fn test_show_draws_grid() {
    let output = cargo_bin()
        .args(["--script", "tests/fixtures/full_house.txt"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    let text = stdout_of(&output);
    assert!(text.starts_with("[*Table 1] [*Table 2] [*Table 3]\n"));
    assert!(text.contains("Row 2  [  1][  2][  3][  4][  5]   [  6][  7][  8][  9][*10]\n"));
}

#[test]
fn test_pdf_chart() {
    setup();
    let output_file = "test-chart.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "--script", "tests/fixtures/full_house.txt",
            "-t", "Tuesday Beginner Bridge",
            "-d", "2025-12-25",
            "--pdf", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let path = output_dir().join(output_file);
    assert!(path.exists(), "PDF file was not created");

    let metadata = fs::metadata(&path).expect("Failed to get file metadata");
    assert!(metadata.len() > 1000, "PDF file is too small, likely empty or corrupt");
}

#[test]
fn test_pdf_with_seed_only() {
    setup();
    let output_file = "test-seed-chart.pdf";
    cleanup_file(output_file);

    let output = run_with_stdin(
        &[
            "--seed", "tests/fixtures/seed.json",
            "--pdf", &format!("tests/output/{}", output_file),
        ],
        "",
    );

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_dir().join(output_file).exists(), "PDF file was not created");
}

#[test]
fn test_russian_pdf_needs_font() {
    setup();
    let output_file = "test-russian-chart.pdf";
    cleanup_file(output_file);

    let output = run_with_stdin(
        &["--lang", "ru", "--pdf", &format!("tests/output/{}", output_file)],
        "assign table-1 Иванов\nassign seat-1-1 Петров\n",
    );

    assert!(!output.status.success(), "Cyrillic text must not be dropped silently");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--font"), "unexpected stderr: {}", stderr);
    assert!(!output_dir().join(output_file).exists(), "PDF should not have been written");
}

#[test]
fn test_missing_font_file() {
    let output = run_with_stdin(
        &["--font", "nonexistent.ttf", "--pdf", "tests/output/should-not-exist.pdf"],
        "assign seat-1-1 Ivanov\n",
    );

    assert!(!output.status.success(), "Command should have failed for missing font");
}

#[test]
fn test_invalid_script_line() {
    let output = cargo_bin()
        .args(["--script", "tests/fixtures/bad_command.txt"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for unknown command");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Script line 2"), "unexpected stderr: {}", stderr);
    assert!(output.stdout.is_empty(), "nothing after the bad line should run");
}

#[test]
fn test_click_outside_layout() {
    let output = run_with_stdin(&[], "click table-4\n");

    assert!(!output.status.success(), "Command should have failed for missing table");
}

#[test]
fn test_missing_script_file() {
    let output = cargo_bin()
        .args(["--script", "nonexistent.txt"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for missing script");
}

#[test]
fn test_invalid_seed_file() {
    let output = run_with_stdin(&["--seed", "nonexistent.json"], "export\n");

    assert!(!output.status.success(), "Command should have failed for missing seed");
}

#[test]
fn test_invalid_date_format() {
    let output = run_with_stdin(
        &["-d", "not-a-date", "--pdf", "tests/output/should-not-exist.pdf"],
        "",
    );

    assert!(!output.status.success(), "Command should have failed for invalid date");
}
