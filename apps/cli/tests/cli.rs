//! End-to-end tests that run the `stock` binary.

use std::io::Write;
use std::process::{Command, Stdio};

fn stock() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stock"));
    cmd.env_remove("STOCK_DB_PATH")
        .env_remove("STOCK_PLAIN_TERMINAL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_mode_initializes_database_and_exits() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("stock.db");

    let status = stock()
        .arg("--test-mode")
        .arg("--db")
        .arg(&db)
        .stdin(Stdio::null())
        .status()
        .unwrap();

    assert!(status.success());
    assert!(db.exists());
}

#[test]
fn test_mode_fails_when_database_cannot_be_opened() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("no-such-dir").join("stock.db");

    let output = stock()
        .arg("--test-mode")
        .arg("--db")
        .arg(&db)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unable to initialize the database"));
}

#[test]
fn scripted_session_persists_products() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("stock.db");

    let mut child = stock()
        .arg("--db")
        .arg(&db)
        .arg("--plain")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"1\nPen\n10\n1.5\n\n2\n\n0\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Stock Manager ==="));
    assert!(stdout.contains("Product added with ID 1."));
    assert!(stdout.contains("ID: 1 | Name: Pen | Quantity: 10 | Price: 1.50"));

    // A second session sees the same row
    let output = stock()
        .arg("--db")
        .arg(&db)
        .arg("--plain")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            child.stdin.take().unwrap().write_all(b"2\n\n0\n")?;
            child.wait_with_output()
        })
        .unwrap();

    assert!(String::from_utf8_lossy(&output.stdout).contains("Name: Pen"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();

    let status = stock()
        .arg("--db")
        .arg(dir.path().join("stock.db"))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .status()
        .unwrap();

    assert!(status.success());
}
