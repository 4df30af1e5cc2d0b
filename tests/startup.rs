//! Process-level checks against the compiled `server` binary.

use std::net::TcpListener;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

#[test]
fn exits_non_zero_when_port_is_taken() {
    let held = TcpListener::bind("0.0.0.0:0").unwrap();
    let port = held.local_addr().unwrap().port();

    let mut child = Command::new(env!("CARGO_BIN_EXE_server"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "error")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("server kept running on an occupied port");
        }
        std::thread::sleep(Duration::from_millis(50));
    };

    assert!(!status.success());
    assert_eq!(status.code(), Some(1));

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to bind"), "stderr: {stderr}");
}

#[test]
fn exits_non_zero_on_invalid_port() {
    let output = Command::new(env!("CARGO_BIN_EXE_server"))
        .env("PORT", "not-a-port")
        .env("RUST_LOG", "error")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid port"), "stderr: {stderr}");
}

#[test]
fn reports_bind_failure_even_with_logging_off() {
    let held = TcpListener::bind("0.0.0.0:0").unwrap();
    let port = held.local_addr().unwrap().port();

    let output = Command::new(env!("CARGO_BIN_EXE_server"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to bind"), "stderr: {stderr}");
}
