//! Integration test: the binary answers CLI queries without a terminal.

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_tagflow"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version, but got: {}",
        stdout
    );
}

#[test]
fn missing_posts_file_fails_before_touching_the_terminal() {
    let dir = std::env::temp_dir().join("tagflow_cli_missing_posts");
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let config = dir.join("config.toml");
    let log = dir.join("tagflow.log");
    std::fs::write(&config, format!("log_file_path = {:?}\n", log.display().to_string()))
        .expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_tagflow"))
        .args(["--posts", "/nonexistent/tagflow/posts.json", "--config"])
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(
        stderr.contains("posts.json"),
        "Expected error naming the file, but got: {}",
        stderr
    );
}
