//! Startup behaviour of the `postiz-mcp` binary.

use std::process::{Command, Stdio};

#[test]
fn test_missing_api_key_exits_with_status_one() {
    let workdir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_postiz-mcp"))
        .current_dir(workdir.path())
        .env_remove("POSTIZ_API_KEY")
        .env_remove("POSTIZ_API_URL")
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("POSTIZ_API_KEY environment variable is required"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_help_lists_options() {
    let output = Command::new(env!("CARGO_BIN_EXE_postiz-mcp"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--api-key"));
    assert!(stdout.contains("--api-url"));
}
