// Without AppKit the binary fails at launch, which exercises its error path
// without opening a window.
#![cfg(not(target_os = "macos"))]

use std::process::Command;

#[test]
fn failure_is_logged_to_stderr_only() {
    let output = Command::new(env!("CARGO_BIN_EXE_minmax")).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "stdout: {:?}", String::from_utf8_lossy(&output.stdout));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"), "stderr: {:?}", stderr);
    assert!(stderr.contains("Not supported"), "stderr: {:?}", stderr);
}
