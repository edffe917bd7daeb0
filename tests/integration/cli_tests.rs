//! Integration tests for the CLI binary.
//!
//! Verifies that the `pnkeys` binary builds, responds to basic flags, and
//! can run a generate/show round trip for both secrets inside a scratch
//! config directory.

use std::process::Command;

/// Get a Command pointing to the `pnkeys` binary.
fn pnkeys_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pnkeys"))
}

#[test]
fn cli_responds_to_help() {
    let output = pnkeys_binary()
        .arg("--help")
        .output()
        .expect("failed to execute pnkeys --help");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("peer-id"), "help should list subcommands");
    assert!(stdout.contains("swarm-key"), "help should list subcommands");
}

#[test]
fn cli_responds_to_version() {
    let output = pnkeys_binary()
        .arg("--version")
        .output()
        .expect("failed to execute pnkeys --version");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pnkeys"));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    let output = pnkeys_binary()
        .arg("frobnicate")
        .output()
        .expect("failed to execute pnkeys");

    assert!(!output.status.success());
}

#[test]
fn cli_rejects_unknown_flag() {
    let output = pnkeys_binary()
        .args(["peer-id", "show", "--no-such-flag"])
        .output()
        .expect("failed to execute pnkeys");

    assert!(!output.status.success());
}

#[test]
fn cli_peer_id_generate_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().to_str().unwrap();

    let output = pnkeys_binary()
        .args(["--config-dir", config_dir, "peer-id", "generate"])
        .output()
        .expect("failed to execute pnkeys peer-id generate");
    assert!(
        output.status.success(),
        "generate should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        dir.path().join(".peerId").exists(),
        "generate should write the default .peerId file"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("peerId in file"));
    assert!(stdout.contains("privKey"));

    let output = pnkeys_binary()
        .args(["--config-dir", config_dir, "peer-id", "show"])
        .output()
        .expect("failed to execute pnkeys peer-id show");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pubKey"), "show should print the record");
    assert!(
        stdout.contains("Key material: valid"),
        "stored material should decode, got: {stdout}"
    );
}

#[test]
fn cli_peer_id_generate_secp256k1() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().to_str().unwrap();

    let output = pnkeys_binary()
        .args([
            "--config-dir",
            config_dir,
            "peer-id",
            "generate",
            "--key-type",
            "secp256k1",
        ])
        .output()
        .expect("failed to execute pnkeys peer-id generate");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_peer_id_generate_rejects_unknown_key_type() {
    let dir = tempfile::tempdir().unwrap();

    let output = pnkeys_binary()
        .args([
            "--config-dir",
            dir.path().to_str().unwrap(),
            "peer-id",
            "generate",
            "--key-type",
            "rot13",
        ])
        .output()
        .expect("failed to execute pnkeys peer-id generate");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "got: {stderr}");
    assert!(!dir.path().join(".peerId").exists());
}

#[test]
fn cli_swarm_key_generate_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().to_str().unwrap();

    let output = pnkeys_binary()
        .args(["--config-dir", config_dir, "swarm-key", "generate"])
        .output()
        .expect("failed to execute pnkeys swarm-key generate");
    assert!(
        output.status.success(),
        "generate should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.path().join(".swarmKey").exists());

    let output = pnkeys_binary()
        .args(["--config-dir", config_dir, "swarm-key", "show"])
        .output()
        .expect("failed to execute pnkeys swarm-key show");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("swarmKey in file"));
    assert!(
        stdout.contains("/key/swarm/psk/1.0.0/"),
        "show should print the PSK text, got: {stdout}"
    );
    assert!(stdout.contains("/base16/"));
}

#[test]
fn cli_show_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = pnkeys_binary()
        .args([
            "--config-dir",
            dir.path().to_str().unwrap(),
            "swarm-key",
            "show",
        ])
        .output()
        .expect("failed to execute pnkeys swarm-key show");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "got: {stderr}");
}

#[test]
fn cli_generate_to_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("custom").join("node.peerId");

    let output = pnkeys_binary()
        .args([
            "--config-dir",
            dir.path().to_str().unwrap(),
            "peer-id",
            "generate",
            "--output",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("failed to execute pnkeys peer-id generate");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(out.exists(), "explicit output path should be written");
    assert!(
        !dir.path().join(".peerId").exists(),
        "default path should be untouched"
    );
}
