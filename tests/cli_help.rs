use std::process::Command;

use tempfile::tempdir;

#[test]
fn test_help_mentions_interactive_mode() {
    let bin = env!("CARGO_BIN_EXE_ezmd");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Run 'ezmd' without arguments for the interactive menu."),
        "help output should mention the interactive menu; got:\n{}",
        stdout
    );
    for command in ["convert", "remotes", "config"] {
        assert!(stdout.contains(command), "missing {} in:\n{}", command, stdout);
    }
}

#[test]
fn test_config_path_honours_config_dir_override() {
    let bin = env!("CARGO_BIN_EXE_ezmd");
    let dir = tempdir().unwrap();

    let output = Command::new(bin)
        .args(["config", "path"])
        .env("EZMD_CONFIG_DIR", dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_remotes_list_reads_config_file() {
    let bin = env!("CARGO_BIN_EXE_ezmd");
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[[remotes]]
alias = "laptop"
ssh_host = "me@laptop"
remote_dir = "~/ctx"
auto_sync = true

[[remotes]]
alias = "broken"
"#,
    )
    .unwrap();

    let output = Command::new(bin)
        .args(["remotes", "list"])
        .env("EZMD_CONFIG_DIR", dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1) laptop -> me@laptop:~/ctx [auto-sync]"), "{}", stdout);
    assert!(stdout.contains("2) broken -> ???:???"), "{}", stdout);
}

#[test]
fn test_convert_rejects_missing_local_file() {
    let bin = env!("CARGO_BIN_EXE_ezmd");
    let dir = tempdir().unwrap();

    let output = Command::new(bin)
        .args([
            "convert",
            "--title",
            "Nothing",
            "--source",
            "/definitely/not/here.pdf",
            "--no-sync",
        ])
        .env("EZMD_CONFIG_DIR", dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Local file not found"), "{}", stderr);
}

#[test]
fn test_convert_no_overwrite_beats_config_default() {
    let bin = env!("CARGO_BIN_EXE_ezmd");
    let dir = tempdir().unwrap();
    let base = dir.path().join("ctx");
    std::fs::create_dir_all(base.join("raw")).unwrap();
    std::fs::write(base.join("raw").join("Doc.txt"), "earlier").unwrap();
    let source = dir.path().join("doc.txt");
    std::fs::write(&source, "new").unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!(
            "base_context_dir = {:?}\nforce_overwrite_default = true\n",
            base.display().to_string()
        ),
    )
    .unwrap();

    // with stdin closed the collision prompt reads end of input and cancels
    let output = Command::new(bin)
        .args(["convert", "-t", "Doc", "-s"])
        .arg(&source)
        .args(["--no-overwrite", "--no-sync"])
        .env("EZMD_CONFIG_DIR", dir.path())
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cancelled"), "{}", stderr);
    assert_eq!(
        std::fs::read_to_string(base.join("raw").join("Doc.txt")).unwrap(),
        "earlier"
    );
}
