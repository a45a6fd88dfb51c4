use assert_cmd::Command;
use std::path::Path;

pub fn eventify_cmd() -> Command {
    let mut cmd = Command::cargo_bin("eventify").unwrap();
    cmd.env_remove("EVENTIFY_ROOT");
    cmd
}

/// Add an event and return its id, parsed from the command output
#[allow(dead_code)]
pub fn add_event(
    dir: &Path,
    date: &str,
    start: &str,
    end: &str,
    title: &str,
) -> String {
    let output = eventify_cmd()
        .current_dir(dir)
        .args([
            "add", "--date", date, "--start", start, "--end", end, "--title", title,
        ])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // The event line ends with the id
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .last()
        .unwrap()
        .split_whitespace()
        .last()
        .unwrap()
        .to_string()
}
