#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the CLI binary starts correctly and
//! responds to basic commands without crashing. Every run gets its own
//! XDG directories so no real config or session store is touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn philo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("philo").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("PHILO_BACKEND_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    philo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dostoevsky"))
        .stdout(predicate::str::contains("--backend"))
        .stdout(predicate::str::contains("PHILO_BACKEND_URL"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("session"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    philo(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_ask_without_backend_fails() {
    let home = TempDir::new().unwrap();
    philo(&home)
        .args(["ask", "Who is Alyosha?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required configuration"))
        .stderr(predicate::str::contains("PHILO_BACKEND_URL"));
}

#[test]
fn test_ask_with_invalid_backend_fails() {
    let home = TempDir::new().unwrap();
    philo(&home)
        .args(["--backend", "not a url", "ask", "Who is Alyosha?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend URL"));
}

#[test]
fn test_ask_with_backend_query_string_fails() {
    let home = TempDir::new().unwrap();
    philo(&home)
        .args(["--backend", "https://chat.example.com/api?k=1", "ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("without a query string"));
}

#[test]
fn test_session_is_stable_across_runs() {
    let home = TempDir::new().unwrap();

    let first = philo(&home).arg("session").output().unwrap();
    let second = philo(&home).arg("session").output().unwrap();

    assert!(first.status.success());
    let first = String::from_utf8(first.stdout).unwrap();
    let second = String::from_utf8(second.stdout).unwrap();
    assert!(first.starts_with("session_"));
    assert_eq!(first, second);
}

#[test]
fn test_session_reset_creates_new_id() {
    let home = TempDir::new().unwrap();

    let before = philo(&home).arg("session").output().unwrap().stdout;
    philo(&home)
        .args(["session", "--reset"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cleared"));
    let after = philo(&home).arg("session").output().unwrap().stdout;

    assert_ne!(before, after);
}

#[test]
fn test_separate_homes_get_separate_sessions() {
    let home_a = TempDir::new().unwrap();
    let home_b = TempDir::new().unwrap();

    let a = philo(&home_a).arg("session").output().unwrap().stdout;
    let b = philo(&home_b).arg("session").output().unwrap().stdout;

    assert_ne!(a, b);
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();
    philo(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_configure_show_reads_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("config").join("philo");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[chat]\nbackend = \"https://file.example.com\"\npersona = \"Tolstoy\"\n",
    )
    .unwrap();

    philo(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://file.example.com"))
        .stdout(predicate::str::contains("Tolstoy"));
}

#[test]
fn test_chat_without_backend_fails_before_prompting() {
    let home = TempDir::new().unwrap();
    philo(&home)
        .arg("chat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required configuration"));
}
