//! End-to-end tests for the persistence-ai binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DEFAULT_LINE: &str =
    "PersistenceAI Config: Config { provider: \"anthropic\", model: \"claude-sonnet-4\" }\n";

/// A command running in `dir` with no config files and a scrubbed environment
fn persistence_ai(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("persistence-ai").unwrap();
    cmd.current_dir(dir)
        .env_remove("PERSISTENCE_AI_PROVIDER")
        .env_remove("PERSISTENCE_AI_MODEL")
        .env_remove("RUST_LOG")
        // Point XDG discovery at a directory that does not exist so the
        // developer's own config cannot leak into the tests.
        .env("XDG_CONFIG_HOME", dir.join("xdg-config"));
    cmd
}

#[test]
fn bare_invocation_prints_default_config() {
    let dir = TempDir::new().unwrap();
    persistence_ai(dir.path())
        .assert()
        .success()
        .stdout(DEFAULT_LINE)
        .stderr("");
}

#[test]
fn reruns_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = persistence_ai(dir.path()).output().unwrap();
    let second = persistence_ai(dir.path()).output().unwrap();

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, DEFAULT_LINE.as_bytes());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn flag_overrides_take_precedence() {
    let dir = TempDir::new().unwrap();
    persistence_ai(dir.path())
        .args(["--provider", "openai", "--model", "gpt-4o-mini"])
        .assert()
        .success()
        .stdout("PersistenceAI Config: Config { provider: \"openai\", model: \"gpt-4o-mini\" }\n");
}

#[test]
fn provider_override_resolves_its_default_model() {
    let dir = TempDir::new().unwrap();
    persistence_ai(dir.path())
        .args(["--provider", "google"])
        .assert()
        .success()
        .stdout("PersistenceAI Config: Config { provider: \"google\", model: \"gemini-pro\" }\n");
}

#[test]
fn cwd_config_file_is_honored() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("persistence-ai.json"),
        r#"{"provider": "openai"}"#,
    )
    .unwrap();

    persistence_ai(dir.path())
        .assert()
        .success()
        .stdout("PersistenceAI Config: Config { provider: \"openai\", model: \"gpt-4o\" }\n");
}

#[test]
fn flags_beat_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("persistence-ai.json"),
        r#"{"provider": "openai", "model": "gpt-4o"}"#,
    )
    .unwrap();

    persistence_ai(dir.path())
        .args(["--model", "o3"])
        .assert()
        .success()
        .stdout("PersistenceAI Config: Config { provider: \"openai\", model: \"o3\" }\n");
}

#[test]
fn hidden_dir_config_is_discovered() {
    let dir = TempDir::new().unwrap();
    let hidden = dir.path().join(".persistence-ai");
    fs::create_dir(&hidden).unwrap();
    fs::write(
        hidden.join("config.json"),
        r#"{"provider": "anthropic", "model": "claude-opus-4"}"#,
    )
    .unwrap();

    persistence_ai(dir.path())
        .assert()
        .success()
        .stdout(
            "PersistenceAI Config: Config { provider: \"anthropic\", model: \"claude-opus-4\" }\n",
        );
}

#[test]
fn xdg_config_is_discovered() {
    let dir = TempDir::new().unwrap();
    let xdg = dir.path().join("xdg-config").join("persistence-ai");
    fs::create_dir_all(&xdg).unwrap();
    fs::write(
        xdg.join("config.json"),
        r#"{"provider": "google", "model": "gemini-1.5-pro"}"#,
    )
    .unwrap();

    persistence_ai(dir.path())
        .assert()
        .success()
        .stdout("PersistenceAI Config: Config { provider: \"google\", model: \"gemini-1.5-pro\" }\n");
}

#[test]
fn cwd_config_beats_environment() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("persistence-ai.json"),
        r#"{"provider": "google"}"#,
    )
    .unwrap();

    persistence_ai(dir.path())
        .env("PERSISTENCE_AI_PROVIDER", "openai")
        .assert()
        .success()
        .stdout("PersistenceAI Config: Config { provider: \"google\", model: \"gemini-pro\" }\n");
}

#[test]
fn environment_provider_is_used() {
    let dir = TempDir::new().unwrap();
    persistence_ai(dir.path())
        .env("PERSISTENCE_AI_PROVIDER", "openai")
        .assert()
        .success()
        .stdout("PersistenceAI Config: Config { provider: \"openai\", model: \"gpt-4o\" }\n");
}

#[test]
fn environment_model_alone_keeps_default_provider() {
    let dir = TempDir::new().unwrap();
    persistence_ai(dir.path())
        .env("PERSISTENCE_AI_MODEL", "claude-opus-4")
        .assert()
        .success()
        .stdout(
            "PersistenceAI Config: Config { provider: \"anthropic\", model: \"claude-opus-4\" }\n",
        );
}

#[test]
fn explicit_config_path_is_loaded() {
    let dir = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let config_path = other.path().join("custom.json");
    fs::write(&config_path, r#"{"provider": "openai", "model": "gpt-4o"}"#).unwrap();

    persistence_ai(dir.path())
        .args(["--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("PersistenceAI Config: Config { provider: \"openai\", model: \"gpt-4o\" }\n");
}

#[test]
fn missing_explicit_config_path_fails() {
    let dir = TempDir::new().unwrap();
    persistence_ai(dir.path())
        .args(["--config", "/no/such/config.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn unknown_provider_without_model_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("persistence-ai.json"),
        r#"{"provider": "my-local-llm"}"#,
    )
    .unwrap();

    persistence_ai(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: model"));
}

#[test]
fn empty_model_override_fails() {
    let dir = TempDir::new().unwrap();
    persistence_ai(dir.path())
        .args(["--model", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for field 'model'"));
}

#[test]
fn malformed_config_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("persistence-ai.json"), "not json").unwrap();

    persistence_ai(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn agents_lists_the_build_agent() {
    let dir = TempDir::new().unwrap();
    persistence_ai(dir.path())
        .arg("agents")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("anthropic/claude-sonnet-4"))
        .stdout(predicate::str::contains("write, bash, read"));
}
