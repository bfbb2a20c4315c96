use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pdfcipher(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pdfcipher").unwrap();
    cmd.env("PDFCIPHER_CONFIG_DIR", config_dir.path())
        .env_remove("PDFCIPHER_QPDF")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_requires_action() {
    let config = TempDir::new().unwrap();
    pdfcipher(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_requires_at_least_one_path() {
    let config = TempDir::new().unwrap();
    pdfcipher(&config).arg("enc").assert().failure().code(2);
}

#[test]
fn test_unknown_action_rejected() {
    let config = TempDir::new().unwrap();
    pdfcipher(&config)
        .args(["shred", "a.pdf"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_invalid_path_exits_with_one() {
    let config = TempDir::new().unwrap();
    let missing = config.path().join("missing.pdf");

    pdfcipher(&config)
        .arg("dec")
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid path"))
        .stderr(predicate::str::contains("missing.pdf"));
}

#[test]
fn test_encrypt_alias_accepted() {
    let config = TempDir::new().unwrap();
    let missing = config.path().join("missing.pdf");

    pdfcipher(&config)
        .arg("encrypt")
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid path"));
}

#[test]
fn test_empty_directory_is_a_no_op() {
    let config = TempDir::new().unwrap();
    let docs = TempDir::new().unwrap();

    pdfcipher(&config)
        .arg("dec")
        .arg(docs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No PDF files found."));
}

#[test]
fn test_zero_max_attempts_rejected() {
    let config = TempDir::new().unwrap();
    pdfcipher(&config)
        .args(["--max-attempts", "0", "dec", "a.pdf"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_config_shows_paths_and_overrides() {
    let config = TempDir::new().unwrap();
    let config_dir = config.path().to_string_lossy().to_string();
    pdfcipher(&config)
        .args(["config", "--qpdf", "/opt/bin/qpdf", "--key-length", "128"])
        .assert()
        .success()
        .stdout(predicate::str::contains(config_dir))
        .stdout(predicate::str::contains("/opt/bin/qpdf"))
        .stdout(predicate::str::contains("128 bits"))
        .stdout(predicate::str::contains("not present"));
}

#[test]
fn test_config_init_creates_settings_file() {
    let config = TempDir::new().unwrap();
    pdfcipher(&config)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(config.path().join("config.json").exists());
}

#[test]
fn test_malformed_settings_file_exits_with_one() {
    let config = TempDir::new().unwrap();
    std::fs::write(config.path().join("config.json"), "{").unwrap();

    pdfcipher(&config)
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}
