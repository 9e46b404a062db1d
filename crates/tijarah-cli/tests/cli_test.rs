#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::Command;
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

fn tijarah(root: &std::path::Path) -> Command {
    let mut cmd = cargo_bin_cmd!("tijarah");
    cmd.env_remove("RUST_LOG")
        .env_remove("TIJARAH_ROOT")
        .arg("--root")
        .arg(root);
    cmd
}

#[test]
fn test_paths_lists_entity_databases() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let sales = dir.path().join("data").join("database").join("sales.db");

    // Act & Assert
    tijarah(dir.path())
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(sales.display().to_string()))
        .stdout(predicate::str::contains("reports.db"));

    assert!(!dir.path().join("data").exists());
}

#[test]
fn test_paths_uses_root_env() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("tijarah");
    cmd.env_remove("RUST_LOG")
        .env("TIJARAH_ROOT", dir.path())
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            dir.path().join("data").join("backups").display().to_string(),
        ));
}

#[test]
fn test_paths_output_ignores_log_level() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("settings.toml"),
        "[logging]\nlevel = \"error\"\n",
    )
    .unwrap();

    // Act & Assert
    tijarah(dir.path())
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("sales.db"));

    tijarah(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized 7 databases"));
}

#[test]
fn test_show_toml() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    tijarah(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_language = \"ar\""))
        .stdout(predicate::str::contains("interval_days = 7"))
        .stdout(predicate::str::contains("max_backups = 10"))
        .stdout(predicate::str::contains(
            "title = \"YosSoft Supplier, Inventory and Sales Accountant\"",
        ));
}

#[test]
fn test_show_json() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act
    let output = tijarah(dir.path())
        .args(["show", "--format", "json"])
        .output()
        .unwrap();

    // Assert
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["app"]["window"]["width"], 1200);
    assert_eq!(json["logging"]["level"], "INFO");
    assert_eq!(json["database_paths"].as_object().unwrap().len(), 7);
}

#[test]
fn test_init_creates_layout() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    tijarah(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized 7 databases"));

    let data = dir.path().join("data");
    assert!(data.join("backups").is_dir());
    assert!(data.join("logs").is_dir());
    for name in [
        "customers",
        "suppliers",
        "products",
        "sales",
        "purchases",
        "expenses",
        "reports",
    ] {
        assert!(data.join("database").join(format!("{name}.db")).is_file());
    }
}

#[test]
fn test_config_write_then_refuse_overwrite() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    // Act & Assert
    tijarah(dir.path())
        .args(["config", "write"])
        .assert()
        .success();
    assert!(path.is_file());

    tijarah(dir.path())
        .args(["config", "write"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tijarah(dir.path())
        .args(["config", "write", "--force"])
        .assert()
        .success();
}

#[test]
fn test_overrides_file_is_applied() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("settings.toml"),
        "[locale]\ndefault_language = \"en\"\n\n[window]\nheight = 600\n",
    )
    .unwrap();

    // Act & Assert
    tijarah(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_language = \"en\""))
        .stdout(predicate::str::contains("height = 600"));
}

#[test]
fn test_invalid_overrides_fail_at_startup() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[backup]\ninterval_days = 0\n").unwrap();

    // Act & Assert
    tijarah(dir.path())
        .arg("--config")
        .arg(&path)
        .arg("paths")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load settings"));
}

#[test]
fn test_version_flag() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("tijarah");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
