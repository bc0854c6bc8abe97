use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FOLIO_VARS: [&str; 6] = [
    "FOLIO_CONTENT",
    "FOLIO_RELAY_ENDPOINT",
    "FOLIO_RELAY_SERVICE_ID",
    "FOLIO_RELAY_TEMPLATE_ID",
    "FOLIO_RELAY_PUBLIC_KEY",
    "FOLIO_RELAY_TO_EMAIL",
];

/// `folio` with an empty config dir and no FOLIO_* variables.
fn folio(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("binary builds");
    for var in FOLIO_VARS {
        cmd.env_remove(var);
    }
    cmd.arg("--config-dir").arg(config_dir.path());
    cmd
}

#[test]
fn test_columns_json_at_3000() {
    let dir = TempDir::new().expect("temp dir");
    folio(&dir)
        .args(["columns", "--width", "3000", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"columns\""))
        .stdout(predicate::str::contains("\"left\": 1"))
        .stdout(predicate::str::contains("\"right\": 1"));
}

#[test]
fn test_columns_narrow_is_stacked() {
    let dir = TempDir::new().expect("temp dir");
    folio(&dir)
        .args(["columns", "--width", "768", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"stacked\""));
}

#[test]
fn test_columns_table_names_slots() {
    let dir = TempDir::new().expect("temp dir");
    folio(&dir)
        .args(["columns", "--width", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Columns: left 1 | right 1"))
        .stdout(predicate::str::contains("Ionic Thruster"));
}

#[test]
fn test_columns_respects_layout_overrides() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("config.toml"),
        "[layout]\ncolumn_width = 200\n",
    )
    .expect("write config");
    // center 200+24+600+24+400 = 1248, spare 3000-1248-64 = 1688, stride 224 -> 3
    folio(&dir)
        .args(["columns", "--width", "3000", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"left\": 3"));
}

#[test]
fn test_columns_rejects_zero_column_width() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.toml"), "[layout]\ncolumn_width = 0\n")
        .expect("write config");
    folio(&dir)
        .args(["columns", "--width", "3000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("layout.column_width"));
}

#[test]
fn test_columns_rejects_huge_width() {
    let dir = TempDir::new().expect("temp dir");
    folio(&dir)
        .args(["columns", "--width", "4294967295", "--preset", "terminal", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn test_columns_at_width_limit_stays_small() {
    let dir = TempDir::new().expect("temp dir");
    // 1_000_000 cells allocate thousands of columns per side, but only the
    // ones the 14 projects can fill are listed
    let output = folio(&dir)
        .args(["columns", "--width", "1000000", "--preset", "terminal", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(report["layout"]["left"], 14284);
    assert_eq!(report["placement"]["left"].as_array().map(Vec::len), Some(6));
}

#[test]
fn test_show_experience_expands_details() {
    let dir = TempDir::new().expect("temp dir");
    folio(&dir)
        .args(["show", "experience", "--expand", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signal Integrity Engineering · Arista Networks"))
        .stdout(predicate::str::contains("• Simulated and optimized"));
}

#[test]
fn test_show_projects_json() {
    let dir = TempDir::new().expect("temp dir");
    folio(&dir)
        .args(["show", "projects", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"70GHz mmWave Radar\""));
}

#[test]
fn test_show_unknown_section_fails() {
    let dir = TempDir::new().expect("temp dir");
    folio(&dir)
        .args(["show", "blog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown section 'blog'"));
}

#[test]
fn test_show_uses_content_override() {
    let dir = TempDir::new().expect("temp dir");
    let content = dir.path().join("content.toml");
    std::fs::write(
        &content,
        r#"
[hero]
name = "Grace"
subtitle = "Compilers"

[about]
title = "About"
description = "Admiral."

[contact]
email = "grace@example.com"

[footer]
copyright = "(c) Grace"
"#,
    )
    .expect("write content");

    folio(&dir)
        .arg("--content")
        .arg(&content)
        .args(["show", "contact", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grace@example.com"));
}

#[test]
fn test_contact_without_relay_config_fails() {
    let dir = TempDir::new().expect("temp dir");
    folio(&dir)
        .args([
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not configured"));
}

#[test]
fn test_contact_rejects_invalid_sender() {
    let dir = TempDir::new().expect("temp dir");
    folio(&dir)
        .args([
            "contact", "--name", "Ada", "--email", "nope", "--subject", "Hi", "--message", "Hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_contact_success_and_failure_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("temp dir");
    let contact = |endpoint: String| {
        let mut cmd = folio(&dir);
        cmd.env("FOLIO_RELAY_SERVICE_ID", "service_x")
            .env("FOLIO_RELAY_TEMPLATE_ID", "template_y")
            .env("FOLIO_RELAY_PUBLIC_KEY", "pk")
            .env("FOLIO_RELAY_ENDPOINT", endpoint)
            .args([
                "contact",
                "--name",
                "Ada",
                "--email",
                "ada@example.com",
                "--subject",
                "Hi",
                "--message",
                "Hello",
            ]);
        cmd
    };

    contact(format!("{}/ok", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Thanks! Your message has been sent.",
        ));

    contact(format!("{}/down", server.uri()))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Sorry, your message could not be sent. Please try again or email me directly at",
        ));
}

#[test]
fn test_config_set_then_show() {
    let dir = TempDir::new().expect("temp dir");
    folio(&dir)
        .args([
            "config",
            "set",
            "--service-id",
            "service_x",
            "--template-id",
            "template_y",
            "--public-key",
            "pk_live_abcdef",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved successfully."));

    assert!(dir.path().join("config.toml").exists());

    folio(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Service ID: service_x"))
        .stdout(predicate::str::contains("pk_l****"))
        .stdout(predicate::str::contains("Ready"));
}
