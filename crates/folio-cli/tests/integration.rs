#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `folio` isolated from any config on the host: cwd and HOME both point
/// at an empty temp dir.
fn folio(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("FOLIO_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

// ---------------------------------------------------------------------------
// folio hire
// ---------------------------------------------------------------------------

#[test]
fn hire_prints_preview_with_subject_line() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args([
            "hire",
            "--intent",
            "internship",
            "--location",
            "remote",
            "--company",
            "Acme",
            "--role",
            "SWE Intern",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sending to: work.adityabharti@gmail.com",
        ))
        .stdout(predicate::str::contains(
            "Subject: Internship Opportunity - SWE Intern at Acme",
        ))
        .stdout(predicate::str::contains("Hi Aditya,"));
}

#[test]
fn hire_without_intent_stops_at_first_gate() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .arg("hire")
        .assert()
        .failure()
        .stderr(predicate::str::contains("step 1 (Intent)"))
        .stderr(predicate::str::contains("intent is required"));
}

#[test]
fn hire_rejects_unknown_intent_with_choices() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["hire", "--intent", "contract", "--location", "remote"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contract"))
        .stderr(predicate::str::contains("internship"));
}

#[test]
fn hire_can_stop_early() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["hire", "--intent", "freelance", "--step", "location"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 2/4: Location"))
        .stdout(predicate::str::contains("intent: freelance"));
}

#[test]
fn hire_json_snapshot() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(folio(&dir).args([
        "hire",
        "--intent",
        "fulltime",
        "--location",
        "india",
        "-j",
    ]));
    assert_eq!(json["step"], "preview");
    assert_eq!(json["payload"]["subject"], "Full-time Opportunity - Role at Company");
    assert_eq!(json["copied"], false);
    assert_eq!(json["deliveries"].as_array().unwrap().len(), 3);
}

#[test]
fn hire_links_are_printed_on_request() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args([
            "hire",
            "--intent",
            "collaboration",
            "--location",
            "thailand",
            "--links",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Open Mail App: mailto:work.adityabharti@gmail.com?subject=",
        ))
        .stdout(predicate::str::contains(
            "Open in Gmail (Web): https://mail.google.com/mail/?view=cm&fs=1&to=",
        ));
}

#[test]
fn hire_start_over_keeps_record_by_default() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(folio(&dir).args([
        "hire",
        "--intent",
        "internship",
        "--location",
        "remote",
        "--start-over",
        "-j",
    ]));
    assert_eq!(json["step"], "intent");
    assert_eq!(json["record"]["intent"], "internship");
}

#[test]
fn hire_start_over_clears_when_configured() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("folio.yaml"),
        "wizard:\n  restart: clear_record\n",
    )
    .unwrap();
    let json = json_stdout(folio(&dir).args([
        "hire",
        "--intent",
        "internship",
        "--location",
        "remote",
        "--start-over",
        "-j",
    ]));
    assert_eq!(json["step"], "intent");
    assert_eq!(json["record"]["intent"], "");
}

#[test]
fn open_rejects_clipboard_channel() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["contact", "--open", "clipboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--copy"));
}

// ---------------------------------------------------------------------------
// folio contact
// ---------------------------------------------------------------------------

#[test]
fn contact_prints_to_and_subject() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["contact", "--name", "Sam", "--subject", "Hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "To: work.adityabharti@gmail.com\nSubject: Hello\n",
        ))
        .stdout(predicate::str::contains("Sam"));
}

#[test]
fn contact_uses_owner_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("folio.yaml"),
        "site:\n  owner: Sam\n  recipient: sam@example.com\n",
    )
    .unwrap();
    let json = json_stdout(folio(&dir).args(["contact", "-j"]));
    assert_eq!(json["recipient"], "sam@example.com");
    assert_eq!(json["payload"]["subject"], "Contact from Portfolio");
    assert!(json["payload"]["body"].as_str().unwrap().contains("Hi Sam,"));
}

#[test]
fn invalid_recipient_refuses_to_compose() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("folio.yaml"),
        "site:\n  recipient: me@example.com?cc=x@y.z\n",
    )
    .unwrap();
    folio(&dir)
        .arg("contact")
        .assert()
        .failure()
        .stderr(predicate::str::contains("site.recipient"));
}

// ---------------------------------------------------------------------------
// folio options
// ---------------------------------------------------------------------------

#[test]
fn options_table_lists_choices() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("Full-time"))
        .stdout(predicate::str::contains("thailand"));
}

// ---------------------------------------------------------------------------
// folio config
// ---------------------------------------------------------------------------

#[test]
fn config_show_reports_defaults() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# source: built-in defaults"))
        .stdout(predicate::str::contains("work.adityabharti@gmail.com"));
}

#[test]
fn config_init_then_validate() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote folio.yaml"));
    assert!(dir.path().join("folio.yaml").exists());

    folio(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    folio(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_reports_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(
        &path,
        "site:\n  recipient: nobody\nfeedback:\n  copied_window_ms: 0\n",
    )
    .unwrap();
    folio(&dir)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error]"))
        .stdout(predicate::str::contains("[warning]"));
}

#[test]
fn home_config_is_found() {
    let dir = TempDir::new().unwrap();
    let cwd = dir.path().join("work");
    std::fs::create_dir_all(&cwd).unwrap();
    std::fs::write(dir.path().join(".folio.yaml"), "site:\n  owner: Home\n").unwrap();

    let mut cmd = folio(&dir);
    cmd.current_dir(&cwd);
    let json = json_stdout(cmd.args(["config", "show"]).arg("-j"));
    assert_eq!(json["config"]["site"]["owner"], "Home");
}
