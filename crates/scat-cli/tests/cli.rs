//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use lopdf::{Document, Object, dictionary};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn scat() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("scat").unwrap();
    cmd.env_remove("SCAT_CONFIG").env("RUST_LOG", "warn");
    cmd
}

/// A one-page form with a single `Text1` field.
fn write_template(path: &Path) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let field_id = doc.add_object(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Widget",
        "FT" => "Tx",
        "T" => Object::string_literal("Text1"),
        "Rect" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(100),
            Object::Integer(20),
        ],
    });
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Annots" => vec![Object::Reference(field_id)],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        }),
    );
    let acroform_id = doc.add_object(dictionary! {
        "Fields" => vec![Object::Reference(field_id)],
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "AcroForm" => acroform_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let ws = Self {
            dir: TempDir::new().unwrap(),
        };
        let template = ws.path("SCAT6_Fillable.pdf");
        write_template(&template);
        let config = json!({
            "config_version": 1,
            "draft_dir": ws.path("drafts"),
            "template_timeout_secs": 5,
            "scat6": { "template": template },
            "scoat6": { "template": ws.path("missing.pdf") },
        });
        std::fs::write(ws.config(), config.to_string()).unwrap();
        ws
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn config(&self) -> PathBuf {
        self.path("config.json")
    }

    fn write_record(&self, name: &str, record: serde_json::Value) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, record.to_string()).unwrap();
        path
    }

    fn sideline_record(&self) -> PathBuf {
        self.write_record(
            "scat6.json",
            json!({
                "demographics": { "athlete_name": "Jordan Lee" },
                "symptoms": { "ratings": { "headache": 3 } },
                "orientation": {
                    "month": true, "date": true, "day_of_week": true,
                    "year": true, "time": true
                },
                "immediate_memory": {
                    "word_list": "A",
                    "trials": [
                        [true, true, true, true, true, true, true, true, true, true],
                        [true, true, true, true, true, true, true, true, true, true],
                        [true, true, true, true, true, true, true, false, false, false]
                    ]
                },
                "concentration": {
                    "digits_backward": 3,
                    "months_reverse_time": "25",
                    "months_reverse_errors": 0
                }
            }),
        )
    }

    fn scat(&self) -> Command {
        let mut cmd = scat();
        cmd.arg("--config").arg(self.config());
        cmd
    }
}

#[test]
fn score_prints_summary() {
    let ws = Workspace::new();
    ws.scat()
        .args(["score", "scat6"])
        .arg(ws.sideline_record())
        .assert()
        .success()
        .stdout(predicate::str::contains("# SCAT6 score summary"))
        .stdout(predicate::str::contains("Athlete: Jordan Lee"))
        .stdout(predicate::str::contains("36 / 50"));
}

#[test]
fn score_json_prints_raw_scores() {
    let ws = Workspace::new();
    ws.scat()
        .args(["score", "scat6", "--json"])
        .arg(ws.sideline_record())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cognitive_total\": 36"))
        .stdout(predicate::str::contains("\"immediate_memory\": 27"));
}

#[test]
fn score_rejects_unknown_instrument() {
    let ws = Workspace::new();
    ws.scat()
        .args(["score", "scat5"])
        .arg(ws.sideline_record())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown instrument"));
}

#[test]
fn score_rejects_malformed_record() {
    let ws = Workspace::new();
    let record = ws.write_record("bad.json", json!([1, 2, 3]));
    ws.scat()
        .args(["score", "scoat6"])
        .arg(record)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a SCOAT6 record"));
}

#[test]
fn export_writes_filled_pdf_and_clears_draft() {
    let ws = Workspace::new();
    let record = ws.sideline_record();
    let out = ws.path("out");

    ws.scat()
        .args(["draft", "save", "scat6"])
        .arg(&record)
        .assert()
        .success();

    ws.scat()
        .args(["export", "scat6"])
        .arg(&record)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("SCAT6_Jordan Lee_Draft.pdf"))
        .stdout(predicate::str::contains("filled 1 fields"));

    let bytes = std::fs::read(out.join("SCAT6_Jordan Lee_Draft.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    ws.scat()
        .args(["draft", "status", "scat6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no SCAT6 draft"));
}

#[test]
fn export_with_missing_template_fails() {
    let ws = Workspace::new();
    let record = ws.write_record("scoat6.json", json!({}));
    ws.scat()
        .args(["export", "scoat6"])
        .arg(record)
        .arg("--out")
        .arg(ws.path("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.pdf"));
}

#[test]
fn fields_lists_template_and_missing_bindings() {
    let ws = Workspace::new();
    ws.scat()
        .args(["fields", "scat6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Text1\ttext"))
        .stdout(predicate::str::contains("1 fields"));

    ws.scat()
        .args(["fields", "scat6", "--missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Text2\n"))
        .stdout(predicate::str::contains("Text1\n").not())
        .stdout(predicate::str::contains("mapped fields missing"));
}

#[test]
fn draft_lifecycle() {
    let ws = Workspace::new();

    ws.scat()
        .args(["draft", "status", "scat6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no SCAT6 draft"));

    ws.scat()
        .args(["draft", "save", "scat6"])
        .arg(ws.sideline_record())
        .assert()
        .success()
        .stdout(predicate::str::contains("SCAT6 draft saved"));
    assert!(ws.path("drafts").join("scat6-draft.json").exists());

    ws.scat()
        .args(["draft", "status", "scat6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SCAT6 draft for Jordan Lee saved at"));

    ws.scat()
        .args(["draft", "discard", "scat6"])
        .assert()
        .success();

    ws.scat()
        .args(["draft", "status", "scat6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no SCAT6 draft"));
}

#[test]
fn stale_draft_is_reported_expired() {
    let ws = Workspace::new();
    let drafts = ws.path("drafts");
    std::fs::create_dir_all(&drafts).unwrap();
    let envelope = json!({ "data": { "examiner": "x" }, "timestamp": 1_000 });
    std::fs::write(drafts.join("scat6-draft.json"), envelope.to_string()).unwrap();

    ws.scat()
        .args(["draft", "status", "scat6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SCAT6 draft expired and was cleared"));
    assert!(!drafts.join("scat6-draft.json").exists());
}

#[test]
fn config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("scat").join("config.json");

    scat()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&config).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    scat()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    scat()
        .env("SCAT_CONFIG", &config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"config_version\": 1"))
        .stdout(predicate::str::contains("\"legacy_drafts\": \"expire\""))
        .stdout(predicate::str::contains("docs/SCAT6_Fillable.pdf"))
        .stdout(predicate::str::contains("docs/SCOAT6_Fillable.pdf"));
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{ "template_timeout_secs": 5 }"#).unwrap();

    scat()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"legacy_drafts\": \"offer\""))
        .stdout(predicate::str::contains("\"template_timeout_secs\": 5"))
        .stdout(predicate::str::contains("\"autosave_debounce_ms\": 3000"));
}

#[test]
fn newer_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{ "config_version": 99 }"#).unwrap();

    scat()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("newer than this build supports"));
}
