mod support;

use std::time::Duration;

use scat_core::Scat6Record;
use scat_export::error::ExportError;
use scat_export::template::{TemplateSource, load_template};
use scat_export::{ExportOptions, export, template_fields};
use support::{Field, form_pdf};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn source_parsing() {
    assert_eq!(
        "https://example.org/SCAT6.pdf".parse::<TemplateSource>().unwrap(),
        TemplateSource::Url("https://example.org/SCAT6.pdf".into())
    );
    assert_eq!(
        " forms/SCAT6.pdf ".parse::<TemplateSource>().unwrap(),
        TemplateSource::Path("forms/SCAT6.pdf".into())
    );
    assert!("  ".parse::<TemplateSource>().is_err());

    let json = serde_json::to_string(&TemplateSource::Url("http://x/a.pdf".into())).unwrap();
    assert_eq!(json, r#""http://x/a.pdf""#);
    let back: TemplateSource = serde_json::from_str(&json).unwrap();
    assert_eq!(back, TemplateSource::Url("http://x/a.pdf".into()));
}

#[tokio::test]
async fn reads_template_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("SCAT6.pdf");
    std::fs::write(&file, form_pdf(&[Field::Text("Text1")])).unwrap();

    let fields = template_fields(&TemplateSource::Path(file), Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "Text1");
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let source = TemplateSource::Path(dir.path().join("absent.pdf"));

    let err = load_template(&source, Duration::from_secs(1)).await.unwrap_err();
    assert!(matches!(err, ExportError::TemplateNotFound(_)));
}

#[tokio::test]
async fn exports_from_fetched_template() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/SCAT6_Fillable.pdf"))
        .respond_with(
            ResponseTemplate::new(200).set_body_bytes(form_pdf(&[Field::Text("Text1")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut record = Scat6Record::new();
    record.demographics.athlete_name = "Riley".into();
    let options = ExportOptions::new(TemplateSource::Url(format!(
        "{}/SCAT6_Fillable.pdf",
        server.uri()
    )));

    let doc = export(&record, &options).await.unwrap();
    assert_eq!(doc.filename, "SCAT6_Riley_Draft.pdf");
    assert_eq!(doc.report.filled, ["Text1"]);
}

#[tokio::test]
async fn http_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = TemplateSource::Url(format!("{}/missing.pdf", server.uri()));
    let err = load_template(&source, Duration::from_secs(5)).await.unwrap_err();
    assert!(matches!(err, ExportError::TemplateNotFound(_)));
}

#[tokio::test]
async fn server_error_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = TemplateSource::Url(format!("{}/form.pdf", server.uri()));
    let err = load_template(&source, Duration::from_secs(5)).await.unwrap_err();
    assert!(matches!(err, ExportError::TemplateFetch { .. }));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"%PDF-1.5".to_vec())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let source = TemplateSource::Url(format!("{}/slow.pdf", server.uri()));
    let err = load_template(&source, Duration::from_millis(200))
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::TemplateTimeout { .. }));
}

#[tokio::test]
async fn unparseable_download_fails_export() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let options = ExportOptions::new(TemplateSource::Url(format!("{}/form.pdf", server.uri())));
    let err = export(&Scat6Record::new(), &options).await.unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
