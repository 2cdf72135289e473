mod support;

use scat_core::models::symptoms::{Scat6Symptom, Scoat6Symptom, Timepoint};
use scat_core::reference::WordListKey;
use scat_core::{Scat6Record, Scoat6Record};
use scat_export::error::ExportError;
use scat_export::fill::SkipReason;
use scat_export::form::{FieldKind, FormValue, PdfForm};
use scat_export::mapping::{FieldAction, FieldBinding, FieldMap, Unresolved};
use scat_export::{export_view, fill_document};
use serde_json::json;
use support::{Field, form_pdf, need_appearances};

const RATINGS: &[&str] = &["0", "1", "2", "3", "4", "5", "6"];

fn scat6_record() -> Scat6Record {
    let mut record = Scat6Record::new();
    record.demographics.athlete_name = "Jordan Lee".to_string();
    record.demographics.date_of_examination = "2024-03-09".to_string();
    record.symptoms.set(Scat6Symptom::Headache, 3);
    record.orientation.month = true;
    record.select_word_list(WordListKey::A);
    record.immediate_memory.trials[0][0] = true;
    record
}

fn scat6_template() -> Vec<u8> {
    form_pdf(&[
        Field::Text("Text1"),
        Field::Text("Text4"),
        Field::Radio("s1", RATINGS),
        Field::Radio("s2", RATINGS),
        Field::Check("ori1"),
        Field::Check("ori2"),
        Field::Check("A"),
        Field::Check("B"),
        Field::Check("Tri1a"),
    ])
}

#[test]
fn form_fields_are_indexed_with_kinds_and_states() {
    let bytes = form_pdf(&[
        Field::Text("Text1"),
        Field::Check("ori1"),
        Field::Radio("s1", RATINGS),
        Field::Group("athlete", &["name", "team"]),
    ]);
    let form = PdfForm::load(&bytes).unwrap();

    let names: Vec<&str> = form.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Text1", "ori1", "s1", "athlete.name", "athlete.team"]);

    assert_eq!(form.field("Text1").unwrap().kind, FieldKind::Text);
    assert_eq!(form.field("athlete.team").unwrap().kind, FieldKind::Text);
    let ori = form.field("ori1").unwrap();
    assert_eq!(ori.kind, FieldKind::Toggle);
    assert_eq!(ori.on_states, ["Yes"]);
    assert_eq!(form.field("s1").unwrap().on_states, RATINGS);
}

#[test]
fn scat6_fill_writes_text_toggles_and_choices() {
    let record = scat6_record();
    let map = FieldMap::default_for(scat_core::InstrumentKind::Scat6).unwrap();
    let doc = fill_document(&record, &scat6_template(), &map).unwrap();

    assert_eq!(doc.filename, "SCAT6_Jordan Lee_2024-03-09.pdf");
    assert!(need_appearances(&doc.bytes));

    let form = PdfForm::load(&doc.bytes).unwrap();
    assert_eq!(form.value("Text1"), Some(FormValue::Text("Jordan Lee".into())));
    assert_eq!(form.value("Text4"), Some(FormValue::Text("2024-03-09".into())));
    assert_eq!(form.value("s1"), Some(FormValue::State("3".into())));
    assert_eq!(form.value("s2"), Some(FormValue::State("0".into())));
    assert_eq!(form.value("ori1"), Some(FormValue::State("Yes".into())));
    assert_eq!(form.value("ori2"), Some(FormValue::State("Off".into())));
    assert_eq!(form.value("A"), Some(FormValue::State("Yes".into())));
    assert_eq!(form.value("B"), Some(FormValue::State("Off".into())));
    assert_eq!(form.value("Tri1a"), Some(FormValue::State("Yes".into())));

    assert!(doc.report.filled.contains(&"s1".to_string()));
    assert!(
        doc.report
            .skipped
            .iter()
            .any(|s| s.field == "s3" && s.reason == SkipReason::MissingField)
    );
}

#[test]
fn missing_fields_are_skipped_not_fatal() {
    let bindings = (0..10)
        .map(|i| FieldBinding {
            field: format!("F{i}"),
            source: "/record/demographics/athlete_name".to_string(),
            when: None,
            choice: false,
        })
        .collect();
    let map = FieldMap { bindings };
    let template = form_pdf(&[
        Field::Text("F0"),
        Field::Text("F1"),
        Field::Text("F2"),
        Field::Text("F3"),
        Field::Text("F4"),
        Field::Text("F5"),
        Field::Text("F6"),
    ]);

    let doc = fill_document(&scat6_record(), &template, &map).unwrap();

    assert_eq!(doc.report.filled.len(), 7);
    assert_eq!(doc.report.skipped.len(), 3);
    assert!(
        doc.report
            .skipped
            .iter()
            .all(|s| s.reason == SkipReason::MissingField)
    );
    assert_eq!(doc.report.problems().count(), 3);

    let form = PdfForm::load(&doc.bytes).unwrap();
    assert_eq!(form.value("F6"), Some(FormValue::Text("Jordan Lee".into())));
}

#[test]
fn kind_mismatch_and_unknown_state_are_reported() {
    let map = FieldMap::from_json(
        r#"[
            {"field": "Text1", "source": "/record/orientation/month"},
            {"field": "s1", "source": "/record/symptoms/ratings/headache", "choice": true},
            {"field": "ori1", "source": "/record/demographics/athlete_name"}
        ]"#,
    )
    .unwrap();
    let template = form_pdf(&[
        Field::Text("Text1"),
        Field::Radio("s1", &["0", "1", "2"]),
        Field::Check("ori1"),
    ]);

    let doc = fill_document(&scat6_record(), &template, &map).unwrap();

    assert!(doc.report.filled.is_empty());
    let reasons: Vec<&SkipReason> = doc.report.skipped.iter().map(|s| &s.reason).collect();
    assert_eq!(
        reasons,
        [
            &SkipReason::KindMismatch {
                expected: "toggle".into(),
                actual: "text".into()
            },
            &SkipReason::NoSuchState { state: "3".into() },
            &SkipReason::KindMismatch {
                expected: "text".into(),
                actual: "toggle".into()
            },
        ]
    );
}

#[test]
fn blank_record_fills_nothing_textual() {
    let map = FieldMap::default_for(scat_core::InstrumentKind::Scat6).unwrap();
    let doc = fill_document(&Scat6Record::new(), &scat6_template(), &map).unwrap();

    let form = PdfForm::load(&doc.bytes).unwrap();
    assert_eq!(form.value("Text1"), None);
    assert_eq!(doc.filename, "SCAT6_Assessment_Draft.pdf");
    assert!(
        doc.report
            .skipped
            .iter()
            .any(|s| s.field == "Text1" && s.reason == SkipReason::NoValue)
    );
}

#[test]
fn scoat6_fill_uses_dense_symptom_table() {
    let mut record = Scoat6Record::new();
    record.demographics.athlete_name = "Sam".to_string();
    record
        .symptoms
        .set(Scoat6Symptom::Headache, Timepoint::Consult1, 4);
    let template = form_pdf(&[
        Field::Text("demographics.athlete_name"),
        Field::Text("symptoms.headache.consult1"),
        Field::Text("symptoms.headache.consult2"),
    ]);
    let map = FieldMap::default_for(scat_core::InstrumentKind::Scoat6).unwrap();

    let doc = fill_document(&record, &template, &map).unwrap();

    let form = PdfForm::load(&doc.bytes).unwrap();
    assert_eq!(
        form.value("symptoms.headache.consult1"),
        Some(FormValue::Text("4".into()))
    );
    assert_eq!(
        form.value("symptoms.headache.consult2"),
        Some(FormValue::Text("0".into()))
    );
    assert!(doc.filename.starts_with("SCOAT6_Sam_"));
}

#[test]
fn untouched_form_does_not_request_appearances() {
    let template = form_pdf(&[Field::Text("Text1")]);
    let form = PdfForm::load(&template).unwrap();
    let bytes = form.to_bytes().unwrap();
    assert!(!need_appearances(&bytes));
}

#[test]
fn unicode_text_round_trips() {
    let mut form = PdfForm::load(&form_pdf(&[Field::Text("Text1")])).unwrap();
    form.set_text("Text1", "Zoë Ødegaard").unwrap();
    let form = PdfForm::load(&form.to_bytes().unwrap()).unwrap();
    assert_eq!(form.value("Text1"), Some(FormValue::Text("Zoë Ødegaard".into())));
}

#[test]
fn garbage_template_is_a_parse_error() {
    let err = fill_document(
        &Scat6Record::new(),
        b"not a pdf",
        &FieldMap::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn binding_resolution() {
    let view = export_view(&scat6_record()).unwrap();
    let binding = |source: &str| FieldBinding {
        field: "x".into(),
        source: source.into(),
        when: None,
        choice: false,
    };

    assert_eq!(
        binding("/record/demographics/athlete_name").resolve(&view),
        Ok(FieldAction::Text("Jordan Lee".into()))
    );
    assert_eq!(
        binding("/record/orientation/month").resolve(&view),
        Ok(FieldAction::Toggle(true))
    );
    assert_eq!(
        binding("/record/demographics/id_number").resolve(&view),
        Err(Unresolved::NoValue)
    );
    assert_eq!(binding("/nope").resolve(&view), Err(Unresolved::NoValue));
    assert_eq!(
        binding("/record/orientation").resolve(&view),
        Err(Unresolved::Unsupported("object"))
    );
    assert_eq!(
        binding("/scores/cognitive_total").resolve(&view),
        Ok(FieldAction::Text("2".into()))
    );

    let when = FieldBinding {
        when: Some(json!("B")),
        ..binding("/record/immediate_memory/word_list")
    };
    assert_eq!(when.resolve(&view), Ok(FieldAction::Toggle(false)));
}

#[test]
fn field_map_validation() {
    assert!(FieldMap::from_json(r#"[{"field": "", "source": "/a"}]"#).is_err());
    assert!(FieldMap::from_json(r#"[{"field": "x", "source": "a/b"}]"#).is_err());
    assert!(
        FieldMap::from_json(r#"[{"field": "x", "source": "/a", "choice": true, "when": 1}]"#)
            .is_err()
    );
    assert!(FieldMap::from_json("{").is_err());

    let map = FieldMap::from_json(r#"[{"field": "x", "source": "/a"}]"#).unwrap();
    assert_eq!(map.len(), 1);
}

#[test]
fn default_maps_load() {
    let scat6 = FieldMap::default_for(scat_core::InstrumentKind::Scat6).unwrap();
    let scoat6 = FieldMap::default_for(scat_core::InstrumentKind::Scoat6).unwrap();
    assert!(!scat6.is_empty());
    assert!(scoat6.len() > scat6.len());
}
