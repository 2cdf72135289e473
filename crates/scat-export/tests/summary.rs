use scat_core::models::symptoms::{Scat6Symptom, Scoat6Symptom, Timepoint};
use scat_core::{InstrumentKind, Scat6Record, Scoat6Record};
use scat_export::filename::export_filename;
use scat_export::summary::{NO_VALUE, display_score, render_summary, render_summary_with};

#[test]
fn scores_display() {
    assert_eq!(display_score(None), NO_VALUE);
    assert_eq!(display_score(Some(27.0)), "27");
    assert_eq!(display_score(Some(12.15)), "12.15");
    assert_eq!(display_score(Some(0.5)), "0.50");
}

#[test]
fn scat6_summary_lists_domains_and_placeholders() {
    let mut record = Scat6Record::new();
    record.demographics.athlete_name = "Jordan Lee".into();
    record.symptoms.set(Scat6Symptom::Headache, 3);
    record.symptoms.set(Scat6Symptom::Dizziness, 2);

    let summary = render_summary(&record).unwrap();

    assert!(summary.starts_with("# SCAT6 score summary"));
    assert!(summary.contains("Athlete: Jordan Lee"));
    assert!(summary.contains(&format!("Date of examination: {NO_VALUE}")));
    assert!(summary.contains("| 2 / 22 |"));
    assert!(summary.contains("| 5 / 132 |"));
    // Unperformed foam stance shows a placeholder and no maximum.
    assert!(summary.contains(&format!("| {NO_VALUE} |")));
    assert!(!summary.contains("## Notes"));
}

#[test]
fn scoat6_summary_has_notes() {
    let mut record = Scoat6Record::new();
    record
        .symptoms
        .set(Scoat6Symptom::Headache, Timepoint::DayInjured, 4);

    let summary = render_summary(&record).unwrap();

    assert!(summary.starts_with("# SCOAT6 score summary"));
    assert!(summary.contains("## Notes"));
    assert!(summary.contains("Latest symptoms (Day injured): 1 of"));
    assert!(summary.contains("Smooth Pursuits: +0"));
}

#[test]
fn custom_template() {
    let out = render_summary_with(&Scat6Record::new(), "{{ instrument }}:{{ domains | length }}").unwrap();
    assert_eq!(out, "SCAT6:3");

    assert!(render_summary_with(&Scat6Record::new(), "{% if %}").is_err());
}

#[test]
fn filenames() {
    assert_eq!(
        export_filename(InstrumentKind::Scat6, "Jordan Lee", "2024-03-09"),
        "SCAT6_Jordan Lee_2024-03-09.pdf"
    );
    assert_eq!(
        export_filename(InstrumentKind::Scoat6, "  ", ""),
        "SCOAT6_Assessment_Draft.pdf"
    );
    assert_eq!(
        export_filename(InstrumentKind::Scat6, "A/B: \"C\"", "09/03/2024"),
        "SCAT6_A-B- -C-_09-03-2024.pdf"
    );
}
