use scat_core::access::{Section, SectionAccess};
use scat_core::models::symptoms::{Scat6Symptom, Scoat6Symptom, SymptomItem, Timepoint};
use scat_core::reference::{DigitListKey, WORD_LIST_LEN, WordListKey};
use scat_core::{InstrumentKind, Scat6Record, Scoat6Record, keys};

#[test]
fn new_scat6_record_has_list_length_vectors() {
    let record = Scat6Record::new();
    for trial in &record.immediate_memory.trials {
        assert_eq!(trial.len(), WORD_LIST_LEN);
    }
    assert_eq!(record.delayed_recall.recalled.len(), WORD_LIST_LEN);
    assert_eq!(record.symptoms.ratings.len(), 22);
    assert!(record.mbess.foam.is_none());
    assert!(!record.delayed_recall_available());
}

#[test]
fn selecting_a_word_list_resets_trials_and_recall() {
    let mut record = Scat6Record::new();
    record.immediate_memory.trials[0][3] = true;
    record.delayed_recall.recalled[1] = true;

    record.select_word_list(WordListKey::B);

    assert!(record.delayed_recall_available());
    assert!(record.immediate_memory.trials.iter().flatten().all(|f| !f));
    assert!(record.delayed_recall.recalled.iter().all(|f| !f));
    assert_eq!(record.immediate_memory.words()[0], "Finger");
}

#[test]
fn reselecting_the_same_list_keeps_answers() {
    let mut record = Scoat6Record::new();
    record.select_word_list(WordListKey::A);
    record.immediate_memory.trials[2][9] = true;
    record.delayed_recall.recalled[0] = true;

    record.select_word_list(WordListKey::A);

    assert!(record.immediate_memory.trials[2][9]);
    assert!(record.delayed_recall.recalled[0]);
}

#[test]
fn reference_lists_have_expected_shape() {
    for key in WordListKey::ALL {
        assert_eq!(key.words().len(), WORD_LIST_LEN);
    }
    for key in DigitListKey::ALL {
        assert_eq!(key.digits().len(), 8);
    }
    assert_eq!("c".parse::<WordListKey>().unwrap(), WordListKey::C);
    assert!("D".parse::<DigitListKey>().is_err());
}

#[test]
fn symptom_table_reads_unset_cells_as_zero() {
    let mut record = Scoat6Record::new();
    record
        .symptoms
        .set(Scoat6Symptom::Dizziness, Timepoint::Consult2, 4);

    assert_eq!(record.symptoms.get(Scoat6Symptom::Dizziness, Timepoint::Consult2), 4);
    assert_eq!(record.symptoms.get(Scoat6Symptom::Dizziness, Timepoint::Consult1), 0);
    assert_eq!(record.symptoms.column(Timepoint::Consult2).count(), 24);
    assert_eq!(record.symptoms.column(Timepoint::Consult2).sum::<u8>(), 4);

    let dense = record.symptoms.dense();
    assert_eq!(dense.len(), Scoat6Symptom::ALL.len());
    assert!(dense.values().all(|row| row.len() == Timepoint::ALL.len()));
}

#[test]
fn office_record_defaults_size_the_screens() {
    let record = Scoat6Record::new();
    assert_eq!(record.gad7.items.len(), 7);
    assert_eq!(record.phq2.items.len(), 2);
    assert_eq!(record.sleep.items.len(), 5);
    assert_eq!(record.head_injuries.len(), 3);
}

#[test]
fn records_round_trip_through_json() {
    let mut record = Scoat6Record::new();
    record.demographics.athlete_name = "Jordan Lee".to_string();
    record.symptoms.set(Scoat6Symptom::Headache, Timepoint::DayInjured, 5);
    record.symptoms.other_name = "Tinnitus".to_string();

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"headache\":{\"day_injured\":5}"));
    let back: Scoat6Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn partial_json_fills_defaults() {
    let record: Scat6Record =
        serde_json::from_str(r#"{"demographics":{"athlete_name":"Sam"}}"#).unwrap();
    assert_eq!(record.demographics.athlete_name, "Sam");
    assert_eq!(record.symptoms.get(Scat6Symptom::Headache), 0);
    assert_eq!(record.immediate_memory.trials[1].len(), WORD_LIST_LEN);
}

#[test]
fn timepoints_parse_from_kebab_or_snake_case() {
    assert_eq!("day-injured".parse::<Timepoint>().unwrap(), Timepoint::DayInjured);
    assert_eq!("consult3".parse::<Timepoint>().unwrap(), Timepoint::Consult3);
    assert!("consult4".parse::<Timepoint>().is_err());
}

#[test]
fn instrument_keys_follow_conventions() {
    assert_eq!(keys::draft(InstrumentKind::Scat6), "scat6-draft");
    assert_eq!(keys::template(InstrumentKind::Scoat6), "docs/SCOAT6_Fillable.pdf");
    assert_eq!("SCOAT6".parse::<InstrumentKind>().unwrap(), InstrumentKind::Scoat6);
}

#[test]
fn preview_access_only_opens_sideline_basics() {
    let preview = SectionAccess::new(false);
    assert!(preview.is_visible(InstrumentKind::Scat6, Section::Symptoms));
    assert!(!preview.is_visible(InstrumentKind::Scat6, Section::Balance));
    assert!(preview.visible_sections(InstrumentKind::Scoat6).is_empty());

    let full = SectionAccess::new(true);
    assert!(full.is_visible(InstrumentKind::Scoat6, Section::Vestibular));
    assert!(!full.is_visible(InstrumentKind::Scat6, Section::Vestibular));
}
