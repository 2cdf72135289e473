//! Scoring rules shared by both instruments.
//!
//! Every function here is pure and total. Ratings outside their declared
//! range are clamped, malformed timing text is ignored, and an absent
//! optional group yields `None` rather than 0.

use scat_core::models::balance::{
    ComplexTandemGait, DualTaskCognitive, DualTaskGait, MAX_STANCE_ERRORS, StanceErrors,
    TandemGait,
};
use scat_core::models::cognitive::{Concentration, DelayedRecall, ImmediateMemory, Orientation};
use scat_core::models::examination::{Voms, VomsManeuverKind};
use scat_core::models::screens::LikertScreen;
use scat_core::models::symptoms::MAX_SEVERITY;
use scat_core::reference::WORD_LIST_LEN;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::banding::SeverityScale;

/// Months in reverse must finish in strictly less than this many seconds.
pub const MONTHS_REVERSE_LIMIT_SECS: f64 = 30.0;

pub const MAX_DIGITS_BACKWARD: u8 = 4;

/// A symptom increase of at least this much over baseline is a positive
/// mVOMS maneuver.
pub const VOMS_PROVOCATION_THRESHOLD: i32 = 2;

/// mVOMS symptoms are rated 0–10.
pub const VOMS_MAX_RATING: u8 = 10;

/// Points available in each complex tandem gait condition.
pub const COMPLEX_TANDEM_MAX_POINTS: u8 = 5;

/// Number of symptoms rated above zero.
pub fn symptom_count<I: IntoIterator<Item = u8>>(ratings: I) -> u32 {
    ratings.into_iter().filter(|&r| r > 0).count() as u32
}

/// Sum of ratings, each capped at the top of the 0–6 scale.
pub fn symptom_severity<I: IntoIterator<Item = u8>>(ratings: I) -> u32 {
    ratings
        .into_iter()
        .map(|r| u32::from(r.min(MAX_SEVERITY)))
        .sum()
}

pub fn orientation_score(orientation: &Orientation) -> u32 {
    orientation.answers().iter().filter(|&&a| a).count() as u32
}

/// Flags set within the first list-length entries of a trial.
pub fn words_recalled(flags: &[bool]) -> u32 {
    flags.iter().take(WORD_LIST_LEN).filter(|&&f| f).count() as u32
}

/// Words recalled across all three immediate-memory trials.
pub fn memory_score(memory: &ImmediateMemory) -> u32 {
    memory.trials.iter().map(|t| words_recalled(t)).sum()
}

/// Whether months-in-reverse earns its point: elapsed time strictly between
/// 0 and 30 seconds and no errors.
pub fn months_reverse_point(concentration: &Concentration) -> bool {
    parse_timing(&concentration.months_reverse_time)
        .is_some_and(|secs| secs < MONTHS_REVERSE_LIMIT_SECS)
        && concentration.months_reverse_errors == 0
}

/// Digits backward (0–4) plus the months-in-reverse point.
pub fn concentration_score(concentration: &Concentration) -> u32 {
    let digits = u32::from(concentration.digits_backward.min(MAX_DIGITS_BACKWARD));
    digits + u32::from(months_reverse_point(concentration))
}

/// Words recalled after the delay. Counts the vector as given; whether a
/// word list was chosen is the caller's concern.
pub fn delayed_recall_score(recall: &DelayedRecall) -> u32 {
    words_recalled(&recall.recalled)
}

/// Errors across the three stances, each capped at 10.
pub fn stance_total(errors: &StanceErrors) -> u32 {
    errors
        .counts()
        .iter()
        .map(|&e| u32::from(e.min(MAX_STANCE_ERRORS)))
        .sum()
}

/// Foam total, or `None` when the foam stances were not performed.
pub fn foam_total(foam: Option<&StanceErrors>) -> Option<u32> {
    foam.map(stance_total)
}

/// Parse a typed duration in seconds. Blank, non-numeric, non-finite and
/// non-positive input is "no value".
pub fn parse_timing(raw: &str) -> Option<f64> {
    let secs: f64 = raw.trim().parse().ok()?;
    (secs.is_finite() && secs > 0.0).then_some(secs)
}

fn valid_timings<'a, I>(raw: I) -> impl Iterator<Item = f64>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter().filter_map(parse_timing)
}

/// Mean of the valid timings, `None` if there are none.
pub fn timing_average<'a, I>(raw: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a str>,
{
    let (sum, n) = valid_timings(raw).fold((0.0, 0u32), |(sum, n), t| (sum + t, n + 1));
    (n > 0).then(|| sum / f64::from(n))
}

/// Smallest valid timing, `None` if there are none.
pub fn timing_fastest<'a, I>(raw: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a str>,
{
    valid_timings(raw).reduce(f64::min)
}

pub fn gait_average(gait: &TandemGait) -> Option<f64> {
    timing_average(gait.trials.iter().map(String::as_str))
}

pub fn gait_fastest(gait: &TandemGait) -> Option<f64> {
    timing_fastest(gait.trials.iter().map(String::as_str))
}

/// Fastest of the recorded dual-task trials. The practice trial does not
/// count.
pub fn dual_task_fastest(dual_task: &DualTaskGait) -> Option<f64> {
    timing_fastest(dual_task.trials.iter().flatten().map(|t| t.time.as_str()))
}

/// Sum of a Likert screen, `None` when the screen was marked not done.
///
/// Items are capped at the scale's per-item maximum and items beyond the
/// scale's length are ignored.
pub fn likert_total(screen: &LikertScreen, scale: &SeverityScale) -> Option<u32> {
    if screen.not_done {
        return None;
    }
    let total = screen
        .items
        .iter()
        .zip(scale.item_max)
        .map(|(&value, &max)| u32::from(value.min(max)))
        .sum();
    Some(total)
}

fn tandem_points(points: u8) -> u32 {
    u32::from(points.min(COMPLEX_TANDEM_MAX_POINTS))
}

pub fn complex_tandem_forward(gait: &ComplexTandemGait) -> u32 {
    tandem_points(gait.forward_eyes_open) + tandem_points(gait.forward_eyes_closed)
}

pub fn complex_tandem_backward(gait: &ComplexTandemGait) -> u32 {
    tandem_points(gait.backward_eyes_open) + tandem_points(gait.backward_eyes_closed)
}

pub fn complex_tandem_total(gait: &ComplexTandemGait) -> u32 {
    complex_tandem_forward(gait) + complex_tandem_backward(gait)
}

/// Correct responses over attempts, `None` before any attempt. More
/// correct than attempted is read as all correct.
pub fn dual_task_accuracy(task: &DualTaskCognitive) -> Option<f64> {
    if task.trials_attempted == 0 {
        return None;
    }
    let correct = task.trials_correct.min(task.trials_attempted);
    Some(f64::from(correct) / f64::from(task.trials_attempted))
}

/// Outcome of one mVOMS maneuver relative to baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VomsResult {
    pub maneuver: VomsManeuverKind,
    /// Largest symptom change over baseline; `None` when not tested.
    pub max_increase: Option<i32>,
    pub provoked: bool,
}

pub fn voms_provocation(voms: &Voms, kind: VomsManeuverKind) -> VomsResult {
    let maneuver = voms.maneuver(kind);
    let max_increase = if maneuver.not_tested {
        None
    } else {
        maneuver
            .symptoms
            .scores()
            .iter()
            .zip(voms.baseline.scores())
            .map(|(&after, before)| {
                i32::from(after.min(VOMS_MAX_RATING)) - i32::from(before.min(VOMS_MAX_RATING))
            })
            .max()
    };
    VomsResult {
        maneuver: kind,
        max_increase,
        provoked: max_increase.is_some_and(|d| d >= VOMS_PROVOCATION_THRESHOLD),
    }
}
