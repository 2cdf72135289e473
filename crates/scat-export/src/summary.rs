use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::view::ExportSource;

pub const DEFAULT_SUMMARY_TEMPLATE: &str = include_str!("../templates/summary.md.tera");

/// Shown in place of a score that has no value.
pub const NO_VALUE: &str = "—";

#[derive(Debug, Serialize)]
struct SummaryLine {
    name: String,
    value: String,
    max: Option<String>,
}

#[derive(Debug, Serialize)]
struct SummaryDomain {
    name: String,
    lines: Vec<SummaryLine>,
}

#[derive(Debug, Serialize)]
struct SummaryContext {
    instrument: String,
    athlete: String,
    date: String,
    domains: Vec<SummaryDomain>,
    notes: Vec<String>,
}

/// Whole numbers without decimals, fractions with two.
pub fn display_score(value: Option<f64>) -> String {
    match value {
        None => NO_VALUE.to_string(),
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.2}"),
    }
}

/// Render a Markdown score summary with the built-in template.
pub fn render_summary<R: ExportSource>(record: &R) -> Result<String, ExportError> {
    render_summary_with(record, DEFAULT_SUMMARY_TEMPLATE)
}

/// Render with a caller-supplied Tera template.
pub fn render_summary_with<R: ExportSource>(record: &R, template: &str) -> Result<String, ExportError> {
    let scores = record.scores();
    let report = record.score_report(&scores);
    let demographics = record.demographics();

    let context = SummaryContext {
        instrument: report.instrument.clone(),
        athlete: blank_as_missing(&demographics.athlete_name),
        date: blank_as_missing(&demographics.date_of_examination),
        domains: report
            .domains
            .into_iter()
            .map(|domain| SummaryDomain {
                name: domain.name,
                lines: domain
                    .scores
                    .into_iter()
                    .map(|line| SummaryLine {
                        name: line.name,
                        value: display_score(line.value),
                        max: line.max.map(|m| display_score(Some(m))),
                    })
                    .collect(),
            })
            .collect(),
        notes: record.summary_notes(&scores),
    };

    render_template("summary", template, &context)
}

fn blank_as_missing(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NO_VALUE.to_string()
    } else {
        trimmed.to_string()
    }
}

fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    value: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::SummaryRender(e.to_string()))?;

    let context = Context::from_serialize(value)?;
    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
