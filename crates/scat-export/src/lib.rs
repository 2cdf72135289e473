//! scat-export
//!
//! Fills an instrument's fillable PDF from a record and its scores, and
//! renders plain-text score summaries.

pub mod error;
pub mod filename;
pub mod fill;
pub mod form;
pub mod mapping;
pub mod summary;
pub mod template;
pub mod view;

use std::time::Duration;

use serde_json::Value;

use error::ExportError;
use fill::FillReport;
use form::PdfForm;
use mapping::FieldMap;
use template::{DEFAULT_FETCH_TIMEOUT, TemplateSource};

pub use view::{ExportSource, export_view};

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub template: TemplateSource,
    pub timeout: Duration,
    /// Replaces the built-in field table when set.
    pub field_map: Option<FieldMap>,
}

impl ExportOptions {
    pub fn new(template: TemplateSource) -> Self {
        Self {
            template,
            timeout: DEFAULT_FETCH_TIMEOUT,
            field_map: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub report: FillReport,
}

/// Load the template, fill it from `record`, and return the document.
///
/// Only template loading and PDF parsing or writing can fail; individual
/// fields that cannot be filled are recorded in the report.
pub async fn export<R: ExportSource>(
    record: &R,
    options: &ExportOptions,
) -> Result<ExportedDocument, ExportError> {
    let template = template::load_template(&options.template, options.timeout).await?;
    let map = match &options.field_map {
        Some(map) => map.clone(),
        None => FieldMap::default_for(R::KIND)?,
    };
    fill_document(record, &template, &map)
}

/// Fill already-loaded template bytes.
pub fn fill_document<R: ExportSource>(
    record: &R,
    template: &[u8],
    map: &FieldMap,
) -> Result<ExportedDocument, ExportError> {
    let view: Value = export_view(record)?;
    let mut form = PdfForm::load(template)?;
    let report = fill::fill(&mut form, map, &view);
    let bytes = form.to_bytes()?;

    let demographics = record.demographics();
    let filename = filename::export_filename(
        R::KIND,
        &demographics.athlete_name,
        &demographics.date_of_examination,
    );
    tracing::info!(
        filename = %filename,
        filled = report.filled.len(),
        skipped = report.skipped.len(),
        "assessment exported"
    );
    Ok(ExportedDocument {
        filename,
        bytes,
        report,
    })
}

/// List a template's fields without filling anything.
pub async fn template_fields(
    source: &TemplateSource,
    timeout: Duration,
) -> Result<Vec<form::FormField>, ExportError> {
    let bytes = template::load_template(source, timeout).await?;
    Ok(PdfForm::load(&bytes)?.fields().to_vec())
}
