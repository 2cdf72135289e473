use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("template fetch from {url} timed out")]
    TemplateTimeout { url: String },

    #[error("template fetch from {url} failed: {message}")]
    TemplateFetch { url: String, message: String },

    #[error("template is not a readable PDF: {0}")]
    TemplateParse(String),

    #[error("failed to write filled PDF: {0}")]
    PdfWrite(String),

    #[error("invalid field map: {0}")]
    FieldMap(String),

    #[error("summary rendering failed: {0}")]
    SummaryRender(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("background task failed: {0}")]
    Task(String),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::SummaryRender(e.to_string())
    }
}
