use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest template accepted over HTTP.
const MAX_TEMPLATE_BYTES: u64 = 64 * 1024 * 1024;

/// Where a blank fillable form comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TemplateSource {
    Path(PathBuf),
    Url(String),
}

impl FromStr for TemplateSource {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ExportError::TemplateNotFound("empty template location".to_string()));
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(TemplateSource::Url(s.to_string()))
        } else {
            Ok(TemplateSource::Path(PathBuf::from(s)))
        }
    }
}

impl TryFrom<String> for TemplateSource {
    type Error = ExportError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TemplateSource> for String {
    fn from(source: TemplateSource) -> Self {
        source.to_string()
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Path(path) => write!(f, "{}", path.display()),
            TemplateSource::Url(url) => f.write_str(url),
        }
    }
}

/// Read the template bytes. URLs are fetched on a blocking task with a
/// global timeout covering connect, headers and body.
pub async fn load_template(source: &TemplateSource, timeout: Duration) -> Result<Vec<u8>, ExportError> {
    match source {
        TemplateSource::Path(path) => {
            let bytes = tokio::fs::read(path).await.map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExportError::TemplateNotFound(path.display().to_string())
                } else {
                    ExportError::TemplateRead {
                        path: path.display().to_string(),
                        source: e,
                    }
                }
            })?;
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "template read");
            Ok(bytes)
        }
        TemplateSource::Url(url) => {
            let url = url.clone();
            tokio::task::spawn_blocking(move || fetch(&url, timeout))
                .await
                .map_err(|e| ExportError::Task(e.to_string()))?
        }
    }
}

fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, ExportError> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into();

    let fetch_error = |e: ureq::Error| match e {
        ureq::Error::Timeout(_) => ExportError::TemplateTimeout {
            url: url.to_string(),
        },
        ureq::Error::StatusCode(404) => ExportError::TemplateNotFound(url.to_string()),
        other => ExportError::TemplateFetch {
            url: url.to_string(),
            message: other.to_string(),
        },
    };

    let mut response = agent.get(url).call().map_err(fetch_error)?;
    let bytes = response
        .body_mut()
        .with_config()
        .limit(MAX_TEMPLATE_BYTES)
        .read_to_vec()
        .map_err(fetch_error)?;

    tracing::debug!(url = %url, bytes = bytes.len(), "template fetched");
    Ok(bytes)
}
