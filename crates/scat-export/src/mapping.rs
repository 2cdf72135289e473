//! Field-name tables binding PDF form fields to values in the export view.
//!
//! A table is a JSON array of bindings. `source` is a JSON pointer into
//! `{ "record": ..., "scores": ... }`.

use std::path::Path;

use scat_core::InstrumentKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExportError;

const SCAT6_DEFAULT: &str = include_str!("../field_maps/scat6.json");
const SCOAT6_DEFAULT: &str = include_str!("../field_maps/scoat6.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Fully qualified PDF field name.
    pub field: String,
    /// JSON pointer into the export view.
    pub source: String,
    /// Check the toggle exactly when the source equals this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<Value>,
    /// Select the widget whose on-state equals the source value.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub choice: bool,
}

/// What a binding asks the form to do for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldAction {
    Text(String),
    Toggle(bool),
    Choice(String),
}

/// Why a binding produced no action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    NoValue,
    Unsupported(&'static str),
}

impl FieldBinding {
    pub fn resolve(&self, view: &Value) -> Result<FieldAction, Unresolved> {
        let value = match view.pointer(&self.source) {
            None | Some(Value::Null) => return Err(Unresolved::NoValue),
            Some(value) => value,
        };

        if let Some(expected) = &self.when {
            return Ok(FieldAction::Toggle(value == expected));
        }
        if self.choice {
            return scalar_text(value).map(FieldAction::Choice);
        }
        match value {
            Value::Bool(on) => Ok(FieldAction::Toggle(*on)),
            other => scalar_text(other).map(FieldAction::Text),
        }
    }
}

/// Integers as-is, fractions with two decimals.
pub fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        format!("{:.2}", n.as_f64().unwrap_or_default())
    }
}

fn scalar_text(value: &Value) -> Result<String, Unresolved> {
    match value {
        Value::String(s) if s.trim().is_empty() => Err(Unresolved::NoValue),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(format_number(n)),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(Unresolved::NoValue),
        Value::Array(_) => Err(Unresolved::Unsupported("array")),
        Value::Object(_) => Err(Unresolved::Unsupported("object")),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    pub bindings: Vec<FieldBinding>,
}

impl FieldMap {
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let map: FieldMap =
            serde_json::from_str(json).map_err(|e| ExportError::FieldMap(e.to_string()))?;
        map.validate()?;
        Ok(map)
    }

    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let json = std::fs::read_to_string(path).map_err(|e| ExportError::TemplateRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// The built-in table for `kind`.
    pub fn default_for(kind: InstrumentKind) -> Result<Self, ExportError> {
        match kind {
            InstrumentKind::Scat6 => Self::from_json(SCAT6_DEFAULT),
            InstrumentKind::Scoat6 => Self::from_json(SCOAT6_DEFAULT),
        }
    }

    fn validate(&self) -> Result<(), ExportError> {
        for binding in &self.bindings {
            if binding.field.trim().is_empty() {
                return Err(ExportError::FieldMap("binding with an empty field name".to_string()));
            }
            if !binding.source.starts_with('/') {
                return Err(ExportError::FieldMap(format!(
                    "{}: source {:?} is not a JSON pointer",
                    binding.field, binding.source
                )));
            }
            if binding.choice && binding.when.is_some() {
                return Err(ExportError::FieldMap(format!(
                    "{}: choice and when are exclusive",
                    binding.field
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
