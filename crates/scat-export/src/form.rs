//! AcroForm access on top of `lopdf`.
//!
//! Fields are indexed once at load time by their fully qualified name
//! (partial names joined with `.`). The field type inherits down the
//! `Kids` tree. Widgets are the kids without a `/T`, or the field itself
//! when field and widget are merged.

use std::collections::HashSet;

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};
use serde::Serialize;
use thiserror::Error;

use crate::error::ExportError;

/// Guards against malformed, cyclic field trees.
const MAX_FIELD_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// `/Tx`
    Text,
    /// `/Btn`: checkboxes and radio groups.
    Toggle,
    /// Anything else (`/Ch`, `/Sig`, missing type).
    Other,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FieldKind::Text => "text",
            FieldKind::Toggle => "toggle",
            FieldKind::Other => "other",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    /// Appearance states a toggle can take besides `Off`.
    pub on_states: Vec<String>,
    #[serde(skip)]
    id: ObjectId,
    #[serde(skip)]
    widgets: Vec<ObjectId>,
}

/// A value read back from a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    /// A toggle's state name, `Off` when cleared.
    State(String),
}

/// Why a single field could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("no field named {0}")]
    Missing(String),

    #[error("field {name} is {actual}, expected {expected}")]
    KindMismatch {
        name: String,
        expected: FieldKind,
        actual: FieldKind,
    },

    #[error("field {name} has no state {state}")]
    NoSuchState { name: String, state: String },

    #[error("field {name} could not be written: {message}")]
    Write { name: String, message: String },
}

pub struct PdfForm {
    doc: Document,
    fields: Vec<FormField>,
    modified: bool,
}

impl PdfForm {
    pub fn load(bytes: &[u8]) -> Result<Self, ExportError> {
        let doc = Document::load_mem(bytes).map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        let fields = index_fields(&doc);
        tracing::debug!(fields = fields.len(), "form fields indexed");
        Ok(Self {
            doc,
            fields,
            modified: false,
        })
    }

    /// Every terminal field in document order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn expect_kind(&self, name: &str, expected: FieldKind) -> Result<FormField, FieldError> {
        let field = self
            .field(name)
            .ok_or_else(|| FieldError::Missing(name.to_string()))?;
        if field.kind != expected {
            return Err(FieldError::KindMismatch {
                name: name.to_string(),
                expected,
                actual: field.kind,
            });
        }
        Ok(field.clone())
    }

    fn dict_mut(&mut self, id: ObjectId, name: &str) -> Result<&mut Dictionary, FieldError> {
        match self.doc.get_object_mut(id) {
            Ok(Object::Dictionary(dict)) => Ok(dict),
            Ok(_) => Err(FieldError::Write {
                name: name.to_string(),
                message: format!("object {id:?} is not a dictionary"),
            }),
            Err(e) => Err(FieldError::Write {
                name: name.to_string(),
                message: e.to_string(),
            }),
        }
    }

    pub fn set_text(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        let field = self.expect_kind(name, FieldKind::Text)?;
        self.dict_mut(field.id, name)?.set("V", pdf_string(value));
        // Stale appearances would show the template's blank box.
        for widget in &field.widgets {
            self.dict_mut(*widget, name)?.remove(b"AP");
        }
        self.modified = true;
        Ok(())
    }

    /// Check or clear a toggle using its first on-state.
    pub fn set_toggle(&mut self, name: &str, on: bool) -> Result<(), FieldError> {
        let field = self.expect_kind(name, FieldKind::Toggle)?;
        if !on {
            return self.apply_state(&field, "Off");
        }
        let state = field
            .on_states
            .first()
            .cloned()
            .unwrap_or_else(|| "Yes".to_string());
        self.apply_state(&field, &state)
    }

    /// Select the widget whose on-state is `state` (radio groups).
    pub fn set_choice(&mut self, name: &str, state: &str) -> Result<(), FieldError> {
        let field = self.expect_kind(name, FieldKind::Toggle)?;
        if !field.on_states.iter().any(|s| s == state) {
            return Err(FieldError::NoSuchState {
                name: name.to_string(),
                state: state.to_string(),
            });
        }
        self.apply_state(&field, state)
    }

    fn apply_state(&mut self, field: &FormField, state: &str) -> Result<(), FieldError> {
        self.dict_mut(field.id, &field.name)?
            .set("V", Object::Name(state.as_bytes().to_vec()));
        for &widget in &field.widgets {
            let shown = if widget_states(&self.doc, widget).iter().any(|s| s == state) {
                state
            } else {
                "Off"
            };
            self.dict_mut(widget, &field.name)?
                .set("AS", Object::Name(shown.as_bytes().to_vec()));
        }
        self.modified = true;
        Ok(())
    }

    pub fn value(&self, name: &str) -> Option<FormValue> {
        let field = self.field(name)?;
        let dict = self.doc.get_dictionary(field.id).ok()?;
        match dict.get(b"V").ok()? {
            Object::String(bytes, _) => Some(FormValue::Text(decode_text(bytes))),
            Object::Name(state) => Some(FormValue::State(String::from_utf8_lossy(state).into_owned())),
            _ => None,
        }
    }

    /// Serialize the document, asking viewers to regenerate appearances
    /// when anything was filled.
    pub fn to_bytes(mut self) -> Result<Vec<u8>, ExportError> {
        if self.modified {
            set_need_appearances(&mut self.doc);
        }
        let mut bytes = Vec::new();
        self.doc
            .save_to(&mut bytes)
            .map_err(|e| ExportError::PdfWrite(e.to_string()))?;
        Ok(bytes)
    }
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Object> {
    match object {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn resolve_dict<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Dictionary> {
    match resolve(doc, object)? {
        Object::Dictionary(dict) => Some(dict),
        Object::Stream(stream) => Some(&stream.dict),
        _ => None,
    }
}

/// PDF text strings are PDFDocEncoding or UTF-16BE with a byte-order mark.
fn decode_text(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| char::from(b)).collect()
    }
}

fn pdf_string(value: &str) -> Object {
    if value.is_ascii() {
        Object::String(value.as_bytes().to_vec(), StringFormat::Literal)
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        bytes.extend(value.encode_utf16().flat_map(u16::to_be_bytes));
        Object::String(bytes, StringFormat::Hexadecimal)
    }
}

fn name_of(object: &Object) -> Option<&[u8]> {
    match object {
        Object::Name(name) => Some(name),
        _ => None,
    }
}

fn widget_states(doc: &Document, widget: ObjectId) -> Vec<String> {
    let Ok(dict) = doc.get_dictionary(widget) else {
        return Vec::new();
    };
    let Some(normal) = dict
        .get(b"AP")
        .ok()
        .and_then(|ap| resolve_dict(doc, ap))
        .and_then(|ap| ap.get(b"N").ok())
        .and_then(|n| resolve_dict(doc, n))
    else {
        return Vec::new();
    };
    normal
        .iter()
        .map(|(state, _)| String::from_utf8_lossy(state).into_owned())
        .filter(|state| state != "Off")
        .collect()
}

fn index_fields(doc: &Document) -> Vec<FormField> {
    let Some(acroform) = acroform(doc) else {
        return Vec::new();
    };
    let Some(Object::Array(roots)) = acroform.get(b"Fields").ok().and_then(|f| resolve(doc, f)) else {
        return Vec::new();
    };

    let mut walker = Walker {
        doc,
        seen: HashSet::new(),
        out: Vec::new(),
    };
    for root in roots {
        if let Object::Reference(id) = root {
            walker.visit(*id, None, Inherited::default(), 0);
        }
    }
    walker.out
}

fn catalog_id(doc: &Document) -> Option<ObjectId> {
    match doc.trailer.get(b"Root").ok()? {
        Object::Reference(id) => Some(*id),
        _ => None,
    }
}

fn acroform(doc: &Document) -> Option<&Dictionary> {
    let catalog = doc.get_dictionary(catalog_id(doc)?).ok()?;
    resolve_dict(doc, catalog.get(b"AcroForm").ok()?)
}

fn set_need_appearances(doc: &mut Document) {
    let Some(catalog_id) = catalog_id(doc) else {
        return;
    };
    let acroform_ref = doc
        .get_dictionary(catalog_id)
        .ok()
        .and_then(|c| c.get(b"AcroForm").ok())
        .and_then(|a| match a {
            Object::Reference(id) => Some(*id),
            _ => None,
        });
    let target = acroform_ref.unwrap_or(catalog_id);
    let Ok(Object::Dictionary(dict)) = doc.get_object_mut(target) else {
        return;
    };
    if acroform_ref.is_some() {
        dict.set("NeedAppearances", Object::Boolean(true));
    } else if let Ok(Object::Dictionary(inline)) = dict.get_mut(b"AcroForm") {
        inline.set("NeedAppearances", Object::Boolean(true));
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Inherited<'a> {
    field_type: Option<&'a [u8]>,
}

struct Walker<'a> {
    doc: &'a Document,
    seen: HashSet<ObjectId>,
    out: Vec<FormField>,
}

impl<'a> Walker<'a> {
    fn visit(&mut self, id: ObjectId, parent: Option<&str>, inherited: Inherited<'a>, depth: usize) {
        if depth > MAX_FIELD_DEPTH || !self.seen.insert(id) {
            return;
        }
        let doc = self.doc;
        let Ok(dict) = doc.get_dictionary(id) else {
            return;
        };

        let partial = dict.get(b"T").ok().and_then(|t| match t {
            Object::String(bytes, _) => Some(decode_text(bytes)),
            _ => None,
        });
        let name = match (parent, partial) {
            (Some(p), Some(t)) => format!("{p}.{t}"),
            (None, Some(t)) => t,
            (Some(p), None) => p.to_string(),
            (None, None) => return,
        };
        let inherited = Inherited {
            field_type: dict.get(b"FT").ok().and_then(name_of).or(inherited.field_type),
        };

        let kids: Vec<ObjectId> = match dict.get(b"Kids").ok().and_then(|k| resolve(doc, k)) {
            Some(Object::Array(kids)) => kids
                .iter()
                .filter_map(|k| match k {
                    Object::Reference(id) => Some(*id),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        let (children, mut widgets): (Vec<ObjectId>, Vec<ObjectId>) = kids
            .into_iter()
            .partition(|kid| doc.get_dictionary(*kid).is_ok_and(|d| d.has(b"T")));

        if !children.is_empty() {
            for child in children {
                self.visit(child, Some(&name), inherited, depth + 1);
            }
            return;
        }

        if widgets.is_empty() && dict.get(b"Subtype").ok().and_then(name_of) == Some(b"Widget".as_slice()) {
            widgets.push(id);
        }

        let kind = match inherited.field_type {
            Some(b"Tx") => FieldKind::Text,
            Some(b"Btn") => FieldKind::Toggle,
            _ => FieldKind::Other,
        };
        let mut on_states = Vec::new();
        if kind == FieldKind::Toggle {
            for &widget in &widgets {
                for state in widget_states(doc, widget) {
                    if !on_states.contains(&state) {
                        on_states.push(state);
                    }
                }
            }
        }

        self.out.push(FormField {
            name,
            kind,
            on_states,
            id,
            widgets,
        });
    }
}
