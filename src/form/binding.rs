use indexmap::IndexMap;

use super::controller::{FieldEntry, FormController};
use super::error::{FormError, FormResult};
use super::field::FieldStatus;
use super::key::FieldKey;
use super::validation::ValidationError;

/// Everything the presentation layer needs to render one field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldView {
    pub key: FieldKey,
    pub value: String,
    pub touched: bool,
    pub dirty: bool,
    pub invalid: bool,
    pub message: Option<ValidationError>,
    pub status: FieldStatus,
    pub description: Option<String>,
    pub required: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Number => "number",
        }
    }
}

/// Options bag for a generic labelled input.
///
/// Anything the controller does not know about goes into `attributes`
/// and is passed through untouched.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InputConfig {
    pub id: String,
    pub label: String,
    pub kind: InputKind,
    pub value: String,
    pub error_text: Option<String>,
    pub description: Option<String>,
    pub required: bool,
    pub attributes: IndexMap<String, String>,
}

impl InputConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn error_text(mut self, error_text: impl Into<String>) -> Self {
        self.error_text = Some(error_text.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl FormController {
    pub fn field_view(&self, id: impl AsRef<str>) -> FormResult<FieldView> {
        let id = id.as_ref();
        let (key, entry) = self
            .fields
            .get_key_value(id)
            .ok_or_else(|| FormError::unknown(id.to_owned()))?;
        Ok(view_of(key.clone(), entry))
    }

    /// Views of every field in display order.
    pub fn field_views(&self) -> Vec<FieldView> {
        self.fields
            .iter()
            .map(|(key, entry)| view_of(key.clone(), entry))
            .collect()
    }

    /// Fills `config` from the field named by `config.id`.
    ///
    /// The error text is only set while the error is visible; a caller
    /// supplied description is kept when the field has none.
    pub fn bind_input(&self, config: InputConfig) -> FormResult<InputConfig> {
        let entry = self.entry(&config.id)?;
        let mut bound = config.value(entry.field.value());
        bound.error_text = entry.field.error().map(|error| error.message().to_owned());
        if let Some(description) = &entry.description {
            bound.description = Some(description.clone());
        }
        bound.required |= entry.required;
        Ok(bound)
    }
}

fn view_of(key: FieldKey, entry: &FieldEntry) -> FieldView {
    let field = &entry.field;
    let message = field.error();
    FieldView {
        key,
        value: field.value().to_owned(),
        touched: field.is_touched(),
        dirty: field.is_dirty(),
        invalid: message.is_some(),
        message,
        status: field.status(),
        description: entry.description.clone(),
        required: entry.required,
    }
}
