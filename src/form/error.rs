use super::key::FieldKey;

/// Errors raised by controller calls that reference fields.
///
/// Validation failures are not `FormError`s; they come back from a submit
/// as [`SubmitOutcome::Invalid`](super::SubmitOutcome::Invalid).
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FormError {
    /// A field with this key is already registered.
    #[error("field '{key}' is already registered")]
    DuplicateField { key: FieldKey },

    /// The key is the one cross-field failures are reported under.
    #[error("field key '{key}' is reserved for cross-field errors")]
    ReservedKey { key: FieldKey },

    /// No field with this key is registered.
    #[error("field '{key}' is not registered")]
    UnknownField { key: FieldKey },

    /// A typed model was built from values that lack one of its fields.
    #[error("no value for field '{key}'")]
    MissingValue { key: FieldKey },

    /// A value could not be parsed into the model's field type.
    #[error("invalid value for field '{key}': {message}")]
    InvalidValue { key: FieldKey, message: String },
}

impl FormError {
    pub fn duplicate(key: impl Into<FieldKey>) -> Self {
        Self::DuplicateField { key: key.into() }
    }

    pub fn unknown(key: impl Into<FieldKey>) -> Self {
        Self::UnknownField { key: key.into() }
    }
}

pub type FormResult<T> = Result<T, FormError>;
