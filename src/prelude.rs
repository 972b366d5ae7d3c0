pub use crate::form::rules;
pub use crate::form::{
    CrossFieldRule, FORM_ERROR_KEY, FieldErrors, FieldKey, FieldState, FieldStatus, FieldValues,
    FieldView, FormController, FormError, FormModel, FormOptions, FormResult, InputConfig,
    InputKind, SubmitOutcome, SubmitState, ValidatedField, ValidationError, ValidationResult,
    ValidationRule,
};
