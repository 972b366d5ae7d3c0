mod binding;
mod controller;
mod error;
mod field;
mod key;
mod model;
mod validation;


pub use binding::{FieldView, InputConfig, InputKind};
pub use controller::{FieldErrors, FormController, FormOptions, SubmitOutcome, SubmitState};
pub use error::{FormError, FormResult};
pub use field::{FieldState, FieldStatus, ValidatedField};
pub use key::{FORM_ERROR_KEY, FieldKey, FieldValues};
pub use model::{FormModel, parse_field};
pub use validation::{CrossFieldRule, ValidationError, ValidationResult, ValidationRule, rules};
