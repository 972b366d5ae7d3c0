use super::validation::{ValidationError, ValidationResult, ValidationRule};

/// Where a field sits in the blur/change/submit lifecycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldStatus {
    /// Unedited and never blurred.
    Pristine,
    /// Edited (or holding a non-initial value) and not blurred since.
    DirtyUntouched,
    TouchedValid,
    TouchedInvalid,
}

/// Value and focus bookkeeping for a single input.
///
/// Validity is never stored. It is derived from the current value each
/// time a rule is applied, so an error disappears the moment the user
/// types and comes back on the next blur if the value is still bad.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldState {
    value: String,
    touched: bool,
    edited: bool,
}

impl FieldState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
            touched: false,
            edited: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_edited(&self) -> bool {
        self.edited
    }

    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = false;
        self.edited = true;
    }

    pub fn on_blur(&mut self) {
        self.touched = true;
    }

    pub fn reset(&mut self, initial: impl Into<String>) {
        self.value = initial.into();
        self.touched = false;
        self.edited = false;
    }

    pub fn is_invalid(&self, rule: &dyn ValidationRule) -> bool {
        self.touched && rule.validate(&self.value).is_err()
    }

    /// The error the presentation layer should show right now, if any.
    pub fn visible_error(&self, rule: &dyn ValidationRule) -> Option<ValidationError> {
        if !self.touched {
            return None;
        }
        rule.validate(&self.value).err()
    }

    pub fn status(&self, initial: &str, rule: &dyn ValidationRule) -> FieldStatus {
        if self.touched {
            if rule.validate(&self.value).is_ok() {
                FieldStatus::TouchedValid
            } else {
                FieldStatus::TouchedInvalid
            }
        } else if self.edited || self.value != initial {
            FieldStatus::DirtyUntouched
        } else {
            FieldStatus::Pristine
        }
    }
}

/// A field bundled with its initial value and rule.
///
/// Usable on its own for a single input, and the unit the
/// [`FormController`](super::FormController) keeps per registered field.
pub struct ValidatedField {
    initial: String,
    state: FieldState,
    rule: Box<dyn ValidationRule>,
}

impl ValidatedField {
    pub fn new(initial: impl Into<String>, rule: impl ValidationRule + 'static) -> Self {
        Self::with_boxed_rule(initial.into(), Box::new(rule))
    }

    pub(super) fn with_boxed_rule(initial: String, rule: Box<dyn ValidationRule>) -> Self {
        Self {
            state: FieldState::new(initial.clone()),
            initial,
            rule,
        }
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn initial_value(&self) -> &str {
        &self.initial
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn is_touched(&self) -> bool {
        self.state.is_touched()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.value() != self.initial
    }

    /// Whether the current value passes the rule, touched or not.
    pub fn is_valid(&self) -> bool {
        self.rule.validate(self.state.value()).is_ok()
    }

    /// Whether an error should currently be shown.
    pub fn has_error(&self) -> bool {
        self.state.is_invalid(&*self.rule)
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.state.visible_error(&*self.rule)
    }

    pub fn status(&self) -> FieldStatus {
        self.state.status(&self.initial, &*self.rule)
    }

    pub fn value_change(&mut self, value: impl Into<String>) {
        self.state.on_change(value);
    }

    pub fn blur(&mut self) {
        self.state.on_blur();
    }

    pub fn reset(&mut self) {
        self.state.reset(self.initial.clone());
    }

    pub(super) fn validate(&self) -> ValidationResult {
        self.rule.validate(self.state.value())
    }

    pub(super) fn set_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rule = rule;
    }
}

impl std::fmt::Debug for ValidatedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedField")
            .field("initial", &self.initial)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
