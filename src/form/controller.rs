use indexmap::IndexMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::error::{FormError, FormResult};
use super::field::{FieldStatus, ValidatedField};
use super::key::{FORM_ERROR_KEY, FieldKey, FieldValues};
use super::model::FormModel;
use super::validation::{
    CrossFieldRule, ValidationError, ValidationResult, ValidationRule, rules,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitState {
    Idle,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// Key that cross-field failures are reported under.
    pub form_error_key: FieldKey,
    /// Mark every field touched when a submit fails, so errors show.
    pub touch_all_on_failed_submit: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            form_error_key: FORM_ERROR_KEY,
            touch_all_on_failed_submit: true,
        }
    }
}

/// Messages per failing field, in display order.
///
/// A field entry holds the single message of its rule; the form key
/// collects every failing cross-field rule in the order they ran.
pub type FieldErrors = IndexMap<FieldKey, Vec<ValidationError>>;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Valid { values: FieldValues },
    Invalid { errors: FieldErrors },
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, SubmitOutcome::Valid { .. })
    }

    pub fn values(&self) -> Option<&FieldValues> {
        match self {
            SubmitOutcome::Valid { values } => Some(values),
            SubmitOutcome::Invalid { .. } => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitOutcome::Valid { .. } => None,
            SubmitOutcome::Invalid { errors } => Some(errors),
        }
    }

    /// Every message reported under `key`; empty when it passed.
    pub fn messages(&self, key: &str) -> Vec<&str> {
        self.errors()
            .and_then(|errors| errors.get(key))
            .map(|list| list.iter().map(ValidationError::message).collect())
            .unwrap_or_default()
    }

    pub fn into_result(self) -> Result<FieldValues, FieldErrors> {
        match self {
            SubmitOutcome::Valid { values } => Ok(values),
            SubmitOutcome::Invalid { errors } => Err(errors),
        }
    }
}

pub(super) struct FieldEntry {
    pub(super) field: ValidatedField,
    pub(super) description: Option<String>,
    pub(super) required: bool,
}

/// Owns every field of one form and routes change, blur, submit and
/// reset events to them.
///
/// Fields keep their registration order, which is also the order of
/// [`values`](Self::values), submit errors and [`field_views`](Self::field_views).
pub struct FormController {
    pub(super) options: FormOptions,
    pub(super) fields: IndexMap<FieldKey, FieldEntry>,
    pub(super) form_rules: Vec<Box<dyn CrossFieldRule>>,
    pub(super) submit_state: SubmitState,
    pub(super) submit_count: u32,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FormOptions::default())
    }
}

impl FormController {
    pub fn new(options: FormOptions) -> Self {
        Self {
            options,
            fields: IndexMap::new(),
            form_rules: Vec::new(),
            submit_state: SubmitState::Idle,
            submit_count: 0,
        }
    }

    /// Registers every field of `model`, in declaration order, with its
    /// current value as the initial value and no rule.
    pub fn from_model<T: FormModel>(model: &T, options: FormOptions) -> FormResult<Self> {
        let mut controller = Self::new(options);
        for (key, value) in model.to_values() {
            controller.insert_field(key, value, Box::new(rules::always_valid()))?;
        }
        Ok(controller)
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn register_field(
        &mut self,
        id: impl Into<FieldKey>,
        initial: impl Into<String>,
        rule: impl ValidationRule + 'static,
    ) -> FormResult<()> {
        let key = id.into();
        if self.fields.contains_key(&key) {
            debug!("rejecting duplicate registration of field '{key}'");
            return Err(FormError::DuplicateField { key });
        }
        self.insert_field(key, initial.into(), Box::new(rule))
    }

    pub fn register_unvalidated_field(
        &mut self,
        id: impl Into<FieldKey>,
        initial: impl Into<String>,
    ) -> FormResult<()> {
        self.register_field(id, initial, rules::always_valid())
    }

    pub fn set_rule(
        &mut self,
        id: impl AsRef<str>,
        rule: impl ValidationRule + 'static,
    ) -> FormResult<()> {
        self.entry_mut(id.as_ref())?.field.set_rule(Box::new(rule));
        Ok(())
    }

    /// Adds a rule over all values that every submit runs after the
    /// field rules.
    pub fn register_form_rule(&mut self, rule: impl CrossFieldRule + 'static) {
        self.form_rules.push(Box::new(rule));
        debug!("registered form rule #{}", self.form_rules.len());
    }

    pub fn handle_change(&mut self, id: impl AsRef<str>, value: impl Into<String>) -> FormResult<()> {
        let id = id.as_ref();
        self.entry_mut(id)?.field.value_change(value);
        trace!("field '{id}' changed");
        Ok(())
    }

    pub fn handle_blur(&mut self, id: impl AsRef<str>) -> FormResult<()> {
        let id = id.as_ref();
        self.entry_mut(id)?.field.blur();
        trace!("field '{id}' blurred");
        Ok(())
    }

    pub fn field(&self, id: impl AsRef<str>) -> Option<&ValidatedField> {
        self.fields.get(id.as_ref()).map(|entry| &entry.field)
    }

    pub fn field_keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.fields.keys()
    }

    pub fn value(&self, id: impl AsRef<str>) -> FormResult<&str> {
        Ok(self.entry(id.as_ref())?.field.value())
    }

    /// Snapshot of every current value, in display order.
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|(key, entry)| (key.clone(), entry.field.value().to_owned()))
            .collect()
    }

    pub fn is_invalid(&self, id: impl AsRef<str>) -> FormResult<bool> {
        Ok(self.entry(id.as_ref())?.field.has_error())
    }

    pub fn visible_error(&self, id: impl AsRef<str>) -> FormResult<Option<ValidationError>> {
        Ok(self.entry(id.as_ref())?.field.error())
    }

    pub fn status(&self, id: impl AsRef<str>) -> FormResult<FieldStatus> {
        Ok(self.entry(id.as_ref())?.field.status())
    }

    /// First field, in display order, currently showing an error.
    pub fn first_visible_error(&self) -> Option<&FieldKey> {
        self.fields
            .iter()
            .find_map(|(key, entry)| entry.field.has_error().then_some(key))
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.values().any(|entry| entry.field.is_dirty())
    }

    /// Whether a submit right now would succeed. Touches nothing.
    pub fn is_valid(&self) -> bool {
        if !self.fields.values().all(|entry| entry.field.is_valid()) {
            return false;
        }
        let values = self.values();
        self.form_rules
            .iter()
            .all(|rule| rule.validate(&values).is_ok())
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Validates every field against its current value, touched or not,
    /// followed by the registered form rules.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.run_submit(&[])
    }

    /// Like [`submit`](Self::submit), additionally running `cross_rules`
    /// against the same snapshot of values.
    pub fn submit_with_cross_field_rules(
        &mut self,
        cross_rules: &[&dyn CrossFieldRule],
    ) -> SubmitOutcome {
        self.run_submit(cross_rules)
    }

    /// Submits and hands the values to `handler` only when they are valid.
    pub fn submit_with<R>(
        &mut self,
        handler: impl FnOnce(&FieldValues) -> R,
    ) -> Result<R, FieldErrors> {
        self.submit().into_result().map(|values| handler(&values))
    }

    pub fn reset(&mut self) {
        for entry in self.fields.values_mut() {
            entry.field.reset();
        }
        self.submit_state = SubmitState::Idle;
        self.submit_count = 0;
        debug!("reset form with {} fields", self.fields.len());
    }

    pub fn reset_field(&mut self, id: impl AsRef<str>) -> FormResult<()> {
        self.entry_mut(id.as_ref())?.field.reset();
        Ok(())
    }

    pub fn describe_field(
        &mut self,
        id: impl AsRef<str>,
        description: impl Into<String>,
    ) -> FormResult<()> {
        self.entry_mut(id.as_ref())?.description = Some(description.into());
        Ok(())
    }

    pub fn mark_required(&mut self, id: impl AsRef<str>, required: bool) -> FormResult<()> {
        self.entry_mut(id.as_ref())?.required = required;
        Ok(())
    }

    fn run_submit(&mut self, extra_rules: &[&dyn CrossFieldRule]) -> SubmitOutcome {
        self.submit_count = self.submit_count.saturating_add(1);
        let values = self.values();

        let mut errors = FieldErrors::new();
        for (key, entry) in &self.fields {
            if let Err(error) = entry.field.validate() {
                errors.insert(key.clone(), vec![error]);
            }
        }

        let form_key = &self.options.form_error_key;
        for rule in &self.form_rules {
            record_form_error(rule.validate(&values), form_key, &mut errors);
        }
        for rule in extra_rules {
            record_form_error(rule.validate(&values), form_key, &mut errors);
        }

        if errors.is_empty() {
            self.submit_state = SubmitState::Succeeded;
            debug!("submit #{} passed with {} fields", self.submit_count, values.len());
            return SubmitOutcome::Valid { values };
        }

        self.submit_state = SubmitState::Failed;
        if self.options.touch_all_on_failed_submit {
            for entry in self.fields.values_mut() {
                entry.field.blur();
            }
        }
        debug!(
            "submit #{} failed: {:?}",
            self.submit_count,
            errors.keys().map(FieldKey::as_str).collect::<Vec<_>>()
        );
        SubmitOutcome::Invalid { errors }
    }

    fn insert_field(
        &mut self,
        key: FieldKey,
        initial: String,
        rule: Box<dyn ValidationRule>,
    ) -> FormResult<()> {
        if key == self.options.form_error_key {
            debug!("rejecting field '{key}': reserved for cross-field errors");
            return Err(FormError::ReservedKey { key });
        }
        debug!("registering field '{key}'");
        self.fields.insert(
            key,
            FieldEntry {
                field: ValidatedField::with_boxed_rule(initial, rule),
                description: None,
                required: false,
            },
        );
        Ok(())
    }

    pub(super) fn entry(&self, id: &str) -> FormResult<&FieldEntry> {
        self.fields
            .get(id)
            .ok_or_else(|| FormError::unknown(id.to_owned()))
    }

    fn entry_mut(&mut self, id: &str) -> FormResult<&mut FieldEntry> {
        self.fields
            .get_mut(id)
            .ok_or_else(|| FormError::unknown(id.to_owned()))
    }
}

fn record_form_error(result: ValidationResult, key: &FieldKey, errors: &mut FieldErrors) {
    if let Err(error) = result {
        errors.entry(key.clone()).or_default().push(error);
    }
}
