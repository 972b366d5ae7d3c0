use std::borrow::Cow;

use serde::Serialize;

use super::key::FieldValues;

/// A failed rule, carrying the message shown next to the field.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{message}")]
pub struct ValidationError {
    message: Cow<'static, str>,
}

impl ValidationError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Validates one field's value in isolation.
pub trait ValidationRule {
    fn validate(&self, value: &str) -> ValidationResult;
}

impl<F> ValidationRule for F
where
    F: Fn(&str) -> ValidationResult,
{
    fn validate(&self, value: &str) -> ValidationResult {
        (self)(value)
    }
}

/// Validates the whole value mapping at once, e.g. password confirmation.
pub trait CrossFieldRule {
    fn validate(&self, values: &FieldValues) -> ValidationResult;
}

impl<F> CrossFieldRule for F
where
    F: Fn(&FieldValues) -> ValidationResult,
{
    fn validate(&self, values: &FieldValues) -> ValidationResult {
        (self)(values)
    }
}

/// Ready-made rules for the common cases.
pub mod rules {
    use std::borrow::Cow;

    use regex::Regex;

    use super::{CrossFieldRule, FieldValues, ValidationError, ValidationResult, ValidationRule};
    use crate::form::key::FieldKey;

    fn check(ok: bool, message: &Cow<'static, str>) -> ValidationResult {
        if ok {
            Ok(())
        } else {
            Err(ValidationError::new(message.clone()))
        }
    }

    pub fn always_valid() -> impl ValidationRule {
        |_: &str| -> ValidationResult { Ok(()) }
    }

    /// Fails on empty or whitespace-only input.
    pub fn required(message: impl Into<Cow<'static, str>>) -> impl ValidationRule {
        let message = message.into();
        move |value: &str| check(!value.trim().is_empty(), &message)
    }

    pub fn contains(needle: char, message: impl Into<Cow<'static, str>>) -> impl ValidationRule {
        let message = message.into();
        move |value: &str| check(value.contains(needle), &message)
    }

    /// Length is counted in chars, not bytes.
    pub fn min_length(min: usize, message: impl Into<Cow<'static, str>>) -> impl ValidationRule {
        let message = message.into();
        move |value: &str| check(value.chars().count() >= min, &message)
    }

    pub fn max_length(max: usize, message: impl Into<Cow<'static, str>>) -> impl ValidationRule {
        let message = message.into();
        move |value: &str| check(value.chars().count() <= max, &message)
    }

    pub fn pattern(regex: Regex, message: impl Into<Cow<'static, str>>) -> impl ValidationRule {
        let message = message.into();
        move |value: &str| check(regex.is_match(value), &message)
    }

    /// Runs `rules` in order and reports the first failure.
    pub fn all_of(rules: Vec<Box<dyn ValidationRule>>) -> impl ValidationRule {
        move |value: &str| rules.iter().try_for_each(|rule| rule.validate(value))
    }

    /// Fails unless both fields are present and hold the same value.
    pub fn fields_match(
        first: impl Into<FieldKey>,
        second: impl Into<FieldKey>,
        message: impl Into<Cow<'static, str>>,
    ) -> impl CrossFieldRule {
        let first = first.into();
        let second = second.into();
        let message = message.into();
        move |values: &FieldValues| {
            let matches = match (values.get(&first), values.get(&second)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            };
            check(matches, &message)
        }
    }
}
