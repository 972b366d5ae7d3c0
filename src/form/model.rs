use std::fmt::Display;
use std::str::FromStr;

use super::error::{FormError, FormResult};
use super::key::{FieldKey, FieldValues};

pub use formstate_derive::FormModel;

/// A typed struct whose fields map one-to-one onto form fields.
///
/// Usually derived with `#[derive(FormModel)]`.
pub trait FormModel: Sized {
    type Fields;

    fn fields() -> Self::Fields;

    /// Field names in declaration order.
    fn field_names() -> &'static [&'static str];

    fn to_values(&self) -> FieldValues;

    fn from_values(values: &FieldValues) -> FormResult<Self>;
}

/// Reads `key` from `values` and parses it with `FromStr`.
pub fn parse_field<V>(values: &FieldValues, key: &'static str) -> FormResult<V>
where
    V: FromStr,
    V::Err: Display,
{
    let raw = values.get(key).ok_or_else(|| FormError::MissingValue {
        key: FieldKey::new(key),
    })?;
    raw.parse::<V>().map_err(|error| FormError::InvalidValue {
        key: FieldKey::new(key),
        message: error.to_string(),
    })
}
