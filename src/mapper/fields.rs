//! Typed accessors over a [`FieldBag`].
//!
//! Each getter returns `None` both for a missing field and for a field whose
//! value has the wrong kind.

use super::FieldBag;
use serde_json::Value;

pub fn string_field(bag: &FieldBag, name: &str) -> Option<String> {
    bag.get(name).and_then(Value::as_str).map(str::to_owned)
}

pub fn bool_field(bag: &FieldBag, name: &str) -> Option<bool> {
    bag.get(name).and_then(Value::as_bool)
}

/// Integer fields are 32-bit on the wire; larger values count as wrong-kind.
pub fn int_field(bag: &FieldBag, name: &str) -> Option<i32> {
    bag.get(name)
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
}

/// Presence marker for flattened output.
pub fn optional<T: Into<Value>>(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
}

/// Object elements of the block stored under `name`, skipping anything else.
pub fn blocks<'a>(bag: &'a FieldBag, name: &str) -> impl Iterator<Item = &'a FieldBag> {
    bag.get(name)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

pub fn first_block<'a>(bag: &'a FieldBag, name: &str) -> Option<&'a FieldBag> {
    blocks(bag, name).next()
}
