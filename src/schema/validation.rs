//! Configuration validation against resource schemas.
//!
//! The field mappers are deliberately permissive and never fail on a badly
//! shaped bag. Hosts that want strict behaviour validate declared
//! configuration here first, before it reaches the state store.

use super::types::{FieldSchema, ResourceSchema, value_kind};
use crate::error::{ValidationError, ValidationResult};
use serde_json::{Map, Value};
use std::collections::HashSet;

impl ResourceSchema {
    /// Validate a declared configuration against this schema.
    ///
    /// Checks required fields, primitive types, block shapes, `max_items` and
    /// key uniqueness in keyed sets, and rejects unknown or computed-only
    /// fields.
    pub fn validate_config(&self, config: &Map<String, Value>) -> ValidationResult<()> {
        validate_fields(&self.fields, config, &self.name)
    }
}

fn validate_fields(
    fields: &[FieldSchema],
    obj: &Map<String, Value>,
    schema_name: &str,
) -> ValidationResult<()> {
    for field in fields {
        validate_field(field, obj.get(&field.name), schema_name)?;
    }

    for name in obj.keys() {
        if !fields.iter().any(|f| f.name == *name) {
            return Err(ValidationError::UnknownField {
                field: name.clone(),
                schema: schema_name.to_string(),
            });
        }
    }

    Ok(())
}

fn validate_field(
    field: &FieldSchema,
    value: Option<&Value>,
    schema_name: &str,
) -> ValidationResult<()> {
    let value = match value {
        None | Some(Value::Null) => {
            if field.required {
                return Err(ValidationError::missing_required(&field.name));
            }
            return Ok(());
        }
        Some(value) => value,
    };

    if field.is_computed_only() {
        return Err(ValidationError::ComputedField {
            field: field.name.clone(),
        });
    }

    if !field.field_type.matches(value) {
        return Err(ValidationError::invalid_type(
            &field.name,
            field.field_type.as_str(),
            value_kind(value),
        ));
    }

    if !field.is_block() {
        return Ok(());
    }
    let items = value.as_array().map(Vec::as_slice).unwrap_or_default();

    if let Some(max) = field.max_items {
        if items.len() > max {
            return Err(ValidationError::TooManyItems {
                field: field.name.clone(),
                max,
                actual: items.len(),
            });
        }
    }

    let mut keys = HashSet::new();
    for item in items {
        let element = item
            .as_object()
            .ok_or_else(|| ValidationError::InvalidBlockElement {
                field: field.name.clone(),
            })?;
        validate_fields(&field.elem, element, schema_name)?;

        let key = field
            .key
            .as_deref()
            .and_then(|key| element.get(key))
            .and_then(Value::as_str);
        if let Some(key) = key {
            if !keys.insert(key) {
                return Err(ValidationError::DuplicateKey {
                    field: field.name.clone(),
                    key: key.to_string(),
                });
            }
        }
    }

    Ok(())
}
