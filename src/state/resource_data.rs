//! In-memory configuration-state store backed by a resource schema.
//!
//! # Example Usage
//!
//! ```rust
//! use onelogin_provider::schema::oidc_app_schema;
//! use onelogin_provider::state::{ResourceData, ResourceState};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = json!({"name": "App1", "connector_id": 108419});
//! let data = ResourceData::from_config(oidc_app_schema(), config.as_object().unwrap())?;
//!
//! assert_eq!(data.get("name"), Some(json!("App1")));
//! // Schema defaults fill absent fields
//! assert_eq!(data.get("visible"), Some(json!(true)));
//! assert!(!data.is_tracked());
//! # Ok(())
//! # }
//! ```

use super::ResourceState;
use crate::error::{StateError, ValidationResult};
use crate::mapper::FieldBag;
use crate::schema::{FieldSchema, ResourceSchema, value_kind};
use serde_json::Value;
use std::sync::Arc;

/// Field values and durable id of one resource instance.
#[derive(Debug, Clone)]
pub struct ResourceData {
    schema: Arc<ResourceSchema>,
    values: FieldBag,
    id: String,
}

impl ResourceData {
    /// Create an empty, untracked instance.
    pub fn new(schema: impl Into<Arc<ResourceSchema>>) -> Self {
        Self {
            schema: schema.into(),
            values: FieldBag::new(),
            id: String::new(),
        }
    }

    /// Create an instance seeded from declared configuration.
    ///
    /// The configuration is validated against the schema first; `null`
    /// entries are treated as absent.
    pub fn from_config(
        schema: impl Into<Arc<ResourceSchema>>,
        config: &FieldBag,
    ) -> ValidationResult<Self> {
        let schema = schema.into();
        schema.validate_config(config)?;

        let values = config
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            schema,
            values,
            id: String::new(),
        })
    }

    /// Set the durable identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    /// Stored values, without schema defaults applied.
    pub fn values(&self) -> &FieldBag {
        &self.values
    }
}

impl ResourceState for ResourceData {
    fn get(&self, field: &str) -> Option<Value> {
        self.values
            .get(field)
            .cloned()
            .or_else(|| self.schema.field(field)?.default.clone())
    }

    fn check(&self, field: &str, value: &Value) -> Result<(), StateError> {
        let definition = self
            .schema
            .field(field)
            .ok_or_else(|| StateError::UnknownField {
                field: field.to_string(),
            })?;

        if value.is_null() {
            return Ok(());
        }
        check_value(definition, field, value)
    }

    fn set(&mut self, field: &str, value: Value) -> Result<(), StateError> {
        self.check(field, &value)?;

        if value.is_null() {
            self.values.remove(field);
        } else {
            self.values.insert(field.to_string(), value);
        }
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Type-check a value, descending into block elements.
fn check_value(field: &FieldSchema, path: &str, value: &Value) -> Result<(), StateError> {
    if !field.field_type.matches(value) {
        return Err(StateError::TypeMismatch {
            field: path.to_string(),
            expected: field.field_type.as_str().to_string(),
            actual: value_kind(value).to_string(),
        });
    }

    if !field.is_block() {
        return Ok(());
    }
    let items = value.as_array().map(Vec::as_slice).unwrap_or_default();

    for item in items {
        let element = item.as_object().ok_or_else(|| StateError::TypeMismatch {
            field: path.to_string(),
            expected: "object".to_string(),
            actual: value_kind(item).to_string(),
        })?;

        for (name, nested) in element {
            let nested_path = format!("{path}.{name}");
            let nested_field =
                field
                    .elem_field(name)
                    .ok_or_else(|| StateError::UnknownField {
                        field: nested_path.clone(),
                    })?;
            if !nested.is_null() {
                check_value(nested_field, &nested_path, nested)?;
            }
        }
    }

    Ok(())
}
