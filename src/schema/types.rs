//! Core schema type definitions for provider resources.
//!
//! This module contains the data structures that describe a resource's fields
//! and their characteristics as the configuration-management host sees them:
//! primitive type, whether the field is required, optional or computed by the
//! server, and how nested blocks are shaped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resource schema definition.
///
/// Represents the complete field layout of one resource type, as exposed to
/// the host for planning and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSchema {
    /// Host type name (e.g. `onelogin_oidc_apps`)
    pub name: String,
    /// Schema description
    pub description: String,
    /// List of field definitions
    pub fields: Vec<FieldSchema>,
}

impl ResourceSchema {
    /// Create a schema from its name, description and fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<FieldSchema>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            fields,
        }
    }

    /// Look up a top-level field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Add a field, replacing any existing field of the same name.
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Names of all required top-level fields.
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// Definition of a single field.
///
/// Block fields (`List`/`Set`) carry their element schema in `elem`; every
/// element of a block is an object whose keys are described by `elem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// Field name
    pub name: String,
    /// Data type of the field
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Must be present in configuration
    pub required: bool,
    /// May be present in configuration
    pub optional: bool,
    /// Value may be supplied by the server
    pub computed: bool,
    /// Value must be masked in host output
    #[serde(default)]
    pub sensitive: bool,
    /// Maximum number of block instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Value reported when the field is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Element fields for block types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elem: Vec<FieldSchema>,
    /// Element field whose value must be unique within a set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl FieldSchema {
    fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            max_items: None,
            default: None,
            elem: Vec::new(),
            key: None,
        }
    }

    /// String field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    /// Boolean field.
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool)
    }

    /// Integer field.
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int)
    }

    /// Ordered block of nested objects.
    pub fn list(name: impl Into<String>, elem: Vec<FieldSchema>) -> Self {
        Self {
            elem,
            ..Self::new(name, FieldType::List)
        }
    }

    /// Unordered block of nested objects.
    pub fn set(name: impl Into<String>, elem: Vec<FieldSchema>) -> Self {
        Self {
            elem,
            ..Self::new(name, FieldType::Set)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Require `field` to be unique across the elements of this block.
    pub fn keyed_by(mut self, field: impl Into<String>) -> Self {
        self.key = Some(field.into());
        self
    }

    /// Whether the field holds nested objects.
    pub fn is_block(&self) -> bool {
        matches!(self.field_type, FieldType::List | FieldType::Set)
    }

    /// Whether the field may only be populated by the server.
    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }

    /// Look up an element field of a block.
    pub fn elem_field(&self, name: &str) -> Option<&FieldSchema> {
        self.elem.iter().find(|f| f.name == name)
    }
}

/// Field data types.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// String value
    #[default]
    String,
    /// Boolean value
    Bool,
    /// Integer number
    Int,
    /// Ordered collection of nested objects
    List,
    /// Unordered collection of nested objects
    Set,
}

impl FieldType {
    /// Name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Bool => "bool",
            FieldType::Int => "int",
            FieldType::List => "list",
            FieldType::Set => "set",
        }
    }

    /// Whether a JSON value has this field type's shape.
    ///
    /// Only the outer shape is checked; block elements are checked by the
    /// caller against the element schema.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Int => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
            FieldType::List | FieldType::Set => value.is_array(),
        }
    }
}

/// Name of a JSON value's kind, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
