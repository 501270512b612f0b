//! Field schemas and configuration validation for provider resources.
//!
//! # Key Types
//!
//! - [`ResourceSchema`] - Field layout of one resource type
//! - [`FieldSchema`] - Individual field specification and constraints
//!
//! # Examples
//!
//! ```rust
//! use onelogin_provider::schema::oidc_app_schema;
//! use serde_json::json;
//!
//! let schema = oidc_app_schema();
//! let config = json!({"name": "App1", "connector_id": 108419});
//! assert!(schema.validate_config(config.as_object().unwrap()).is_ok());
//! ```

pub mod app;
pub mod types;
pub mod validation;

pub use app::{
    OIDC_APP_TYPE_NAME, app_schema, oidc_app_schema, oidc_configuration_schema, oidc_sso_schema,
    parameter_schema, provisioning_schema,
};
pub use types::{FieldSchema, FieldType, ResourceSchema, value_kind};
