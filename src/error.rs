//! Error types for provider operations.
//!
//! Errors are split by layer: [`ProviderError`] is what lifecycle operations
//! return to the host, while [`ValidationError`], [`StateError`] and
//! [`ConfigError`] describe failures in configuration validation, state store
//! writes and provider configuration respectively.

/// Main error type for resource lifecycle operations.
///
/// Errors from the API client collaborator are carried verbatim in
/// [`ProviderError::Api`] so the host sees exactly what the transport reported.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Errors reported by the API client (transport, non-2xx, malformed body)
    #[error("API error: {0}")]
    Api(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The durable identifier held by the host is not a valid app id
    #[error("Invalid resource id '{id}': expected a positive integer")]
    InvalidId { id: String },

    /// The server accepted a mutating call but returned no identifier
    #[error("API response for {operation} did not include an app id")]
    MissingId { operation: String },

    /// Writing to the configuration-state store failed
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Declared configuration does not match the resource schema
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Provider configuration is incomplete or malformed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for declared configuration.
///
/// Produced when a configuration bag is checked against a resource schema
/// before it is handed to the state store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required field is missing
    #[error("Required field '{field}' is missing")]
    MissingRequiredField { field: String },

    /// Field value doesn't match the declared type
    #[error("Field '{field}' has invalid type, expected {expected}, got {actual}")]
    InvalidFieldType {
        field: String,
        expected: String,
        actual: String,
    },

    /// Field is not part of the schema
    #[error("Unknown field '{field}' in schema '{schema}'")]
    UnknownField { field: String, schema: String },

    /// Block holds more instances than allowed
    #[error("Field '{field}' allows at most {max} item(s), got {actual}")]
    TooManyItems {
        field: String,
        max: usize,
        actual: usize,
    },

    /// Computed-only field was set in configuration
    #[error("Field '{field}' is computed and cannot be set in configuration")]
    ComputedField { field: String },

    /// Block element is not an object
    #[error("Block '{field}' contains an element that is not an object")]
    InvalidBlockElement { field: String },

    /// Two elements of a keyed set share the same key
    #[error("Block '{field}' declares key '{key}' more than once")]
    DuplicateKey { field: String, key: String },
}

/// Errors raised by the configuration-state store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Attempted to write a field that the schema does not declare
    #[error("Field '{field}' is not declared by the resource schema")]
    UnknownField { field: String },

    /// Attempted to write a value of the wrong type
    #[error("Field '{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },
}

/// Errors in provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required setting was not provided
    #[error("Missing required setting '{name}'")]
    MissingSetting { name: String },

    /// The API URL is not an http(s) URL
    #[error("Invalid API URL '{url}'")]
    InvalidUrl { url: String },

    /// A setting has a value that cannot be used
    #[error("Invalid value for '{name}': {message}")]
    InvalidSetting { name: String, message: String },
}

// Convenience methods for creating common errors
impl ProviderError {
    /// Wrap an API client error
    pub fn api<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Api(Box::new(error))
    }

    /// Create an invalid id error
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    /// Create a missing id error for the named operation
    pub fn missing_id(operation: impl Into<String>) -> Self {
        Self::MissingId {
            operation: operation.into(),
        }
    }
}

impl ValidationError {
    /// Create a missing required field error
    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidFieldType {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl ConfigError {
    /// Create a missing setting error
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingSetting { name: name.into() }
    }
}

// Result type aliases for convenience
pub type ProviderResult<T> = Result<T, ProviderError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
