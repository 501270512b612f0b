//! Configuration-state store abstraction.
//!
//! The host owns the durable state of each resource instance. Lifecycle
//! operations read the declared fields from it on entry and write the
//! observed fields back on exit, through the [`ResourceState`] trait.
//!
//! [`ResourceData`] is an in-memory implementation that applies schema
//! defaults on read and type-checks every write against the schema.

pub mod resource_data;

pub use resource_data::ResourceData;

use crate::error::StateError;
use serde_json::Value;

/// Durable per-instance state owned by the host.
pub trait ResourceState {
    /// Current value of a field, or `None` when it is absent.
    fn get(&self, field: &str) -> Option<Value>;

    /// Check that `set(field, value)` would succeed, without writing.
    fn check(&self, field: &str, value: &Value) -> Result<(), StateError> {
        let _ = (field, value);
        Ok(())
    }

    /// Write a field. `Value::Null` clears it.
    fn set(&mut self, field: &str, value: Value) -> Result<(), StateError>;

    /// Durable identifier; empty when the resource is untracked.
    fn id(&self) -> &str;

    /// Replace the durable identifier. An empty string untracks the resource.
    fn set_id(&mut self, id: String);

    /// Whether the host currently tracks a remote entity.
    fn is_tracked(&self) -> bool {
        !self.id().is_empty()
    }
}
