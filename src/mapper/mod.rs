//! Bidirectional mapping between flat field bags and wire models.
//!
//! The host hands the provider loosely typed bags of named fields. Each mapper
//! converts one such bag into a typed record ("inflate") and back ("flatten").
//!
//! Inflate is total: a field that is missing, or holds a value of the wrong
//! primitive kind, leaves the record attribute as `None`. Flatten always emits
//! every attribute, using `null` for the unset ones so the distinction between
//! "unset" and "empty" survives the round trip.
//!
//! # Key Components
//!
//! * [`FieldMapper`] - Inflate/flatten contract shared by every block mapper
//! * [`AppMapper`] - Composes the block mappers into a whole [`App`](crate::models::App)
//! * [`ParameterMapper`] - Keyed `parameters` collection

pub mod app;
pub mod configuration;
pub mod fields;
pub mod parameters;
pub mod provisioning;
pub mod sso;

pub use app::AppMapper;
pub use configuration::OidcConfigurationMapper;
pub use parameters::ParameterMapper;
pub use provisioning::ProvisioningMapper;
pub use sso::OidcSsoMapper;

use serde_json::{Map, Value};

/// A flat bag of named, loosely typed fields.
pub type FieldBag = Map<String, Value>;

/// Conversion between a field bag and one typed record.
pub trait FieldMapper {
    /// The typed record this mapper produces.
    type Record;

    /// Build a record from the fields present in `bag`.
    fn inflate(&self, bag: &FieldBag) -> Self::Record;

    /// Emit every field of `record`, with `null` for unset attributes.
    fn flatten(&self, record: &Self::Record) -> FieldBag;

    /// Inflate the single-instance block stored under `name`.
    ///
    /// Blocks are lists holding at most one object. Returns `None` when the
    /// block is absent, empty, or its first element is not an object.
    fn inflate_block(&self, bag: &FieldBag, name: &str) -> Option<Self::Record> {
        fields::first_block(bag, name).map(|block| self.inflate(block))
    }

    /// Flatten an optional record into a list of zero or one bag.
    fn flatten_block(&self, record: Option<&Self::Record>) -> Value {
        Value::Array(
            record
                .map(|r| Value::Object(self.flatten(r)))
                .into_iter()
                .collect(),
        )
    }
}
