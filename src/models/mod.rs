//! Wire models for the OneLogin apps API.
//!
//! Every attribute is an `Option`: `None` means "not set" and is omitted from
//! request bodies, while `Some` of an empty string, `false` or `0` is sent as
//! given. The API treats the two differently on partial updates.

mod app;
mod configuration;
mod parameter;
mod provisioning;
mod sso;

pub use app::App;
pub use configuration::AppConfiguration;
pub use parameter::AppParameter;
pub use provisioning::AppProvisioning;
pub use sso::AppSso;
