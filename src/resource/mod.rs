//! Resource lifecycle abstraction.
//!
//! A resource definition pairs a field schema with the four lifecycle
//! operations the host drives: create, read, update and delete. Each operation
//! receives the API client handle and the instance's state store explicitly;
//! there is no process-wide client.
//!
//! # Key Components
//!
//! * [`Resource`] - Trait implemented by every managed resource type
//! * [`OidcAppResource`] - OneLogin OIDC apps (`onelogin_oidc_apps`)

pub mod oidc_app;

pub use oidc_app::OidcAppResource;

use crate::api::AppsApi;
use crate::error::{ProviderError, ProviderResult};
use crate::schema::ResourceSchema;
use crate::state::ResourceState;
use std::future::Future;

/// A resource type managed through the apps API.
///
/// Every mutating operation finishes by re-reading the entity from the
/// server, so the state store always reflects what the server persisted
/// rather than what was requested.
pub trait Resource {
    /// Host type name of the resource.
    fn type_name(&self) -> &'static str;

    /// Field schema exposed to the host.
    fn schema(&self) -> ResourceSchema;

    /// Create the remote entity from the declared state and start tracking it.
    fn create<C, S>(
        &self,
        client: &C,
        state: &mut S,
    ) -> impl Future<Output = ProviderResult<()>> + Send
    where
        C: AppsApi + Sync,
        S: ResourceState + Send;

    /// Refresh the state from the remote entity.
    ///
    /// A remote entity that no longer exists untracks the resource and is
    /// not an error.
    fn read<C, S>(&self, client: &C, state: &mut S) -> impl Future<Output = ProviderResult<()>> + Send
    where
        C: AppsApi + Sync,
        S: ResourceState + Send;

    /// Push the declared state to the remote entity.
    fn update<C, S>(
        &self,
        client: &C,
        state: &mut S,
    ) -> impl Future<Output = ProviderResult<()>> + Send
    where
        C: AppsApi + Sync,
        S: ResourceState + Send;

    /// Delete the remote entity.
    fn delete<C, S>(
        &self,
        client: &C,
        state: &mut S,
    ) -> impl Future<Output = ProviderResult<()>> + Send
    where
        C: AppsApi + Sync,
        S: ResourceState + Send;
}

/// Parse a durable identifier into an app id.
pub fn parse_id(id: &str) -> ProviderResult<i32> {
    id.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ProviderError::invalid_id(id))
}

/// Schemas of every resource type, keyed by host type name.
pub fn resource_schemas() -> Vec<(&'static str, ResourceSchema)> {
    let oidc = OidcAppResource;
    vec![(oidc.type_name(), oidc.schema())]
}
