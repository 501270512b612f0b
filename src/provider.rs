//! Provider entry point.
//!
//! [`OneLoginProvider`] owns the validated configuration and the apps API
//! client, and hands both to the resource controllers the host drives.

use crate::api::AppsApi;
use crate::config::ProviderConfig;
use crate::error::ConfigResult;
use crate::resource::{OidcAppResource, resource_schemas};
use crate::schema::ResourceSchema;
use log::info;

/// Configured provider instance.
#[derive(Debug, Clone)]
pub struct OneLoginProvider<C: AppsApi> {
    config: ProviderConfig,
    client: C,
}

impl<C: AppsApi> OneLoginProvider<C> {
    /// Create a provider after validating its configuration.
    pub fn new(config: ProviderConfig, client: C) -> ConfigResult<Self> {
        config.validate()?;
        info!("Configured OneLogin provider for {}", config.api_url());
        Ok(Self { config, client })
    }

    /// The apps API client passed to every resource operation.
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Controller for `onelogin_oidc_apps`.
    pub fn oidc_apps(&self) -> OidcAppResource {
        OidcAppResource::new()
    }

    /// Schema of the provider block.
    pub fn provider_schema(&self) -> ResourceSchema {
        ProviderConfig::schema()
    }

    /// Schemas of every resource type this provider manages.
    pub fn resource_schemas(&self) -> Vec<(&'static str, ResourceSchema)> {
        resource_schemas()
    }
}
