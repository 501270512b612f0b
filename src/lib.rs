//! OneLogin infrastructure-as-code provider library for Rust.
//!
//! Manages OneLogin OIDC applications as declarative resources. A host
//! engine hands each resource instance's declared fields to the provider as
//! a flat bag of named values; the provider turns them into typed API
//! requests, performs the lifecycle operation and writes the server's view
//! back into the host's state store.
//!
//! # Core Components
//!
//! - [`OneLoginProvider`] - Configured provider owning the API client
//! - [`Resource`] - Lifecycle trait; [`OidcAppResource`] manages `onelogin_oidc_apps`
//! - [`AppsApi`] - Trait for OneLogin apps API clients
//! - [`ResourceState`] - Trait for the host-owned state store
//! - [`mapper`] - Field bag inflate/flatten for every app block
//!
//! # Quick Start
//!
//! ```rust
//! use onelogin_provider::{
//!     InMemoryAppsApi, OneLoginProvider, ProviderConfig, Resource, ResourceData, ResourceState,
//! };
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OneLoginProvider::new(
//!     ProviderConfig::new("client-id", "client-secret"),
//!     InMemoryAppsApi::new(),
//! )?;
//!
//! let resource = provider.oidc_apps();
//! let config = json!({
//!     "name": "App1",
//!     "connector_id": 108419,
//!     "parameters": [{"param_key_name": "email", "values": "user.email"}]
//! });
//! let mut state = ResourceData::from_config(resource.schema(), config.as_object().unwrap())?;
//!
//! resource.create(provider.client(), &mut state).await?;
//! assert!(state.is_tracked());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod mapper;
pub mod models;
pub mod provider;
pub mod resource;
pub mod schema;
pub mod state;

// Re-export commonly used types for convenience
pub use api::{ApiError, ApiResponse, AppsApi, InMemoryAppsApi};
pub use config::{ProviderConfig, Region};
pub use error::{ProviderError, ProviderResult};
pub use mapper::{AppMapper, FieldBag, FieldMapper, ParameterMapper};
pub use models::{App, AppConfiguration, AppParameter, AppProvisioning, AppSso};
pub use provider::OneLoginProvider;
pub use resource::{OidcAppResource, Resource};
pub use schema::{FieldSchema, ResourceSchema};
pub use state::{ResourceData, ResourceState};
