//! In-memory emulation of the OneLogin apps API.
//!
//! This module provides a thread-safe implementation of [`AppsApi`] that keeps
//! apps in a `HashMap` behind a tokio `RwLock`. It reproduces the server
//! behaviour the resource controllers depend on:
//!
//! * Sequential id assignment for apps and parameters
//! * Server-side defaults (visibility, auth method, token lifetimes, ...)
//! * Generated OIDC client credentials
//! * Partial updates: unset attributes keep their stored value
//! * Parameter reconciliation: the update's key set replaces the stored one
//! * `None` bodies for unknown ids on get/update, a 404 error on delete
//!
//! # Example Usage
//!
//! ```rust
//! use onelogin_provider::api::{AppsApi, InMemoryAppsApi};
//! use onelogin_provider::models::App;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = InMemoryAppsApi::new();
//! let app = App {
//!     name: Some("App1".to_string()),
//!     connector_id: Some(108419),
//!     ..Default::default()
//! };
//!
//! let created = api.create_app(&app).await?.body;
//! let id = created.id.unwrap();
//! assert!(api.get_app_by_id(id).await?.body.is_some());
//!
//! api.delete_app(id).await?;
//! assert!(api.get_app_by_id(id).await?.body.is_none());
//! # Ok(())
//! # }
//! ```

use super::{ApiError, ApiResponse, AppsApi};
use crate::models::{App, AppConfiguration, AppParameter, AppProvisioning, AppSso};
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Auth method code OneLogin uses for OpenID Connect apps.
pub const OIDC_AUTH_METHOD: i32 = 8;

const DEFAULT_ACCESS_TOKEN_MINUTES: i32 = 60;
const DEFAULT_REFRESH_TOKEN_MINUTES: i32 = 43200;

#[derive(Debug, Default)]
struct ApiState {
    apps: HashMap<i32, App>,
    last_app_id: i32,
    last_parameter_id: i32,
}

impl ApiState {
    fn next_app_id(&mut self) -> i32 {
        self.last_app_id += 1;
        self.last_app_id
    }

    fn next_parameter_id(&mut self) -> i32 {
        self.last_parameter_id += 1;
        self.last_parameter_id
    }
}

/// Thread-safe in-memory apps API.
///
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAppsApi {
    state: Arc<RwLock<ApiState>>,
}

impl InMemoryAppsApi {
    /// Create a new empty API instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get statistics for debugging and assertions.
    pub async fn stats(&self) -> InMemoryApiStats {
        let state = self.state.read().await;
        InMemoryApiStats {
            app_count: state.apps.len(),
            parameter_count: state
                .apps
                .values()
                .filter_map(|app| app.parameters.as_ref())
                .map(BTreeMap::len)
                .sum(),
        }
    }

    /// Remove every app, as if deleted outside the provider.
    pub async fn clear(&self) {
        self.state.write().await.apps.clear();
    }

    /// Remove one app behind the provider's back.
    pub async fn remove_externally(&self, id: i32) -> bool {
        self.state.write().await.apps.remove(&id).is_some()
    }
}

fn unprocessable(message: &str) -> ApiError {
    ApiError::Status {
        status: 422,
        message: message.to_string(),
    }
}

/// Copy `source` over `target` when it is set.
fn overwrite<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if source.is_some() {
        target.clone_from(source);
    }
}

fn parameter_defaults(param: &mut AppParameter) {
    param.skip_if_blank.get_or_insert(false);
    param.provisioned_entitlements.get_or_insert(false);
    param.safe_entitlements_enabled.get_or_insert(false);
}

fn merge_parameter(target: &mut AppParameter, source: &AppParameter) {
    overwrite(&mut target.label, &source.label);
    overwrite(&mut target.user_attribute_mappings, &source.user_attribute_mappings);
    overwrite(&mut target.user_attribute_macros, &source.user_attribute_macros);
    overwrite(
        &mut target.attributes_transformations,
        &source.attributes_transformations,
    );
    overwrite(&mut target.skip_if_blank, &source.skip_if_blank);
    overwrite(&mut target.values, &source.values);
    overwrite(&mut target.default_values, &source.default_values);
    overwrite(
        &mut target.provisioned_entitlements,
        &source.provisioned_entitlements,
    );
    overwrite(
        &mut target.safe_entitlements_enabled,
        &source.safe_entitlements_enabled,
    );
}

fn configuration_defaults(config: &mut AppConfiguration) {
    config.oidc_application_type.get_or_insert(0);
    config.token_endpoint_auth_method.get_or_insert(0);
    config
        .access_token_expiration_minutes
        .get_or_insert(DEFAULT_ACCESS_TOKEN_MINUTES);
    config
        .refresh_token_expiration_minutes
        .get_or_insert(DEFAULT_REFRESH_TOKEN_MINUTES);
}

fn merge_configuration(target: &mut AppConfiguration, source: &AppConfiguration) {
    overwrite(&mut target.redirect_uri, &source.redirect_uri);
    overwrite(
        &mut target.refresh_token_expiration_minutes,
        &source.refresh_token_expiration_minutes,
    );
    overwrite(&mut target.login_url, &source.login_url);
    overwrite(&mut target.oidc_application_type, &source.oidc_application_type);
    overwrite(
        &mut target.token_endpoint_auth_method,
        &source.token_endpoint_auth_method,
    );
    overwrite(
        &mut target.access_token_expiration_minutes,
        &source.access_token_expiration_minutes,
    );
}

/// Reconcile stored parameters with the desired set.
///
/// Retained keys keep their id and merge attributes; new keys get a fresh id;
/// keys absent from `desired` are dropped.
fn reconcile_parameters(
    state: &mut ApiState,
    current: Option<BTreeMap<String, AppParameter>>,
    desired: &BTreeMap<String, AppParameter>,
) -> BTreeMap<String, AppParameter> {
    let mut current = current.unwrap_or_default();
    desired
        .iter()
        .map(|(key, wanted)| {
            let param = match current.remove(key) {
                Some(mut existing) => {
                    merge_parameter(&mut existing, wanted);
                    existing
                }
                None => {
                    let mut fresh = wanted.clone();
                    fresh.id = Some(state.next_parameter_id());
                    parameter_defaults(&mut fresh);
                    fresh
                }
            };
            (key.clone(), param)
        })
        .collect()
}

fn generate_sso() -> AppSso {
    AppSso {
        client_id: Some(Uuid::new_v4().to_string()),
        client_secret: Some(format!(
            "{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        )),
    }
}

impl AppsApi for InMemoryAppsApi {
    type Error = ApiError;

    async fn create_app(&self, app: &App) -> Result<ApiResponse<App>, Self::Error> {
        let name = app.name.as_deref().unwrap_or_default();
        if name.is_empty() {
            return Err(unprocessable("name is required"));
        }
        let connector_id = app
            .connector_id
            .ok_or_else(|| unprocessable("connector_id is required"))?;

        let mut state = self.state.write().await;
        let now = Utc::now();
        let mut created = app.clone();

        created.id = Some(state.next_app_id());
        created.created_at = Some(now);
        created.updated_at = Some(now);
        created.visible.get_or_insert(true);
        created.allow_assumed_signin.get_or_insert(false);
        created.auth_method = Some(OIDC_AUTH_METHOD);
        created.icon_url = Some(format!(
            "https://cdn.onelogin.com/images/icons/square/{connector_id}/original.png"
        ));
        created.parameters = Some(reconcile_parameters(
            &mut state,
            None,
            app.parameters.as_ref().unwrap_or(&BTreeMap::new()),
        ));
        created
            .provisioning
            .get_or_insert_with(AppProvisioning::default)
            .enabled
            .get_or_insert(false);
        configuration_defaults(
            created
                .configuration
                .get_or_insert_with(AppConfiguration::default),
        );
        created.sso = Some(generate_sso());

        let id = created.id.unwrap_or_default();
        state.apps.insert(id, created.clone());
        Ok(ApiResponse::new(201, created))
    }

    async fn get_app_by_id(&self, id: i32) -> Result<ApiResponse<Option<App>>, Self::Error> {
        let state = self.state.read().await;
        Ok(match state.apps.get(&id) {
            Some(app) => ApiResponse::ok(Some(app.clone())),
            None => ApiResponse::new(404, None),
        })
    }

    async fn update_app_by_id(
        &self,
        id: i32,
        app: &App,
    ) -> Result<ApiResponse<Option<App>>, Self::Error> {
        if app.name.as_deref() == Some("") {
            return Err(unprocessable("name can't be blank"));
        }

        let mut state = self.state.write().await;
        let Some(mut current) = state.apps.remove(&id) else {
            return Ok(ApiResponse::new(404, None));
        };

        overwrite(&mut current.connector_id, &app.connector_id);
        overwrite(&mut current.name, &app.name);
        overwrite(&mut current.description, &app.description);
        overwrite(&mut current.notes, &app.notes);
        overwrite(&mut current.visible, &app.visible);
        overwrite(&mut current.allow_assumed_signin, &app.allow_assumed_signin);
        overwrite(&mut current.policy_id, &app.policy_id);

        if let Some(provisioning) = &app.provisioning {
            let stored = current
                .provisioning
                .get_or_insert_with(AppProvisioning::default);
            overwrite(&mut stored.enabled, &provisioning.enabled);
        }
        if let Some(configuration) = &app.configuration {
            let stored = current
                .configuration
                .get_or_insert_with(AppConfiguration::default);
            merge_configuration(stored, configuration);
        }
        if let Some(desired) = &app.parameters {
            let existing = current.parameters.take();
            current.parameters = Some(reconcile_parameters(&mut state, existing, desired));
        }
        current.updated_at = Some(Utc::now());

        state.apps.insert(id, current.clone());
        Ok(ApiResponse::ok(Some(current)))
    }

    async fn delete_app(&self, id: i32) -> Result<ApiResponse<()>, Self::Error> {
        let mut state = self.state.write().await;
        match state.apps.remove(&id) {
            Some(_) => Ok(ApiResponse::new(204, ())),
            None => Err(ApiError::NotFound { id }),
        }
    }
}

/// Statistics about the in-memory API state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryApiStats {
    /// Number of stored apps
    pub app_count: usize,
    /// Total number of parameters across all apps
    pub parameter_count: usize,
}

impl InMemoryApiStats {
    /// Check if the API holds no apps.
    pub fn is_empty(&self) -> bool {
        self.app_count == 0
    }
}
