//! OneLogin OIDC app resource.
//!
//! Builds an [`App`] from the declared fields through [`AppMapper`], sends it
//! to the apps API and writes the server's canonical view back to the state
//! store.
//!
//! # Error Policy
//!
//! * API errors from create, read and update are returned unchanged.
//! * An app that is gone on read or update untracks the resource; the host
//!   then plans a fresh create.
//! * Delete failures are logged and otherwise swallowed. The id stays set, so
//!   the next reconciliation retries the delete.

use super::{Resource, parse_id};
use crate::api::AppsApi;
use crate::error::{ProviderError, ProviderResult};
use crate::mapper::app::DESIRED_FIELDS;
use crate::mapper::{AppMapper, FieldBag, FieldMapper};
use crate::models::App;
use crate::schema::{OIDC_APP_TYPE_NAME, ResourceSchema, oidc_app_schema};
use crate::state::ResourceState;
use log::{debug, error, info, trace, warn};

/// The `onelogin_oidc_apps` resource.
#[derive(Debug, Default, Clone, Copy)]
pub struct OidcAppResource;

impl OidcAppResource {
    pub fn new() -> Self {
        Self
    }

    /// Build the request body from the declared fields in `state`.
    pub fn desired_app<S: ResourceState>(&self, state: &S) -> App {
        let bag: FieldBag = DESIRED_FIELDS
            .iter()
            .filter_map(|field| Some((field.to_string(), state.get(field)?)))
            .collect();
        AppMapper.inflate(&bag)
    }

    /// Write every field of `app` into `state`.
    ///
    /// All fields are checked before the first write, so a rejected field
    /// leaves the state as it was.
    fn write_state<S: ResourceState>(&self, state: &mut S, app: &App) -> ProviderResult<()> {
        let bag = AppMapper.flatten(app);
        for (field, value) in &bag {
            state.check(field, value)?;
        }
        for (field, value) in bag {
            state.set(&field, value)?;
        }
        Ok(())
    }
}

impl Resource for OidcAppResource {
    fn type_name(&self) -> &'static str {
        OIDC_APP_TYPE_NAME
    }

    fn schema(&self) -> ResourceSchema {
        oidc_app_schema()
    }

    async fn create<C, S>(&self, client: &C, state: &mut S) -> ProviderResult<()>
    where
        C: AppsApi + Sync,
        S: ResourceState + Send,
    {
        let app = self.desired_app(state);
        info!(
            "Creating OIDC app '{}'",
            app.name.as_deref().unwrap_or_default()
        );
        trace!(
            "Create request: {}",
            serde_json::to_string(&app).unwrap_or_else(|_| "invalid json".to_string())
        );

        let response = client.create_app(&app).await.map_err(|e| {
            error!("There was a problem creating the app: {}", e);
            ProviderError::api(e)
        })?;

        let id = response.body.id.ok_or_else(|| {
            error!("Create response did not include an app id");
            ProviderError::missing_id("create")
        })?;
        info!("Created OIDC app with id {}", id);
        debug!("Create response status: {}", response.status);

        state.set_id(id.to_string());
        self.read(client, state).await
    }

    async fn read<C, S>(&self, client: &C, state: &mut S) -> ProviderResult<()>
    where
        C: AppsApi + Sync,
        S: ResourceState + Send,
    {
        if !state.is_tracked() {
            debug!("Skipping read of untracked OIDC app");
            return Ok(());
        }
        let id = parse_id(state.id())?;

        let response = client.get_app_by_id(id).await.map_err(|e| {
            error!("There was a problem reading app {}: {}", id, e);
            ProviderError::api(e)
        })?;

        let Some(app) = response.body else {
            warn!("OIDC app {} no longer exists, removing it from state", id);
            state.set_id(String::new());
            return Ok(());
        };
        info!("Reading OIDC app with id {}", app.id.unwrap_or(id));
        debug!("Read response status: {}", response.status);

        self.write_state(state, &app)
    }

    async fn update<C, S>(&self, client: &C, state: &mut S) -> ProviderResult<()>
    where
        C: AppsApi + Sync,
        S: ResourceState + Send,
    {
        let id = parse_id(state.id())?;
        let app = self.desired_app(state);
        info!("Updating OIDC app {}", id);
        trace!(
            "Update request: {}",
            serde_json::to_string(&app).unwrap_or_else(|_| "invalid json".to_string())
        );

        let response = client.update_app_by_id(id, &app).await.map_err(|e| {
            error!("There was a problem updating app {}: {}", id, e);
            ProviderError::api(e)
        })?;

        let Some(updated) = response.body else {
            warn!("OIDC app {} was deleted remotely, removing it from state", id);
            state.set_id(String::new());
            return Ok(());
        };
        let updated_id = updated.id.unwrap_or(id);
        info!("Updated OIDC app with id {}", updated_id);
        debug!("Update response status: {}", response.status);

        state.set_id(updated_id.to_string());
        self.read(client, state).await
    }

    async fn delete<C, S>(&self, client: &C, state: &mut S) -> ProviderResult<()>
    where
        C: AppsApi + Sync,
        S: ResourceState + Send,
    {
        let id = match parse_id(state.id()) {
            Ok(id) => id,
            Err(e) => {
                error!("There was a problem deleting the OIDC app: {}", e);
                return Ok(());
            }
        };

        match client.delete_app(id).await {
            Ok(response) => {
                info!("Deleted OIDC app with id {}", id);
                debug!("Delete response status: {}", response.status);
                state.set_id(String::new());
            }
            Err(e) => {
                error!("There was a problem deleting OIDC app {}: {}", id, e);
            }
        }
        Ok(())
    }
}
