//! Apps API client abstraction.
//!
//! HTTP transport, authentication and retries belong to the client; the
//! resource controllers only see the [`AppsApi`] trait. Ids are the
//! server-assigned positive integers of OneLogin apps.
//!
//! # Available Clients
//!
//! * [`InMemoryAppsApi`] - In-process emulation of the OneLogin apps endpoints,
//!   for tests and local experimentation

pub mod error;
pub mod in_memory;

pub use error::ApiError;
pub use in_memory::{InMemoryApiStats, InMemoryAppsApi};

use crate::models::App;
use std::future::Future;

/// A decoded API response together with its transport status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Decoded body
    pub body: T,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, body: T) -> Self {
        Self { status, body }
    }

    pub fn ok(body: T) -> Self {
        Self::new(200, body)
    }
}

/// CRUD operations on OneLogin apps.
///
/// A missing app is reported as `Ok` with a `None` body by
/// [`get_app_by_id`](AppsApi::get_app_by_id) and
/// [`update_app_by_id`](AppsApi::update_app_by_id); callers treat that as
/// external deletion rather than failure.
pub trait AppsApi {
    /// Error type returned by all client operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create an app. The returned app carries the server-assigned id.
    fn create_app(
        &self,
        app: &App,
    ) -> impl Future<Output = Result<ApiResponse<App>, Self::Error>> + Send;

    /// Fetch an app by id.
    fn get_app_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<ApiResponse<Option<App>>, Self::Error>> + Send;

    /// Update an app by id.
    ///
    /// Attributes left unset in `app` keep their current server value.
    fn update_app_by_id(
        &self,
        id: i32,
        app: &App,
    ) -> impl Future<Output = Result<ApiResponse<Option<App>>, Self::Error>> + Send;

    /// Delete an app by id.
    fn delete_app(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<ApiResponse<()>, Self::Error>> + Send;
}
