//! Lifecycle tests for the `onelogin_oidc_apps` resource.
//!
//! Request-shape assertions run against [`ScriptedAppsApi`]; end-to-end
//! scenarios run against the in-memory API.

use crate::common::fixtures::{app1_config, declared, server_app, tracked};
use crate::common::{ApiCall, ScriptedAppsApi, init_logging};
use onelogin_provider::api::{ApiError, AppsApi, InMemoryAppsApi};
use onelogin_provider::error::ProviderError;
use onelogin_provider::resource::{OidcAppResource, Resource};
use onelogin_provider::schema::oidc_app_schema;
use onelogin_provider::state::{ResourceData, ResourceState};
use serde_json::json;

fn transport_error() -> ApiError {
    ApiError::Transport {
        message: "connection reset by peer".to_string(),
    }
}

#[tokio::test]
async fn test_create_sends_declared_fields_and_reads_back() {
    init_logging();
    let api = ScriptedAppsApi::new(42);
    let mut state = ResourceData::new(oidc_app_schema());
    state.set("name", json!("App1")).unwrap();
    state.set("visible", json!(true)).unwrap();
    state
        .set(
            "parameters",
            json!([{"param_key_name": "email", "values": "user.email"}]),
        )
        .unwrap();

    OidcAppResource.create(&api, &mut state).await.unwrap();

    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    let ApiCall::Create(request) = &calls[0] else {
        panic!("expected a create call, got {:?}", calls[0]);
    };
    assert_eq!(request.name.as_deref(), Some("App1"));
    assert_eq!(request.visible, Some(true));
    assert_eq!(request.connector_id, None);
    let params = request.parameters.as_ref().unwrap();
    assert_eq!(params["email"].values.as_deref(), Some("user.email"));
    assert_eq!(calls[1], ApiCall::Get(42));

    assert_eq!(state.id(), "42");
    assert_eq!(state.get("name"), Some(json!("App1")));
    assert_eq!(
        state.get("parameters").unwrap()[0]["param_key_name"],
        json!("email")
    );
}

#[tokio::test]
async fn test_create_request_omits_undeclared_blocks() {
    let api = ScriptedAppsApi::new(7);
    let mut state = declared(app1_config());

    OidcAppResource.create(&api, &mut state).await.unwrap();

    let ApiCall::Create(request) = &api.calls()[0] else {
        panic!("expected a create call");
    };
    let body = serde_json::to_value(request).unwrap();
    assert!(body.get("provisioning").is_none());
    assert!(body.get("configuration").is_none());
    assert!(body.get("sso").is_none());
    assert!(body.get("description").is_none());
    assert_eq!(body["allow_assumed_signin"], json!(false));
}

#[tokio::test]
async fn test_create_transport_error_leaves_resource_untracked() {
    init_logging();
    let api = ScriptedAppsApi::new(42).failing(transport_error());
    let mut state = declared(app1_config());

    let err = OidcAppResource.create(&api, &mut state).await.unwrap_err();

    assert!(matches!(err, ProviderError::Api(_)));
    assert!(err.to_string().contains("connection reset by peer"));
    assert!(!state.is_tracked());
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn test_create_response_without_id_is_error() {
    let api = ScriptedAppsApi::without_id();
    let mut state = declared(app1_config());

    let err = OidcAppResource.create(&api, &mut state).await.unwrap_err();
    assert!(matches!(err, ProviderError::MissingId { .. }));
    assert!(!state.is_tracked());
}

#[tokio::test]
async fn test_read_of_deleted_app_untracks() {
    init_logging();
    let api = ScriptedAppsApi::new(42);
    let mut state = tracked("42");

    OidcAppResource.read(&api, &mut state).await.unwrap();

    assert_eq!(state.id(), "");
    assert_eq!(api.calls(), vec![ApiCall::Get(42)]);
}

#[tokio::test]
async fn test_read_replaces_state_with_server_view() {
    let api = ScriptedAppsApi::new(42).with_stored(server_app(42));
    let mut state = tracked("42");
    state.set("notes", json!("local edit")).unwrap();

    OidcAppResource.read(&api, &mut state).await.unwrap();

    assert_eq!(state.id(), "42");
    assert_eq!(state.get("notes"), Some(json!("")));
    assert_eq!(state.get("description"), Some(json!("Staff portal")));
    assert_eq!(state.get("created_at"), Some(json!("2021-06-01T12:00:00+00:00")));
    assert_eq!(
        state.get("configuration").unwrap()[0]["redirect_uri"],
        json!("https://portal.example.com/callback")
    );
    assert_eq!(state.get("sso").unwrap()[0]["client_secret"], json!("s3cr3t"));
    assert_eq!(state.get("parameters").unwrap()[0]["param_id"], json!(501));
}

#[tokio::test]
async fn test_read_api_error_is_returned() {
    let api = ScriptedAppsApi::new(42).failing(transport_error());
    let mut state = tracked("42");

    let err = OidcAppResource.read(&api, &mut state).await.unwrap_err();
    assert!(matches!(err, ProviderError::Api(_)));
    assert_eq!(state.id(), "42");
}

#[tokio::test]
async fn test_update_of_gone_app_untracks_without_read() {
    init_logging();
    let api = ScriptedAppsApi::new(42);
    let mut state = tracked("42");

    OidcAppResource.update(&api, &mut state).await.unwrap();

    assert_eq!(state.id(), "");
    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], ApiCall::Update(42, _)));
}

#[tokio::test]
async fn test_update_sends_declared_fields_then_reads() {
    let api = ScriptedAppsApi::new(42).with_stored(server_app(42));
    let mut state = tracked("42");
    state.set("description", json!("")).unwrap();

    OidcAppResource.update(&api, &mut state).await.unwrap();

    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    let ApiCall::Update(42, request) = &calls[0] else {
        panic!("expected an update of app 42, got {:?}", calls[0]);
    };
    assert_eq!(request.description.as_deref(), Some(""));
    assert_eq!(request.id, None);
    assert_eq!(request.sso, None);
    assert_eq!(calls[1], ApiCall::Get(42));
    assert_eq!(state.get("description"), Some(json!("")));
}

#[tokio::test]
async fn test_update_invalid_id_is_error() {
    let api = ScriptedAppsApi::new(42);
    let mut state = tracked("forty-two");

    let err = OidcAppResource.update(&api, &mut state).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidId { .. }));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_delete_failure_keeps_id() {
    init_logging();
    let api = ScriptedAppsApi::new(42)
        .with_stored(server_app(42))
        .failing_delete(ApiError::Status {
            status: 500,
            message: "internal error".to_string(),
        });
    let mut state = tracked("42");

    OidcAppResource.delete(&api, &mut state).await.unwrap();

    assert_eq!(state.id(), "42");
    assert_eq!(api.calls(), vec![ApiCall::Delete(42)]);
    assert!(api.stored().is_some());
}

#[tokio::test]
async fn test_delete_with_invalid_id_makes_no_call() {
    let api = ScriptedAppsApi::new(42);
    let mut state = tracked("abc");

    OidcAppResource.delete(&api, &mut state).await.unwrap();

    assert_eq!(state.id(), "abc");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_full_lifecycle_against_in_memory_api() {
    init_logging();
    let api = InMemoryAppsApi::new();
    let resource = OidcAppResource::new();
    let mut state = declared(app1_config());

    resource.create(&api, &mut state).await.unwrap();
    let id: i32 = state.id().parse().unwrap();
    let email_id = state.get("parameters").unwrap()[0]["param_id"].clone();
    assert!(email_id.is_i64());

    // Keep email, add department
    state
        .set(
            "parameters",
            json!([
                {"param_key_name": "email", "values": "user.email"},
                {"param_key_name": "department", "values": "user.department"}
            ]),
        )
        .unwrap();
    resource.update(&api, &mut state).await.unwrap();

    let stored = api.get_app_by_id(id).await.unwrap().body.unwrap();
    let params = stored.parameters.unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(json!(params["email"].id), email_id);
    assert_eq!(
        params["department"].values.as_deref(),
        Some("user.department")
    );
    assert_eq!(api.stats().await.parameter_count, 2);

    // Deleted behind the provider's back
    assert!(api.remove_externally(id).await);
    resource.read(&api, &mut state).await.unwrap();
    assert!(!state.is_tracked());

    // Recreated on the next apply
    resource.create(&api, &mut state).await.unwrap();
    assert!(state.is_tracked());
    assert_ne!(state.id(), id.to_string());

    resource.delete(&api, &mut state).await.unwrap();
    assert!(!state.is_tracked());
    assert!(api.stats().await.is_empty());
}

#[tokio::test]
async fn test_empty_parameter_set_clears_server_parameters() {
    let api = InMemoryAppsApi::new();
    let mut state = declared(app1_config());
    OidcAppResource.create(&api, &mut state).await.unwrap();

    state.set("parameters", json!([])).unwrap();
    OidcAppResource.update(&api, &mut state).await.unwrap();

    assert_eq!(api.stats().await.parameter_count, 0);
    assert_eq!(state.get("parameters"), Some(json!([])));
}

#[tokio::test]
async fn test_server_rejection_on_create_is_returned() {
    let api = InMemoryAppsApi::new();
    let mut state = ResourceData::new(oidc_app_schema());
    state.set("name", json!("App1")).unwrap();

    let err = OidcAppResource.create(&api, &mut state).await.unwrap_err();
    assert!(err.to_string().contains("connector_id"));
    assert!(!state.is_tracked());
}
