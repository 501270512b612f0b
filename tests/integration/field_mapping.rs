//! Mapper output checked against the state store and the wire model.

use crate::common::fixtures::{bag, server_app};
use onelogin_provider::error::ValidationError;
use onelogin_provider::mapper::{AppMapper, FieldMapper, ParameterMapper};
use onelogin_provider::models::App;
use onelogin_provider::schema::oidc_app_schema;
use onelogin_provider::state::{ResourceData, ResourceState};
use serde_json::{Value, json};

#[test]
fn test_flattened_server_app_fits_schema() {
    let mut state = ResourceData::new(oidc_app_schema());

    for (field, value) in AppMapper.flatten(&server_app(42)) {
        state
            .set(&field, value)
            .unwrap_or_else(|e| panic!("field {field} rejected: {e}"));
    }

    let schema = oidc_app_schema();
    for name in state.values().keys() {
        assert!(schema.field(name).is_some(), "unexpected field {name}");
    }
}

#[test]
fn test_flatten_emits_every_schema_field() {
    let flattened = AppMapper.flatten(&App::default());
    for field in &oidc_app_schema().fields {
        assert!(
            flattened.contains_key(&field.name),
            "missing field {}",
            field.name
        );
    }
}

#[test]
fn test_parameter_collection_order_is_irrelevant() {
    let forward = bag(json!({"parameters": [
        {"param_key_name": "email", "values": "user.email"},
        {"param_key_name": "groups", "values": "member_of"}
    ]}));
    let reversed = bag(json!({"parameters": [
        {"param_key_name": "groups", "values": "member_of"},
        {"param_key_name": "email", "values": "user.email"}
    ]}));

    assert_eq!(
        ParameterMapper.inflate_collection(&forward, "parameters"),
        ParameterMapper.inflate_collection(&reversed, "parameters")
    );
}

#[test]
fn test_inflated_request_body_matches_wire_shape() {
    let app = AppMapper.inflate(&bag(json!({
        "name": "App1",
        "connector_id": 108419,
        "visible": false,
        "provisioning": [{}],
        "configuration": [{"redirect_uri": "https://example.com/cb", "login_url": null}],
        "parameters": [{"param_key_name": "email", "values": "user.email", "skip_if_blank": true}]
    })));

    let body = serde_json::to_value(&app).unwrap();
    assert_eq!(
        body,
        json!({
            "connector_id": 108419,
            "name": "App1",
            "visible": false,
            "provisioning": {},
            "configuration": {"redirect_uri": "https://example.com/cb"},
            "parameters": {
                "email": {"values": "user.email", "skip_if_blank": true}
            }
        })
    );
}

#[test]
fn test_server_response_decodes_and_flattens() {
    let response = json!({
        "id": 42,
        "connector_id": 108419,
        "name": "App1",
        "auth_method": 8,
        "created_at": "2021-06-01T12:00:00Z",
        "sso": {"client_id": "abc", "client_secret": "xyz"},
        "parameters": {"email": {"id": 9, "values": "user.email"}}
    });
    let app: App = serde_json::from_value(response).unwrap();

    let flattened = AppMapper.flatten(&app);
    assert_eq!(flattened["created_at"], json!("2021-06-01T12:00:00+00:00"));
    assert_eq!(flattened["sso"][0]["client_id"], json!("abc"));
    assert_eq!(flattened["parameters"][0]["param_id"], json!(9));
    assert_eq!(flattened["parameters"][0]["label"], Value::Null);
    assert_eq!(flattened["provisioning"], json!([]));
}

#[test]
fn test_duplicate_parameter_keys_are_rejected_before_mapping() {
    let config = bag(json!({
        "name": "App1",
        "connector_id": 108419,
        "parameters": [
            {"param_key_name": "email", "values": "user.email"},
            {"param_key_name": "email", "values": "user.other"}
        ]
    }));

    let err = ResourceData::from_config(oidc_app_schema(), &config).unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateKey {
            field: "parameters".to_string(),
            key: "email".to_string(),
        }
    );
}
