//! Property-based tests for field mapping and the resource lifecycle.
//!
//! Uses proptest to generate arbitrary records and parameter sets, checking
//! that flatten followed by inflate is lossless and that a create/read cycle
//! always leaves the state consistent with the server.

use crate::common::fixtures::declared;
use onelogin_provider::api::InMemoryAppsApi;
use onelogin_provider::mapper::{
    FieldBag, FieldMapper, OidcConfigurationMapper, ParameterMapper,
};
use onelogin_provider::models::{AppConfiguration, AppParameter};
use onelogin_provider::resource::{OidcAppResource, Resource};
use onelogin_provider::state::ResourceState;
use proptest::prelude::*;
use serde_json::{Value, json};
use std::collections::BTreeMap;

fn opt_string() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z._ ]{0,12}")
}

prop_compose! {
    fn parameter_strategy()
        (id in prop::option::of(1..i32::MAX),
         label in opt_string(),
         user_attribute_mappings in opt_string(),
         user_attribute_macros in opt_string(),
         attributes_transformations in opt_string(),
         skip_if_blank in prop::option::of(any::<bool>()),
         values in opt_string(),
         default_values in opt_string(),
         provisioned_entitlements in prop::option::of(any::<bool>()),
         safe_entitlements_enabled in prop::option::of(any::<bool>()))
        -> AppParameter {
        AppParameter {
            id,
            label,
            user_attribute_mappings,
            user_attribute_macros,
            attributes_transformations,
            skip_if_blank,
            values,
            default_values,
            provisioned_entitlements,
            safe_entitlements_enabled,
        }
    }
}

prop_compose! {
    fn configuration_strategy()
        (redirect_uri in opt_string(),
         refresh_token_expiration_minutes in prop::option::of(any::<i32>()),
         login_url in opt_string(),
         oidc_application_type in prop::option::of(0..4i32),
         token_endpoint_auth_method in prop::option::of(0..3i32),
         access_token_expiration_minutes in prop::option::of(any::<i32>()))
        -> AppConfiguration {
        AppConfiguration {
            redirect_uri,
            refresh_token_expiration_minutes,
            login_url,
            oidc_application_type,
            token_endpoint_auth_method,
            access_token_expiration_minutes,
        }
    }
}

fn parameter_set_strategy() -> impl Strategy<Value = BTreeMap<String, AppParameter>> {
    prop::collection::btree_map("[a-z_]{1,10}", parameter_strategy(), 0..6)
}

fn as_bag(params: &BTreeMap<String, AppParameter>) -> FieldBag {
    let items = ParameterMapper
        .flatten_collection(params)
        .into_iter()
        .map(Value::Object)
        .collect();
    let mut bag = FieldBag::new();
    bag.insert("parameters".to_string(), Value::Array(items));
    bag
}

const STRING_FIELDS: &[&str] = &[
    "label",
    "user_attribute_mappings",
    "user_attribute_macros",
    "attributes_transformations",
    "values",
    "default_values",
];

const BOOL_FIELDS: &[&str] = &[
    "skip_if_blank",
    "provisioned_entitlements",
    "safe_entitlements_enabled",
];

/// A parameter bag holding an arbitrary subset of the recognized fields.
fn parameter_bag_strategy() -> impl Strategy<Value = FieldBag> {
    (
        prop::collection::vec(opt_string(), STRING_FIELDS.len()),
        prop::collection::vec(prop::option::of(any::<bool>()), BOOL_FIELDS.len()),
    )
        .prop_map(|(strings, bools)| -> FieldBag {
            let strings = STRING_FIELDS
                .iter()
                .zip(strings)
                .filter_map(|(name, v)| v.map(|v| (name.to_string(), json!(v))));
            let bools = BOOL_FIELDS
                .iter()
                .zip(bools)
                .filter_map(|(name, v)| v.map(|v| (name.to_string(), json!(v))));
            strings.chain(bools).collect()
        })
}

proptest! {
    #[test]
    fn test_parameter_inflate_flatten_restores_present_fields(bag in parameter_bag_strategy()) {
        let flattened = ParameterMapper.flatten(&ParameterMapper.inflate(&bag));
        for name in STRING_FIELDS.iter().chain(BOOL_FIELDS) {
            let expected = bag.get(*name).cloned().unwrap_or(Value::Null);
            prop_assert_eq!(&flattened[*name], &expected);
        }
    }

    #[test]
    fn test_parameter_flatten_inflate_is_lossless(params in parameter_set_strategy()) {
        let restored = ParameterMapper.inflate_collection(&as_bag(&params), "parameters");
        prop_assert_eq!(restored, Some(params));
    }

    #[test]
    fn test_parameter_keys_are_preserved(params in parameter_set_strategy()) {
        let flattened = ParameterMapper.flatten_collection(&params);
        prop_assert_eq!(flattened.len(), params.len());
        for (bag, key) in flattened.iter().zip(params.keys()) {
            prop_assert_eq!(&bag["param_key_name"], &json!(key));
            prop_assert_eq!(bag.len(), 11);
        }
    }

    #[test]
    fn test_configuration_flatten_inflate_is_lossless(config in configuration_strategy()) {
        let flattened = OidcConfigurationMapper.flatten(&config);
        prop_assert_eq!(OidcConfigurationMapper.inflate(&flattened), config);
    }

    #[test]
    fn test_create_always_tracks_server_parameters(params in parameter_set_strategy()) {
        tokio_test::block_on(async {
            let api = InMemoryAppsApi::new();
            // Ids are server-assigned and cannot be declared
            let declared_params: BTreeMap<String, AppParameter> = params
                .iter()
                .map(|(key, param)| (key.clone(), AppParameter { id: None, ..param.clone() }))
                .collect();
            let mut config = as_bag(&declared_params);
            config.insert("name".to_string(), json!("App1"));
            config.insert("connector_id".to_string(), json!(108419));
            let mut state = declared(config);

            OidcAppResource.create(&api, &mut state).await.unwrap();

            let tracked = state.get("parameters").unwrap();
            let tracked = tracked.as_array().unwrap();
            assert_eq!(tracked.len(), params.len());
            for entry in tracked {
                assert!(entry["param_id"].is_i64());
                assert!(params.contains_key(entry["param_key_name"].as_str().unwrap()));
            }
            assert_eq!(api.stats().await.parameter_count, params.len());
        });
    }
}
