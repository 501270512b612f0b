//! Mapping for a whole OIDC app.
//!
//! Top-level fields are mapped directly; blocks are delegated to the
//! parameter, provisioning, configuration and SSO mappers.

use super::fields::{bool_field, int_field, optional, string_field};
use super::{
    FieldBag, FieldMapper, OidcConfigurationMapper, OidcSsoMapper, ParameterMapper,
    ProvisioningMapper,
};
use crate::models::App;
use serde_json::Value;

/// Fields read from the configuration-state store when building a request.
///
/// Server-computed fields and the server-issued `sso` block are never sent.
pub const DESIRED_FIELDS: &[&str] = &[
    "name",
    "description",
    "notes",
    "connector_id",
    "visible",
    "allow_assumed_signin",
    "parameters",
    "provisioning",
    "configuration",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct AppMapper;

impl FieldMapper for AppMapper {
    type Record = App;

    fn inflate(&self, bag: &FieldBag) -> App {
        App {
            name: string_field(bag, "name"),
            description: string_field(bag, "description"),
            notes: string_field(bag, "notes"),
            connector_id: int_field(bag, "connector_id"),
            visible: bool_field(bag, "visible"),
            allow_assumed_signin: bool_field(bag, "allow_assumed_signin"),
            parameters: ParameterMapper.inflate_collection(bag, "parameters"),
            provisioning: ProvisioningMapper.inflate_block(bag, "provisioning"),
            configuration: OidcConfigurationMapper.inflate_block(bag, "configuration"),
            sso: OidcSsoMapper.inflate_block(bag, "sso"),
            ..Default::default()
        }
    }

    fn flatten(&self, app: &App) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert("name".into(), optional(app.name.clone()));
        bag.insert("visible".into(), optional(app.visible));
        bag.insert("description".into(), optional(app.description.clone()));
        bag.insert("notes".into(), optional(app.notes.clone()));
        bag.insert("icon_url".into(), optional(app.icon_url.clone()));
        bag.insert("auth_method".into(), optional(app.auth_method));
        bag.insert("policy_id".into(), optional(app.policy_id));
        bag.insert(
            "allow_assumed_signin".into(),
            optional(app.allow_assumed_signin),
        );
        bag.insert("tab_id".into(), optional(app.tab_id));
        bag.insert("connector_id".into(), optional(app.connector_id));
        bag.insert(
            "created_at".into(),
            optional(app.created_at.map(|t| t.to_rfc3339())),
        );
        bag.insert(
            "updated_at".into(),
            optional(app.updated_at.map(|t| t.to_rfc3339())),
        );

        let parameters = app
            .parameters
            .as_ref()
            .map(|params| ParameterMapper.flatten_collection(params))
            .unwrap_or_default();
        bag.insert(
            "parameters".into(),
            Value::Array(parameters.into_iter().map(Value::Object).collect()),
        );
        bag.insert(
            "provisioning".into(),
            ProvisioningMapper.flatten_block(app.provisioning.as_ref()),
        );
        bag.insert(
            "configuration".into(),
            OidcConfigurationMapper.flatten_block(app.configuration.as_ref()),
        );
        bag.insert("sso".into(), OidcSsoMapper.flatten_block(app.sso.as_ref()));
        bag
    }
}
