//! Field schemas for OneLogin apps and their sub-resources.
//!
//! The base [`app_schema`] covers the fields shared by every app type. Protocol
//! specific resources attach their own `configuration` and `sso` blocks, as
//! [`oidc_app_schema`] does for OIDC apps.

use super::types::{FieldSchema, ResourceSchema};

/// Host type name of the OIDC app resource.
pub const OIDC_APP_TYPE_NAME: &str = "onelogin_oidc_apps";

/// Fields shared by all OneLogin app resources.
pub fn app_schema() -> ResourceSchema {
    ResourceSchema::new(
        "onelogin_apps",
        "Application registered in OneLogin",
        vec![
            FieldSchema::string("name").required(),
            FieldSchema::bool("visible").optional().with_default(true),
            FieldSchema::string("description").optional(),
            FieldSchema::string("notes").optional(),
            FieldSchema::string("icon_url").computed(),
            FieldSchema::int("auth_method").computed(),
            FieldSchema::int("policy_id").computed(),
            FieldSchema::bool("allow_assumed_signin")
                .optional()
                .with_default(false),
            FieldSchema::int("tab_id").computed(),
            FieldSchema::int("connector_id").required(),
            FieldSchema::string("created_at").computed(),
            FieldSchema::string("updated_at").computed(),
            FieldSchema::set("parameters", parameter_schema())
                .keyed_by("param_key_name")
                .optional()
                .computed(),
            FieldSchema::list("provisioning", provisioning_schema())
                .optional()
                .computed()
                .max_items(1),
        ],
    )
}

/// OIDC app resource: the base app plus OIDC configuration and SSO blocks.
pub fn oidc_app_schema() -> ResourceSchema {
    let mut schema = app_schema()
        .with_field(
            FieldSchema::list("configuration", oidc_configuration_schema())
                .optional()
                .computed()
                .max_items(1),
        )
        .with_field(
            FieldSchema::list("sso", oidc_sso_schema())
                .optional()
                .computed()
                .max_items(1),
        );
    schema.name = OIDC_APP_TYPE_NAME.to_string();
    schema.description = "OpenID Connect application registered in OneLogin".to_string();
    schema
}

/// Elements of the `parameters` set.
pub fn parameter_schema() -> Vec<FieldSchema> {
    vec![
        FieldSchema::string("param_key_name").required(),
        FieldSchema::int("param_id").computed(),
        FieldSchema::string("label").optional().computed(),
        FieldSchema::string("user_attribute_mappings")
            .optional()
            .computed(),
        FieldSchema::string("user_attribute_macros")
            .optional()
            .computed(),
        FieldSchema::string("attributes_transformations")
            .optional()
            .computed(),
        FieldSchema::string("default_values").optional().computed(),
        FieldSchema::bool("skip_if_blank").optional().computed(),
        FieldSchema::string("values").optional().computed(),
        FieldSchema::bool("provisioned_entitlements")
            .optional()
            .computed(),
        FieldSchema::bool("safe_entitlements_enabled")
            .optional()
            .computed(),
    ]
}

/// Elements of the `provisioning` block.
pub fn provisioning_schema() -> Vec<FieldSchema> {
    vec![FieldSchema::bool("enabled").optional().computed()]
}

/// Elements of the OIDC `configuration` block.
pub fn oidc_configuration_schema() -> Vec<FieldSchema> {
    vec![
        FieldSchema::string("redirect_uri").optional(),
        FieldSchema::int("refresh_token_expiration_minutes")
            .optional()
            .computed(),
        FieldSchema::string("login_url").optional(),
        FieldSchema::int("oidc_application_type")
            .optional()
            .computed(),
        FieldSchema::int("token_endpoint_auth_method")
            .optional()
            .computed(),
        FieldSchema::int("access_token_expiration_minutes")
            .optional()
            .computed(),
    ]
}

/// Elements of the OIDC `sso` block. Both values are issued by the server.
pub fn oidc_sso_schema() -> Vec<FieldSchema> {
    vec![
        FieldSchema::string("client_id").computed(),
        FieldSchema::string("client_secret").computed().sensitive(),
    ]
}
