//! Mapping for the OIDC `configuration` block.

use super::fields::{int_field, optional, string_field};
use super::{FieldBag, FieldMapper};
use crate::models::AppConfiguration;

#[derive(Debug, Default, Clone, Copy)]
pub struct OidcConfigurationMapper;

impl FieldMapper for OidcConfigurationMapper {
    type Record = AppConfiguration;

    fn inflate(&self, bag: &FieldBag) -> AppConfiguration {
        AppConfiguration {
            redirect_uri: string_field(bag, "redirect_uri"),
            refresh_token_expiration_minutes: int_field(bag, "refresh_token_expiration_minutes"),
            login_url: string_field(bag, "login_url"),
            oidc_application_type: int_field(bag, "oidc_application_type"),
            token_endpoint_auth_method: int_field(bag, "token_endpoint_auth_method"),
            access_token_expiration_minutes: int_field(bag, "access_token_expiration_minutes"),
        }
    }

    fn flatten(&self, config: &AppConfiguration) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert("redirect_uri".into(), optional(config.redirect_uri.clone()));
        bag.insert(
            "refresh_token_expiration_minutes".into(),
            optional(config.refresh_token_expiration_minutes),
        );
        bag.insert("login_url".into(), optional(config.login_url.clone()));
        bag.insert(
            "oidc_application_type".into(),
            optional(config.oidc_application_type),
        );
        bag.insert(
            "token_endpoint_auth_method".into(),
            optional(config.token_endpoint_auth_method),
        );
        bag.insert(
            "access_token_expiration_minutes".into(),
            optional(config.access_token_expiration_minutes),
        );
        bag
    }
}
