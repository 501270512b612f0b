//! Mapping for the OIDC `sso` block.

use super::fields::{optional, string_field};
use super::{FieldBag, FieldMapper};
use crate::models::AppSso;

#[derive(Debug, Default, Clone, Copy)]
pub struct OidcSsoMapper;

impl FieldMapper for OidcSsoMapper {
    type Record = AppSso;

    fn inflate(&self, bag: &FieldBag) -> AppSso {
        AppSso {
            client_id: string_field(bag, "client_id"),
            client_secret: string_field(bag, "client_secret"),
        }
    }

    fn flatten(&self, sso: &AppSso) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert("client_id".into(), optional(sso.client_id.clone()));
        bag.insert("client_secret".into(), optional(sso.client_secret.clone()));
        bag
    }
}
