use serde::{Deserialize, Serialize};

/// One attribute-mapping rule attached to an app.
///
/// Parameters live in a map keyed by their entitlement/attribute name, so the
/// key name itself is not a field of this record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_attribute_mappings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_attribute_macros: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_transformations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_if_blank: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_values: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_entitlements: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_entitlements_enabled: Option<bool>,
}
