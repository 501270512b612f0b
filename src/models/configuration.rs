use serde::{Deserialize, Serialize};

/// OIDC-specific app configuration.
///
/// Enumerated settings are carried as the integer codes the API uses:
/// `oidc_application_type` (0 web, 1 native/mobile) and
/// `token_endpoint_auth_method` (0 basic, 1 POST, 2 none/PKCE).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token_expiration_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oidc_application_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token_expiration_minutes: Option<i32>,
}
