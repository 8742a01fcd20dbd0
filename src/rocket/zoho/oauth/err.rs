pub const PROVIDER_ERROR_MESSAGE: &'static str = "OAuth authorization failed";
pub const MISSING_CODE: &'static str = "missing_code";
pub const MISSING_CODE_MESSAGE: &'static str = "No authorization code received";

/// JSON body of a failed redirect.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum OAuthError {
    /// Zoho rejected the authorization (e.g. the user denied consent).
    Provider {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        message: &'static str,
    },
    MissingCode {
        error: &'static str,
        message: &'static str,
    },
}

impl OAuthError {
    pub fn provider(error: &str, description: Option<&str>) -> Self {
        Self::Provider {
            error: error.to_string(),
            description: description.map(str::to_string),
            message: PROVIDER_ERROR_MESSAGE,
        }
    }

    pub const fn missing_code() -> Self {
        Self::MissingCode {
            error: MISSING_CODE,
            message: MISSING_CODE_MESSAGE,
        }
    }
}
