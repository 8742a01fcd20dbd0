pub mod oauth;

use anyhow::Context;

pub const OAUTH_URL: &'static str = const_format::concatcp!(super::BASE_SCHEME, "://", super::BASE_URL, "/zoho/oauth");
pub const DEFAULT_ACCOUNTS_URL: &'static str = "https://accounts.zoho.com";
pub const DEFAULT_SCOPE: &'static str = "Desk.tickets.ALL,Desk.basic.READ";
const DEFAULT_CLIENT_ID: &'static str = "YOUR_ZOHO_CLIENT_ID";
const DEFAULT_CLIENT_SECRET: &'static str = "YOUR_ZOHO_CLIENT_SECRET";

/// Values printed into the token exchange instructions.
///
/// Resolved once at launch. Nothing in here is ever derived from a request.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ZohoDesk {
    pub client_id: String,
    pub(crate) client_secret: String,
    pub redirect_uri: url::Url,
    pub token_endpoint: url::Url,
    pub authorize_endpoint: url::Url,
    pub scope: String,
}

impl ZohoDesk {
    pub fn from_env() -> ::anyhow::Result<Self> {
        //Get Zoho Client ID and Secret from .env
        let client_id = var_or("ZOHO_DESK_CLIENT_ID", DEFAULT_CLIENT_ID);
        let client_secret = var_or("ZOHO_DESK_CLIENT_SECRET", DEFAULT_CLIENT_SECRET);
        let redirect_uri = var_or("ZOHO_DESK_REDIRECT_URI", OAUTH_URL);
        let accounts_url = var_or("ZOHO_ACCOUNTS_URL", DEFAULT_ACCOUNTS_URL);
        let scope = var_or("ZOHO_DESK_SCOPE", DEFAULT_SCOPE);

        Self::new(client_id, client_secret, redirect_uri.as_str(), accounts_url.as_str(), scope)
    }

    pub fn new(client_id: String, client_secret: String, redirect_uri: &str, accounts_url: &str, scope: String) -> ::anyhow::Result<Self> {
        let redirect_uri = url::Url::parse(redirect_uri)
            .with_context(|| format!("Invalid redirect uri: {redirect_uri}"))?;
        let accounts_url = url::Url::parse(accounts_url)
            .with_context(|| format!("Invalid Zoho accounts url: {accounts_url}"))?;
        if accounts_url.cannot_be_a_base() {
            ::anyhow::bail!("Zoho accounts url cannot be used as a base: {accounts_url}");
        }
        let token_endpoint = accounts_url.join("/oauth/v2/token")?;
        let authorize_endpoint = accounts_url.join("/oauth/v2/auth")?;

        Ok(Self{
            client_id,
            client_secret,
            redirect_uri,
            token_endpoint,
            authorize_endpoint,
            scope,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    match ::dotenvy::var(name) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!("Failed to read {name} ({err}), using \"{default}\"");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(accounts_url: &str) -> ::anyhow::Result<ZohoDesk> {
        ZohoDesk::new("id".to_string(), "secret".to_string(), OAUTH_URL, accounts_url, DEFAULT_SCOPE.to_string())
    }

    #[test]
    fn derives_endpoints_from_accounts_url() {
        let zoho = settings(DEFAULT_ACCOUNTS_URL).unwrap();
        assert_eq!(zoho.token_endpoint.as_str(), "https://accounts.zoho.com/oauth/v2/token");
        assert_eq!(zoho.authorize_endpoint.as_str(), "https://accounts.zoho.com/oauth/v2/auth");
    }

    #[test]
    fn regional_accounts_server() {
        let zoho = settings("https://accounts.zoho.eu/").unwrap();
        assert_eq!(zoho.token_endpoint.as_str(), "https://accounts.zoho.eu/oauth/v2/token");
    }

    #[test]
    fn default_redirect_uri_points_at_callback() {
        assert!(OAUTH_URL.ends_with("/zoho/oauth"));
        let zoho = settings(DEFAULT_ACCOUNTS_URL).unwrap();
        assert_eq!(zoho.redirect_uri.as_str(), OAUTH_URL);
    }

    #[test]
    fn rejects_invalid_urls() {
        assert!(settings("accounts.zoho.com").is_err());
        assert!(settings("mailto:someone@zoho.com").is_err());
        assert!(ZohoDesk::new("id".to_string(), "secret".to_string(), "/zoho/oauth", DEFAULT_ACCOUNTS_URL, DEFAULT_SCOPE.to_string()).is_err());
    }
}
