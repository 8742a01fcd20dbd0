use crate::rocket::zoho::ZohoDesk;

/// Consent page url. `access_type=offline` together with `prompt=consent` makes Zoho hand out a refresh token.
pub fn authorize_url(zoho: &ZohoDesk) -> url::Url {
    let mut url = zoho.authorize_endpoint.clone();
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &zoho.client_id)
        .append_pair("scope", &zoho.scope)
        .append_pair("redirect_uri", zoho.redirect_uri.as_str())
        .append_pair("access_type", "offline")
        .append_pair("prompt", "consent");
    url
}

#[rocket::get("/zoho/new_oauth")]
pub fn new_oauth(zoho: &rocket::State<ZohoDesk>) -> rocket::response::Redirect {
    tracing::info!("Redirecting to Zoho consent page");
    rocket::response::Redirect::temporary(authorize_url(zoho.inner()).to_string())
}

#[cfg(test)]
mod tests {
    use rocket::http::Status;

    #[test]
    fn redirects_to_consent_page() {
        let client = crate::rocket::test_client();
        let response = client.get("/zoho/new_oauth").dispatch();
        assert_eq!(response.status(), Status::TemporaryRedirect);
        let location = response.headers().get_one("Location").map(str::to_string).unwrap_or_default();
        let location = url::Url::parse(&location).unwrap();
        assert_eq!(location.as_str().split('?').next(), Some("https://accounts.zoho.com/oauth/v2/auth"));
        let pairs: Vec<(String, String)> = location.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("response_type".to_string(), "code".to_string())));
        assert!(pairs.contains(&("client_id".to_string(), "1000.TESTCLIENT".to_string())));
        assert!(pairs.contains(&("redirect_uri".to_string(), "http://localhost:8000/zoho/oauth".to_string())));
        assert!(pairs.contains(&("access_type".to_string(), "offline".to_string())));
        assert!(pairs.contains(&("scope".to_string(), crate::rocket::zoho::DEFAULT_SCOPE.to_string())));
    }
}
