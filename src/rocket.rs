pub mod zoho;

#[cfg(debug_assertions)]
pub(crate) const BASE_SCHEME: &'static str = "http";
#[cfg(debug_assertions)]
pub(crate) const BASE_URL: &'static str = "localhost:8000";

#[cfg(not(debug_assertions))]
pub(crate) const BASE_SCHEME: &'static str = "https";
#[cfg(not(debug_assertions))]
pub(crate) const BASE_URL: &'static str = "oauth.example.com";

pub(in super) fn launch(zoho: zoho::ZohoDesk) -> rocket::Rocket<rocket::Build> {
    tracing::info!("Zoho Desk redirect uri: {}", zoho.redirect_uri);
    rocket::build()
        .mount("/", rocket::routes![
            zoho::oauth::new::new_oauth,
            zoho::oauth::callback::oauth_callback,
        ])
        .manage(zoho)
}

#[cfg(test)]
pub(crate) fn test_client() -> rocket::local::blocking::Client {
    let zoho = zoho::ZohoDesk::new(
        "1000.TESTCLIENT".to_string(),
        "test-secret".to_string(),
        "http://localhost:8000/zoho/oauth",
        zoho::DEFAULT_ACCOUNTS_URL,
        zoho::DEFAULT_SCOPE.to_string(),
    ).expect("test settings are valid");
    rocket::local::blocking::Client::tracked(launch(zoho)).expect("valid rocket instance")
}
