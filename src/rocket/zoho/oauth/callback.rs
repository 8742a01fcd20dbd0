use rocket::serde::json::Json;
use crate::rocket::zoho::ZohoDesk;
use super::{err::OAuthError, Redirect, RedirectQuery};

#[derive(rocket::response::Responder, Debug)]
pub enum Responder {
    Ok(rocket::response::content::RawHtml<String>),
    Err((rocket::http::Status, Json<OAuthError>)),
}

/// Maps one redirect onto its response. Same input, same bytes out.
pub fn respond(query: &RedirectQuery, zoho: &ZohoDesk) -> Responder {
    match query.classify() {
        Redirect::ProviderError { error, description } => {
            tracing::warn!("Zoho rejected the authorization: {error} ({})", description.unwrap_or(""));
            Responder::Err((rocket::http::Status::BadRequest, Json(OAuthError::provider(error, description))))
        },
        Redirect::MissingCode => {
            tracing::info!("Zoho redirect without an authorization code");
            Responder::Err((rocket::http::Status::BadRequest, Json(OAuthError::missing_code())))
        },
        Redirect::Code(code) => {
            tracing::info!("Received Zoho authorization code");
            Responder::Ok(super::ok::render(code, zoho))
        },
    }
}

#[rocket::get("/zoho/oauth?<query..>")]
pub fn oauth_callback(query: RedirectQuery, zoho: &rocket::State<ZohoDesk>) -> Responder {
    respond(&query, zoho.inner())
}
