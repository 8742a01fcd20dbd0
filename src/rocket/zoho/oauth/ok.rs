use crate::rocket::zoho::ZohoDesk;

pub const REFRESH_TOKEN_VAR: &'static str = "ZOHO_DESK_REFRESH_TOKEN";

/// Success page: shows the code and how to trade it for a refresh token.
///
/// `code` is inserted as received.
pub fn render(code: &str, zoho: &ZohoDesk) -> rocket::response::content::RawHtml<String> {
    let token_endpoint = &zoho.token_endpoint;
    let client_id = &zoho.client_id;
    let client_secret = &zoho.client_secret;
    let redirect_uri = &zoho.redirect_uri;
    rocket::response::content::RawHtml(format!(r#"
<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8">
        <meta name="color-scheme" content="light dark">
        <title>Zoho Desk OAuth Success</title>
    </head>
    <body>
        <h1>Zoho Desk OAuth Success</h1>
        <p>Authorization code:</p>
        <pre id="code"><code>{code}</code></pre>
        <p>The code is only valid for a few minutes and can only be used once. Exchange it for a refresh token by running:</p>
        <pre id="command"><code>curl -X POST "{token_endpoint}" \
  -d "grant_type=authorization_code" \
  -d "client_id={client_id}" \
  -d "client_secret={client_secret}" \
  -d "redirect_uri={redirect_uri}" \
  -d "code={code}"</code></pre>
        <p>Copy the <code>refresh_token</code> from the response into the <code>{REFRESH_TOKEN_VAR}</code> environment variable.</p>
    </body>
</html>
"#))
}
