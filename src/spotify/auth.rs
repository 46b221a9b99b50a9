use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{config, types::Token};

/// Requests an access token using the OAuth 2.0 client credentials flow.
///
/// Builds a Basic authorization header from the configured client id and
/// secret and posts a `client_credentials` grant to the token endpoint.
/// Client credentials tokens carry no refresh token; when one expires the
/// exchange is simply run again.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token with expiry metadata and the obtained-at
///   timestamp filled in
/// - `Err(String)` - Network error or a non-success response from the token
///   endpoint
///
/// # Scope
///
/// Client credentials tokens grant access to public catalog data only, which
/// is all the collaboration graph needs: search, artists, albums and tracks.
///
/// # Example
///
/// ```
/// let token = request_client_credentials_token().await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_client_credentials_token() -> Result<Token, String> {
    let auth_string = format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    );
    let auth_base64 = STANDARD.encode(auth_string.as_bytes());

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", auth_base64))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let res = res.error_for_status().map_err(|e| e.to_string())?;
    let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        token_type: json["token_type"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
