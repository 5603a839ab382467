use persona_core::{CoreError, RedditApiError};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    token_type: String,
    expires_in: u64,
}

/// Exchange script-app credentials for an application-only OAuth token
/// (`grant_type=client_credentials`). One exchange per run; the token is
/// not refreshed.
pub async fn request_app_token(
    http_client: &Client,
    client_id: &str,
    client_secret: &str,
) -> Result<String, CoreError> {
    debug!("Requesting app-only Reddit access token");

    let response = http_client
        .post(TOKEN_URL)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CoreError::RedditApi(RedditApiError::AuthenticationFailed {
            reason: format!("token endpoint returned {}", status),
        }));
    }

    let token: TokenResponse = response.json().await.map_err(|e| {
        CoreError::RedditApi(RedditApiError::AuthenticationFailed {
            reason: format!("could not parse token response: {}", e),
        })
    })?;

    info!(
        "Authenticated with Reddit, token valid for {} seconds",
        token.expires_in
    );
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{
            "access_token": "abc123",
            "token_type": "bearer",
            "expires_in": 86400,
            "scope": "*"
        }"#;

        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc123");
        assert_eq!(token.expires_in, 86400);
    }
}
