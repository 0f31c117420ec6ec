//! Server functions for authentication
//!
//! These run on the server and handle session management for the OAuth
//! login flow. The identity provider redirects back to `/auth/callback`
//! with a signed token; completing the login decodes it and stores the
//! user in the session.

use dioxus::prelude::*;
use serde::Deserialize;

use crate::types::{AuthUser, UserRole};

/// URL of the identity provider's authorize endpoint, where the login page
/// sends the user.
#[server]
pub async fn login_url() -> Result<String, ServerFnError> {
    Ok(std::env::var("OAUTH_AUTHORIZE_URL")
        .unwrap_or_else(|_| "http://localhost:8080/oauth/authorize".to_string()))
}

/// Complete the OAuth flow: decode the callback token and establish a
/// session for the user it names.
#[server]
pub async fn complete_login(token: String) -> Result<AuthUser, ServerFnError> {
    let user = decode_jwt_to_user(&token)?;
    set_session(&user, &token).await?;
    tracing::info!(user_id = %user.id, "session established");
    Ok(user)
}

/// Get the current authenticated user from the session
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    get_session_user().await
}

/// Logout - clear the session
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
fn decode_jwt_to_user(token: &str) -> Result<AuthUser, ServerFnError> {
    // Simple JWT decoding (just base64 decode the payload); the marketplace
    // API verifies the signature on every call that carries the token.
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ServerFnError::new("Invalid token format"));
    }

    use base64::Engine;
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| ServerFnError::new(format!("Failed to decode token: {}", e)))?;

    #[derive(Deserialize)]
    struct JwtClaims {
        sub: uuid::Uuid,
        email: String,
        name: String,
        role: UserRole,
        exp: i64,
    }

    let claims: JwtClaims = serde_json::from_slice(&payload)
        .map_err(|e| ServerFnError::new(format!("Failed to parse token claims: {}", e)))?;

    if claims.exp < chrono::Utc::now().timestamp() {
        return Err(ServerFnError::new("Sign-in token expired"));
    }

    Ok(AuthUser {
        id: claims.sub,
        email: claims.email,
        display_name: claims.name,
        role: claims.role,
    })
}

#[cfg(feature = "server")]
async fn session() -> Result<tower_sessions::Session, ServerFnError> {
    dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))
}

#[cfg(feature = "server")]
async fn set_session(user: &AuthUser, token: &str) -> Result<(), ServerFnError> {
    let session = session().await?;

    session
        .insert("user", user)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;
    session
        .insert("token", token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

#[cfg(feature = "server")]
async fn get_session_user() -> Result<Option<AuthUser>, ServerFnError> {
    let session = session().await?;

    session
        .get("user")
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get user from session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    let session = session().await?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))?;

    Ok(())
}

/// The signed-in user, or an error for endpoints that require a session.
#[cfg(feature = "server")]
pub(crate) async fn require_session_user() -> Result<AuthUser, ServerFnError> {
    get_session_user()
        .await?
        .ok_or_else(|| ServerFnError::new("Not signed in"))
}

/// API client carrying the session's bearer token.
#[cfg(feature = "server")]
pub(crate) async fn authed_client() -> Result<crate::api::ApiClient, ServerFnError> {
    let session = session().await?;
    let token: Option<String> = session
        .get("token")
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get token from session: {}", e)))?;

    let token = token.ok_or_else(|| ServerFnError::new("Not signed in"))?;
    Ok(crate::api::server_client().with_token(token))
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use base64::Engine;

    fn token_with_claims(claims: serde_json::Value) -> String {
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(serde_json::to_vec(&claims).unwrap());
        format!("e30.{}.sig", payload)
    }

    #[test]
    fn decodes_admin_claims() {
        let token = token_with_claims(serde_json::json!({
            "sub": "8f14e45f-ceea-467f-a8d7-91b0c2f8a1d3",
            "email": "admin@example.com",
            "name": "Margaux",
            "role": "admin",
            "exp": chrono::Utc::now().timestamp() + 3600,
        }));

        let user = decode_jwt_to_user(&token).unwrap();
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn rejects_expired_token() {
        let token = token_with_claims(serde_json::json!({
            "sub": "8f14e45f-ceea-467f-a8d7-91b0c2f8a1d3",
            "email": "admin@example.com",
            "name": "Margaux",
            "role": "admin",
            "exp": chrono::Utc::now().timestamp() - 10,
        }));

        assert!(decode_jwt_to_user(&token).is_err());
    }

    #[test]
    fn rejects_malformed_token() {
        assert!(decode_jwt_to_user("not-a-jwt").is_err());
    }
}
