// src/auth.rs
//! Sign-up/sign-in flows and session upkeep against `/auth/*`

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tracing::{info, warn};

use crate::core::api_client::ApiClient;
use crate::core::token_store::StoredCredentials;
use crate::error::{ApiError, Result};
use crate::types::user::{
    AuthResponse, PasswordResetConfirm, PasswordResetRequest, RefreshTokenRequest, SignInRequest,
    SignUpRequest, User,
};

/// Tokens are considered expired slightly early so a request started near
/// the boundary still carries a valid one.
const EXPIRY_LEEWAY_SECS: i64 = 30;

pub struct AuthClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<AuthResponse> {
        let request = SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        };

        let response: AuthResponse = self.api.post_public("/auth/signup", &request).await?;
        self.persist_session(&response);
        info!("Signed up as {}", response.user.email);
        Ok(response)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: AuthResponse = self.api.post_public("/auth/signin", &request).await?;
        self.persist_session(&response);
        info!("Signed in as {}", response.user.email);
        Ok(response)
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse> {
        let request = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };

        let response: AuthResponse = self.api.post_public("/auth/refresh", &request).await?;
        self.persist_session(&response);
        Ok(response)
    }

    pub async fn current_user(&self) -> Result<User> {
        self.api.get("/auth/me").await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        let request = PasswordResetRequest {
            email: email.to_string(),
        };
        self.api
            .post_public_no_content("/auth/password-reset", &request)
            .await
    }

    pub async fn confirm_password_reset(&self, token: &str, new_password: &str) -> Result<()> {
        let request = PasswordResetConfirm {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        self.api
            .post_public_no_content("/auth/password-reset/confirm", &request)
            .await
    }

    /// Sign-out is local only: drop the stored session, no server call.
    pub fn sign_out(&self) -> anyhow::Result<()> {
        self.api.token_store().clear()
    }

    fn persist_session(&self, response: &AuthResponse) {
        let credentials = StoredCredentials {
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            expires_at: Some(Utc::now() + Duration::seconds(response.expires_in)),
        };
        if let Err(err) = self.api.token_store().save(&credentials) {
            warn!("Failed to persist session tokens: {}", err);
        }
    }
}

/// Refresh the stored session once if the access token has expired and a
/// refresh token is available. Never fails the surrounding command: a
/// rejected refresh clears the store, anything else just logs.
pub async fn ensure_session(api: &ApiClient) -> Result<()> {
    let Some(credentials) = api.token_store().load() else {
        return Ok(());
    };

    let expires_at = credentials
        .expires_at
        .or_else(|| token_expiry(&credentials.access_token));
    let expired = match expires_at {
        Some(expiry) => Utc::now() + Duration::seconds(EXPIRY_LEEWAY_SECS) >= expiry,
        None => false,
    };
    if !expired {
        return Ok(());
    }

    info!("Access token expired, refreshing session");
    match AuthClient::new(api).refresh(&credentials.refresh_token).await {
        Ok(_) => Ok(()),
        Err(ApiError::Unauthorized) => {
            // The refresh token itself was rejected; the session is gone.
            if let Err(err) = api.token_store().clear() {
                warn!("Failed to clear stored tokens: {}", err);
            }
            Ok(())
        }
        Err(err) => {
            warn!("Session refresh failed: {}", err);
            Ok(())
        }
    }
}

#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

/// Expiry instant baked into a JWT access token, read without verifying the
/// signature. The client never trusts the token content for anything beyond
/// deciding when to refresh.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let key = DecodingKey::from_secret(&[]);
    let data = decode::<Claims>(token, &key, &validation).ok()?;
    DateTime::from_timestamp(data.claims.exp, 0)
}

// ===== Client-side Validation =====

/// Minimal email shape check before hitting the API.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && email.chars().all(|c| !c.is_whitespace())
}

/// At least 8 characters with upper, lower and a digit.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        };
        write!(f, "{name}")
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    let mut strength = 0;

    if password.chars().count() >= 8 {
        strength += 1;
    }
    if password.chars().count() >= 12 {
        strength += 1;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        strength += 1;
    }
    if password.chars().any(|c| c.is_lowercase()) {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 1;
    }
    if password.chars().any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c)) {
        strength += 1;
    }

    match strength {
        0..=2 => PasswordStrength::Weak,
        3..=4 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: i64,
    }

    #[test]
    fn test_token_expiry_reads_exp_claim() {
        let exp = Utc::now().timestamp() + 3600;
        let token = encode(
            &Header::default(),
            &TestClaims {
                sub: "u-1".into(),
                exp,
            },
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .unwrap();

        let expiry = token_expiry(&token).unwrap();
        assert_eq!(expiry.timestamp(), exp);
    }

    #[test]
    fn test_token_expiry_handles_opaque_tokens() {
        assert!(token_expiry("not-a-jwt").is_none());
        assert!(token_expiry("").is_none());
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("dev@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("dev@"));
        assert!(!is_valid_email("dev@example"));
        assert!(!is_valid_email("dev @example.com"));
    }

    #[test]
    fn test_password_policy() {
        assert!(is_valid_password("Abcdef12"));
        assert!(!is_valid_password("short1A"));
        assert!(!is_valid_password("alllowercase1"));
        assert!(!is_valid_password("ALLUPPERCASE1"));
        assert!(!is_valid_password("NoDigitsHere"));
    }

    #[test]
    fn test_password_strength_grading() {
        assert_eq!(password_strength("abc"), PasswordStrength::Weak);
        assert_eq!(password_strength("Abcdef12"), PasswordStrength::Medium);
        assert_eq!(password_strength("Abcdefgh1234!x"), PasswordStrength::Strong);
    }
}
