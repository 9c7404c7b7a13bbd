//! Token storage for an authenticated client.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::oauth::{Authentication, TokenResponse};
use crate::client::Credentials;
use crate::models::ApiResponse;
use crate::{Error, Result};

/// Authentication session holding the current token pair.
///
/// # Thread Safety
///
/// `Session` is cheap to clone and safe to share across tasks. The token
/// pair sits behind a lock: a refresh holds the write lock for the whole
/// exchange, so readers see either the old pair or the new one, and two
/// concurrent refreshes run one after the other.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
}

struct SessionInner {
    credentials: Option<Credentials>,
    access_token: SecretString,
    refresh_token: Option<SecretString>,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a session from an access token obtained elsewhere.
    ///
    /// Such a session has no credentials and cannot be refreshed.
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                credentials: None,
                access_token: SecretString::from(access_token.into()),
                refresh_token: None,
                expires_at: None,
            })),
        }
    }

    pub(crate) fn authenticated(credentials: Credentials, token: &TokenResponse) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                credentials: Some(credentials),
                access_token: SecretString::from(token.access_token.clone()),
                refresh_token: token.refresh_token.clone().map(SecretString::from),
                expires_at: token.expires_at,
            })),
        }
    }

    /// Get the current access token.
    pub async fn access_token(&self) -> SecretString {
        self.inner.read().await.access_token.clone()
    }

    /// Get the current refresh token, if the provider issued one.
    pub async fn refresh_token(&self) -> Option<SecretString> {
        self.inner.read().await.refresh_token.clone()
    }

    /// Get the access token expiration time, if known.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.expires_at
    }

    /// Check if the access token has expired.
    ///
    /// A token with unknown lifetime is never reported as expired.
    pub async fn is_expired(&self) -> bool {
        self.expires_at()
            .await
            .is_some_and(|expires_at| Utc::now() >= expires_at)
    }

    /// Exchange the refresh token for a new token pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRefreshToken`] if the session was built
    /// without credentials or the provider never issued a refresh token.
    pub(crate) async fn refresh(
        &self,
        auth: &Authentication,
    ) -> Result<ApiResponse<TokenResponse>> {
        let mut inner = self.inner.write().await;

        let (Some(credentials), Some(refresh_token)) = (&inner.credentials, &inner.refresh_token)
        else {
            return Err(Error::MissingRefreshToken);
        };

        let response = auth
            .refresh_access_token(credentials, refresh_token.expose_secret())
            .await?;

        match &response {
            ApiResponse::Success(token) => {
                inner.access_token = SecretString::from(token.access_token.clone());
                if let Some(new_refresh) = &token.refresh_token {
                    inner.refresh_token = Some(SecretString::from(new_refresh.clone()));
                }
                inner.expires_at = token.expires_at;
                tracing::info!("access token refreshed");
            }
            ApiResponse::Failure(body) => {
                tracing::warn!(error = %body.error, "token refresh rejected");
            }
        }

        Ok(response)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;

    #[test]
    fn test_session_debug_redacts_token() {
        let debug_str = format!("{:?}", Session::from_token("super-secret-token"));

        assert!(!debug_str.contains("super-secret-token"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[tokio::test]
    async fn test_token_session_has_no_expiry() {
        let session = Session::from_token("APP_USR-1");
        assert_eq!(session.access_token().await.expose_secret(), "APP_USR-1");
        assert!(session.refresh_token().await.is_none());
        assert!(!session.is_expired().await);
    }

    #[tokio::test]
    async fn test_refresh_without_refresh_token() {
        let session = Session::from_token("APP_USR-1");
        let auth = Authentication::new(&ClientConfig::default()).unwrap();

        let err = session.refresh(&auth).await.unwrap_err();
        assert!(matches!(err, Error::MissingRefreshToken));
    }
}
