//! OAuth2 token endpoint.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::client::{ClientConfig, Credentials, Transport};
use crate::models::{ApiErrorBody, ApiResponse};
use crate::Result;

const TOKEN_PATH: &str = "/oauth/token";

/// Client for the OAuth2 token endpoint.
///
/// Rejected credentials are not an error at this level: they come back as
/// [`ApiResponse::Failure`] with the provider's `error` and `message`.
/// Only [`MercadoPagoClient`](crate::MercadoPagoClient) construction turns
/// them into [`Error::Access`](crate::Error::Access).
///
/// # Example
///
/// ```no_run
/// use mercadopago_rs::{ClientConfig, Credentials};
/// use mercadopago_rs::auth::Authentication;
///
/// # async fn example() -> mercadopago_rs::Result<()> {
/// let auth = Authentication::new(&ClientConfig::default())?;
/// let response = auth
///     .access_token(&Credentials::new("client-id", "client-secret"))
///     .await?;
///
/// match response.into_result() {
///     Ok(token) => println!("expires in {:?}s", token.expires_in),
///     Err(body) => println!("rejected: {}", body),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Authentication {
    transport: Transport,
}

impl Authentication {
    /// Create a token endpoint client for the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Transport::new(config)?))
    }

    pub(crate) fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }

    /// Exchange client credentials for an access token
    /// (`client_credentials` grant).
    pub async fn access_token(
        &self,
        credentials: &Credentials,
    ) -> Result<ApiResponse<TokenResponse>> {
        self.exchange(&[
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id()),
            ("client_secret", credentials.expose_secret()),
        ])
        .await
    }

    /// Exchange a refresh token for a new access/refresh token pair.
    pub async fn refresh_access_token(
        &self,
        credentials: &Credentials,
        refresh_token: &str,
    ) -> Result<ApiResponse<TokenResponse>> {
        self.exchange(&[
            ("grant_type", "refresh_token"),
            ("client_id", credentials.client_id()),
            ("client_secret", credentials.expose_secret()),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn exchange(&self, form: &[(&str, &str)]) -> Result<ApiResponse<TokenResponse>> {
        let raw = self.transport.post_form(TOKEN_PATH, None, form).await?;

        let response = match raw.into_api_response::<TokenResponse>()? {
            ApiResponse::Success(token) if token.access_token.is_empty() => {
                ApiResponse::Failure(ApiErrorBody {
                    error: "invalid_token".to_string(),
                    message: "token endpoint returned no access_token".to_string(),
                    status: 200,
                    ..Default::default()
                })
            }
            ApiResponse::Success(mut token) => {
                token.expires_at = token.expires_in.and_then(expiry_after);
                ApiResponse::Success(token)
            }
            failure => failure,
        };

        Ok(response)
    }
}

/// Instant `secs` seconds from now, or `None` if it is not representable.
fn expiry_after(secs: i64) -> Option<DateTime<Utc>> {
    Utc::now().checked_add_signed(Duration::try_seconds(secs)?)
}

impl std::fmt::Debug for Authentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authentication").finish_non_exhaustive()
    }
}

/// Successful response of the token endpoint.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    /// Token authorizing API calls
    #[serde(default)]
    pub access_token: String,
    /// Token that obtains a new access token without the client secret
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Usually `bearer`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token, in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Granted scopes, space separated
    #[serde(default)]
    pub scope: Option<String>,
    /// MercadoPago user the token acts for
    #[serde(default)]
    pub user_id: Option<u64>,
    /// Whether the token operates on production data
    #[serde(default)]
    pub live_mode: Option<bool>,
    /// Local time at which the access token expires, derived from `expires_in`
    #[serde(skip)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("user_id", &self.user_id)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
