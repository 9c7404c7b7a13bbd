//! HTTP transport and client implementation for the MercadoPago API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::api::{
    CheckoutService, CollectionsService, NotificationsService, PreapprovalService, SearchFilter,
};
use crate::auth::{Authentication, Session, TokenResponse};
use crate::models::{
    ApiResponse, NotificationTopic, PaymentRecord, PaymentRequest, PreapprovalId,
    PreapprovalRequest, Preapproval, Preference, PreferenceId,
};
use crate::{Error, Result};

use super::config::{ClientConfig, Credentials};

const NO_QUERY: [(&str, &str); 0] = [];

/// Status and decoded body of an HTTP exchange.
///
/// Produced for every status code; interpreting it is up to the caller.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: Value,
}

impl RawResponse {
    pub(crate) fn into_api_response<T: DeserializeOwned>(self) -> Result<ApiResponse<T>> {
        ApiResponse::from_parts(self.status, self.body)
    }
}

/// Sends requests to the API and decodes JSON bodies regardless of status.
///
/// Only transport problems (connect, timeout, an undecodable 2xx body)
/// become errors; provider error payloads come back as data.
#[derive(Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
}

impl Transport {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(&config.api_base_url)?,
        })
    }

    /// Build the absolute URL for an API path.
    fn url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// Start a request, attaching the access token as a query parameter.
    fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&SecretString>,
    ) -> Result<RequestBuilder> {
        tracing::debug!(%method, path, "sending request");

        let mut builder = self.http.request(method, self.url(path)?);
        if let Some(token) = token {
            builder = builder.query(&[("access_token", token.expose_secret())]);
        }
        Ok(builder)
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&SecretString>,
        query: &Q,
    ) -> Result<RawResponse> {
        let builder = self.request(Method::GET, path, token)?.query(query);
        self.execute(builder).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&SecretString>,
        body: &B,
    ) -> Result<RawResponse> {
        let builder = self.request(Method::POST, path, token)?.json(body);
        self.execute(builder).await
    }

    /// Make a POST request with a form-encoded body.
    pub(crate) async fn post_form<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&SecretString>,
        form: &B,
    ) -> Result<RawResponse> {
        let builder = self.request(Method::POST, path, token)?.form(form);
        self.execute(builder).await
    }

    /// Make a PUT request with a JSON body.
    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&SecretString>,
        body: &B,
    ) -> Result<RawResponse> {
        let builder = self.request(Method::PUT, path, token)?.json(body);
        self.execute(builder).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(
        &self,
        path: &str,
        token: Option<&SecretString>,
    ) -> Result<RawResponse> {
        let builder = self.request(Method::DELETE, path, token)?;
        self.execute(builder).await
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<RawResponse> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(status = status.as_u16(), len = bytes.len(), "received response");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(body) => body,
                // Proxies answer errors with HTML or plain text; keep it as data.
                Err(_) if !status.is_success() => {
                    Value::String(String::from_utf8_lossy(&bytes).into_owned())
                }
                Err(err) => return Err(Error::Json(err)),
            }
        };

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// The main client for interacting with the MercadoPago API.
///
/// Construction authenticates with the client-credentials grant; a client
/// that exists always holds a token. Operations return
/// [`ApiResponse`], so provider error payloads can be inspected without
/// being treated as failures.
///
/// Clones share the same session: a token refreshed through one clone is
/// seen by all of them. The auto-pagination flag belongs to each value.
///
/// # Example
///
/// ```no_run
/// use mercadopago_rs::{Credentials, MercadoPagoClient};
/// use mercadopago_rs::models::{PaymentStatus};
/// use mercadopago_rs::api::SearchFilter;
///
/// # async fn example() -> mercadopago_rs::Result<()> {
/// let mut client = MercadoPagoClient::new(Credentials::from_env()?).await?;
///
/// client.set_auto_paginate(true);
/// let refunded = client
///     .search(&SearchFilter::new().status(PaymentStatus::Refunded))
///     .await?;
///
/// if let Some(records) = refunded.success() {
///     println!("{} refunded payments", records.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct MercadoPagoClient {
    pub(crate) inner: Arc<ClientInner>,
    auto_paginate: bool,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Transport,
    pub(crate) auth: Authentication,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

impl MercadoPagoClient {
    /// Authenticate with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Access`] if the token endpoint rejects the
    /// credentials, or a transport error if it cannot be reached.
    pub async fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default()).await
    }

    /// Authenticate with a custom configuration.
    pub async fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        let auth = Authentication::with_transport(transport.clone());

        let token = match auth.access_token(&credentials).await? {
            ApiResponse::Success(token) => token,
            ApiResponse::Failure(body) => {
                tracing::warn!(
                    client_id = credentials.client_id(),
                    error = %body.error,
                    "authentication rejected"
                );
                return Err(Error::access(body.error, body.message));
            }
        };

        tracing::info!(client_id = credentials.client_id(), "authenticated");

        let session = Session::authenticated(credentials, &token);
        Ok(Self::from_parts(transport, auth, session, config))
    }

    /// Create a client around an access token obtained elsewhere.
    ///
    /// The token is not validated; a bad token surfaces as a provider error
    /// payload on the first call. The session cannot be refreshed.
    pub fn with_token(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Self::with_session(Session::from_token(token), config)
    }

    /// Create a client with an existing session and custom configuration.
    pub fn with_session(session: Session, config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        let auth = Authentication::with_transport(transport.clone());
        Ok(Self::from_parts(transport, auth, session, config))
    }

    fn from_parts(
        transport: Transport,
        auth: Authentication,
        session: Session,
        config: ClientConfig,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                auth,
                session,
                config,
            }),
            auto_paginate: false,
        }
    }

    /// The current access token.
    pub async fn access_token(&self) -> SecretString {
        self.inner.session.access_token().await
    }

    /// Exchange the stored refresh token for a new token pair.
    ///
    /// On success the session's tokens are replaced. A rejected refresh is
    /// returned as a failure payload and leaves the session unchanged.
    pub async fn refresh_access_token(&self) -> Result<ApiResponse<TokenResponse>> {
        self.inner.session.refresh(&self.inner.auth).await
    }

    /// Whether [`search`](Self::search) fetches every page.
    pub fn auto_paginate(&self) -> bool {
        self.auto_paginate
    }

    /// Enable or disable automatic pagination of searches.
    pub fn set_auto_paginate(&mut self, enabled: bool) {
        self.auto_paginate = enabled;
    }

    /// Get the checkout preferences service.
    pub fn checkout(&self) -> CheckoutService {
        CheckoutService::new(self.inner.clone())
    }

    /// Get the preapprovals service.
    pub fn preapprovals(&self) -> PreapprovalService {
        PreapprovalService::new(self.inner.clone())
    }

    /// Get the collections (payment search) service.
    pub fn collections(&self) -> CollectionsService {
        CollectionsService::new(self.inner.clone())
    }

    /// Get the notifications service.
    pub fn notifications(&self) -> NotificationsService {
        NotificationsService::new(self.inner.clone())
    }

    /// Create a checkout preference.
    pub async fn create_preference(
        &self,
        request: &PaymentRequest,
    ) -> Result<ApiResponse<Preference>> {
        self.checkout().create(request).await
    }

    /// Get a checkout preference by id.
    pub async fn get_preference(&self, id: &PreferenceId) -> Result<ApiResponse<Preference>> {
        self.checkout().get(id).await
    }

    /// Create a recurring payment authorization.
    pub async fn create_preapproval_payment(
        &self,
        request: &PreapprovalRequest,
    ) -> Result<ApiResponse<Preapproval>> {
        self.preapprovals().create(request).await
    }

    /// Cancel a recurring payment authorization.
    pub async fn cancel_preapproval_payment(
        &self,
        id: &PreapprovalId,
    ) -> Result<ApiResponse<Preapproval>> {
        self.preapprovals().cancel(id).await
    }

    /// Fetch the resource an IPN notification refers to.
    pub async fn notification(
        &self,
        id: impl std::fmt::Display,
        topic: NotificationTopic,
    ) -> Result<ApiResponse<Value>> {
        self.notifications().get(id, topic).await
    }

    /// Search payments.
    ///
    /// Returns the first page only, unless auto-pagination is enabled, in
    /// which case every page is fetched and concatenated in server order.
    pub async fn search(&self, filter: &SearchFilter) -> Result<ApiResponse<Vec<PaymentRecord>>> {
        if self.auto_paginate {
            self.collections().search_all(filter).await
        } else {
            self.collections().search(filter).await
        }
    }

    /// GET an arbitrary API path.
    ///
    /// For endpoints without a typed wrapper; the token is attached the same
    /// way as for every other call.
    pub async fn get<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ApiResponse<T>> {
        self.inner.get_with_query(path, query).await
    }

    /// POST a JSON body to an arbitrary API path.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        self.inner.post(path, body).await
    }

    /// PUT a JSON body to an arbitrary API path.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        self.inner.put(path, body).await
    }

    /// DELETE an arbitrary API path.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.inner.delete(path).await
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Make an authenticated GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.get_with_query(path, &NO_QUERY).await
    }

    /// Make an authenticated GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ApiResponse<T>> {
        let token = self.session.access_token().await;
        self.transport
            .get(path, Some(&token), query)
            .await?
            .into_api_response()
    }

    /// Make an authenticated POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let token = self.session.access_token().await;
        self.transport
            .post(path, Some(&token), body)
            .await?
            .into_api_response()
    }

    /// Make an authenticated PUT request.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let token = self.session.access_token().await;
        self.transport
            .put(path, Some(&token), body)
            .await?
            .into_api_response()
    }

    /// Make an authenticated DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        let token = self.session.access_token().await;
        self.transport
            .delete(path, Some(&token))
            .await?
            .into_api_response()
    }
}

impl Clone for MercadoPagoClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            auto_paginate: self.auto_paginate,
        }
    }
}

impl std::fmt::Debug for MercadoPagoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MercadoPagoClient")
            .field("config", &self.inner.config)
            .field("auto_paginate", &self.auto_paginate)
            .finish()
    }
}
