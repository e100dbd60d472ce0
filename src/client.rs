use std::{
    env::{self, VarError},
    fmt,
    time::Duration,
};

use log::debug;
use reqwest::{
    Method,
    blocking::{RequestBuilder, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::payload::{Query, QueryOptions};
use crate::{ApiError, ApiResponse, ClientBuilderError, ClientError};

pub const DEFAULT_ENDPOINT: &str = "https://api.dnsimple.com/";
pub const SANDBOX_ENDPOINT: &str = "https://api.sandbox.dnsimple.com/";

const DEFAULT_USER_AGENT: &str = concat!("dnsimple-rust/", env!("CARGO_PKG_VERSION"));

const TOKEN_VAR: &str = "DNSIMPLE_TOKEN";
const BASE_URL_VAR: &str = "DNSIMPLE_BASE_URL";

/// Credentials sent with every request.
#[derive(Clone)]
pub enum Credentials {
    /// Sent as `Authorization: Bearer <token>`.
    OAuthToken(String),
    HttpBasic { username: String, password: String },
}

impl Credentials {
    fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::OAuthToken(token) => req.bearer_auth(token),
            Credentials::HttpBasic { username, password } => {
                req.basic_auth(username, Some(password))
            }
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::OAuthToken(_) => f.write_str("OAuthToken(<redacted>)"),
            Credentials::HttpBasic { username, .. } => f
                .debug_struct("HttpBasic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Builder for a [Client] that handles default values.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    endpoint: Option<Url>,
    credentials: Option<Credentials>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Creates a builder configured from the environment.
    ///
    /// `DNSIMPLE_TOKEN` is used as the OAuth token, and `DNSIMPLE_BASE_URL`,
    /// if set, as the endpoint.
    ///
    /// # Errors
    /// - `Env` if `DNSIMPLE_TOKEN` isn't set, or either variable isn't valid unicode.
    /// - `UrlParse` if `DNSIMPLE_BASE_URL` isn't a valid URL.
    pub fn from_env() -> Result<Self, ClientBuilderError> {
        Self::from_vars(|name| env::var(name))
    }

    fn from_vars<F>(var: F) -> Result<Self, ClientBuilderError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let token = var(TOKEN_VAR).map_err(|_| ClientBuilderError::Env(TOKEN_VAR.to_string()))?;
        let endpoint = match var(BASE_URL_VAR) {
            Ok(url) => Some(url.parse::<Url>()?),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                return Err(ClientBuilderError::Env(BASE_URL_VAR.to_string()));
            }
        };

        Ok(Self::new()
            .oauth_token(&token)
            .endpoint_if_some(endpoint.as_ref()))
    }

    /// Sets the API endpoint to the one given.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Uses the sandbox environment.
    pub fn sandbox(mut self) -> Self {
        self.endpoint = SANDBOX_ENDPOINT.parse().ok();
        self
    }

    /// Authenticates with an OAuth or account access token.
    pub fn oauth_token(mut self, token: &str) -> Self {
        self.credentials = Some(Credentials::OAuthToken(token.to_string()));
        self
    }

    /// Authenticates with HTTP basic authentication.
    pub fn basic_auth(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some(Credentials::HttpBasic {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    /// Appends the given string to the default user agent.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, the default endpoint of
    /// `https://api.dnsimple.com/` is used.
    ///
    /// # Errors
    /// - `MissingField` if no credentials were added to the builder.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    /// - `Reqwest` if the HTTP client can't be initialised.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let credentials = self
            .credentials
            .ok_or_else(|| ClientBuilderError::MissingField("credentials".to_string()))?;
        let user_agent = match self.user_agent {
            Some(ua) => format!("{DEFAULT_USER_AGENT} {ua}"),
            None => DEFAULT_USER_AGENT.to_string(),
        };

        let mut http = reqwest::blocking::Client::builder().user_agent(user_agent);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(Client {
            endpoint,
            credentials,
            client: http.build()?,
        })
    }
}

/// API client.
///
/// Holds only immutable configuration, so it can be shared between threads.
pub struct Client {
    endpoint: Url,
    credentials: Credentials,
    client: reqwest::blocking::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new Client using an OAuth token.
    pub fn new(endpoint: &Url, token: &str) -> Result<Self, ClientBuilderError> {
        Self::builder().endpoint(endpoint).oauth_token(token).build()
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Creates a [Url] from the endpoint, the path, and the query options.
    ///
    /// # Errors
    /// - `InvalidPath` if joining would rewrite the path, as `.` and `..`
    ///   identifiers do.
    pub(crate) fn build_url(
        &self,
        path: &str,
        options: &impl QueryOptions,
    ) -> Result<Url, ClientError> {
        let mut url = self.endpoint.join(path)?;
        if !url.path().ends_with(path) {
            return Err(ClientError::InvalidPath(path.to_string()));
        }
        let query = options.to_query(Query::new());
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }
        Ok(url)
    }

    /// Sends the request, turning non-2xx statuses into an [ApiError].
    fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&impl Serialize>,
    ) -> Result<Response, ClientError> {
        debug!("{method} {url}");
        let mut req = self
            .credentials
            .apply(self.client.request(method, url))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send()?;
        debug!("{} {}", resp.status(), resp.url());
        if !resp.status().is_success() {
            return Err(ClientError::Api(ApiError::from_response(resp)));
        }
        Ok(resp)
    }

    /// Sends the request and decodes the JSON body.
    fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&impl Serialize>,
    ) -> Result<ApiResponse<T>, ClientError> {
        let resp = self.send(method, url, body)?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let text = resp.text()?;

        Ok(ApiResponse {
            status,
            headers,
            data: serde_json::from_str(&text)?,
            pagination: None,
        })
    }

    pub(crate) fn get<T: DeserializeOwned>(&self, url: Url) -> Result<ApiResponse<T>, ClientError> {
        self.send_json(Method::GET, url, None::<&()>)
    }

    pub(crate) fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.send_json(Method::POST, url, Some(body))
    }

    pub(crate) fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.send_json(Method::PUT, url, Some(body))
    }

    /// Sends a DELETE request, ignoring any body in the response.
    pub(crate) fn delete(&self, url: Url) -> Result<ApiResponse<()>, ClientError> {
        let resp = self.send(Method::DELETE, url, None::<&()>)?;

        Ok(ApiResponse {
            status: resp.status(),
            headers: resp.headers().clone(),
            data: (),
            pagination: None,
        })
    }
}
