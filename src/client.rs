//! Email Hunter async client implementation.

use crate::error::{ApiErrorKind, DecodingError};
use crate::models::{
    AccountInformationResults, DomainSearchOptions, DomainSearchResults, EmailCountResults,
    EmailFinderOptions, EmailFinderResults, EmailType, EmailVerificationResults,
};
use crate::request::Method;
use crate::{Error, Request, Response, Result};
use flate2::read::GzDecoder;
use reqwest::Url;
use reqwest::header::{
    ACCEPT_ENCODING, CONNECTION, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap,
    HeaderValue, USER_AGENT,
};
use serde::de::DeserializeOwned;
use std::fmt;
use std::io::Read;
use std::time::Duration;

/// Async client for the Email Hunter API.
///
/// Use [`Client::new`] with an API key for defaults or [`Client::builder`]
/// for custom settings like a proxy, a timeout or a different host.
/// Cloning is cheap and clones share one connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: Url,
    user_agent: HeaderValue,
    proxy: Option<String>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("proxy", &self.proxy)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the public API host.
    ///
    /// Fails with [`Error::Configuration`] when `api_key` is empty.
    ///
    /// # Examples
    /// ```no_run
    /// # use email_hunter::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), email_hunter::Error> {
    /// let client = Client::new("my-api-key")?;
    /// let count = client.email_count("stripe.com").await?;
    /// println!("{}", count.count);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// The host requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform one authenticated round-trip.
    ///
    /// Appends the `api_key` query parameter, sets the transport headers,
    /// decompresses gzip bodies and classifies the status code. The method,
    /// path and body are checked before anything touches the network.
    ///
    /// # Errors
    /// - [`Error::Configuration`] if no API key is configured
    /// - [`Error::UnsupportedMethod`] for verbs other than GET, POST, PUT, PATCH, DELETE
    /// - [`Error::Validation`] if the path cannot be joined onto the host
    /// - [`Error::Encoding`] if the body cannot be serialized
    /// - [`Error::Network`] if the HTTP call fails
    /// - [`Error::Decoding`] if a gzip body does not decompress
    /// - [`Error::Api`] for any status outside 200..=298
    pub async fn send(&self, request: Request) -> Result<Response> {
        if self.api_key.is_empty() {
            return Err(Error::Configuration("API key not provided".to_string()));
        }

        let parts = request.into_parts();
        let method: Method = parts.method.parse()?;

        let mut url = self
            .base_url
            .join(&parts.path)
            .map_err(|e| Error::Validation(format!("invalid path {:?}: {e}", parts.path)))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in parts.query.iter().filter(|(key, _)| key != API_KEY_PARAM) {
                pairs.append_pair(key, value);
            }
            pairs.append_pair(API_KEY_PARAM, &self.api_key);
        }

        let body = match &parts.body {
            Some(value) => serde_json::to_vec(value).map_err(Error::Encoding)?,
            None => Vec::new(),
        };

        let mut headers = parts.headers;
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        headers.insert(CONNECTION, HeaderValue::from_static("Keep-Alive"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, self.user_agent.clone());

        // The URL carries the API key, so only the path is logged.
        tracing::debug!(%method, path = %url.path(), "sending request");

        let response = self
            .http
            .request(method.into(), url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let raw = response.bytes().await.map_err(network_error)?;
        let body = if is_gzip(&headers) {
            gunzip(&raw)?
        } else {
            raw.to_vec()
        };

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !is_success(status.as_u16()) {
            let kind = ApiErrorKind::from_status(status.as_u16());
            tracing::debug!(status = status.as_u16(), %kind, "request rejected");
            return Err(Error::Api {
                status: status.as_u16(),
                kind,
            });
        }

        Ok(Response {
            status,
            headers,
            body,
        })
    }

    /// Search the addresses known for a domain or company.
    ///
    /// # Examples
    /// ```no_run
    /// # use email_hunter::{Client, DomainSearchOptions, EmailType};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), email_hunter::Error> {
    /// let client = Client::new("my-api-key")?;
    /// let options = DomainSearchOptions::domain("stripe.com").email_type(EmailType::Personal);
    /// let results = client.domain_search(&options).await?;
    /// for email in results.emails {
    ///     println!("{} ({})", email.value, email.confidence);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn domain_search(
        &self,
        options: &DomainSearchOptions,
    ) -> Result<DomainSearchResults> {
        let mut request = with_organization(
            Request::get("/v1/search"),
            options.domain.as_deref(),
            options.company.as_deref(),
        )?;

        if options.offset > 0 {
            request = request.query("offset", options.offset.to_string());
        }

        if let Some(email_type) = options.email_type.as_ref().and_then(EmailType::as_query) {
            request = request.query("type", email_type);
        }

        self.get_json(request).await
    }

    /// Find the most likely address of a person at an organization.
    ///
    /// # Examples
    /// ```no_run
    /// # use email_hunter::{Client, EmailFinderOptions};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), email_hunter::Error> {
    /// let client = Client::new("my-api-key")?;
    /// let options = EmailFinderOptions::new("asana.com", "Dustin", "Moskovitz");
    /// let found = client.email_finder(&options).await?;
    /// println!("{} ({})", found.email, found.score);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn email_finder(&self, options: &EmailFinderOptions) -> Result<EmailFinderResults> {
        let request = with_organization(
            Request::get("/v1/generate"),
            options.domain.as_deref(),
            options.company.as_deref(),
        )?;

        if options.first_name.is_empty() {
            return Err(Error::Validation("a first name is required".to_string()));
        }
        if options.last_name.is_empty() {
            return Err(Error::Validation("a last name is required".to_string()));
        }

        let request = request
            .query("first_name", options.first_name.as_str())
            .query("last_name", options.last_name.as_str());

        self.get_json(request).await
    }

    /// Run the deliverability checks for one address.
    pub async fn email_verification(&self, email: &str) -> Result<EmailVerificationResults> {
        if email.is_empty() {
            return Err(Error::Validation("an email is required".to_string()));
        }

        self.get_json(Request::get("/v1/verify").query("email", email)).await
    }

    /// Count the addresses known for a domain.
    pub async fn email_count(&self, domain: &str) -> Result<EmailCountResults> {
        if domain.is_empty() {
            return Err(Error::Validation("a domain is required".to_string()));
        }

        self.get_json(Request::get("/v1/email-count").query("domain", domain)).await
    }

    /// Fetch plan and usage information for the API key.
    pub async fn account_information(&self) -> Result<AccountInformationResults> {
        self.get_json(Request::get("/v1/account")).await
    }

    /// Common GET-and-decode pattern shared by the endpoints.
    async fn get_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        self.send(request).await?.json()
    }
}

const API_KEY_PARAM: &str = "api_key";
const BASE_URL: &str = "https://api.emailhunter.co/";
const USER_AGENT_VALUE: &str = concat!("email-hunter-client/", env!("CARGO_PKG_VERSION"));

/// Add `domain` and `company` (whichever are non-empty), requiring at least one.
fn with_organization(
    mut request: Request,
    domain: Option<&str>,
    company: Option<&str>,
) -> Result<Request> {
    let domain = domain.filter(|d| !d.is_empty());
    let company = company.filter(|c| !c.is_empty());

    if domain.is_none() && company.is_none() {
        return Err(Error::Validation(
            "at least a domain or a company is required".to_string(),
        ));
    }

    if let Some(domain) = domain {
        request = request.query("domain", domain);
    }
    if let Some(company) = company {
        request = request.query("company", company);
    }
    Ok(request)
}

/// Drop the URL from transport errors; its query string holds the API key.
fn network_error(err: reqwest::Error) -> Error {
    Error::Network(err.without_url())
}

fn http_client_error(err: reqwest::Error) -> Error {
    Error::Configuration(format!("failed to build HTTP client: {err}"))
}

/// Success is a status strictly between 199 and 299.
fn is_success(status: u16) -> bool {
    status > 199 && status < 299
}

fn is_gzip(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("gzip"))
}

fn gunzip(raw: &[u8]) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    GzDecoder::new(raw)
        .read_to_end(&mut body)
        .map_err(DecodingError::Gzip)?;
    Ok(body)
}

/// Builder for configuring an Email Hunter client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No API key (must be set before [`build`](Self::build))
    /// - Public API host `https://api.emailhunter.co/`
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - `email-hunter-client/<version>` user agent
    /// - No timeout
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            base_url: BASE_URL.to_string(),
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: None,
        }
    }

    /// Set the API key sent with every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Override the API host.
    ///
    /// Useful for testing against a local server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Total time allowed for each request, from connect to the last body byte.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// No network request is made here.
    ///
    /// # Examples
    /// ```
    /// # use email_hunter::Client;
    /// # use std::time::Duration;
    /// let client = Client::builder()
    ///     .api_key("my-api-key")
    ///     .user_agent("my-app/1.0")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.base_url().as_str(), "https://api.emailhunter.co/");
    /// ```
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Configuration("API key not provided".to_string()));
        }

        let base_url = Url::parse(&self.base_url).map_err(|e| {
            Error::Configuration(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;

        let user_agent = HeaderValue::from_str(&self.user_agent).map_err(|_| {
            Error::Configuration(format!("invalid user agent {:?}", self.user_agent))
        })?;

        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                Error::Configuration(format!("invalid proxy {proxy_url:?}: {e}"))
            })?;
            builder = builder.proxy(proxy);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(http_client_error)?;

        Ok(Client {
            http,
            api_key: self.api_key,
            base_url,
            user_agent,
            proxy: self.proxy,
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .field("danger_accept_invalid_certs", &self.danger_accept_invalid_certs)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
