//! Async HTTP transport shared by the node and indexer clients.
//!
//! Every endpoint builder describes its request through [`Endpoint`]; the
//! [`Client`] turns that description into exactly one HTTP call and decodes
//! the reply.

use crate::config::ClientConfig;
use crate::models::ErrorResponse;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Error returned by the service with a non-success status.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("status {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    /// Server-supplied message, or the raw body when it was not the usual
    /// `{"message": ..}` payload.
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if let Ok(payload) = serde_json::from_slice::<ErrorResponse>(body) {
            if !payload.message.is_empty() {
                return Self {
                    status: status.as_u16(),
                    message: payload.message,
                    data: payload.data,
                };
            }
        }

        let text = String::from_utf8_lossy(body).trim().to_string();
        let message = if text.is_empty() {
            status.canonical_reason().unwrap_or("unknown status").to_string()
        } else {
            text
        };
        Self {
            status: status.as_u16(),
            message,
            data: None,
        }
    }
}

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("request cancelled")]
    Cancelled,
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request did not complete: network failure, deadline, cancellation
    /// or a request that could not be built.
    Transport,
    /// A response arrived but could not be turned into the declared shape,
    /// including non-success statuses.
    Decode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(err) if err.is_decode() => ErrorKind::Decode,
            Error::Api(_) | Error::Json(_) => ErrorKind::Decode,
            Error::Http(_)
            | Error::Url(_)
            | Error::Query(_)
            | Error::InvalidHeader(_)
            | Error::InvalidPath(_)
            | Error::Cancelled => ErrorKind::Transport,
        }
    }

    /// Returns `true` if the request ran past its timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(err) if err.is_timeout())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// HTTP status of a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            Error::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Serialized JSON, sent as `application/json`.
    Json(Vec<u8>),
    /// Opaque bytes, sent as `application/x-binary`.
    Binary(Vec<u8>),
    /// Sent as `text/plain`.
    Text(String),
}

impl Body {
    fn content_type(&self) -> &'static str {
        match self {
            Body::Json(_) => "application/json",
            Body::Binary(_) => "application/x-binary",
            Body::Text(_) => "text/plain",
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        match self {
            Body::Json(bytes) | Body::Binary(bytes) => bytes,
            Body::Text(text) => text.into_bytes(),
        }
    }
}

/// Description of a single API call.
pub trait Endpoint {
    type Response: DeserializeOwned;

    fn method(&self) -> Method {
        Method::GET
    }

    /// Path relative to the service root, one entry per segment. Each entry
    /// is escaped into exactly one segment, so a path parameter can never
    /// change the route.
    fn path(&self) -> Vec<Cow<'_, str>>;

    fn query(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn body(&self) -> Result<Option<Body>> {
        Ok(None)
    }

    fn decode(body: &[u8]) -> Result<Self::Response> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Per-call settings collected by the builders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Overrides the client-wide timeout for this call.
    pub fn timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    fn header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let (name, value) = parse_header(name, value)?;
            headers.append(name, value);
        }
        Ok(headers)
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| Error::InvalidHeader(format!("bad header name {name:?}")))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| Error::InvalidHeader(format!("bad value for header {name:?}")))?;
    Ok((header_name, header_value))
}

/// Connection to one API: base address, auth header and HTTP pool.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
}

impl Client {
    /// Builds a client that sends `config.token` in the `auth_header` header.
    pub fn new(config: &ClientConfig, auth_header: &'static str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }
        if !config.token.is_empty() {
            let mut token = HeaderValue::from_str(&config.token)
                .map_err(|_| Error::InvalidHeader(format!("bad value for header {auth_header:?}")))?;
            token.set_sensitive(true);
            headers.insert(HeaderName::from_static(auth_header), token);
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.http_timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(Self {
            http: builder.build()?,
            base: config.address.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolves the full request URL of `endpoint` without any I/O.
    ///
    /// Empty, `.` and `..` segments are rejected: URL normalization would
    /// drop or resolve them and the request would reach another endpoint.
    pub fn url<E: Endpoint>(&self, endpoint: &E) -> Result<Url> {
        let segments = endpoint.path();
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(segment.as_ref(), "" | "." | ".."))
        {
            return Err(Error::InvalidPath(format!(
                "path parameter {segment:?} is not a valid segment"
            )));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidPath(format!("{} cannot be a base URL", self.base)))?
            .pop_if_empty()
            .extend(&segments);
        url.set_query(endpoint.query()?.as_deref());
        Ok(url)
    }

    /// Issues the request described by `endpoint` and decodes the reply.
    pub async fn execute<E: Endpoint>(
        &self,
        endpoint: &E,
        options: &RequestOptions,
    ) -> Result<E::Response> {
        let method = endpoint.method();
        let url = self.url(endpoint)?;
        log::debug!("{method} {url}");

        let mut request = self
            .http
            .request(method, url)
            .headers(options.header_map()?);
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }
        if let Some(body) = endpoint.body()? {
            request = request
                .header(CONTENT_TYPE, body.content_type())
                .body(body.into_bytes());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            log::warn!("request failed with {status}: {}", err.message);
            return Err(err.into());
        }

        log::trace!("response body: {}", String::from_utf8_lossy(&body));
        E::decode(&body)
    }

    /// Like [`execute`](Self::execute), but gives up with [`Error::Cancelled`]
    /// as soon as `signal` completes. The in-flight request is dropped.
    pub async fn execute_until<E, F>(
        &self,
        endpoint: &E,
        options: &RequestOptions,
        signal: F,
    ) -> Result<E::Response>
    where
        E: Endpoint,
        F: Future,
    {
        tokio::select! {
            biased;
            _ = signal => {
                log::debug!("request to /{} cancelled", endpoint.path().join("/"));
                Err(Error::Cancelled)
            }
            result = self.execute(endpoint, options) => result,
        }
    }
}
