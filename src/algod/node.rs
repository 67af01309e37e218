//! Node-level endpoints outside `/v2`.

use crate::client::{Client, Endpoint, RequestOptions, Result};
use crate::models::Version;
use std::borrow::Cow;

/// `GET /health`. Succeeds with an empty body when the node is healthy.
#[derive(Debug, Clone)]
pub struct Health<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> Health<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }
}

impl Endpoint for Health<'_> {
    type Response = String;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["health"]
    }

    fn decode(body: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(body).into_owned())
    }
}

/// `GET /metrics`
#[derive(Debug, Clone)]
pub struct Metrics<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> Metrics<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }
}

impl Endpoint for Metrics<'_> {
    type Response = String;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["metrics"]
    }

    fn decode(body: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(body).into_owned())
    }
}

/// `GET /swagger.json`
#[derive(Debug, Clone)]
pub struct SwaggerJson<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> SwaggerJson<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }
}

impl Endpoint for SwaggerJson<'_> {
    type Response = serde_json::Value;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["swagger.json"]
    }
}

/// `GET /versions`
#[derive(Debug, Clone)]
pub struct Versions<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> Versions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }
}

impl Endpoint for Versions<'_> {
    type Response = Version;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["versions"]
    }
}

request_builder!(Health, Metrics, SwaggerJson, Versions);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algod::tests::client;

    #[test]
    fn paths() {
        let client = client();
        assert_eq!(client.health_check().url().unwrap().path(), "/health");
        assert_eq!(client.metrics().url().unwrap().path(), "/metrics");
        assert_eq!(client.swagger_json().url().unwrap().path(), "/swagger.json");
        assert_eq!(client.versions().url().unwrap().path(), "/versions");
    }

    #[test]
    fn text_endpoints_keep_body_verbatim() {
        let body = b"# HELP algod_ledger_round\nalgod_ledger_round 12\n";
        assert_eq!(
            Metrics::decode(body).unwrap(),
            String::from_utf8_lossy(body)
        );
        assert_eq!(Health::decode(b"").unwrap(), "");
    }
}
