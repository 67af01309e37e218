use serde::Deserialize;
use serde_with::{DurationSeconds, serde_as};
use std::{collections::BTreeMap, fmt, time::Duration};
use url::Url;

/// Settings shared by [`AlgodClient`](crate::AlgodClient) and
/// [`IndexerClient`](crate::IndexerClient).
///
/// Deserializable so it can be embedded into an application's own settings:
///
/// ```
/// # use algorand_client::ClientConfig;
/// let config: ClientConfig = serde_json::from_str(
///     r#"{"address": "http://localhost:8980", "http_timeout": 5}"#,
/// ).unwrap();
/// assert_eq!(config.http_timeout.as_secs(), 5);
/// ```
#[serde_as]
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base address of the API. Any path it carries is kept as a prefix of
    /// every endpoint path.
    pub address: Url,
    /// API token, sent in the service's auth header. Not sent when empty.
    #[serde(default)]
    pub token: String,
    /// Upper bound for a whole request, in seconds when deserialized.
    /// Defaults to 30 seconds. Individual calls may override it.
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "defaults::http_timeout")]
    pub http_timeout: Duration,
    /// Headers attached to every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

// Manual impl keeps the token out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() {
            "<empty>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ClientConfig")
            .field("address", &self.address.as_str())
            .field("token", &token)
            .field("http_timeout", &self.http_timeout)
            .field("headers", &self.headers)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(address: Url) -> Self {
        Self {
            address,
            token: String::new(),
            http_timeout: defaults::http_timeout(),
            headers: BTreeMap::new(),
            user_agent: None,
        }
    }

    /// Parses `address` and builds a config around it.
    pub fn parse(address: &str) -> Result<Self, url::ParseError> {
        Url::parse(address).map(Self::new)
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Adds a header sent with every request, replacing an earlier one with
    /// the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

mod defaults {
    use std::time::Duration;

    pub fn http_timeout() -> Duration {
        Duration::from_secs(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"address": "http://localhost:4001"}"#).unwrap();
        assert_eq!(config.address.as_str(), "http://localhost:4001/");
        assert_eq!(config.token, "");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.headers.is_empty());
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn deserialize_full() {
        let config: ClientConfig = serde_json::from_str(
            r#"{
                "address": "https://node.example.com/algod",
                "token": "secret",
                "http_timeout": 3,
                "headers": {"x-team": "infra"},
                "user_agent": "monitor/1.0"
            }"#,
        )
        .unwrap();
        assert_eq!(config.token, "secret");
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.headers["x-team"], "infra");
        assert_eq!(config.user_agent.as_deref(), Some("monitor/1.0"));
    }

    #[test]
    fn builder_mutators() {
        let config = ClientConfig::parse("http://localhost:8980")
            .unwrap()
            .token("t")
            .http_timeout(Duration::from_millis(500))
            .header("a", "1")
            .header("a", "2")
            .user_agent("ua");
        assert_eq!(config.token, "t");
        assert_eq!(config.http_timeout, Duration::from_millis(500));
        assert_eq!(config.headers.len(), 1);
        assert_eq!(config.headers["a"], "2");
        assert_eq!(config.user_agent.as_deref(), Some("ua"));
    }

    #[test]
    fn debug_hides_token() {
        let config = ClientConfig::parse("http://localhost:4001")
            .unwrap()
            .token("very-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("very-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn rejects_relative_address() {
        assert!(ClientConfig::parse("localhost").is_err());
    }
}
