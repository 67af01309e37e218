use crate::client::{Client, Endpoint, RequestOptions};
use crate::models::NodeStatusResponse;
use std::borrow::Cow;

/// `GET /v2/status`
#[derive(Debug, Clone)]
pub struct Status<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> Status<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }
}

impl Endpoint for Status<'_> {
    type Response = NodeStatusResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "status"]
    }
}

/// `GET /v2/status/wait-for-block-after/{round}`
///
/// This call is long-polling; give it a timeout above a minute or rely on
/// `execute_until` to stop waiting.
#[derive(Debug, Clone)]
pub struct WaitForBlock<'a> {
    client: &'a Client,
    options: RequestOptions,
    round: u64,
}

impl<'a> WaitForBlock<'a> {
    pub(crate) fn new(client: &'a Client, round: u64) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            round,
        }
    }
}

impl Endpoint for WaitForBlock<'_> {
    type Response = NodeStatusResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "status", "wait-for-block-after", self.round.to_string()]
    }
}

request_builder!(Status, WaitForBlock);

#[cfg(test)]
mod tests {
    use crate::algod::tests::client;

    #[test]
    fn paths() {
        let client = client();
        assert_eq!(client.status().url().unwrap().path(), "/v2/status");
        assert_eq!(
            client.wait_for_block(77).url().unwrap().path(),
            "/v2/status/wait-for-block-after/77"
        );
    }
}
