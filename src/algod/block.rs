use crate::client::{Client, Endpoint, RequestOptions};
use crate::models::BlockResponse;
use std::borrow::Cow;

/// `GET /v2/blocks/{round}`
#[derive(Debug, Clone)]
pub struct GetBlock<'a> {
    client: &'a Client,
    options: RequestOptions,
    round: u64,
}

impl<'a> GetBlock<'a> {
    pub(crate) fn new(client: &'a Client, round: u64) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            round,
        }
    }
}

impl Endpoint for GetBlock<'_> {
    type Response = BlockResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "blocks", self.round.to_string()]
    }
}

request_builder!(GetBlock);

#[cfg(test)]
mod tests {
    use crate::algod::tests::client;

    #[test]
    fn round_in_path() {
        let client = client();
        let url = client.block(1234).url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:4001/v2/blocks/1234");
    }
}
