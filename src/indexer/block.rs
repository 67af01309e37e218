use crate::client::{Client, Endpoint, RequestOptions};
use crate::models::Block;
use std::borrow::Cow;

/// `GET /v2/blocks/{round-number}`
#[derive(Debug, Clone)]
pub struct LookupBlock<'a> {
    client: &'a Client,
    options: RequestOptions,
    round: u64,
}

impl<'a> LookupBlock<'a> {
    pub(crate) fn new(client: &'a Client, round: u64) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            round,
        }
    }
}

impl Endpoint for LookupBlock<'_> {
    type Response = Block;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "blocks", self.round.to_string()]
    }
}

request_builder!(LookupBlock);
