use crate::client::{Client, Endpoint, RequestOptions};
use crate::models::HealthCheck;
use std::borrow::Cow;

/// `GET /health`
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
    type Response = HealthCheck;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["health"]
    }
}

request_builder!(Health);
