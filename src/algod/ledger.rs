use crate::client::{Client, Endpoint, RequestOptions};
use crate::models::{Application, Asset, SupplyResponse};
use std::borrow::Cow;

/// `GET /v2/applications/{application-id}`
#[derive(Debug, Clone)]
pub struct ApplicationById<'a> {
    client: &'a Client,
    options: RequestOptions,
    application_id: u64,
}

impl<'a> ApplicationById<'a> {
    pub(crate) fn new(client: &'a Client, application_id: u64) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            application_id,
        }
    }
}

impl Endpoint for ApplicationById<'_> {
    type Response = Application;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "applications", self.application_id.to_string()]
    }
}

/// `GET /v2/assets/{asset-id}`
#[derive(Debug, Clone)]
pub struct AssetById<'a> {
    client: &'a Client,
    options: RequestOptions,
    asset_id: u64,
}

impl<'a> AssetById<'a> {
    pub(crate) fn new(client: &'a Client, asset_id: u64) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            asset_id,
        }
    }
}

impl Endpoint for AssetById<'_> {
    type Response = Asset;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "assets", self.asset_id.to_string()]
    }
}

/// `GET /v2/ledger/supply`
#[derive(Debug, Clone)]
pub struct Supply<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> Supply<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }
}

impl Endpoint for Supply<'_> {
    type Response = SupplyResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "ledger", "supply"]
    }
}

request_builder!(ApplicationById, AssetById, Supply);

#[cfg(test)]
mod tests {
    use crate::algod::tests::client;

    #[test]
    fn paths() {
        let client = client();
        assert_eq!(client.application_by_id(42).url().unwrap().path(), "/v2/applications/42");
        assert_eq!(client.asset_by_id(0).url().unwrap().path(), "/v2/assets/0");
        assert_eq!(client.supply().url().unwrap().path(), "/v2/ledger/supply");
    }
}
