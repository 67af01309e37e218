use crate::client::{Client, Endpoint, RequestOptions, Result};
use crate::models::{
    AddressRole, AssetBalancesResponse, AssetResponse, AssetsResponse, LookupAssetBalancesParams,
    LookupAssetTransactionsParams, SearchForAssetsParams, SigType, TransactionsResponse, TxType,
};
use crate::query::{encode_bytes, encode_query, format_time};
use chrono::{DateTime, TimeZone};
use std::borrow::Cow;
use std::fmt;

/// `GET /v2/assets`
#[derive(Debug, Clone)]
pub struct SearchForAssets<'a> {
    client: &'a Client,
    options: RequestOptions,
    params: SearchForAssetsParams,
}

impl<'a> SearchForAssets<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            params: SearchForAssetsParams::default(),
        }
    }
}

param_setters!(SearchForAssets {
    asset_id: u64,
    /// Only assets created by this address.
    creator: impl Into<String>,
    limit: u64,
    /// Asset name, matched as a prefix by the indexer.
    name: impl Into<String>,
    next: impl Into<String>,
    /// Unit name, matched as a prefix by the indexer.
    unit: impl Into<String>,
});

impl Endpoint for SearchForAssets<'_> {
    type Response = AssetsResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "assets"]
    }

    fn query(&self) -> Result<Option<String>> {
        Ok(encode_query(&self.params)?)
    }
}

/// `GET /v2/assets/{asset-id}`
#[derive(Debug, Clone)]
pub struct LookupAssetById<'a> {
    client: &'a Client,
    options: RequestOptions,
    asset_id: u64,
}

impl<'a> LookupAssetById<'a> {
    pub(crate) fn new(client: &'a Client, asset_id: u64) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            asset_id,
        }
    }
}

impl Endpoint for LookupAssetById<'_> {
    type Response = AssetResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "assets", self.asset_id.to_string()]
    }
}

/// `GET /v2/assets/{asset-id}/balances`
#[derive(Debug, Clone)]
pub struct LookupAssetBalances<'a> {
    client: &'a Client,
    options: RequestOptions,
    asset_id: u64,
    params: LookupAssetBalancesParams,
}

impl<'a> LookupAssetBalances<'a> {
    pub(crate) fn new(client: &'a Client, asset_id: u64) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            asset_id,
            params: LookupAssetBalancesParams::default(),
        }
    }
}

param_setters!(LookupAssetBalances {
    /// Only holdings above this amount, in asset units.
    currency_greater_than: u64,
    currency_less_than: u64,
    limit: u64,
    next: impl Into<String>,
    round: u64,
});

impl Endpoint for LookupAssetBalances<'_> {
    type Response = AssetBalancesResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "assets", self.asset_id.to_string(), "balances"]
    }

    fn query(&self) -> Result<Option<String>> {
        Ok(encode_query(&self.params)?)
    }
}

/// `GET /v2/assets/{asset-id}/transactions`
#[derive(Debug, Clone)]
pub struct LookupAssetTransactions<'a> {
    client: &'a Client,
    options: RequestOptions,
    asset_id: u64,
    params: LookupAssetTransactionsParams,
}

impl<'a> LookupAssetTransactions<'a> {
    pub(crate) fn new(client: &'a Client, asset_id: u64) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            asset_id,
            params: LookupAssetTransactionsParams::default(),
        }
    }

    pub fn after_time<Tz>(mut self, time: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.params.after_time = Some(format_time(&time));
        self
    }

    pub fn before_time<Tz>(mut self, time: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.params.before_time = Some(format_time(&time));
        self
    }

    pub fn note_prefix(mut self, prefix: impl AsRef<[u8]>) -> Self {
        self.params.note_prefix = Some(encode_bytes(prefix));
        self
    }
}

param_setters!(LookupAssetTransactions {
    /// Only transactions involving this address. Narrow the match with
    /// `address_role`.
    address: impl Into<String>,
    address_role: AddressRole,
    currency_greater_than: u64,
    currency_less_than: u64,
    /// Do not count close-to addresses as receivers.
    exclude_close_to: bool,
    limit: u64,
    max_round: u64,
    min_round: u64,
    next: impl Into<String>,
    rekey_to: bool,
    round: u64,
    sig_type: SigType,
    tx_type: TxType,
    tx_id: impl Into<String>,
});

impl Endpoint for LookupAssetTransactions<'_> {
    type Response = TransactionsResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "assets", self.asset_id.to_string(), "transactions"]
    }

    fn query(&self) -> Result<Option<String>> {
        Ok(encode_query(&self.params)?)
    }
}

request_builder!(
    SearchForAssets,
    LookupAssetById,
    LookupAssetBalances,
    LookupAssetTransactions,
);
