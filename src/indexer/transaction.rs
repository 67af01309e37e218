use crate::client::{Client, Endpoint, RequestOptions, Result};
use crate::models::{AddressRole, SearchForTransactionsParams, SigType, TransactionsResponse, TxType};
use crate::query::{encode_bytes, encode_query, format_time};
use chrono::{DateTime, TimeZone};
use std::borrow::Cow;
use std::fmt;

/// `GET /v2/transactions`
///
/// Searches all transactions. Filters combine with AND; results are ordered
/// by round and offset within the round.
#[derive(Debug, Clone)]
pub struct SearchForTransactions<'a> {
    client: &'a Client,
    options: RequestOptions,
    params: SearchForTransactionsParams,
}

impl<'a> SearchForTransactions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            params: SearchForTransactionsParams::default(),
        }
    }

    /// Only transactions confirmed after this time. Sent as RFC 3339.
    pub fn after_time<Tz>(mut self, time: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.params.after_time = Some(format_time(&time));
        self
    }

    /// Only transactions confirmed before this time. Sent as RFC 3339.
    pub fn before_time<Tz>(mut self, time: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.params.before_time = Some(format_time(&time));
        self
    }

    /// Only transactions whose note starts with `prefix`. The raw bytes are
    /// base64 encoded here.
    pub fn note_prefix(mut self, prefix: impl AsRef<[u8]>) -> Self {
        self.params.note_prefix = Some(encode_bytes(prefix));
        self
    }
}

param_setters!(SearchForTransactions {
    address: impl Into<String>,
    address_role: AddressRole,
    application_id: u64,
    asset_id: u64,
    /// Amount filter. In MicroAlgos, or asset units when `asset_id` is set.
    currency_greater_than: u64,
    currency_less_than: u64,
    exclude_close_to: bool,
    /// Maximum number of results.
    limit: u64,
    max_round: u64,
    min_round: u64,
    next: impl Into<String>,
    rekey_to: bool,
    round: u64,
    sig_type: SigType,
    tx_type: TxType,
    /// Lookup a specific transaction by ID.
    tx_id: impl Into<String>,
});

impl Endpoint for SearchForTransactions<'_> {
    type Response = TransactionsResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "transactions"]
    }

    fn query(&self) -> Result<Option<String>> {
        Ok(encode_query(&self.params)?)
    }
}

request_builder!(SearchForTransactions);
