use crate::client::{Client, Endpoint, RequestOptions, Result};
use crate::models::{
    AccountResponse, AccountsResponse, LookupAccountByIdParams, LookupAccountTransactionsParams,
    SearchForAccountsParams, SigType, TransactionsResponse, TxType,
};
use crate::query::{encode_bytes, encode_query, format_time};
use chrono::{DateTime, TimeZone};
use std::borrow::Cow;
use std::fmt;

/// `GET /v2/accounts`
#[derive(Debug, Clone)]
pub struct SearchForAccounts<'a> {
    client: &'a Client,
    options: RequestOptions,
    params: SearchForAccountsParams,
}

impl<'a> SearchForAccounts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            params: SearchForAccountsParams::default(),
        }
    }
}

param_setters!(SearchForAccounts {
    /// Only accounts that opted into this application.
    application_id: u64,
    /// Only accounts holding this asset. Currency filters then apply to the
    /// asset amount.
    asset_id: u64,
    /// Only accounts rekeyed to this address.
    auth_addr: impl Into<String>,
    currency_greater_than: u64,
    currency_less_than: u64,
    limit: u64,
    /// Page token from a previous response.
    next: impl Into<String>,
    /// Account state as of this round.
    round: u64,
});

impl Endpoint for SearchForAccounts<'_> {
    type Response = AccountsResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "accounts"]
    }

    fn query(&self) -> Result<Option<String>> {
        Ok(encode_query(&self.params)?)
    }
}

/// `GET /v2/accounts/{account-id}`
#[derive(Debug, Clone)]
pub struct LookupAccountById<'a> {
    client: &'a Client,
    options: RequestOptions,
    account_id: String,
    params: LookupAccountByIdParams,
}

impl<'a> LookupAccountById<'a> {
    pub(crate) fn new(client: &'a Client, account_id: String) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            account_id,
            params: LookupAccountByIdParams::default(),
        }
    }
}

param_setters!(LookupAccountById {
    /// Account state as of this round.
    round: u64,
});

impl Endpoint for LookupAccountById<'_> {
    type Response = AccountResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "accounts", &self.account_id]
    }

    fn query(&self) -> Result<Option<String>> {
        Ok(encode_query(&self.params)?)
    }
}

/// `GET /v2/accounts/{account-id}/transactions`
#[derive(Debug, Clone)]
pub struct LookupAccountTransactions<'a> {
    client: &'a Client,
    options: RequestOptions,
    account_id: String,
    params: LookupAccountTransactionsParams,
}

impl<'a> LookupAccountTransactions<'a> {
    pub(crate) fn new(client: &'a Client, account_id: String) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            account_id,
            params: LookupAccountTransactionsParams::default(),
        }
    }

    /// Only transactions confirmed after this time.
    pub fn after_time<Tz>(mut self, time: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.params.after_time = Some(format_time(&time));
        self
    }

    /// Only transactions confirmed before this time.
    pub fn before_time<Tz>(mut self, time: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.params.before_time = Some(format_time(&time));
        self
    }

    /// Only transactions whose note starts with `prefix`.
    pub fn note_prefix(mut self, prefix: impl AsRef<[u8]>) -> Self {
        self.params.note_prefix = Some(encode_bytes(prefix));
        self
    }
}

param_setters!(LookupAccountTransactions {
    asset_id: u64,
    currency_greater_than: u64,
    currency_less_than: u64,
    limit: u64,
    max_round: u64,
    min_round: u64,
    next: impl Into<String>,
    /// Only rekey transactions when `true`.
    rekey_to: bool,
    round: u64,
    sig_type: SigType,
    tx_type: TxType,
    tx_id: impl Into<String>,
});

impl Endpoint for LookupAccountTransactions<'_> {
    type Response = TransactionsResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "accounts", &self.account_id, "transactions"]
    }

    fn query(&self) -> Result<Option<String>> {
        Ok(encode_query(&self.params)?)
    }
}

request_builder!(SearchForAccounts, LookupAccountById, LookupAccountTransactions);

#[cfg(test)]
mod tests {
    use crate::client::Error;
    use crate::indexer::tests::client;
    use crate::models::{SigType, TxType};
    use chrono::{TimeZone, Utc};

    #[test]
    fn search_for_accounts_query() {
        let client = client();
        let url = client
            .search_for_accounts()
            .asset_id(31566704)
            .currency_greater_than(0)
            .limit(2)
            .url()
            .unwrap();
        assert_eq!(url.path(), "/v2/accounts");
        assert_eq!(
            url.query(),
            Some("asset-id=31566704&currency-greater-than=0&limit=2")
        );
    }

    #[test]
    fn lookup_account_round_zero_is_sent() {
        let client = client();
        assert_eq!(client.lookup_account_by_id("ADDR").url().unwrap().query(), None);
        let url = client.lookup_account_by_id("ADDR").round(0).url().unwrap();
        assert_eq!(url.path(), "/v2/accounts/ADDR");
        assert_eq!(url.query(), Some("round=0"));
    }

    #[test]
    fn account_transactions_filters() {
        let client = client();
        let url = client
            .lookup_account_transactions("ADDR")
            .before_time(Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap())
            .note_prefix("hi")
            .sig_type(SigType::Sig)
            .tx_type(TxType::Pay)
            .url()
            .unwrap();
        assert_eq!(url.path(), "/v2/accounts/ADDR/transactions");
        assert_eq!(
            url.query(),
            Some("before-time=2021-06-01T12%3A00%3A00Z&note-prefix=aGk%3D&sig-type=sig&tx-type=pay")
        );
    }

    #[test]
    fn account_id_stays_one_segment() {
        let client = client();
        let url = client.lookup_account_by_id("A/B").url().unwrap();
        assert_eq!(url.path(), "/v2/accounts/A%2FB");
        let url = client.lookup_account_transactions("A?B%").url().unwrap();
        assert_eq!(url.path(), "/v2/accounts/A%3FB%25/transactions");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn dot_segments_are_rejected() {
        let client = client();
        for account in ["..", ".", ""] {
            let err = client.lookup_account_transactions(account).url().unwrap_err();
            assert!(matches!(err, Error::InvalidPath(_)), "{account:?}: {err}");
            let err = client.lookup_account_by_id(account).url().unwrap_err();
            assert!(matches!(err, Error::InvalidPath(_)), "{account:?}: {err}");
        }
    }
}
