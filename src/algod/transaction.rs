use crate::client::{Body, Client, Endpoint, RequestOptions, Result};
use crate::models::{
    PendingTransactionResponse, PendingTransactionsParams, PendingTransactionsResponse,
    PostTransactionsResponse, TransactionParametersResponse,
};
use crate::query::encode_query;
use reqwest::Method;
use std::borrow::Cow;

/// `POST /v2/transactions`
///
/// The body is one or more concatenated msgpack-encoded signed transactions,
/// sent as-is.
#[derive(Debug, Clone)]
pub struct RawTransaction<'a> {
    client: &'a Client,
    options: RequestOptions,
    signed: Vec<u8>,
}

impl<'a> RawTransaction<'a> {
    pub(crate) fn new(client: &'a Client, signed: Vec<u8>) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            signed,
        }
    }
}

impl Endpoint for RawTransaction<'_> {
    type Response = PostTransactionsResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "transactions"]
    }

    fn body(&self) -> Result<Option<Body>> {
        Ok(Some(Body::Binary(self.signed.clone())))
    }
}

/// `GET /v2/transactions/params`
#[derive(Debug, Clone)]
pub struct TransactionParams<'a> {
    client: &'a Client,
    options: RequestOptions,
}

impl<'a> TransactionParams<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }
}

impl Endpoint for TransactionParams<'_> {
    type Response = TransactionParametersResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "transactions", "params"]
    }
}

/// `GET /v2/transactions/pending`
#[derive(Debug, Clone)]
pub struct PendingTransactions<'a> {
    client: &'a Client,
    options: RequestOptions,
    params: PendingTransactionsParams,
}

impl<'a> PendingTransactions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            params: PendingTransactionsParams::default(),
        }
    }

    /// Truncates the listing to at most `max` transactions. Zero means all.
    pub fn max(mut self, max: u64) -> Self {
        self.params.max = Some(max);
        self
    }
}

impl Endpoint for PendingTransactions<'_> {
    type Response = PendingTransactionsResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "transactions", "pending"]
    }

    fn query(&self) -> Result<Option<String>> {
        Ok(encode_query(&self.params)?)
    }
}

/// `GET /v2/transactions/pending/{txid}`
///
/// Works for transactions still in the pool and for ones committed
/// recently; older transactions are only available from the indexer.
#[derive(Debug, Clone)]
pub struct PendingTransactionInformation<'a> {
    client: &'a Client,
    options: RequestOptions,
    tx_id: String,
}

impl<'a> PendingTransactionInformation<'a> {
    pub(crate) fn new(client: &'a Client, tx_id: String) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            tx_id,
        }
    }
}

impl Endpoint for PendingTransactionInformation<'_> {
    type Response = PendingTransactionResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "transactions", "pending", &self.tx_id]
    }
}

request_builder!(
    RawTransaction,
    TransactionParams,
    PendingTransactions,
    PendingTransactionInformation,
);

#[cfg(test)]
mod tests {
    use crate::algod::tests::client;
    use crate::client::{Body, Endpoint};
    use reqwest::Method;

    #[test]
    fn raw_transaction_posts_bytes() {
        let client = client();
        let send = client.raw_transaction(vec![0x82, 0xa3]);
        assert_eq!(send.method(), Method::POST);
        assert_eq!(send.url().unwrap().path(), "/v2/transactions");
        assert_eq!(send.body().unwrap(), Some(Body::Binary(vec![0x82, 0xa3])));
    }

    #[test]
    fn pending_transactions_query() {
        let client = client();
        assert_eq!(client.pending_transactions().url().unwrap().query(), None);
        assert_eq!(
            client.pending_transactions().max(10).max(3).url().unwrap().query(),
            Some("max=3")
        );
    }

    #[test]
    fn read_endpoints_use_get() {
        let client = client();
        let info = client.pending_transaction_information("TXID");
        assert_eq!(info.method(), Method::GET);
        assert_eq!(info.url().unwrap().path(), "/v2/transactions/pending/TXID");
        assert_eq!(
            client.transaction_params().url().unwrap().path(),
            "/v2/transactions/params"
        );
    }
}
