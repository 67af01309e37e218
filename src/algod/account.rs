use crate::client::{Client, Endpoint, RequestOptions, Result};
use crate::models::{Account, PendingTransactionsParams, PendingTransactionsResponse};
use crate::query::encode_query;
use std::borrow::Cow;

/// `GET /v2/accounts/{address}`
#[derive(Debug, Clone)]
pub struct AccountInformation<'a> {
    client: &'a Client,
    options: RequestOptions,
    address: String,
}

impl<'a> AccountInformation<'a> {
    pub(crate) fn new(client: &'a Client, address: String) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            address,
        }
    }
}

impl Endpoint for AccountInformation<'_> {
    type Response = Account;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "accounts", &self.address]
    }
}

/// `GET /v2/accounts/{address}/transactions/pending`
#[derive(Debug, Clone)]
pub struct PendingTransactionsByAddress<'a> {
    client: &'a Client,
    options: RequestOptions,
    address: String,
    params: PendingTransactionsParams,
}

impl<'a> PendingTransactionsByAddress<'a> {
    pub(crate) fn new(client: &'a Client, address: String) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            address,
            params: PendingTransactionsParams::default(),
        }
    }

    /// Truncates the listing to at most `max` transactions. Zero means all.
    pub fn max(mut self, max: u64) -> Self {
        self.params.max = Some(max);
        self
    }
}

impl Endpoint for PendingTransactionsByAddress<'_> {
    type Response = PendingTransactionsResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "accounts", &self.address, "transactions", "pending"]
    }

    fn query(&self) -> Result<Option<String>> {
        Ok(encode_query(&self.params)?)
    }
}

request_builder!(AccountInformation, PendingTransactionsByAddress);

#[cfg(test)]
mod tests {
    use crate::algod::tests::client;
    use crate::client::Error;

    #[test]
    fn account_information_has_no_query() {
        let client = client();
        let url = client.account_information("ADDR").url().unwrap();
        assert_eq!(url.path(), "/v2/accounts/ADDR");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn pending_by_address_max() {
        let client = client();
        let url = client
            .pending_transactions_by_address("ADDR")
            .max(0)
            .url()
            .unwrap();
        assert_eq!(url.path(), "/v2/accounts/ADDR/transactions/pending");
        assert_eq!(url.query(), Some("max=0"));
    }

    #[test]
    fn accepts_typed_address() {
        let client = client();
        let address = crate::Address::ZERO;
        let url = client.account_information(&address).url().unwrap();
        assert_eq!(
            url.path(),
            "/v2/accounts/AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ"
        );
    }

    #[test]
    fn address_stays_one_segment() {
        let client = client();
        let url = client
            .pending_transactions_by_address("A/B")
            .url()
            .unwrap();
        assert_eq!(url.path(), "/v2/accounts/A%2FB/transactions/pending");

        let err = client.account_information("..").url().unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));
    }
}
