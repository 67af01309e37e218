//! Response envelopes of the indexer API.
//!
//! Search responses carry a `next_token`; pass it to the `next` setter of a
//! fresh search to fetch the following page. An empty token means there are
//! no more results.

use serde::{Deserialize, Serialize};

use super::ledger::{Account, Application, Asset, MiniAssetHolding};
use super::transaction::Transaction;

/// Indexer health report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCheck {
    pub data: Option<serde_json::Value>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AccountResponse {
    pub account: Account,
    /// Round at which the results were computed.
    pub current_round: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AccountsResponse {
    pub accounts: Vec<Account>,
    pub current_round: u64,
    pub next_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AssetBalancesResponse {
    pub balances: Vec<MiniAssetHolding>,
    pub current_round: u64,
    pub next_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApplicationResponse {
    pub application: Application,
    pub current_round: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApplicationsResponse {
    pub applications: Vec<Application>,
    pub current_round: u64,
    pub next_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AssetResponse {
    pub asset: Asset,
    pub current_round: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AssetsResponse {
    pub assets: Vec<Asset>,
    pub current_round: u64,
    pub next_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransactionsResponse {
    pub current_round: u64,
    pub next_token: String,
    pub transactions: Vec<Transaction>,
}

/// Shared view of the paginated search responses.
pub trait Paginated {
    /// Token for the next page, `None` once the listing is exhausted.
    fn next_token(&self) -> Option<&str>;
}

macro_rules! impl_paginated {
    ($($response:ty),* $(,)?) => {
        $(
            impl Paginated for $response {
                fn next_token(&self) -> Option<&str> {
                    Some(self.next_token.as_str()).filter(|token| !token.is_empty())
                }
            }
        )*
    };
}

impl_paginated!(
    AccountsResponse,
    AssetBalancesResponse,
    ApplicationsResponse,
    AssetsResponse,
    TransactionsResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn next_token_is_none_when_empty() {
        let page: TransactionsResponse =
            serde_json::from_value(json!({"current-round": 9})).expect("decode");
        assert_eq!(page.current_round, 9);
        assert_eq!(page.next_token(), None);

        let page: AssetsResponse =
            serde_json::from_value(json!({"next-token": "abc"})).expect("decode");
        assert_eq!(page.next_token(), Some("abc"));
    }

    #[test]
    fn account_response_nests_account() {
        let response: AccountResponse = serde_json::from_value(json!({
            "current-round": 12,
            "account": {"address": "ADDR", "status": "Offline", "amount": 3}
        }))
        .expect("decode");
        assert_eq!(response.account.status, "Offline");
        assert_eq!(response.account.amount, 3);
    }

    #[test]
    fn health_check_message() {
        let health: HealthCheck =
            serde_json::from_value(json!({"message": "OK"})).expect("decode");
        assert_eq!(health.message, "OK");
        assert!(health.data.is_none());
    }
}
