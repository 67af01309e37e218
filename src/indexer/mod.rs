//! Client for the indexer REST API.
//!
//! Search endpoints are paginated: pass the `next_token` of a response to the
//! `next` setter of a new search to continue.

mod account;
mod application;
mod asset;
mod block;
mod health;
mod transaction;

pub use account::{LookupAccountById, LookupAccountTransactions, SearchForAccounts};
pub use application::{LookupApplicationById, SearchForApplications};
pub use asset::{LookupAssetBalances, LookupAssetById, LookupAssetTransactions, SearchForAssets};
pub use block::LookupBlock;
pub use health::Health;
pub use transaction::SearchForTransactions;

use crate::client::{Client, Result};
use crate::config::ClientConfig;

/// Header carrying the indexer API token.
pub const AUTH_HEADER: &str = "x-indexer-api-token";

/// Async client for the indexer API.
///
/// # Example
///
/// ```no_run
/// use algorand_client::{IndexerClient, models::TxType};
///
/// #[tokio::main]
/// async fn main() -> algorand_client::client::Result<()> {
///     let client = IndexerClient::local()?;
///     let page = client
///         .search_for_transactions()
///         .tx_type(TxType::Pay)
///         .limit(10)
///         .execute()
///         .await?;
///     for txn in &page.transactions {
///         println!("{} in round {}", txn.id, txn.confirmed_round);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct IndexerClient {
    client: Client,
}

impl IndexerClient {
    /// Create a client for the indexer at `address`, authenticating with `token`.
    /// An empty token sends no auth header.
    pub fn new(address: &str, token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::parse(address)?.token(token))
    }

    /// Create a client from a full [`ClientConfig`].
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: Client::new(&config, AUTH_HEADER)?,
        })
    }

    /// Create a client for a local indexer (localhost:8980) without a token.
    pub fn local() -> Result<Self> {
        Self::new("http://localhost:8980", "")
    }

    /// The underlying transport.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    // ── Accounts ─────────────────────────────────────────────────

    /// Searches accounts by balance, asset, application or auth address.
    pub fn search_for_accounts(&self) -> SearchForAccounts<'_> {
        SearchForAccounts::new(&self.client)
    }

    /// Returns one account, optionally as of a past round.
    pub fn lookup_account_by_id(&self, account_id: impl Into<String>) -> LookupAccountById<'_> {
        LookupAccountById::new(&self.client, account_id.into())
    }

    /// Lists the transactions that involve an account.
    pub fn lookup_account_transactions(
        &self,
        account_id: impl Into<String>,
    ) -> LookupAccountTransactions<'_> {
        LookupAccountTransactions::new(&self.client, account_id.into())
    }

    // ── Applications ─────────────────────────────────────────────

    /// Searches applications.
    pub fn search_for_applications(&self) -> SearchForApplications<'_> {
        SearchForApplications::new(&self.client)
    }

    /// Returns one application.
    pub fn lookup_application_by_id(&self, application_id: u64) -> LookupApplicationById<'_> {
        LookupApplicationById::new(&self.client, application_id)
    }

    // ── Assets ───────────────────────────────────────────────────

    /// Searches assets by name, unit or creator.
    pub fn search_for_assets(&self) -> SearchForAssets<'_> {
        SearchForAssets::new(&self.client)
    }

    /// Returns one asset.
    pub fn lookup_asset_by_id(&self, asset_id: u64) -> LookupAssetById<'_> {
        LookupAssetById::new(&self.client, asset_id)
    }

    /// Lists the accounts holding an asset.
    pub fn lookup_asset_balances(&self, asset_id: u64) -> LookupAssetBalances<'_> {
        LookupAssetBalances::new(&self.client, asset_id)
    }

    /// Lists the transactions that involve an asset.
    pub fn lookup_asset_transactions(&self, asset_id: u64) -> LookupAssetTransactions<'_> {
        LookupAssetTransactions::new(&self.client, asset_id)
    }

    // ── Blocks & transactions ────────────────────────────────────

    /// Returns a block with its transactions.
    pub fn lookup_block(&self, round: u64) -> LookupBlock<'_> {
        LookupBlock::new(&self.client, round)
    }

    /// Searches all transactions.
    pub fn search_for_transactions(&self) -> SearchForTransactions<'_> {
        SearchForTransactions::new(&self.client)
    }

    /// Returns the indexer's health and current round.
    pub fn health_check(&self) -> Health<'_> {
        Health::new(&self.client)
    }
}
