//! Client for the node (algod) REST API.
//!
//! Each method returns a builder for one endpoint; configure it with its
//! setters and finish with `execute`.

mod account;
mod block;
mod catchup;
mod ledger;
mod node;
mod status;
mod teal;
mod transaction;

pub use account::{AccountInformation, PendingTransactionsByAddress};
pub use block::GetBlock;
pub use catchup::{AbortCatchup, StartCatchup};
pub use ledger::{ApplicationById, AssetById, Supply};
pub use node::{Health, Metrics, SwaggerJson, Versions};
pub use status::{Status, WaitForBlock};
pub use teal::{TealCompile, TealDryrun};
pub use transaction::{
    PendingTransactionInformation, PendingTransactions, RawTransaction, TransactionParams,
};

use crate::client::{Client, Result};
use crate::config::ClientConfig;
use crate::models::DryrunRequest;

/// Header carrying the node API token.
pub const AUTH_HEADER: &str = "x-algo-api-token";

/// Token of the local sandbox node.
pub const SANDBOX_TOKEN: &str =
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Async client for the node API.
///
/// # Example
///
/// ```no_run
/// use algorand_client::AlgodClient;
///
/// #[tokio::main]
/// async fn main() -> algorand_client::client::Result<()> {
///     let client = AlgodClient::local()?;
///     let status = client.status().execute().await?;
///     println!("Last round: {}", status.last_round);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AlgodClient {
    client: Client,
}

impl AlgodClient {
    /// Create a client for the node at `address`, authenticating with `token`.
    pub fn new(address: &str, token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::parse(address)?.token(token))
    }

    /// Create a client from a full [`ClientConfig`].
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: Client::new(&config, AUTH_HEADER)?,
        })
    }

    /// Create a client for a local sandbox node (localhost:4001).
    pub fn local() -> Result<Self> {
        Self::new("http://localhost:4001", SANDBOX_TOKEN)
    }

    /// The underlying transport.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    // ── Accounts ─────────────────────────────────────────────────

    /// Returns the state of an account at the latest round.
    pub fn account_information(&self, address: impl Into<String>) -> AccountInformation<'_> {
        AccountInformation::new(&self.client, address.into())
    }

    /// Returns the pool transactions sent from or to an address.
    pub fn pending_transactions_by_address(
        &self,
        address: impl Into<String>,
    ) -> PendingTransactionsByAddress<'_> {
        PendingTransactionsByAddress::new(&self.client, address.into())
    }

    // ── Ledger ───────────────────────────────────────────────────

    /// Returns an application's parameters and global state.
    pub fn application_by_id(&self, application_id: u64) -> ApplicationById<'_> {
        ApplicationById::new(&self.client, application_id)
    }

    /// Returns an asset's parameters.
    pub fn asset_by_id(&self, asset_id: u64) -> AssetById<'_> {
        AssetById::new(&self.client, asset_id)
    }

    /// Returns the encoded block of a round.
    pub fn block(&self, round: u64) -> GetBlock<'_> {
        GetBlock::new(&self.client, round)
    }

    /// Returns the current supply of MicroAlgos.
    pub fn supply(&self) -> Supply<'_> {
        Supply::new(&self.client)
    }

    // ── Catchup ──────────────────────────────────────────────────

    /// Starts fast catchup to `catchpoint` (e.g. `"5000000#BASE32HASH"`).
    pub fn start_catchup(&self, catchpoint: impl Into<String>) -> StartCatchup<'_> {
        StartCatchup::new(&self.client, catchpoint.into())
    }

    /// Aborts a fast catchup that is in progress.
    pub fn abort_catchup(&self, catchpoint: impl Into<String>) -> AbortCatchup<'_> {
        AbortCatchup::new(&self.client, catchpoint.into())
    }

    // ── Status ───────────────────────────────────────────────────

    /// Returns the node's current status.
    pub fn status(&self) -> Status<'_> {
        Status::new(&self.client)
    }

    /// Waits until a block after `round` is committed, then returns the node
    /// status. The node answers after about a minute if nothing happens.
    pub fn wait_for_block(&self, round: u64) -> WaitForBlock<'_> {
        WaitForBlock::new(&self.client, round)
    }

    // ── TEAL ─────────────────────────────────────────────────────

    /// Compiles TEAL source. Requires `EnableDeveloperAPI` on the node.
    pub fn teal_compile(&self, source: impl Into<String>) -> TealCompile<'_> {
        TealCompile::new(&self.client, source.into())
    }

    /// Runs transactions against a simulated ledger. Requires
    /// `EnableDeveloperAPI` on the node.
    pub fn teal_dryrun(&self, request: DryrunRequest) -> TealDryrun<'_> {
        TealDryrun::new(&self.client, request)
    }

    // ── Transactions ─────────────────────────────────────────────

    /// Broadcasts signed, msgpack-encoded transactions.
    pub fn raw_transaction(&self, signed: impl Into<Vec<u8>>) -> RawTransaction<'_> {
        RawTransaction::new(&self.client, signed.into())
    }

    /// Returns the parameters needed to build a new transaction.
    pub fn transaction_params(&self) -> TransactionParams<'_> {
        TransactionParams::new(&self.client)
    }

    /// Returns the transactions waiting in the pool, highest priority first.
    pub fn pending_transactions(&self) -> PendingTransactions<'_> {
        PendingTransactions::new(&self.client)
    }

    /// Returns a transaction from the pool, or its confirmation once committed.
    pub fn pending_transaction_information(
        &self,
        tx_id: impl Into<String>,
    ) -> PendingTransactionInformation<'_> {
        PendingTransactionInformation::new(&self.client, tx_id.into())
    }

    // ── Node ─────────────────────────────────────────────────────

    /// Succeeds when the node is up.
    pub fn health_check(&self) -> Health<'_> {
        Health::new(&self.client)
    }

    /// Prometheus metrics, as plain text.
    pub fn metrics(&self) -> Metrics<'_> {
        Metrics::new(&self.client)
    }

    /// The node's own API description.
    pub fn swagger_json(&self) -> SwaggerJson<'_> {
        SwaggerJson::new(&self.client)
    }

    /// Returns the node's build version and genesis information.
    pub fn versions(&self) -> Versions<'_> {
        Versions::new(&self.client)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn client() -> AlgodClient {
        AlgodClient::new("http://localhost:4001", "token").unwrap()
    }

    #[test]
    fn local_preset() {
        let client = AlgodClient::local().unwrap();
        assert_eq!(client.inner().base_url().as_str(), "http://localhost:4001/");
    }

    #[test]
    fn invalid_address_is_rejected() {
        assert!(matches!(
            AlgodClient::new("not a url", "t"),
            Err(crate::client::Error::Url(_))
        ));
    }

    #[test]
    fn invalid_token_is_rejected() {
        assert!(matches!(
            AlgodClient::new("http://localhost:4001", "bad\ntoken"),
            Err(crate::client::Error::InvalidHeader(_))
        ));
    }
}
