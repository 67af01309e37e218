//! Typed Rust builders and an async client for the Algorand node (algod) and
//! indexer REST APIs.
//!
//! Every endpoint is a builder: set the optional filters with chained setters,
//! then call `execute` to issue the request and decode the JSON response.
//!
//! # Features
//!
//! - **`models` module**: all response types and parameter bags, plus the
//!   [`Address`] codec. Available with no additional features.
//! - **`client` feature** (enabled by default): [`AlgodClient`] and
//!   [`IndexerClient`], built on `reqwest`.
//!
//! # Quick start
//!
//! ```no_run
//! use algorand_client::{AlgodClient, IndexerClient};
//!
//! #[tokio::main]
//! async fn main() -> algorand_client::client::Result<()> {
//!     let algod = AlgodClient::local()?;
//!     let status = algod.status().execute().await?;
//!     println!("Node at round {}", status.last_round);
//!
//!     let indexer = IndexerClient::local()?;
//!     let page = indexer
//!         .search_for_transactions()
//!         .min_round(status.last_round.saturating_sub(10))
//!         .limit(5)
//!         .execute()
//!         .await?;
//!     println!("{} recent transactions", page.transactions.len());
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
#[macro_use]
mod macros;

pub mod address;
pub mod models;
pub mod query;

pub use address::{Address, AddressError};
pub use models::*;

#[cfg(feature = "client")]
pub mod algod;
#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod config;
#[cfg(feature = "client")]
pub mod indexer;

#[cfg(feature = "client")]
pub use algod::AlgodClient;
#[cfg(feature = "client")]
pub use client::{Error, Result};
#[cfg(feature = "client")]
pub use config::ClientConfig;
#[cfg(feature = "client")]
pub use indexer::IndexerClient;
