//! Wire types of both APIs: response models and the parameter bags that
//! builders serialize into query strings.
//!
//! Available without the `client` feature.

mod algod;
mod block;
mod indexer;
mod ledger;
mod params;
mod transaction;

pub use algod::*;
pub use block::*;
pub use indexer::*;
pub use ledger::*;
pub use params::*;
pub use transaction::*;
