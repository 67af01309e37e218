//! Example: Page through recent payments on an indexer.
//!
//! Run with: cargo run --example search_transactions
//!
//! Set `INDEXER_ADDRESS` (and `INDEXER_TOKEN` if required) to target an
//! indexer other than the local one.

use algorand_client::models::{Paginated, TxType};
use algorand_client::{IndexerClient, client::Result};
use chrono::{Duration, Utc};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = match std::env::var("INDEXER_ADDRESS") {
        Ok(address) => {
            IndexerClient::new(&address, std::env::var("INDEXER_TOKEN").unwrap_or_default())?
        }
        Err(_) => IndexerClient::local()?,
    };

    let health = client.health_check().execute().await?;
    println!("Indexer health: {}", health.message);

    let since = Utc::now() - Duration::hours(1);
    let mut next: Option<String> = None;
    let mut total_amount = 0u64;
    let mut count = 0usize;

    for _ in 0..3 {
        let mut search = client
            .search_for_transactions()
            .tx_type(TxType::Pay)
            .after_time(since)
            .limit(50);
        if let Some(token) = next.take() {
            search = search.next(token);
        }

        let page = search.execute().await?;
        for txn in &page.transactions {
            if let Some(payment) = &txn.payment_transaction {
                total_amount += payment.amount;
                count += 1;
            }
        }

        match page.next_token() {
            Some(token) => next = Some(token.to_string()),
            None => break,
        }
    }

    println!("{count} payments in the last hour, {total_amount} MicroAlgos moved");
    Ok(())
}
