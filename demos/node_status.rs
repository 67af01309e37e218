//! Example: Query a node for its status and transaction parameters.
//!
//! Run with: cargo run --example node_status
//!
//! Set `ALGOD_ADDRESS` and `ALGOD_TOKEN` to target a node other than the
//! local sandbox, and `RUST_LOG=debug` to see the requests.

use algorand_client::{AlgodClient, client::Result};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = match std::env::var("ALGOD_ADDRESS") {
        Ok(address) => AlgodClient::new(&address, std::env::var("ALGOD_TOKEN").unwrap_or_default())?,
        Err(_) => AlgodClient::local()?,
    };

    println!("=== Algorand node ===\n");

    println!("1. Fetching versions...");
    let version = client.versions().execute().await?;
    println!("   Genesis ID: {}", version.genesis_id);
    println!(
        "   Build: {}.{}.{} ({})",
        version.build.major, version.build.minor, version.build.build_number, version.build.channel
    );
    println!();

    println!("2. Fetching node status...");
    let status = client.status().execute().await?;
    println!("   Last round: {}", status.last_round);
    println!("   Consensus version: {}", status.last_version);
    println!(
        "   Time since last round: {:?}",
        Duration::from_nanos(status.time_since_last_round)
    );
    if !status.catchpoint.is_empty() {
        println!("   Catching up to: {}", status.catchpoint);
    }
    println!();

    println!("3. Fetching suggested transaction parameters...");
    let params = client.transaction_params().execute().await?;
    println!("   Fee: {} (min {})", params.fee, params.min_fee);
    println!("   Valid from round: {}", params.last_round);
    println!();

    println!("4. Fetching supply...");
    let supply = client.supply().execute().await?;
    println!("   Online: {} of {} MicroAlgos", supply.online_money, supply.total_money);
    println!();

    println!("5. Waiting for the next block (up to 10s)...");
    match client
        .wait_for_block(status.last_round)
        .execute_until(tokio::time::sleep(Duration::from_secs(10)))
        .await
    {
        Ok(next) => println!("   Now at round {}", next.last_round),
        Err(err) if err.is_cancelled() => println!("   No new block yet"),
        Err(err) => return Err(err),
    }

    println!("\nDone!");
    Ok(())
}
