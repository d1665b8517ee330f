//! Exercises the PYUSDMock/PYUSDTransfer pair on a local hardhat/anvil
//! chain: mint, approve, transferPYUSD, balance and allowance checks.

use alloy_chains::NamedChain;
use transfer_app::errors::AppResult;
use transfer_app::{load_config, scenario};

async fn run() -> AppResult<()> {
    let config = load_config()?;
    println!("Using the local PYUSDMock deployment...");
    scenario::run_demo(&config, NamedChain::AnvilHardhat).await
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
