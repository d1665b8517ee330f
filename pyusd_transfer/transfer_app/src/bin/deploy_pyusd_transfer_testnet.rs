//! Exercises the PYUSD testnet deployment on Sepolia: the same fixed
//! sequence as the local script, against the testnet contract pair.

use alloy_chains::NamedChain;
use transfer_app::errors::AppResult;
use transfer_app::{load_config, scenario};

async fn run() -> AppResult<()> {
    let config = load_config()?;
    println!("Using the Sepolia PYUSD testnet deployment...");
    scenario::run_demo(&config, NamedChain::Sepolia).await
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
