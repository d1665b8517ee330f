//! Prints private keys and addresses generated three ways: raw random
//! bytes, a batch of independent random keys, and a deterministic
//! derivation from a fixed seed string.

use transfer_app::errors::AppResult;
use transfer_app::keygen;

fn run() -> AppResult<()> {
    println!("Private Key Generation Methods\n");

    println!("Method 1: Random Private Key Generation");
    let account = keygen::random_account()?;
    println!("Private Key: {}", account.private_key);
    println!("Address: {}", account.address);
    println!("Public Key: {}", account.public_key);
    println!();

    println!("Method 2: Multiple Test Accounts");
    for (index, account) in keygen::random_accounts(3)?.iter().enumerate() {
        println!("Account {}:", index + 1);
        println!("  Private Key: {}", account.private_key);
        println!("  Address: {}", account.address);
        println!();
    }

    println!("Method 3: Deterministic Generation from Seed");
    let seed = "test-seed-phrase-for-hardhat-development";
    let account = keygen::deterministic_account(seed)?;
    println!("Seed: {seed}");
    println!("Private Key: {}", account.private_key);
    println!("Address: {}", account.address);
    println!();

    println!("IMPORTANT SECURITY NOTES:");
    println!("1. Never use these private keys for mainnet or real funds");
    println!("2. These are for development and testing only");
    println!("3. Keep your private keys secure and never share them");
    println!("4. Use a hardware wallet for production deployments");

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
