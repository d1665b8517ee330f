//! The fixed read/write sequence the deploy scripts drive: token info, a
//! 10-token transfer funding the counterparty, an approval for the transfer
//! contract, a `transferPYUSD` with a fixed order id, and the balance and
//! allowance checks around it. Every write is awaited to a receipt before
//! the next step; a failure anywhere aborts the run.

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use alloy::network::ReceiptResponse;
use alloy::primitives::U256;
use alloy::providers::Provider;
use alloy_chains::NamedChain;
use log::debug;
use pyusd_bindings::contract::{pyusd_token, pyusd_transfer};

/// Order id used by the demo transfer. Fixed, like the original scripts; a
/// rerun against the same deployment fails on the duplicate id.
pub const DEMO_ORDER_ID: u64 = 12_345;

/// Converts a whole-token amount into 6-decimal base units.
pub fn to_base_units(whole: u64) -> U256 {
    U256::from(whole) * U256::from(10u64).pow(U256::from(6u64))
}

/// Renders 6-decimal base units as a human-readable token amount.
pub fn format_units(amount: U256) -> String {
    let base = U256::from(1_000_000u64);
    format!("{}.{:06}", amount / base, (amount % base).to::<u64>())
}

/// Runs the demo sequence against the deployment on `expected_chain`.
pub async fn run_demo(config: &AppConfig, expected_chain: NamedChain) -> AppResult<()> {
    let owner_provider = config.provider_for(&config.deployer_key)?;
    let counterparty_provider = config.provider_for(&config.counterparty_key)?;

    let chain_id = owner_provider.get_chain_id().await?;
    if chain_id != expected_chain as u64 {
        return Err(AppError::WrongChain {
            expected: expected_chain,
            actual: chain_id,
        });
    }
    debug!("connected to {expected_chain} (chain ID {chain_id})");

    // Reads go through the owner's provider; the counterparty's instances
    // sign the approval and the escrow transfer.
    let token = pyusd_token(&owner_provider).await?;
    let token_as_counterparty = pyusd_token(&counterparty_provider).await?;
    let escrow = pyusd_transfer(&owner_provider).await?;
    let escrow_as_counterparty = pyusd_transfer(&counterparty_provider).await?;

    let owner = config.deployer_key.address();
    let counterparty = config.counterparty_key.address();

    println!("\n=== Contract Information ===");
    println!("Owner (Account A): {owner}");
    println!("Account B: {counterparty}");
    println!("PYUSD Token: {}", token.address());
    println!("PYUSD Transfer Contract: {}", escrow.address());

    let name = token.name().call().await?;
    let symbol = token.symbol().call().await?;
    let decimals = token.decimals().call().await?;
    let owner_balance = token.balanceOf(owner).call().await?;

    println!("\n=== Token Information ===");
    println!("Name: {name}");
    println!("Symbol: {symbol}");
    println!("Decimals: {decimals}");
    println!("Owner Balance: {} {symbol}", format_units(owner_balance));

    // The owner funds Account B with 10 tokens out of its own balance.
    let transfer_amount = to_base_units(10);
    println!("\n=== Transferring {} {symbol} to Account B ===", 10);
    let receipt = token
        .transfer(counterparty, transfer_amount)
        .send()
        .await?
        .get_receipt()
        .await?;
    println!("Transfer transaction hash: {}", receipt.transaction_hash());

    let owner_balance_after = token.balanceOf(owner).call().await?;
    let counterparty_balance = token.balanceOf(counterparty).call().await?;
    println!(
        "Owner Balance After Transfer: {} {symbol}",
        format_units(owner_balance_after)
    );
    println!(
        "Account B Balance: {} {symbol}",
        format_units(counterparty_balance)
    );

    // Account B approves the transfer contract for 5 tokens.
    let approve_amount = to_base_units(5);
    println!("\n=== Account B approving {} {symbol} for the transfer contract ===", 5);
    let receipt = token_as_counterparty
        .approve(*escrow.address(), approve_amount)
        .send()
        .await?
        .get_receipt()
        .await?;
    println!("Approve transaction hash: {}", receipt.transaction_hash());

    let allowance = token.allowance(counterparty, *escrow.address()).call().await?;
    println!("Allowance granted: {} {symbol}", format_units(allowance));

    // Transfer 3 tokens from Account B to Account A through the contract.
    let contract_transfer_amount = to_base_units(3);
    let order_id = U256::from(DEMO_ORDER_ID);
    println!(
        "\nExecuting transfer of {} {symbol} from Account B to Account A via contract...",
        3
    );
    println!("Order ID: {order_id}");
    let receipt = escrow_as_counterparty
        .transferPYUSD(owner, contract_transfer_amount, order_id)
        .send()
        .await?
        .get_receipt()
        .await?;
    println!(
        "Contract transfer transaction hash: {}",
        receipt.transaction_hash()
    );

    let final_owner_balance = token.balanceOf(owner).call().await?;
    let final_counterparty_balance = token.balanceOf(counterparty).call().await?;
    let remaining_allowance = token.allowance(counterparty, *escrow.address()).call().await?;

    println!("\n=== Final Balances ===");
    println!(
        "Account A (Owner) Final Balance: {} {symbol}",
        format_units(final_owner_balance)
    );
    println!(
        "Account B Final Balance: {} {symbol}",
        format_units(final_counterparty_balance)
    );
    println!(
        "Remaining Allowance: {} {symbol}",
        format_units(remaining_allowance)
    );

    let used = escrow.isOrderIdUsed(order_id).call().await?;
    println!("Order ID {order_id} used: {used}");

    println!("\n=== Important Notes ===");
    println!("- This is a MOCK token for testing purposes");
    println!("- Users must approve the contract to spend their PYUSD tokens first");
    println!("- Each orderId can only be used once");
    println!("- Amount should be in PYUSD token units (6 decimals)");
    println!("- Recipient address cannot be zero address");
    println!("- Only the contract owner can call emergencyWithdraw");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_unit_conversion_uses_six_decimals() {
        assert_eq!(to_base_units(1), U256::from(1_000_000u64));
        assert_eq!(to_base_units(1000), U256::from(1_000_000_000u64));
    }

    #[test]
    fn format_units_renders_whole_and_fraction() {
        assert_eq!(format_units(to_base_units(3)), "3.000000");
        assert_eq!(format_units(U256::from(2_500_000u64)), "2.500000");
        assert_eq!(format_units(U256::ZERO), "0.000000");
        assert_eq!(format_units(U256::from(997_000_001u64)), "997.000001");
    }
}
