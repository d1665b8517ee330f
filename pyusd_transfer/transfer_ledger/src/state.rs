use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The full state of the PYUSD mock token contract: metadata fixed at
/// deployment, the balance ledger, and the allowance ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenState {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// The deployer; the only account allowed to mint to or burn from
    /// arbitrary addresses.
    pub owner: Address,
    pub total_supply: U256,
    pub balances: HashMap<Address, U256>,
    /// (token owner, spender) -> remaining pre-authorized amount.
    pub allowances: HashMap<(Address, Address), U256>,
}

impl TokenState {
    pub fn new(name: &str, symbol: &str, decimals: u8, owner: Address) -> Self {
        Self {
            name: name.to_owned(),
            symbol: symbol.to_owned(),
            decimals,
            owner,
            total_supply: U256::ZERO,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }
}

/// The state of one deployed PYUSDTransfer contract: the immutable token
/// reference, the owner set at construction, and the consumed order ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscrowState {
    pub token: Address,
    pub owner: Address,
    pub used_order_ids: HashSet<U256>,
}

/// Everything the mock chain holds: the single token contract, any number of
/// escrow deployments, and a minimal native-currency ledger so the emergency
/// withdrawal path is exercisable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainState {
    pub token_address: Address,
    pub token: TokenState,
    pub escrows: HashMap<Address, EscrowState>,
    pub native_balances: HashMap<Address, U256>,
    pub(crate) next_contract: u64,
}

impl ChainState {
    pub fn native_balance_of(&self, account: Address) -> U256 {
        self.native_balances
            .get(&account)
            .copied()
            .unwrap_or_default()
    }
}
