//! The mock chain: one token contract, any number of escrow deployments,
//! and a minimal native-currency ledger. Every mutating call is a single
//! transaction: the transition runs on a cloned [`ChainState`] and is
//! committed only on success.

use crate::errors::{EscrowError, EscrowResult, TokenResult};
use crate::state::{ChainState, EscrowState, TokenState};
use alloy::primitives::{Address, U256};
use log::debug;
use std::collections::HashMap;

pub struct MockChain {
    state: ChainState,
}

impl MockChain {
    /// Deploys the mock token with the given metadata and mints the initial
    /// supply to the deployer, as the original constructor does.
    pub fn new(
        deployer: Address,
        name: &str,
        symbol: &str,
        decimals: u8,
        initial_supply: U256,
    ) -> TokenResult<Self> {
        let mut state = ChainState {
            token_address: Address::ZERO,
            token: TokenState::new(name, symbol, decimals, deployer),
            escrows: HashMap::new(),
            native_balances: HashMap::new(),
            next_contract: 0,
        };
        state.token_address = Self::contract_address(&mut state);
        if !initial_supply.is_zero() {
            state.token.mint_to(deployer, deployer, initial_supply)?;
        }
        debug!("deployed token {} at {}", symbol, state.token_address);
        Ok(Self { state })
    }

    /// Deploys a fresh escrow bound to `token`. Fails before any state is
    /// created when the token address is zero.
    pub fn deploy_escrow(&mut self, deployer: Address, token: Address) -> EscrowResult<Address> {
        self.commit(|state| {
            let escrow = EscrowState::new(deployer, token)?;
            let address = Self::contract_address(state);
            state.escrows.insert(address, escrow);
            debug!("deployed escrow at {address}");
            Ok(address)
        })
    }

    pub fn state(&self) -> &ChainState {
        &self.state
    }

    // --- token operations, routed as the named caller ---

    pub fn mint(&mut self, caller: Address, amount: U256) -> TokenResult<()> {
        self.commit(|state| state.token.mint_self(caller, amount))
    }

    pub fn mint_to(&mut self, caller: Address, to: Address, amount: U256) -> TokenResult<()> {
        self.commit(|state| state.token.mint_to(caller, to, amount))
    }

    pub fn burn(&mut self, caller: Address, amount: U256) -> TokenResult<()> {
        self.commit(|state| state.token.burn(caller, amount))
    }

    pub fn burn_from(&mut self, caller: Address, from: Address, amount: U256) -> TokenResult<()> {
        self.commit(|state| state.token.burn_from(caller, from, amount))
    }

    pub fn transfer(&mut self, caller: Address, to: Address, amount: U256) -> TokenResult<()> {
        self.commit(|state| state.token.transfer(caller, to, amount))
    }

    pub fn approve(&mut self, caller: Address, spender: Address, amount: U256) -> TokenResult<()> {
        self.commit(|state| state.token.approve(caller, spender, amount))
    }

    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> TokenResult<()> {
        self.commit(|state| state.token.transfer_from(caller, from, to, amount))
    }

    pub fn token_address(&self) -> Address {
        self.state.token_address
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.state.token.balance_of(account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.state.token.allowance(owner, spender)
    }

    pub fn total_supply(&self) -> U256 {
        self.state.token.total_supply
    }

    // --- escrow operations ---

    /// `transferPYUSD`: pulls `amount` of the configured token from the
    /// caller through the caller's allowance for the escrow and forwards it
    /// to `recipient`. The order id is consumed only when the whole
    /// transaction, token leg included, succeeds.
    pub fn transfer_pyusd(
        &mut self,
        escrow: Address,
        caller: Address,
        recipient: Address,
        amount: U256,
        order_id: U256,
    ) -> EscrowResult<()> {
        self.commit(|state| {
            state
                .escrows
                .get(&escrow)
                .ok_or(EscrowError::UnknownEscrow(escrow))?
                .require_transferable(recipient, amount, order_id)?;

            // The escrow contract is the spender of the caller's allowance.
            state
                .token
                .transfer_from(escrow, caller, recipient, amount)?;

            state
                .escrows
                .get_mut(&escrow)
                .ok_or(EscrowError::UnknownEscrow(escrow))?
                .mark_used(order_id);
            debug!("transferPYUSD {amount} to {recipient}, order id {order_id}");
            Ok(())
        })
    }

    pub fn is_order_id_used(&self, escrow: Address, order_id: U256) -> EscrowResult<bool> {
        Ok(self.escrow_state(escrow)?.is_order_id_used(order_id))
    }

    /// `PYUSD_TOKEN()` / `getContractInfo()`: the immutable token reference.
    pub fn contract_info(&self, escrow: Address) -> EscrowResult<Address> {
        Ok(self.escrow_state(escrow)?.token)
    }

    pub fn escrow_owner(&self, escrow: Address) -> EscrowResult<Address> {
        Ok(self.escrow_state(escrow)?.owner)
    }

    /// `emergencyWithdraw`: the owner recovers funds accidentally held by
    /// the escrow. A zero token address selects the native currency.
    pub fn emergency_withdraw(
        &mut self,
        escrow: Address,
        caller: Address,
        token: Address,
        amount: U256,
    ) -> EscrowResult<()> {
        self.commit(|state| {
            let escrow_state = state
                .escrows
                .get(&escrow)
                .ok_or(EscrowError::UnknownEscrow(escrow))?;
            escrow_state.require_owner(caller)?;
            let owner = escrow_state.owner;

            if token == Address::ZERO {
                let held = state.native_balance_of(escrow);
                if held < amount {
                    return Err(EscrowError::InsufficientContractFunds {
                        balance: held,
                        needed: amount,
                    });
                }
                state.native_balances.insert(escrow, held - amount);
                let recovered = state.native_balances.entry(owner).or_default();
                *recovered += amount;
            } else {
                if token != state.token_address {
                    return Err(EscrowError::UnknownToken(token));
                }
                state.token.transfer(escrow, owner, amount)?;
            }
            Ok(())
        })
    }

    // --- native currency, enough to model "accidentally sent funds" ---

    pub fn fund_native(&mut self, account: Address, amount: U256) {
        let balance = self.state.native_balances.entry(account).or_default();
        *balance += amount;
    }

    /// A plain value transfer, the way funds end up stuck in the escrow.
    pub fn send_native(&mut self, from: Address, to: Address, amount: U256) -> EscrowResult<()> {
        self.commit(|state| {
            let held = state.native_balance_of(from);
            if held < amount {
                return Err(EscrowError::InsufficientNativeFunds {
                    balance: held,
                    needed: amount,
                });
            }
            state.native_balances.insert(from, held - amount);
            let balance = state.native_balances.entry(to).or_default();
            *balance += amount;
            Ok(())
        })
    }

    pub fn native_balance_of(&self, account: Address) -> U256 {
        self.state.native_balance_of(account)
    }

    fn escrow_state(&self, escrow: Address) -> EscrowResult<&EscrowState> {
        self.state
            .escrows
            .get(&escrow)
            .ok_or(EscrowError::UnknownEscrow(escrow))
    }

    /// Runs one transaction: the transition mutates a clone and replaces the
    /// live state only on success, so a failed call reverts everything.
    fn commit<T, E>(
        &mut self,
        transition: impl FnOnce(&mut ChainState) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut next = self.state.clone();
        let value = transition(&mut next)?;
        self.state = next;
        Ok(value)
    }

    fn contract_address(state: &mut ChainState) -> Address {
        state.next_contract += 1;
        let mut bytes = [0u8; 20];
        // synthetic contract namespace, disjoint from test account addresses
        bytes[0] = 0xcc;
        bytes[12..].copy_from_slice(&state.next_contract.to_be_bytes());
        Address::from(bytes)
    }
}
