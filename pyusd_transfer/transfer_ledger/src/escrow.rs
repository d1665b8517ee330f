//! State transitions of the transfer-escrow contract. The escrow's own
//! checks live here; the token leg and the commit semantics live in
//! [`crate::chain::MockChain`], which runs both under one transaction.

use crate::errors::{EscrowError, EscrowResult};
use crate::state::EscrowState;
use alloy::primitives::{Address, U256};
use std::collections::HashSet;

impl EscrowState {
    /// Constructs the escrow. The token address is immutable afterwards and
    /// must not be the zero address; the deployer becomes the owner.
    pub fn new(deployer: Address, token: Address) -> EscrowResult<Self> {
        if token == Address::ZERO {
            return Err(EscrowError::InvalidTokenAddress);
        }
        Ok(Self {
            token,
            owner: deployer,
            used_order_ids: HashSet::new(),
        })
    }

    /// The escrow-level preconditions of `transferPYUSD`, checked before the
    /// token leg runs. Each failure is a distinct variant.
    pub fn require_transferable(
        &self,
        recipient: Address,
        amount: U256,
        order_id: U256,
    ) -> EscrowResult<()> {
        if amount.is_zero() {
            return Err(EscrowError::ZeroAmount);
        }
        if recipient == Address::ZERO {
            return Err(EscrowError::InvalidRecipient);
        }
        if self.used_order_ids.contains(&order_id) {
            return Err(EscrowError::OrderIdUsed(order_id));
        }
        Ok(())
    }

    /// Marks an order id consumed. One-way; only called once the transfer
    /// leg has succeeded.
    pub fn mark_used(&mut self, order_id: U256) {
        self.used_order_ids.insert(order_id);
    }

    pub fn is_order_id_used(&self, order_id: U256) -> bool {
        self.used_order_ids.contains(&order_id)
    }

    /// Only the owner may run privileged operations.
    pub fn require_owner(&self, caller: Address) -> EscrowResult<()> {
        if caller != self.owner {
            return Err(EscrowError::NotOwner(caller));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const DEPLOYER: Address = address!("0x2000000000000000000000000000000000000001");
    const TOKEN: Address = address!("0x2000000000000000000000000000000000000002");
    const RECIPIENT: Address = address!("0x2000000000000000000000000000000000000003");

    #[test]
    fn construction_rejects_zero_token_address() {
        let err = EscrowState::new(DEPLOYER, Address::ZERO).unwrap_err();
        assert_eq!(err, EscrowError::InvalidTokenAddress);
    }

    #[test]
    fn construction_sets_owner_to_deployer() {
        let escrow = EscrowState::new(DEPLOYER, TOKEN).unwrap();
        assert_eq!(escrow.owner, DEPLOYER);
        assert_eq!(escrow.token, TOKEN);
        assert!(escrow.used_order_ids.is_empty());
    }

    #[test]
    fn preconditions_fail_with_distinct_variants() {
        let mut escrow = EscrowState::new(DEPLOYER, TOKEN).unwrap();
        let amount = U256::from(1_000_000u64);
        let order_id = U256::from(999u64);

        assert_eq!(
            escrow
                .require_transferable(RECIPIENT, U256::ZERO, order_id)
                .unwrap_err(),
            EscrowError::ZeroAmount
        );
        assert_eq!(
            escrow
                .require_transferable(Address::ZERO, amount, order_id)
                .unwrap_err(),
            EscrowError::InvalidRecipient
        );

        escrow.mark_used(order_id);
        assert_eq!(
            escrow
                .require_transferable(RECIPIENT, amount, order_id)
                .unwrap_err(),
            EscrowError::OrderIdUsed(order_id)
        );
    }

    #[test]
    fn owner_check_is_exact() {
        let escrow = EscrowState::new(DEPLOYER, TOKEN).unwrap();
        assert!(escrow.require_owner(DEPLOYER).is_ok());
        assert_eq!(
            escrow.require_owner(RECIPIENT).unwrap_err(),
            EscrowError::NotOwner(RECIPIENT)
        );
    }
}
