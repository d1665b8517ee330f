//! Pure state transitions of the mock token. Each function either mutates
//! the passed state and returns `Ok`, or returns an error having touched
//! nothing observable; [`crate::chain::MockChain`] additionally commits on a
//! clone, so a partial mutation can never leak.

use crate::errors::{TokenError, TokenResult};
use crate::state::TokenState;
use alloy::primitives::{Address, U256};

impl TokenState {
    /// Permissionless self-mint: credits the caller's own balance.
    pub fn mint_self(&mut self, caller: Address, amount: U256) -> TokenResult<()> {
        if amount.is_zero() {
            return Err(TokenError::ZeroAmount);
        }
        self.credit_supply(caller, amount)
    }

    /// Privileged mint: only the owner may credit an arbitrary address.
    pub fn mint_to(&mut self, caller: Address, to: Address, amount: U256) -> TokenResult<()> {
        if caller != self.owner {
            return Err(TokenError::NotOwner(caller));
        }
        if to == Address::ZERO {
            return Err(TokenError::MintToZeroAddress);
        }
        if amount.is_zero() {
            return Err(TokenError::ZeroAmount);
        }
        self.credit_supply(to, amount)
    }

    /// Debits the caller's own balance and shrinks the total supply.
    pub fn burn(&mut self, caller: Address, amount: U256) -> TokenResult<()> {
        if amount.is_zero() {
            return Err(TokenError::ZeroAmount);
        }
        self.debit(caller, amount)?;
        self.total_supply -= amount;
        Ok(())
    }

    /// Privileged burn: only the owner may debit an arbitrary address.
    pub fn burn_from(&mut self, caller: Address, from: Address, amount: U256) -> TokenResult<()> {
        if caller != self.owner {
            return Err(TokenError::NotOwner(caller));
        }
        if amount.is_zero() {
            return Err(TokenError::ZeroAmount);
        }
        self.debit(from, amount)?;
        self.total_supply -= amount;
        Ok(())
    }

    /// Standard ERC20 transfer from the caller's balance.
    pub fn transfer(&mut self, caller: Address, to: Address, amount: U256) -> TokenResult<()> {
        if to == Address::ZERO {
            return Err(TokenError::TransferToZeroAddress);
        }
        self.debit(caller, amount)?;
        self.credit(to, amount);
        Ok(())
    }

    /// Sets the allowance of `spender` over the caller's balance.
    pub fn approve(&mut self, caller: Address, spender: Address, amount: U256) -> TokenResult<()> {
        if spender == Address::ZERO {
            return Err(TokenError::ApproveZeroAddress);
        }
        self.allowances.insert((caller, spender), amount);
        Ok(())
    }

    /// Moves `amount` from `from` to `to`, spending the caller's allowance.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> TokenResult<()> {
        if to == Address::ZERO {
            return Err(TokenError::TransferToZeroAddress);
        }
        let allowance = self.allowance(from, caller);
        if allowance < amount {
            return Err(TokenError::InsufficientAllowance {
                allowance,
                needed: amount,
            });
        }
        self.debit(from, amount)?;
        self.credit(to, amount);
        self.allowances.insert((from, caller), allowance - amount);
        Ok(())
    }

    fn credit(&mut self, account: Address, amount: U256) {
        let balance = self.balances.entry(account).or_default();
        *balance += amount;
    }

    fn credit_supply(&mut self, account: Address, amount: U256) -> TokenResult<()> {
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::SupplyOverflow)?;
        self.credit(account, amount);
        Ok(())
    }

    fn debit(&mut self, account: Address, amount: U256) -> TokenResult<()> {
        let balance = self.balance_of(account);
        if balance < amount {
            return Err(TokenError::InsufficientBalance {
                balance,
                needed: amount,
            });
        }
        self.balances.insert(account, balance - amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;
    use alloy::primitives::address;

    const OWNER: Address = address!("0x1000000000000000000000000000000000000001");
    const USER1: Address = address!("0x1000000000000000000000000000000000000002");
    const USER2: Address = address!("0x1000000000000000000000000000000000000003");

    fn token() -> TokenState {
        TokenState::new("PayPal USD Mock", "PYUSDM", 6, OWNER)
    }

    #[test]
    fn owner_mints_to_any_address() {
        let mut t = token();
        t.mint_to(OWNER, USER1, units(1000)).unwrap();
        assert_eq!(t.balance_of(USER1), units(1000));
        assert_eq!(t.total_supply, units(1000));
    }

    #[test]
    fn anyone_mints_to_themselves() {
        let mut t = token();
        t.mint_self(USER1, units(500)).unwrap();
        assert_eq!(t.balance_of(USER1), units(500));
        assert_eq!(t.total_supply, units(500));
    }

    #[test]
    fn non_owner_cannot_mint_to_others() {
        let mut t = token();
        let err = t.mint_to(USER1, USER2, units(1)).unwrap_err();
        assert_eq!(err, TokenError::NotOwner(USER1));
        assert_eq!(t.total_supply, U256::ZERO);
    }

    #[test]
    fn mint_to_zero_address_fails_and_leaves_balances_unchanged() {
        let mut t = token();
        t.mint_to(OWNER, USER1, units(10)).unwrap();
        let before = t.clone();

        for amount in [U256::from(1u64), units(1), units(1_000_000)] {
            let err = t.mint_to(OWNER, Address::ZERO, amount).unwrap_err();
            assert_eq!(err, TokenError::MintToZeroAddress);
        }

        assert_eq!(t.balances, before.balances);
        assert_eq!(t.total_supply, before.total_supply);
    }

    #[test]
    fn mint_rejects_zero_amount() {
        let mut t = token();
        assert_eq!(
            t.mint_self(USER1, U256::ZERO).unwrap_err(),
            TokenError::ZeroAmount
        );
        assert_eq!(
            t.mint_to(OWNER, USER1, U256::ZERO).unwrap_err(),
            TokenError::ZeroAmount
        );
    }

    #[test]
    fn burn_debits_caller_and_supply() {
        let mut t = token();
        t.mint_to(OWNER, USER1, units(1000)).unwrap();
        t.burn(USER1, units(100)).unwrap();
        assert_eq!(t.balance_of(USER1), units(900));
        assert_eq!(t.total_supply, units(900));
    }

    #[test]
    fn burn_beyond_balance_fails() {
        let mut t = token();
        t.mint_to(OWNER, USER1, units(1000)).unwrap();
        let err = t.burn(USER1, units(2000)).unwrap_err();
        assert_eq!(
            err,
            TokenError::InsufficientBalance {
                balance: units(1000),
                needed: units(2000),
            }
        );
        assert_eq!(t.balance_of(USER1), units(1000));
    }

    #[test]
    fn owner_burns_from_any_address() {
        let mut t = token();
        t.mint_to(OWNER, USER1, units(1000)).unwrap();
        t.burn_from(OWNER, USER1, units(200)).unwrap();
        assert_eq!(t.balance_of(USER1), units(800));
        assert_eq!(t.total_supply, units(800));

        let err = t.burn_from(USER1, USER1, units(1)).unwrap_err();
        assert_eq!(err, TokenError::NotOwner(USER1));
    }

    #[test]
    fn standard_transfer_moves_value() {
        let mut t = token();
        t.mint_to(OWNER, USER1, units(1000)).unwrap();
        t.transfer(USER1, USER2, units(100)).unwrap();
        assert_eq!(t.balance_of(USER1), units(900));
        assert_eq!(t.balance_of(USER2), units(100));
        assert_eq!(t.total_supply, units(1000));
    }

    #[test]
    fn transfer_from_spends_allowance() {
        let mut t = token();
        t.mint_to(OWNER, USER1, units(1000)).unwrap();
        t.approve(USER1, USER2, units(100)).unwrap();

        t.transfer_from(USER2, USER1, USER2, units(100)).unwrap();
        assert_eq!(t.balance_of(USER2), units(100));
        assert_eq!(t.allowance(USER1, USER2), U256::ZERO);
    }

    #[test]
    fn transfer_from_succeeds_iff_within_balance_and_allowance() {
        // balance 50, allowance 80: bounded by balance
        let mut t = token();
        t.mint_to(OWNER, USER1, units(50)).unwrap();
        t.approve(USER1, USER2, units(80)).unwrap();
        let err = t.transfer_from(USER2, USER1, USER2, units(60)).unwrap_err();
        assert_eq!(
            err,
            TokenError::InsufficientBalance {
                balance: units(50),
                needed: units(60),
            }
        );
        // nothing spent by the failed attempt
        assert_eq!(t.allowance(USER1, USER2), units(80));
        assert_eq!(t.balance_of(USER1), units(50));

        // balance 50, allowance 30: bounded by allowance
        t.approve(USER1, USER2, units(30)).unwrap();
        let err = t.transfer_from(USER2, USER1, USER2, units(40)).unwrap_err();
        assert_eq!(
            err,
            TokenError::InsufficientAllowance {
                allowance: units(30),
                needed: units(40),
            }
        );
        assert_eq!(t.allowance(USER1, USER2), units(30));

        // within both bounds: succeeds and both drop by the amount
        t.transfer_from(USER2, USER1, USER2, units(30)).unwrap();
        assert_eq!(t.balance_of(USER1), units(20));
        assert_eq!(t.balance_of(USER2), units(30));
        assert_eq!(t.allowance(USER1, USER2), U256::ZERO);
    }

    #[test]
    fn approve_overwrites_previous_allowance() {
        let mut t = token();
        t.approve(USER1, USER2, units(5)).unwrap();
        t.approve(USER1, USER2, units(2)).unwrap();
        assert_eq!(t.allowance(USER1, USER2), units(2));

        let err = t.approve(USER1, Address::ZERO, units(1)).unwrap_err();
        assert_eq!(err, TokenError::ApproveZeroAddress);
    }
}
