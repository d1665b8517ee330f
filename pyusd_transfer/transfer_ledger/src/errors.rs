use alloy::primitives::{Address, U256};
use thiserror::Error;

pub type TokenResult<T> = Result<T, TokenError>;
pub type EscrowResult<T> = Result<T, EscrowError>;

/// A precondition failure of a token operation. Display strings mirror the
/// revert reasons of the deployed PYUSDMock contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("PYUSDMock: Amount must be greater than 0")]
    ZeroAmount,
    #[error("PYUSDMock: Cannot mint to zero address")]
    MintToZeroAddress,
    #[error("PYUSDMock: Cannot transfer to zero address")]
    TransferToZeroAddress,
    #[error("PYUSDMock: Cannot approve zero address")]
    ApproveZeroAddress,
    #[error("PYUSDMock: Insufficient balance (have {balance}, need {needed})")]
    InsufficientBalance { balance: U256, needed: U256 },
    #[error("PYUSDMock: Insufficient allowance (have {allowance}, need {needed})")]
    InsufficientAllowance { allowance: U256, needed: U256 },
    #[error("PYUSDMock: caller {0} is not the owner")]
    NotOwner(Address),
    #[error("PYUSDMock: total supply overflow")]
    SupplyOverflow,
}

/// A precondition failure of a transfer-escrow operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscrowError {
    #[error("PYUSDTransfer: Invalid PYUSD token address")]
    InvalidTokenAddress,
    #[error("PYUSDTransfer: Amount must be greater than 0")]
    ZeroAmount,
    #[error("PYUSDTransfer: Invalid recipient address")]
    InvalidRecipient,
    #[error("PYUSDTransfer: Order ID {0} already used")]
    OrderIdUsed(U256),
    #[error("Ownable: caller {0} is not the owner")]
    NotOwner(Address),
    #[error("no escrow contract deployed at {0}")]
    UnknownEscrow(Address),
    #[error("no token contract deployed at {0}")]
    UnknownToken(Address),
    #[error("PYUSDTransfer: insufficient contract funds (have {balance}, need {needed})")]
    InsufficientContractFunds { balance: U256, needed: U256 },
    #[error("insufficient native funds (have {balance}, need {needed})")]
    InsufficientNativeFunds { balance: U256, needed: U256 },
    #[error(transparent)]
    Token(#[from] TokenError),
}
