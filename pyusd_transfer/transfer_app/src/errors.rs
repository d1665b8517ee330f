use alloy_chains::NamedChain;
use pyusd_bindings::contract::BindingsError;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Everything a script run can fail with. Failures are surfaced once at the
/// top of each binary and turn into a non-zero exit; there is no retry.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("environment variable {0} could not be parsed")]
    InvalidEnv(&'static str),
    #[error("invalid RPC URL '{0}'")]
    InvalidRpcUrl(String),
    #[error("expected to be connected to {expected}, but the node reports chain ID {actual}")]
    WrongChain { expected: NamedChain, actual: u64 },
    #[error("key material was rejected: {0}")]
    Key(#[from] k256::ecdsa::Error),
    #[error(transparent)]
    Bindings(#[from] BindingsError),
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error(transparent)]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
    #[error("the RPC transport returned an error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
}
