use crate::addresses::pyusd_deployment;
use crate::contract::IPYUSDMock::IPYUSDMockInstance;
use crate::contract::IPYUSDTransfer::IPYUSDTransferInstance;
use alloy::providers::{DynProvider, Provider};
use alloy::sol;
use alloy::transports::{RpcError, TransportErrorKind};
use alloy_chains::NamedChain;
use thiserror::Error;

pub type BindingsResult<T> = Result<T, BindingsError>;

#[derive(Error, Debug)]
pub enum BindingsError {
    #[error("The RPC transport returned an error.")]
    RpcTransportError(RpcError<TransportErrorKind>),
    #[error("The chain ID {0} is not in the list of named chains.")]
    ChainIdUnknown(u64),
    #[error("The PYUSD contracts have not been deployed on the provided chain '{0}'.")]
    UnsupportedChain(NamedChain),
}

sol! {
    /// The mock PYUSD token. Standard ERC20 surface plus the permissive
    /// minting the test deployments allow: anyone may mint to themselves,
    /// only the owner may mint to (or burn from) arbitrary addresses.
    ///
    /// `mint` is overloaded; alloy disambiguates the generated calls as
    /// `mint_0(amount)` and `mint_1(to, amount)`.
    #[sol(rpc)]
    interface IPYUSDMock {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address to, uint256 amount) external returns (bool);
        function transferFrom(address from, address to, uint256 amount) external returns (bool);

        function mint(uint256 amount) external;
        function mint(address to, uint256 amount) external;
        function burn(uint256 amount) external;
        function burnFrom(address from, uint256 amount) external;
        function owner() external view returns (address);

        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);
    }
}

sol! {
    /// The escrow-style transfer contract. Pulls the configured token from
    /// the caller through the allowance mechanism and forwards it, consuming
    /// the caller-supplied order id exactly once.
    #[sol(rpc)]
    interface IPYUSDTransfer {
        function transferPYUSD(address recipient, uint256 amount, uint256 orderId) external;
        function isOrderIdUsed(uint256 orderId) external view returns (bool);
        function PYUSD_TOKEN() external view returns (address);
        function getContractInfo() external view returns (address);
        function owner() external view returns (address);
        function emergencyWithdraw(address token, uint256 amount) external;

        event PYUSDTransferExecuted(
            address indexed sender,
            address indexed recipient,
            uint256 amount,
            uint256 indexed orderId
        );
    }
}

/// Resolves the provider's chain into a named chain.
async fn named_chain(provider: &DynProvider) -> BindingsResult<NamedChain> {
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(BindingsError::RpcTransportError)?;

    NamedChain::try_from(chain_id).map_err(|_| BindingsError::ChainIdUnknown(chain_id))
}

/// Returns an instance of the PYUSD token contract deployed on the
/// provider's chain.
pub async fn pyusd_token(provider: &DynProvider) -> BindingsResult<IPYUSDMockInstance<DynProvider>> {
    let chain = named_chain(provider).await?;

    match pyusd_deployment(&chain) {
        Some(deployment) => Ok(IPYUSDMockInstance::new(deployment.token, provider.clone())),
        None => Err(BindingsError::UnsupportedChain(chain)),
    }
}

/// Returns an instance of the PYUSDTransfer contract deployed on the
/// provider's chain.
pub async fn pyusd_transfer(
    provider: &DynProvider,
) -> BindingsResult<IPYUSDTransferInstance<DynProvider>> {
    let chain = named_chain(provider).await?;

    match pyusd_deployment(&chain) {
        Some(deployment) => Ok(IPYUSDTransferInstance::new(
            deployment.transfer,
            provider.clone(),
        )),
        None => Err(BindingsError::UnsupportedChain(chain)),
    }
}
