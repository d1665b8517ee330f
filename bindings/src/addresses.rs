use alloy::primitives::{Address, address};
use alloy_chains::NamedChain;
use std::collections::HashMap;

/// The pair of contract addresses a script needs on a given chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    /// The PYUSD token contract (the mock on local chains).
    pub token: Address,
    /// The PYUSDTransfer escrow contract.
    pub transfer: Address,
}

/// Returns a map of PYUSD deployments for all supported chains.
pub fn pyusd_deployments_map() -> HashMap<NamedChain, Deployment> {
    use NamedChain::*;
    HashMap::from([
        (
            // Local hardhat/anvil chain running the PYUSDMock pair.
            AnvilHardhat,
            Deployment {
                token: address!("0xd73a739f9eddd8cb0be824fab25232362271b45a"),
                transfer: address!("0x173c2afbd709e1a1cd4a26007cde467165886aa6"),
            },
        ),
        (
            Sepolia,
            Deployment {
                token: address!("0xCaC524BcA292aaade2DF8A05cC58F0a65B1B3bB9"),
                transfer: address!("0x178f726de574954f4fdeb6c03a6f360ac5f84df2"),
            },
        ),
    ])
}

/// Returns the PYUSD deployment on the provided chain, if any.
pub fn pyusd_deployment(chain: &NamedChain) -> Option<Deployment> {
    pyusd_deployments_map().get(chain).copied()
}
