use crate::errors::{AppError, AppResult};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use std::env;

/// Everything the scripts need from the environment: the node to talk to and
/// the two signing accounts the demo sequence moves tokens between.
#[derive(Debug)]
pub struct AppConfig {
    /// The URL of the Ethereum RPC.
    pub rpc_url: String,
    /// Account A, the deployer/owner of the contracts.
    pub deployer_key: PrivateKeySigner,
    /// Account B, the counterparty that approves and spends through the
    /// transfer contract.
    pub counterparty_key: PrivateKeySigner,
}

/// Reads the environment for required values and sets them into the config.
pub fn load_config() -> AppResult<AppConfig> {
    dotenv::dotenv().ok();

    let rpc_url = env::var("RPC_URL").map_err(|_| AppError::MissingEnv("RPC_URL"))?;

    let deployer_key: PrivateKeySigner = env::var("DEPLOYER_PRIVATE_KEY")
        .map_err(|_| AppError::MissingEnv("DEPLOYER_PRIVATE_KEY"))?
        .parse()
        .map_err(|_| AppError::InvalidEnv("DEPLOYER_PRIVATE_KEY"))?;

    let counterparty_key: PrivateKeySigner = env::var("COUNTERPARTY_PRIVATE_KEY")
        .map_err(|_| AppError::MissingEnv("COUNTERPARTY_PRIVATE_KEY"))?
        .parse()
        .map_err(|_| AppError::InvalidEnv("COUNTERPARTY_PRIVATE_KEY"))?;

    Ok(AppConfig {
        rpc_url,
        deployer_key,
        counterparty_key,
    })
}

impl AppConfig {
    /// Builds a wallet-backed provider for the given signer.
    pub fn provider_for(&self, signer: &PrivateKeySigner) -> AppResult<DynProvider> {
        let url = self
            .rpc_url
            .parse()
            .map_err(|_| AppError::InvalidRpcUrl(self.rpc_url.clone()))?;

        Ok(ProviderBuilder::new()
            .wallet(signer.clone())
            .connect_http(url)
            .erased())
    }
}
