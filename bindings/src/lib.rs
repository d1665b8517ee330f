//! Typed bindings for the PYUSD mock token and the PYUSD transfer contract,
//! plus the addresses they are deployed at on the supported chains.

pub mod addresses;
pub mod contract;
