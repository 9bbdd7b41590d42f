//! Worker configuration.
//!
//! Read from environment variables at startup:
//! - `KEYSTORE_NETWORK`: default network when a request omits `network`
//!   (`bitcoin`, `bitcoin-test`, `monacoin`, `litecoin`; default `bitcoin`)
//! - `RUST_LOG`: log filter for stderr output (default `info`)

use coin_keys::Network;

pub const NETWORK_ENV: &str = "KEYSTORE_NETWORK";

/// Load the default network from the environment.
pub fn load_default_network() -> Result<Network, String> {
    network_from_env_value(std::env::var(NETWORK_ENV).ok().as_deref())
}

fn network_from_env_value(value: Option<&str>) -> Result<Network, String> {
    match value {
        None | Some("") => Ok(Network::default()),
        Some(name) => name
            .parse()
            .map_err(|e| format!("Invalid {}: {}", NETWORK_ENV, e)),
    }
}

/// Network named in the request, or the configured default.
pub fn resolve_network(requested: Option<&str>) -> Result<Network, String> {
    match requested {
        Some(name) => name.parse().map_err(|e| format!("Invalid network: {}", e)),
        None => load_default_network(),
    }
}
