//! Startup configuration, read once from the environment

use eyre::WrapErr;
use std::{env, str::FromStr};

/// Deployment environment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeEnv {
    Dev,
    Production,
}

impl FromStr for NodeEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Dev),
            "prod" | "production" => Ok(Self::Production),
            other => Err(format!("{other} is not a valid node environment")),
        }
    }
}

/// Environment configuration of the minter process
#[derive(Clone, Debug)]
pub struct Config {
    /// Listen port, carried for deployment parity; the single-shot flow does
    /// not serve requests
    pub port: u16,
    /// Deployment environment
    pub node_env: NodeEnv,
    /// Prefix of the bundler endpoint; chain id and API key are appended
    pub bundler_prefix_url: String,
    /// API key appended to the bundler endpoint
    pub bundler_api_key: String,
    /// Private key of the account owner
    pub private_key: String,
    /// Paymaster endpoint; sponsorship is skipped entirely when unset
    pub paymaster_url: Option<String>,
    /// Whether a sponsorship rejection fails the submission
    pub paymaster_strict_mode: bool,
    /// Execution client RPC endpoint
    pub rpc_url: String,
}

impl Config {
    /// Reads the configuration from the environment
    pub fn from_env() -> eyre::Result<Self> {
        let node_env = match env::var("NODE_ENV") {
            Ok(val) => val.parse::<NodeEnv>().map_err(|err| eyre::eyre!(err))?,
            Err(_) => NodeEnv::Dev,
        };

        let paymaster_strict_mode = match env::var("PAYMASTER_STRICT_MODE") {
            Ok(val) => val.parse::<bool>().wrap_err("PAYMASTER_STRICT_MODE must be a boolean")?,
            Err(_) => node_env == NodeEnv::Dev,
        };

        Ok(Self {
            port: match env::var("PORT") {
                Ok(val) => val.parse::<u16>().wrap_err("PORT must be a number")?,
                Err(_) => 5000,
            },
            node_env,
            bundler_prefix_url: required("BUNDLER_PREFIX_URL")?,
            bundler_api_key: required("BUNDLER_API_KEY")?,
            private_key: required("PRIVATE_KEY")?,
            paymaster_url: env::var("PAYMASTER_URL").ok().filter(|val| !val.is_empty()),
            paymaster_strict_mode,
            rpc_url: required("RPC_URL")?,
        })
    }
}

fn required(name: &str) -> eyre::Result<String> {
    env::var(name).wrap_err_with(|| format!("{name} must be set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // env is process-global, so everything lives in one test
    #[test]
    fn config_from_env() {
        env::set_var("BUNDLER_PREFIX_URL", "https://bundler.example.com/api/v2");
        env::set_var("BUNDLER_API_KEY", "abc123");
        env::set_var(
            "PRIVATE_KEY",
            "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        );
        env::set_var("RPC_URL", "https://rpc.example.com");
        env::remove_var("NODE_ENV");
        env::remove_var("PAYMASTER_STRICT_MODE");
        env::remove_var("PAYMASTER_URL");
        env::remove_var("PORT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.node_env, NodeEnv::Dev);
        // strict mode defaults from the dev environment
        assert!(config.paymaster_strict_mode);
        assert!(config.paymaster_url.is_none());

        env::set_var("NODE_ENV", "production");
        env::set_var("PAYMASTER_URL", "https://paymaster.example.com/api/v1/80001/key");
        env::set_var("PORT", "8080");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.node_env, NodeEnv::Production);
        assert!(!config.paymaster_strict_mode);
        assert!(config.paymaster_url.is_some());

        env::set_var("PAYMASTER_STRICT_MODE", "true");
        let config = Config::from_env().unwrap();
        assert!(config.paymaster_strict_mode);

        env::remove_var("RPC_URL");
        assert!(Config::from_env().is_err());
    }
}
