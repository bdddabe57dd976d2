//! The minter CLI: wires wallet, bundler, paymaster, and smart account
//! together and performs one mint

use crate::config::Config;
use clap::{value_parser, Args, Parser};
use ethers::{providers::Middleware, types::Address};
use minter_client::{BundlerClient, MintService, PaymasterClient, SmartAccountClient};
use minter_primitives::{provider::create_http_provider, MintConfig, PaymasterMode, Wallet};
use std::{str::FromStr, sync::Arc};
use tracing::info;

/// The main minter CLI interface
#[derive(Debug, Parser)]
#[command(author, version, about = "Minter", long_about = None)]
pub struct Cli {
    /// Overrides for the default mint configuration
    #[clap(flatten)]
    mint: MintArgs,

    /// The verbosity level
    #[clap(long, short, global = true, default_value_t = 2, value_parser = value_parser!(u8).range(..=4))]
    verbosity: u8,
}

impl Cli {
    /// Get the log level based on the verbosity level
    pub fn get_log_level(&self) -> String {
        match self.verbosity {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
        .into()
    }
}

/// Optional overrides for the default mint configuration
#[derive(Clone, Debug, Args)]
pub struct MintArgs {
    /// Token contract to mint from
    #[clap(long, value_parser=parse_address)]
    token_address: Option<Address>,

    /// Amount of tokens to mint (whole units)
    #[clap(long)]
    amount: Option<u64>,

    /// Decimal precision of the token
    #[clap(long)]
    decimals: Option<u32>,

    /// Sponsorship mode (sponsored or erc20)
    #[clap(long, value_parser=parse_paymaster_mode)]
    paymaster_mode: Option<PaymasterMode>,

    /// Fee token, required for erc20 mode
    #[clap(long, value_parser=parse_address)]
    preferred_token: Option<Address>,
}

impl MintArgs {
    /// Explicit configuration when any override is given; `None` falls back
    /// to the default mint configuration
    fn to_config(&self) -> Option<MintConfig> {
        if self.token_address.is_none()
            && self.amount.is_none()
            && self.decimals.is_none()
            && self.paymaster_mode.is_none()
            && self.preferred_token.is_none()
        {
            return None;
        }

        let mut config = MintConfig::default();
        if let Some(token_address) = self.token_address {
            config.token_address = token_address;
        }
        if let Some(amount) = self.amount {
            config.mint_amount = amount;
        }
        if let Some(decimals) = self.decimals {
            config.decimals = decimals;
        }
        if let Some(paymaster_mode) = self.paymaster_mode {
            config.paymaster_mode = paymaster_mode;
        }
        if let Some(preferred_token) = self.preferred_token {
            config.preferred_token = Some(preferred_token);
        }
        Some(config)
    }
}

/// Parses address from string
fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_str(s).map_err(|_| format!("String {s} is not a valid address"))
}

/// Parses PaymasterMode from string
fn parse_paymaster_mode(s: &str) -> Result<PaymasterMode, String> {
    PaymasterMode::from_str(s).map_err(|_| format!("String {s} is not a valid paymaster mode"))
}

pub fn run() -> eyre::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let rust_log = match std::env::var("RUST_LOG") {
        Ok(val) => format!("{val},minter={}", cli.get_log_level()),
        Err(_) => format!("minter={}", cli.get_log_level()),
    };
    std::env::set_var("RUST_LOG", rust_log);
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    rt.block_on(execute(cli, config))
}

async fn execute(cli: Cli, config: Config) -> eyre::Result<()> {
    let eth_client = Arc::new(create_http_provider(&config.rpc_url).await?);
    let chain_id = eth_client.get_chainid().await?.as_u64();
    info!("connected to chain {chain_id} via {}", config.rpc_url);

    let wallet = Wallet::from_private_key(&config.private_key, chain_id)?;
    let bundler = BundlerClient::new(&config.bundler_prefix_url, chain_id, &config.bundler_api_key)?;
    let paymaster = match &config.paymaster_url {
        Some(url) => Some(PaymasterClient::new(url, config.paymaster_strict_mode)?),
        None => None,
    };

    let account = SmartAccountClient::new(wallet, eth_client, bundler, paymaster, chain_id)?;
    let service = MintService::new(account);

    let result = service.mint(cli.mint.to_config()).await;
    match (result.success, result.transaction_hash, result.error) {
        (true, Some(transaction_hash), _) => {
            println!("{transaction_hash:?}");
            Ok(())
        }
        (_, _, error) => Err(eyre::eyre!(
            "mint failed: {}",
            error.unwrap_or_else(|| "unknown error occurred".into())
        )),
    }
}
