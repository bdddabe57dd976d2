//! Mint configuration and result types

use crate::{constants::mint, paymaster::PaymasterMode, utils::as_checksum_addr};
use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};

/// Configuration of a single mint submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintConfig {
    /// Token contract the mint is called on
    #[serde(serialize_with = "as_checksum_addr")]
    pub token_address: Address,
    /// Amount of tokens to mint (whole units)
    pub mint_amount: u64,
    /// Decimal precision of the token
    pub decimals: u32,
    /// How gas for the mint is paid
    pub paymaster_mode: PaymasterMode,
    /// Fee token, required iff the mode is ERC-20
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_token: Option<Address>,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            token_address: mint::TOKEN_ADDRESS.parse().expect("default token address is valid"),
            mint_amount: mint::AMOUNT,
            decimals: mint::DECIMALS,
            paymaster_mode: PaymasterMode::Sponsored,
            preferred_token: None,
        }
    }
}

/// Terminal report of one mint operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<H256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MintResult {
    /// Result of a mint that was included and executed successfully
    pub fn successful(transaction_hash: H256) -> Self {
        Self { success: true, transaction_hash: Some(transaction_hash), error: None }
    }

    /// Result of a mint that failed at any stage
    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, transaction_hash: None, error: Some(error.into()) }
    }
}
