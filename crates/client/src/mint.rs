//! Mint service: submits one ERC-20 mint through the smart account

use crate::{
    error::MintError,
    smart_account::AccountOps,
    utils::{sol_address, sol_u256},
};
use alloy_sol_types::{sol, SolCall};
use ethers::{
    types::{Address, Bytes, H256, U256},
    utils::parse_units,
};
use minter_primitives::{MintConfig, MintResult, PaymasterMode, PaymasterServiceData};
use tracing::{error, info};

sol! {
    function mint(address to, uint256 amount);
}

/// Service that mints tokens through a smart account, optionally sponsored by
/// a paymaster
pub struct MintService<A> {
    account: A,
}

impl<A> MintService<A>
where
    A: AccountOps,
{
    pub fn new(account: A) -> Self {
        Self { account }
    }

    /// Mints tokens to the smart account itself.
    ///
    /// Falls back to the default [MintConfig](MintConfig) when no
    /// configuration is given. Failures at any stage (configuration,
    /// submission, confirmation) are flattened into the result; this method
    /// never propagates an error.
    pub async fn mint(&self, config: Option<MintConfig>) -> MintResult {
        let config = config.unwrap_or_default();
        match self.try_mint(&config).await {
            Ok(transaction_hash) => {
                info!("mint included in transaction {transaction_hash:?}");
                MintResult::successful(transaction_hash)
            }
            Err(err) => {
                error!("mint token error: {err}");
                MintResult::failed(err.to_string())
            }
        }
    }

    async fn try_mint(&self, config: &MintConfig) -> Result<H256, MintError> {
        let policy = paymaster_service_data(config)?;

        let sender = self.account.address().await.map_err(MintError::Submission)?;
        let call_data = mint_call_data(sender, mint_amount(config)?);

        let hash =
            self.account.send_transaction(config.token_address, call_data, policy).await?;

        let receipt = self.account.wait_for_receipt(&hash).await?;
        if !receipt.success {
            let reason = if receipt.reason.is_empty() {
                "execution reverted".into()
            } else {
                receipt.reason
            };
            return Err(MintError::ExecutionFailed { reason });
        }

        Ok(receipt.tx_receipt.transaction_hash)
    }
}

/// Builds the sponsorship policy for the mint; ERC-20 fee mode requires a
/// designated fee token
fn paymaster_service_data(config: &MintConfig) -> Result<PaymasterServiceData, MintError> {
    match config.paymaster_mode {
        PaymasterMode::Sponsored => Ok(PaymasterServiceData::sponsored()),
        PaymasterMode::Erc20 => config
            .preferred_token
            .map(PaymasterServiceData::erc20)
            .ok_or(MintError::MissingPreferredToken),
    }
}

/// Scales the mint amount to the configured decimal precision
fn mint_amount(config: &MintConfig) -> Result<U256, MintError> {
    let amount = parse_units(config.mint_amount.to_string(), config.decimals)
        .map_err(|err| MintError::InvalidAmount { inner: err.to_string() })?;
    Ok(amount.into())
}

/// ABI-encodes mint(address,uint256) with the account as the recipient
fn mint_call_data(to: Address, amount: U256) -> Bytes {
    mintCall { to: sol_address(to), amount: sol_u256(amount) }.abi_encode().into()
}
