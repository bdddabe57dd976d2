//! A `Wallet` is a wrapper around an ethers wallet bound to one chain

use crate::UserOperation;
use ethers::{
    prelude::k256::ecdsa::SigningKey,
    signers::Signer,
    types::Address,
};
use tracing::debug;

/// Wrapper around ethers wallet
#[derive(Clone, Debug)]
pub struct Wallet {
    /// Signing key of the wallet
    pub signer: ethers::signers::Wallet<SigningKey>,
}

impl Wallet {
    /// Builds a `Wallet` from a hex-encoded private key, with or without the
    /// `0x` prefix
    ///
    /// # Arguments
    /// * `private_key` - The private key as a 32-byte hex string
    /// * `chain_id` - The chain id of the blockchain network to be used
    ///
    /// # Returns
    /// * `Self` - A new `Wallet` instance
    pub fn from_private_key(private_key: &str, chain_id: u64) -> eyre::Result<Self> {
        let key = private_key.strip_prefix("0x").unwrap_or(private_key);

        if key.chars().count() != 64 || !key.chars().all(|c| c.is_ascii_hexdigit()) {
            eyre::bail!("private key is not a valid 32-byte hex string");
        }

        let signer =
            key.parse::<ethers::signers::Wallet<SigningKey>>()?.with_chain_id(chain_id);
        debug!("wallet created for owner {:?} on chain {chain_id}", signer.address());

        Ok(Self { signer })
    }

    /// Address of the signing key
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Signs the user operation
    ///
    /// # Arguments
    /// * `uo` - The [UserOperation](UserOperation) to be signed
    /// * `entry_point` - The entry point contract address
    /// * `chain_id` - The chain id of the blockchain network to be used
    ///
    /// # Returns
    /// * `UserOperation` - The signed [UserOperation](UserOperation)
    pub async fn sign_user_operation(
        &self,
        uo: &UserOperation,
        entry_point: &Address,
        chain_id: u64,
    ) -> eyre::Result<UserOperation> {
        let h = uo.hash(entry_point, chain_id);
        let sig = self.signer.sign_message(h.0.as_bytes()).await?;
        Ok(uo.clone().signature(sig.to_vec().into()))
    }
}
