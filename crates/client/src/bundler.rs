//! Client for the ERC-4337 bundler JSON-RPC endpoint

use crate::{error::ClientError, rpc};
use ethers::types::Address;
use minter_primitives::{
    constants::{receipt, rpc as methods},
    UserOperation, UserOperationGasEstimation, UserOperationHash, UserOperationReceipt,
};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Client bound to one bundler endpoint (one chain)
#[derive(Clone, Debug)]
pub struct BundlerClient {
    url: Url,
    client: reqwest::Client,
}

impl BundlerClient {
    /// Builds the bundler endpoint URL from the configured prefix, the chain
    /// id, and the API key
    pub fn new(prefix_url: &str, chain_id: u64, api_key: &str) -> Result<Self, ClientError> {
        let url =
            format!("{}/{chain_id}/{api_key}", prefix_url.trim_end_matches('/')).parse::<Url>()?;
        Ok(Self { url, client: reqwest::Client::new() })
    }

    /// Endpoint the client is bound to
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Calls eth_estimateUserOperationGas
    pub async fn estimate_user_operation_gas(
        &self,
        uo: &UserOperation,
        entry_point: &Address,
    ) -> Result<UserOperationGasEstimation, ClientError> {
        trace!("estimating gas for user operation from {:?}", uo.sender);
        rpc::post(
            &self.client,
            &self.url,
            methods::ESTIMATE_USER_OPERATION_GAS,
            json!([uo, entry_point]),
        )
        .await
    }

    /// Calls eth_sendUserOperation
    pub async fn send_user_operation(
        &self,
        uo: &UserOperation,
        entry_point: &Address,
    ) -> Result<UserOperationHash, ClientError> {
        debug!("sending user operation from {:?} to {}", uo.sender, self.url);
        rpc::post(&self.client, &self.url, methods::SEND_USER_OPERATION, json!([uo, entry_point]))
            .await
    }

    /// Calls eth_getUserOperationReceipt; `None` until the operation is
    /// included
    pub async fn get_user_operation_receipt(
        &self,
        hash: &UserOperationHash,
    ) -> Result<Option<UserOperationReceipt>, ClientError> {
        rpc::post(&self.client, &self.url, methods::GET_USER_OPERATION_RECEIPT, json!([hash]))
            .await
    }

    /// Polls for the receipt until inclusion or until the attempt budget runs
    /// out
    pub async fn wait_for_receipt(
        &self,
        hash: &UserOperationHash,
    ) -> Result<UserOperationReceipt, ClientError> {
        for attempt in 0..receipt::POLL_ATTEMPTS {
            if let Some(receipt) = self.get_user_operation_receipt(hash).await? {
                return Ok(receipt);
            }
            trace!("user operation {hash:?} not yet included (attempt {attempt})");
            tokio::time::sleep(Duration::from_millis(receipt::POLL_INTERVAL)).await;
        }
        Err(ClientError::ReceiptTimeout { hash: *hash, attempts: receipt::POLL_ATTEMPTS })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundler_url_composition() {
        let client =
            BundlerClient::new("https://bundler.example.com/api/v2/", 80_001, "abc123").unwrap();
        assert_eq!(client.url().as_str(), "https://bundler.example.com/api/v2/80001/abc123");
    }

    #[test]
    fn bundler_url_rejects_garbage() {
        assert!(BundlerClient::new("not a url", 80_001, "abc123").is_err());
    }
}
