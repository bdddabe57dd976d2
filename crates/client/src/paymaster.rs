//! Client for the paymaster sponsorship JSON-RPC endpoint

use crate::{error::ClientError, rpc};
use ethers::types::{Bytes, U256};
use minter_primitives::{constants::rpc as methods, PaymasterServiceData, UserOperation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

/// Context sent along with pm_sponsorUserOperation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SponsorshipRequest<'a> {
    #[serde(flatten)]
    policy: &'a PaymasterServiceData,
    calculate_gas_limits: bool,
}

/// Sponsorship response: paymaster data plus optional gas overrides
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SponsorshipData {
    pub paymaster_and_data: Bytes,
    pub pre_verification_gas: Option<U256>,
    pub verification_gas_limit: Option<U256>,
    pub call_gas_limit: Option<U256>,
}

/// Client bound to one paymaster endpoint
#[derive(Clone, Debug)]
pub struct PaymasterClient {
    url: Url,
    client: reqwest::Client,
    strict: bool,
}

impl PaymasterClient {
    /// Creates a paymaster client for the given sponsorship endpoint
    pub fn new(url: &str, strict: bool) -> Result<Self, ClientError> {
        Ok(Self { url: url.parse()?, client: reqwest::Client::new(), strict })
    }

    /// Whether a sponsorship rejection fails the submission
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Requests sponsorship for the user operation.
    ///
    /// In strict mode a rejection is an error; otherwise the rejection is
    /// logged and the operation proceeds self-funded (`None`).
    pub async fn sponsor_user_operation(
        &self,
        uo: &UserOperation,
        policy: &PaymasterServiceData,
        calculate_gas_limits: bool,
    ) -> Result<Option<SponsorshipData>, ClientError> {
        let context = SponsorshipRequest { policy, calculate_gas_limits };
        let res: Result<SponsorshipData, ClientError> = rpc::post(
            &self.client,
            &self.url,
            methods::SPONSOR_USER_OPERATION,
            json!([uo, context]),
        )
        .await;

        match res {
            Ok(data) => {
                debug!("user operation from {:?} sponsored in {:?} mode", uo.sender, policy.mode);
                Ok(Some(data))
            }
            Err(err) if !self.strict => {
                warn!("paymaster refused sponsorship, submitting self-funded: {err}");
                Ok(None)
            }
            Err(err) => Err(ClientError::SponsorshipRejected { inner: err.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // nothing listens on the discard port, so every request fails at transport
    const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

    #[tokio::test]
    async fn lenient_mode_falls_back_to_self_funded() {
        let client = PaymasterClient::new(DEAD_ENDPOINT, false).unwrap();
        assert!(!client.strict());

        let sponsorship = client
            .sponsor_user_operation(
                &UserOperation::default(),
                &PaymasterServiceData::sponsored(),
                true,
            )
            .await
            .unwrap();
        assert!(sponsorship.is_none());
    }

    #[tokio::test]
    async fn strict_mode_rejects_on_sponsorship_failure() {
        let client = PaymasterClient::new(DEAD_ENDPOINT, true).unwrap();
        assert!(client.strict());

        let err = client
            .sponsor_user_operation(
                &UserOperation::default(),
                &PaymasterServiceData::sponsored(),
                true,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::SponsorshipRejected { .. }));
    }
}
