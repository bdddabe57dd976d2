//! Paymaster sponsorship primitives

use crate::utils::as_checksum_addr_opt;
use ethers::types::Address;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, EnumVariantNames};

/// Sponsorship modes the paymaster supports
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames,
)]
#[strum(serialize_all = "kebab_case")]
pub enum PaymasterMode {
    /// Gas is fully sponsored by the paymaster
    #[serde(rename = "SPONSORED")]
    Sponsored,
    /// Gas is paid in an ERC-20 token designated by the sender
    #[serde(rename = "ERC20")]
    Erc20,
}

/// Sponsorship policy attached to a user operation submission
///
/// For sponsored mode the policy carries only the mode flag; for ERC-20 fee
/// mode it also names the fee token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymasterServiceData {
    pub mode: PaymasterMode,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "as_checksum_addr_opt"
    )]
    pub preferred_token: Option<Address>,
}

impl PaymasterServiceData {
    /// Policy for a fully sponsored user operation
    pub fn sponsored() -> Self {
        Self { mode: PaymasterMode::Sponsored, preferred_token: None }
    }

    /// Policy for an ERC-20 fee-paying user operation
    pub fn erc20(preferred_token: Address) -> Self {
        Self { mode: PaymasterMode::Erc20, preferred_token: Some(preferred_token) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sponsored_policy_carries_only_mode() {
        let policy = PaymasterServiceData::sponsored();
        assert_eq!(serde_json::to_value(&policy).unwrap(), json!({"mode": "SPONSORED"}));
    }

    #[test]
    fn erc20_policy_carries_fee_token() {
        let token: Address = "0x9c5754De1443984659E1b3a8d1931D83475ba29C".parse().unwrap();
        let policy = PaymasterServiceData::erc20(token);
        assert_eq!(
            serde_json::to_value(&policy).unwrap(),
            json!({
                "mode": "ERC20",
                "preferredToken": "0x9c5754De1443984659E1b3a8d1931D83475ba29C"
            })
        );
    }

    #[test]
    fn paymaster_mode_from_str() {
        assert_eq!("sponsored".parse::<PaymasterMode>().unwrap(), PaymasterMode::Sponsored);
        assert_eq!("erc20".parse::<PaymasterMode>().unwrap(), PaymasterMode::Erc20);
        assert!("gasless".parse::<PaymasterMode>().is_err());
    }
}
