//! Conversions between ethers and alloy types used by the sol!-generated calls

use ethers::types::{Address as EAddress, U256 as EU256};

/// Converts an ethers address into an alloy address
pub fn sol_address(addr: EAddress) -> alloy_primitives::Address {
    alloy_primitives::Address::from(addr.0)
}

/// Converts an ethers U256 into an alloy U256
pub fn sol_u256(value: EU256) -> alloy_primitives::U256 {
    alloy_primitives::U256::from_limbs(value.0)
}

/// Converts an alloy address back into an ethers address
pub fn eth_address(addr: alloy_primitives::Address) -> EAddress {
    EAddress::from_slice(addr.as_slice())
}

/// Converts an alloy U256 back into an ethers U256
pub fn eth_u256(value: alloy_primitives::U256) -> EU256 {
    EU256(value.into_limbs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_round_trip() {
        let addr: EAddress = "0x9c5754De1443984659E1b3a8d1931D83475ba29C".parse().unwrap();
        assert_eq!(eth_address(sol_address(addr)), addr);
    }

    #[test]
    fn u256_round_trip() {
        let value = EU256::from(1_695_000_030_u64);
        assert_eq!(eth_u256(sol_u256(value)), value);
    }
}
