//! Account abstraction (ERC-4337) primitive types for the minter
//!
//! This crate contains the wallet, user operation, sponsorship, and mint
//! configuration types shared by the client crate and the binary.

pub mod constants;
mod mint;
mod paymaster;
pub mod provider;
mod user_operation;
mod utils;
mod wallet;

pub use mint::{MintConfig, MintResult};
pub use paymaster::{PaymasterMode, PaymasterServiceData};
pub use user_operation::{
    UserOperation, UserOperationGasEstimation, UserOperationHash, UserOperationReceipt,
};
pub use wallet::Wallet;
