//! Account abstraction (ERC-4337) clients for the minter
//!
//! Thin JSON-RPC clients for the bundler and paymaster endpoints, the
//! smart-account composition built on top of them, and the mint service that
//! submits a single ERC-20 mint through the account.

mod bundler;
mod error;
mod mint;
mod paymaster;
mod rpc;
mod smart_account;
mod utils;

pub use bundler::BundlerClient;
pub use error::{ClientError, MintError};
pub use mint::MintService;
pub use paymaster::{PaymasterClient, SponsorshipData};
pub use smart_account::{AccountOps, SmartAccountClient};
