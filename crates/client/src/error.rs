//! Typed errors for the bundler, paymaster, and smart-account clients

use minter_primitives::UserOperationHash;
use thiserror::Error;

/// Client error
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint URL could not be parsed
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// HTTP transport failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// JSON-RPC error response
    #[error("{method} failed with code {code}: {message}")]
    Rpc {
        /// The JSON-RPC method that failed
        method: String,
        /// The error code returned by the endpoint
        code: i64,
        /// The error message returned by the endpoint
        message: String,
    },
    /// Response body did not match the expected shape
    #[error("unexpected response: {inner}")]
    UnexpectedResponse {
        /// The inner error message
        inner: String,
    },
    /// Error from the underlying execution client
    #[error("provider error: {inner}")]
    Provider {
        /// The inner error message
        inner: String,
    },
    /// Signing failure
    #[error("signer error: {inner}")]
    Signer {
        /// The inner error message
        inner: String,
    },
    /// Paymaster refused to sponsor the user operation
    #[error("sponsorship rejected: {inner}")]
    SponsorshipRejected {
        /// The inner error message
        inner: String,
    },
    /// No receipt appeared within the polling budget
    #[error("no receipt for user operation {hash:?} after {attempts} attempts")]
    ReceiptTimeout {
        /// The user operation that never got a receipt
        hash: UserOperationHash,
        /// Number of lookups performed
        attempts: usize,
    },
}

/// Mint error, flattened into a `MintResult` at the service boundary
#[derive(Debug, Error)]
pub enum MintError {
    /// ERC-20 fee mode without a designated fee token
    #[error("preferredToken required for ERC20 mode")]
    MissingPreferredToken,
    /// Mint amount could not be scaled to the configured decimals
    #[error("invalid mint amount: {inner}")]
    InvalidAmount {
        /// The inner error message
        inner: String,
    },
    /// Submission through the smart account failed
    #[error("transaction failed: {0}")]
    Submission(#[from] ClientError),
    /// The user operation was included but did not execute successfully
    #[error("transaction failed during execution: {reason}")]
    ExecutionFailed {
        /// Revert reason reported by the receipt
        reason: String,
    },
}
