//! Account abstraction (ERC-4337)-related constants

/// Entry point smart contract
pub mod entry_point {
    /// Address of the entry point smart contract
    pub const ADDRESS: &str = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789";
    /// Version of the entry point smart contract
    pub const VERSION: &str = "0.6.0";
}

/// Simple account factory
pub mod simple_account {
    /// Address of the simple account factory smart contract
    pub const FACTORY_ADDRESS: &str = "0x9406Cc6185a346906296840746125a0E44976454";
    /// Creation salt for the counterfactual account address
    pub const CREATE_INDEX: u64 = 0;
}

/// Default mint configuration
pub mod mint {
    /// Token minted when no explicit configuration is given
    pub const TOKEN_ADDRESS: &str = "0x9Ea1425DA65be04E35410DeD2ECC5442A59d6A8D";
    /// Amount of tokens minted (whole units)
    pub const AMOUNT: u64 = 20;
    /// Decimal precision of the default token
    pub const DECIMALS: u32 = 18;
}

/// JSON-RPC methods of the bundler and paymaster endpoints
pub mod rpc {
    pub const ESTIMATE_USER_OPERATION_GAS: &str = "eth_estimateUserOperationGas";
    pub const SEND_USER_OPERATION: &str = "eth_sendUserOperation";
    pub const GET_USER_OPERATION_RECEIPT: &str = "eth_getUserOperationReceipt";
    pub const SPONSOR_USER_OPERATION: &str = "pm_sponsorUserOperation";
}

/// User operation receipt polling
pub mod receipt {
    /// Time interval between receipt lookups (in milliseconds)
    pub const POLL_INTERVAL: u64 = 3000;
    /// Number of receipt lookups before giving up
    pub const POLL_ATTEMPTS: usize = 60;
}
