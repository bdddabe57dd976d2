//! Smart-account client: composition of wallet, execution client, bundler,
//! and optional paymaster

use crate::{
    bundler::BundlerClient,
    error::ClientError,
    paymaster::PaymasterClient,
    utils::{eth_address, eth_u256, sol_address, sol_u256},
};
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use ethers::{
    providers::Middleware,
    types::{
        transaction::eip2718::TypedTransaction, Address, Bytes, Eip1559TransactionRequest, U256,
    },
};
use minter_primitives::{
    constants::{entry_point, simple_account},
    PaymasterServiceData, UserOperation, UserOperationHash, UserOperationReceipt, Wallet,
};
use std::sync::Arc;
use tracing::{debug, info};

sol! {
    function getAddress(address owner, uint256 salt) returns (address account);
    function createAccount(address owner, uint256 salt) returns (address account);
    function getNonce(address sender, uint192 key) returns (uint256 nonce);
    function execute(address dest, uint256 value, bytes calldata func);
}

/// Operations the mint service needs from a smart account
#[async_trait]
pub trait AccountOps: Send + Sync {
    /// Resolves the on-chain (counterfactual) address of the account
    async fn address(&self) -> Result<Address, ClientError>;

    /// Submits a call through the account and returns the user operation hash
    async fn send_transaction(
        &self,
        to: Address,
        call_data: Bytes,
        policy: PaymasterServiceData,
    ) -> Result<UserOperationHash, ClientError>;

    /// Waits for the receipt of a submitted user operation
    async fn wait_for_receipt(
        &self,
        hash: &UserOperationHash,
    ) -> Result<UserOperationReceipt, ClientError>;
}

/// Smart account bound to one signer, one chain, one bundler, and an optional
/// paymaster
#[derive(Clone, Debug)]
pub struct SmartAccountClient<M> {
    /// Owner wallet
    pub wallet: Wallet,
    /// Ethereum execution client
    pub eth_client: Arc<M>,
    /// Bundler endpoint client
    pub bundler: BundlerClient,
    /// Optional sponsorship client; absent means self-funded
    pub paymaster: Option<PaymasterClient>,
    /// Chain the account lives on
    pub chain_id: u64,
    /// Entry point contract address
    entry_point: Address,
    /// Account factory contract address
    factory: Address,
}

impl<M> SmartAccountClient<M>
where
    M: Middleware + 'static,
{
    /// Composes the signer, execution client, bundler, and optional paymaster
    /// into one account client
    pub fn new(
        wallet: Wallet,
        eth_client: Arc<M>,
        bundler: BundlerClient,
        paymaster: Option<PaymasterClient>,
        chain_id: u64,
    ) -> eyre::Result<Self> {
        Ok(Self {
            wallet,
            eth_client,
            bundler,
            paymaster,
            chain_id,
            entry_point: entry_point::ADDRESS.parse()?,
            factory: simple_account::FACTORY_ADDRESS.parse()?,
        })
    }

    /// Resolves the counterfactual account address from the factory
    async fn account_address(&self) -> Result<Address, ClientError> {
        let call = getAddressCall {
            owner: sol_address(self.wallet.address()),
            salt: alloy_primitives::U256::from(simple_account::CREATE_INDEX),
        };
        let ret = self.eth_call(self.factory, call.abi_encode().into()).await?;
        let decoded = getAddressCall::abi_decode_returns(&ret, true)
            .map_err(|err| ClientError::UnexpectedResponse { inner: format!("getAddress: {err}") })?;
        Ok(eth_address(decoded.account))
    }

    /// Entry point nonce of the account (key 0)
    async fn nonce(&self, sender: Address) -> Result<U256, ClientError> {
        let call = getNonceCall {
            sender: sol_address(sender),
            key: alloy_primitives::U256::ZERO,
        };
        let ret = self.eth_call(self.entry_point, call.abi_encode().into()).await?;
        let decoded = getNonceCall::abi_decode_returns(&ret, true)
            .map_err(|err| ClientError::UnexpectedResponse { inner: format!("getNonce: {err}") })?;
        Ok(eth_u256(decoded.nonce))
    }

    /// Factory address followed by the createAccount calldata, set when the
    /// account is not yet deployed
    fn init_code(&self) -> Bytes {
        let call = createAccountCall {
            owner: sol_address(self.wallet.address()),
            salt: alloy_primitives::U256::from(simple_account::CREATE_INDEX),
        };
        [self.factory.as_bytes(), call.abi_encode().as_slice()].concat().into()
    }

    async fn eth_call(&self, to: Address, data: Bytes) -> Result<Bytes, ClientError> {
        let tx = TypedTransaction::Eip1559(Eip1559TransactionRequest::new().to(to).data(data));
        self.eth_client
            .call(&tx, None)
            .await
            .map_err(|err| ClientError::Provider { inner: err.to_string() })
    }

    async fn sign(&self, uo: &UserOperation) -> Result<UserOperation, ClientError> {
        self.wallet
            .sign_user_operation(uo, &self.entry_point, self.chain_id)
            .await
            .map_err(|err| ClientError::Signer { inner: err.to_string() })
    }
}

#[async_trait]
impl<M> AccountOps for SmartAccountClient<M>
where
    M: Middleware + 'static,
{
    async fn address(&self) -> Result<Address, ClientError> {
        self.account_address().await
    }

    async fn send_transaction(
        &self,
        to: Address,
        call_data: Bytes,
        policy: PaymasterServiceData,
    ) -> Result<UserOperationHash, ClientError> {
        let sender = self.account_address().await?;
        let nonce = self.nonce(sender).await?;
        let (max_fee_per_gas, max_priority_fee_per_gas) = self
            .eth_client
            .estimate_eip1559_fees(None)
            .await
            .map_err(|err| ClientError::Provider { inner: err.to_string() })?;

        let execute = executeCall {
            dest: sol_address(to),
            value: sol_u256(U256::zero()),
            func: call_data.to_vec(),
        };

        let mut uo = UserOperation::default()
            .sender(sender)
            .nonce(nonce)
            .call_data(execute.abi_encode().into())
            .call_gas_limit(U256::one())
            .verification_gas_limit(U256::from(1_000_000u64))
            .pre_verification_gas(U256::one())
            .max_fee_per_gas(max_fee_per_gas)
            .max_priority_fee_per_gas(max_priority_fee_per_gas);

        let code = self
            .eth_client
            .get_code(sender, None)
            .await
            .map_err(|err| ClientError::Provider { inner: err.to_string() })?;
        if code.is_empty() {
            uo = uo.init_code(self.init_code());
        }

        let signed = self.sign(&uo).await?;
        let estimation =
            self.bundler.estimate_user_operation_gas(&signed, &self.entry_point).await?;
        debug!("user operation gas estimation for {sender:?}: {estimation:?}");

        uo.pre_verification_gas = estimation.pre_verification_gas;
        uo.verification_gas_limit = estimation.verification_gas_limit;
        uo.call_gas_limit = estimation.call_gas_limit;

        if let Some(paymaster) = &self.paymaster {
            let signed = self.sign(&uo).await?;
            if let Some(sponsorship) =
                paymaster.sponsor_user_operation(&signed, &policy, true).await?
            {
                uo = uo.paymaster_and_data(sponsorship.paymaster_and_data);
                if let Some(gas) = sponsorship.pre_verification_gas {
                    uo.pre_verification_gas = gas;
                }
                if let Some(gas) = sponsorship.verification_gas_limit {
                    uo.verification_gas_limit = gas;
                }
                if let Some(gas) = sponsorship.call_gas_limit {
                    uo.call_gas_limit = gas;
                }
            }
        }

        let signed = self.sign(&uo).await?;
        let hash = self.bundler.send_user_operation(&signed, &self.entry_point).await?;
        info!("user operation {hash:?} submitted for account {sender:?}");
        Ok(hash)
    }

    async fn wait_for_receipt(
        &self,
        hash: &UserOperationHash,
    ) -> Result<UserOperationReceipt, ClientError> {
        self.bundler.wait_for_receipt(hash).await
    }
}
