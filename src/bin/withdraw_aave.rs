//! Withdraw USDC from the Aave v3 pool on Arbitrum directly, without
//! bridging. The same action builder the bridged flows embed in their
//! instruction bundles is sent here as a plain transaction.

use std::env;
use std::sync::Arc;

use across_intents::prelude::Result;
use across_intents::{actions, Error, ARBITRUM_CHAIN_ID};
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{TransactionRequest, U256};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let private_key = env::var("PRIVATE_KEY")
        .map_err(|_| Error::GenericRequest("PRIVATE_KEY environment variable not set".to_string()))?;
    let rpc_url = env::var("ARBITRUM_RPC_URL")
        .unwrap_or_else(|_| "https://arb1.arbitrum.io/rpc".to_string());

    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| Error::GenericRequest(e.to_string()))?;
    let wallet: LocalWallet = private_key
        .parse::<LocalWallet>()
        .map_err(|e| Error::GenericRequest(e.to_string()))?
        .with_chain_id(ARBITRUM_CHAIN_ID);
    let user = wallet.address();
    let client = Arc::new(SignerMiddleware::new(provider, wallet));
    info!("connected with wallet address: {user:?}");

    let usdc_arb = across_intents::USDC_ARBITRUM.parse().unwrap();
    let aave_pool = across_intents::AAVE_POOL_ARBITRUM.parse().unwrap();

    // 0.5 USDC at 6 decimals
    let withdraw_amount = U256::from(500_000u64);
    let call = actions::aave_withdraw(aave_pool, usdc_arb, withdraw_amount, user);
    info!("withdraw calldata: 0x{}", hex::encode(&call.data));

    let tx: TypedTransaction = TransactionRequest::new()
        .to(call.target)
        .data(call.data)
        .into();
    let pending = client
        .send_transaction(tx, None)
        .await
        .map_err(|e| Error::Submission(e.to_string()))?;
    let tx_hash = *pending;
    info!("withdraw transaction submitted: {tx_hash:?}");

    let receipt = pending
        .await
        .map_err(|e| Error::Submission(format!("{tx_hash:?}: {e}")))?
        .ok_or_else(|| Error::Submission(format!("{tx_hash:?} was dropped from the mempool")))?;
    info!("withdraw confirmed in block {:?}", receipt.block_number);
    Ok(())
}
