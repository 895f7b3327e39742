//! Bridge USDC from Base and supply it into the Aave v3 pool on Arbitrum in
//! a single deposit, using the multicall handler as recipient.

use std::env;
use std::sync::Arc;

use across_intents::prelude::Result;
use across_intents::{
    actions, ensure_allowance, get_spoke_pool_address, submit_deposit, BaseUrl,
    DepositIntentBuilder, DepositParams, Error, ARBITRUM_CHAIN_ID, BASE_CHAIN_ID,
    MULTICALL_HANDLER_ADDRESS,
};
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::U256;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let private_key = env::var("PRIVATE_KEY")
        .map_err(|_| Error::GenericRequest("PRIVATE_KEY environment variable not set".to_string()))?;
    let rpc_url = env::var("BASE_RPC_URL")
        .unwrap_or_else(|_| "https://mainnet.base.org".to_string());

    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| Error::GenericRequest(e.to_string()))?;
    let wallet: LocalWallet = private_key
        .parse::<LocalWallet>()
        .map_err(|e| Error::GenericRequest(e.to_string()))?
        .with_chain_id(BASE_CHAIN_ID);
    let depositor = wallet.address();
    let client = Arc::new(SignerMiddleware::new(provider, wallet));
    info!("connected with wallet address: {depositor:?}");

    let usdc_base = across_intents::USDC_BASE.parse().unwrap();
    let usdc_arb = across_intents::USDC_ARBITRUM.parse().unwrap();
    let aave_pool = across_intents::AAVE_POOL_ARBITRUM.parse().unwrap();
    let spoke_pool = get_spoke_pool_address(BASE_CHAIN_ID).unwrap();

    // 1 USDC at 6 decimals
    let input_amount = U256::from(1_000_000u64);

    let builder = DepositIntentBuilder::new(None, Some(BaseUrl::Mainnet), None);
    let prepared = builder
        .prepare_deposit(
            &DepositParams {
                depositor,
                recipient: *MULTICALL_HANDLER_ADDRESS,
                input_token: usdc_base,
                output_token: usdc_arb,
                input_amount,
                origin_chain_id: BASE_CHAIN_ID,
                destination_chain_id: ARBITRUM_CHAIN_ID,
            },
            |amount| actions::aave_supply_bundle(depositor, aave_pool, usdc_arb, amount, 0),
        )
        .await?;

    info!(
        "prepared deposit: input {} output {} fee {}",
        prepared.intent.input_amount, prepared.intent.output_amount,
        prepared.fee_quote.relay_fee_total
    );

    if let Some(tx_hash) =
        ensure_allowance(client.clone(), usdc_base, depositor, spoke_pool, input_amount).await?
    {
        info!("spoke pool approval sent: {tx_hash:?}");
    }

    let receipt = submit_deposit(client.as_ref(), spoke_pool, &prepared).await?;
    info!(
        "deposit confirmed: {:?} in block {:?}",
        receipt.transaction_hash, receipt.block_number
    );
    Ok(())
}
