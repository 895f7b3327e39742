//! Cross-chain deposit intent builder for the Across v3 bridge.
//!
//! Builds "deposit with instructions" transactions: a bundle of destination
//! chain calls is encoded for the multicall handler, the relay fee is quoted
//! against that message, the bundle is rebuilt with the net amount, and the
//! result is assembled into ready-to-send `depositV3` calldata.
//!
//! ```no_run
//! use across_intents::prelude::Result;
//! use across_intents::{
//!     actions, BaseUrl, DepositIntentBuilder, DepositParams, MULTICALL_HANDLER_ADDRESS,
//! };
//! use ethers::types::U256;
//!
//! # async fn run() -> Result<()> {
//! let depositor = "0x1234567890123456789012345678901234567890".parse().unwrap();
//! let pool = across_intents::AAVE_POOL_ARBITRUM.parse().unwrap();
//! let usdc_base = across_intents::USDC_BASE.parse().unwrap();
//! let usdc_arb = across_intents::USDC_ARBITRUM.parse().unwrap();
//!
//! let builder = DepositIntentBuilder::new(None, Some(BaseUrl::Mainnet), None);
//! let prepared = builder
//!     .prepare_deposit(
//!         &DepositParams {
//!             depositor,
//!             recipient: *MULTICALL_HANDLER_ADDRESS,
//!             input_token: usdc_base,
//!             output_token: usdc_arb,
//!             input_amount: U256::from(1_000_000u64),
//!             origin_chain_id: across_intents::BASE_CHAIN_ID,
//!             destination_chain_id: across_intents::ARBITRUM_CHAIN_ID,
//!         },
//!         |amount| actions::aave_supply_bundle(depositor, pool, usdc_arb, amount, 0),
//!     )
//!     .await?;
//! println!("calldata: {} bytes", prepared.calldata.len());
//! # Ok(())
//! # }
//! ```

mod consts;
pub mod deposit;
pub mod erc20;
mod errors;
pub mod fees;
mod helpers;
pub mod instructions;
mod req;

pub use consts::*;
pub use deposit::{
    assemble, submit_deposit, DepositIntent, DepositIntentBuilder, DepositParams, DepositStage,
    PreparedDeposit,
};
pub use erc20::{ensure_allowance, needs_approval, Erc20};
pub use errors::Error;
pub use fees::{FeeClient, FeeClientConfig, FeeQuote, FeeRequest};
pub use helpers::{current_timestamp, parse_address, to_hex_prefixed};
pub use instructions::{actions, Call, InstructionBundle};

pub mod prelude {
    pub use crate::errors::Error;
    pub type Result<T> = std::result::Result<T, Error>;
}
