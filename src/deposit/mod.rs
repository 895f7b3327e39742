//! Cross-chain deposit intents: the 12-field bridge message, the calldata
//! assembler, and the two-pass fee-adjusted build flow.

pub mod assembler;
pub mod builder;
pub mod intent;

pub use assembler::assemble;
pub use builder::{submit_deposit, DepositIntentBuilder, PreparedDeposit};
pub use intent::{DepositIntent, DepositParams, DepositStage};
