use ethers::types::{Address, Bytes, U256};

use crate::prelude::*;

/// Caller-facing request: which tokens move where, and who is acting.
/// `recipient` is normally the destination-chain multicall handler.
#[derive(Debug, Clone)]
pub struct DepositParams {
    pub depositor: Address,
    pub recipient: Address,
    pub input_token: Address,
    pub output_token: Address,
    pub input_amount: U256,
    pub origin_chain_id: u64,
    pub destination_chain_id: u64,
}

/// Finalized shape of one bridge deposit, mirroring the `depositV3`
/// argument list field for field. Value object; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositIntent {
    pub depositor: Address,
    pub recipient: Address,
    pub input_token: Address,
    pub output_token: Address,
    pub input_amount: U256,
    pub output_amount: U256,
    pub destination_chain_id: u64,
    /// Always the zero address: this design never requests exclusivity.
    pub exclusive_relayer: Address,
    pub quote_timestamp: u32,
    pub fill_deadline: u32,
    /// Always 0, matching `exclusive_relayer`.
    pub exclusivity_deadline: u32,
    pub message: Bytes,
}

impl DepositIntent {
    /// The fee is subtracted, never added, and the fill window must open
    /// after the quote.
    pub fn validate(&self) -> Result<()> {
        if self.output_amount > self.input_amount {
            return Err(Error::Encoding(format!(
                "output amount {} exceeds input amount {}",
                self.output_amount, self.input_amount
            )));
        }
        if self.fill_deadline <= self.quote_timestamp {
            return Err(Error::Encoding(format!(
                "fill deadline {} does not exceed quote timestamp {}",
                self.fill_deadline, self.quote_timestamp
            )));
        }
        Ok(())
    }
}

/// Stage labels for the one-shot deposit state machine. Transitions are
/// strictly sequential; failures are terminal and reported with the stage
/// they occurred in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DepositStage {
    ProvisionalBuild,
    FeeQuote,
    FinalBuild,
    Assemble,
    Submit,
    Confirm,
}

impl std::fmt::Display for DepositStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DepositStage::ProvisionalBuild => "provisional-build",
            DepositStage::FeeQuote => "fee-quote",
            DepositStage::FinalBuild => "final-build",
            DepositStage::Assemble => "assemble",
            DepositStage::Submit => "submit",
            DepositStage::Confirm => "confirm",
        };
        f.write_str(name)
    }
}
