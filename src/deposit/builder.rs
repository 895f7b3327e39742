//! Two-pass fee-adjusted deposit preparation.
//!
//! The instruction message embeds the amount the destination action will
//! spend, but that amount is only known after the relay fee is quoted, and
//! the quote itself is priced against a message. The flow therefore builds a
//! provisional bundle with the gross amount, quotes against it, then rebuilds
//! with the net amount. The first quote is trusted after the rebuild; the
//! final message differs from the quoted one only in the embedded amount, a
//! known approximation accepted here to avoid re-quoting forever.

use ethers::providers::Middleware;
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, Bytes, TransactionReceipt, TransactionRequest, U256, U64};
use log::{debug, info};
use reqwest::Client;

use crate::consts::{BaseUrl, FILL_DEADLINE_BUFFER_SECS};
use crate::fees::{FeeClient, FeeClientConfig, FeeQuote, FeeRequest};
use crate::helpers::{calldata_prefix, current_timestamp};
use crate::instructions::InstructionBundle;
use crate::prelude::*;

use super::assembler::assemble;
use super::intent::{DepositIntent, DepositParams, DepositStage};

/// Outcome of the prepare flow: the finalized intent, the quote it was
/// priced with, and the ready-to-send calldata.
#[derive(Debug, Clone)]
pub struct PreparedDeposit {
    pub intent: DepositIntent,
    pub fee_quote: FeeQuote,
    pub calldata: Bytes,
}

#[derive(Debug)]
pub struct DepositIntentBuilder {
    pub fee_client: FeeClient,
    pub fill_deadline_buffer_secs: u32,
}

impl DepositIntentBuilder {
    pub fn new(
        client: Option<Client>,
        base_url: Option<BaseUrl>,
        fee_config: Option<FeeClientConfig>,
    ) -> Self {
        DepositIntentBuilder {
            fee_client: FeeClient::new(client, base_url, fee_config),
            fill_deadline_buffer_secs: FILL_DEADLINE_BUFFER_SECS,
        }
    }

    /// Run the full prepare flow for one deposit attempt. `bundle_builder`
    /// is invoked with the gross amount for the provisional message and
    /// again with the net amount for the final one; it must return a fresh
    /// bundle each time.
    pub async fn prepare_deposit(
        &self,
        params: &DepositParams,
        mut bundle_builder: impl FnMut(U256) -> InstructionBundle,
    ) -> Result<PreparedDeposit> {
        let provisional = bundle_builder(params.input_amount).encode()?;
        debug!(
            "[{}] message for {:?}: {} bytes",
            DepositStage::ProvisionalBuild,
            params.depositor,
            provisional.len()
        );

        debug!("[{}] querying suggested fees", DepositStage::FeeQuote);
        let fee_quote = self
            .fee_client
            .suggested_fees(&FeeRequest {
                input_token: params.input_token,
                output_token: params.output_token,
                input_amount: params.input_amount,
                origin_chain_id: params.origin_chain_id,
                destination_chain_id: params.destination_chain_id,
                recipient: params.recipient,
                message: provisional,
            })
            .await?;

        let quote_timestamp = fee_quote.timestamp.unwrap_or_else(current_timestamp);
        self.finalize_deposit(params, quote_timestamp, fee_quote, bundle_builder)
    }

    /// Pure tail of the flow: subtract the fee, rebuild the message with the
    /// net amount, validate and assemble. No I/O; tests drive the whole
    /// deposit path through here with canned quotes.
    pub fn finalize_deposit(
        &self,
        params: &DepositParams,
        quote_timestamp: u32,
        fee_quote: FeeQuote,
        mut bundle_builder: impl FnMut(U256) -> InstructionBundle,
    ) -> Result<PreparedDeposit> {
        let output_amount = fee_quote.net_output_amount(params.input_amount)?;
        info!(
            "[{}] relay fee {} on input {}, delivering {}",
            DepositStage::FinalBuild,
            fee_quote.relay_fee_total,
            params.input_amount,
            output_amount
        );

        let message = bundle_builder(output_amount).encode()?;
        let intent = DepositIntent {
            depositor: params.depositor,
            recipient: params.recipient,
            input_token: params.input_token,
            output_token: params.output_token,
            input_amount: params.input_amount,
            output_amount,
            destination_chain_id: params.destination_chain_id,
            exclusive_relayer: Address::zero(),
            quote_timestamp,
            fill_deadline: quote_timestamp + self.fill_deadline_buffer_secs,
            exclusivity_deadline: 0,
            message,
        };

        let calldata = assemble(&intent)?;
        info!(
            "[{}] deposit calldata {} ({} bytes)",
            DepositStage::Assemble,
            calldata_prefix(&calldata),
            calldata.len()
        );
        Ok(PreparedDeposit {
            intent,
            fee_quote,
            calldata,
        })
    }
}

/// Send the assembled calldata to the origin-chain spoke pool and wait for
/// confirmation. Chain connectivity is the caller's collaborator; any signer
/// middleware works.
pub async fn submit_deposit<M: Middleware>(
    client: &M,
    spoke_pool: Address,
    prepared: &PreparedDeposit,
) -> Result<TransactionReceipt> {
    let tx: TypedTransaction = TransactionRequest::new()
        .to(spoke_pool)
        .data(prepared.calldata.clone())
        .into();

    let pending = client
        .send_transaction(tx, None)
        .await
        .map_err(|e| Error::Submission(e.to_string()))?;
    let tx_hash = *pending;
    info!("[{}] deposit transaction {tx_hash:?}", DepositStage::Submit);

    let receipt = pending
        .await
        .map_err(|e| Error::Submission(format!("{tx_hash:?}: {e}")))?
        .ok_or_else(|| Error::Submission(format!("{tx_hash:?} was dropped from the mempool")))?;

    if receipt.status != Some(U64::from(1)) {
        return Err(Error::SubmissionReverted {
            tx_hash: receipt.transaction_hash,
        });
    }
    info!(
        "[{}] deposit confirmed in block {:?}",
        DepositStage::Confirm,
        receipt.block_number.unwrap_or_default()
    );
    Ok(receipt)
}
