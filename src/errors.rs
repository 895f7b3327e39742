use ethers::types::{H256, U256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("Fee quote request failed with status {status_code}: {error_message}")]
    FeeQuote {
        status_code: u16,
        error_message: String,
    },
    #[error("Relay fee {relay_fee_total} exceeds input amount {input_amount}")]
    InsufficientAmount {
        input_amount: U256,
        relay_fee_total: U256,
    },
    #[error("Approval failed: {0}")]
    Approval(String),
    #[error("Approval transaction {tx_hash} reverted")]
    ApprovalReverted { tx_hash: H256 },
    #[error("Submission failed: {0}")]
    Submission(String),
    #[error("Deposit transaction {tx_hash} reverted")]
    SubmissionReverted { tx_hash: H256 },
    #[error("Generic request error: {0}")]
    GenericRequest(String),
    #[error("Json parse error: {0}")]
    JsonParse(String),
    #[error("Fee quote request timed out after {0} ms")]
    FeeQuoteTimeout(u64),
}
