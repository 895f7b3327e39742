//! Turns a finalized [`DepositIntent`] into the exact transaction calldata
//! for the bridge's `depositV3` entry point.

use ethers::abi::{self, Token};
use ethers::types::{Bytes, U256};

use crate::consts::{DELIMITER, DEPOSIT_V3_SELECTOR, UNIQUE_IDENTIFIER};
use crate::prelude::*;

use super::intent::DepositIntent;

/// Assemble the on-chain calldata: the fixed 4-byte selector, the
/// ABI-encoded 12-field argument list, then the delimiter and integrator
/// identifier. The trailing tag is raw concatenation, not an ABI field; the
/// relay network reads it off the end of the calldata. Pure function,
/// byte-identical output for identical intents.
pub fn assemble(intent: &DepositIntent) -> Result<Bytes> {
    intent.validate()?;

    let params = [
        Token::Address(intent.depositor),
        Token::Address(intent.recipient),
        Token::Address(intent.input_token),
        Token::Address(intent.output_token),
        Token::Uint(intent.input_amount),
        Token::Uint(intent.output_amount),
        Token::Uint(U256::from(intent.destination_chain_id)),
        Token::Address(intent.exclusive_relayer),
        Token::Uint(U256::from(intent.quote_timestamp)),
        Token::Uint(U256::from(intent.fill_deadline)),
        Token::Uint(U256::from(intent.exclusivity_deadline)),
        Token::Bytes(intent.message.to_vec()),
    ];
    let encoded = abi::encode(&params);

    let mut data =
        Vec::with_capacity(DEPOSIT_V3_SELECTOR.len() + encoded.len() + DELIMITER.len() + 2);
    data.extend_from_slice(&DEPOSIT_V3_SELECTOR);
    data.extend_from_slice(&encoded);
    data.extend_from_slice(&DELIMITER);
    data.extend_from_slice(&UNIQUE_IDENTIFIER);
    Ok(Bytes::from(data))
}
