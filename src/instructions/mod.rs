//! Instruction bundles for the destination-chain multicall handler.
//!
//! The handler receives one ABI-encoded tuple
//! `((address target, bytes callData, uint256 value)[] calls, address fallbackRecipient)`
//! and executes the calls strictly in array order. Any call reverting makes
//! the handler return remaining funds to the fallback recipient.

pub mod actions;

use ethers::abi::{self, Token};
use ethers::types::{Address, Bytes, U256};

use crate::prelude::*;

/// One atomic action to execute on the destination chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub target: Address,
    pub data: Bytes,
    pub value: U256,
}

impl Call {
    pub fn new(target: Address, data: Bytes, value: U256) -> Self {
        Call {
            target,
            data,
            value,
        }
    }

    /// Plain native-currency transfer to `target`; the only case where empty
    /// calldata is valid.
    pub fn value_transfer(target: Address, value: U256) -> Self {
        Call {
            target,
            data: Bytes::default(),
            value,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.data.is_empty() && self.value.is_zero() {
            return Err(Error::Encoding(format!(
                "call to {:?} has empty calldata and zero value",
                self.target
            )));
        }
        Ok(())
    }

    fn into_token(self) -> Token {
        Token::Tuple(vec![
            Token::Address(self.target),
            Token::Bytes(self.data.to_vec()),
            Token::Uint(self.value),
        ])
    }
}

/// Ordered sequence of calls plus the address credited if execution fails
/// on-chain. Built fresh per deposit attempt; a new instance is constructed
/// whenever the net amount changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionBundle {
    pub calls: Vec<Call>,
    pub fallback_recipient: Address,
}

impl InstructionBundle {
    pub fn new(calls: Vec<Call>, fallback_recipient: Address) -> Self {
        InstructionBundle {
            calls,
            fallback_recipient,
        }
    }

    /// Serialize the bundle into the handler's wire layout. Deterministic:
    /// the same bundle always encodes to the same bytes. Call order is
    /// significant; approvals must precede the call spending the allowance
    /// because the handler never reorders.
    pub fn encode(&self) -> Result<Bytes> {
        if self.calls.is_empty() {
            return Err(Error::Encoding(
                "instruction bundle has no calls".to_string(),
            ));
        }
        let calls = self
            .calls
            .iter()
            .map(|call| {
                call.validate()?;
                Ok(call.clone().into_token())
            })
            .collect::<Result<Vec<Token>>>()?;

        let instructions = Token::Tuple(vec![
            Token::Array(calls),
            Token::Address(self.fallback_recipient),
        ]);
        Ok(Bytes::from(abi::encode(&[instructions])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::abi::ParamType;

    fn handler_param_type() -> ParamType {
        ParamType::Tuple(vec![
            ParamType::Array(Box::new(ParamType::Tuple(vec![
                ParamType::Address,
                ParamType::Bytes,
                ParamType::Uint(256),
            ]))),
            ParamType::Address,
        ])
    }

    fn sample_call(last_byte: u8) -> Call {
        let target = Address::from_low_u64_be(last_byte as u64);
        Call::new(target, Bytes::from(vec![0xde, 0xad, last_byte]), U256::zero())
    }

    #[test]
    fn encode_is_deterministic() {
        let bundle = InstructionBundle::new(
            vec![sample_call(1), sample_call(2)],
            Address::from_low_u64_be(9),
        );
        assert_eq!(bundle.encode().unwrap(), bundle.encode().unwrap());
    }

    #[test]
    fn encode_is_order_sensitive() {
        let fallback = Address::from_low_u64_be(9);
        let forward = InstructionBundle::new(vec![sample_call(1), sample_call(2)], fallback);
        let reversed = InstructionBundle::new(vec![sample_call(2), sample_call(1)], fallback);
        assert_ne!(forward.encode().unwrap(), reversed.encode().unwrap());
    }

    #[test]
    fn empty_bundle_is_rejected() {
        let bundle = InstructionBundle::new(vec![], Address::from_low_u64_be(9));
        assert!(matches!(bundle.encode(), Err(Error::Encoding(_))));
    }

    #[test]
    fn empty_calldata_without_value_is_rejected() {
        let bundle = InstructionBundle::new(
            vec![Call::new(
                Address::from_low_u64_be(1),
                Bytes::default(),
                U256::zero(),
            )],
            Address::from_low_u64_be(9),
        );
        assert!(matches!(bundle.encode(), Err(Error::Encoding(_))));
    }

    #[test]
    fn value_transfer_with_empty_calldata_is_allowed() {
        let bundle = InstructionBundle::new(
            vec![Call::value_transfer(
                Address::from_low_u64_be(1),
                U256::from(1u64),
            )],
            Address::from_low_u64_be(9),
        );
        assert!(bundle.encode().is_ok());
    }

    #[test]
    fn encoded_layout_round_trips_through_abi_decode() {
        let fallback = Address::from_low_u64_be(9);
        let calls = vec![sample_call(1), sample_call(2)];
        let bundle = InstructionBundle::new(calls.clone(), fallback);
        let encoded = bundle.encode().unwrap();

        let decoded = abi::decode(&[handler_param_type()], &encoded).unwrap();
        let Token::Tuple(fields) = &decoded[0] else {
            panic!("expected tuple");
        };
        let Token::Array(decoded_calls) = &fields[0] else {
            panic!("expected call array");
        };
        assert_eq!(decoded_calls.len(), calls.len());
        for (token, call) in decoded_calls.iter().zip(&calls) {
            let Token::Tuple(parts) = token else {
                panic!("expected call tuple");
            };
            assert_eq!(parts[0], Token::Address(call.target));
            assert_eq!(parts[1], Token::Bytes(call.data.to_vec()));
            assert_eq!(parts[2], Token::Uint(call.value));
        }
        assert_eq!(fields[1], Token::Address(fallback));
    }
}
