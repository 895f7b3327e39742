use across_intents::{
    actions, assemble, DepositIntentBuilder, DepositParams, Error, FeeQuote, InstructionBundle,
    ARBITRUM_CHAIN_ID, BASE_CHAIN_ID, DELIMITER, DEPOSIT_V3_SELECTOR, UNIQUE_IDENTIFIER,
};
use ethers::types::{Address, U256};

/// Test data builders
mod test_data {
    use super::*;

    pub fn depositor() -> Address {
        "0x1234567890123456789012345678901234567890"
            .parse()
            .unwrap()
    }

    pub fn params(input_amount: u64) -> DepositParams {
        DepositParams {
            depositor: depositor(),
            recipient: *across_intents::MULTICALL_HANDLER_ADDRESS,
            input_token: across_intents::USDC_BASE.parse().unwrap(),
            output_token: across_intents::USDC_ARBITRUM.parse().unwrap(),
            input_amount: U256::from(input_amount),
            origin_chain_id: BASE_CHAIN_ID,
            destination_chain_id: ARBITRUM_CHAIN_ID,
        }
    }

    pub fn quote(relay_fee_total: u64) -> FeeQuote {
        FeeQuote {
            relay_fee_total: U256::from(relay_fee_total),
            timestamp: Some(1_700_000_000),
            raw: serde_json::json!({ "relayFeeTotal": relay_fee_total.to_string() }),
        }
    }

    pub fn supply_bundle(amount: U256) -> InstructionBundle {
        let pool = across_intents::AAVE_POOL_ARBITRUM.parse().unwrap();
        let asset = across_intents::USDC_ARBITRUM.parse().unwrap();
        actions::aave_supply_bundle(depositor(), pool, asset, amount, 0)
    }
}

/// Full four-stage prepare flow driven with canned quotes
mod prepare_flow_tests {
    use super::*;

    #[test]
    fn one_usdc_with_5000_fee_delivers_995000() {
        let builder = DepositIntentBuilder::new(None, None, None);
        let prepared = builder
            .finalize_deposit(
                &test_data::params(1_000_000),
                1_700_000_000,
                test_data::quote(5_000),
                test_data::supply_bundle,
            )
            .unwrap();

        assert_eq!(prepared.intent.output_amount, U256::from(995_000u64));
        assert_eq!(prepared.intent.input_amount, U256::from(1_000_000u64));
        assert_eq!(prepared.intent.quote_timestamp, 1_700_000_000);
        assert_eq!(prepared.intent.fill_deadline, 1_700_000_000 + 7200);
        assert_eq!(prepared.intent.exclusive_relayer, Address::zero());
        assert_eq!(prepared.intent.exclusivity_deadline, 0);

        let calldata = &prepared.calldata;
        assert!(calldata.len() > 4 + 12 * 32 + 5);
        assert_eq!(&calldata[..4], DEPOSIT_V3_SELECTOR);
        assert_eq!(&calldata[calldata.len() - 5..calldata.len() - 2], DELIMITER);
        assert_eq!(&calldata[calldata.len() - 2..], UNIQUE_IDENTIFIER);
    }

    #[test]
    fn final_message_embeds_net_amount_not_gross() {
        let builder = DepositIntentBuilder::new(None, None, None);
        let prepared = builder
            .finalize_deposit(
                &test_data::params(1_000_000),
                1_700_000_000,
                test_data::quote(5_000),
                test_data::supply_bundle,
            )
            .unwrap();

        let expected = test_data::supply_bundle(U256::from(995_000u64))
            .encode()
            .unwrap();
        assert_eq!(prepared.intent.message, expected);

        let gross = test_data::supply_bundle(U256::from(1_000_000u64))
            .encode()
            .unwrap();
        assert_ne!(prepared.intent.message, gross);
    }

    #[test]
    fn fee_above_input_aborts_before_assembly() {
        let builder = DepositIntentBuilder::new(None, None, None);
        let mut rebuilds = 0;
        let err = builder
            .finalize_deposit(
                &test_data::params(5_000),
                1_700_000_000,
                test_data::quote(5_001),
                |amount| {
                    rebuilds += 1;
                    test_data::supply_bundle(amount)
                },
            )
            .unwrap_err();

        assert!(matches!(err, Error::InsufficientAmount { .. }));
        // no message was rebuilt once the arithmetic failed
        assert_eq!(rebuilds, 0);
    }

    #[test]
    fn fee_equal_to_input_is_still_a_valid_deposit() {
        let builder = DepositIntentBuilder::new(None, None, None);
        let prepared = builder
            .finalize_deposit(
                &test_data::params(5_000),
                1_700_000_000,
                test_data::quote(5_000),
                test_data::supply_bundle,
            )
            .unwrap();
        assert_eq!(prepared.intent.output_amount, U256::zero());
    }

    #[test]
    fn identical_inputs_produce_byte_identical_calldata() {
        let builder = DepositIntentBuilder::new(None, None, None);
        let run = || {
            builder
                .finalize_deposit(
                    &test_data::params(1_000_000),
                    1_700_000_000,
                    test_data::quote(5_000),
                    test_data::supply_bundle,
                )
                .unwrap()
        };
        let first = run();
        let second = run();
        assert_eq!(first.calldata, second.calldata);
        assert_eq!(first.intent, second.intent);
    }
}

/// Invariants of the assembled calldata and instruction encoding
mod encoding_tests {
    use super::*;

    #[test]
    fn empty_bundle_never_reaches_the_fee_service() {
        let bundle = InstructionBundle::new(vec![], test_data::depositor());
        assert!(matches!(bundle.encode(), Err(Error::Encoding(_))));
    }

    #[test]
    fn reordered_calls_change_the_encoded_message() {
        let bundle = test_data::supply_bundle(U256::from(1_000_000u64));
        let mut reversed = bundle.clone();
        reversed.calls.reverse();
        assert_ne!(bundle.encode().unwrap(), reversed.encode().unwrap());
    }

    #[test]
    fn assembled_calldata_tag_is_stable_across_amounts() {
        let builder = DepositIntentBuilder::new(None, None, None);
        for (input, fee) in [(1_000_000u64, 5_000u64), (2u64, 1u64), (1u64, 0u64)] {
            let prepared = builder
                .finalize_deposit(
                    &test_data::params(input),
                    1_700_000_000,
                    test_data::quote(fee),
                    test_data::supply_bundle,
                )
                .unwrap();
            let calldata = &prepared.calldata;
            assert_eq!(
                &calldata[calldata.len() - 5..],
                [0x1d, 0xc0, 0xde, 0xf0, 0x01]
            );
        }
    }

    #[test]
    fn assemble_rejects_intent_with_inflated_output() {
        let builder = DepositIntentBuilder::new(None, None, None);
        let mut prepared = builder
            .finalize_deposit(
                &test_data::params(1_000_000),
                1_700_000_000,
                test_data::quote(5_000),
                test_data::supply_bundle,
            )
            .unwrap();
        prepared.intent.output_amount = prepared.intent.input_amount + 1;
        assert!(assemble(&prepared.intent).is_err());
    }
}
