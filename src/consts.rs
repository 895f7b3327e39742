use ethers::types::Address;
use lazy_static::lazy_static;

pub(crate) const MAINNET_API_URL: &str = "https://app.across.to/api";
pub(crate) const TESTNET_API_URL: &str = "https://testnet.across.to/api";

/// Chain ids of the networks the example flows run between.
pub const BASE_CHAIN_ID: u64 = 8453;
pub const ARBITRUM_CHAIN_ID: u64 = 42161;

/// Across `depositV3` function selector.
pub const DEPOSIT_V3_SELECTOR: [u8; 4] = [0x7b, 0x93, 0x92, 0x32];

/// Delimiter appended after the ABI-encoded deposit arguments. The relay
/// network scans for this sequence to find the integrator identifier.
pub const DELIMITER: [u8; 3] = [0x1d, 0xc0, 0xde];

/// Integrator identifier appended after the delimiter.
pub const UNIQUE_IDENTIFIER: [u8; 2] = [0xf0, 0x01];

/// Fill deadline window relative to the quote timestamp, in seconds.
pub const FILL_DEADLINE_BUFFER_SECS: u32 = 7200;

/// Across spoke pool addresses
pub const SPOKE_POOL_BASE: &str = "0x09aea4b2242abC8bb4BB78D537A67a245A7bEC64";
pub const SPOKE_POOL_ARBITRUM: &str = "0xe35e9842fceaca96570b734083f4a58e8f7c5f2a";

/// USDC contract addresses
pub const USDC_BASE: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
pub const USDC_ARBITRUM: &str = "0xaf88d065e77c8cC2239327C5EDb3A432268e5831";

/// Destination-chain execution agent (Across multicall handler, same address
/// on all supported chains).
pub const MULTICALL_HANDLER: &str = "0x924a9f036260DdD5808007E1AA95f08eD08aA569";

/// Protocol entry points used by the example action builders.
pub const AAVE_POOL_ARBITRUM: &str = "0x794a61358D6845594F94dc1DB02A252b5b4814aD";
pub const AAVE_POOL_BASE: &str = "0xa238dd80c259a72e81d7e4664a9801593f98d1c5";
pub const MORPHO_VAULT_BASE: &str = "0xc1256Ae5FF1cf2719D4937adb3bbCCab2E00A2Ca";
pub const CURVE_POOL_ARBITRUM: &str = "0x8f48e040e3130efd4f44e0026d62d79eb97a40f2";
pub const IBT_SPECTRA: &str = "0x74E6AFeF5705BEb126C6d3Bf46f8fad8F3e07825";
pub const PT_TOKEN_SPECTRA: &str = "0xe40b0eddf2344a41f6a7af9d8a2433826630ed82";

lazy_static! {
    pub static ref MULTICALL_HANDLER_ADDRESS: Address = MULTICALL_HANDLER.parse().unwrap();
    pub static ref ZERO_ADDRESS: Address = Address::zero();
}

/// Get the Across spoke pool address for the given origin chain, if it is one
/// of the chains this crate carries constants for.
pub fn get_spoke_pool_address(chain_id: u64) -> Option<Address> {
    match chain_id {
        BASE_CHAIN_ID => Some(SPOKE_POOL_BASE.parse().unwrap()),
        ARBITRUM_CHAIN_ID => Some(SPOKE_POOL_ARBITRUM.parse().unwrap()),
        _ => None,
    }
}

/// Get the USDC contract address for the given chain.
pub fn get_usdc_address(chain_id: u64) -> Option<Address> {
    match chain_id {
        BASE_CHAIN_ID => Some(USDC_BASE.parse().unwrap()),
        ARBITRUM_CHAIN_ID => Some(USDC_ARBITRUM.parse().unwrap()),
        _ => None,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BaseUrl {
    Mainnet,
    Testnet,
}

impl BaseUrl {
    pub fn get_url(&self) -> String {
        match self {
            BaseUrl::Mainnet => MAINNET_API_URL.to_string(),
            BaseUrl::Testnet => TESTNET_API_URL.to_string(),
        }
    }
}
