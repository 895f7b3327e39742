use chrono::Utc;
use ethers::types::Address;

use crate::prelude::*;

/// Current unix time in seconds, truncated to the u32 width the bridge's
/// deadline fields use.
pub fn current_timestamp() -> u32 {
    Utc::now().timestamp() as u32
}

/// Hex-encode bytes with the `0x` prefix expected by the fee API.
pub fn to_hex_prefixed(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Short hex prefix of a calldata blob, for logging.
pub fn calldata_prefix(data: &[u8]) -> String {
    let end = data.len().min(4);
    to_hex_prefixed(&data[..end])
}

/// Parse a 20-byte hex address, mapping failures to an encoding error.
pub fn parse_address(s: &str) -> Result<Address> {
    s.parse()
        .map_err(|_| Error::Encoding(format!("malformed address: {s}")))
}
