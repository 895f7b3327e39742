//! Client for the bridge's suggested-fees endpoint.
//!
//! The quote depends on the message payload, not only on the transferred
//! value, because the relay network prices destination-side execution. The
//! two-pass protocol that deals with this lives in [`crate::deposit`]; this
//! module only fetches and parses quotes.

use std::time::Duration;

use ethers::types::{Address, Bytes, U256};
use log::{debug, warn};
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::consts::BaseUrl;
use crate::helpers::to_hex_prefixed;
use crate::prelude::*;
use crate::req::HttpClient;

/// Request parameters for one suggested-fees query.
#[derive(Debug, Clone)]
pub struct FeeRequest {
    pub input_token: Address,
    pub output_token: Address,
    pub input_amount: U256,
    pub origin_chain_id: u64,
    pub destination_chain_id: u64,
    pub recipient: Address,
    pub message: Bytes,
}

/// A relay fee quote. `raw` carries the provider's full response unchanged
/// for callers that need fields beyond the total.
#[derive(Debug, Clone)]
pub struct FeeQuote {
    pub relay_fee_total: U256,
    pub timestamp: Option<u32>,
    pub raw: Value,
}

impl FeeQuote {
    /// Net amount delivered on the destination chain after the relay fee.
    pub fn net_output_amount(&self, input_amount: U256) -> Result<U256> {
        if self.relay_fee_total > input_amount {
            return Err(Error::InsufficientAmount {
                input_amount,
                relay_fee_total: self.relay_fee_total,
            });
        }
        Ok(input_amount - self.relay_fee_total)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestedFeesResponse {
    relay_fee_total: String,
    timestamp: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FeeClientConfig {
    /// Wall-clock budget per fee-quote request.
    pub request_timeout: Duration,
    /// Retries after the first attempt, on transport errors and 5xx only.
    pub max_retries: u32,
    /// Base delay for exponential backoff between retries.
    pub backoff_base: Duration,
}

impl Default for FeeClientConfig {
    fn default() -> Self {
        FeeClientConfig {
            request_timeout: Duration::from_secs(10),
            max_retries: 3,
            backoff_base: Duration::from_millis(500),
        }
    }
}

#[derive(Debug)]
pub struct FeeClient {
    pub http_client: HttpClient,
    config: FeeClientConfig,
}

impl FeeClient {
    pub fn new(
        client: Option<Client>,
        base_url: Option<BaseUrl>,
        config: Option<FeeClientConfig>,
    ) -> Self {
        let client = client.unwrap_or_default();
        let base_url = base_url.unwrap_or(BaseUrl::Mainnet);
        FeeClient {
            http_client: HttpClient {
                client,
                base_url: base_url.get_url(),
            },
            config: config.unwrap_or_default(),
        }
    }

    /// Fetch a fee quote for the prospective transfer. Transport errors and
    /// 5xx responses are retried with bounded exponential backoff; 4xx
    /// responses fail immediately with the body as context.
    pub async fn suggested_fees(&self, request: &FeeRequest) -> Result<FeeQuote> {
        let params = [
            ("inputToken", format!("{:?}", request.input_token)),
            ("outputToken", format!("{:?}", request.output_token)),
            ("originChainId", request.origin_chain_id.to_string()),
            (
                "destinationChainId",
                request.destination_chain_id.to_string(),
            ),
            ("amount", request.input_amount.to_string()),
            ("recipient", format!("{:?}", request.recipient)),
            ("message", to_hex_prefixed(&request.message)),
        ];

        let mut attempt = 0;
        loop {
            match self.suggested_fees_once(&params).await {
                Ok(quote) => return Ok(quote),
                Err(err) if attempt < self.config.max_retries && is_retryable(&err) => {
                    let delay = self.backoff_delay(attempt);
                    warn!(
                        "fee quote attempt {} failed, retrying in {:?}: {err}",
                        attempt + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn suggested_fees_once(&self, params: &[(&str, String)]) -> Result<FeeQuote> {
        let request = self.http_client.get("/suggested-fees", params);
        let text = tokio::time::timeout(self.config.request_timeout, request)
            .await
            .map_err(|_| Error::FeeQuoteTimeout(self.config.request_timeout.as_millis() as u64))??;

        let raw: Value =
            serde_json::from_str(&text).map_err(|e| Error::JsonParse(e.to_string()))?;
        let parsed: SuggestedFeesResponse =
            serde_json::from_value(raw.clone()).map_err(|e| Error::JsonParse(e.to_string()))?;
        let relay_fee_total = U256::from_dec_str(&parsed.relay_fee_total).map_err(|e| {
            Error::JsonParse(format!(
                "relayFeeTotal {:?} is not a decimal amount: {e}",
                parsed.relay_fee_total
            ))
        })?;
        let timestamp = parsed.timestamp.and_then(|t| t.parse().ok());

        debug!("fee quote: relayFeeTotal={relay_fee_total} timestamp={timestamp:?}");
        Ok(FeeQuote {
            relay_fee_total,
            timestamp,
            raw,
        })
    }

    fn backoff_delay(&self, attempt: u32) -> Duration {
        let base = self.config.backoff_base * 2u32.saturating_pow(attempt);
        let jitter = rand::thread_rng().gen_range(0..100);
        base + Duration::from_millis(jitter)
    }
}

fn is_retryable(err: &Error) -> bool {
    match err {
        Error::GenericRequest(_) | Error::FeeQuoteTimeout(_) => true,
        Error::FeeQuote { status_code, .. } => *status_code >= 500,
        _ => false,
    }
}
