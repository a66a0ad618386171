use serde::{Deserialize, Serialize};

use crate::{error::FetchError, models::network::NetworkKey};

/// Status marker the oracle uses for a successful lookup
pub const STATUS_OK: &str = "1";

/// Gas oracle response envelope
///
/// Etherscan-family APIs wrap every payload as `{status, message, result}`.
/// On failure `result` holds an error string instead of an object, so it is
/// kept as a raw value until the status has been checked.
#[derive(Debug, Deserialize)]
pub struct OracleResponse {
    /// "1" on success, anything else on failure
    pub status: String,

    /// Short human-readable status ("OK", "NOTOK", ...)
    #[serde(default)]
    pub message: Option<String>,

    /// Payload, or error description when `status` is not "1"
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// Gas price tiers for a network, in Gwei
///
/// Prices are passed through exactly as the oracle formats them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasQuote {
    /// Low tier
    #[serde(rename = "SafeGasPrice")]
    pub safe_gas_price: String,

    /// Average tier
    #[serde(rename = "ProposeGasPrice")]
    pub propose_gas_price: String,

    /// High tier
    #[serde(rename = "FastGasPrice")]
    pub fast_gas_price: String,

    /// Block the quote was computed at
    #[serde(rename = "LastBlock", default, skip_serializing_if = "Option::is_none")]
    pub last_block: Option<String>,

    /// Base fee suggested for the next block
    #[serde(rename = "suggestBaseFee", default, skip_serializing_if = "Option::is_none")]
    pub suggest_base_fee: Option<String>,

    /// Comma separated gas used ratios of recent blocks
    #[serde(rename = "gasUsedRatio", default, skip_serializing_if = "Option::is_none")]
    pub gas_used_ratio: Option<String>,
}

impl GasQuote {
    /// Build a quote holding only the three price tiers
    pub fn new(
        safe_gas_price: impl Into<String>,
        propose_gas_price: impl Into<String>,
        fast_gas_price: impl Into<String>,
    ) -> Self {
        Self {
            safe_gas_price: safe_gas_price.into(),
            propose_gas_price: propose_gas_price.into(),
            fast_gas_price: fast_gas_price.into(),
            last_block: None,
            suggest_base_fee: None,
            gas_used_ratio: None,
        }
    }
}

impl OracleResponse {
    /// Parse a raw response body into the envelope
    pub fn from_body(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body)
            .map_err(|e| FetchError::MalformedResponse(format!("Invalid oracle response: {}", e)))
    }

    /// Validate the status marker and extract the gas quote
    pub fn into_quote(self) -> Result<GasQuote, FetchError> {
        if self.status != STATUS_OK {
            return Err(FetchError::Provider(self.failure_reason()));
        }

        let result = self.result.ok_or_else(|| {
            FetchError::MalformedResponse("Oracle response has no result".to_string())
        })?;

        serde_json::from_value(result)
            .map_err(|e| FetchError::MalformedResponse(format!("Unexpected result shape: {}", e)))
    }

    // The provider explains failures in `result` ("Invalid API Key"), falling back to `message`.
    fn failure_reason(&self) -> String {
        match (&self.result, &self.message) {
            (Some(serde_json::Value::String(reason)), _) if !reason.is_empty() => reason.clone(),
            (_, Some(message)) if !message.is_empty() => message.clone(),
            _ => format!("Oracle returned status {:?}", self.status),
        }
    }
}

/// Successful body of `GET /gas/{network}`
#[derive(Debug, Serialize)]
pub struct GasFeeResponse {
    /// Network the quote belongs to
    pub network: NetworkKey,

    /// Gas price tiers
    #[serde(rename = "gasFee")]
    pub gas_fee: GasQuote,
}
