//! Source-side types for the exchange transaction export
//!
//! Every field is kept as the raw string the exchange delivered. Columns that
//! are missing from the input file deserialize as empty strings, so the core
//! never has to distinguish "absent" from "empty".

use serde::Deserialize;

/// Sentinel the exchange writes when a value does not apply to a row
pub const PLACEHOLDER: &str = "-";

/// One transaction row from the exchange export
///
/// Field names map to the export's header row. Only a subset of the fields is
/// projected into the Koinly schema; the rest are carried for completeness and
/// otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceRecord {
    /// Opaque exchange identifier
    #[serde(rename = "Transaction ID")]
    pub transaction_id: String,

    /// Free-text category such as "Buy", "Sell BTC" or "Swap BTC/ETH"
    ///
    /// Interpreted case-insensitively by substring containment.
    #[serde(rename = "Order Type")]
    pub order_type: String,

    /// Local timestamp `YYYY-MM-DD HH:mm:ss` at a fixed UTC-7 offset
    #[serde(rename = "Order Date")]
    pub order_date: String,

    /// Fiat amount, or [`PLACEHOLDER`] when not applicable
    #[serde(rename = "Fiat Amount")]
    pub fiat_amount: String,

    #[serde(rename = "Fiat Code")]
    pub fiat_currency_code: String,

    #[serde(rename = "Crypto Amount")]
    pub crypto_amount: String,

    #[serde(rename = "Crypto Code")]
    pub crypto_currency_code: String,

    #[serde(rename = "Rate")]
    pub rate: String,

    /// Network fee, or [`PLACEHOLDER`] when no fee was charged
    #[serde(rename = "Miner Fee")]
    pub miner_fee: String,

    #[serde(rename = "Receiving Address")]
    pub receiving_address: String,

    #[serde(rename = "Network")]
    pub network: String,

    #[serde(rename = "Status")]
    pub status: String,

    #[serde(rename = "Fail Reason")]
    pub fail_reason: String,

    /// On-chain hash, may be empty
    #[serde(rename = "Transaction Hash")]
    pub transaction_hash: String,
}

/// Return the value unless it is empty or the placeholder sentinel
///
/// Used for every field where the exchange may write `"-"` instead of a value.
pub fn present(value: &str) -> Option<&str> {
    if value.is_empty() || value == PLACEHOLDER {
        None
    } else {
        Some(value)
    }
}
