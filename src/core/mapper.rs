//! Row classifier and mapper
//!
//! Projects one exchange row into the Koinly schema. Classification is by
//! [`Category::classify`]; every branch shares the date, fee and hash rules.

use crate::core::time::normalize_order_date_with_offset;
use crate::types::source::present;
use crate::types::{Category, ConvertError, SourceRecord, TargetRecord};

/// Map one already-filtered source row to a target row
///
/// The only failure is a malformed order date. Missing optional values
/// degrade to empty strings.
///
/// # Arguments
///
/// * `record` - The source row (swap rows must already be removed)
/// * `offset_hours` - UTC offset of the row's order date, in hours east of UTC
///
/// # Returns
///
/// * `Ok(TargetRecord)` - The projected row
/// * `Err(ConvertError::MalformedTimestamp)` - The order date could not be parsed
pub fn map_record(record: &SourceRecord, offset_hours: i32) -> Result<TargetRecord, ConvertError> {
    let date = normalize_order_date_with_offset(&record.order_date, offset_hours)?;

    let fiat_amount = present(&record.fiat_amount).unwrap_or_default().to_string();
    let fiat_currency = record.fiat_currency_code.clone();
    let crypto_amount = record.crypto_amount.clone();
    let crypto_currency = record.crypto_currency_code.clone();

    let category = Category::classify(&record.order_type);
    let (sent_amount, sent_currency, received_amount, received_currency, label) = match category {
        Category::Buy => (
            fiat_amount,
            fiat_currency,
            crypto_amount,
            crypto_currency,
            "Buy".to_string(),
        ),
        Category::Sell => (
            crypto_amount,
            crypto_currency,
            fiat_amount,
            fiat_currency,
            "Sell".to_string(),
        ),
        Category::Other => (
            fiat_amount,
            fiat_currency,
            crypto_amount,
            crypto_currency,
            record.order_type.clone(),
        ),
    };

    Ok(TargetRecord {
        date,
        sent_amount,
        sent_currency,
        received_amount,
        received_currency,
        fee_amount: present(&record.miner_fee).unwrap_or_default().to_string(),
        // Fee is always booked in the crypto currency, sells included
        fee_currency: record.crypto_currency_code.clone(),
        net_worth_amount: String::new(),
        net_worth_currency: String::new(),
        label,
        description: String::new(),
        tx_hash: record.transaction_hash.clone(),
    })
}
