//! Target-side types for the Koinly universal import format
//!
//! [`TARGET_FIELDS`] is the single source of truth for column order: the
//! serializer derives both the header line and each row from it.

/// One row of the Koinly import file
///
/// Constructed once per surviving source row and never mutated afterwards.
/// Empty strings mean "no value"; the serializer emits them as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRecord {
    /// UTC timestamp `YYYY-MM-DD HH:mm UTC`
    pub date: String,
    pub sent_amount: String,
    pub sent_currency: String,
    pub received_amount: String,
    pub received_currency: String,
    pub fee_amount: String,
    pub fee_currency: String,
    /// Reserved, always empty for exchange exports
    pub net_worth_amount: String,
    /// Reserved, always empty for exchange exports
    pub net_worth_currency: String,
    /// "Buy", "Sell", or the verbatim order type for other categories
    pub label: String,
    /// Reserved, always empty for exchange exports
    pub description: String,
    pub tx_hash: String,
}

/// A named output column paired with its accessor
#[derive(Clone, Copy)]
pub struct TargetField {
    /// Header name as Koinly expects it
    pub name: &'static str,
    /// Reads this column's raw text from a record
    pub get: fn(&TargetRecord) -> &str,
}

impl std::fmt::Debug for TargetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetField").field("name", &self.name).finish()
    }
}

/// Output columns in Koinly order
pub const TARGET_FIELDS: [TargetField; 12] = [
    TargetField { name: "Date", get: |r| r.date.as_str() },
    TargetField { name: "Sent Amount", get: |r| r.sent_amount.as_str() },
    TargetField { name: "Sent Currency", get: |r| r.sent_currency.as_str() },
    TargetField { name: "Received Amount", get: |r| r.received_amount.as_str() },
    TargetField { name: "Received Currency", get: |r| r.received_currency.as_str() },
    TargetField { name: "Fee Amount", get: |r| r.fee_amount.as_str() },
    TargetField { name: "Fee Currency", get: |r| r.fee_currency.as_str() },
    TargetField { name: "Net Worth Amount", get: |r| r.net_worth_amount.as_str() },
    TargetField { name: "Net Worth Currency", get: |r| r.net_worth_currency.as_str() },
    TargetField { name: "Label", get: |r| r.label.as_str() },
    TargetField { name: "Description", get: |r| r.description.as_str() },
    TargetField { name: "TxHash", get: |r| r.tx_hash.as_str() },
];

impl TargetRecord {
    /// Iterate over the record's fields in [`TARGET_FIELDS`] order
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        TARGET_FIELDS.iter().map(move |field| (field.get)(self))
    }
}
