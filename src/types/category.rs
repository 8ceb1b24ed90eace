//! Transaction categories derived from the free-text order type

/// Semantic category of an exchange row
///
/// Determined by case-insensitive substring containment on the order type,
/// with "buy" taking precedence over "sell". Swap rows never get this far;
/// they are removed by the batch filter before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Fiat sent, crypto received
    Buy,

    /// Crypto sent, fiat received
    Sell,

    /// Anything else; mapped like a buy but labelled with the raw order type
    Other,
}

impl Category {
    /// Classify an order type string
    pub fn classify(order_type: &str) -> Self {
        let order_type = order_type.to_lowercase();
        if order_type.contains("buy") {
            Category::Buy
        } else if order_type.contains("sell") {
            Category::Sell
        } else {
            Category::Other
        }
    }
}
