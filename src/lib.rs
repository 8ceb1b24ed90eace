//! Koinly Export Converter Library
//! # Overview
//!
//! This library converts an exchange's transaction export into the Koinly
//! universal CSV import format. It remaps fields, normalizes order dates to
//! UTC and drops rows Koinly cannot import.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (SourceRecord, TargetRecord, Category, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Conversion logic:
//!   - [`core::time`] - Fixed-offset timestamp normalization
//!   - [`core::filter`] - Swap row removal
//!   - [`core::mapper`] - Row classification and projection
//!   - [`core::converter`] - Orchestration of the pipeline
//! - [`io`] - Export readers and Koinly CSV rendering
//! - [`strategy`] - Sync and async end-to-end pipelines
//!
//! # Row Mapping
//!
//! Rows are classified by case-insensitive substring match on the order type:
//!
//! - **Swap**: Dropped before mapping
//! - **Buy**: Fiat sent, crypto received, labelled "Buy"
//! - **Sell**: Crypto sent, fiat received, labelled "Sell"
//! - **Other**: Mapped like a buy, labelled with the raw order type
//!
//! The placeholder `-` in fiat amount or miner fee becomes an empty cell.
//! The fee currency is always the crypto currency.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{convert_to_csv, Converter, ConverterConfig};
pub use crate::io::{render_csv, write_csv};
pub use crate::types::{Category, ConvertError, SourceRecord, TargetRecord, TARGET_FIELDS};
