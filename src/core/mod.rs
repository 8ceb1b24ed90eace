//! Core conversion logic
//!
//! This module contains the pure conversion components:
//! - `time` - Fixed-offset order dates to Koinly UTC dates
//! - `filter` - Removal of unsupported (swap) rows
//! - `mapper` - Classification and projection into the Koinly schema
//! - `converter` - Orchestration of filter, mapper and serializer
//!
//! Nothing here performs I/O or holds mutable state.

pub mod converter;
pub mod filter;
pub mod mapper;
pub mod time;

pub use converter::{convert_to_csv, Converter, ConverterConfig};
pub use filter::{filter_supported, is_swap, supported_rows};
pub use mapper::map_record;
pub use time::{normalize_order_date, normalize_order_date_with_offset, EXCHANGE_UTC_OFFSET_HOURS};
