//! I/O module
//!
//! Handles reading exchange exports and writing Koinly CSV.
//!
//! # Components
//!
//! - `csv_format` - Koinly CSV rendering (header, escaping, rows)
//! - `sync_reader` - Synchronous export reader with iterator interface
//! - `async_reader` - Asynchronous export reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{render_csv, write_csv, OUTPUT_FILE_NAME};
pub use sync_reader::SyncReader;
