//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `source`: Exchange export rows as delivered
//! - `target`: Koinly import rows and the ordered output field table
//! - `category`: Transaction categories derived from the order type
//! - `error`: Error types for the converter

pub mod category;
pub mod error;
pub mod source;
pub mod target;

pub use category::Category;
pub use error::ConvertError;
pub use source::{SourceRecord, PLACEHOLDER};
pub use target::{TargetField, TargetRecord, TARGET_FIELDS};
