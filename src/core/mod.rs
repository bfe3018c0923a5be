//! Core conversion components
//!
//! This module contains the conversion logic:
//! - `traits`: The `RowCursor` seam for external data sources
//! - `converter`: Row-to-CSV conversion orchestration
//! - `options`: Serializable converter settings
//! - `memory_cursor`: In-memory `RowCursor` implementation

pub mod converter;
pub mod memory_cursor;
pub mod options;
pub mod traits;

pub use converter::{Converter, RowPreProcessor};
pub use memory_cursor::{MemoryCursor, MemoryCursorError};
pub use options::ConverterOptions;
pub use traits::RowCursor;
