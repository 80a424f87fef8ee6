pub mod error;
pub mod extractor;

// Re-export main types and functions
pub use error::{ExtractError, Result};
pub use extractor::{
    extract, normalize, search, search_with, write_json, ExtractionResult, Kind, SearchConfig,
};
