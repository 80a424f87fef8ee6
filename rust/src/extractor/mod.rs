pub mod decl;
pub mod model;
pub mod name;
pub mod search;

pub use decl::extract;
pub use model::{write_json, ExtractionResult, Kind};
pub use name::normalize;
pub use search::{search, search_with, SearchConfig};
