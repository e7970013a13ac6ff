pub mod config;
pub mod errors;
pub mod filters;
pub mod matcher;
pub mod results;
pub mod search;
pub mod xml;

pub use config::SearchConfig;
pub use errors::{SearchError, SearchResult};
pub use results::{MatchType, SearchMatch};
pub use search::search;
