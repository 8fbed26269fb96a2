mod factory;
mod portal_search;
mod query;
mod search_vault;

pub use factory::create_search_vault;
pub use portal_search::{search_portal, PortalSearchResults, TypedResults};
pub use query::{NormalizedQuery, MIN_QUERY_LENGTH};
pub use search_vault::*;
