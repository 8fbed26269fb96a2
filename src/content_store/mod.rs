mod null_store;
mod store;
mod trait_def;

pub use null_store::NullContentStore;
pub use store::StaticContentStore;
pub use trait_def::{ContentCounts, ContentStore};
