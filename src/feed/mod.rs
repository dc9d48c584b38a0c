mod chain;
mod error;
mod sources;
mod store;

pub use chain::CatalogFeed;
pub use error::FeedError;
pub use sources::{ElementSource, GroupCatalogSource, ObjectCatalogSource, ProxySource};
pub use store::ElementStore;
