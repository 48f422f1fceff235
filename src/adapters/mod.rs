// Adapters layer: concrete implementations for external systems (search provider, storage).

pub mod search;
pub mod storage;

pub use search::SearchClient;
pub use storage::LocalStorage;
