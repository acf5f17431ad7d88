pub mod error;
pub mod filter;
pub mod models;

pub use error::OpError;
pub use filter::Filter;
pub use models::{Category, ItemSummary, VaultField, VaultItem};
