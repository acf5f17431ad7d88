pub mod adapters;
pub mod matcher;
pub mod ports;
pub mod service;

pub use service::{CredentialHelper, HelperError, Operation};
