pub mod client;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use client::AccessKeyClient;
pub use config::{ClientConfig, StatusPolicy};
pub use error::{ClientError, Result};
pub use models::{DataLimit, Key, KeyCollection};
