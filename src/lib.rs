// src/lib.rs - Black-box API test suite support for the item listing service

pub mod client;
pub mod config;
pub mod error;
pub mod gen;
pub mod model;
pub mod schema;

// Re-export commonly used items for convenience
pub use client::{ApiResponse, ItemClient};
pub use config::Config;
pub use error::{ProbeError, Result};
pub use model::{Item, ItemDraft, Statistic, SELLER_ID_MAX, SELLER_ID_MIN};
pub use schema::{validate_item, validate_statistics};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    pub use crate::{
        ApiResponse, Config, Item, ItemClient, ItemDraft, ProbeError, Result, Statistic,
    };
    pub use crate::schema::{validate_item, validate_statistics};
}
