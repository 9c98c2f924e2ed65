//! Development seed data for the catalog.
//!
//! Fills the `productos` and `usuarios` tables with a fixed set of sample rows.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let pool = config.connect().await?;
//!
//! let seeder = Seeder::new(pool.clone());
//! let products = seeder.seed_products(config.reset).await?;
//! let users = seeder.seed_users(config.reset).await?;
//!
//! pool.close().await;
//! ```

pub mod config;
pub mod db;
pub mod records;

// Re-export core types from catalog crate
pub use catalog::{Product, Role};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::db::{SeedError, SeedTable, Seeder, reset_table};
    pub use crate::records::{PRODUCTS, ProductSeed, USERS, UserSeed};
    pub use crate::{Product, Role};
}
