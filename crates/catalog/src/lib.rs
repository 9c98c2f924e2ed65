//! Catalog entities for the shop.
//!
//! Products and users as stored in the `productos` and `usuarios` tables,
//! the [`models::Entity`] identity trait they share, and the password hashing
//! routine used wherever a user row is written.

pub mod auth;
pub mod database;
pub mod errors;
pub mod models;

pub use database::Database;
pub use errors::CatalogError;
pub use models::{Entity, Product, Role, User};
