//! Database integration for seeding sample data.
//!
//! The [`Seeder`] fills the `productos` and `usuarios` tables inside a single
//! transaction per table, optionally emptying the table first with
//! [`reset_table`].

mod seeder;

pub use seeder::{SeedError, SeedTable, Seeder, reset_table};
