//! Default seed script - fills the product and user tables with sample rows
//!
//! Run with:
//! ```
//! SEED_RESET=1 cargo run -p seed-data --bin seed
//! ```

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;

    // The pool lives for the whole run and is closed explicitly below
    let pool = config.connect().await?;

    tracing::info!("Connected to database");

    let seeder = Seeder::new(pool.clone());
    let products = seeder.seed_products(config.reset).await?;
    let users = seeder.seed_users(config.reset).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Products: {}", products);
    tracing::info!("  Users: {}", users);

    pool.close().await;

    Ok(())
}
