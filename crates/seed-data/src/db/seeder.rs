//! Database seeding utilities.

use std::fmt;

use catalog::{CatalogError, Entity, Product, User};
use catalog::auth::hash_password;
use sqlx::pool::PoolConnection;
use sqlx::{Connection, PgPool, Postgres, Transaction};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::records::{PRODUCTS, ProductSeed, USERS, UserSeed};

/// Tables the seeder knows how to reset and fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTable {
    Products,
    Users,
}

impl SeedTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedTable::Products => Product::TABLE,
            SeedTable::Users => User::TABLE,
        }
    }
}

impl fmt::Display for SeedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to reset table {table}: {source}")]
    Reset {
        table: SeedTable,
        #[source]
        source: sqlx::Error,
    },
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Deletes every row of `table` and restarts its id sequence, leaving rows
/// in referencing tables untouched.
///
/// Runs in its own transaction. When another table holds a foreign key to
/// `table`, foreign key triggers are skipped with
/// `SET LOCAL session_replication_role = replica`, which ends with that
/// transaction whether it commits or rolls back.
///
/// Takes a pool connection rather than a transaction: a transaction begun on
/// `conn` holds it mutably, so the reset can only run before the seeding
/// transaction starts or after it ends.
///
/// ```compile_fail
/// # async fn demo(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
/// use seed_data::db::{SeedTable, reset_table};
/// use sqlx::Connection;
///
/// let mut conn = pool.acquire().await?;
/// let tx = conn.begin().await?;
/// reset_table(&mut conn, SeedTable::Products).await?;
/// tx.commit().await?;
/// # Ok(())
/// # }
/// ```
///
/// Privileges: `DELETE` on the table and `UPDATE` on its id sequence (the
/// table owner has both). A table referenced by a foreign key additionally
/// needs permission to set `session_replication_role`: a superuser, or on
/// PostgreSQL 15+ a role granted `SET ON PARAMETER session_replication_role`.
pub async fn reset_table(
    conn: &mut PoolConnection<Postgres>,
    table: SeedTable,
) -> Result<(), sqlx::Error> {
    let mut tx = conn.begin().await?;

    let cleared = clear_table(&mut tx, table).await;
    if let Err(e) = cleared {
        if let Err(rb) = tx.rollback().await {
            warn!("Rollback failed after resetting {table}: {rb}");
        }
        return Err(e);
    }
    tx.commit().await?;

    info!("Reset table {table}");
    Ok(())
}

async fn clear_table(
    tx: &mut Transaction<'_, Postgres>,
    table: SeedTable,
) -> Result<(), sqlx::Error> {
    let referenced: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM pg_constraint
            WHERE contype = 'f'
              AND confrelid = to_regclass($1)
              AND conrelid <> confrelid
        )
        "#,
    )
    .bind(table.as_str())
    .fetch_one(&mut **tx)
    .await?;

    if referenced {
        sqlx::query("SET LOCAL session_replication_role = replica")
            .execute(&mut **tx)
            .await?;
    }

    sqlx::query(&format!(r#"DELETE FROM "{table}""#))
        .execute(&mut **tx)
        .await?;

    sqlx::query("SELECT setval(pg_get_serial_sequence($1, 'id'), 1, false)")
        .bind(table.as_str())
        .execute(&mut **tx)
        .await?;

    Ok(())
}

/// Database seeder for the catalog tables.
///
/// Each call works on a single pool connection: optional reset, then one
/// transaction holding every insert. Two seeders filling the same table at
/// the same time race on the reset and the inserts; callers must not do
/// that.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Seeds the sample products, returning the number of inserted rows.
    ///
    /// A failed batch is rolled back, logged, and reported as `Ok(0)`.
    /// Connection and reset failures are returned as errors.
    pub async fn seed_products(&self, reset: bool) -> Result<u64, SeedError> {
        self.seed_products_from(&PRODUCTS, reset).await
    }

    pub async fn seed_products_from(
        &self,
        products: &[ProductSeed],
        reset: bool,
    ) -> Result<u64, SeedError> {
        let mut conn = self.prepare(SeedTable::Products, reset).await?;

        match insert_products(&mut conn, products).await {
            Ok(affected) => {
                info!("Seeded {affected} products");
                Ok(affected)
            }
            Err(e) => {
                error!("Seeding {} failed, rolled back: {e}", SeedTable::Products);
                Ok(0)
            }
        }
    }

    /// Like [`Seeder::seed_products`], but a failed batch is returned as an error.
    pub async fn try_seed_products(&self, reset: bool) -> Result<u64, SeedError> {
        self.try_seed_products_from(&PRODUCTS, reset).await
    }

    pub async fn try_seed_products_from(
        &self,
        products: &[ProductSeed],
        reset: bool,
    ) -> Result<u64, SeedError> {
        let mut conn = self.prepare(SeedTable::Products, reset).await?;
        let affected = insert_products(&mut conn, products).await?;

        info!("Seeded {affected} products");
        Ok(affected)
    }

    /// Seeds the sample users with hashed passwords, returning the number of inserted rows.
    ///
    /// Failure handling matches [`Seeder::seed_products`].
    pub async fn seed_users(&self, reset: bool) -> Result<u64, SeedError> {
        self.seed_users_from(&USERS, reset).await
    }

    pub async fn seed_users_from(&self, users: &[UserSeed], reset: bool) -> Result<u64, SeedError> {
        let mut conn = self.prepare(SeedTable::Users, reset).await?;

        match insert_users(&mut conn, users).await {
            Ok(affected) => {
                info!("Seeded {affected} users");
                Ok(affected)
            }
            Err(e) => {
                error!("Seeding {} failed, rolled back: {e}", SeedTable::Users);
                Ok(0)
            }
        }
    }

    /// Like [`Seeder::seed_users`], but a failed batch is returned as an error.
    pub async fn try_seed_users(&self, reset: bool) -> Result<u64, SeedError> {
        self.try_seed_users_from(&USERS, reset).await
    }

    pub async fn try_seed_users_from(
        &self,
        users: &[UserSeed],
        reset: bool,
    ) -> Result<u64, SeedError> {
        let mut conn = self.prepare(SeedTable::Users, reset).await?;
        let affected = insert_users(&mut conn, users).await?;

        info!("Seeded {affected} users");
        Ok(affected)
    }

    /// Acquires the connection for one seeding call and resets `table` if asked.
    async fn prepare(
        &self,
        table: SeedTable,
        reset: bool,
    ) -> Result<PoolConnection<Postgres>, SeedError> {
        let mut conn = self.pool.acquire().await?;

        if reset {
            reset_table(&mut conn, table)
                .await
                .map_err(|source| SeedError::Reset { table, source })?;
        }

        Ok(conn)
    }
}

/// Inserts every product inside one transaction.
///
/// Only `nombre` and `precio` are written; `descripcion` and `stock` keep
/// their column defaults.
async fn insert_products(
    conn: &mut PoolConnection<Postgres>,
    products: &[ProductSeed],
) -> Result<u64, SeedError> {
    info!("Seeding {} products...", products.len());

    let mut tx = conn.begin().await?;
    let mut affected = 0;

    for product in products {
        let result = sqlx::query("INSERT INTO productos (nombre, precio) VALUES ($1, $2)")
            .bind(product.name)
            .bind(product.price)
            .execute(&mut *tx)
            .await;

        match result {
            Ok(done) => affected += done.rows_affected(),
            Err(e) => return Err(rollback(tx, e.into()).await),
        }
    }

    tx.commit().await?;
    Ok(affected)
}

/// Inserts every user inside one transaction, hashing each password first.
async fn insert_users(
    conn: &mut PoolConnection<Postgres>,
    users: &[UserSeed],
) -> Result<u64, SeedError> {
    info!("Seeding {} users...", users.len());

    let mut tx = conn.begin().await?;
    let mut affected = 0;

    for user in users {
        match insert_user(&mut tx, user).await {
            Ok(rows) => affected += rows,
            Err(e) => return Err(rollback(tx, e).await),
        }
    }

    tx.commit().await?;
    Ok(affected)
}

async fn insert_user(tx: &mut Transaction<'_, Postgres>, user: &UserSeed) -> Result<u64, SeedError> {
    let password_hash = hash_password(user.password)?;

    let done = sqlx::query(
        r#"
        INSERT INTO usuarios (usuario, password, nombre, rol)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user.username)
    .bind(&password_hash)
    .bind(user.display_name)
    .bind(user.role.as_str())
    .execute(&mut **tx)
    .await?;

    Ok(done.rows_affected())
}

/// Rolls back `tx` and hands back the error that caused it.
async fn rollback(tx: Transaction<'_, Postgres>, cause: SeedError) -> SeedError {
    if let Err(e) = tx.rollback().await {
        warn!("Rollback failed after seeding error: {e}");
    }
    cause
}
