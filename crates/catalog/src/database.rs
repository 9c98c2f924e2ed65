use crate::errors::CatalogError;
use crate::models::{Product, User};
use sqlx::PgPool;
use tracing::debug;

/// Read access to the catalog tables over an injected pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn count_products(&self) -> Result<i64, CatalogError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_users(&self) -> Result<i64, CatalogError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<Product> = sqlx::query_as(
            r#"
            SELECT id, nombre, precio, descripcion, stock
            FROM productos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Loaded {} products", products.len());
        Ok(products)
    }

    pub async fn get_user(&self, username: &str) -> Result<Option<User>, CatalogError> {
        let user = sqlx::query_as(
            r#"
            SELECT id, usuario, password, nombre, rol
            FROM usuarios
            WHERE usuario = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, CatalogError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, usuario, password, nombre, rol
            FROM usuarios
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
