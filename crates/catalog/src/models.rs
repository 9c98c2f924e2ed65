use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

use crate::errors::CatalogError;

/// Maximum number of characters a product description may hold.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Identity shared by every persisted row type.
///
/// Entities hold their own fields; the trait only supplies the numeric id and
/// the utilities built on top of it.
pub trait Entity: Serialize {
    /// Table backing this entity.
    const TABLE: &'static str;

    /// Database id, `None` until the row has been persisted.
    fn id(&self) -> Option<i64>;

    /// Two entities share an identity only if both are persisted with the same id.
    fn same_identity(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// A row of the `productos` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
    id: Option<i64>,
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    name: String,
    #[serde(rename = "precio")]
    #[sqlx(rename = "precio")]
    price: f64,
    #[serde(rename = "descripcion")]
    #[sqlx(rename = "descripcion")]
    description: String,
    stock: i32,
}

impl Product {
    /// Builds an unsaved product, applying the same checks as the setters.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        stock: i32,
        description: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let mut product = Self::empty();
        product.name = name.into();
        product.price = price;
        product.set_stock(stock)?;
        product.set_description(description)?;
        Ok(product)
    }

    /// Blank product: no name, zero price, no stock, empty description.
    pub fn empty() -> Self {
        Self {
            id: None,
            name: String::new(),
            price: 0.0,
            description: String::new(),
            stock: 0,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn set_stock(&mut self, stock: i32) -> Result<(), CatalogError> {
        if stock < 0 {
            return Err(CatalogError::InvalidArgument(
                "stock cannot be negative".to_string(),
            ));
        }
        self.stock = stock;
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Length is counted in characters, matching a `VARCHAR(500)` column.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), CatalogError> {
        let description = description.into();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(CatalogError::InvalidArgument(format!(
                "description cannot exceed {MAX_DESCRIPTION_LEN} characters"
            )));
        }
        self.description = description;
        Ok(())
    }

    /// Flat key/value view of the product, useful for debugging and JSON output.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::with_capacity(5);
        map.insert("id".to_string(), self.id.into());
        map.insert("nombre".to_string(), self.name.clone().into());
        map.insert("precio".to_string(), self.price.into());
        map.insert("descripcion".to_string(), self.description.clone().into());
        map.insert("stock".to_string(), self.stock.into());
        map
    }
}

impl Entity for Product {
    const TABLE: &'static str = "productos";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Access level stored in the `rol` column of `usuarios`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[serde(rename = "usuario")]
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Customer => "usuario",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "usuario" => Ok(Role::Customer),
            other => Err(CatalogError::InvalidArgument(format!("unknown role: {other}"))),
        }
    }
}

/// A row of the `usuarios` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    #[sqlx(rename = "usuario")]
    pub username: String,
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "rol")]
    pub role: String,
}

impl User {
    pub fn role(&self) -> Result<Role, CatalogError> {
        self.role.parse()
    }
}

impl Entity for User {
    const TABLE: &'static str = "usuarios";

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }
}
