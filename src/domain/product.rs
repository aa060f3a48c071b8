use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a product in the catalogue.
///
/// `created` is fixed at construction and read through
/// [`Entity::created`](crate::entity::Entity::created):
///
/// ```compile_fail
/// use product_mapper::{ProductDto, ProductMapper, ProductMapperImpl};
///
/// let mut product = ProductMapperImpl::new()
///     .to_product(Some(&ProductDto::default()))
///     .unwrap();
/// product.created = chrono::Utc::now();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub uuid: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    created: DateTime<Utc>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `uuid` - Identifier, `None` before the product is persisted
    /// * `name` - Display name
    /// * `description` - Free-form description
    /// * `price` - Unit price
    /// * `created` - Creation timestamp
    pub fn new(
        uuid: Option<Uuid>,
        name: Option<String>,
        description: Option<String>,
        price: Option<Decimal>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            uuid,
            name,
            description,
            price,
            created,
        }
    }

    pub(crate) fn created_at(&self) -> DateTime<Utc> {
        self.created
    }
}

/// Fields that merge may overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Description,
    Price,
}

impl ProductField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Price => "price",
        }
    }
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
