// DTOs for Product
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;

/// Payload for creating or updating a product.
///
/// Every field is optional: on create, absent fields stay absent on the new
/// product; on update, absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// Read-only projection of a [`Product`] returned to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoProductDto {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl From<&Product> for InfoProductDto {
    fn from(product: &Product) -> Self {
        Self {
            uuid: product.uuid,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        }
    }
}

impl From<Product> for InfoProductDto {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}
