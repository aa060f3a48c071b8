use chrono::{DateTime, Utc};
use tracing::trace;
use uuid::Uuid;

use crate::domain::{Product, ProductDto, ProductField};
use crate::entity::Entity;

impl Entity for Product {
    type Id = Uuid;
    type CreatePayload = ProductDto;
    type Patch = ProductDto;

    fn id(&self) -> Option<&Uuid> {
        self.uuid.as_ref()
    }

    fn created(&self) -> DateTime<Utc> {
        self.created_at()
    }

    /// Creates a new Product from a DTO.
    ///
    /// The DTO's `uuid` is ignored: identifiers are handed out by whatever
    /// persists the product.
    fn from_create(payload: &ProductDto, created: DateTime<Utc>) -> Self {
        Product::new(
            None,
            payload.name.clone(),
            payload.description.clone(),
            payload.price,
            created,
        )
    }

    /// Updates name, description and price from whichever are present.
    ///
    /// # Fields Never Updated
    /// - `uuid`
    /// - `created`
    fn on_update(&mut self, patch: &ProductDto) {
        if let Some(name) = &patch.name {
            trace!(field = %ProductField::Name, "Overwriting field");
            self.name = Some(name.clone());
        }
        if let Some(description) = &patch.description {
            trace!(field = %ProductField::Description, "Overwriting field");
            self.description = Some(description.clone());
        }
        if let Some(price) = patch.price {
            trace!(field = %ProductField::Price, "Overwriting field");
            self.price = Some(price);
        }
    }
}
