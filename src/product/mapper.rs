use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use crate::domain::{InfoProductDto, Product, ProductDto};
use crate::entity::Entity;
use crate::error::{MapperError, Result};

/// Conversions between [`Product`] and its DTOs.
///
/// Absent inputs are answered with absent outputs, except for a missing merge
/// target, which is a caller bug and surfaces as [`MapperError::MissingProduct`].
pub trait ProductMapper {
    /// Builds a new, not yet persisted product from a DTO.
    fn to_product(&self, dto: Option<&ProductDto>) -> Option<Product>;

    /// Projects a product onto its read-only view.
    fn to_info_product_dto(&self, product: Option<&Product>) -> Option<InfoProductDto>;

    /// Applies the present fields of `dto` onto `product`.
    fn merge(&self, product: Product, dto: Option<&ProductDto>) -> Product;

    /// Same as [`ProductMapper::merge`], for callers holding a possibly missing product.
    fn merge_existing(&self, product: Option<Product>, dto: Option<&ProductDto>) -> Result<Product> {
        match product {
            Some(product) => Ok(self.merge(product, dto)),
            None => {
                warn!("Merge requested without a product");
                Err(MapperError::MissingProduct)
            }
        }
    }
}

/// Default [`ProductMapper`], stamping new products from an injectable clock.
pub struct ProductMapperImpl {
    clock: Box<dyn Fn() -> DateTime<Utc> + Send + Sync>,
}

impl ProductMapperImpl {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    pub fn with_clock(clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        Self { clock: Box::new(clock) }
    }
}

impl Default for ProductMapperImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProductMapperImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductMapperImpl").finish_non_exhaustive()
    }
}

impl ProductMapper for ProductMapperImpl {
    #[instrument(skip(self), level = "debug")]
    fn to_product(&self, dto: Option<&ProductDto>) -> Option<Product> {
        let dto = dto?;
        let product = Product::from_create(dto, (self.clock)());
        debug!(created = %product.created(), "Mapped dto to product");
        Some(product)
    }

    #[instrument(skip(self), level = "debug")]
    fn to_info_product_dto(&self, product: Option<&Product>) -> Option<InfoProductDto> {
        product.map(InfoProductDto::from)
    }

    #[instrument(skip(self, product), fields(uuid = ?product.id()), level = "debug")]
    fn merge(&self, mut product: Product, dto: Option<&ProductDto>) -> Product {
        match dto {
            Some(dto) => {
                product.on_update(dto);
                debug!(created = %product.created(), "Merged dto into product");
            }
            None => debug!("No dto to merge, product unchanged"),
        }
        product
    }
}
