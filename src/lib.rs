//! # Product Mapper
//!
//! Field mapping between the [`Product`] entity and its data-transfer shapes.
//!
//! - [`ProductDto`] - create/update payload, every field optional
//! - [`InfoProductDto`] - read-only view returned to callers
//! - [`ProductMapper`] - `to_product`, `to_info_product_dto`, `merge`
//!
//! ## Example Usage
//!
//! ```rust
//! use product_mapper::{ProductDto, ProductMapper, ProductMapperImpl};
//!
//! let mapper = ProductMapperImpl::new();
//!
//! let dto = ProductDto { name: Some("Apple".into()), ..Default::default() };
//! let product = mapper.to_product(Some(&dto)).unwrap();
//! assert!(product.uuid.is_none());
//!
//! let patch = ProductDto { description: Some("Fresh".into()), ..Default::default() };
//! let product = mapper.merge(product, Some(&patch));
//! assert_eq!(product.name.as_deref(), Some("Apple"));
//! assert_eq!(product.description.as_deref(), Some("Fresh"));
//! ```

pub mod domain;
pub mod entity;
pub mod error;
pub mod product;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use domain::{InfoProductDto, Product, ProductDto, ProductField};
pub use entity::Entity;
pub use error::{MapperError, Result};
pub use product::{ProductMapper, ProductMapperImpl};
pub use telemetry::setup_tracing;
