//! # Test Support
//!
//! Fixture builders for products and their DTOs.
//!
//! Start from [`ProductTestBuilder::builder`], override fields with the
//! `with_*` setters, then call one of the `build_*` methods.
//! Defaults are fixed so that two builders with the same overrides produce
//! equal values, including `created`.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{InfoProductDto, Product, ProductDto};

pub const PRODUCT_UUID: Uuid = Uuid::from_u128(0x7d9e3a56_8b5b_4c2e_9bf4_4f0e6c1a2b3d);
pub const PRODUCT_NAME: &str = "Яблоко";
pub const PRODUCT_DESCRIPTION: &str = "Выращено в Беларуси";
pub const PRODUCT_PRICE: Decimal = Decimal::from_parts(299, 0, 0, false, 2);

pub const NEW_PRODUCT_NAME: &str = "Груша";
pub const NEW_PRODUCT_DESCRIPTION: &str = "Выращено в Польше";
pub const NEW_PRODUCT_PRICE: Decimal = Decimal::from_parts(449, 0, 0, false, 2);

pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, 29, 12, 0, 0).unwrap()
}

#[derive(Debug, Clone)]
pub struct ProductTestBuilder {
    uuid: Option<Uuid>,
    name: Option<String>,
    description: Option<String>,
    price: Option<Decimal>,
    created: DateTime<Utc>,
}

impl ProductTestBuilder {
    pub fn builder() -> Self {
        Self {
            uuid: Some(PRODUCT_UUID),
            name: Some(PRODUCT_NAME.to_string()),
            description: Some(PRODUCT_DESCRIPTION.to_string()),
            price: Some(PRODUCT_PRICE),
            created: created_at(),
        }
    }

    pub fn with_uuid(mut self, uuid: Option<Uuid>) -> Self {
        self.uuid = uuid;
        self
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_price(mut self, price: Option<Decimal>) -> Self {
        self.price = price;
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn build_product(&self) -> Product {
        Product::new(
            self.uuid,
            self.name.clone(),
            self.description.clone(),
            self.price,
            self.created,
        )
    }

    pub fn build_product_dto(&self) -> ProductDto {
        ProductDto {
            uuid: self.uuid,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InfoProductTestBuilder {
    inner: ProductTestBuilder,
}

impl InfoProductTestBuilder {
    pub fn builder() -> Self {
        Self {
            inner: ProductTestBuilder::builder(),
        }
    }

    pub fn with_uuid(self, uuid: Option<Uuid>) -> Self {
        Self {
            inner: self.inner.with_uuid(uuid),
        }
    }

    pub fn with_name(self, name: Option<String>) -> Self {
        Self {
            inner: self.inner.with_name(name),
        }
    }

    pub fn with_price(self, price: Option<Decimal>) -> Self {
        Self {
            inner: self.inner.with_price(price),
        }
    }

    pub fn build_info_product_dto(&self) -> InfoProductDto {
        let dto = self.inner.build_product_dto();
        InfoProductDto {
            uuid: dto.uuid,
            name: dto.name,
            description: dto.description,
            price: dto.price,
        }
    }
}
