pub mod dtos;
pub mod product;

pub use dtos::*;
pub use product::*;
