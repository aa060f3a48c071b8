//! Product-specific entity hooks and the mapper built on them.

pub mod entity;
pub mod mapper;

pub use mapper::*;
