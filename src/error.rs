use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MapperError {
    /// Merge needs an existing record to merge into.
    #[error("cannot merge into a missing product")]
    MissingProduct,
}

pub type Result<T> = std::result::Result<T, MapperError>;
