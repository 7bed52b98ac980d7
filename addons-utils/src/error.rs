//! Typed configuration errors reported at menu build time.

use thiserror::Error;

/// Rejected menu or paginator configuration.
///
/// Every variant is raised by a builder before anything is sent; a
/// configuration that builds successfully cannot fail validation later at
/// render time.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    #[error("a paginator needs at least one item")]
    NoItems,
    #[error("items_per_page must be at least 1, got {0}")]
    InvalidItemsPerPage(usize),
    #[error("columns must be between 1 and 3, got {0}")]
    InvalidColumns(usize),
    #[error("menu timeout must be non-zero")]
    ZeroTimeout,
}
