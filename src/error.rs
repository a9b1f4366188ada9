//! Error types for catalog loading and browsing

use crate::model::{CategoryId, ProductId, UserId};
use thiserror::Error;

/// Record kinds, used when reporting duplicate identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Category,
    Product,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::User => write!(f, "user"),
            RecordKind::Category => write!(f, "category"),
            RecordKind::Product => write!(f, "product"),
        }
    }
}

/// Data-integrity failures detected while joining the catalog.
///
/// These are load-time failures: a catalog that joined successfully never
/// produces them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A product references a category that does not exist.
    #[error("Unknown category: product {product_id} references category {category_id}")]
    UnknownCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    /// A category is owned by a user that does not exist.
    #[error("Unknown owner: category {category_id} is owned by missing user {owner_id}")]
    UnknownOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },

    /// Two records of the same kind share an id.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: RecordKind, id: u32 },
}

impl CatalogError {
    /// Get an error code for this error type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            Self::UnknownOwner { .. } => "UNKNOWN_OWNER",
            Self::DuplicateId { .. } => "DUPLICATE_ID",
        }
    }
}

/// Rejected user actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    #[error("No user with id {0}")]
    UnknownUser(UserId),

    #[error("No category with id {0}")]
    UnknownCategory(CategoryId),
}

impl BrowserError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownUser(_) => "UNKNOWN_USER",
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
