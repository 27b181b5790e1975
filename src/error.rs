use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ProductId;

/// Every failure an inventory operation can report back to the operator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("No storage type named {0:?} (expected COLD or DRY)")]
    UnknownStorageType(String),
    #[error("Invalid product ID: {0}")]
    NotFound(ProductId),
    #[error("Insufficient stock! requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error(transparent)]
    Actor(#[from] FrameworkError),
}

impl InventoryError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        InventoryError::InvalidArgument(msg.into())
    }
}
