//! Error types for layout-tree operations

use taffy::{NodeId, TaffyError};
use thiserror::Error;

/// Result type alias for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while driving the layout tree
///
/// `NodeNotInitialized` is the only condition a correctly wired controller
/// should ever see, and only when it is used before being attached to a
/// layout tree (as a root, or through a context). It is not recoverable by
/// retrying.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The controller's active node could not be resolved
    #[error("layout node was not initialized")]
    NodeNotInitialized,

    /// An engine call referenced a node that is no longer part of the tree
    #[error("unknown layout node: {0:?}")]
    UnknownNode(NodeId),

    /// Error surfaced by the layout engine
    #[error("layout engine error: {0}")]
    Engine(TaffyError),

    /// Controller configuration could not be parsed
    #[error("invalid layout config: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<TaffyError> for LayoutError {
    fn from(err: TaffyError) -> Self {
        Self::Engine(err)
    }
}
