//! Flexbox layout-tree controllers
//!
//! Keeps a tree of taffy nodes in step with a tree of scene items and writes
//! the computed geometry back onto the items.
//!
//! - **Controllers** own a container's flex style and rebuild its node's
//!   child list whenever the container's children change
//! - **Modifiers** give individual items a node and item-side flex style
//! - **Contexts** lend a provider's node to a nested controller, so one solve
//!   at the root covers the whole subtree
//!
//! # Architecture
//!
//! ```text
//! setters / replace_children ──> LayoutTree ──> RefreshSignal
//!                                                   │
//!                       frame driver polls <────────┘
//!                              │
//!                              v
//!   recalculate(is_root): visibility ──> solve ──> apply_frame(items)
//! ```
//!
//! Everything runs on one thread; the tree is passed explicitly by `&mut`
//! into every operation.

mod config;
mod context;
mod controller;
mod error;
mod item;
mod modifier;
mod refresh;
mod registry;
mod style;
mod tree;

#[cfg(feature = "test-utils")]
pub mod proptest_strategies;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use config::ControllerConfig;
pub use context::FlexContext;
pub use controller::{ActiveNode, FlexController};
pub use error::{LayoutError, Result};
pub use item::{flex_node_of, LayoutItem, LayoutModifier};
pub use modifier::{FlexModifier, ItemMargin, ItemStyle};
pub use refresh::RefreshSignal;
pub use registry::{NodeRegistry, RegistryEntry};
pub use style::*;
pub use tree::{Frame, LayoutTree};

pub use taffy::NodeId;
