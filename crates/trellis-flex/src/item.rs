//! Scene-side collaborators of a controller

use std::any::Any;

use crate::modifier::FlexModifier;
use crate::tree::Frame;
use taffy::NodeId;

/// A decoration attached to a scene item that describes how it is laid out.
///
/// Controllers only recognise [`FlexModifier`]; other modifier kinds are
/// valid but keep their item out of the flex tree entirely.
pub trait LayoutModifier: Any {
    fn as_any(&self) -> &dyn Any;
}

/// A scene item managed by a layout controller
pub trait LayoutItem {
    fn layout_modifier(&self) -> Option<&dyn LayoutModifier>;

    /// Whether the item currently takes part in layout. Items outside the
    /// layout stay registered but are hidden from the solve.
    fn within_layout(&self) -> bool;

    /// Push computed geometry onto the item
    fn apply_frame(&mut self, frame: Frame);
}

/// Node that represents `item` in the flex tree, if it carries a flex modifier
pub fn flex_node_of<I: LayoutItem + ?Sized>(item: &I) -> Option<NodeId> {
    item.layout_modifier()?
        .as_any()
        .downcast_ref::<FlexModifier>()
        .map(FlexModifier::node)
}
