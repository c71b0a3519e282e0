//! Item-side flex decoration
//!
//! A `FlexModifier` owns the node that represents one scene item inside its
//! parent's flex container. It carries the item's own flex properties (grow,
//! size, margin, ...) and, when the item is itself a container, hands its
//! node to the item's controller through [`FlexModifier::context`].

use std::any::Any;

use serde::{Deserialize, Serialize};
use taffy::NodeId;

use crate::context::FlexContext;
use crate::error::Result;
use crate::item::LayoutModifier;
use crate::refresh::RefreshSignal;
use crate::style::{Align, Edge, FlexValue, PositionType};
use crate::tree::LayoutTree;

/// Flex properties of an item, as seen by its parent container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStyle {
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: FlexValue,
    pub width: FlexValue,
    pub height: FlexValue,
    pub min_width: FlexValue,
    pub min_height: FlexValue,
    pub max_width: FlexValue,
    pub max_height: FlexValue,
    pub margin: ItemMargin,
    pub align_self: Align,
    pub position_type: PositionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMargin {
    pub top: FlexValue,
    pub bottom: FlexValue,
    pub left: FlexValue,
    pub right: FlexValue,
}

impl ItemMargin {
    pub fn all(value: FlexValue) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    pub fn get(&self, edge: Edge) -> FlexValue {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: FlexValue::Auto,
            width: FlexValue::Auto,
            height: FlexValue::Auto,
            min_width: FlexValue::Auto,
            min_height: FlexValue::Auto,
            max_width: FlexValue::Auto,
            max_height: FlexValue::Auto,
            margin: ItemMargin::all(FlexValue::Points(0.0)),
            align_self: Align::Auto,
            position_type: PositionType::Relative,
        }
    }
}

#[derive(Debug)]
pub struct FlexModifier {
    node: NodeId,
    style: ItemStyle,
    refresh: RefreshSignal,
}

impl FlexModifier {
    pub fn new(tree: &mut LayoutTree, refresh: RefreshSignal) -> Result<Self> {
        Self::with_style(tree, ItemStyle::default(), refresh)
    }

    pub fn with_style(
        tree: &mut LayoutTree,
        style: ItemStyle,
        refresh: RefreshSignal,
    ) -> Result<Self> {
        let node = tree.new_node()?;
        let modifier = Self {
            node,
            style,
            refresh,
        };
        modifier.push_all(tree)?;
        Ok(modifier)
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn style(&self) -> &ItemStyle {
        &self.style
    }

    /// Context through which the item's own controller borrows this node
    pub fn context(&self) -> FlexContext {
        FlexContext::new(self.node)
    }

    pub fn set_flex_grow(&mut self, tree: &mut LayoutTree, grow: f32) -> Result<()> {
        self.style.flex_grow = grow;
        tree.set_flex_grow(self.node, grow)?;
        self.refresh.request();
        Ok(())
    }

    pub fn set_flex_shrink(&mut self, tree: &mut LayoutTree, shrink: f32) -> Result<()> {
        self.style.flex_shrink = shrink;
        tree.set_flex_shrink(self.node, shrink)?;
        self.refresh.request();
        Ok(())
    }

    pub fn set_flex_basis(&mut self, tree: &mut LayoutTree, basis: FlexValue) -> Result<()> {
        self.style.flex_basis = basis;
        tree.set_flex_basis(self.node, basis)?;
        self.refresh.request();
        Ok(())
    }

    pub fn set_size(
        &mut self,
        tree: &mut LayoutTree,
        width: FlexValue,
        height: FlexValue,
    ) -> Result<()> {
        self.style.width = width;
        self.style.height = height;
        tree.set_width(self.node, width)?;
        tree.set_height(self.node, height)?;
        self.refresh.request();
        Ok(())
    }

    pub fn set_min_size(
        &mut self,
        tree: &mut LayoutTree,
        width: FlexValue,
        height: FlexValue,
    ) -> Result<()> {
        self.style.min_width = width;
        self.style.min_height = height;
        tree.set_min_width(self.node, width)?;
        tree.set_min_height(self.node, height)?;
        self.refresh.request();
        Ok(())
    }

    pub fn set_max_size(
        &mut self,
        tree: &mut LayoutTree,
        width: FlexValue,
        height: FlexValue,
    ) -> Result<()> {
        self.style.max_width = width;
        self.style.max_height = height;
        tree.set_max_width(self.node, width)?;
        tree.set_max_height(self.node, height)?;
        self.refresh.request();
        Ok(())
    }

    pub fn set_margin(&mut self, tree: &mut LayoutTree, margin: ItemMargin) -> Result<()> {
        self.style.margin = margin;
        for edge in Edge::ALL {
            tree.set_margin(self.node, edge, margin.get(edge))?;
        }
        self.refresh.request();
        Ok(())
    }

    pub fn set_align_self(&mut self, tree: &mut LayoutTree, align: Align) -> Result<()> {
        self.style.align_self = align;
        tree.set_align_self(self.node, align)?;
        self.refresh.request();
        Ok(())
    }

    pub fn set_position_type(
        &mut self,
        tree: &mut LayoutTree,
        position: PositionType,
    ) -> Result<()> {
        self.style.position_type = position;
        tree.set_position_type(self.node, position)?;
        self.refresh.request();
        Ok(())
    }

    /// Remove the node from the tree. Any controller still borrowing it
    /// through a context will fail with `NodeNotInitialized`.
    pub fn release(self, tree: &mut LayoutTree) -> Result<()> {
        tree.remove_node(self.node)?;
        self.refresh.request();
        Ok(())
    }

    fn push_all(&self, tree: &mut LayoutTree) -> Result<()> {
        let style = &self.style;
        tree.set_flex_grow(self.node, style.flex_grow)?;
        tree.set_flex_shrink(self.node, style.flex_shrink)?;
        tree.set_flex_basis(self.node, style.flex_basis)?;
        tree.set_width(self.node, style.width)?;
        tree.set_height(self.node, style.height)?;
        tree.set_min_width(self.node, style.min_width)?;
        tree.set_min_height(self.node, style.min_height)?;
        tree.set_max_width(self.node, style.max_width)?;
        tree.set_max_height(self.node, style.max_height)?;
        for edge in Edge::ALL {
            tree.set_margin(self.node, edge, style.margin.get(edge))?;
        }
        tree.set_align_self(self.node, style.align_self)?;
        tree.set_position_type(self.node, style.position_type)?;
        Ok(())
    }
}

impl LayoutModifier for FlexModifier {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
