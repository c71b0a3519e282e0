//! Layout-node storage backed by a taffy tree
//!
//! `LayoutTree` is the native engine as seen by controllers: nodes are
//! allocated and released here, every style setter addresses a single
//! property (or a single edge / gutter), and geometry is read back as
//! [`Frame`]s. Calls on a node that was released return
//! [`LayoutError::UnknownNode`] instead of touching stale engine state.

use std::collections::HashMap;

use taffy::geometry::Point;
use taffy::prelude::*;

use crate::error::{LayoutError, Result};
use crate::style::{
    self, Align, Direction, Display as FlexDisplay, Edge, FlexDirection as FlexDirectionValue,
    FlexStyle, FlexValue, Gutter, Justify, Overflow, PositionType, Wrap,
};

/// Computed position and size of a node, relative to its parent's border box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Engine state the taffy style has no slot for
#[derive(Debug, Clone, Copy, Default)]
struct NodeMeta {
    direction: Direction,
    owner_direction: Direction,
    owner_fill: OwnerFill,
}

/// Owner extent currently written into an auto-sized axis of a solved node.
/// `None` means the axis holds the node's declared size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct OwnerFill {
    width: Option<f32>,
    height: Option<f32>,
}

pub struct LayoutTree {
    tree: TaffyTree<()>,
    nodes: HashMap<NodeId, NodeMeta>,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            nodes: HashMap::new(),
        }
    }

    /// Allocate a node with engine-default style
    pub fn new_node(&mut self) -> Result<NodeId> {
        let node = self.tree.new_leaf(Style::default())?;
        self.nodes.insert(node, NodeMeta::default());
        tracing::trace!(node = ?node, "allocated layout node");
        Ok(node)
    }

    /// Release a node. It is detached from its parent and its children are
    /// left parentless.
    pub fn remove_node(&mut self, node: NodeId) -> Result<()> {
        self.ensure_live(node)?;
        self.tree.remove(node)?;
        self.nodes.remove(&node);
        tracing::trace!(node = ?node, "released layout node");
        Ok(())
    }

    pub fn is_initialized(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // Container style

    pub fn set_overflow(&mut self, node: NodeId, overflow: Overflow) -> Result<()> {
        self.update_style(node, |style| {
            let value = overflow.into();
            style.overflow = Point { x: value, y: value };
        })
    }

    pub fn set_direction(&mut self, node: NodeId, direction: Direction) -> Result<()> {
        self.ensure_live(node)?;
        if let Some(meta) = self.nodes.get_mut(&node) {
            meta.direction = direction;
        }
        self.tree.mark_dirty(node)?;
        Ok(())
    }

    pub fn set_flex_direction(
        &mut self,
        node: NodeId,
        flex_direction: FlexDirectionValue,
    ) -> Result<()> {
        self.update_style(node, |style| style.flex_direction = flex_direction.into())
    }

    pub fn set_flex_wrap(&mut self, node: NodeId, wrap: Wrap) -> Result<()> {
        self.update_style(node, |style| style.flex_wrap = wrap.into())
    }

    pub fn set_justify_content(&mut self, node: NodeId, justify: Justify) -> Result<()> {
        self.update_style(node, |style| {
            style.justify_content = style::justify_to_engine(justify)
        })
    }

    pub fn set_align_items(&mut self, node: NodeId, align: Align) -> Result<()> {
        self.update_style(node, |style| {
            style.align_items = style::align_items_to_engine(align)
        })
    }

    pub fn set_align_content(&mut self, node: NodeId, align: Align) -> Result<()> {
        self.update_style(node, |style| {
            style.align_content = style::align_content_to_engine(align)
        })
    }

    pub fn set_padding(&mut self, node: NodeId, edge: Edge, value: f32) -> Result<()> {
        self.update_style(node, |style| {
            let slot = match edge {
                Edge::Top => &mut style.padding.top,
                Edge::Bottom => &mut style.padding.bottom,
                Edge::Left => &mut style.padding.left,
                Edge::Right => &mut style.padding.right,
            };
            *slot = LengthPercentage::Length(value);
        })
    }

    pub fn set_gap(&mut self, node: NodeId, gutter: Gutter, value: f32) -> Result<()> {
        self.update_style(node, |style| match gutter {
            Gutter::Row => style.gap.height = LengthPercentage::Length(value),
            Gutter::Column => style.gap.width = LengthPercentage::Length(value),
        })
    }

    pub fn set_display(&mut self, node: NodeId, display: FlexDisplay) -> Result<()> {
        self.update_style(node, |style| {
            style.display = match display {
                FlexDisplay::Flex => Display::Flex,
                FlexDisplay::None => Display::None,
            }
        })
    }

    pub fn display(&self, node: NodeId) -> Result<FlexDisplay> {
        self.ensure_live(node)?;
        Ok(match self.tree.style(node)?.display {
            Display::None => FlexDisplay::None,
            _ => FlexDisplay::Flex,
        })
    }

    /// Push a whole container style, one property setter at a time
    pub fn apply_container_style(&mut self, node: NodeId, style: &FlexStyle) -> Result<()> {
        self.set_overflow(node, style.overflow)?;
        self.set_direction(node, style.direction)?;
        self.set_flex_direction(node, style.flex_direction)?;
        self.set_flex_wrap(node, style.flex_wrap)?;
        self.set_justify_content(node, style.justify_content)?;
        self.set_align_items(node, style.align_items)?;
        self.set_align_content(node, style.align_content)?;
        for gutter in [Gutter::Row, Gutter::Column] {
            self.set_gap(node, gutter, style.gap.get(gutter))?;
        }
        for edge in Edge::ALL {
            self.set_padding(node, edge, style.padding.get(edge))?;
        }
        Ok(())
    }

    /// Read a node's container style back in cache form
    pub fn container_style(&self, node: NodeId) -> Result<FlexStyle> {
        self.ensure_live(node)?;
        let engine_style = self.tree.style(node)?;
        let direction = self
            .nodes
            .get(&node)
            .map(|meta| meta.direction)
            .unwrap_or_default();
        Ok(FlexStyle {
            overflow: engine_style.overflow.x.into(),
            direction,
            flex_direction: engine_style.flex_direction.into(),
            flex_wrap: engine_style.flex_wrap.into(),
            justify_content: style::justify_from_engine(engine_style.justify_content),
            align_items: style::align_items_from_engine(engine_style.align_items),
            align_content: style::align_content_from_engine(engine_style.align_content),
            padding: style::Edges {
                top: style::length_value(engine_style.padding.top),
                bottom: style::length_value(engine_style.padding.bottom),
                left: style::length_value(engine_style.padding.left),
                right: style::length_value(engine_style.padding.right),
            },
            gap: style::Gap {
                x: style::length_value(engine_style.gap.width),
                y: style::length_value(engine_style.gap.height),
            },
        })
    }

    // Item style

    pub fn set_flex_grow(&mut self, node: NodeId, grow: f32) -> Result<()> {
        self.update_style(node, |style| style.flex_grow = grow)
    }

    pub fn set_flex_shrink(&mut self, node: NodeId, shrink: f32) -> Result<()> {
        self.update_style(node, |style| style.flex_shrink = shrink)
    }

    pub fn set_flex_basis(&mut self, node: NodeId, basis: FlexValue) -> Result<()> {
        self.update_style(node, |style| style.flex_basis = basis.into())
    }

    pub fn set_width(&mut self, node: NodeId, width: FlexValue) -> Result<()> {
        self.update_style(node, |style| style.size.width = width.into())?;
        if let Some(meta) = self.nodes.get_mut(&node) {
            meta.owner_fill.width = None;
        }
        Ok(())
    }

    pub fn set_height(&mut self, node: NodeId, height: FlexValue) -> Result<()> {
        self.update_style(node, |style| style.size.height = height.into())?;
        if let Some(meta) = self.nodes.get_mut(&node) {
            meta.owner_fill.height = None;
        }
        Ok(())
    }

    pub fn set_min_width(&mut self, node: NodeId, width: FlexValue) -> Result<()> {
        self.update_style(node, |style| style.min_size.width = width.into())
    }

    pub fn set_min_height(&mut self, node: NodeId, height: FlexValue) -> Result<()> {
        self.update_style(node, |style| style.min_size.height = height.into())
    }

    pub fn set_max_width(&mut self, node: NodeId, width: FlexValue) -> Result<()> {
        self.update_style(node, |style| style.max_size.width = width.into())
    }

    pub fn set_max_height(&mut self, node: NodeId, height: FlexValue) -> Result<()> {
        self.update_style(node, |style| style.max_size.height = height.into())
    }

    pub fn set_margin(&mut self, node: NodeId, edge: Edge, value: FlexValue) -> Result<()> {
        self.update_style(node, |style| {
            let slot = match edge {
                Edge::Top => &mut style.margin.top,
                Edge::Bottom => &mut style.margin.bottom,
                Edge::Left => &mut style.margin.left,
                Edge::Right => &mut style.margin.right,
            };
            *slot = value.into();
        })
    }

    pub fn set_align_self(&mut self, node: NodeId, align: Align) -> Result<()> {
        self.update_style(node, |style| {
            style.align_self = style::align_items_to_engine(align)
        })
    }

    pub fn set_position_type(&mut self, node: NodeId, position: PositionType) -> Result<()> {
        self.update_style(node, |style| style.position = position.into())
    }

    // Children

    /// Insert `child` under `parent` at `index`. A child that still hangs
    /// under another parent is detached from it first, so a node never has
    /// two parents.
    pub fn insert_child(&mut self, parent: NodeId, child: NodeId, index: usize) -> Result<()> {
        self.ensure_live(parent)?;
        self.ensure_live(child)?;
        self.apply_owner_fill(child, OwnerFill::default())?;
        if let Some(previous) = self.tree.parent(child) {
            tracing::debug!(child = ?child, previous = ?previous, parent = ?parent, "moving node to new parent");
            self.tree.remove_child(previous, child)?;
        }
        self.tree.insert_child_at_index(parent, index, child)?;
        Ok(())
    }

    pub fn remove_all_children(&mut self, parent: NodeId) -> Result<()> {
        self.ensure_live(parent)?;
        self.tree.set_children(parent, &[])?;
        Ok(())
    }

    pub fn children(&self, parent: NodeId) -> Result<Vec<NodeId>> {
        self.ensure_live(parent)?;
        Ok(self.tree.children(parent)?)
    }

    pub fn child_count(&self, parent: NodeId) -> Result<usize> {
        self.ensure_live(parent)?;
        Ok(self.tree.child_count(parent))
    }

    pub fn parent(&self, child: NodeId) -> Option<NodeId> {
        if !self.is_initialized(child) {
            return None;
        }
        self.tree.parent(child)
    }

    // Calculation

    /// Solve the subtree rooted at `node` inside an owner of `width` x
    /// `height`. A non-finite extent is treated as unbounded. When the node's
    /// declared size is auto it fills the owner; the fill is only rewritten
    /// when the owner extent changes, so an unchanged tree keeps its cache.
    pub fn calculate_layout(
        &mut self,
        node: NodeId,
        width: f32,
        height: f32,
        direction: Direction,
    ) -> Result<()> {
        self.ensure_live(node)?;
        if let Some(meta) = self.nodes.get_mut(&node) {
            meta.owner_direction = direction;
        }

        let fill = self.owner_fill_for(node, width, height)?;
        self.apply_owner_fill(node, fill)?;

        let available = Size {
            width: available_extent(width),
            height: available_extent(height),
        };
        self.tree.compute_layout(node, available)?;

        tracing::debug!(node = ?node, width, height, "computed layout");
        Ok(())
    }

    /// Computed frame of `node`. Inside a right-to-left parent the x position
    /// is mirrored within the parent's content box.
    pub fn frame(&self, node: NodeId) -> Result<Frame> {
        self.ensure_live(node)?;
        let layout = self.tree.layout(node)?;
        let mut frame = Frame {
            x: layout.location.x,
            y: layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
        };

        if let Some(parent) = self.parent(node) {
            if self.resolved_direction(parent) == Direction::Rtl {
                let parent_width = self.tree.layout(parent)?.size.width;
                let padding = &self.tree.style(parent)?.padding;
                let left = style::length_value(padding.left);
                let right = style::length_value(padding.right);
                frame.x = parent_width - right - (frame.x - left) - frame.width;
            }
        }
        Ok(frame)
    }

    /// Direction in effect for `node`: its own, else its parent's, else the
    /// direction the last solve was started with.
    pub fn resolved_direction(&self, node: NodeId) -> Direction {
        let mut current = Some(node);
        while let Some(id) = current {
            let Some(meta) = self.nodes.get(&id) else {
                break;
            };
            if meta.direction != Direction::Inherit {
                return meta.direction;
            }
            match self.tree.parent(id) {
                Some(parent) => current = Some(parent),
                None => {
                    return match meta.owner_direction {
                        Direction::Rtl => Direction::Rtl,
                        _ => Direction::Ltr,
                    }
                }
            }
        }
        Direction::Ltr
    }

    fn owner_fill(&self, node: NodeId) -> OwnerFill {
        self.nodes
            .get(&node)
            .map(|meta| meta.owner_fill)
            .unwrap_or_default()
    }

    /// Axes of `node` that should take the owner extent for the next solve
    fn owner_fill_for(&self, node: NodeId, width: f32, height: f32) -> Result<OwnerFill> {
        let current = self.owner_fill(node);
        let size = self.tree.style(node)?.size;
        let auto_width = current.width.is_some() || size.width == Dimension::Auto;
        let auto_height = current.height.is_some() || size.height == Dimension::Auto;
        Ok(OwnerFill {
            width: (auto_width && width.is_finite()).then_some(width),
            height: (auto_height && height.is_finite()).then_some(height),
        })
    }

    /// Write `fill` into the node's size, putting auto back on axes that no
    /// longer take the owner extent. Does nothing if the fill is unchanged.
    fn apply_owner_fill(&mut self, node: NodeId, fill: OwnerFill) -> Result<()> {
        let current = self.owner_fill(node);
        if current == fill {
            return Ok(());
        }
        self.update_style(node, |style| {
            if let Some(width) = fill.width {
                style.size.width = length(width);
            } else if current.width.is_some() {
                style.size.width = Dimension::Auto;
            }
            if let Some(height) = fill.height {
                style.size.height = length(height);
            } else if current.height.is_some() {
                style.size.height = Dimension::Auto;
            }
        })?;
        if let Some(meta) = self.nodes.get_mut(&node) {
            meta.owner_fill = fill;
        }
        Ok(())
    }

    fn ensure_live(&self, node: NodeId) -> Result<()> {
        if self.is_initialized(node) {
            Ok(())
        } else {
            Err(LayoutError::UnknownNode(node))
        }
    }

    fn update_style(&mut self, node: NodeId, update: impl FnOnce(&mut Style)) -> Result<()> {
        self.ensure_live(node)?;
        let mut style = self.tree.style(node)?.clone();
        update(&mut style);
        self.tree.set_style(node, style)?;
        Ok(())
    }
}

fn available_extent(extent: f32) -> AvailableSpace {
    if extent.is_finite() {
        AvailableSpace::Definite(extent)
    } else {
        AvailableSpace::MaxContent
    }
}
