//! Flex layout controller
//!
//! A `FlexController` belongs to one container item. It keeps the
//! container's flex style, decides which layout node it lays its children
//! out in, and keeps that node's child list in step with the container's
//! logical children.
//!
//! The node is either private to the controller (independent mode, solved by
//! the controller itself) or borrowed from an enclosing provider through a
//! [`FlexContext`] (context-bound mode, solved by whichever ancestor is the
//! layout root). Switching modes moves every child node across, so the tree
//! never holds a child twice or keeps one in a node nobody uses.

use taffy::NodeId;

use crate::config::ControllerConfig;
use crate::context::FlexContext;
use crate::error::{LayoutError, Result};
use crate::item::{flex_node_of, LayoutItem};
use crate::refresh::RefreshSignal;
use crate::registry::{self, NodeRegistry};
use crate::style::{
    Align, Direction, Display, Edge, Edges, FlexDirection, FlexStyle, Gap, Gutter, Justify,
    Overflow, Wrap,
};
use crate::tree::{Frame, LayoutTree};

/// The node a controller currently lays its children out in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveNode {
    /// Private node, released together with the controller
    Owned(NodeId),
    /// Node lent by a context provider
    Borrowed(NodeId),
}

impl ActiveNode {
    pub fn id(self) -> NodeId {
        match self {
            ActiveNode::Owned(node) | ActiveNode::Borrowed(node) => node,
        }
    }

    pub fn is_owned(self) -> bool {
        matches!(self, ActiveNode::Owned(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeBinding {
    /// Private node, allocated on first use
    Independent { owned: Option<NodeId> },
    ContextBound,
}

pub struct FlexController<I> {
    style: FlexStyle,
    binding: NodeBinding,
    context_node: Option<NodeId>,
    registry: NodeRegistry,
    children: Option<Vec<I>>,
    rect: Frame,
    refresh: RefreshSignal,
}

impl<I: LayoutItem> FlexController<I> {
    /// Context-bound controller with default style
    pub fn new(refresh: RefreshSignal) -> Self {
        Self {
            style: FlexStyle::default(),
            binding: NodeBinding::ContextBound,
            context_node: None,
            registry: NodeRegistry::new(),
            children: None,
            rect: Frame::default(),
            refresh,
        }
    }

    pub fn from_config(config: &ControllerConfig, refresh: RefreshSignal) -> Self {
        let mut controller = Self::new(refresh);
        controller.style = config.style;
        if config.use_independent_layout {
            controller.binding = NodeBinding::Independent { owned: None };
        }
        controller
    }

    // Style properties

    pub fn style(&self) -> &FlexStyle {
        &self.style
    }

    pub fn overflow(&self) -> Overflow {
        self.style.overflow
    }

    pub fn set_overflow(&mut self, tree: &mut LayoutTree, overflow: Overflow) -> Result<()> {
        self.style.overflow = overflow;
        self.push_property(tree, |tree, node| tree.set_overflow(node, overflow))
    }

    pub fn direction(&self) -> Direction {
        self.style.direction
    }

    pub fn set_direction(&mut self, tree: &mut LayoutTree, direction: Direction) -> Result<()> {
        self.style.direction = direction;
        self.push_property(tree, |tree, node| tree.set_direction(node, direction))
    }

    pub fn flex_direction(&self) -> FlexDirection {
        self.style.flex_direction
    }

    pub fn set_flex_direction(
        &mut self,
        tree: &mut LayoutTree,
        flex_direction: FlexDirection,
    ) -> Result<()> {
        self.style.flex_direction = flex_direction;
        self.push_property(tree, |tree, node| {
            tree.set_flex_direction(node, flex_direction)
        })
    }

    pub fn flex_wrap(&self) -> Wrap {
        self.style.flex_wrap
    }

    pub fn set_flex_wrap(&mut self, tree: &mut LayoutTree, wrap: Wrap) -> Result<()> {
        self.style.flex_wrap = wrap;
        self.push_property(tree, |tree, node| tree.set_flex_wrap(node, wrap))
    }

    pub fn justify_content(&self) -> Justify {
        self.style.justify_content
    }

    pub fn set_justify_content(&mut self, tree: &mut LayoutTree, justify: Justify) -> Result<()> {
        self.style.justify_content = justify;
        self.push_property(tree, |tree, node| tree.set_justify_content(node, justify))
    }

    pub fn align_items(&self) -> Align {
        self.style.align_items
    }

    pub fn set_align_items(&mut self, tree: &mut LayoutTree, align: Align) -> Result<()> {
        self.style.align_items = align;
        self.push_property(tree, |tree, node| tree.set_align_items(node, align))
    }

    pub fn align_content(&self) -> Align {
        self.style.align_content
    }

    pub fn set_align_content(&mut self, tree: &mut LayoutTree, align: Align) -> Result<()> {
        self.style.align_content = align;
        self.push_property(tree, |tree, node| tree.set_align_content(node, align))
    }

    pub fn padding(&self) -> Edges {
        self.style.padding
    }

    pub fn set_padding(&mut self, tree: &mut LayoutTree, padding: Edges) -> Result<()> {
        self.style.padding = padding;
        self.push_property(tree, |tree, node| {
            for edge in Edge::ALL {
                tree.set_padding(node, edge, padding.get(edge))?;
            }
            Ok(())
        })
    }

    pub fn gap(&self) -> Gap {
        self.style.gap
    }

    pub fn set_gap(&mut self, tree: &mut LayoutTree, gap: Gap) -> Result<()> {
        self.style.gap = gap;
        self.push_property(tree, |tree, node| {
            tree.set_gap(node, Gutter::Row, gap.get(Gutter::Row))?;
            tree.set_gap(node, Gutter::Column, gap.get(Gutter::Column))
        })
    }

    /// Replace the whole cached style and push it to the active node
    pub fn set_style(&mut self, tree: &mut LayoutTree, style: FlexStyle) -> Result<()> {
        self.style = style;
        self.refresh_all_properties(tree)?;
        self.refresh.request();
        Ok(())
    }

    /// Re-push every cached property to the active node. Needed whenever the
    /// active node changes, since a newly bound node carries engine defaults.
    pub fn refresh_all_properties(&mut self, tree: &mut LayoutTree) -> Result<()> {
        let node = self.resolve_active(tree)?.id();
        tree.apply_container_style(node, &self.style)
    }

    fn push_property<F>(&mut self, tree: &mut LayoutTree, push: F) -> Result<()>
    where
        F: FnOnce(&mut LayoutTree, NodeId) -> Result<()>,
    {
        let node = self.resolve_active(tree)?.id();
        push(tree, node)?;
        self.refresh.request();
        Ok(())
    }

    // Ownership

    pub fn use_independent_layout(&self) -> bool {
        matches!(self.binding, NodeBinding::Independent { .. })
    }

    /// Switch between a private node and the context node.
    ///
    /// Children move from the previously active node (if there was one) to
    /// the new one, then the cached style is pushed to it. A private node
    /// left behind is released. If the new node cannot be resolved the
    /// controller stays in its previous mode.
    pub fn set_use_independent_layout(
        &mut self,
        tree: &mut LayoutTree,
        independent: bool,
    ) -> Result<()> {
        if self.use_independent_layout() == independent {
            return Ok(());
        }

        let previous = self.peek_active(tree);
        let next_binding = if independent {
            NodeBinding::Independent { owned: None }
        } else {
            NodeBinding::ContextBound
        };
        let previous_binding = std::mem::replace(&mut self.binding, next_binding);

        let next = match self.resolve_active(tree) {
            Ok(next) => next,
            Err(err) => {
                self.binding = previous_binding;
                return Err(err);
            }
        };

        self.reconcile_into(tree, next.id(), previous)?;
        self.refresh_all_properties(tree)?;

        if let NodeBinding::Independent { owned: Some(node) } = previous_binding {
            if tree.is_initialized(node) {
                tree.remove_node(node)?;
            }
        }

        tracing::debug!(
            independent,
            from = ?previous,
            to = ?next,
            "switched layout node ownership"
        );
        self.refresh.request();
        Ok(())
    }

    /// Resolve the active node, allocating the private node on first use
    pub fn active_node(&mut self, tree: &mut LayoutTree) -> Result<ActiveNode> {
        self.resolve_active(tree)
    }

    fn resolve_active(&mut self, tree: &mut LayoutTree) -> Result<ActiveNode> {
        match self.binding {
            NodeBinding::Independent { owned: Some(node) } => {
                if tree.is_initialized(node) {
                    Ok(ActiveNode::Owned(node))
                } else {
                    Err(LayoutError::NodeNotInitialized)
                }
            }
            NodeBinding::Independent { owned: None } => {
                let node = tree.new_node()?;
                tree.apply_container_style(node, &self.style)?;
                self.binding = NodeBinding::Independent { owned: Some(node) };
                tracing::debug!(node = ?node, "allocated independent layout node");
                Ok(ActiveNode::Owned(node))
            }
            NodeBinding::ContextBound => match self.context_node {
                Some(node) if tree.is_initialized(node) => Ok(ActiveNode::Borrowed(node)),
                _ => Err(LayoutError::NodeNotInitialized),
            },
        }
    }

    /// Currently active node without allocating one
    fn peek_active(&self, tree: &LayoutTree) -> Option<NodeId> {
        let node = match self.binding {
            NodeBinding::Independent { owned } => owned,
            NodeBinding::ContextBound => self.context_node,
        }?;
        tree.is_initialized(node).then_some(node)
    }

    // Context

    /// Expose the active node to descendant controllers
    pub fn create_context(&mut self, tree: &mut LayoutTree) -> Result<FlexContext> {
        Ok(FlexContext::new(self.resolve_active(tree)?.id()))
    }

    /// Bind to (or, with `None`, detach from) the node of an enclosing
    /// provider.
    ///
    /// Detaching leaves the borrowed node childless but alive. Binding
    /// places the known children in the new node when the controller is
    /// context-bound, then synchronises the node with the cached style. A
    /// context-bound controller keeps its previous binding if the new node
    /// is not initialized.
    pub fn provide_context(
        &mut self,
        tree: &mut LayoutTree,
        context: Option<&FlexContext>,
    ) -> Result<()> {
        let Some(context) = context else {
            if let Some(node) = self.context_node.take() {
                if !self.use_independent_layout() {
                    if tree.is_initialized(node) {
                        tree.remove_all_children(node)?;
                    }
                    self.registry.clear();
                }
                tracing::debug!(node = ?node, "detached from layout context");
            }
            return Ok(());
        };

        let node = context.node();
        let previous = self.context_node.replace(node);
        if !self.use_independent_layout() {
            let target = match self.resolve_active(tree) {
                Ok(active) => active.id(),
                Err(err) => {
                    self.context_node = previous;
                    return Err(err);
                }
            };
            self.reconcile_into(tree, target, previous)?;
        }
        self.refresh_all_properties(tree)?;

        tracing::debug!(node = ?node, previous = ?previous, "bound to layout context");
        self.refresh.request();
        Ok(())
    }

    // Children

    /// Replace the logical children and rebuild the active node's child list.
    ///
    /// The previous children are handed back so the caller can release their
    /// modifiers; their nodes are no longer referenced by the controller.
    pub fn replace_children(
        &mut self,
        tree: &mut LayoutTree,
        children: Vec<I>,
    ) -> Result<Vec<I>> {
        self.registry.clear();
        let previous = self.children.replace(children).unwrap_or_default();
        self.reload_children(tree)?;
        Ok(previous)
    }

    /// Rebuild the active node's child list from the current children
    pub fn reload_children(&mut self, tree: &mut LayoutTree) -> Result<()> {
        let target = self.resolve_active(tree)?.id();
        self.reconcile_into(tree, target, None)?;
        self.refresh.request();
        Ok(())
    }

    pub fn children(&self) -> &[I] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Mutable access to the children. Changing an item's within-layout flag
    /// is picked up by the next recalculation. Reordering items or changing
    /// their modifiers needs [`reload_children`](Self::reload_children);
    /// until then an item whose node no longer matches its registry entry is
    /// neither projected nor given a frame.
    pub fn children_mut(&mut self) -> &mut [I] {
        self.children.as_deref_mut().unwrap_or_default()
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Node currently representing the child at `index`
    pub fn node_for(&self, index: usize) -> Option<NodeId> {
        self.registry.node_for(index)
    }

    fn reconcile_into(
        &mut self,
        tree: &mut LayoutTree,
        target: NodeId,
        vacated: Option<NodeId>,
    ) -> Result<()> {
        let Some(children) = self.children.as_deref() else {
            return Ok(());
        };
        registry::reconcile(tree, &mut self.registry, children, target, vacated)
    }

    // Calculation

    pub fn rect(&self) -> Frame {
        self.rect
    }

    /// Content rectangle of the container, used as the owner size when this
    /// controller solves
    pub fn set_rect(&mut self, rect: Frame) {
        if self.rect != rect {
            self.rect = rect;
            self.refresh.request();
        }
    }

    /// Project visibility, then solve and apply geometry if this controller
    /// is responsible for its node: as the layout root, or in independent
    /// mode. Context-bound non-root controllers leave the solve to the root.
    pub fn recalculate(&mut self, tree: &mut LayoutTree, is_root: bool) -> Result<()> {
        self.project_visibility(tree)?;
        if !is_root && !self.use_independent_layout() {
            tracing::trace!("deferring layout to ancestor");
            return Ok(());
        }

        let node = self.resolve_active(tree)?.id();
        tree.calculate_layout(node, self.rect.width, self.rect.height, self.style.direction)?;
        self.apply_children(tree)
    }

    /// Push computed frames onto every registered child within layout
    pub fn apply_children(&mut self, tree: &mut LayoutTree) -> Result<()> {
        self.resolve_active(tree)?;
        let Some(children) = self.children.as_mut() else {
            return Ok(());
        };
        for entry in self.registry.iter() {
            let Some(item) = children.get_mut(entry.item) else {
                continue;
            };
            if flex_node_of(&*item) != Some(entry.node) {
                tracing::warn!(node = ?entry.node, position = entry.item, "item no longer owns its registered node, skipping");
                continue;
            }
            if !item.within_layout() {
                continue;
            }
            item.apply_frame(tree.frame(entry.node)?);
        }
        Ok(())
    }

    fn project_visibility(&self, tree: &mut LayoutTree) -> Result<()> {
        let Some(children) = self.children.as_deref() else {
            return Ok(());
        };
        for entry in self.registry.iter() {
            let Some(item) = children.get(entry.item) else {
                continue;
            };
            if flex_node_of(item) != Some(entry.node) {
                continue;
            }
            let display = if item.within_layout() {
                Display::Flex
            } else {
                Display::None
            };
            if tree.display(entry.node)? != display {
                tree.set_display(entry.node, display)?;
            }
        }
        Ok(())
    }

    /// Tear the controller down. A borrowed node is left childless, an owned
    /// node is removed from the tree. The children are handed back so their
    /// modifiers can be released by the caller.
    pub fn release(mut self, tree: &mut LayoutTree) -> Result<Vec<I>> {
        match self.binding {
            NodeBinding::Independent { owned: Some(node) } => {
                if tree.is_initialized(node) {
                    tree.remove_node(node)?;
                }
            }
            NodeBinding::Independent { owned: None } => {}
            NodeBinding::ContextBound => {
                if let Some(node) = self.context_node.filter(|node| tree.is_initialized(*node)) {
                    tree.remove_all_children(node)?;
                }
            }
        }
        self.registry.clear();
        tracing::debug!("released layout controller");
        Ok(self.children.take().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestItem;
    use tracing_test::traced_test;

    fn independent(refresh: &RefreshSignal) -> FlexController<TestItem> {
        let config = ControllerConfig {
            use_independent_layout: true,
            ..ControllerConfig::default()
        };
        FlexController::from_config(&config, refresh.clone())
    }

    #[test]
    fn test_context_bound_without_context_is_not_initialized() {
        let mut tree = LayoutTree::new();
        let mut controller: FlexController<TestItem> = FlexController::new(RefreshSignal::new());

        assert!(matches!(
            controller.active_node(&mut tree),
            Err(LayoutError::NodeNotInitialized)
        ));
        assert!(matches!(
            controller.recalculate(&mut tree, true),
            Err(LayoutError::NodeNotInitialized)
        ));
        assert!(matches!(
            controller.apply_children(&mut tree),
            Err(LayoutError::NodeNotInitialized)
        ));
    }

    #[test]
    fn test_independent_node_is_allocated_lazily_with_cached_style() {
        let mut tree = LayoutTree::new();
        let mut controller = independent(&RefreshSignal::new());
        assert_eq!(tree.node_count(), 0);

        let active = controller.active_node(&mut tree).unwrap();

        assert!(active.is_owned());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(
            tree.container_style(active.id()).unwrap(),
            FlexStyle::default()
        );
        assert_eq!(controller.active_node(&mut tree).unwrap(), active);
    }

    #[test]
    fn test_setter_stores_pushes_and_requests_refresh() {
        let mut tree = LayoutTree::new();
        let refresh = RefreshSignal::new();
        let mut controller = independent(&refresh);

        controller
            .set_justify_content(&mut tree, Justify::Center)
            .unwrap();

        let node = controller.active_node(&mut tree).unwrap().id();
        assert_eq!(controller.justify_content(), Justify::Center);
        assert_eq!(
            tree.container_style(node).unwrap().justify_content,
            Justify::Center
        );
        assert_eq!(refresh.pending(), 1);
    }

    #[test]
    fn test_setter_without_node_keeps_cached_value() {
        let mut tree = LayoutTree::new();
        let refresh = RefreshSignal::new();
        let mut controller: FlexController<TestItem> = FlexController::new(refresh.clone());

        let result = controller.set_flex_direction(&mut tree, FlexDirection::Column);

        assert!(matches!(result, Err(LayoutError::NodeNotInitialized)));
        assert_eq!(controller.flex_direction(), FlexDirection::Column);
        assert!(!refresh.is_pending());
    }

    #[test]
    fn test_binding_context_pushes_cached_style() {
        let mut tree = LayoutTree::new();
        let refresh = RefreshSignal::new();
        let mut controller: FlexController<TestItem> = FlexController::new(refresh.clone());
        let _ = controller.set_gap(&mut tree, Gap::new(3.0, 7.0));
        let provider = tree.new_node().unwrap();

        controller
            .provide_context(&mut tree, Some(&FlexContext::new(provider)))
            .unwrap();

        assert_eq!(tree.container_style(provider).unwrap().gap, Gap::new(3.0, 7.0));
        assert_eq!(
            controller.active_node(&mut tree).unwrap(),
            ActiveNode::Borrowed(provider)
        );
    }

    #[test]
    fn test_leaving_independent_releases_private_node() {
        let mut tree = LayoutTree::new();
        let refresh = RefreshSignal::new();
        let provider = tree.new_node().unwrap();
        let mut controller = independent(&refresh);
        controller
            .provide_context(&mut tree, Some(&FlexContext::new(provider)))
            .unwrap();
        let private = controller.active_node(&mut tree).unwrap().id();

        controller
            .set_use_independent_layout(&mut tree, false)
            .unwrap();

        assert!(!tree.is_initialized(private));
        assert_eq!(controller.active_node(&mut tree).unwrap().id(), provider);
    }

    #[test]
    fn test_failed_switch_keeps_previous_mode() {
        let mut tree = LayoutTree::new();
        let refresh = RefreshSignal::new();
        let mut controller = independent(&refresh);
        let children = vec![TestItem::flex("a", &mut tree, &refresh)];
        controller.replace_children(&mut tree, children).unwrap();
        let private = controller.active_node(&mut tree).unwrap().id();

        let result = controller.set_use_independent_layout(&mut tree, false);

        assert!(matches!(result, Err(LayoutError::NodeNotInitialized)));
        assert!(controller.use_independent_layout());
        assert_eq!(controller.active_node(&mut tree).unwrap().id(), private);
        assert_eq!(tree.child_count(private).unwrap(), 1);
    }

    #[test]
    fn test_binding_dead_context_keeps_previous_node() {
        let mut tree = LayoutTree::new();
        let refresh = RefreshSignal::new();
        let first = tree.new_node().unwrap();
        let dead = tree.new_node().unwrap();
        tree.remove_node(dead).unwrap();
        let mut controller = FlexController::new(refresh.clone());
        controller
            .provide_context(&mut tree, Some(&FlexContext::new(first)))
            .unwrap();
        let children = vec![
            TestItem::flex("a", &mut tree, &refresh),
            TestItem::flex("b", &mut tree, &refresh),
        ];
        controller.replace_children(&mut tree, children).unwrap();

        let result = controller.provide_context(&mut tree, Some(&FlexContext::new(dead)));

        assert!(matches!(result, Err(LayoutError::NodeNotInitialized)));
        assert_eq!(
            controller.active_node(&mut tree).unwrap(),
            ActiveNode::Borrowed(first)
        );
        assert_eq!(tree.child_count(first).unwrap(), 2);

        controller.provide_context(&mut tree, None).unwrap();

        assert_eq!(tree.child_count(first).unwrap(), 0);
    }

    #[test]
    fn test_replace_children_hands_back_previous_children() {
        let mut tree = LayoutTree::new();
        let refresh = RefreshSignal::new();
        let mut controller = independent(&refresh);
        let first = vec![
            TestItem::flex("a", &mut tree, &refresh),
            TestItem::plain("b"),
        ];
        assert!(controller
            .replace_children(&mut tree, first)
            .unwrap()
            .is_empty());

        let second = vec![TestItem::flex("c", &mut tree, &refresh)];
        let previous = controller.replace_children(&mut tree, second).unwrap();

        let names: Vec<&str> = previous.iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(controller.children()[0].name, "c");
    }

    #[test]
    fn test_reordered_children_get_no_stale_frames() {
        let mut tree = LayoutTree::new();
        let refresh = RefreshSignal::new();
        let mut controller = independent(&refresh);
        controller.set_rect(Frame {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 50.0,
        });
        let children = vec![
            TestItem::sized("narrow", &mut tree, &refresh, 10.0, 10.0),
            TestItem::sized("wide", &mut tree, &refresh, 20.0, 10.0),
        ];
        controller.replace_children(&mut tree, children).unwrap();

        controller.children_mut().swap(0, 1);
        controller.recalculate(&mut tree, true).unwrap();

        assert!(controller.children().iter().all(|item| item.frames.is_empty()));

        controller.reload_children(&mut tree).unwrap();
        controller.recalculate(&mut tree, true).unwrap();

        let wide = &controller.children()[0];
        assert_eq!(wide.name, "wide");
        assert_eq!(wide.last_frame().map(|frame| (frame.x, frame.width)), Some((0.0, 20.0)));
        let narrow = &controller.children()[1];
        assert_eq!(narrow.last_frame().map(|frame| frame.x), Some(20.0));
    }

    #[test]
    fn test_release_keeps_borrowed_node_alive() {
        let mut tree = LayoutTree::new();
        let refresh = RefreshSignal::new();
        let provider = tree.new_node().unwrap();
        let mut controller = FlexController::new(refresh.clone());
        controller
            .provide_context(&mut tree, Some(&FlexContext::new(provider)))
            .unwrap();
        let children = vec![TestItem::flex("a", &mut tree, &refresh)];
        controller.replace_children(&mut tree, children).unwrap();

        let children = controller.release(&mut tree).unwrap();

        assert_eq!(children.len(), 1);
        assert!(tree.is_initialized(provider));
        assert_eq!(tree.child_count(provider).unwrap(), 0);
    }

    #[test]
    fn test_release_removes_owned_node() {
        let mut tree = LayoutTree::new();
        let mut controller = independent(&RefreshSignal::new());
        let node = controller.active_node(&mut tree).unwrap().id();

        controller.release(&mut tree).unwrap();

        assert!(!tree.is_initialized(node));
    }

    #[test]
    fn test_set_rect_requests_refresh_only_on_change() {
        let refresh = RefreshSignal::new();
        let mut controller: FlexController<TestItem> = FlexController::new(refresh.clone());
        let rect = Frame {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 10.0,
        };

        controller.set_rect(rect);
        controller.set_rect(rect);

        assert_eq!(refresh.pending(), 1);
        assert_eq!(controller.rect(), rect);
    }

    #[test]
    #[traced_test]
    fn test_mode_switch_is_logged() {
        let mut tree = LayoutTree::new();
        let refresh = RefreshSignal::new();
        let provider = tree.new_node().unwrap();
        let mut controller: FlexController<TestItem> = FlexController::new(refresh);
        controller
            .provide_context(&mut tree, Some(&FlexContext::new(provider)))
            .unwrap();

        controller
            .set_use_independent_layout(&mut tree, true)
            .unwrap();

        assert!(logs_contain("bound to layout context"));
        assert!(logs_contain("allocated independent layout node"));
        assert!(logs_contain("switched layout node ownership"));
    }
}
