use taffy::NodeId;

/// Value passed from a layout provider down to descendant controllers.
///
/// It only borrows the provider's node: consumers may place their own
/// children in it but never release it, and the handle goes stale (rather
/// than dangling) once the provider releases the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlexContext {
    node: NodeId,
}

impl FlexContext {
    pub fn new(node: NodeId) -> Self {
        Self { node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}
