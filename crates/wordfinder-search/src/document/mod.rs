//! The host document as seen by the engine: a text-bearing tree plus live
//! geometry queries.

mod memory;

pub use memory::{MemoryDocument, TextBox};

use wordfinder_common::{Rect, ViewportSnapshot};

/// Handle to a node in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Element { tag: String, classes: Vec<String> },
    Text(String),
}

impl NodeKind {
    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text(_))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        match self {
            NodeKind::Element { classes, .. } => classes.iter().any(|c| c == class),
            NodeKind::Text(_) => false,
        }
    }
}

/// Outcome of resolving a text span to current on-screen geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Viewport-relative bounding rectangle.
    Resolved(Rect),
    /// The span no longer maps to geometry (node detached, offsets stale).
    Unresolvable,
}

impl Resolution {
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Resolution::Resolved(rect) => Some(*rect),
            Resolution::Unresolvable => None,
        }
    }
}

/// What the engine needs from the rendering engine.
///
/// Text offsets are byte offsets into the node's text.
pub trait DocumentHost {
    /// Root of the searchable tree.
    fn root(&self) -> NodeId;

    /// Children of `node` in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn kind(&self, node: NodeId) -> Option<&NodeKind>;

    /// Current viewport-relative bounding rect of `[start, end)` within a
    /// text node.
    fn range_rect(&self, node: NodeId, start: usize, end: usize) -> Resolution;

    /// Current scroll offset and viewport size.
    fn viewport(&self) -> ViewportSnapshot;

    /// Text content of `node`, if it is a text node.
    fn text(&self, node: NodeId) -> Option<&str> {
        match self.kind(node)? {
            NodeKind::Text(text) => Some(text.as_str()),
            NodeKind::Element { .. } => None,
        }
    }

    /// Every text node under the root, in document order.
    fn text_nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            if self.kind(node).is_some_and(NodeKind::is_text) {
                out.push(node);
            }
            // Reverse so the leftmost child is popped first.
            stack.extend(self.children(node).into_iter().rev());
        }
        out
    }
}
