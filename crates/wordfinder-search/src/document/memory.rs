//! In-memory document with a fixed-advance line layout.
//!
//! Each text node occupies one line box. Nodes appended with
//! [`MemoryDocument::append_text`] stack top to bottom; explicit placement
//! goes through [`MemoryDocument::append_text_at`].

use wordfinder_common::{Rect, ViewportSnapshot};

use super::{DocumentHost, NodeId, NodeKind, Resolution};

pub const DEFAULT_CHAR_WIDTH: f64 = 8.0;
pub const DEFAULT_LINE_HEIGHT: f64 = 16.0;

/// Page-space line box of a text node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub x: f64,
    pub y: f64,
    pub char_width: f64,
    pub line_height: f64,
}

impl TextBox {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            char_width: DEFAULT_CHAR_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    layout: Option<TextBox>,
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    viewport: ViewportSnapshot,
    next_line_y: f64,
}

impl MemoryDocument {
    /// Empty `<body>` with a viewport of the given size, scrolled to the top.
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let body = Node {
            kind: NodeKind::Element {
                tag: "body".into(),
                classes: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
            layout: None,
        };
        Self {
            nodes: vec![body],
            viewport: ViewportSnapshot::new(0.0, 0.0, viewport_width, viewport_height),
            next_line_y: 0.0,
        }
    }

    /// A document whose only content is `text` inside one paragraph.
    pub fn from_text(text: &str) -> Self {
        let mut doc = Self::new(1024.0, 768.0);
        let p = doc.append_element(doc.root(), "p", &[]);
        doc.append_text(p, text);
        doc
    }

    pub fn append_element(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        self.push(
            parent,
            NodeKind::Element {
                tag: tag.into(),
                classes: classes.iter().map(|c| c.to_string()).collect(),
            },
            None,
        )
    }

    /// Append a text node on the next free line.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let layout = TextBox::at(0.0, self.next_line_y);
        self.next_line_y += layout.line_height;
        self.push(parent, NodeKind::Text(text.into()), Some(layout))
    }

    /// Append a text node at an explicit page position.
    pub fn append_text_at(&mut self, parent: NodeId, text: &str, layout: TextBox) -> NodeId {
        self.next_line_y = self.next_line_y.max(layout.y + layout.line_height);
        self.push(parent, NodeKind::Text(text.into()), Some(layout))
    }

    /// Remove `node` (and its subtree) from the tree. Its id stays valid
    /// but no longer resolves to geometry.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get(node.0).and_then(|n| n.parent) else {
            return;
        };
        self.nodes[parent.0].children.retain(|c| *c != node);
        self.nodes[node.0].parent = None;
    }

    /// Replace the content of a text node.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(Node {
            kind: NodeKind::Text(current),
            ..
        }) = self.nodes.get_mut(node.0)
        {
            *current = text.into();
        }
    }

    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.viewport.scroll_x = x;
        self.viewport.scroll_y = y;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    /// Total laid-out height of the content.
    pub fn content_height(&self) -> f64 {
        self.next_line_y
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind, layout: Option<TextBox>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            layout,
        });
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    /// True if walking up from `node` reaches the root.
    fn is_connected(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root() {
                return true;
            }
            match self.nodes.get(current.0).and_then(|n| n.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}

impl DocumentHost for MemoryDocument {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(node.0)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.nodes.get(node.0).map(|n| &n.kind)
    }

    fn range_rect(&self, node: NodeId, start: usize, end: usize) -> Resolution {
        if !self.is_connected(node) {
            return Resolution::Unresolvable;
        }
        let Some(n) = self.nodes.get(node.0) else {
            return Resolution::Unresolvable;
        };
        let (NodeKind::Text(text), Some(layout)) = (&n.kind, n.layout) else {
            return Resolution::Unresolvable;
        };
        if start > end
            || end > text.len()
            || !text.is_char_boundary(start)
            || !text.is_char_boundary(end)
        {
            return Resolution::Unresolvable;
        }

        let before = text[..start].chars().count() as f64;
        let span = text[start..end].chars().count() as f64;
        let page = Rect::new(
            layout.x + before * layout.char_width,
            layout.y,
            span * layout.char_width,
            layout.line_height,
        );
        Resolution::Resolved(page.offset(-self.viewport.scroll_x, -self.viewport.scroll_y))
    }

    fn viewport(&self) -> ViewportSnapshot {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_nodes_in_document_order() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let div = doc.append_element(root, "div", &[]);
        let a = doc.append_text(div, "a");
        let span = doc.append_element(div, "span", &[]);
        let b = doc.append_text(span, "b");
        let c = doc.append_text(root, "c");

        assert_eq!(doc.text_nodes(), vec![a, b, c]);
    }

    #[test]
    fn auto_layout_stacks_lines() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        doc.append_text(root, "one");
        let second = doc.append_text(root, "two");

        let rect = doc.range_rect(second, 0, 3).rect().unwrap();
        assert_eq!(rect, Rect::new(0.0, 16.0, 24.0, 16.0));
        assert_eq!(doc.content_height(), 32.0);
    }

    #[test]
    fn range_rect_is_viewport_relative() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let t = doc.append_text_at(root, "hello world", TextBox::at(10.0, 500.0));
        doc.scroll_to(0.0, 400.0);

        let rect = doc.range_rect(t, 6, 11).rect().unwrap();
        assert_eq!(rect, Rect::new(58.0, 100.0, 40.0, 16.0));
    }

    #[test]
    fn range_rect_counts_chars_not_bytes() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let t = doc.append_text(root, "héllo fox");
        // "héllo " is 6 chars but 7 bytes.
        let rect = doc.range_rect(t, 7, 10).rect().unwrap();
        assert_eq!(rect.x, 48.0);
        assert_eq!(rect.width, 24.0);
    }

    #[test]
    fn detached_node_is_unresolvable() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let p = doc.append_element(root, "p", &[]);
        let t = doc.append_text(p, "gone soon");
        doc.detach(p);

        assert_eq!(doc.range_rect(t, 0, 4), Resolution::Unresolvable);
        assert!(doc.text_nodes().is_empty());
    }

    #[test]
    fn stale_offsets_are_unresolvable() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let t = doc.append_text(root, "a long sentence");
        doc.set_text(t, "short");

        assert_eq!(doc.range_rect(t, 7, 15), Resolution::Unresolvable);
        assert!(doc.range_rect(t, 0, 5).rect().is_some());
    }

    #[test]
    fn element_span_is_unresolvable() {
        let doc = MemoryDocument::from_text("text");
        assert_eq!(doc.range_rect(doc.root(), 0, 1), Resolution::Unresolvable);
    }
}
