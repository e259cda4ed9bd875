//! Which text nodes the locator ignores.

use wordfinder_config::SearchConfig;

use crate::document::{DocumentHost, NodeId, NodeKind};

/// Rejects text that is not rendered or that belongs to the finder's own
/// panel.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    excluded_tags: Vec<String>,
    panel_class: String,
}

impl ExclusionFilter {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            excluded_tags: config.excluded_tags.clone(),
            panel_class: config.panel_class.clone(),
        }
    }

    pub fn is_excluded<D: DocumentHost + ?Sized>(&self, doc: &D, node: NodeId) -> bool {
        self.is_script_or_style(doc, node) || self.is_self_panel(doc, node)
    }

    /// The nearest element ancestor is a non-renderable container.
    pub fn is_script_or_style<D: DocumentHost + ?Sized>(&self, doc: &D, node: NodeId) -> bool {
        let Some(tag) = nearest_element(doc, node).and_then(|el| doc.kind(el)?.tag()) else {
            return false;
        };
        self.excluded_tags
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(tag))
    }

    /// Some element ancestor carries the panel class.
    pub fn is_self_panel<D: DocumentHost + ?Sized>(&self, doc: &D, node: NodeId) -> bool {
        let mut current = doc.parent(node);
        while let Some(el) = current {
            if doc.kind(el).is_some_and(|k| k.has_class(&self.panel_class)) {
                return true;
            }
            current = doc.parent(el);
        }
        false
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

fn nearest_element<D: DocumentHost + ?Sized>(doc: &D, node: NodeId) -> Option<NodeId> {
    let mut current = doc.parent(node);
    while let Some(id) = current {
        if matches!(doc.kind(id), Some(NodeKind::Element { .. })) {
            return Some(id);
        }
        current = doc.parent(id);
    }
    None
}
