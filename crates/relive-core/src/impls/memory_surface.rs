//! InMemorySurface - メモリ上の document
//!
//! # 実装詳細
//! - HashMap<NodeId, Element> でノードを保持
//! - Vec<NodeId> で body の並び順を保持
//! - id は単調増加、再利用しない

use std::collections::HashMap;

use crate::domain::{Element, ElementKind, NodeId};
use crate::ports::{Surface, SurfaceError};

#[derive(Debug)]
pub struct InMemorySurface {
    nodes: HashMap<NodeId, Element>,
    body: Vec<NodeId>,
    next_node_id: u64,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            body: Vec::new(),
            next_node_id: 1,
        }
    }

    fn allocate_node_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(&node)
    }

    /// body を append 順に 1 行ずつレンダリング
    pub fn render(&self) -> String {
        self.body
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .map(Element::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for InMemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for InMemorySurface {
    fn append(&mut self, kind: ElementKind, text: &str) -> Result<NodeId, SurfaceError> {
        let id = self.allocate_node_id();
        self.nodes.insert(id, Element::new(kind, text));
        self.body.push(id);
        Ok(id)
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), SurfaceError> {
        let element = self
            .nodes
            .get_mut(&node)
            .ok_or(SurfaceError::UnknownNode(node))?;
        element.text.clear();
        element.text.push_str(text);
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> Result<(), SurfaceError> {
        if self.nodes.remove(&node).is_none() {
            return Err(SurfaceError::UnknownNode(node));
        }
        self.body.retain(|id| *id != node);
        Ok(())
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|el| el.text.as_str())
    }

    fn attached(&self) -> Vec<NodeId> {
        self.body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_document_order() {
        let mut surface = InMemorySurface::new();
        let h = surface.append(ElementKind::Heading, "title").unwrap();
        let p = surface.append(ElementKind::Paragraph, "").unwrap();

        assert_eq!(surface.attached(), vec![h, p]);
        assert_eq!(surface.render(), "# title\n");
    }

    #[test]
    fn set_text_rewrites_node() {
        let mut surface = InMemorySurface::new();
        let p = surface.append(ElementKind::Paragraph, "old").unwrap();
        surface.set_text(p, "new").unwrap();
        assert_eq!(surface.text(p), Some("new"));
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut surface = InMemorySurface::new();
        let first = surface.append(ElementKind::Paragraph, "a").unwrap();
        surface.remove(first).unwrap();
        let second = surface.append(ElementKind::Paragraph, "b").unwrap();

        assert_ne!(first, second);
        assert_eq!(surface.attached(), vec![second]);
        assert!(surface.element(first).is_none());
    }

    #[test]
    fn unknown_node_is_an_error() {
        let mut surface = InMemorySurface::new();
        let missing = NodeId::new(42);
        assert!(matches!(
            surface.remove(missing),
            Err(SurfaceError::UnknownNode(id)) if id == missing
        ));
        assert!(matches!(
            surface.set_text(missing, "x"),
            Err(SurfaceError::UnknownNode(_))
        ));
        assert_eq!(surface.text(missing), None);
    }
}
