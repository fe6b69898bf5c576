use indextree::{Arena, NodeId};

use crate::error::{DomError, DomResult};
use crate::html::{escape_attr, escape_text, is_void, parse_body_fragment};
use crate::range::SelectionRange;
use crate::snapshot::{Attrs, ElementSnapshot, NodeSnapshot, TextSnapshot};
use crate::tree::{DomTree, SelectionHost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Element { tag: String, attrs: Attrs },
    Text(String),
}

impl NodeData {
    pub fn element(tag: impl Into<String>) -> Self {
        NodeData::Element {
            tag: tag.into().to_ascii_lowercase(),
            attrs: Attrs::default(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        NodeData::Text(text.into())
    }
}

pub struct Document {
    arena: Arena<NodeData>,
    body: NodeId,
    selection: Option<SelectionRange<NodeId>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let body = arena.new_node(NodeData::element("body"));
        Self {
            arena,
            body,
            selection: None,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn data(&self, node: NodeId) -> Option<&NodeData> {
        self.arena.get(node).map(|n| n.get())
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.new_node(NodeData::element(tag))
    }

    pub fn create_text_node(&mut self, text: impl Into<String>) -> NodeId {
        self.arena.new_node(NodeData::text(text))
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match self.data(node)? {
            NodeData::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            NodeData::Text(_) => None,
        }
    }

    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> DomResult<()> {
        match self.data_mut(node)? {
            NodeData::Element { attrs, .. } => {
                attrs.insert(name.to_ascii_lowercase(), value.into());
                Ok(())
            }
            NodeData::Text(_) => Err(DomError::HierarchyRequest(
                "text nodes have no attributes".into(),
            )),
        }
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) -> DomResult<()> {
        match self.data_mut(node)? {
            NodeData::Text(t) => {
                *t = text.into();
                Ok(())
            }
            NodeData::Element { .. } => Err(DomError::HierarchyRequest(
                "element has no text data".into(),
            )),
        }
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(node) {
            self.write_html(child, &mut out);
        }
        out
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    pub fn set_inner_html(&mut self, node: NodeId, html: &str) -> DomResult<()> {
        if self.is_text(node) {
            return Err(DomError::HierarchyRequest(
                "cannot set markup on a text node".into(),
            ));
        }
        let fragment = parse_body_fragment(html);
        while let Some(child) = self.first_child(node) {
            self.remove_child(node, child)?;
        }
        for snapshot in &fragment {
            self.append_snapshot(node, snapshot)?;
        }
        Ok(())
    }

    pub fn snapshot(&self, node: NodeId) -> Option<NodeSnapshot> {
        let snapshot = match self.data(node)? {
            NodeData::Text(text) => NodeSnapshot::Text(TextSnapshot { text: text.clone() }),
            NodeData::Element { tag, attrs } => NodeSnapshot::Element(ElementSnapshot {
                tag: tag.clone(),
                attrs: attrs.clone(),
                children: self
                    .children(node)
                    .filter_map(|child| self.snapshot(child))
                    .collect(),
            }),
        };
        Some(snapshot)
    }

    pub fn append_snapshot(&mut self, parent: NodeId, snapshot: &NodeSnapshot) -> DomResult<NodeId> {
        let node = match snapshot {
            NodeSnapshot::Text(t) => self.create_text_node(t.text.clone()),
            NodeSnapshot::Element(el) => self.arena.new_node(NodeData::Element {
                tag: el.tag.to_ascii_lowercase(),
                attrs: el.attrs.clone(),
            }),
        };
        self.append_child(parent, node)?;
        if let NodeSnapshot::Element(el) = snapshot {
            for child in &el.children {
                self.append_snapshot(node, child)?;
            }
        }
        Ok(node)
    }

    fn data_mut(&mut self, node: NodeId) -> DomResult<&mut NodeData> {
        self.arena
            .get_mut(node)
            .filter(|n| !n.is_removed())
            .map(|n| n.get_mut())
            .ok_or_else(|| DomError::InvalidState(format!("node {node:?} no longer exists")))
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        match self.data(node) {
            Some(NodeData::Text(text)) => escape_text(text, out),
            Some(NodeData::Element { tag, attrs }) => {
                out.push('<');
                out.push_str(tag);
                for (key, value) in attrs {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    escape_attr(value, out);
                    out.push('"');
                }
                out.push('>');
                if is_void(tag) {
                    return;
                }
                for child in self.children(node) {
                    self.write_html(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            None => {}
        }
    }

    fn link(&self, node: NodeId) -> Option<&indextree::Node<NodeData>> {
        self.arena.get(node).filter(|n| !n.is_removed())
    }
}

impl DomTree for Document {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.link(node)?.parent()
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.link(node)?.first_child()
    }

    fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.link(node)?.last_child()
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.link(node)?.next_sibling()
    }

    fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.link(node)?.previous_sibling()
    }

    fn is_element(&self, node: NodeId) -> bool {
        matches!(self.data(node), Some(NodeData::Element { .. }))
    }

    fn is_text(&self, node: NodeId) -> bool {
        matches!(self.data(node), Some(NodeData::Text(_)))
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        match self.data(node)? {
            NodeData::Element { tag, .. } => Some(tag.as_str()),
            NodeData::Text(_) => None,
        }
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        match self.data(node)? {
            NodeData::Text(text) => Some(text.as_str()),
            NodeData::Element { .. } => None,
        }
    }

    fn is_removed(&self, node: NodeId) -> bool {
        self.link(node).is_none()
    }

    fn clone_shallow(&mut self, node: NodeId) -> DomResult<NodeId> {
        let data = self.data_mut(node)?.clone();
        Ok(self.arena.new_node(data))
    }

    fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        if !self.is_element(parent) {
            return Err(DomError::HierarchyRequest(
                "only elements can have children".into(),
            ));
        }
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest(
                "cannot insert a node into its own subtree".into(),
            ));
        }
        match reference {
            Some(reference) if self.parent(reference) != Some(parent) => Err(DomError::NotFound),
            Some(reference) if reference == child => Ok(()),
            Some(reference) => Ok(reference.checked_insert_before(child, &mut self.arena)?),
            None => Ok(parent.checked_append(child, &mut self.arena)?),
        }
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotFound);
        }
        child.detach(&mut self.arena);
        Ok(())
    }
}

impl SelectionHost for Document {
    fn selection(&self) -> Option<SelectionRange<NodeId>> {
        self.selection
    }

    fn set_selection(&mut self, range: Option<SelectionRange<NodeId>>) {
        self.selection = range;
    }
}
