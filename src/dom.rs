use std::collections::{HashMap, HashSet};

use crate::{DocumentCapability, Error, Result};

const DEFAULT_INPUT_TYPE: &str = "text";

const MODERN_INPUT_TYPES: &[&str] = &[
    "button", "checkbox", "color", "date", "datetime-local", "email", "file", "hidden", "image",
    "month", "number", "password", "radio", "range", "reset", "search", "submit", "tel", "text",
    "time", "url", "week",
];

const LEGACY_INPUT_TYPES: &[&str] = &[
    "button", "checkbox", "file", "hidden", "image", "password", "radio", "reset", "submit",
    "text",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeType {
    Document,
    Element(Element),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node_type: NodeType,
}

#[derive(Debug, Clone)]
struct Element {
    tag_name: String,
    attrs: HashMap<String, String>,
}

/// Deterministic in-process document, the default binding for the probe.
///
/// Input `type` assignments reflect the way engines do: a recognized value is
/// kept (ASCII-lowercased), an unrecognized one falls back to `text`. Which
/// values count as recognized depends on the profile the document was built
/// with.
#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<Node>,
    root: NodeId,
    recognized_input_types: HashSet<String>,
}

impl Dom {
    /// Modern engine profile: the full HTML5 input type set, `date` included.
    pub fn new() -> Self {
        Self::with_input_types(MODERN_INPUT_TYPES.iter().copied())
    }

    /// Pre-HTML5 engine profile: only the classic input types, so assigning
    /// `date` coerces to `text`.
    pub fn legacy() -> Self {
        Self::with_input_types(LEGACY_INPUT_TYPES.iter().copied())
    }

    /// A document whose form-control rendering recognizes exactly the given
    /// input types.
    pub fn with_input_types<'a>(types: impl IntoIterator<Item = &'a str>) -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            recognized_input_types: types.into_iter().map(str::to_ascii_lowercase).collect(),
        }
    }

    /// Children attached to the document root. The probe never attaches
    /// anything, so this stays empty across probe calls.
    pub fn document_children(&self) -> &[NodeId] {
        &self.nodes[self.root.0].children
    }

    fn element(&self, node_id: NodeId) -> Option<&Element> {
        match self.nodes.get(node_id.0).map(|node| &node.node_type) {
            Some(NodeType::Element(element)) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(node_id.0).map(|node| &mut node.node_type) {
            Some(NodeType::Element(element)) => Some(element),
            _ => None,
        }
    }

    fn is_input(&self, node_id: NodeId) -> bool {
        self.element(node_id)
            .map(|element| element.tag_name.eq_ignore_ascii_case("input"))
            .unwrap_or(false)
    }

    fn reflect_input_type(&self, value: &str) -> String {
        let normalized = value.to_ascii_lowercase();
        if self.recognized_input_types.contains(&normalized) {
            normalized
        } else {
            DEFAULT_INPUT_TYPE.to_string()
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentCapability for Dom {
    type ElementId = NodeId;

    fn create_element(&mut self, tag_name: &str) -> Result<NodeId> {
        let element = Element {
            tag_name: tag_name.to_string(),
            attrs: HashMap::new(),
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Element(element),
        });
        Ok(id)
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> Result<()> {
        let reflected = if self.is_input(element) && name.eq_ignore_ascii_case("type") {
            self.reflect_input_type(value)
        } else {
            value.to_string()
        };
        let Some(element) = self.element_mut(element) else {
            return Err(Error::Capability("no such element".into()));
        };
        element.attrs.insert(name.to_ascii_lowercase(), reflected);
        Ok(())
    }

    fn attribute(&self, element: NodeId, name: &str) -> Result<Option<String>> {
        let Some(found) = self.element(element) else {
            return Err(Error::Capability("no such element".into()));
        };
        let value = found.attrs.get(&name.to_ascii_lowercase()).cloned();
        if value.is_none() && self.is_input(element) && name.eq_ignore_ascii_case("type") {
            return Ok(Some(DEFAULT_INPUT_TYPE.to_string()));
        }
        Ok(value)
    }
}
