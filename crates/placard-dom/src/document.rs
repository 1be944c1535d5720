/* crates/placard-dom/src/document.rs */

use crate::node::{Node, NodeId, NodeKind, attr_value, is_void_element};
use crate::parse::parse_into;

/// An arena of parsed nodes. Detached and replaced nodes stay in the arena;
/// traversal and serialization only ever walk from the roots, so they are
/// simply unreachable.
#[derive(Debug, Default)]
pub struct Document {
  nodes: Vec<Node>,
  roots: Vec<NodeId>,
}

impl Document {
  pub fn parse(html: &str) -> Self {
    let mut doc = Self::default();
    parse_into(&mut doc, None, html);
    doc
  }

  pub(crate) fn alloc(&mut self, kind: NodeKind) -> NodeId {
    let id = NodeId(self.nodes.len());
    self.nodes.push(Node { parent: None, children: Vec::new(), kind });
    id
  }

  pub(crate) fn attach(&mut self, parent: Option<NodeId>, id: NodeId) {
    self.nodes[id.0].parent = parent;
    match parent {
      Some(p) => self.nodes[p.0].children.push(id),
      None => self.roots.push(id),
    }
  }

  // -- Accessors --

  pub fn node(&self, id: NodeId) -> &Node {
    &self.nodes[id.0]
  }

  pub fn roots(&self) -> &[NodeId] {
    &self.roots
  }

  pub fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.nodes[id.0].parent
  }

  pub fn children(&self, id: NodeId) -> &[NodeId] {
    &self.nodes[id.0].children
  }

  pub fn tag(&self, id: NodeId) -> Option<&str> {
    match &self.nodes[id.0].kind {
      NodeKind::Element { tag, .. } => Some(tag),
      _ => None,
    }
  }

  /// Text content of a text node (`None` for any other node kind).
  pub fn text(&self, id: NodeId) -> Option<&str> {
    match &self.nodes[id.0].kind {
      NodeKind::Text(value) => Some(value),
      _ => None,
    }
  }

  /// Overwrite a text node's content in place. Ignored for non-text nodes.
  pub fn set_text(&mut self, id: NodeId, value: &str) {
    if let NodeKind::Text(content) = &mut self.nodes[id.0].kind {
      *content = value.to_string();
    }
  }

  pub fn attr(&self, id: NodeId, name: &str) -> Option<String> {
    match &self.nodes[id.0].kind {
      NodeKind::Element { attrs, .. } => attr_value(attrs, name),
      _ => None,
    }
  }

  pub fn has_class(&self, id: NodeId, class: &str) -> bool {
    self
      .attr(id, "class")
      .is_some_and(|value| value.split_ascii_whitespace().any(|c| c == class))
  }

  // -- Traversal --

  /// All nodes under `root` in document order, excluding `root` itself.
  pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    self.collect_descendants(root, &mut out);
    out
  }

  fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
    for &child in &self.nodes[id.0].children {
      out.push(child);
      self.collect_descendants(child, out);
    }
  }

  /// Every text node in the document, in document order. The corpus is
  /// materialized eagerly: mutations during a pass do not re-enter the walk.
  pub fn text_nodes(&self) -> Vec<NodeId> {
    let mut out = Vec::new();
    for &root in &self.roots {
      if self.text(root).is_some() {
        out.push(root);
      }
      self.collect_text(root, &mut out);
    }
    out
  }

  /// Every text node under `root`, in document order.
  pub fn text_nodes_under(&self, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    self.collect_text(root, &mut out);
    out
  }

  fn collect_text(&self, id: NodeId, out: &mut Vec<NodeId>) {
    for &child in &self.nodes[id.0].children {
      if self.text(child).is_some() {
        out.push(child);
      }
      self.collect_text(child, out);
    }
  }

  pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
    let mut out = Vec::new();
    for &root in &self.roots {
      if self.tag(root) == Some(tag) {
        out.push(root);
      }
      for id in self.descendants(root) {
        if self.tag(id) == Some(tag) {
          out.push(id);
        }
      }
    }
    out
  }

  pub fn elements_by_tag_under(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
    self.descendants(root).into_iter().filter(|&id| self.tag(id) == Some(tag)).collect()
  }

  /// Elements anywhere in the document carrying the named attribute.
  pub fn elements_with_attr(&self, name: &str) -> Vec<NodeId> {
    let mut out = Vec::new();
    for &root in &self.roots {
      if self.attr(root, name).is_some() {
        out.push(root);
      }
      for id in self.descendants(root) {
        if self.attr(id, name).is_some() {
          out.push(id);
        }
      }
    }
    out
  }

  /// First element whose `id` attribute equals `value`.
  pub fn element_by_id(&self, value: &str) -> Option<NodeId> {
    self
      .elements_with_attr("id")
      .into_iter()
      .find(|&id| self.attr(id, "id").as_deref() == Some(value))
  }

  /// Nearest element, starting from `id` itself and walking up, that carries
  /// the given class.
  pub fn closest_with_class(&self, id: NodeId, class: &str) -> Option<NodeId> {
    let mut current = Some(id);
    while let Some(node) = current {
      if self.has_class(node, class) {
        return Some(node);
      }
      current = self.nodes[node.0].parent;
    }
    None
  }

  /// Concatenated descendant text, the way the browser reports textContent.
  pub fn element_text(&self, id: NodeId) -> String {
    let mut out = String::new();
    if let Some(text) = self.text(id) {
      out.push_str(text);
    }
    for child in self.descendants(id) {
      if let Some(text) = self.text(child) {
        out.push_str(text);
      }
    }
    out
  }

  // -- Mutation --

  /// Create a detached element; attach it with `append_child`.
  pub fn create_element(&mut self, tag: &str, class: Option<&str>) -> NodeId {
    let attrs = match class {
      Some(class) if !class.is_empty() => format!(r#" class="{class}""#),
      _ => String::new(),
    };
    self.alloc(NodeKind::Element { tag: tag.to_string(), attrs, self_closing: false })
  }

  pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
    self.attach(Some(parent), child);
  }

  /// Replace an element's content with a single text node.
  pub fn set_element_text(&mut self, id: NodeId, text: &str) {
    self.nodes[id.0].children.clear();
    let child = self.alloc(NodeKind::Text(text.to_string()));
    self.attach(Some(id), child);
  }

  /// Replace an element's content with a parsed HTML fragment.
  pub fn set_inner_html(&mut self, id: NodeId, html: &str) {
    self.nodes[id.0].children.clear();
    parse_into(self, Some(id), html);
  }

  /// Append a parsed HTML fragment to an element's content.
  pub fn append_html(&mut self, id: NodeId, html: &str) {
    parse_into(self, Some(id), html);
  }

  // -- Serialization --

  pub fn to_html(&self) -> String {
    let mut out = String::new();
    for &root in &self.roots {
      self.write_node(root, &mut out);
    }
    out
  }

  pub fn serialize_node(&self, id: NodeId) -> String {
    let mut out = String::new();
    self.write_node(id, &mut out);
    out
  }

  fn write_node(&self, id: NodeId, out: &mut String) {
    match &self.nodes[id.0].kind {
      NodeKind::Element { tag, attrs, self_closing } => {
        out.push('<');
        out.push_str(tag);
        out.push_str(attrs);
        if *self_closing {
          out.push_str("/>");
          return;
        }
        out.push('>');
        if is_void_element(tag) {
          return;
        }
        for &child in &self.nodes[id.0].children {
          self.write_node(child, out);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
      }
      NodeKind::Text(text) => out.push_str(text),
      NodeKind::Comment(content) => {
        out.push_str("<!--");
        out.push_str(content);
        out.push_str("-->");
      }
      NodeKind::Directive(content) => {
        out.push('<');
        out.push_str(content);
        out.push('>');
      }
    }
  }
}
