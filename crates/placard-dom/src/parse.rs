/* crates/placard-dom/src/parse.rs */

use crate::document::Document;
use crate::node::{NodeId, NodeKind, is_raw_text_element, is_void_element};

/// Parse `html` and attach the resulting nodes under `parent`
/// (top level when `None`).
pub(crate) fn parse_into(doc: &mut Document, parent: Option<NodeId>, html: &str) {
  let mut pos = 0;
  parse_nodes(doc, parent, None, html, &mut pos);
}

fn parse_nodes(
  doc: &mut Document,
  parent: Option<NodeId>,
  parent_tag: Option<&str>,
  html: &str,
  pos: &mut usize,
) {
  let bytes = html.as_bytes();
  while *pos < bytes.len() {
    if bytes[*pos] == b'<' {
      // Closing tag
      if *pos + 1 < bytes.len() && bytes[*pos + 1] == b'/' {
        if let Some(tag) = parent_tag {
          // Verify this is actually closing our parent
          let expected = format!("</{tag}>");
          if html[*pos..].starts_with(&expected) {
            *pos += expected.len();
            return;
          }
        }
        // Unexpected closing tag: consume it and hand control back up
        while *pos < bytes.len() && bytes[*pos] != b'>' {
          *pos += 1;
        }
        if *pos < bytes.len() {
          *pos += 1;
        }
        return;
      }

      if html[*pos..].starts_with("<!--") {
        parse_comment(doc, parent, html, pos);
        continue;
      }

      // <!DOCTYPE ...> and other markup declarations
      if *pos + 1 < bytes.len() && bytes[*pos + 1] == b'!' {
        parse_directive(doc, parent, html, pos);
        continue;
      }

      parse_element(doc, parent, html, pos);
    } else {
      // Text node
      let start = *pos;
      while *pos < bytes.len() && bytes[*pos] != b'<' {
        *pos += 1;
      }
      let text = &html[start..*pos];
      if !text.is_empty() {
        let id = doc.alloc(NodeKind::Text(text.to_string()));
        doc.attach(parent, id);
      }
    }
  }
}

fn parse_comment(doc: &mut Document, parent: Option<NodeId>, html: &str, pos: &mut usize) {
  let bytes = html.as_bytes();
  // Skip "<!--"
  *pos += 4;
  let start = *pos;
  while *pos + 2 < bytes.len() {
    if bytes[*pos] == b'-' && bytes[*pos + 1] == b'-' && bytes[*pos + 2] == b'>' {
      let id = doc.alloc(NodeKind::Comment(html[start..*pos].to_string()));
      doc.attach(parent, id);
      *pos += 3;
      return;
    }
    *pos += 1;
  }
  // Unterminated comment: consume the rest
  let id = doc.alloc(NodeKind::Comment(html[start..].to_string()));
  doc.attach(parent, id);
  *pos = bytes.len();
}

fn parse_directive(doc: &mut Document, parent: Option<NodeId>, html: &str, pos: &mut usize) {
  let bytes = html.as_bytes();
  // Skip "<"
  *pos += 1;
  let start = *pos;
  while *pos < bytes.len() && bytes[*pos] != b'>' {
    *pos += 1;
  }
  let id = doc.alloc(NodeKind::Directive(html[start..*pos].to_string()));
  doc.attach(parent, id);
  if *pos < bytes.len() {
    *pos += 1;
  }
}

fn parse_element(doc: &mut Document, parent: Option<NodeId>, html: &str, pos: &mut usize) {
  let bytes = html.as_bytes();
  // Skip '<'
  *pos += 1;
  let tag_start = *pos;

  while *pos < bytes.len()
    && !bytes[*pos].is_ascii_whitespace()
    && bytes[*pos] != b'>'
    && bytes[*pos] != b'/'
  {
    *pos += 1;
  }
  let tag = html[tag_start..*pos].to_string();

  // Read attrs: everything until an unquoted '>' or '/>'
  let attrs_start = *pos;
  let mut in_quote: Option<u8> = None;
  while *pos < bytes.len() {
    match in_quote {
      Some(q) => {
        if bytes[*pos] == q {
          in_quote = None;
        }
        *pos += 1;
      }
      None => {
        if bytes[*pos] == b'"' || bytes[*pos] == b'\'' {
          in_quote = Some(bytes[*pos]);
          *pos += 1;
        } else if bytes[*pos] == b'/' && *pos + 1 < bytes.len() && bytes[*pos + 1] == b'>' {
          let attrs = html[attrs_start..*pos].to_string();
          *pos += 2;
          let id = doc.alloc(NodeKind::Element { tag, attrs, self_closing: true });
          doc.attach(parent, id);
          return;
        } else if bytes[*pos] == b'>' {
          let attrs = html[attrs_start..*pos].to_string();
          *pos += 1;
          let id = doc.alloc(NodeKind::Element { tag: tag.clone(), attrs, self_closing: false });
          doc.attach(parent, id);
          if is_void_element(&tag) {
            return;
          }
          if is_raw_text_element(&tag) {
            parse_raw_text(doc, id, &tag, html, pos);
            return;
          }
          parse_nodes(doc, Some(id), Some(tag.as_str()), html, pos);
          return;
        } else {
          *pos += 1;
        }
      }
    }
  }

  // Unterminated tag
  let attrs = html[attrs_start..].to_string();
  *pos = bytes.len();
  let id = doc.alloc(NodeKind::Element { tag, attrs, self_closing: false });
  doc.attach(parent, id);
}

/// Script and style content runs verbatim to the matching close tag.
fn parse_raw_text(doc: &mut Document, element: NodeId, tag: &str, html: &str, pos: &mut usize) {
  let close = format!("</{tag}>");
  let (content, consumed) = match html[*pos..].find(&close) {
    Some(rel) => (&html[*pos..*pos + rel], rel + close.len()),
    None => (&html[*pos..], html.len() - *pos),
  };
  if !content.is_empty() {
    let id = doc.alloc(NodeKind::Text(content.to_string()));
    doc.attach(Some(element), id);
  }
  *pos += consumed;
}
