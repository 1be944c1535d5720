/* crates/placard-data/src/path.rs */

use serde_json::Value;

/// Resolve a dotted path against a data document. Segments index mappings by
/// key and sequences by non-negative integer. Absent at any step (including
/// descending into a scalar) yields `None`.
pub fn resolve_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
  let mut current = data;
  for segment in path.split('.') {
    current = match current {
      Value::Object(map) => map.get(segment)?,
      Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
      _ => return None,
    };
  }
  Some(current)
}

/// Total lookup with the empty-string sentinel policy: absent paths, nulls,
/// and container values render as `""`, scalars as their display form.
pub fn lookup(data: &Value, path: &str) -> String {
  match resolve_path(data, path) {
    Some(value) => stringify(value),
    None => String::new(),
  }
}

fn stringify(value: &Value) -> String {
  match value {
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
  }
}

/// A `<document>.<dotted path>` address across named data documents,
/// split on the first delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedPath<'a> {
  pub document: &'a str,
  pub path: &'a str,
}

impl<'a> QualifiedPath<'a> {
  pub fn parse(raw: &'a str) -> Option<Self> {
    let (document, path) = raw.split_once('.')?;
    if document.is_empty() || path.is_empty() {
      return None;
    }
    Some(Self { document, path })
  }
}
