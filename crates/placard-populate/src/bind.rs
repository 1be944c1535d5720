/* crates/placard-populate/src/bind.rs */

use placard_data::{DataStore, DocumentFetcher};
use placard_dom::{Document, NodeId};

use crate::resolver::PopulateReport;

/// Attribute whose value is a qualified `<document>.<path>` address.
pub const BINDING_ATTR: &str = "data-site-value";

/// Text shown in a constructed element until (or unless) its data resolves.
pub const MISSING_DATA_FALLBACK: &str = "[Data Not Available]";

/// Write resolved data into every element tagged with the binding
/// attribute. Empty resolution keeps the element's authored placeholder
/// text, so a missing field degrades to whatever the page already said.
pub async fn bind_attributes<F: DocumentFetcher>(
  doc: &mut Document,
  store: &mut DataStore<F>,
) -> PopulateReport {
  let mut report = PopulateReport::default();

  for element in doc.elements_with_attr(BINDING_ATTR) {
    let Some(qualified) = doc.attr(element, BINDING_ATTR) else {
      continue;
    };
    let value = store.resolve(&qualified).await;
    if value.is_empty() {
      continue;
    }
    doc.set_element_text(element, &value);
    report.substitutions += 1;
  }

  report
}

/// Build a new element whose text is the resolved value of `qualified`.
/// The element carries the fallback text until resolution settles and keeps
/// it when resolution yields nothing. The caller attaches the returned node.
pub async fn create_bound_element<F: DocumentFetcher>(
  doc: &mut Document,
  store: &mut DataStore<F>,
  qualified: &str,
  tag: &str,
  class: Option<&str>,
) -> NodeId {
  let element = doc.create_element(tag, class);
  doc.set_element_text(element, MISSING_DATA_FALLBACK);

  let value = store.resolve(qualified).await;
  if !value.is_empty() {
    doc.set_element_text(element, &value);
  }

  element
}

#[cfg(test)]
mod tests {
  use super::*;
  use placard_data::FetchError;
  use std::collections::HashMap;

  struct StaticFetcher {
    bodies: HashMap<String, String>,
  }

  impl StaticFetcher {
    fn new(entries: &[(&str, &str)]) -> Self {
      Self { bodies: entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect() }
    }
  }

  impl DocumentFetcher for StaticFetcher {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
      self.bodies.get(location).cloned().ok_or(FetchError::Status(500))
    }
  }

  fn store_with_local_info() -> DataStore<StaticFetcher> {
    DataStore::new(StaticFetcher::new(&[(
      "data/localinfo-data.json",
      r#"{"cityContact": {"cityHallMainPhone": "(913) 895-6000"}}"#,
    )]))
  }

  #[tokio::test]
  async fn binds_resolved_value_into_element() {
    let mut doc = Document::parse(
      r#"<span data-site-value="localInfo.cityContact.cityHallMainPhone">call us</span>"#,
    );
    let mut store = store_with_local_info();
    let report = bind_attributes(&mut doc, &mut store).await;
    assert_eq!(
      doc.to_html(),
      r#"<span data-site-value="localInfo.cityContact.cityHallMainPhone">(913) 895-6000</span>"#
    );
    assert_eq!(report.substitutions, 1);
  }

  #[tokio::test]
  async fn empty_resolution_keeps_authored_text() {
    let mut doc =
      Document::parse(r#"<span data-site-value="localInfo.cityContact.fax">no fax listed</span>"#);
    let mut store = store_with_local_info();
    let report = bind_attributes(&mut doc, &mut store).await;
    assert!(doc.to_html().contains("no fax listed"));
    assert_eq!(report.substitutions, 0);
  }

  #[tokio::test]
  async fn load_failure_keeps_page_unchanged() {
    let source = r#"<span data-site-value="organization.board.chair">chair</span>"#;
    let mut doc = Document::parse(source);
    let mut store = DataStore::new(StaticFetcher::new(&[]));
    bind_attributes(&mut doc, &mut store).await;
    assert_eq!(doc.to_html(), source);
    assert!(!store.diagnostics().is_empty(), "the failed load must be recorded");
  }

  #[tokio::test]
  async fn constructed_element_resolves() {
    let mut doc = Document::parse("<div></div>");
    let mut store = store_with_local_info();
    let span = create_bound_element(
      &mut doc,
      &mut store,
      "localInfo.cityContact.cityHallMainPhone",
      "span",
      Some("phone"),
    )
    .await;
    let root = doc.roots()[0];
    doc.append_child(root, span);
    assert_eq!(doc.to_html(), r#"<div><span class="phone">(913) 895-6000</span></div>"#);
  }

  #[tokio::test]
  async fn constructed_element_keeps_fallback_on_miss() {
    let mut doc = Document::parse("<div></div>");
    let mut store = DataStore::new(StaticFetcher::new(&[]));
    let span =
      create_bound_element(&mut doc, &mut store, "localInfo.missing.field", "span", None).await;
    let root = doc.roots()[0];
    doc.append_child(root, span);
    assert_eq!(doc.to_html(), "<div><span>[Data Not Available]</span></div>");
  }
}
