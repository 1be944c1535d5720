/* crates/placard-cli/src/populate.rs */

use std::path::Path;

use anyhow::Result;
use placard_components::{
  base_path, current_page, fallback_head, inject_chrome, populate_head_template,
};
use placard_data::{DataStore, DocumentFetcher, FsFetcher, HttpFetcher};
use placard_dom::Document;
use placard_populate::{
  PlaceholderMap, PopulateReport, bind_attributes, populate, populate_ward_phones,
};
use serde_json::Value;

use crate::config::PlacardConfig;
use crate::site::{discover_pages, read_page, write_page};
use crate::ui;

const HEAD_MARKER_ID: &str = "op-voice-shared-head";

/// Assemble and write every requested page. With `chrome_only`, the data
/// passes are skipped and only the shared chrome is injected.
pub async fn run_populate(
  config: &PlacardConfig,
  base_dir: &Path,
  pages: Vec<String>,
  chrome_only: bool,
) -> Result<()> {
  let site_root = base_dir.join(&config.site.root);
  let pages =
    if pages.is_empty() { discover_pages(&site_root, &config.site.out_dir)? } else { pages };

  ui::banner(if chrome_only { "chrome" } else { "populate" });

  match &config.data.base_url {
    Some(url) => {
      let mut store = DataStore::new(HttpFetcher::new(url.as_str()));
      run_with_store(&mut store, config, base_dir, &site_root, &pages, chrome_only).await
    }
    None => {
      let mut store = DataStore::new(FsFetcher::new(&site_root));
      run_with_store(&mut store, config, base_dir, &site_root, &pages, chrome_only).await
    }
  }
}

async fn run_with_store<F: DocumentFetcher>(
  store: &mut DataStore<F>,
  config: &PlacardConfig,
  base_dir: &Path,
  site_root: &Path,
  pages: &[String],
  chrome_only: bool,
) -> Result<()> {
  for (name, location) in &config.data.sources {
    store.add_source(name.as_str(), location.as_str());
  }

  let map = PlaceholderMap::local_info();
  let out_dir = base_dir.join(&config.site.out_dir);
  let total = pages.len();
  let mut total_substitutions = 0;

  // The local info document drives the token and ward passes; a failed
  // load leaves every placeholder visible rather than aborting the run.
  let data = if chrome_only { None } else { store.load("localInfo").await.cloned() };
  if !chrome_only && data.is_none() {
    ui::warn("local info data unavailable; placeholders will remain visible");
  }

  for (index, page) in pages.iter().enumerate() {
    ui::step(index + 1, total, page);
    let (html, report) =
      assemble_page(site_root, page, config, &map, data.as_ref(), store, chrome_only).await?;
    write_page(&out_dir, page, &html)?;
    total_substitutions += report.substitutions;
    ui::ok(&format!("{page}  {} substitutions", report.substitutions));
    for diagnostic in &report.diagnostics {
      ui::warn(diagnostic);
    }
  }

  for diagnostic in store.take_diagnostics() {
    ui::warn(&diagnostic);
  }

  ui::blank();
  ui::arrow(&format!(
    "wrote {total} pages ({total_substitutions} substitutions) to {}",
    out_dir.display()
  ));
  Ok(())
}

/// One page through the full assembly order: chrome, head, token pass,
/// ward pass, attribute binding.
async fn assemble_page<F: DocumentFetcher>(
  site_root: &Path,
  page: &str,
  config: &PlacardConfig,
  map: &PlaceholderMap,
  data: Option<&Value>,
  store: &mut DataStore<F>,
  chrome_only: bool,
) -> Result<(String, PopulateReport)> {
  let source = read_page(site_root, page)?;
  let mut doc = Document::parse(&source);
  let mut report = PopulateReport::default();

  inject_chrome(&mut doc, page);
  apply_head(&mut doc, site_root, page, config, &mut report);

  if !chrome_only {
    if let Some(data) = data {
      report.merge(populate(&mut doc, map, data));
      report.merge(populate_ward_phones(&mut doc, data));
    }
    report.merge(bind_attributes(&mut doc, store).await);
  }

  Ok((doc.to_html(), report))
}

/// Prepend the populated shared head template (or the fallback head) for
/// pages with configured metadata. A marker element keeps repeated runs
/// over already-assembled output from stacking head content.
fn apply_head(
  doc: &mut Document,
  site_root: &Path,
  page: &str,
  config: &PlacardConfig,
  report: &mut PopulateReport,
) {
  let Some(meta) = config.meta.get(current_page(page)) else {
    return;
  };
  let Some(&head) = doc.elements_by_tag("head").first() else {
    return;
  };
  if doc.element_by_id(HEAD_MARKER_ID).is_some() {
    return;
  }

  let processed = match &config.head.template {
    Some(template_path) => match std::fs::read_to_string(site_root.join(template_path)) {
      Ok(template) => populate_head_template(&template, meta),
      Err(err) => {
        report.diagnostics.push(format!("head template unavailable ({err}); using fallback"));
        fallback_head(meta, base_path(page))
      }
    },
    None => fallback_head(meta, base_path(page)),
  };

  let existing: String =
    doc.children(head).iter().map(|&child| doc.serialize_node(child)).collect();
  let marker = format!(
    r#"<meta id="{HEAD_MARKER_ID}" name="{HEAD_MARKER_ID}-processed" content="true">"#
  );
  doc.set_inner_html(head, &format!("{processed}{existing}{marker}"));
}
