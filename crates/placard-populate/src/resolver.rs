/* crates/placard-populate/src/resolver.rs */

use placard_data::lookup;
use placard_dom::Document;
use regex::{NoExpand, Regex};
use serde_json::Value;

use crate::vocabulary::PlaceholderMap;

/// Outcome of a population pass.
#[derive(Debug, Default)]
pub struct PopulateReport {
  pub substitutions: usize,
  pub diagnostics: Vec<String>,
}

impl PopulateReport {
  pub fn merge(&mut self, other: Self) {
    self.substitutions += other.substitutions;
    self.diagnostics.extend(other.diagnostics);
  }
}

/// Replace every mapped token across the document's text corpus.
///
/// The corpus is walked once, eagerly; a replacement value that itself
/// contains token-like bracket syntax is not re-resolved within the pass.
/// Tokens whose path resolves to nothing stay visible in the text; an
/// unresolved placeholder is preferable to a silently blank page.
pub fn populate(doc: &mut Document, map: &PlaceholderMap, data: &Value) -> PopulateReport {
  let mut report = PopulateReport::default();

  // Token text is matched literally: escape before compiling.
  let compiled: Vec<(&str, &str, Regex)> = map
    .entries()
    .filter_map(|(token, path)| Regex::new(&regex::escape(token)).ok().map(|re| (token, path, re)))
    .collect();

  for node in doc.text_nodes() {
    let Some(current) = doc.text(node) else {
      continue;
    };
    let mut content = current.to_string();
    let mut changed = false;

    for (token, path, re) in &compiled {
      if !content.contains(token) {
        continue;
      }
      let value = lookup(data, path);
      if value.is_empty() {
        continue;
      }
      report.substitutions += re.find_iter(&content).count();
      content = re.replace_all(&content, NoExpand(&value)).into_owned();
      changed = true;
    }

    if changed {
      doc.set_text(node, &content);
    }
  }

  report
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn leadership_data() -> Value {
    json!({
      "executiveLeadership": {
        "mayorName": "Jane Doe",
        "cityClerkName": ""
      },
      "cityStatistics": { "population": 197238 }
    })
  }

  fn map() -> PlaceholderMap {
    let mut map = PlaceholderMap::new();
    map.insert("[Mayor Name]", "executiveLeadership.mayorName");
    map.insert("[City Clerk Name]", "executiveLeadership.cityClerkName");
    map.insert("[City Population]", "cityStatistics.population");
    map
  }

  #[test]
  fn replaces_token_in_text_node() {
    let mut doc = Document::parse("<p>Contact [Mayor Name] for details.</p>");
    let report = populate(&mut doc, &map(), &leadership_data());
    assert_eq!(doc.to_html(), "<p>Contact Jane Doe for details.</p>");
    assert_eq!(report.substitutions, 1);
  }

  #[test]
  fn replaces_every_occurrence_in_one_node() {
    let mut doc = Document::parse("<p>[Mayor Name], yes [Mayor Name]!</p>");
    let report = populate(&mut doc, &map(), &leadership_data());
    assert_eq!(doc.to_html(), "<p>Jane Doe, yes Jane Doe!</p>");
    assert_eq!(report.substitutions, 2);
  }

  #[test]
  fn replaces_across_multiple_nodes() {
    let mut doc =
      Document::parse("<div><p>[Mayor Name]</p><span>Mayor [Mayor Name] here</span></div>");
    let report = populate(&mut doc, &map(), &leadership_data());
    assert_eq!(doc.to_html(), "<div><p>Jane Doe</p><span>Mayor Jane Doe here</span></div>");
    assert_eq!(report.substitutions, 2);
  }

  #[test]
  fn empty_value_leaves_token_visible() {
    let mut doc = Document::parse("<p>Clerk: [City Clerk Name]</p>");
    let report = populate(&mut doc, &map(), &leadership_data());
    assert_eq!(doc.to_html(), "<p>Clerk: [City Clerk Name]</p>");
    assert_eq!(report.substitutions, 0);
  }

  #[test]
  fn absent_path_leaves_text_byte_identical() {
    let source = "<p>Chief: [Police Chief Name]</p>";
    let mut doc = Document::parse(source);
    let mut vocab = map();
    vocab.insert("[Police Chief Name]", "departmentHeads.policeChiefName");
    populate(&mut doc, &vocab, &leadership_data());
    assert_eq!(doc.to_html(), source);
  }

  #[test]
  fn unrelated_text_is_untouched() {
    let mut doc = Document::parse("<p>Plain paragraph [not a token].</p>");
    populate(&mut doc, &map(), &leadership_data());
    assert_eq!(doc.to_html(), "<p>Plain paragraph [not a token].</p>");
  }

  #[test]
  fn bracket_characters_match_literally() {
    // Brackets are regex character-class syntax; the pass must escape them
    let mut doc = Document::parse("<p>M or N: [Mayor Name]</p>");
    populate(&mut doc, &map(), &leadership_data());
    assert_eq!(doc.to_html(), "<p>M or N: Jane Doe</p>");
  }

  #[test]
  fn numeric_value_substitutes_as_display_form() {
    let mut doc = Document::parse("<p>Population: [City Population]</p>");
    populate(&mut doc, &map(), &leadership_data());
    assert_eq!(doc.to_html(), "<p>Population: 197238</p>");
  }

  #[test]
  fn replacement_value_is_not_re_resolved() {
    let data = json!({"executiveLeadership": {"mayorName": "[City Population]"}});
    let mut doc = Document::parse("<p>[Mayor Name]</p>");
    populate(&mut doc, &map(), &data);
    // Single pass: the injected bracket text stays as-is
    assert_eq!(doc.to_html(), "<p>[City Population]</p>");
  }

  #[test]
  fn dollar_signs_in_values_are_literal() {
    let data = json!({"executiveLeadership": {"mayorName": "$1,000 Doe"}});
    let mut doc = Document::parse("<p>[Mayor Name]</p>");
    populate(&mut doc, &map(), &data);
    assert_eq!(doc.to_html(), "<p>$1,000 Doe</p>");
  }

  #[test]
  fn token_split_across_nodes_does_not_match() {
    let mut doc = Document::parse("<p>[Mayor <b>Name]</b></p>");
    let report = populate(&mut doc, &map(), &leadership_data());
    assert_eq!(report.substitutions, 0);
    assert_eq!(doc.to_html(), "<p>[Mayor <b>Name]</b></p>");
  }

  #[test]
  fn full_vocabulary_pass_counts() {
    let mut doc = Document::parse(concat!(
      "<div><h4>[Mayor Name]</h4>",
      "<p>Call [City Hall Phone Number] or [City Phone Number]</p></div>",
    ));
    let data = json!({
      "executiveLeadership": {"mayorName": "Jane Doe"},
      "cityContact": {"cityHallMainPhone": "(913) 895-6000"}
    });
    let report = populate(&mut doc, &PlaceholderMap::local_info(), &data);
    assert_eq!(report.substitutions, 3);
    assert_eq!(
      doc.to_html(),
      concat!(
        "<div><h4>Jane Doe</h4>",
        "<p>Call (913) 895-6000 or (913) 895-6000</p></div>",
      )
    );
  }

  #[test]
  fn report_merge_accumulates() {
    let mut a = PopulateReport { substitutions: 2, diagnostics: vec!["x".to_string()] };
    let b = PopulateReport { substitutions: 3, diagnostics: vec!["y".to_string()] };
    a.merge(b);
    assert_eq!(a.substitutions, 5);
    assert_eq!(a.diagnostics, ["x", "y"]);
  }
}
