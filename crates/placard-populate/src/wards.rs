/* crates/placard-populate/src/wards.rs */

//! The ward representative phone numbers use one generic token repeated
//! inside each ward's card, so path lookup cannot tell them apart. This
//! pass matches them by position instead: within each ward section, the
//! first phone placeholder belongs to council member A, the second to
//! council member B.

use placard_data::{lookup, resolve_path};
use placard_dom::{Document, NodeId};
use serde_json::Value;

use crate::resolver::PopulateReport;

const WARD_COUNT: usize = 6;
const PHONE_TOKEN: &str = "[Phone Number]";
// Ward cards have no stable id; the section is the nearest ancestor card
// around the ward's heading.
const SECTION_HEADING_TAG: &str = "h5";
const SECTION_CONTAINER_CLASS: &str = "bg-neutral-50";

/// Fill the generic phone placeholders in every ward section. A section
/// whose structure or data does not line up is skipped with a diagnostic;
/// nothing in this pass is allowed to fail the page.
pub fn populate_ward_phones(doc: &mut Document, data: &Value) -> PopulateReport {
  let mut report = PopulateReport::default();

  for ward in 1..=WARD_COUNT {
    let label = format!("Ward {ward}");

    let heading = doc
      .elements_by_tag(SECTION_HEADING_TAG)
      .into_iter()
      .find(|&heading| doc.element_text(heading).contains(&label));
    let Some(heading) = heading else {
      report.diagnostics.push(format!("{label}: section heading not found"));
      continue;
    };

    let Some(container) = doc.closest_with_class(heading, SECTION_CONTAINER_CLASS) else {
      report.diagnostics.push(format!("{label}: heading has no enclosing section container"));
      continue;
    };

    let phone_elements: Vec<NodeId> = doc
      .elements_by_tag_under(container, "p")
      .into_iter()
      .filter(|&p| doc.element_text(p).contains(PHONE_TOKEN))
      .collect();

    let Some(ward_data) = resolve_path(data, &format!("wardRepresentatives.ward{ward}")) else {
      report.diagnostics.push(format!("{label}: no ward data"));
      continue;
    };

    if phone_elements.len() < 2 {
      report.diagnostics.push(format!(
        "{label}: expected 2 phone placeholders, found {}",
        phone_elements.len()
      ));
      continue;
    }

    // Ordinal assignment: first placeholder is member A, second is member B
    let phones =
      [lookup(ward_data, "councilMemberA.phone"), lookup(ward_data, "councilMemberB.phone")];
    for (&element, phone) in phone_elements.iter().zip(&phones) {
      if phone.is_empty() {
        continue;
      }
      let text = doc.element_text(element).replacen(PHONE_TOKEN, phone, 1);
      doc.set_element_text(element, &text);
      report.substitutions += 1;
    }
  }

  report
}
