/* crates/placard-components/src/chrome.rs */

use placard_dom::Document;

use crate::banner::generate_notice_banner;
use crate::modal::{
  PRIVACY_MODAL_ID, RESEARCH_MODAL_ID, attach_modal, privacy_policy_modal, research_preview_modal,
};
use crate::nav::{generate_mobile_navigation, generate_navigation, generate_sticky_header};
use crate::pages::{base_path, current_page};

const HEADER_CONTAINER: &str = "header-placeholder";
const FOOTER_CONTAINER: &str = "footer-placeholder";
const BANNER_CONTAINER: &str = "wip-banner-placeholder";
const DESKTOP_NAV_CONTAINER: &str = "desktop-nav-placeholder";
const MOBILE_NAV_CONTAINER: &str = "mobile-nav-placeholder";

struct SocialLink {
  href: &'static str,
  label: &'static str,
  icon_path: &'static str,
}

const SOCIAL_LINKS: &[SocialLink] = &[
  SocialLink {
    href: "https://x.com/VoiceOf_OP",
    label: "Follow us on X (Twitter)",
    icon_path: "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z",
  },
  SocialLink {
    href: "https://www.facebook.com/profile.php?id=61578842542286",
    label: "Follow us on Facebook",
    icon_path: "M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z",
  },
  SocialLink {
    href: "#",
    label: "Join our Discord",
    icon_path: "M20.317 4.3698a19.7913 19.7913 0 00-4.8851-1.5152.0741.0741 0 00-.0785.0371c-.211.3753-.4447.8648-.6083 1.2495-1.8447-.2762-3.68-.2762-5.4868 0-.1636-.3933-.4058-.8742-.6177-1.2495a.077.077 0 00-.0785-.037 19.7363 19.7363 0 00-4.8852 1.515.0699.0699 0 00-.0321.0277C.5334 9.0458-.319 13.5799.0992 18.0578a.0824.0824 0 00.0312.0561c2.0528 1.5076 4.0413 2.4228 5.9929 3.0294a.0777.0777 0 00.0842-.0276c.4616-.6304.8731-1.2952 1.226-1.9942a.076.076 0 00-.0416-.1057c-.6528-.2476-1.2743-.5495-1.8722-.8923a.077.077 0 01-.0076-.1277c.1258-.0943.2517-.1923.3718-.2914a.0743.0743 0 01.0776-.0105c3.9278 1.7933 8.18 1.7933 12.0614 0a.0739.0739 0 01.0785.0095c.1202.099.246.1981.3728.2924a.077.077 0 01-.0066.1276 12.2986 12.2986 0 01-1.873.8914.0766.0766 0 00-.0407.1067c.3604.698.7719 1.3628 1.225 1.9932a.076.076 0 00.0842.0286c1.961-.6067 3.9495-1.5219 6.0023-3.0294a.077.077 0 00.0313-.0552c.5004-5.177-.8382-9.6739-3.5485-13.6604a.061.061 0 00-.0312-.0286z",
  },
  SocialLink {
    href: "#",
    label: "Join our Reddit community",
    icon_path: "M12 0A12 12 0 0 0 0 12a12 12 0 0 0 12 12 12 12 0 0 0 12-12A12 12 0 0 0 12 0zm5.01 4.744c.688 0 1.25.561 1.25 1.249a1.25 1.25 0 0 1-2.498.056l-2.597-.547-.8 3.747c1.824.07 3.48.632 4.674 1.488.308-.309.73-.491 1.207-.491.968 0 1.754.786 1.754 1.754 0 .716-.435 1.333-1.01 1.614a3.111 3.111 0 0 1 .042.52c0 2.694-3.13 4.87-7.004 4.87-3.874 0-7.004-2.176-7.004-4.87 0-.183.015-.366.043-.534A1.748 1.748 0 0 1 4.028 12c0-.968.786-1.754 1.754-1.754.463 0 .898.196 1.207.49 1.207-.883 2.878-1.43 4.744-1.487l.885-4.182a.342.342 0 0 1 .14-.197.35.35 0 0 1 .238-.042l2.906.617a1.214 1.214 0 0 1 1.108-.701z",
  },
  SocialLink {
    href: "#",
    label: "Subscribe to our YouTube channel",
    icon_path: "M23.498 6.186a3.016 3.016 0 0 0-2.122-2.136C19.505 3.545 12 3.545 12 3.545s-7.505 0-9.377.505A3.017 3.017 0 0 0 .502 6.186C0 8.07 0 12 0 12s0 3.93.502 5.814a3.016 3.016 0 0 0 2.122 2.136c1.871.505 9.376.505 9.376.505s7.505 0 9.377-.505a3.015 3.015 0 0 0 2.122-2.136C24 15.93 24 12 24 12s0-3.93-.502-5.814zM9.545 15.568V8.432L15.818 12l-6.273 3.568z",
  },
];

fn social_markup() -> String {
  SOCIAL_LINKS
    .iter()
    .map(|link| {
      format!(
        concat!(
          r#"<a href="{href}" target="_blank" rel="noopener noreferrer" "#,
          r#"class="text-neutral-500 hover:text-brand-light-green transition-colors" "#,
          r#"aria-label="{label}">"#,
          r#"<svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24">"#,
          r#"<path d="{path}"/></svg></a>"#,
        ),
        href = link.href,
        label = link.label,
        path = link.icon_path,
      )
    })
    .collect::<Vec<_>>()
    .join("\n                        ")
}

/// Site footer for the page at `path`.
pub fn generate_footer(path: &str) -> String {
  let base = base_path(path);
  let social = social_markup();
  format!(
    r##"
    <footer class="bg-brand-gray py-8">
        <div class="container mx-auto px-6 text-center text-neutral-600">
            <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                 <div class="flex items-center space-x-2">
                    <img src="{base}assets/images/logos/OPVoiceLogoCROP_v-1.14.png" alt="Overland Park Voice Logo" class="w-6 h-6">
                    <span class="font-bold text-brand-dark-green">OPVOICE.ORG</span>
                </div>
                <div class="flex flex-col items-center space-y-2">
                    <p>&copy; 2025 Overland Park Voice. All Rights Reserved.</p>
                    <div class="flex justify-center space-x-4">
                        {social}
                    </div>
                </div>
                 <div class="flex justify-center space-x-4">
                    <a href="#" id="privacy-policy-link" class="text-neutral-500 hover:text-brand-light-green">Privacy Policy</a>
                    <a href="{base}index.html#get-involved" class="text-neutral-500 hover:text-brand-light-green">Contact Us</a>
                </div>
            </div>
        </div>
    </footer>
"##
  )
}

/// Which chrome pieces were injected into a page.
#[derive(Debug, Default)]
pub struct ChromeReport {
  pub header: bool,
  pub footer: bool,
  pub banner: bool,
  pub privacy_modal: bool,
  pub research_modal: bool,
}

/// Pages that link to the housing research get its preview modal, matching
/// the trigger patterns the page scripts listen for.
fn wants_research_modal(doc: &Document) -> bool {
  doc
    .elements_with_attr("href")
    .into_iter()
    .any(|id| doc.attr(id, "href").is_some_and(|href| href.contains("housing")))
    || doc
      .elements_with_attr("data-modal")
      .into_iter()
      .any(|id| doc.attr(id, "data-modal").as_deref() == Some("housing"))
}

/// Fill the page's placeholder containers with the shared chrome. A page
/// that lacks a container simply does not receive that piece; pages outside
/// the site shell (research prints, mail templates) pass through untouched.
pub fn inject_chrome(doc: &mut Document, path: &str) -> ChromeReport {
  let mut report = ChromeReport::default();

  if let Some(container) = doc.element_by_id(HEADER_CONTAINER) {
    doc.set_inner_html(container, &generate_sticky_header(path));
    if let Some(desktop) = doc.element_by_id(DESKTOP_NAV_CONTAINER) {
      doc.set_inner_html(desktop, &generate_navigation(path));
    }
    if let Some(mobile) = doc.element_by_id(MOBILE_NAV_CONTAINER) {
      doc.set_inner_html(mobile, &generate_mobile_navigation(path));
    }
    report.header = true;
  }

  if let Some(container) = doc.element_by_id(FOOTER_CONTAINER) {
    doc.set_inner_html(container, &generate_footer(path));
    // The footer's privacy link needs its overlay on the same page
    report.privacy_modal = attach_modal(doc, PRIVACY_MODAL_ID, &privacy_policy_modal());
    report.footer = true;
  }

  if let Some(container) = doc.element_by_id(BANNER_CONTAINER) {
    let banner = generate_notice_banner(current_page(path));
    if !banner.is_empty() {
      doc.set_inner_html(container, &banner);
      report.banner = true;
    }
  }

  if wants_research_modal(doc) {
    report.research_modal = attach_modal(doc, RESEARCH_MODAL_ID, &research_preview_modal());
  }

  report
}

#[cfg(test)]
mod tests {
  use super::*;

  fn shell() -> &'static str {
    concat!(
      r#"<body><div id="header-placeholder"></div>"#,
      "<main><p>content</p></main>",
      r#"<div id="wip-banner-placeholder"></div>"#,
      r#"<div id="footer-placeholder"></div></body>"#,
    )
  }

  #[test]
  fn injects_header_nav_footer_and_banner() {
    let mut doc = Document::parse(shell());
    let report = inject_chrome(&mut doc, "/mission.html");
    assert!(report.header && report.footer && report.banner && report.privacy_modal);

    let html = doc.to_html();
    assert!(html.contains("sticky-header"));
    assert!(html.contains("OPVOICE.ORG"));
    assert!(html.contains("Mission Content: Being Expanded"));
    assert!(html.contains(r#"id="privacy-policy-modal""#));
    // Nav landed inside the header's own placeholder
    assert!(html.contains(">Home<"));
    assert!(!html.contains(">Our Mission<"));
  }

  #[test]
  fn research_modal_attaches_when_page_links_to_it() {
    let mut doc = Document::parse(concat!(
      r#"<body><a href="research/housing-advisory-commission.html">research</a>"#,
      "</body>",
    ));
    let report = inject_chrome(&mut doc, "/index.html");
    assert!(report.research_modal);
    assert!(doc.to_html().contains(r#"id="housing-advisory-modal""#));
  }

  #[test]
  fn research_modal_skipped_without_trigger() {
    let mut doc = Document::parse("<body><p>plain</p></body>");
    let report = inject_chrome(&mut doc, "/index.html");
    assert!(!report.research_modal);
  }

  #[test]
  fn page_without_containers_is_untouched() {
    let source = "<body><main><p>standalone</p></main></body>";
    let mut doc = Document::parse(source);
    let report = inject_chrome(&mut doc, "/print.html");
    assert!(!report.header && !report.footer && !report.banner);
    assert_eq!(doc.to_html(), source);
  }

  #[test]
  fn banner_container_stays_empty_for_unknown_page() {
    let mut doc = Document::parse(r#"<body><div id="wip-banner-placeholder"></div></body>"#);
    let report = inject_chrome(&mut doc, "/research/housing.html");
    assert!(!report.banner);
    assert_eq!(doc.to_html(), r#"<body><div id="wip-banner-placeholder"></div></body>"#);
  }

  #[test]
  fn footer_social_links_present() {
    let footer = generate_footer("/index.html");
    assert!(footer.contains("https://x.com/VoiceOf_OP"));
    assert!(footer.contains("Follow us on Facebook"));
    assert!(footer.contains(r#"id="privacy-policy-link""#));
  }

  #[test]
  fn footer_respects_base_path() {
    let footer = generate_footer("/research/housing.html");
    assert!(footer.contains(r#"href="../index.html#get-involved""#));
  }
}
