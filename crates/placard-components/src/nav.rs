/* crates/placard-components/src/nav.rs */

use crate::pages::{SITE_PAGES, base_path, current_page, in_research_section};

const DESKTOP_LINK_CLASS: &str = "nav-item text-neutral-600 hover:text-brand-light-green \
                                  transition-colors font-medium whitespace-nowrap";
const MOBILE_LINK_CLASS: &str = "block py-2 px-4 text-neutral-700 hover:text-brand-light-green \
                                 hover:bg-brand-light-green/5 font-medium rounded-lg \
                                 transition-colors";

/// Whether a page's nav link should appear on the page at `path`.
/// The current page drops its own link; the home link stays visible from
/// the research section even though the filenames differ.
fn link_visible(file: &str, path: &str) -> bool {
  let current = current_page(path);
  if file == "index.html" {
    return current != "index.html" || in_research_section(path);
  }
  current != file
}

fn link_items(path: &str, class: &str) -> Vec<String> {
  let base = base_path(path);
  SITE_PAGES
    .iter()
    .filter(|page| link_visible(page.file, path))
    .map(|page| {
      format!(r#"<a href="{base}{}" class="{class}">{}</a>"#, page.file, page.label)
    })
    .collect()
}

/// Desktop navigation bar for the page at `path`.
pub fn generate_navigation(path: &str) -> String {
  let base = base_path(path);
  let items = link_items(path, DESKTOP_LINK_CLASS).join("\n                    ");
  format!(
    r#"
                <nav class="hidden md:flex items-center space-x-4 lg:space-x-6 flex-nowrap">
                    {items}
                    <div class="w-px h-5 bg-neutral-300 mx-2 flex-shrink-0"></div>
                    <a href="{base}index.html#get-involved" class="cta-button text-white px-4 py-2 rounded-full font-semibold transition-all text-sm whitespace-nowrap flex-shrink-0">Join Us</a>
                </nav>"#
  )
}

/// Mobile navigation panel for the page at `path`.
pub fn generate_mobile_navigation(path: &str) -> String {
  let base = base_path(path);
  let items = link_items(path, MOBILE_LINK_CLASS).join("\n                ");
  format!(
    r#"
            <div class="px-6 py-4 space-y-1">
                {items}
                <div class="pt-2 mt-2 border-t border-neutral-100">
                    <a href="{base}index.html#get-involved" class="block cta-button text-white text-center px-5 py-2 rounded-lg font-semibold text-sm">Join Us</a>
                </div>
            </div>"#
  )
}

/// The sticky header shell. Navigation is injected into the placeholder
/// divs afterwards, mirroring how the pages are assembled in order.
pub fn generate_sticky_header(path: &str) -> String {
  let base = base_path(path);
  format!(
    r#"
    <header class="sticky-header fixed top-0 left-0 right-0 z-40 bg-white/95 backdrop-blur-sm border-b border-neutral-200 shadow-sm transition-all duration-300">
        <div class="container mx-auto px-6 py-2">
            <div class="flex items-center justify-between min-w-0">
                <div class="flex items-center space-x-3 flex-shrink-0">
                    <img src="{base}assets/images/logos/OPVoiceLogoCROP_v-1.14.png" alt="Overland Park Voice Logo" class="w-8 h-8">
                    <a href="{base}index.html" class="text-xl font-bold logo-gradient hover:opacity-80 transition-opacity whitespace-nowrap">Overland Park Voice</a>
                </div>
                <div id="desktop-nav-placeholder" class="flex-shrink-0"></div>
                <div class="md:hidden">
                    <button id="sticky-mobile-menu-button" class="text-brand-dark-green focus:outline-none p-2 rounded-lg hover:bg-brand-light-green/10 transition-colors">
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16m-7 6h7"></path>
                        </svg>
                    </button>
                </div>
            </div>
        </div>
        <div id="sticky-mobile-menu" class="hidden md:hidden bg-white shadow-lg border-t border-neutral-200">
            <div id="mobile-nav-placeholder"></div>
        </div>
    </header>
"#
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nav_omits_current_page() {
    let nav = generate_navigation("/mission.html");
    assert!(!nav.contains(">Our Mission<"));
    assert!(nav.contains(">Home<"));
    assert!(nav.contains(">Local Info<"));
  }

  #[test]
  fn index_omits_home_link() {
    let nav = generate_navigation("/index.html");
    assert!(!nav.contains(">Home<"));
    assert!(nav.contains(">Our Mission<"));
  }

  #[test]
  fn research_pages_keep_home_and_prefix_links() {
    let nav = generate_navigation("/research/housing.html");
    assert!(nav.contains(r#"href="../index.html""#));
    assert!(nav.contains(r#"href="../mission.html""#));
    assert!(nav.contains(">Home<"));
  }

  #[test]
  fn nav_always_carries_the_cta() {
    for path in ["/index.html", "/updates.html", "/research/housing.html"] {
      assert!(generate_navigation(path).contains("Join Us"));
      assert!(generate_mobile_navigation(path).contains("Join Us"));
    }
  }

  #[test]
  fn mobile_nav_uses_block_links() {
    let nav = generate_mobile_navigation("/launch.html");
    assert!(nav.contains("block py-2 px-4"));
    assert!(!nav.contains(">Community Launchpad<"));
  }

  #[test]
  fn header_contains_nav_placeholders() {
    let header = generate_sticky_header("/index.html");
    assert!(header.contains(r#"id="desktop-nav-placeholder""#));
    assert!(header.contains(r#"id="mobile-nav-placeholder""#));
    assert!(header.contains(r#"id="sticky-mobile-menu-button""#));
  }

  #[test]
  fn header_logo_respects_base_path() {
    let header = generate_sticky_header("/research/housing.html");
    assert!(header.contains(r#"src="../assets/images/logos"#));
  }
}
