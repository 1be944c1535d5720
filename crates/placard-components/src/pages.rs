/* crates/placard-components/src/pages.rs */

/// A top-level site page as it appears in the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
  pub file: &'static str,
  pub label: &'static str,
}

/// The site's pages, in navigation order.
pub const SITE_PAGES: &[PageLink] = &[
  PageLink { file: "index.html", label: "Home" },
  PageLink { file: "mission.html", label: "Our Mission" },
  PageLink { file: "initiatives.html", label: "Our Initiatives" },
  PageLink { file: "launch.html", label: "Community Launchpad" },
  PageLink { file: "localinfo.html", label: "Local Info" },
  PageLink { file: "updates.html", label: "News" },
];

/// Research pages live one directory down and link back up with `../`.
pub fn in_research_section(path: &str) -> bool {
  path.contains("/research/") || path.starts_with("research/")
}

pub fn base_path(path: &str) -> &'static str {
  if in_research_section(path) { "../" } else { "" }
}

/// The page filename for a path; a trailing slash means the index page.
pub fn current_page(path: &str) -> &str {
  match path.rsplit('/').next() {
    Some("") | None => "index.html",
    Some(file) => file,
  }
}
