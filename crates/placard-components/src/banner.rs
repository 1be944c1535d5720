/* crates/placard-components/src/banner.rs */

/// A work-in-progress notice shown at the top of a page. Messages may
/// carry inline markup (links).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeBanner {
  pub title: &'static str,
  pub message: &'static str,
}

const NOTICE_BANNERS: &[(&str, NoticeBanner)] = &[
  (
    "index.html",
    NoticeBanner {
      title: "Work in Progress: This site is currently under construction.",
      message: "We're building our platform for meaningful community engagement. Have ideas or \
                want to get involved? We'd love to hear from you.",
    },
  ),
  (
    "mission.html",
    NoticeBanner {
      title: "Mission Content: Being Expanded",
      message: "Our core mission is established, but we're adding more detailed information \
                about our approach and impact.",
    },
  ),
  (
    "initiatives.html",
    NoticeBanner {
      title: "Work in Progress: Our initiatives are actively developing",
      message: "Content will be updated as our advocacy efforts progress and take shape.",
    },
  ),
  (
    "launch.html",
    NoticeBanner {
      title: "Community Launchpad: Building Our Tools",
      message: "We're developing the resources and processes to help residents launch their \
                advocacy efforts.",
    },
  ),
  (
    "localinfo.html",
    NoticeBanner {
      title: "Local Information: Verifying All Data Sources",
      message: "We're verifying all government contacts and information with official sources. \
                Visit the <a href='https://www.opkansas.org/city-government/' target='_blank' \
                rel='noopener noreferrer' class='underline hover:no-underline \
                font-semibold'>official city government page</a> for the most current \
                information. Found something incorrect? Please let us know!",
    },
  ),
  (
    "updates.html",
    NoticeBanner {
      title: "News Section: Coming Soon",
      message: "We'll share updates about our progress, upcoming events, and civic \
                opportunities.",
    },
  ),
];

pub fn banner_for(page: &str) -> Option<&'static NoticeBanner> {
  NOTICE_BANNERS.iter().find(|(file, _)| *file == page).map(|(_, banner)| banner)
}

/// Banner markup for a page, or an empty string when the page has none.
pub fn generate_notice_banner(page: &str) -> String {
  let Some(banner) = banner_for(page) else {
    return String::new();
  };
  format!(
    r#"
        <div id="wip-banner" class="bg-warn-300 text-warn-800 text-center py-4 px-6 ">
            <div class="flex items-center justify-center space-x-2 text-base mb-2">
                <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-2.5L13.732 4c-.77-.833-2.694-.833-3.464 0L3.34 16.5c-.77.833.192 2.5 1.732 2.5z" />
                </svg>
                <span class="font-semibold">{title}</span>
            </div>
            <div class="max-w-3xl mx-auto">
                <p class="text-sm font-medium">{message}</p>
            </div>
        </div>
    "#,
    title = banner.title,
    message = banner.message,
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_site_page_has_a_banner() {
    for page in crate::pages::SITE_PAGES {
      assert!(banner_for(page.file).is_some(), "no banner for {}", page.file);
    }
  }

  #[test]
  fn unknown_page_has_no_banner() {
    assert!(banner_for("housing-advisory-commission.html").is_none());
    assert_eq!(generate_notice_banner("housing-advisory-commission.html"), "");
  }

  #[test]
  fn banner_markup_carries_title_and_message() {
    let html = generate_notice_banner("updates.html");
    assert!(html.contains(r#"id="wip-banner""#));
    assert!(html.contains("News Section: Coming Soon"));
    assert!(html.contains("civic"));
  }

  #[test]
  fn message_markup_passes_through() {
    let html = generate_notice_banner("localinfo.html");
    assert!(html.contains("<a href='https://www.opkansas.org/city-government/'"));
  }
}
