/* crates/placard-components/src/modal.rs */

//! Modal overlays are injected as markup; opening, closing, and key
//! handling belong to the page scripts in the browser.

use placard_dom::Document;

pub const PRIVACY_MODAL_ID: &str = "privacy-policy-modal";
pub const RESEARCH_MODAL_ID: &str = "housing-advisory-modal";

fn modal_shell(id: &str, heading: &str, max_width: &str, body: &str) -> String {
  format!(
    r#"
            <div id="{id}" class="hidden fixed inset-0 bg-black bg-opacity-80 z-50 flex items-center justify-center p-4">
                <div class="bg-white rounded-lg shadow-2xl w-full {max_width} max-h-[95vh] flex flex-col border-4 border-brand-light-green">
                    <div class="flex justify-between items-center p-4 border-b border-neutral-200 bg-brand-light-green text-white rounded-t-lg">
                        <h2 class="text-xl font-bold">{heading}</h2>
                        <button id="close-{id}" class="text-white hover:text-neutral-200 text-3xl leading-none">&times;</button>
                    </div>
                    <div class="flex-1 overflow-y-auto">
                        <div class="p-6">
{body}
                        </div>
                    </div>
                </div>
            </div>
        "#
  )
}

/// The privacy policy overlay, opened from the footer link.
pub fn privacy_policy_modal() -> String {
  let body = r#"
                            <div class="text-center mb-6">
                                <p class="text-neutral-600 mb-4">*Last updated: July 07, 2025*</p>
                                <p class="text-sm text-neutral-500">Overland Park Voice ("us", "we", or "our") operates the opvoice.org website. This page informs you of our policies regarding the collection, use, and disclosure of personal data when you use our Service.</p>
                            </div>
                            <div class="prose prose-lg max-w-none">
                                <h3 class="text-lg font-semibold text-brand-dark-green mb-3">Information We Collect</h3>
                                <p class="mb-4">Our goal is to collect as little information as possible. We do not use cookies, tracking pixels, or analytics services. The only personal information we collect is what you voluntarily provide through the contact form: name, email address, and message content.</p>
                                <h3 class="text-lg font-semibold text-brand-dark-green mb-3">How We Use Your Information</h3>
                                <p class="mb-4">Contact form information is used only to respond to your inquiry. We do not sell, rent, or share your personal information with third parties for marketing purposes.</p>
                                <h3 class="text-lg font-semibold text-brand-dark-green mb-3">Third-Party Services</h3>
                                <p class="mb-4">Static assets are served from public CDNs and form submissions are processed by Formspree; we do not store form data on our servers.</p>
                                <h3 class="text-lg font-semibold text-brand-dark-green mb-3">Your Rights</h3>
                                <p class="mb-4">Under applicable privacy laws you may request access to, correction of, or deletion of your personal data at any time.</p>
                                <h3 class="text-lg font-semibold text-brand-dark-green mb-3">Contact Us</h3>
                                <p class="mb-2">Questions about this policy: overlandpark.voice@gmail.com, or the contact form at opvoice.org. We respond within 5 business days.</p>
                            </div>"#;
  modal_shell(PRIVACY_MODAL_ID, "Privacy Policy", "max-w-4xl", body)
}

/// Preview overlay for the housing advisory commission research page.
/// The chart canvas is populated by the page's charting script.
pub fn research_preview_modal() -> String {
  let body = r#"
                            <div class="text-center mb-6">
                                <p class="text-neutral-600 mb-4">View the complete research and interactive charts:</p>
                                <a href="research/housing-advisory-commission.html" target="_blank" class="inline-block bg-brand-light-green text-white px-6 py-3 rounded-lg font-semibold hover:bg-brand-dark-green transition-colors">Open Full Research Page</a>
                            </div>
                            <div class="bg-neutral-100 rounded-lg p-6 mb-6">
                                <h3 class="text-2xl font-bold text-brand-dark-green mb-4">Quick Summary</h3>
                                <div class="grid md:grid-cols-2 gap-6">
                                    <div>
                                        <h4 class="font-semibold text-brand-dark-green mb-2">The Issue</h4>
                                        <ul class="text-sm text-neutral-700 space-y-1">
                                            <li>&bull; 38% of OP households are renters (31,000+ homes)</li>
                                            <li>&bull; No formal representation in housing policy</li>
                                            <li>&bull; Widespread affordability gaps</li>
                                        </ul>
                                    </div>
                                    <div>
                                        <h4 class="font-semibold text-brand-dark-green mb-2">The Solution</h4>
                                        <ul class="text-sm text-neutral-700 space-y-1">
                                            <li>&bull; Housing Advisory Commission</li>
                                            <li>&bull; 1/3 seats reserved for renters</li>
                                            <li>&bull; Only 0.1% of city budget</li>
                                        </ul>
                                    </div>
                                </div>
                            </div>
                            <div class="grid md:grid-cols-2 gap-6">
                                <div class="bg-white rounded-lg p-4 shadow-sm border">
                                    <h4 class="font-semibold text-center mb-3">Household Composition</h4>
                                    <div style="position: relative; height: 200px;">
                                        <canvas id="mini-renter-chart"></canvas>
                                    </div>
                                </div>
                                <div class="bg-white rounded-lg p-4 shadow-sm border">
                                    <h4 class="font-semibold text-center mb-3">Budget Impact</h4>
                                    <div class="text-center">
                                        <div class="text-4xl font-bold text-info-orange mb-2">0.1%</div>
                                        <p class="text-sm text-neutral-600">of General Fund</p>
                                        <p class="text-xs text-neutral-500 mt-2">$1 for every $1,000</p>
                                    </div>
                                </div>
                            </div>"#;
  modal_shell(RESEARCH_MODAL_ID, "Housing Advisory Commission Research", "max-w-6xl", body)
}

/// Append a modal to the page body. Returns false (and changes nothing)
/// when the page has no body element or already carries the modal.
pub fn attach_modal(doc: &mut Document, modal_id: &str, modal_html: &str) -> bool {
  if doc.element_by_id(modal_id).is_some() {
    return false;
  }
  let Some(&body) = doc.elements_by_tag("body").first() else {
    return false;
  };
  doc.append_html(body, modal_html);
  true
}
