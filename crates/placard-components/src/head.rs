/* crates/placard-components/src/head.rs */

use serde::Deserialize;

/// Per-page metadata substituted into the shared head template.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub keywords: String,
  #[serde(default)]
  pub url: String,
}

/// Replace every `{{PAGE_*}}` placeholder in the shared head template.
/// Replacement is global; a template may repeat a placeholder (title and
/// og:title, for example).
pub fn populate_head_template(template: &str, meta: &PageMeta) -> String {
  template
    .replace("{{PAGE_TITLE}}", &meta.title)
    .replace("{{PAGE_DESCRIPTION}}", &meta.description)
    .replace("{{PAGE_KEYWORDS}}", &meta.keywords)
    .replace("{{PAGE_URL}}", &meta.url)
}

/// Essential head content used when the shared template cannot be fetched.
pub fn fallback_head(meta: &PageMeta, base: &str) -> String {
  format!(
    r#"
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <meta name="description" content="{description}" />
    <meta name="keywords" content="{keywords}" />
    <meta name="author" content="Overland Park Voice" />
    <meta name="robots" content="index, follow" />

    <meta property="og:type" content="website" />
    <meta property="og:url" content="{url}" />
    <meta property="og:title" content="{title}" />
    <meta property="og:description" content="{description}" />
    <meta property="og:image" content="https://opvoice.org/assets/images/logos/OPVoiceLogo_v-1.14.png" />

    <script src="https://cdn.tailwindcss.com?plugins=forms,typography,aspect-ratio,line-clamp"></script>

    <link rel="preconnect" href="https://fonts.googleapis.com" />
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet" />

    <link rel="icon" type="image/png" href="{base}assets/images/logos/OPVoiceLogoCROP_v-1.14.png" />

    <link rel="stylesheet" href="{base}assets/css/hero-animations.css" />
    <link rel="stylesheet" href="{base}assets/css/shared-styles.css" />
  "#,
    title = meta.title,
    description = meta.description,
    keywords = meta.keywords,
    url = meta.url,
  )
}
