use crate::geos::DESTINATIONS;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const SITE_NAME: &str = "LuxeList Dubai";
pub const SITE_URL: &str = "https://luxelist.ae";

/// Per-page `<head>` content.
#[derive(Debug, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub canonical_path: Option<String>,
    pub image: Option<String>,
    /// Serialized schema.org JSON-LD.
    pub structured_data: Option<String>,
}

pub fn desktop_layout(meta: &PageMeta, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                @if let Some(desc) = &meta.description {
                    meta name="description" content=(desc);
                    meta property="og:description" content=(desc);
                }
                meta property="og:title" content=(meta.title);
                meta property="og:type" content="website";
                @if let Some(image) = &meta.image {
                    meta property="og:image" content=(image);
                    meta name="twitter:card" content="summary_large_image";
                }
                @if let Some(path) = &meta.canonical_path {
                    link rel="canonical" href=(format!("{SITE_URL}{path}"));
                }
                @if let Some(data) = &meta.structured_data {
                    script type="application/ld+json" { (PreEscaped(data)) }
                }
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="text-xl font-bold" { (SITE_NAME) }
                    nav {
                        ul {
                            li { a href="/" { "All properties" } }
                            @for (id, name) in DESTINATIONS {
                                li { a href=(format!("/?destination={id}")) { (name) } }
                            }
                        }
                    }
                }
                (content)
                footer class="px-6 py-4 text-sm text-gray-500" {
                    "Prices in AED. Listings are provided for information only."
                }
            }
        }
    }
}
