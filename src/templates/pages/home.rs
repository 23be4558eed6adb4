// templates/pages/home.rs

use crate::domain::PropertySummary;
use crate::templates::{
    components::{filter_panel, property_card},
    desktop_layout, PageMeta, SITE_NAME,
};
use maud::{html, Markup};

pub struct ListingVm {
    pub properties: Vec<PropertySummary>,
    pub destination: Option<String>,
    pub price_band: String,
    /// The catalog could not be loaded at all. Details go to the log; the
    /// page only shows a generic notice.
    pub source_unavailable: bool,
}

pub fn home_page(vm: &ListingVm) -> Markup {
    let meta = PageMeta {
        title: SITE_NAME.to_string(),
        description: Some("Luxury villas, penthouses and apartments across the UAE.".into()),
        canonical_path: Some("/".into()),
        ..Default::default()
    };

    desktop_layout(
        &meta,
        html! {
            main class="container mx-auto px-4 py-8" {
                h1 class="text-4xl font-bold mb-8" { (SITE_NAME) }

                div class="grid listing-grid" {
                    aside class="filters-column" {
                        (filter_panel(vm.destination.as_deref(), &vm.price_band))
                    }

                    section class="results" {
                        @if vm.source_unavailable {
                            (unavailable_state())
                        } @else if vm.properties.is_empty() {
                            (empty_state())
                        } @else {
                            p class="result-count" {
                                (vm.properties.len())
                                @if vm.properties.len() == 1 { " property" } @else { " properties" }
                            }
                            div class="grid cards" {
                                @for (i, property) in vm.properties.iter().enumerate() {
                                    (property_card(property, i == 0))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn empty_state() -> Markup {
    html! {
        div class="empty-state" {
            h3 class="text-xl font-semibold" { "No Properties Found" }
            p {
                "We couldn't find any properties matching your criteria. "
                "Try adjusting your filters."
            }
        }
    }
}

fn unavailable_state() -> Markup {
    html! {
        div class="error-state" role="alert" {
            h3 class="text-xl font-semibold" { "Listings Unavailable" }
            p { "We couldn't load our listings right now. Please try again shortly." }
        }
    }
}
