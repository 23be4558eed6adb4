use crate::domain::{format_price, PropertySummary};
use maud::{html, Markup};

/// Listing card. `priority` marks the first card so its image loads eagerly.
pub fn property_card(property: &PropertySummary, priority: bool) -> Markup {
    let href = format!("/properties/{}", property.slug);

    html! {
        article class="card property-card" {
            a href=(href) {
                img
                    src=(property.thumbnail)
                    alt=(property.title)
                    loading=(if priority { "eager" } else { "lazy" });
            }
            div class="card-body" {
                h2 { a href=(href) { (property.title) } }
                p class="location" {
                    (property.location.city) ", " (property.location.state)
                }
                p class="description" { (property.short_description) }
                div class="card-footer" {
                    span class="price" { (format_price(property.price)) }
                    span class="rating" title="Rating" {
                        "★ " (format!("{:.1}", property.rating))
                    }
                }
                a href=(href) class="details-link" { "View details →" }
            }
        }
    }
}
