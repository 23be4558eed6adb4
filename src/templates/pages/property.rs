// templates/pages/property.rs

use crate::catalog::Property;
use crate::domain::{format_count, format_price};
use crate::templates::{components::section, desktop_layout, PageMeta, SITE_NAME};
use maud::{html, Markup};
use serde_json::json;

pub fn property_page(property: &Property) -> Markup {
    let meta = PageMeta {
        title: format!("{} | {SITE_NAME}", property.title),
        description: Some(property.description.clone()),
        canonical_path: Some(format!("/properties/{}", property.slug)),
        image: Some(property.images.main.clone()),
        structured_data: Some(structured_data(property)),
    };

    desktop_layout(
        &meta,
        html! {
            main class="container mx-auto px-4 py-8" {
                div class="hero" {
                    img src=(property.images.main) alt=(format!("{} - Main Image", property.title));
                }

                div class="grid detail-grid" {
                    div class="detail-main" {
                        h1 class="text-3xl font-bold mb-4" { (property.title) }
                        p class="location" {
                            (property.location.address) ", " (property.location.city) ", "
                            (property.location.state) ", " (property.location.country)
                        }
                        p class="price" {
                            (format_price(property.price))
                            " · " span class="status" { (property.status.label()) }
                        }
                        p class="text-gray-600 mb-6" { (property.description) }

                        (section("Features", features(property)))

                        (section("Details", html! {
                            dl {
                                dt { "Type" } dd { (property.property_type) }
                                dt { "Year built" } dd { (format_count(property.year_built)) }
                                dt { "Rating" } dd { (format!("{:.1}", property.rating)) }
                            }
                        }))

                        @if !property.amenities.is_empty() {
                            (section("Amenities", html! {
                                ul class="amenities" {
                                    @for amenity in &property.amenities {
                                        li { span class="check" { "✓" } " " (amenity) }
                                    }
                                }
                            }))
                        }

                        @if !property.images.gallery.is_empty() {
                            (section("Gallery", html! {
                                div class="grid gallery" {
                                    @for (i, image) in property.images.gallery.iter().enumerate() {
                                        img
                                            src=(image)
                                            alt=(gallery_alt(property, i))
                                            loading="lazy";
                                    }
                                }
                            }))
                        }
                    }

                    aside class="detail-sidebar" {
                        div class="card" {
                            h2 class="text-2xl font-semibold mb-4" { "Contact Agent" }
                            p { strong { "Agent: " } (property.contact_info.agent) }
                            p {
                                strong { "Phone: " }
                                a href=(format!("tel:{}", property.contact_info.phone)) {
                                    (property.contact_info.phone)
                                }
                            }
                            p {
                                strong { "Email: " }
                                a href=(format!("mailto:{}", property.contact_info.email)) {
                                    (property.contact_info.email)
                                }
                            }
                            a class="btn primary" href=(viewing_href(property)) {
                                "Schedule Viewing"
                            }
                        }
                    }
                }
            }
        },
    )
}

fn gallery_alt(property: &Property, index: usize) -> String {
    format!("{} - Gallery Image {}", property.title, index + 1)
}

/// `mailto:` link asking the agent for a viewing. The subject is
/// percent-encoded so titles containing `&`, `#` or `?` stay in the subject.
fn viewing_href(property: &Property) -> String {
    let subject = format!("Viewing: {}", property.title);
    // form encoding writes spaces as '+', which mail clients show literally
    let subject: String = url::form_urlencoded::byte_serialize(subject.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("mailto:{}?subject={subject}", property.contact_info.email)
}

fn features(property: &Property) -> Markup {
    let f = &property.features;
    let tiles = [
        ("Bedrooms", format_count(f.bedrooms)),
        ("Bathrooms", format_count(f.bathrooms)),
        ("Area", format!("{} sq ft", format_count(f.area))),
        ("Parking", format!("{} spots", format_count(f.parking))),
    ];

    html! {
        div class="grid features" {
            @for (label, value) in &tiles {
                div class="feature-tile" {
                    div class="label" { (label) }
                    div class="value" { (value) }
                }
            }
        }
    }
}

/// schema.org listing block. `</` is escaped so the JSON cannot close the
/// surrounding script tag.
pub fn structured_data(property: &Property) -> String {
    let availability = if property.status.is_on_market() {
        "https://schema.org/InStock"
    } else {
        "https://schema.org/SoldOut"
    };

    let amenities: Vec<_> = property
        .amenities
        .iter()
        .map(|a| json!({ "@type": "LocationFeatureSpecification", "name": a }))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "SingleFamilyResidence",
        "name": property.title,
        "description": property.description,
        "image": property.images.main,
        "numberOfRooms": property.features.bedrooms,
        "numberOfBathroomsTotal": property.features.bathrooms,
        "floorSize": {
            "@type": "QuantitativeValue",
            "value": property.features.area,
            "unitText": "sq ft",
        },
        "amenityFeature": amenities,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": property.location.address,
            "addressLocality": property.location.city,
            "addressRegion": property.location.state,
            "addressCountry": property.location.country,
        },
        "offers": {
            "@type": "Offer",
            "price": property.price,
            "priceCurrency": "AED",
            "availability": availability,
        },
    })
    .to_string()
    .replace("</", "<\\/")
}
