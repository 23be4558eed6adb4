use crate::geos::{DESTINATIONS, PRICE_BANDS};
use maud::{html, Markup};

/// Location select plus price band radios. Submits as a plain GET so the
/// listing URL carries the current filters.
pub fn filter_panel(destination: Option<&str>, band: &str) -> Markup {
    html! {
        form class="filters" method="get" action="/" {
            div class="p-4" {
                h3 class="text-lg font-semibold mb-4" { "Location" }
                label for="destination" class="sr-only" { "Location" }
                select name="destination" id="destination" onchange="this.form.submit()" {
                    option value="" selected[destination.is_none()] { "All Locations" }
                    @for (id, name) in DESTINATIONS {
                        option value=(id) selected[destination == Some(*id)] { (name) }
                    }
                }
            }
            div class="p-4 border-t" {
                h3 class="text-lg font-semibold mb-4" { "Price Range" }
                @for b in PRICE_BANDS {
                    label class="price-band" {
                        input
                            type="radio"
                            name="price"
                            value=(b.code)
                            checked[band == b.code]
                            onchange="this.form.submit()";
                        " " (b.label)
                    }
                }
            }
            noscript {
                button type="submit" class="btn" { "Apply filters" }
            }
        }
    }
}
