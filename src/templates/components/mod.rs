use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod filters;

pub use card::property_card;
pub use error::html_error_response;
pub use filters::filter_panel;

pub fn section(title: &str, body: Markup) -> Markup {
    html! {
        section class="mb-8" {
            h2 class="text-2xl font-semibold mb-4" { (title) }
            (body)
        }
    }
}
