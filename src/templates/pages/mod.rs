pub mod home;
pub mod property;

pub use home::{home_page, ListingVm};
pub use property::property_page;
