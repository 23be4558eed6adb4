pub mod criteria;
pub mod filter;
pub mod format;
pub mod summary;

pub use criteria::Criteria;
pub use filter::filter_and_project;
pub use format::{format_count, format_price};
pub use summary::PropertySummary;
