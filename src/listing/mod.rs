pub mod clearer;
pub mod report;
pub mod writer;

pub use clearer::FileClearer;
pub use report::RunReport;
pub use writer::{render_listing, ListingWriter};
