//! Terminal output

mod status;

pub use status::StatusReporter;
