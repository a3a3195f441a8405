//! Decision logic - which source entries get copied

mod compare;
mod filter;

pub use compare::{compare_to_watermark, decide};
pub use filter::ExcludeFilter;
