//! Native representations produced by parsing.

pub mod duration;

pub use duration::TimeDuration;
