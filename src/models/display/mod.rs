//! Display model implementations for table output
//!
//! Display models transform view-models into CLI-friendly rows with
//! appropriate column names.

mod common;
mod post;

pub use post::PostDisplay;
