//! Post content shaping, independent of any rendering

pub mod normalize;
pub mod view;

pub use view::PostView;
