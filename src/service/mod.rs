//! Client-side operations layered over the raw API traits
//!
//! Each service performs its local checks (empty fields, missing session)
//! before any request is made.

pub mod auth;
pub mod generator;

pub use auth::AuthService;
pub use generator::GeneratorService;
