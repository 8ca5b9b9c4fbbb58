//! Data models for the tour CMS backend.
//!
//! These models match the admin frontend's TypeScript interfaces exactly for
//! seamless interoperability.

mod blog;
mod homepage;
mod message;
mod stats;
mod tour;

pub use blog::*;
pub use homepage::*;
pub use message::*;
pub use stats::*;
pub use tour::*;
