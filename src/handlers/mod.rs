//! HTTP handlers for the students resource and service endpoints.

pub mod common;
pub mod students;
pub use students::*;
