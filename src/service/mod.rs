//! StudentService: one parameterized statement per operation, plus request validation.

mod students;
pub mod validation;
pub use students::StudentService;
pub use validation::{parse_id, validate_new_student};
