//! Fixed parameterized statements for the students table and their positional parameters.

mod statements;
pub mod params;
pub use params::*;
pub use statements::*;
