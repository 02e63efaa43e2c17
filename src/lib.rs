//! Students API: create/read/delete REST service over a single PostgreSQL table.

pub mod config;
pub mod error;
pub mod executor;
pub mod models;
pub mod sql;
pub mod state;
pub mod service;
pub mod handlers;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{AppConfig, DatabaseConfig};
pub use error::{AppError, ConfigError, ErrorBody};
pub use executor::{ExecError, PgExecutor, QueryResult, SqlExecutor};
pub use models::{CreateStudent, NewStudent, Student};
pub use state::AppState;
pub use routes::{app, common_routes, student_routes};
pub use service::StudentService;
