//! Positional parameters and binding onto sqlx queries.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// A value bound to `$n` in a statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqlParam {
    BigInt(i64),
    Text(String),
}

/// Bind params in order: `params[0]` is `$1`.
pub fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [SqlParam],
) -> Query<'q, Postgres, PgArguments> {
    for p in params {
        query = match p {
            SqlParam::BigInt(n) => query.bind(*n),
            SqlParam::Text(s) => query.bind(s.as_str()),
        };
    }
    query
}
