//! Storage executor: runs one parameterized statement and reports rows or a failure.

use crate::sql::{bind_all, SqlParam};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use thiserror::Error;

/// SQLSTATE reported by PostgreSQL for a unique constraint violation.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Rows come back as JSON objects keyed by column name.
#[derive(Debug, Default, Clone)]
pub struct QueryResult {
    pub rows: Vec<Value>,
    pub rows_affected: u64,
}

impl QueryResult {
    pub fn from_rows(rows: Vec<Value>) -> Self {
        let rows_affected = rows.len() as u64;
        QueryResult { rows, rows_affected }
    }
}

/// A failed statement. `code` is the vendor error code when the database supplied one.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ExecError {
    pub code: Option<String>,
    pub message: String,
}

impl ExecError {
    pub fn is_unique_violation(&self) -> bool {
        self.code.as_deref() == Some(UNIQUE_VIOLATION)
    }
}

impl From<sqlx::Error> for ExecError {
    fn from(e: sqlx::Error) -> Self {
        let code = match &e {
            sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
            _ => None,
        };
        ExecError {
            code,
            message: e.to_string(),
        }
    }
}

#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult, ExecError>;
}

/// Executor over a shared connection pool. Built once at startup; clones share the pool.
#[derive(Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        PgExecutor { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SqlExecutor for PgExecutor {
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult, ExecError> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let rows = bind_all(sqlx::query(sql), params).fetch_all(&self.pool).await?;
        Ok(QueryResult::from_rows(rows.iter().map(row_to_json).collect()))
    }
}

fn row_to_json(row: &sqlx::postgres::PgRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

fn cell_to_value(row: &sqlx::postgres::PgRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i16>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_is_recognised_by_code() {
        let dup = ExecError {
            code: Some(UNIQUE_VIOLATION.into()),
            message: "duplicate key value violates unique constraint \"students_email_key\"".into(),
        };
        assert!(dup.is_unique_violation());

        let other = ExecError {
            code: Some("23502".into()),
            message: "null value in column \"name\"".into(),
        };
        assert!(!other.is_unique_violation());
    }

    #[test]
    fn non_database_sqlx_errors_have_no_code() {
        let e = ExecError::from(sqlx::Error::PoolTimedOut);
        assert!(e.code.is_none());
        assert!(!e.is_unique_violation());
    }

    #[test]
    fn row_count_follows_returned_rows() {
        let r = QueryResult::from_rows(vec![serde_json::json!({ "id": 3 })]);
        assert_eq!(r.rows_affected, 1);
        assert_eq!(QueryResult::default().rows_affected, 0);
    }
}
