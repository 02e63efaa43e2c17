//! In-memory executors for tests. They understand only the statements in `crate::sql`.

use crate::executor::{ExecError, QueryResult, SqlExecutor, UNIQUE_VIOLATION};
use crate::sql::{SqlParam, DELETE_STUDENT, INSERT_STUDENT, LIST_STUDENTS, PING, SELECT_STUDENT_BY_ID};
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone)]
struct Row {
    id: i64,
    name: String,
    email: String,
}

impl Row {
    fn to_json(&self) -> serde_json::Value {
        json!({ "id": self.id, "name": self.name, "email": self.email })
    }
}

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: Vec<Row>,
}

/// A students table with a serial id and a unique email column.
#[derive(Default)]
pub struct MemoryExecutor {
    table: Mutex<Table>,
    calls: AtomicUsize,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statements executed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn count_email(&self, email: &str) -> usize {
        let table = self.table.lock().unwrap();
        table.rows.iter().filter(|r| r.email == email).count()
    }
}

fn bigint(p: &SqlParam) -> Option<i64> {
    match p {
        SqlParam::BigInt(n) => Some(*n),
        SqlParam::Text(_) => None,
    }
}

fn text(p: &SqlParam) -> Option<&str> {
    match p {
        SqlParam::Text(s) => Some(s),
        SqlParam::BigInt(_) => None,
    }
}

fn bad_params(sql: &str) -> ExecError {
    ExecError {
        code: Some("08P01".into()),
        message: format!("bad parameters for {}", sql),
    }
}

#[async_trait]
impl SqlExecutor for MemoryExecutor {
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<QueryResult, ExecError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut table = self.table.lock().unwrap();
        match sql {
            LIST_STUDENTS => {
                let mut rows = table.rows.clone();
                rows.sort_by_key(|r| r.id);
                Ok(QueryResult::from_rows(rows.iter().map(Row::to_json).collect()))
            }
            SELECT_STUDENT_BY_ID => {
                let id = params.first().and_then(bigint).ok_or_else(|| bad_params(sql))?;
                let rows = table.rows.iter().filter(|r| r.id == id).map(Row::to_json).collect();
                Ok(QueryResult::from_rows(rows))
            }
            INSERT_STUDENT => {
                let (name, email) = match params {
                    [n, e] => (
                        text(n).ok_or_else(|| bad_params(sql))?,
                        text(e).ok_or_else(|| bad_params(sql))?,
                    ),
                    _ => return Err(bad_params(sql)),
                };
                if table.rows.iter().any(|r| r.email == email) {
                    return Err(ExecError {
                        code: Some(UNIQUE_VIOLATION.into()),
                        message: "duplicate key value violates unique constraint \"students_email_key\"".into(),
                    });
                }
                table.next_id += 1;
                let row = Row {
                    id: table.next_id,
                    name: name.to_string(),
                    email: email.to_string(),
                };
                let out = row.to_json();
                table.rows.push(row);
                Ok(QueryResult::from_rows(vec![out]))
            }
            DELETE_STUDENT => {
                let id = params.first().and_then(bigint).ok_or_else(|| bad_params(sql))?;
                let before = table.rows.len();
                table.rows.retain(|r| r.id != id);
                let rows = if table.rows.len() < before {
                    vec![json!({ "id": id })]
                } else {
                    Vec::new()
                };
                Ok(QueryResult::from_rows(rows))
            }
            PING => Ok(QueryResult::from_rows(vec![json!({ "?column?": 1 })])),
            other => Err(ExecError {
                code: Some("42601".into()),
                message: format!("unsupported statement: {}", other),
            }),
        }
    }
}

/// Fails every statement with the given code.
pub struct FailingExecutor {
    code: Option<String>,
    calls: AtomicUsize,
}

impl FailingExecutor {
    pub fn with_code(code: Option<&str>) -> Self {
        FailingExecutor {
            code: code.map(str::to_string),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SqlExecutor for FailingExecutor {
    async fn execute(&self, _sql: &str, _params: &[SqlParam]) -> Result<QueryResult, ExecError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ExecError {
            code: self.code.clone(),
            message: "terminating connection due to administrator command".into(),
        })
    }
}
