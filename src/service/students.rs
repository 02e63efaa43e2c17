//! Student persistence via the injected executor. Each operation issues exactly one statement.

use crate::error::AppError;
use crate::executor::{ExecError, SqlExecutor};
use crate::models::{NewStudent, Student};
use crate::sql::{SqlParam, DELETE_STUDENT, INSERT_STUDENT, LIST_STUDENTS, SELECT_STUDENT_BY_ID};
use serde_json::Value;

pub struct StudentService;

impl StudentService {
    /// All students, ascending by id.
    pub async fn list(executor: &dyn SqlExecutor) -> Result<Vec<Student>, AppError> {
        let result = executor.execute(LIST_STUDENTS, &[]).await?;
        result.rows.into_iter().map(decode_student).collect()
    }

    /// Fetch one student by id. Returns None when no row matches.
    pub async fn get(executor: &dyn SqlExecutor, id: i64) -> Result<Option<Student>, AppError> {
        let result = executor
            .execute(SELECT_STUDENT_BY_ID, &[SqlParam::BigInt(id)])
            .await?;
        result.rows.into_iter().next().map(decode_student).transpose()
    }

    /// Insert a validated student and return it with its assigned id.
    /// A unique violation can only come from `email`, the one unique column besides the key.
    pub async fn create(executor: &dyn SqlExecutor, student: NewStudent) -> Result<Student, AppError> {
        let params = [SqlParam::Text(student.name), SqlParam::Text(student.email)];
        let result = match executor.execute(INSERT_STUDENT, &params).await {
            Ok(r) => r,
            Err(e) if e.is_unique_violation() => {
                tracing::debug!(error = %e, "duplicate email on insert");
                return Err(AppError::DuplicateEmail);
            }
            Err(e) => return Err(e.into()),
        };
        let row = result.rows.into_iter().next().ok_or_else(|| ExecError {
            code: None,
            message: "insert returned no row".into(),
        })?;
        decode_student(row)
    }

    /// Delete by id. Returns false when no row matched.
    pub async fn delete(executor: &dyn SqlExecutor, id: i64) -> Result<bool, AppError> {
        let result = executor
            .execute(DELETE_STUDENT, &[SqlParam::BigInt(id)])
            .await?;
        Ok(result.rows_affected > 0)
    }
}

fn decode_student(row: Value) -> Result<Student, AppError> {
    serde_json::from_value(row).map_err(|e| {
        AppError::Storage(ExecError {
            code: None,
            message: format!("unexpected student row: {}", e),
        })
    })
}
