//! Request validation. Runs before any statement is issued.

use crate::error::AppError;
use crate::models::{CreateStudent, NewStudent};

/// Parse a path id. Only base-10 integers strictly greater than zero are accepted.
pub fn parse_id(token: &str) -> Result<i64, AppError> {
    match token.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::InvalidId),
    }
}

/// Trim both fields and reject either one being empty afterwards.
pub fn validate_new_student(body: CreateStudent) -> Result<NewStudent, AppError> {
    let name = non_empty_trimmed(&body.name).ok_or(AppError::InvalidFields)?;
    let email = non_empty_trimmed(&body.email).ok_or(AppError::InvalidFields)?;
    Ok(NewStudent { name, email })
}

fn non_empty_trimmed(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}
