//! Student handlers: list, read, create, delete.

use crate::error::AppError;
use crate::models::CreateStudent;
use crate::service::{parse_id, validate_new_student, StudentService};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// A path token the router cannot decode (e.g. invalid UTF-8) is as invalid as one that is not a number.
fn path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, AppError> {
    let Path(id_str) = path.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "rejected id path");
        AppError::InvalidId
    })?;
    parse_id(&id_str)
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::list(state.executor.as_ref()).await?;
    Ok(Json(students))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let student = StudentService::get(state.executor.as_ref(), id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(student))
}

/// Any body that does not deserialize into `{name: string, email: string}` is an invalid-fields error,
/// except one cut off by the body limit.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateStudent>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "rejected create body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::InvalidFields
        }
    })?;
    let new_student = validate_new_student(body)?;
    let student = StudentService::create(state.executor.as_ref(), new_student).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    if !StudentService::delete(state.executor.as_ref(), id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
