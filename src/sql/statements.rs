//! Every statement the service issues. Values are always positional parameters.

/// All students in primary-key order.
pub const LIST_STUDENTS: &str = "SELECT id, name, email FROM students ORDER BY id";

/// One student by id. `$1` = id.
pub const SELECT_STUDENT_BY_ID: &str = "SELECT id, name, email FROM students WHERE id = $1";

/// Insert and return the stored row, id assigned by the database. `$1` = name, `$2` = email.
pub const INSERT_STUDENT: &str =
    "INSERT INTO students (name, email) VALUES ($1, $2) RETURNING id, name, email";

/// Delete by id. Returns the deleted id so the row count is the number of returned rows. `$1` = id.
pub const DELETE_STUDENT: &str = "DELETE FROM students WHERE id = $1 RETURNING id";

/// Connectivity probe for readiness.
pub const PING: &str = "SELECT 1";
