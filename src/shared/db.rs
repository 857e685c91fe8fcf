use sea_orm::{DbErr, SqlErr};

/// True when the error is a Postgres unique-index violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}
