//! Shared MySQL plumbing wrapped by every repository
//!
//! `MySqlStore` knows a table and the resource name used in errors. It runs
//! the id-keyed queries every entity needs and translates sqlx failures into
//! `DomainError`, turning duplicate-key violations into `Conflict`.

use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::{Decode, MySql, MySqlPool, Row, Type};
use uuid::Uuid;

use es_core::errors::{DomainError, DomainResult};

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
    table: &'static str,
    resource: &'static str,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool, table: &'static str, resource: &'static str) -> Self {
        Self { pool, table, resource }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// `SELECT {columns} FROM {table} WHERE id = ?`
    pub async fn fetch_by_id<T>(
        &self,
        columns: &str,
        id: Uuid,
        map: fn(&MySqlRow) -> DomainResult<T>,
    ) -> DomainResult<Option<T>> {
        let sql = format!("SELECT {} FROM {} WHERE id = ? LIMIT 1", columns, self.table);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(self.resource, "find", e))?;

        row.as_ref().map(map).transpose()
    }

    /// `SELECT {columns} FROM {table} WHERE {column} = ? ORDER BY {order_by}`
    pub async fn fetch_where<T>(
        &self,
        columns: &str,
        column: &str,
        value: Uuid,
        order_by: &str,
        map: fn(&MySqlRow) -> DomainResult<T>,
    ) -> DomainResult<Vec<T>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ? ORDER BY {}",
            columns, self.table, column, order_by
        );
        let rows = sqlx::query(&sql)
            .bind(value.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error(self.resource, "list", e))?;

        rows.iter().map(map).collect()
    }

    pub async fn exists(&self, id: Uuid) -> DomainResult<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?) AS found", self.table);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error(self.resource, "check", e))?;

        let found: i64 = column(&row, "found")?;
        Ok(found == 1)
    }

    pub async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", self.table);
        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error(self.resource, "delete", e))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_course(&self, course_id: Uuid) -> DomainResult<u64> {
        let sql = format!("DELETE FROM {} WHERE course_id = ?", self.table);
        let result = sqlx::query(&sql)
            .bind(course_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error(self.resource, "delete", e))?;

        Ok(result.rows_affected())
    }

    /// Append `item_id` to the JSON id list in `list_column` unless present
    ///
    /// Runs as one conditional UPDATE, so concurrent appends never drop an id.
    /// Returns whether the owning row exists.
    pub async fn append_id(&self, list_column: &str, owner_id: Uuid, item_id: Uuid) -> DomainResult<bool> {
        let sql = format!(
            "UPDATE {table} SET {col} = JSON_ARRAY_APPEND({col}, '$', ?), updated_at = UTC_TIMESTAMP(6) \
             WHERE id = ? AND NOT JSON_CONTAINS({col}, JSON_QUOTE(?))",
            table = self.table,
            col = list_column
        );
        let result = sqlx::query(&sql)
            .bind(item_id.to_string())
            .bind(owner_id.to_string())
            .bind(item_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_error(self.resource, "update", e))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        self.exists(owner_id).await
    }
}

/// Map a failed write, turning unique-key violations into `Conflict`
pub fn write_error(resource: &str, conflict_message: &str, err: sqlx::Error) -> DomainError {
    if is_unique_violation(&err) {
        return DomainError::conflict(conflict_message);
    }
    query_error(resource, "save", err)
}

pub fn query_error(resource: &str, action: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(resource, action, error = %err, "Database query failed");
    DomainError::database(format!("Failed to {} {}: {}", action, resource.to_lowercase(), err))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map_or(false, |db| db.is_unique_violation())
}

/// Typed column read with the column name in the error
pub fn column<'r, T>(row: &'r MySqlRow, name: &str) -> DomainResult<T>
where
    T: Decode<'r, MySql> + Type<MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

pub fn uuid_column(row: &MySqlRow, name: &str) -> DomainResult<Uuid> {
    let raw: String = column(row, name)?;
    parse_uuid(name, &raw)
}

pub fn id_list_column(row: &MySqlRow, name: &str) -> DomainResult<Vec<Uuid>> {
    let Json(ids): Json<Vec<Uuid>> = column(row, name)?;
    Ok(ids)
}

fn parse_uuid(name: &str, raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| DomainError::database(format!("Invalid UUID in {}: {}", name, e)))
}

/// `?, ?, ?` for an IN clause of `count` values
pub fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?, ?, ?");
        assert_eq!(placeholders(0), "");
    }

    #[test]
    fn test_parse_uuid_reports_column() {
        let err = parse_uuid("course_id", "not-a-uuid").unwrap_err();
        assert!(err.to_string().contains("course_id"));

        let id = Uuid::new_v4();
        assert_eq!(parse_uuid("id", &id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_non_database_errors_are_not_conflicts() {
        let err = write_error("Enrollment", "Already enrolled in this course", sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Database { .. }));
    }
}
