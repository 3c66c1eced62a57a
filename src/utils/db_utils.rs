use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sqlx::SqlitePool;

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug)]
pub enum SqlValue {
    String(String),
    I64(i64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
    Null,
}

/// ===============================
/// SQL update container
/// ===============================
#[derive(Debug)]
pub struct SqlUpdate {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// Builds a dynamic UPDATE from the (column, value) pairs a partial-update
/// payload actually provided. Callers guarantee `sets` is non-empty.
pub fn build_update_sql(
    table: &str,
    sets: Vec<(&'static str, SqlValue)>,
    id_column: &str,
    id_value: &str,
) -> SqlUpdate {
    let set_clause = sets
        .iter()
        .map(|(col, _)| format!("{} = ?", col))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!("UPDATE {} SET {} WHERE {} = ?", table, set_clause, id_column);

    let mut values: Vec<SqlValue> = sets.into_iter().map(|(_, v)| v).collect();
    values.push(SqlValue::String(id_value.to_string()));

    SqlUpdate { sql, values }
}

/// ===============================
/// Execute the update
/// ===============================
pub async fn execute_update(pool: &SqlitePool, update: SqlUpdate) -> Result<u64, sqlx::Error> {
    let mut query = sqlx::query(&update.sql);

    for value in update.values {
        query = match value {
            SqlValue::String(v) => query.bind(v),
            SqlValue::I64(v) => query.bind(v),
            SqlValue::Bool(v) => query.bind(v),
            SqlValue::Date(v) => query.bind(v),
            SqlValue::DateTime(v) => query.bind(v),
            SqlValue::Timestamp(v) => query.bind(v),
            SqlValue::Null => query.bind(None::<String>),
        };
    }

    let result = query.execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_set_clause_in_field_order() {
        let update = build_update_sql(
            "employees",
            vec![
                ("full_name", SqlValue::String("Dana".into())),
                ("is_active", SqlValue::Bool(false)),
            ],
            "id",
            "e-1",
        );
        assert_eq!(
            update.sql,
            "UPDATE employees SET full_name = ?, is_active = ? WHERE id = ?"
        );
        assert_eq!(update.values.len(), 3);
    }
}
