use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

pub async fn init_db(database_url: &str) -> SqlitePool {
    let options = SqliteConnectOptions::from_str(database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .expect("Failed to connect to database");

    migrate(&pool).await.expect("Failed to run schema migration");

    pool
}

/// Idempotent schema setup, also used by the test suites against
/// `sqlite::memory:` pools.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id            TEXT PRIMARY KEY,
            full_name     TEXT NOT NULL,
            position      TEXT NOT NULL,
            phone         TEXT,
            email         TEXT,
            employee_code TEXT,
            hire_date     TEXT NOT NULL,
            is_active     INTEGER NOT NULL DEFAULT 1,
            notes         TEXT,
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS daily_logs (
            id               TEXT PRIMARY KEY,
            date             TEXT NOT NULL,
            project          TEXT NOT NULL,
            employees        TEXT NOT NULL,
            start_time       TEXT NOT NULL,
            end_time         TEXT NOT NULL,
            work_description TEXT NOT NULL,
            attachment       TEXT,
            status           TEXT NOT NULL DEFAULT 'draft',
            team_leader      TEXT NOT NULL,
            approved_by      TEXT,
            approved_at      TEXT,
            created_at       TEXT NOT NULL,
            updated_at       TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_daily_logs_date ON daily_logs (date)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_daily_logs_status ON daily_logs (status)")
        .execute(pool)
        .await?;
    // composite key backing the one-log-per-(leader, date, project) rule
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_daily_logs_owner_date_project \
         ON daily_logs (team_leader, date, project)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id         TEXT PRIMARY KEY,
            recipient  TEXT NOT NULL,
            kind       TEXT NOT NULL,
            message    TEXT NOT NULL,
            log_id     TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
