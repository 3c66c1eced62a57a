#![allow(dead_code)]

use actix_web::http::Method;
use actix_web::test::TestRequest;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use worklog::auth::jwt::generate_access_token;
use worklog::config::Config;
use worklog::notify::Notifier;

pub const JWT_SECRET: &str = "integration-test-secret";

pub struct TestContext {
    pub pool: SqlitePool,
    pub config: Config,
    pub notifier: Notifier,
}

impl TestContext {
    pub async fn new() -> Self {
        // one connection so every pooled handle sees the same :memory: database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        worklog::db::migrate(&pool).await.expect("migration failed");

        let (notifier, _handle) = Notifier::start(pool.clone());

        TestContext {
            pool,
            config: Config {
                database_url: "sqlite::memory:".into(),
                jwt_secret: JWT_SECRET.into(),
                server_addr: "127.0.0.1:0".into(),
                rate_protected_per_min: 10_000,
                api_prefix: "/api".into(),
            },
            notifier,
        }
    }
}

/// Builds the full service under test, routed and middleware-wrapped exactly
/// as in `main`. A macro because the composed service type is unnameable.
#[macro_export]
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.pool.clone()))
                .app_data(actix_web::web::Data::new($ctx.config.clone()))
                .app_data(actix_web::web::Data::new($ctx.notifier.clone()))
                .configure(|cfg| worklog::routes::configure(cfg, $ctx.config.clone())),
        )
        .await
    };
}

pub fn manager_token() -> String {
    generate_access_token("m1", 1, JWT_SECRET, 3600)
}

pub fn leader_token(actor_id: &str) -> String {
    generate_access_token(actor_id, 2, JWT_SECRET, 3600)
}

/// Authenticated request builder; the rate limiter keys on the peer address.
pub fn authed(method: Method, uri: &str, token: &str) -> TestRequest {
    TestRequest::default()
        .method(method)
        .uri(uri)
        .peer_addr("127.0.0.1:8080".parse().unwrap())
        .insert_header(("Authorization", format!("Bearer {token}")))
}
