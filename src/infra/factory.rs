use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::repositories::{
    postgres_class_repo::PostgresClassRepo, postgres_client_repo::PostgresClientRepo,
    postgres_gym_repo::PostgresGymRepo, postgres_payment_repo::PostgresPaymentRepo,
    postgres_plan_repo::PostgresPlanRepo, postgres_role_repo::PostgresRoleRepo,
    postgres_schedule_repo::PostgresScheduleRepo, postgres_signup_repo::PostgresSignupRepo,
    sqlite_class_repo::SqliteClassRepo, sqlite_client_repo::SqliteClientRepo,
    sqlite_gym_repo::SqliteGymRepo, sqlite_payment_repo::SqlitePaymentRepo,
    sqlite_plan_repo::SqlitePlanRepo, sqlite_role_repo::SqliteRoleRepo,
    sqlite_schedule_repo::SqliteScheduleRepo, sqlite_signup_repo::SqliteSignupRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            gym_repo: Arc::new(PostgresGymRepo::new(pool.clone())),
            client_repo: Arc::new(PostgresClientRepo::new(pool.clone())),
            plan_repo: Arc::new(PostgresPlanRepo::new(pool.clone())),
            payment_repo: Arc::new(PostgresPaymentRepo::new(pool.clone())),
            class_repo: Arc::new(PostgresClassRepo::new(pool.clone())),
            signup_repo: Arc::new(PostgresSignupRepo::new(pool.clone())),
            schedule_repo: Arc::new(PostgresScheduleRepo::new(pool.clone())),
            role_repo: Arc::new(PostgresRoleRepo::new(pool)),
        }
    } else {
        info!("Initializing SQLite connection...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite URL")
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            gym_repo: Arc::new(SqliteGymRepo::new(pool.clone())),
            client_repo: Arc::new(SqliteClientRepo::new(pool.clone())),
            plan_repo: Arc::new(SqlitePlanRepo::new(pool.clone())),
            payment_repo: Arc::new(SqlitePaymentRepo::new(pool.clone())),
            class_repo: Arc::new(SqliteClassRepo::new(pool.clone())),
            signup_repo: Arc::new(SqliteSignupRepo::new(pool.clone())),
            schedule_repo: Arc::new(SqliteScheduleRepo::new(pool.clone())),
            role_repo: Arc::new(SqliteRoleRepo::new(pool)),
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
