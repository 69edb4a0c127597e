use gym_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_class_repo::SqliteClassRepo,
        sqlite_client_repo::SqliteClientRepo,
        sqlite_gym_repo::SqliteGymRepo,
        sqlite_payment_repo::SqlitePaymentRepo,
        sqlite_plan_repo::SqlitePlanRepo,
        sqlite_role_repo::SqliteRoleRepo,
        sqlite_schedule_repo::SqliteScheduleRepo,
        sqlite_signup_repo::SqliteSignupRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            gym_repo: Arc::new(SqliteGymRepo::new(pool.clone())),
            client_repo: Arc::new(SqliteClientRepo::new(pool.clone())),
            plan_repo: Arc::new(SqlitePlanRepo::new(pool.clone())),
            payment_repo: Arc::new(SqlitePaymentRepo::new(pool.clone())),
            class_repo: Arc::new(SqliteClassRepo::new(pool.clone())),
            signup_repo: Arc::new(SqliteSignupRepo::new(pool.clone())),
            schedule_repo: Arc::new(SqliteScheduleRepo::new(pool.clone())),
            role_repo: Arc::new(SqliteRoleRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> axum::response::Response {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };

        self.router.clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    /// Creates a gym and returns its id.
    pub async fn create_gym(&self, slug: &str) -> String {
        let res = self.request(
            "POST",
            "/api/v1/gyms",
            Some(serde_json::json!({"name": format!("Gym {}", slug), "slug": slug})),
        ).await;
        assert!(res.status().is_success(), "gym creation failed: {}", res.status());
        parse_body(res).await["id"].as_str().unwrap().to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
