#![allow(clippy::print_stdout, clippy::unwrap_used, clippy::expect_used)]

//! Huddle server binary.
//!
//! Wires the SQLite row store, the HTTP identity provider and the axum
//! routes into one process.
//!
//! Environment variables:
//!   APP_BASE_URL=https://huddle.example.com  (invite-link base, default http://localhost:8080)
//!   BIND_ADDR=127.0.0.1:8080
//!   DATABASE_URL=sqlite:./huddle.db          (defaults to in-memory)
//!   IDENTITY_URL=http://localhost:9999       (external identity service)
//!   INVITE_TOKEN_LENGTH=32
//!
//! Test endpoints:
//!   curl -X POST http://localhost:8080/projects \
//!     -H "Authorization: Bearer <token>" \
//!     -H "Content-Type: application/json" \
//!     -d '{"name": "Alpha", "details": "first project"}'

use axum::routing::get;
use axum::Router;
use huddle::api::axum::{project_routes, AppState};
use huddle::config::AppConfig;
use huddle::identity::HttpIdentityProvider;
use huddle::sqlite::{
    create_repositories, migrations, SqliteProjectMemberRepository, SqliteProjectRepository,
};
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to create pool");

    // Run migrations
    migrations::run(&pool)
        .await
        .expect("Failed to run migrations");

    let (project_repo, member_repo) = create_repositories(pool);

    let identity = HttpIdentityProvider::new(&config.identity_url)
        .expect("Failed to create identity provider");

    let state = AppState {
        identity,
        project_repo,
        member_repo,
        config: config.clone(),
    };

    let app = Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .nest(
            "/projects",
            project_routes::<
                HttpIdentityProvider,
                SqliteProjectRepository,
                SqliteProjectMemberRepository,
            >(),
        )
        .with_state(state);

    println!("Starting huddle server on http://{}", config.bind_addr);
    println!("Database: {}", config.database_url);
    println!("Identity service: {}", config.identity_url);
    println!("Endpoints:");
    println!("  POST /projects              - Create project");
    println!("  GET  /projects              - List my projects");
    println!("  GET  /projects/:id/invite   - Invite link (owner only)");
    println!("  POST /projects/join/:token  - Join by invite token");

    let listener = TcpListener::bind(&config.bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
