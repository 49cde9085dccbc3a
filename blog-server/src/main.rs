use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;

use blog_server::application::{AuthService, BlogService};
use blog_server::data::post_repository::PostgresPostRepository;
use blog_server::infrastructure::{
    database::{create_pool, run_migrations},
    logging::init_logging,
    session::{session_middleware, signing_key},
};
use blog_server::presentation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    init_logging();

    // Get configuration from environment, once at startup
    let port = std::env::var("PORT").unwrap_or_else(|_| "4000".to_string());
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let sign_key = std::env::var("COOKIE_SIGN_KEY").context("COOKIE_SIGN_KEY must be set")?;
    let admin_pass = std::env::var("ADMIN_PASS").context("ADMIN_PASS must be set")?;
    let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
        .unwrap_or_else(|_| "5".to_string())
        .parse()
        .unwrap_or(5);

    let addr = format!("0.0.0.0:{}", port);
    let cookie_key = signing_key(&sign_key)?;

    tracing::info!("Starting blog server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let pool = create_pool(&database_url, max_connections).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    run_migrations(&pool).await?;

    // Initialize services
    let post_repo = Arc::new(PostgresPostRepository::new(pool.clone()));
    let blog_service = Arc::new(BlogService::new(post_repo));
    let auth_service = Arc::new(AuthService::new(admin_pass));

    tracing::info!("Services initialized successfully");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(session_middleware(cookie_key.clone()))
            .app_data(web::Data::new(blog_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .configure(presentation::configure)
    })
    .bind(&addr)?
    .run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
