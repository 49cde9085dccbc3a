pub mod guards;
pub mod http_handlers;

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};

/// Route table plus payload error handlers, shared by `main` and the
/// integration tests so both run the exact same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api/auth")
                .route("/login", web::post().to(http_handlers::login))
                .route("/logout", web::post().to(http_handlers::logout))
                .route("/check", web::get().to(http_handlers::check)),
        )
        .service(
            web::scope("/api/posts")
                .route("", web::get().to(http_handlers::list_posts))
                .route("", web::post().to(http_handlers::create_post))
                .route("/{id}", web::get().to(http_handlers::read_post))
                .route("/{id}", web::patch().to(http_handlers::update_post))
                .route("/{id}", web::delete().to(http_handlers::delete_post)),
        );
}

// Malformed bodies and query strings get the same structured 400 shape as
// domain validation failures.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(serde_json::json!({ "error": detail }));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(serde_json::json!({ "error": detail }));
    InternalError::from_response(err, response).into()
}
