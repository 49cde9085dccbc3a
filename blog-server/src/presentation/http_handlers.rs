use crate::application::{AuthService, BlogService};
use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::domain::DomainError;
use actix_session::Session;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use super::guards::{parse_post_id, require_login, LOGGED_KEY};

#[derive(serde::Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub tag: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

fn error_to_response(err: DomainError) -> HttpResponse {
    let status_code = err.to_status_code();
    let message = err.to_string();

    match status_code {
        400 => HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        401 => HttpResponse::Unauthorized().json(serde_json::json!({ "error": message })),
        404 => HttpResponse::NotFound().json(serde_json::json!({ "error": message })),
        _ => {
            // Never leak driver detail to clients.
            tracing::error!("Request failed: {}", message);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Internal server error" }))
        }
    }
}

// ============== Auth Handlers ==============

pub async fn login(
    auth_service: web::Data<Arc<AuthService>>,
    session: Session,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    if let Err(err) = auth_service.login(&req.password) {
        return error_to_response(err);
    }

    if let Err(e) = session.insert(LOGGED_KEY, true) {
        return error_to_response(DomainError::InternalError(format!(
            "session write failed: {}",
            e
        )));
    }
    session.renew();

    HttpResponse::Ok().json(serde_json::json!({ "logged": true }))
}

pub async fn logout(session: Session) -> impl Responder {
    session.purge();
    HttpResponse::NoContent().finish()
}

pub async fn check(session: Session) -> impl Responder {
    match require_login(&session) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "logged": true })),
        Err(err) => error_to_response(err),
    }
}

// ============== Post Handlers ==============

pub async fn create_post(
    blog_service: web::Data<Arc<BlogService>>,
    session: Session,
    post_data: web::Json<CreatePostRequest>,
) -> impl Responder {
    if let Err(err) = require_login(&session) {
        return error_to_response(err);
    }

    match blog_service.create_post(post_data.into_inner()).await {
        Ok(post) => HttpResponse::Created().json(post),
        Err(err) => error_to_response(err),
    }
}

pub async fn list_posts(
    blog_service: web::Data<Arc<BlogService>>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let page = query.page.unwrap_or(1);

    tracing::debug!("Listing posts: page={}, tag={:?}", page, query.tag);

    match blog_service.list_posts(page, query.tag.as_deref()).await {
        Ok((posts, last_page)) => HttpResponse::Ok()
            .insert_header(("Last-Page", last_page.to_string()))
            .json(posts),
        Err(err) => error_to_response(err),
    }
}

pub async fn read_post(
    blog_service: web::Data<Arc<BlogService>>,
    path: web::Path<String>,
) -> impl Responder {
    let post_id = match parse_post_id(&path) {
        Ok(id) => id,
        Err(err) => return error_to_response(err),
    };

    match blog_service.get_post(post_id).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_to_response(err),
    }
}

pub async fn update_post(
    blog_service: web::Data<Arc<BlogService>>,
    session: Session,
    path: web::Path<String>,
    post_data: web::Json<UpdatePostRequest>,
) -> impl Responder {
    if let Err(err) = require_login(&session) {
        return error_to_response(err);
    }

    let post_id = match parse_post_id(&path) {
        Ok(id) => id,
        Err(err) => return error_to_response(err),
    };

    match blog_service
        .update_post(post_id, post_data.into_inner())
        .await
    {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_to_response(err),
    }
}

pub async fn delete_post(
    blog_service: web::Data<Arc<BlogService>>,
    session: Session,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(err) = require_login(&session) {
        return error_to_response(err);
    }

    let post_id = match parse_post_id(&path) {
        Ok(id) => id,
        Err(err) => return error_to_response(err),
    };

    match blog_service.delete_post(post_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_to_response(err),
    }
}
