//! Post CRUD and query handlers.

use actix_web::{HttpResponse, web};

use postbox_core::domain::NewPost;
use postbox_shared::dto::{CreatePostRequest, PostIdResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /post/
///
/// The store performs no validation; malformed bodies, wrong content types
/// and unknown fields are rejected here by `web::Json` before it is called.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::debug!(author = %req.author, "Creating post");

    let id = state
        .store
        .create(NewPost {
            author: req.author,
            text: req.text,
            tags: req.tags.unwrap_or_default(),
            due: req.due,
        })
        .await?;

    Ok(HttpResponse::Ok().json(PostIdResponse { id }))
}

/// GET /post/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.store.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /post/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    state.store.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

/// GET /post/
pub async fn get_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.store.all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// DELETE /post/
pub async fn delete_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.store.delete_all().await?;
    Ok(HttpResponse::Ok().finish())
}

/// GET /tag/{tag}
pub async fn by_tag(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let posts = state.store.by_tag(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /due/{year}/{month}/{day}
pub async fn by_due(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32, u32)>,
) -> AppResult<HttpResponse> {
    let (year, month, day) = path.into_inner();

    // Month range is checked before the store is invoked.
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(format!(
            "expect month in 1..=12, got {month}"
        )));
    }

    let posts = state.store.by_due(year, month, day).await?;
    Ok(HttpResponse::Ok().json(posts))
}
