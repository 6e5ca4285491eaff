//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use corkboard_core::domain::Post;
use corkboard_shared::dto::{
    CreatePostRequest, DeletePostRequest, PostResponse, UpdatePostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts - all posts, newest first.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input before touching the store
    if req.title.is_empty() || req.content.is_empty() || req.author.is_empty() || req.password.is_empty()
    {
        return Err(AppError::BadRequest(
            "title, content, author and password are all required".to_string(),
        ));
    }

    let sealed = state
        .secrets
        .seal(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let post = Post::new(req.title, req.content, req.author, sealed);
    let saved = state.posts.insert(post).await?;

    Ok(HttpResponse::Created().json(to_response(saved)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.find_by_id(id).await?.ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if req.password.is_empty() {
        return Err(AppError::BadRequest("password is required".to_string()));
    }

    let mut post = state.posts.find_by_id(id).await?.ok_or_else(not_found)?;
    post.authorize(state.secrets.as_ref(), &req.password)?;
    post.edit(req.title, req.content)?;

    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(to_response(saved)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<DeletePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if req.password.is_empty() {
        return Err(AppError::BadRequest("password is required".to_string()));
    }

    let post = state.posts.find_by_id(id).await?.ok_or_else(not_found)?;
    post.authorize(state.secrets.as_ref(), &req.password)?;

    state.posts.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

fn not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.map(|t| t.to_rfc3339()),
    }
}
