//! Comments API endpoints.
//!
//! List and append per-page comments. Comments are process-lifetime only;
//! there is no persistence layer behind this.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use docuapp_comments::Comment;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::to_nav_path;
use crate::state::AppState;

/// Response for GET /api/comments/{path}.
#[derive(Serialize)]
struct CommentListResponse {
    comments: Vec<Comment>,
}

/// Request body for POST /api/comments/{path}.
#[derive(Deserialize)]
pub(crate) struct AddCommentRequest {
    /// Free-text comment body.
    body: String,
}

/// Handle GET /api/comments/ (root page).
pub(crate) async fn list_root_comments(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    list_impl(String::new(), &state)
}

/// Handle GET /api/comments/{path}.
pub(crate) async fn list_comments(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    list_impl(path, &state)
}

/// Handle POST /api/comments/ (root page).
pub(crate) async fn add_root_comment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddCommentRequest>,
) -> Result<impl IntoResponse, ServerError> {
    add_impl(String::new(), &state, &request)
}

/// Handle POST /api/comments/{path}.
pub(crate) async fn add_comment(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddCommentRequest>,
) -> Result<impl IntoResponse, ServerError> {
    add_impl(path, &state, &request)
}

fn list_impl(path: String, state: &AppState) -> Json<CommentListResponse> {
    let comments = state.comments.list(&to_nav_path(&path));
    Json(CommentListResponse { comments })
}

fn add_impl(
    path: String,
    state: &AppState,
    request: &AddCommentRequest,
) -> Result<(StatusCode, Json<Comment>), ServerError> {
    let page = to_nav_path(&path);
    let comment = state
        .comments
        .add(&page, &request.body)
        .map_err(|e| ServerError::InvalidInput(e.to_string()))?;

    tracing::debug!(page = %page, id = %comment.id, "Comment added");
    Ok((StatusCode::CREATED, Json(comment)))
}
