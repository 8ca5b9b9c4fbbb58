//! Contact message endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{ContactMessage, CreateMessageRequest};
use crate::AppState;

/// GET /api/messages - List contact messages, newest first.
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<Vec<ContactMessage>> {
    let messages = state.repo.list_messages().await?;
    success(messages)
}

/// POST /api/messages - Submit a contact-form message.
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<CreateMessageRequest>,
) -> ApiResult<ContactMessage> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let message = state.repo.create_message(&request).await?;
    success(message)
}

/// PUT /api/messages/:id/read - Mark a message as read.
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ContactMessage> {
    let message = state.repo.mark_message_read(&id).await?;
    success(message)
}

/// DELETE /api/messages/:id - Delete a message.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_message(&id).await?;
    success(())
}
