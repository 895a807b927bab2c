use axum::{
    Json, Router,
    extract::{Path, Query},
    routing::{get, post, put},
};
use uuid::Uuid;

use super::dto::{
    AffectedResponse, BulkDeleteRequest, NotificationListQuery, NotificationListResponse,
    PreferencesResponse,
};
use crate::entities::notification;
use crate::entities::sea_orm_active_enums::NotificationStatus;
use crate::error::ApiError;
use crate::extractor::AuthUser;
use crate::repositories::notification_repository::NotificationRepository;
use crate::repositories::parent_repository::ParentRepository;
use crate::utils::pagination::{PageQuery, Pagination};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/notifications", get(list_notifications))
        .route("/api/v1/notifications/read-all", put(mark_all_read))
        .route("/api/v1/notifications/delete", post(bulk_delete))
        .route(
            "/api/v1/notifications/preferences",
            get(get_preferences).put(update_preferences),
        )
        .route("/api/v1/notifications/{id}/read", put(mark_read))
        .route("/api/v1/notifications/{id}/archive", put(archive))
}

async fn load_own_notification(
    repo: &NotificationRepository,
    actor_id: Uuid,
    id: Uuid,
) -> Result<notification::Model, ApiError> {
    let item = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Notification not found"))?;
    if item.recipient_id != actor_id {
        return Err(ApiError::forbidden("Access denied"));
    }
    Ok(item)
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    params(NotificationListQuery),
    responses(
        (status = 200, description = "Notifications for the caller", body = NotificationListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn list_notifications(
    AuthUser(actor): AuthUser,
    Query(query): Query<NotificationListQuery>,
) -> Result<Json<NotificationListResponse>, ApiError> {
    let page_query = PageQuery {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(20),
    };
    let (page, limit) = page_query.normalized();

    let repo = NotificationRepository::new();
    let (notifications, total) = repo
        .find_by_recipient(actor.id, query.status, page, limit)
        .await?;
    let unread_count = repo.count_unread(actor.id).await?;

    Ok(Json(NotificationListResponse {
        data: notifications,
        unread_count,
        pagination: Pagination::new(&page_query, total),
    }))
}

#[utoipa::path(
    put,
    path = "/api/v1/notifications/{id}/read",
    params(("id" = Uuid, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Marked read", body = notification::Model),
        (status = 400, description = "Notification is archived"),
        (status = 403, description = "Not the recipient"),
        (status = 404, description = "Notification not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn mark_read(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<notification::Model>, ApiError> {
    let repo = NotificationRepository::new();
    let mut item = load_own_notification(&repo, actor.id, id).await?;

    match item.status {
        NotificationStatus::Archived => {
            return Err(ApiError::bad_request("Notification is archived"));
        }
        NotificationStatus::Read => return Ok(Json(item)),
        NotificationStatus::Unread => {
            item.status = NotificationStatus::Read;
            item.read_at = Some(chrono::Utc::now().naive_utc());
        }
    }

    let saved = repo.save(item).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    put,
    path = "/api/v1/notifications/read-all",
    responses(
        (status = 200, description = "All unread notifications marked read", body = AffectedResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn mark_all_read(AuthUser(actor): AuthUser) -> Result<Json<AffectedResponse>, ApiError> {
    let affected = NotificationRepository::new().mark_all_read(actor.id).await?;
    Ok(Json(AffectedResponse { affected }))
}

#[utoipa::path(
    put,
    path = "/api/v1/notifications/{id}/archive",
    params(("id" = Uuid, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Archived", body = notification::Model),
        (status = 403, description = "Not the recipient"),
        (status = 404, description = "Notification not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn archive(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<notification::Model>, ApiError> {
    let repo = NotificationRepository::new();
    let mut item = load_own_notification(&repo, actor.id, id).await?;

    if item.status == NotificationStatus::Archived {
        return Ok(Json(item));
    }
    item.status = NotificationStatus::Archived;
    item.archived_at = Some(chrono::Utc::now().naive_utc());

    let saved = repo.save(item).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications/delete",
    request_body = BulkDeleteRequest,
    responses(
        (status = 200, description = "Own notifications archived", body = AffectedResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn bulk_delete(
    AuthUser(actor): AuthUser,
    Json(payload): Json<BulkDeleteRequest>,
) -> Result<Json<AffectedResponse>, ApiError> {
    let affected = NotificationRepository::new()
        .archive_many(actor.id, &payload.notification_ids)
        .await?;
    Ok(Json(AffectedResponse { affected }))
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications/preferences",
    responses(
        (status = 200, description = "Notification preferences", body = PreferencesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn get_preferences(
    AuthUser(actor): AuthUser,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let preferences = ParentRepository::new()
        .find_by_user_id(actor.id)
        .await?
        .map(|p| p.notification_preferences)
        .unwrap_or_default();
    Ok(Json(PreferencesResponse { preferences }))
}

#[utoipa::path(
    put,
    path = "/api/v1/notifications/preferences",
    request_body = PreferencesResponse,
    responses(
        (status = 200, description = "Preferences updated", body = PreferencesResponse),
        (status = 404, description = "No preference profile"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn update_preferences(
    AuthUser(actor): AuthUser,
    Json(payload): Json<PreferencesResponse>,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let repo = ParentRepository::new();
    let mut parent = repo
        .find_by_user_id(actor.id)
        .await?
        .ok_or_else(|| ApiError::not_found("No preference profile"))?;
    parent.notification_preferences = payload.preferences;

    let saved = repo.save(parent).await?;
    Ok(Json(PreferencesResponse {
        preferences: saved.notification_preferences,
    }))
}
