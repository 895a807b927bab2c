use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

use super::dto::{
    AnnouncementRequest, DeleteMessageResponse, MessageListQuery, MessageListResponse,
    SendMessageRequest,
};
use crate::access::{self, DeleteDisposition};
use crate::entities::message::{self, MessageRecipient, RecipientList};
use crate::entities::sea_orm_active_enums::{
    MessageCategory, MessageStatus, MessageType, PriorityEnum, RoleEnum,
};
use crate::error::ApiError;
use crate::extractor::AuthUser;
use crate::fanout::{self, DomainEvent};
use crate::repositories::message_repository::MessageRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::pagination::{PageQuery, Pagination};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/messages", post(send_message))
        .route("/api/v1/messages/inbox", get(inbox))
        .route("/api/v1/messages/sent", get(sent))
        .route(
            "/api/v1/messages/announcements",
            post(create_announcement).get(list_announcements),
        )
        .route(
            "/api/v1/messages/{id}",
            get(get_message).delete(delete_message),
        )
}

fn recipient_list(ids: &[Uuid]) -> RecipientList {
    RecipientList(
        ids.iter()
            .map(|&user_id| MessageRecipient {
                user_id,
                read_at: None,
                deleted_at: None,
            })
            .collect(),
    )
}

#[utoipa::path(
    post,
    path = "/api/v1/messages",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message sent", body = message::Model),
        (status = 400, description = "No valid recipients found"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn send_message(
    AuthUser(actor): AuthUser,
    Json(payload): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<message::Model>), ApiError> {
    let recipients = UserRepository::new()
        .find_many_by_ids(&payload.recipient_ids)
        .await?;
    if recipients.is_empty() {
        return Err(ApiError::bad_request("No valid recipients found"));
    }
    let recipient_ids: Vec<Uuid> = recipients.iter().map(|u| u.user_id).collect();

    let now = chrono::Utc::now().naive_utc();
    let priority = payload.priority.unwrap_or(PriorityEnum::Normal);
    let model = message::ActiveModel {
        message_id: Set(Uuid::new_v4()),
        sender_id: Set(actor.id),
        recipients: Set(recipient_list(&recipient_ids)),
        subject: Set(payload.subject.clone()),
        content: Set(payload.content),
        message_type: Set(MessageType::Direct),
        priority: Set(priority),
        category: Set(payload.category.unwrap_or(MessageCategory::General)),
        status: Set(MessageStatus::Sent),
        scheduled_for: Set(payload.scheduled_for),
        expires_at: Set(payload.expires_at),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let saved = MessageRepository::new().create(model).await?;

    fanout::dispatch(DomainEvent::MessageSent {
        message_id: saved.message_id,
        sender_id: actor.id,
        sender_name: actor.name.clone(),
        subject: payload.subject,
        priority,
        recipient_ids,
    })
    .await;

    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    get,
    path = "/api/v1/messages/inbox",
    params(MessageListQuery),
    responses(
        (status = 200, description = "Received messages", body = MessageListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn inbox(
    AuthUser(actor): AuthUser,
    Query(query): Query<MessageListQuery>,
) -> Result<Json<MessageListResponse>, ApiError> {
    let page_query = PageQuery {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(20),
    };
    let (page, limit) = page_query.normalized();

    let (messages, total) = MessageRepository::new()
        .find_inbox(actor.id, page, limit)
        .await?;

    Ok(Json(MessageListResponse {
        data: messages,
        pagination: Pagination::new(&page_query, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/messages/sent",
    params(MessageListQuery),
    responses(
        (status = 200, description = "Sent messages", body = MessageListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn sent(
    AuthUser(actor): AuthUser,
    Query(query): Query<MessageListQuery>,
) -> Result<Json<MessageListResponse>, ApiError> {
    let page_query = PageQuery {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(20),
    };
    let (page, limit) = page_query.normalized();

    let (messages, total) = MessageRepository::new()
        .find_sent(actor.id, page, limit)
        .await?;

    Ok(Json(MessageListResponse {
        data: messages,
        pagination: Pagination::new(&page_query, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/messages/{id}",
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message detail; marks the recipient copy read", body = message::Model),
        (status = 403, description = "Not a participant"),
        (status = 404, description = "Message not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn get_message(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<message::Model>, ApiError> {
    let repo = MessageRepository::new();
    let mut msg = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Message not found"))?;

    if !access::can_read_message(&actor, &msg) {
        return Err(ApiError::forbidden("Access denied"));
    }

    let mut needs_save = false;
    if let Some(copy) = msg.recipients.find_mut(actor.id) {
        if copy.read_at.is_none() {
            copy.read_at = Some(chrono::Utc::now().naive_utc());
            needs_save = true;
        }
    }
    if needs_save {
        msg = repo.save(msg).await?;
    }

    Ok(Json(msg))
}

#[utoipa::path(
    delete,
    path = "/api/v1/messages/{id}",
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 200, description = "Sender copy archived or recipient copy removed", body = DeleteMessageResponse),
        (status = 403, description = "Not a participant"),
        (status = 404, description = "Message not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn delete_message(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteMessageResponse>, ApiError> {
    let repo = MessageRepository::new();
    let mut msg = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Message not found"))?;

    match access::delete_disposition(&actor, &msg) {
        Some(DeleteDisposition::Sender) => {
            msg.status = MessageStatus::Archived;
            repo.save(msg).await?;
            Ok(Json(DeleteMessageResponse {
                message: "Message archived".to_string(),
            }))
        }
        Some(DeleteDisposition::Recipient) => {
            if let Some(copy) = msg.recipients.find_mut(actor.id) {
                copy.deleted_at = Some(chrono::Utc::now().naive_utc());
            }
            repo.save(msg).await?;
            Ok(Json(DeleteMessageResponse {
                message: "Message deleted".to_string(),
            }))
        }
        None => Err(ApiError::forbidden("Access denied")),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/messages/announcements",
    params(MessageListQuery),
    responses(
        (status = 200, description = "Sent announcements", body = MessageListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn list_announcements(
    AuthUser(_actor): AuthUser,
    Query(query): Query<MessageListQuery>,
) -> Result<Json<MessageListResponse>, ApiError> {
    let page_query = PageQuery {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(20),
    };
    let (page, limit) = page_query.normalized();

    let (messages, total) = MessageRepository::new()
        .find_announcements(page, limit)
        .await?;

    Ok(Json(MessageListResponse {
        data: messages,
        pagination: Pagination::new(&page_query, total),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/messages/announcements",
    request_body = AnnouncementRequest,
    responses(
        (status = 201, description = "Announcement broadcast", body = message::Model),
        (status = 400, description = "No recipients found for the specified filters"),
        (status = 403, description = "Admin or teacher only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Messages"
)]
pub async fn create_announcement(
    AuthUser(actor): AuthUser,
    Json(payload): Json<AnnouncementRequest>,
) -> Result<(StatusCode, Json<message::Model>), ApiError> {
    if !matches!(actor.role, RoleEnum::Admin | RoleEnum::Teacher) {
        return Err(ApiError::forbidden("Access denied"));
    }

    let audience = UserRepository::new()
        .find_by_audience(
            payload.role,
            payload.grade.as_deref(),
            payload.section.as_deref(),
        )
        .await?;
    let recipient_ids: Vec<Uuid> = audience
        .iter()
        .map(|u| u.user_id)
        .filter(|&id| id != actor.id)
        .collect();
    if recipient_ids.is_empty() {
        return Err(ApiError::bad_request(
            "No recipients found for the specified filters",
        ));
    }

    let now = chrono::Utc::now().naive_utc();
    let priority = payload.priority.unwrap_or(PriorityEnum::Normal);
    let model = message::ActiveModel {
        message_id: Set(Uuid::new_v4()),
        sender_id: Set(actor.id),
        recipients: Set(recipient_list(&recipient_ids)),
        subject: Set(payload.subject.clone()),
        content: Set(payload.content),
        message_type: Set(MessageType::Announcement),
        priority: Set(priority),
        category: Set(payload.category.unwrap_or(MessageCategory::General)),
        status: Set(MessageStatus::Sent),
        scheduled_for: Set(None),
        expires_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let saved = MessageRepository::new().create(model).await?;

    fanout::dispatch(DomainEvent::AnnouncementCreated {
        message_id: saved.message_id,
        sender_id: actor.id,
        subject: payload.subject,
        priority,
        recipient_ids,
    })
    .await;

    Ok((StatusCode::CREATED, Json(saved)))
}
