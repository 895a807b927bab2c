use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{CreateEventRequest, EventListQuery, EventListResponse, UpdateEventRequest};
use crate::entities::event;
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::ApiError;
use crate::extractor::AuthUser;
use crate::repositories::event_repository::EventRepository;
use crate::utils::pagination::{PageQuery, Pagination};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/events", post(create_event).get(list_events))
        .route(
            "/api/v1/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/api/v1/events/{id}/register", post(register))
        .route("/api/v1/events/{id}/unregister", post(unregister))
}

#[utoipa::path(
    post,
    path = "/api/v1/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = event::Model),
        (status = 403, description = "Admin or teacher only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Events"
)]
pub async fn create_event(
    AuthUser(actor): AuthUser,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<event::Model>), ApiError> {
    if !matches!(actor.role, RoleEnum::Admin | RoleEnum::Teacher) {
        return Err(ApiError::forbidden("Access denied"));
    }

    let event = EventRepository::new()
        .create(
            payload.title,
            payload.description,
            payload.date,
            payload.location,
            payload.event_type,
            actor.id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    get,
    path = "/api/v1/events",
    params(EventListQuery),
    responses(
        (status = 200, description = "Paginated event list", body = EventListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Events"
)]
pub async fn list_events(
    AuthUser(_actor): AuthUser,
    Query(query): Query<EventListQuery>,
) -> Result<Json<EventListResponse>, ApiError> {
    let page_query = PageQuery {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(20),
    };
    let (page, limit) = page_query.normalized();

    let (events, total) = EventRepository::new()
        .find_all_with_pagination(page, limit, query.event_type, query.upcoming)
        .await?;

    Ok(Json(EventListResponse {
        data: events,
        pagination: Pagination::new(&page_query, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event detail", body = event::Model),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Events"
)]
pub async fn get_event(
    AuthUser(_actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<event::Model>, ApiError> {
    let event = EventRepository::new()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;
    Ok(Json(event))
}

#[utoipa::path(
    put,
    path = "/api/v1/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated", body = event::Model),
        (status = 403, description = "Admin or organizer only"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Events"
)]
pub async fn update_event(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<Json<event::Model>, ApiError> {
    let repo = EventRepository::new();
    let mut event = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    if !actor.is_admin() && event.organizer_id != actor.id {
        return Err(ApiError::forbidden("Access denied"));
    }

    if let Some(title) = payload.title {
        event.title = title;
    }
    if let Some(description) = payload.description {
        event.description = description;
    }
    if let Some(date) = payload.date {
        event.date = date;
    }
    if payload.location.is_some() {
        event.location = payload.location;
    }
    if payload.event_type.is_some() {
        event.event_type = payload.event_type;
    }

    let saved = repo.save(event).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    delete,
    path = "/api/v1/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 204, description = "Event removed"),
        (status = 403, description = "Admin or organizer only"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Events"
)]
pub async fn delete_event(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = EventRepository::new();
    let event = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    if !actor.is_admin() && event.organizer_id != actor.id {
        return Err(ApiError::forbidden("Access denied"));
    }

    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/register",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Registered", body = event::Model),
        (status = 400, description = "Already registered"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Events"
)]
pub async fn register(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<event::Model>, ApiError> {
    let repo = EventRepository::new();
    let mut event = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    if event.participant_ids.contains(actor.id) {
        return Err(ApiError::bad_request("Already registered for event"));
    }
    event.participant_ids.0.push(actor.id);

    let saved = repo.save(event).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/unregister",
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Unregistered", body = event::Model),
        (status = 400, description = "Not registered"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Events"
)]
pub async fn unregister(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<event::Model>, ApiError> {
    let repo = EventRepository::new();
    let mut event = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    if !event.participant_ids.contains(actor.id) {
        return Err(ApiError::bad_request("Not registered for event"));
    }
    event.participant_ids.0.retain(|&p| p != actor.id);

    let saved = repo.save(event).await?;
    Ok(Json(saved))
}
