use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CalendarListQuery, CalendarListResponse, CreateCalendarEventRequest, CreateCalendarRequest,
    RespondRequest, UpdateCalendarEventRequest, UpdateCalendarRequest,
};
use crate::access::{can_modify_calendar, can_modify_event, can_view_calendar, find_attendee};
use crate::entities::calendar::{
    self, Attendee, AttendeeStatus, CalendarEvent, EventStatus, RoleList,
};
use crate::entities::sea_orm_active_enums::{CalendarVisibility, PriorityEnum};
use crate::entities::shared::StringList;
use crate::error::{ApiError, FieldError};
use crate::extractor::AuthUser;
use crate::fanout::{self, DomainEvent};
use crate::repositories::calendar_repository::CalendarRepository;
use sea_orm::ActiveValue::Set;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/calendar", post(create_calendar).get(list_calendars))
        .route(
            "/api/v1/calendar/{calendar_id}",
            get(get_calendar)
                .put(update_calendar)
                .delete(delete_calendar),
        )
        .route(
            "/api/v1/calendar/{calendar_id}/events",
            post(create_event),
        )
        .route(
            "/api/v1/calendar/{calendar_id}/events/{event_id}",
            axum::routing::put(update_event).delete(delete_event),
        )
        .route(
            "/api/v1/calendar/{calendar_id}/events/{event_id}/respond",
            post(respond_to_event),
        )
}

fn validate_date_range(
    start: chrono::NaiveDateTime,
    end: chrono::NaiveDateTime,
) -> Result<(), ApiError> {
    if start >= end {
        return Err(ApiError::validation(vec![FieldError::new(
            "end_date",
            "end_date must be after start_date",
        )]));
    }
    Ok(())
}

async fn load_calendar(calendar_id: Uuid) -> Result<calendar::Model, ApiError> {
    CalendarRepository::new()
        .find_by_id(calendar_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Calendar not found"))
}

#[utoipa::path(
    post,
    path = "/api/v1/calendar",
    request_body = CreateCalendarRequest,
    responses(
        (status = 201, description = "Calendar created", body = calendar::Model),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Admin or teacher only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Calendar"
)]
pub async fn create_calendar(
    AuthUser(actor): AuthUser,
    Json(payload): Json<CreateCalendarRequest>,
) -> Result<(StatusCode, Json<calendar::Model>), ApiError> {
    if !actor.is_admin() && !actor.is_teacher() {
        return Err(ApiError::forbidden("Admin or teacher access required"));
    }

    let mut errors = vec![];
    if payload.name.trim().is_empty() {
        errors.push(FieldError::new("name", "name is required"));
    }
    if payload.academic_year.trim().is_empty() {
        errors.push(FieldError::new("academic_year", "academic_year is required"));
    }
    if payload.term.trim().is_empty() {
        errors.push(FieldError::new("term", "term is required"));
    }
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }
    validate_date_range(payload.start_date, payload.end_date)?;

    let now = chrono::Utc::now().naive_utc();
    let model = calendar::ActiveModel {
        calendar_id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        description: Set(payload.description),
        calendar_type: Set(payload.calendar_type),
        academic_year: Set(payload.academic_year),
        term: Set(payload.term),
        start_date: Set(payload.start_date),
        end_date: Set(payload.end_date),
        color: Set(payload.color.unwrap_or_else(|| "#1976d2".to_string())),
        visibility: Set(payload.visibility.unwrap_or(CalendarVisibility::Public)),
        allowed_roles: Set(RoleList(payload.allowed_roles)),
        allowed_grades: Set(StringList(payload.allowed_grades)),
        allowed_sections: Set(StringList(payload.allowed_sections)),
        events: Set(Default::default()),
        created_by: Set(actor.id),
        last_modified_by: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let created = CalendarRepository::new().create(model).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/calendar",
    params(CalendarListQuery),
    responses(
        (status = 200, description = "Calendars visible to the caller", body = CalendarListResponse),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Calendar"
)]
pub async fn list_calendars(
    AuthUser(actor): AuthUser,
    Query(query): Query<CalendarListQuery>,
) -> Result<Json<CalendarListResponse>, ApiError> {
    let calendars = CalendarRepository::new()
        .find_all(query.academic_year, query.term)
        .await?;

    let data = calendars
        .into_iter()
        .filter(|c| can_view_calendar(&actor, c))
        .filter(|c| {
            query
                .calendar_type
                .is_none_or(|wanted| c.calendar_type == wanted)
        })
        .collect();
    Ok(Json(CalendarListResponse { data }))
}

#[utoipa::path(
    get,
    path = "/api/v1/calendar/{calendar_id}",
    params(("calendar_id" = Uuid, Path, description = "Calendar id")),
    responses(
        (status = 200, description = "Calendar detail", body = calendar::Model),
        (status = 403, description = "Calendar not visible to the caller"),
        (status = 404, description = "Calendar not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Calendar"
)]
pub async fn get_calendar(
    AuthUser(actor): AuthUser,
    Path(calendar_id): Path<Uuid>,
) -> Result<Json<calendar::Model>, ApiError> {
    let calendar = load_calendar(calendar_id).await?;
    if !can_view_calendar(&actor, &calendar) {
        return Err(ApiError::forbidden("Not authorized to view this calendar"));
    }
    Ok(Json(calendar))
}

#[utoipa::path(
    put,
    path = "/api/v1/calendar/{calendar_id}",
    params(("calendar_id" = Uuid, Path, description = "Calendar id")),
    request_body = UpdateCalendarRequest,
    responses(
        (status = 200, description = "Calendar updated", body = calendar::Model),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Admin or creator only"),
        (status = 404, description = "Calendar not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Calendar"
)]
pub async fn update_calendar(
    AuthUser(actor): AuthUser,
    Path(calendar_id): Path<Uuid>,
    Json(payload): Json<UpdateCalendarRequest>,
) -> Result<Json<calendar::Model>, ApiError> {
    let mut calendar = load_calendar(calendar_id).await?;
    if !can_modify_calendar(&actor, &calendar) {
        return Err(ApiError::forbidden("Not authorized to modify this calendar"));
    }

    if let Some(name) = payload.name {
        calendar.name = name;
    }
    if payload.description.is_some() {
        calendar.description = payload.description;
    }
    if let Some(calendar_type) = payload.calendar_type {
        calendar.calendar_type = calendar_type;
    }
    if let Some(start_date) = payload.start_date {
        calendar.start_date = start_date;
    }
    if let Some(end_date) = payload.end_date {
        calendar.end_date = end_date;
    }
    validate_date_range(calendar.start_date, calendar.end_date)?;
    if let Some(color) = payload.color {
        calendar.color = color;
    }
    if let Some(visibility) = payload.visibility {
        calendar.visibility = visibility;
    }
    if let Some(allowed_roles) = payload.allowed_roles {
        calendar.allowed_roles = RoleList(allowed_roles);
    }
    if let Some(allowed_grades) = payload.allowed_grades {
        calendar.allowed_grades = StringList(allowed_grades);
    }
    if let Some(allowed_sections) = payload.allowed_sections {
        calendar.allowed_sections = StringList(allowed_sections);
    }
    calendar.last_modified_by = Some(actor.id);

    let saved = CalendarRepository::new().save(calendar).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    delete,
    path = "/api/v1/calendar/{calendar_id}",
    params(("calendar_id" = Uuid, Path, description = "Calendar id")),
    responses(
        (status = 204, description = "Calendar deleted"),
        (status = 403, description = "Admin or creator only"),
        (status = 404, description = "Calendar not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Calendar"
)]
pub async fn delete_calendar(
    AuthUser(actor): AuthUser,
    Path(calendar_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let calendar = load_calendar(calendar_id).await?;
    if !can_modify_calendar(&actor, &calendar) {
        return Err(ApiError::forbidden("Not authorized to modify this calendar"));
    }
    CalendarRepository::new().delete(calendar_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/calendar/{calendar_id}/events",
    params(("calendar_id" = Uuid, Path, description = "Calendar id")),
    request_body = CreateCalendarEventRequest,
    responses(
        (status = 201, description = "Event added to the calendar", body = calendar::Model),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Admin or creator only"),
        (status = 404, description = "Calendar not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Calendar"
)]
pub async fn create_event(
    AuthUser(actor): AuthUser,
    Path(calendar_id): Path<Uuid>,
    Json(payload): Json<CreateCalendarEventRequest>,
) -> Result<(StatusCode, Json<calendar::Model>), ApiError> {
    let mut calendar = load_calendar(calendar_id).await?;
    if !can_modify_calendar(&actor, &calendar) {
        return Err(ApiError::forbidden("Not authorized to modify this calendar"));
    }
    if payload.title.trim().is_empty() {
        return Err(ApiError::validation(vec![FieldError::new(
            "title",
            "title is required",
        )]));
    }
    validate_date_range(payload.start_date, payload.end_date)?;

    let priority = payload.priority.unwrap_or(PriorityEnum::Normal);
    let attendee_ids = payload.attendee_ids.clone();
    let event = CalendarEvent {
        event_id: Uuid::new_v4(),
        title: payload.title,
        description: payload.description,
        start_date: payload.start_date,
        end_date: payload.end_date,
        all_day: payload.all_day,
        location: payload.location,
        category: payload.category,
        priority,
        status: EventStatus::Scheduled,
        attendees: attendee_ids
            .iter()
            .map(|&user_id| Attendee {
                user_id,
                status: AttendeeStatus::Pending,
                response_date: None,
            })
            .collect(),
        created_by: actor.id,
        last_modified_by: None,
    };
    let event_id = event.event_id;
    let title = event.title.clone();
    calendar.events.0.push(event);

    let saved = CalendarRepository::new().save(calendar).await?;
    fanout::dispatch(DomainEvent::EventCreated {
        calendar_id,
        event_id,
        title,
        priority,
        attendee_ids,
    })
    .await;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put,
    path = "/api/v1/calendar/{calendar_id}/events/{event_id}",
    params(
        ("calendar_id" = Uuid, Path, description = "Calendar id"),
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    request_body = UpdateCalendarEventRequest,
    responses(
        (status = 200, description = "Event updated", body = calendar::Model),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Admin, calendar creator, or event creator only"),
        (status = 404, description = "Calendar or event not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Calendar"
)]
pub async fn update_event(
    AuthUser(actor): AuthUser,
    Path((calendar_id, event_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateCalendarEventRequest>,
) -> Result<Json<calendar::Model>, ApiError> {
    let mut calendar = load_calendar(calendar_id).await?;

    let event = calendar
        .events
        .find(event_id)
        .ok_or_else(|| ApiError::not_found("Event not found"))?;
    if !can_modify_event(&actor, &calendar, event) {
        return Err(ApiError::forbidden("Not authorized to modify this event"));
    }

    let event = calendar
        .events
        .find_mut(event_id)
        .ok_or_else(|| ApiError::not_found("Event not found"))?;
    if let Some(title) = payload.title {
        event.title = title;
    }
    if payload.description.is_some() {
        event.description = payload.description;
    }
    if let Some(start_date) = payload.start_date {
        event.start_date = start_date;
    }
    if let Some(end_date) = payload.end_date {
        event.end_date = end_date;
    }
    validate_date_range(event.start_date, event.end_date)?;
    if let Some(all_day) = payload.all_day {
        event.all_day = all_day;
    }
    if payload.location.is_some() {
        event.location = payload.location;
    }
    if payload.category.is_some() {
        event.category = payload.category;
    }
    if let Some(priority) = payload.priority {
        event.priority = priority;
    }
    event.last_modified_by = Some(actor.id);

    let title = event.title.clone();
    let attendee_ids: Vec<Uuid> = event.attendees.iter().map(|a| a.user_id).collect();

    let saved = CalendarRepository::new().save(calendar).await?;
    fanout::dispatch(DomainEvent::EventUpdated {
        calendar_id,
        event_id,
        title,
        attendee_ids,
    })
    .await;
    Ok(Json(saved))
}

#[utoipa::path(
    delete,
    path = "/api/v1/calendar/{calendar_id}/events/{event_id}",
    params(
        ("calendar_id" = Uuid, Path, description = "Calendar id"),
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event removed", body = calendar::Model),
        (status = 403, description = "Admin, calendar creator, or event creator only"),
        (status = 404, description = "Calendar or event not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Calendar"
)]
pub async fn delete_event(
    AuthUser(actor): AuthUser,
    Path((calendar_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<calendar::Model>, ApiError> {
    let mut calendar = load_calendar(calendar_id).await?;

    let event = calendar
        .events
        .find(event_id)
        .ok_or_else(|| ApiError::not_found("Event not found"))?;
    if !can_modify_event(&actor, &calendar, event) {
        return Err(ApiError::forbidden("Not authorized to modify this event"));
    }

    // Attendees must be captured before the entry is dropped.
    let title = event.title.clone();
    let attendee_ids: Vec<Uuid> = event.attendees.iter().map(|a| a.user_id).collect();
    calendar.events.0.retain(|e| e.event_id != event_id);

    let saved = CalendarRepository::new().save(calendar).await?;
    fanout::dispatch(DomainEvent::EventCancelled {
        calendar_id,
        event_id,
        title,
        attendee_ids,
    })
    .await;
    Ok(Json(saved))
}

#[utoipa::path(
    post,
    path = "/api/v1/calendar/{calendar_id}/events/{event_id}/respond",
    params(
        ("calendar_id" = Uuid, Path, description = "Calendar id"),
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    request_body = RespondRequest,
    responses(
        (status = 200, description = "Response recorded", body = calendar::Model),
        (status = 403, description = "Caller is not an attendee of the event"),
        (status = 404, description = "Calendar or event not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Calendar"
)]
pub async fn respond_to_event(
    AuthUser(actor): AuthUser,
    Path((calendar_id, event_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<RespondRequest>,
) -> Result<Json<calendar::Model>, ApiError> {
    let mut calendar = load_calendar(calendar_id).await?;

    let event = calendar
        .events
        .find_mut(event_id)
        .ok_or_else(|| ApiError::not_found("Event not found"))?;
    if find_attendee(event, actor.id).is_none() {
        return Err(ApiError::forbidden(
            "Only invited attendees can respond to this event",
        ));
    }

    let attendee = event
        .attendees
        .iter_mut()
        .find(|a| a.user_id == actor.id)
        .ok_or_else(|| ApiError::not_found("Attendee not found"))?;
    attendee.status = payload.status.as_attendee_status();
    attendee.response_date = Some(chrono::Utc::now().naive_utc());

    let title = event.title.clone();
    let creator_id = event.created_by;

    let saved = CalendarRepository::new().save(calendar).await?;
    fanout::dispatch(DomainEvent::EventResponse {
        calendar_id,
        event_id,
        title,
        responder_name: actor.name.clone(),
        response_status: payload.status.as_str().to_string(),
        creator_id,
    })
    .await;
    Ok(Json(saved))
}
