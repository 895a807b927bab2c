use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CreateTeacherRequest, TeacherCoursesResponse, TeacherListQuery, TeacherListResponse,
    TeacherResponse, UpdateTeacherRequest, UpsertScheduleRequest,
};
use crate::entities::shared::StringList;
use crate::error::ApiError;
use crate::extractor::AuthUser;
use crate::repositories::course_repository::CourseRepository;
use crate::repositories::teacher_repository::TeacherRepository;
use crate::utils::pagination::{PageQuery, Pagination};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/teachers", post(create_teacher).get(list_teachers))
        .route(
            "/api/v1/teachers/{id}",
            get(get_teacher)
                .put(update_teacher)
                .delete(delete_teacher),
        )
        .route("/api/v1/teachers/{id}/schedule", post(upsert_schedule))
        .route("/api/v1/teachers/{id}/courses", get(teacher_courses))
}

#[utoipa::path(
    post,
    path = "/api/v1/teachers",
    request_body = CreateTeacherRequest,
    responses(
        (status = 201, description = "Teacher profile created", body = TeacherResponse),
        (status = 400, description = "Duplicate teacher code"),
        (status = 403, description = "Admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn create_teacher(
    AuthUser(actor): AuthUser,
    Json(payload): Json<CreateTeacherRequest>,
) -> Result<(StatusCode, Json<TeacherResponse>), ApiError> {
    if !actor.is_admin() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = TeacherRepository::new();
    if repo.find_by_user_id(payload.user_id).await?.is_some() {
        return Err(ApiError::bad_request("Teacher profile already exists"));
    }

    let teacher = repo
        .create(
            payload.user_id,
            payload.teacher_code,
            payload.qualification,
            payload.specialization,
            payload.experience_years,
            StringList(payload.subjects),
        )
        .await
        .map_err(|e| {
            if e.to_string().contains("duplicate") {
                ApiError::bad_request("Teacher code already in use")
            } else {
                ApiError::Internal(e)
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(TeacherResponse::from_parts(teacher, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/teachers",
    params(TeacherListQuery),
    responses(
        (status = 200, description = "Paginated teacher list", body = TeacherListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn list_teachers(
    AuthUser(_actor): AuthUser,
    Query(query): Query<TeacherListQuery>,
) -> Result<Json<TeacherListResponse>, ApiError> {
    let page_query = PageQuery {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(20),
    };
    let (page, limit) = page_query.normalized();

    let (teachers, total) = TeacherRepository::new()
        .find_all_with_pagination(page, limit, query.subject, query.search)
        .await?;

    Ok(Json(TeacherListResponse {
        data: teachers
            .into_iter()
            .map(|(t, u)| TeacherResponse::from_parts(t, u))
            .collect(),
        pagination: Pagination::new(&page_query, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher profile", body = TeacherResponse),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn get_teacher(
    AuthUser(_actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherResponse>, ApiError> {
    let (teacher, user) = TeacherRepository::new()
        .find_with_user(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Teacher not found"))?;
    Ok(Json(TeacherResponse::from_parts(teacher, user)))
}

#[utoipa::path(
    put,
    path = "/api/v1/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher id")),
    request_body = UpdateTeacherRequest,
    responses(
        (status = 200, description = "Teacher profile updated", body = TeacherResponse),
        (status = 403, description = "Admin or profile owner only"),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn update_teacher(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTeacherRequest>,
) -> Result<Json<TeacherResponse>, ApiError> {
    let repo = TeacherRepository::new();
    let mut teacher = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Teacher not found"))?;

    if !actor.is_admin() && teacher.user_id != actor.id {
        return Err(ApiError::forbidden("Access denied"));
    }

    if let Some(qualification) = payload.qualification {
        teacher.qualification = qualification;
    }
    if let Some(specialization) = payload.specialization {
        teacher.specialization = specialization;
    }
    if let Some(experience_years) = payload.experience_years {
        teacher.experience_years = experience_years;
    }
    if let Some(subjects) = payload.subjects {
        teacher.subjects = StringList(subjects);
    }

    let saved = repo.save(teacher).await?;
    Ok(Json(TeacherResponse::from_parts(saved, None)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher id")),
    responses(
        (status = 204, description = "Teacher removed"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn delete_teacher(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !actor.is_admin() {
        return Err(ApiError::forbidden("Access denied"));
    }
    let deleted = TeacherRepository::new().delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Teacher not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/teachers/{id}/schedule",
    params(("id" = Uuid, Path, description = "Teacher id")),
    request_body = UpsertScheduleRequest,
    responses(
        (status = 200, description = "Schedule updated", body = TeacherResponse),
        (status = 403, description = "Admin or profile owner only"),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn upsert_schedule(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertScheduleRequest>,
) -> Result<Json<TeacherResponse>, ApiError> {
    let repo = TeacherRepository::new();
    let mut teacher = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Teacher not found"))?;

    if !actor.is_admin() && teacher.user_id != actor.id {
        return Err(ApiError::forbidden("Access denied"));
    }

    let incoming = payload.day_schedule;
    match teacher
        .schedule
        .0
        .iter_mut()
        .find(|d| d.day.eq_ignore_ascii_case(&incoming.day))
    {
        Some(existing) => existing.periods = incoming.periods,
        None => teacher.schedule.0.push(incoming),
    }

    let saved = repo.save(teacher).await?;
    Ok(Json(TeacherResponse::from_parts(saved, None)))
}

#[utoipa::path(
    get,
    path = "/api/v1/teachers/{id}/courses",
    params(("id" = Uuid, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Courses taught by the teacher", body = TeacherCoursesResponse),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn teacher_courses(
    AuthUser(_actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherCoursesResponse>, ApiError> {
    let teacher = TeacherRepository::new()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Teacher not found"))?;
    let courses = CourseRepository::new()
        .find_by_teacher(teacher.teacher_id)
        .await?;
    Ok(Json(TeacherCoursesResponse { data: courses }))
}
