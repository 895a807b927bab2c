use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CourseListQuery, CourseListResponse, CreateCourseRequest, EnrollRequest, UpdateCourseRequest,
};
use crate::entities::course;
use crate::error::ApiError;
use crate::extractor::AuthUser;
use crate::repositories::course_repository::CourseRepository;
use crate::repositories::teacher_repository::TeacherRepository;
use crate::utils::pagination::{PageQuery, Pagination};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/courses", post(create_course).get(list_courses))
        .route(
            "/api/v1/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route("/api/v1/courses/{id}/enroll", post(enroll_student))
        .route("/api/v1/courses/{id}/unenroll", post(unenroll_student))
}

/// Keeps the owning teacher's assigned course list in sync with the
/// course row.
async fn assign_to_teacher(teacher_id: Uuid, course_id: Uuid) -> Result<(), ApiError> {
    let repo = TeacherRepository::new();
    if let Some(mut teacher) = repo.find_by_id(teacher_id).await? {
        if !teacher.assigned_course_ids.contains(course_id) {
            teacher.assigned_course_ids.0.push(course_id);
            repo.save(teacher).await?;
        }
    }
    Ok(())
}

async fn unassign_from_teacher(teacher_id: Uuid, course_id: Uuid) -> Result<(), ApiError> {
    let repo = TeacherRepository::new();
    if let Some(mut teacher) = repo.find_by_id(teacher_id).await? {
        let before = teacher.assigned_course_ids.0.len();
        teacher.assigned_course_ids.0.retain(|&id| id != course_id);
        if teacher.assigned_course_ids.0.len() != before {
            repo.save(teacher).await?;
        }
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/v1/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = course::Model),
        (status = 400, description = "Duplicate course code"),
        (status = 403, description = "Admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn create_course(
    AuthUser(actor): AuthUser,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<course::Model>), ApiError> {
    if !actor.is_admin() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = CourseRepository::new();
    if repo.find_by_code(&payload.course_code).await?.is_some() {
        return Err(ApiError::bad_request("Course code already in use"));
    }

    let course = repo
        .create(
            payload.course_code,
            payload.name,
            payload.description,
            payload.grade,
            payload.teacher_id,
            payload.schedule,
        )
        .await?;

    assign_to_teacher(course.teacher_id, course.course_id).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses",
    params(CourseListQuery),
    responses(
        (status = 200, description = "Paginated course list", body = CourseListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn list_courses(
    AuthUser(_actor): AuthUser,
    Query(query): Query<CourseListQuery>,
) -> Result<Json<CourseListResponse>, ApiError> {
    let page_query = PageQuery {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(20),
    };
    let (page, limit) = page_query.normalized();

    let (courses, total) = CourseRepository::new()
        .find_all_with_pagination(page, limit, query.grade, query.teacher_id, query.search)
        .await?;

    Ok(Json(CourseListResponse {
        data: courses,
        pagination: Pagination::new(&page_query, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course detail", body = course::Model),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn get_course(
    AuthUser(_actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<course::Model>, ApiError> {
    let course = CourseRepository::new()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;
    Ok(Json(course))
}

#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = course::Model),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn update_course(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourseRequest>,
) -> Result<Json<course::Model>, ApiError> {
    if !actor.is_admin() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = CourseRepository::new();
    let mut course = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    let previous_teacher = course.teacher_id;
    if let Some(name) = payload.name {
        course.name = name;
    }
    if let Some(description) = payload.description {
        course.description = description;
    }
    if let Some(grade) = payload.grade {
        course.grade = grade;
    }
    if let Some(teacher_id) = payload.teacher_id {
        course.teacher_id = teacher_id;
    }
    if let Some(schedule) = payload.schedule {
        course.schedule = schedule;
    }

    let saved = repo.save(course).await?;

    if saved.teacher_id != previous_teacher {
        unassign_from_teacher(previous_teacher, saved.course_id).await?;
        assign_to_teacher(saved.teacher_id, saved.course_id).await?;
    }

    Ok(Json(saved))
}

#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course removed"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn delete_course(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !actor.is_admin() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = CourseRepository::new();
    let course = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    unassign_from_teacher(course.teacher_id, course.course_id).await?;
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/courses/{id}/enroll",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = EnrollRequest,
    responses(
        (status = 200, description = "Student enrolled", body = course::Model),
        (status = 400, description = "Already enrolled"),
        (status = 403, description = "Admin or teacher only"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn enroll_student(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EnrollRequest>,
) -> Result<Json<course::Model>, ApiError> {
    if !actor.is_admin() && !actor.is_teacher() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = CourseRepository::new();
    let mut course = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    if course.student_ids.contains(payload.student_id) {
        return Err(ApiError::bad_request("Student already enrolled in course"));
    }
    course.student_ids.0.push(payload.student_id);

    let saved = repo.save(course).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    post,
    path = "/api/v1/courses/{id}/unenroll",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = EnrollRequest,
    responses(
        (status = 200, description = "Student unenrolled", body = course::Model),
        (status = 400, description = "Not enrolled"),
        (status = 403, description = "Admin or teacher only"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn unenroll_student(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EnrollRequest>,
) -> Result<Json<course::Model>, ApiError> {
    if !actor.is_admin() && !actor.is_teacher() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = CourseRepository::new();
    let mut course = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    if !course.student_ids.contains(payload.student_id) {
        return Err(ApiError::bad_request("Student is not enrolled in course"));
    }
    course.student_ids.0.retain(|&s| s != payload.student_id);

    let saved = repo.save(course).await?;
    Ok(Json(saved))
}
