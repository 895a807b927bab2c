use axum::{
    Json, Router,
    extract::Path,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{CommentRequest, GpaResponse, GradeListResponse, UpsertScoreRequest};
use crate::entities::grade;
use crate::error::{ApiError, FieldError};
use crate::extractor::AuthUser;
use crate::grading::{GradeError, ScoreItem, compute_final_grade, compute_gpa};
use crate::repositories::grade_repository::GradeRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/grades/students/{student_id}", get(list_grades))
        .route(
            "/api/v1/grades/students/{student_id}/courses/{course_id}/{term}",
            get(get_grade),
        )
        .route(
            "/api/v1/grades/students/{student_id}/courses/{course_id}/assignments",
            post(upsert_assignment),
        )
        .route(
            "/api/v1/grades/students/{student_id}/courses/{course_id}/exams",
            post(upsert_exam),
        )
        .route(
            "/api/v1/grades/students/{student_id}/gpa/{term}/{academic_year}",
            get(get_gpa),
        )
        .route("/api/v1/grades/{grade_id}/comments", post(add_comment))
}

enum ScoreKind {
    Assignment,
    Exam,
}

/// Upserts the item by title into the selected list, recomputes the final
/// grade, and persists the whole record.
async fn upsert_score(
    actor: crate::access::Actor,
    student_id: Uuid,
    course_id: Uuid,
    kind: ScoreKind,
    payload: UpsertScoreRequest,
) -> Result<Json<grade::Model>, ApiError> {
    if !actor.is_admin() && !actor.is_teacher() {
        return Err(ApiError::forbidden("Access denied"));
    }
    if payload.max_score <= 0.0 {
        return Err(ApiError::validation(vec![FieldError::new(
            "max_score",
            "max_score must be greater than zero",
        )]));
    }

    let repo = GradeRepository::new();
    let mut record = match repo.find_one(student_id, course_id, &payload.term).await? {
        Some(record) => record,
        None => {
            repo.create(
                student_id,
                course_id,
                payload.term.clone(),
                payload.academic_year.clone(),
            )
            .await?
        }
    };

    let item = ScoreItem {
        title: payload.title,
        score: payload.score,
        max_score: payload.max_score,
        weight: payload.weight,
        date: payload.date,
    };

    let list = match kind {
        ScoreKind::Assignment => &mut record.assignments.0,
        ScoreKind::Exam => &mut record.exams.0,
    };
    match list.iter_mut().find(|existing| existing.title == item.title) {
        Some(existing) => *existing = item,
        None => list.push(item),
    }

    let (final_grade, letter) = compute_final_grade(&record.assignments.0, &record.exams.0)
        .map_err(|e| match e {
            GradeError::ZeroMaxScore { .. } => {
                ApiError::validation(vec![FieldError::new("max_score", &e.to_string())])
            }
        })?;
    record.final_grade = final_grade;
    record.letter_grade = Some(letter.to_string());

    let saved = repo.save(record).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    get,
    path = "/api/v1/grades/students/{student_id}",
    params(("student_id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "All grade records for the student", body = GradeListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn list_grades(
    AuthUser(_actor): AuthUser,
    Path(student_id): Path<Uuid>,
) -> Result<Json<GradeListResponse>, ApiError> {
    let records = GradeRepository::new().find_by_student(student_id).await?;
    Ok(Json(GradeListResponse { data: records }))
}

#[utoipa::path(
    get,
    path = "/api/v1/grades/students/{student_id}/courses/{course_id}/{term}",
    params(
        ("student_id" = Uuid, Path, description = "Student id"),
        ("course_id" = Uuid, Path, description = "Course id"),
        ("term" = String, Path, description = "Term")
    ),
    responses(
        (status = 200, description = "Grade record", body = grade::Model),
        (status = 404, description = "Grade record not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn get_grade(
    AuthUser(_actor): AuthUser,
    Path((student_id, course_id, term)): Path<(Uuid, Uuid, String)>,
) -> Result<Json<grade::Model>, ApiError> {
    let record = GradeRepository::new()
        .find_one(student_id, course_id, &term)
        .await?
        .ok_or_else(|| ApiError::not_found("Grade record not found"))?;
    Ok(Json(record))
}

#[utoipa::path(
    post,
    path = "/api/v1/grades/students/{student_id}/courses/{course_id}/assignments",
    params(
        ("student_id" = Uuid, Path, description = "Student id"),
        ("course_id" = Uuid, Path, description = "Course id")
    ),
    request_body = UpsertScoreRequest,
    responses(
        (status = 200, description = "Assignment recorded, final grade recomputed", body = grade::Model),
        (status = 400, description = "Invalid max_score"),
        (status = 403, description = "Teacher or admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn upsert_assignment(
    AuthUser(actor): AuthUser,
    Path((student_id, course_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpsertScoreRequest>,
) -> Result<Json<grade::Model>, ApiError> {
    upsert_score(actor, student_id, course_id, ScoreKind::Assignment, payload).await
}

#[utoipa::path(
    post,
    path = "/api/v1/grades/students/{student_id}/courses/{course_id}/exams",
    params(
        ("student_id" = Uuid, Path, description = "Student id"),
        ("course_id" = Uuid, Path, description = "Course id")
    ),
    request_body = UpsertScoreRequest,
    responses(
        (status = 200, description = "Exam recorded, final grade recomputed", body = grade::Model),
        (status = 400, description = "Invalid max_score"),
        (status = 403, description = "Teacher or admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn upsert_exam(
    AuthUser(actor): AuthUser,
    Path((student_id, course_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpsertScoreRequest>,
) -> Result<Json<grade::Model>, ApiError> {
    upsert_score(actor, student_id, course_id, ScoreKind::Exam, payload).await
}

#[utoipa::path(
    get,
    path = "/api/v1/grades/students/{student_id}/gpa/{term}/{academic_year}",
    params(
        ("student_id" = Uuid, Path, description = "Student id"),
        ("term" = String, Path, description = "Term"),
        ("academic_year" = String, Path, description = "Academic year")
    ),
    responses(
        (status = 200, description = "GPA for the term", body = GpaResponse),
        (status = 404, description = "No grades found for the specified term"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn get_gpa(
    AuthUser(_actor): AuthUser,
    Path((student_id, term, academic_year)): Path<(Uuid, String, String)>,
) -> Result<Json<GpaResponse>, ApiError> {
    let records = GradeRepository::new()
        .find_by_term(student_id, &term, &academic_year)
        .await?;

    let gpa = compute_gpa(records.iter().map(|g| g.letter()))
        .ok_or_else(|| ApiError::not_found("No grades found for the specified term"))?;

    Ok(Json(GpaResponse {
        term,
        academic_year,
        gpa,
        course_count: records.len(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/grades/{grade_id}/comments",
    params(("grade_id" = Uuid, Path, description = "Grade record id")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment saved", body = grade::Model),
        (status = 403, description = "Teacher or admin only"),
        (status = 404, description = "Grade record not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
pub async fn add_comment(
    AuthUser(actor): AuthUser,
    Path(grade_id): Path<Uuid>,
    Json(payload): Json<CommentRequest>,
) -> Result<Json<grade::Model>, ApiError> {
    if !actor.is_admin() && !actor.is_teacher() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = GradeRepository::new();
    let mut record = repo
        .find_by_id(grade_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Grade record not found"))?;
    record.comments = Some(payload.comments);

    let saved = repo.save(record).await?;
    Ok(Json(saved))
}
