use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post, put},
};
use uuid::Uuid;

use super::dto::{AttendanceResponse, RecordAttendanceRequest, UpdateAttendanceRequest};
use crate::entities::student::AttendanceRecord;
use crate::error::ApiError;
use crate::extractor::AuthUser;
use crate::repositories::student_repository::StudentRepository;

pub fn create_route() -> Router {
    Router::new()
        .route(
            "/api/v1/attendance/students/{student_id}",
            post(record_attendance).get(get_attendance),
        )
        .route(
            "/api/v1/attendance/students/{student_id}/{attendance_id}",
            put(update_attendance),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/attendance/students/{student_id}",
    params(("student_id" = Uuid, Path, description = "Student id")),
    request_body = RecordAttendanceRequest,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceResponse),
        (status = 400, description = "Duplicate record for course and date"),
        (status = 403, description = "Teacher or admin only"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn record_attendance(
    AuthUser(actor): AuthUser,
    Path(student_id): Path<Uuid>,
    Json(payload): Json<RecordAttendanceRequest>,
) -> Result<(StatusCode, Json<AttendanceResponse>), ApiError> {
    if !actor.is_admin() && !actor.is_teacher() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = StudentRepository::new();
    let mut student = repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    let duplicate = student
        .attendance
        .0
        .iter()
        .any(|a| a.course_id == payload.course_id && a.date == payload.date);
    if duplicate {
        return Err(ApiError::bad_request(
            "Attendance already recorded for this course and date",
        ));
    }

    student.attendance.0.push(AttendanceRecord {
        attendance_id: Uuid::new_v4(),
        course_id: payload.course_id,
        date: payload.date,
        status: payload.status,
        remarks: payload.remarks,
        recorded_by: actor.id,
        updated_at: None,
    });

    let saved = repo.save(student).await?;
    Ok((
        StatusCode::CREATED,
        Json(AttendanceResponse {
            student_id: saved.student_id,
            data: saved.attendance.0,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/attendance/students/{student_id}",
    params(("student_id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "Attendance history", body = AttendanceResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn get_attendance(
    AuthUser(_actor): AuthUser,
    Path(student_id): Path<Uuid>,
) -> Result<Json<AttendanceResponse>, ApiError> {
    let student = StudentRepository::new()
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;
    Ok(Json(AttendanceResponse {
        student_id: student.student_id,
        data: student.attendance.0,
    }))
}

#[utoipa::path(
    put,
    path = "/api/v1/attendance/students/{student_id}/{attendance_id}",
    params(
        ("student_id" = Uuid, Path, description = "Student id"),
        ("attendance_id" = Uuid, Path, description = "Attendance record id")
    ),
    request_body = UpdateAttendanceRequest,
    responses(
        (status = 200, description = "Attendance record updated", body = AttendanceResponse),
        (status = 403, description = "Teacher or admin only"),
        (status = 404, description = "Student or record not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn update_attendance(
    AuthUser(actor): AuthUser,
    Path((student_id, attendance_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateAttendanceRequest>,
) -> Result<Json<AttendanceResponse>, ApiError> {
    if !actor.is_admin() && !actor.is_teacher() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = StudentRepository::new();
    let mut student = repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    let record = student
        .attendance
        .0
        .iter_mut()
        .find(|a| a.attendance_id == attendance_id)
        .ok_or_else(|| ApiError::not_found("Attendance record not found"))?;

    if let Some(status) = payload.status {
        record.status = status;
    }
    if payload.remarks.is_some() {
        record.remarks = payload.remarks;
    }
    record.updated_at = Some(chrono::Utc::now().naive_utc());

    let saved = repo.save(student).await?;
    Ok(Json(AttendanceResponse {
        student_id: saved.student_id,
        data: saved.attendance.0,
    }))
}
