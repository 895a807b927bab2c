use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CourseAttendance, CreateStudentRequest, DashboardResponse, EnrollmentStatusRequest,
    StudentListQuery, StudentListResponse, StudentResponse, UpdateStudentRequest,
};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::student::{AttendanceStatus, Enrollment, EnrollmentStatus};
use crate::error::ApiError;
use crate::extractor::AuthUser;
use crate::grading::compute_gpa;
use crate::repositories::course_repository::CourseRepository;
use crate::repositories::grade_repository::GradeRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::utils::pagination::{PageQuery, Pagination};
use crate::utils::student_code::generate_student_code;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/students", post(create_student).get(list_students))
        .route("/api/v1/students/dashboard", get(dashboard))
        .route(
            "/api/v1/students/{id}",
            get(get_student).put(update_student),
        )
        .route(
            "/api/v1/students/{id}/courses/{course_id}",
            post(enroll_course).put(update_enrollment_status),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student profile created", body = StudentResponse),
        (status = 400, description = "Duplicate student code"),
        (status = 403, description = "Admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn create_student(
    AuthUser(actor): AuthUser,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    if !actor.is_admin() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = StudentRepository::new();
    let student_code = payload
        .student_code
        .unwrap_or_else(generate_student_code);

    if repo.find_by_user_id(payload.user_id).await?.is_some() {
        return Err(ApiError::bad_request("Student profile already exists"));
    }

    let student = repo
        .create(
            payload.user_id,
            student_code,
            payload.date_of_birth,
            payload.grade,
            payload.section,
            payload.parent_name,
            payload.parent_contact,
            payload.address,
        )
        .await
        .map_err(|e| {
            if e.to_string().contains("duplicate") {
                ApiError::bad_request("Student code already in use")
            } else {
                ApiError::Internal(e)
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(StudentResponse::from_parts(student, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/students",
    params(StudentListQuery),
    responses(
        (status = 200, description = "Paginated student list", body = StudentListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn list_students(
    AuthUser(_actor): AuthUser,
    Query(query): Query<StudentListQuery>,
) -> Result<Json<StudentListResponse>, ApiError> {
    let page_query = PageQuery {
        page: query.page.unwrap_or(1),
        limit: query.limit.unwrap_or(20),
    };
    let (page, limit) = page_query.normalized();

    let (students, total) = StudentRepository::new()
        .find_all_with_pagination(page, limit, query.grade, query.section, query.search)
        .await?;

    Ok(Json(StudentListResponse {
        data: students
            .into_iter()
            .map(|(s, u)| StudentResponse::from_parts(s, u))
            .collect(),
        pagination: Pagination::new(&page_query, total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/dashboard",
    responses(
        (status = 200, description = "Dashboard for the calling student", body = DashboardResponse),
        (status = 403, description = "Student only"),
        (status = 404, description = "Student profile not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn dashboard(AuthUser(actor): AuthUser) -> Result<Json<DashboardResponse>, ApiError> {
    if actor.role != RoleEnum::Student {
        return Err(ApiError::forbidden("Access denied"));
    }

    let student = StudentRepository::new()
        .find_by_user_id(actor.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    let course_ids: Vec<Uuid> = student
        .enrolled_courses
        .0
        .iter()
        .map(|e| e.course_id)
        .collect();
    let courses = CourseRepository::new().find_many_by_ids(&course_ids).await?;

    let course_attendance: Vec<CourseAttendance> = student
        .enrolled_courses
        .0
        .iter()
        .map(|enrollment| {
            let records: Vec<_> = student
                .attendance
                .0
                .iter()
                .filter(|a| a.course_id == enrollment.course_id)
                .collect();
            let total = records.len() as u64;
            let present = records
                .iter()
                .filter(|a| a.status == AttendanceStatus::Present)
                .count() as u64;
            let percentage = if total > 0 {
                present as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            CourseAttendance {
                course_id: enrollment.course_id,
                course_name: courses
                    .iter()
                    .find(|c| c.course_id == enrollment.course_id)
                    .map(|c| c.name.clone()),
                total_classes: total,
                present_classes: present,
                attendance_percentage: percentage,
            }
        })
        .collect();

    let total_records = student.attendance.0.len() as u64;
    let total_present = student
        .attendance
        .0
        .iter()
        .filter(|a| a.status == AttendanceStatus::Present)
        .count() as u64;
    let overall_attendance = if total_records > 0 {
        total_present as f64 / total_records as f64 * 100.0
    } else {
        0.0
    };

    let grades = GradeRepository::new()
        .find_by_student(student.student_id)
        .await?;
    let gpa = compute_gpa(grades.iter().map(|g| g.letter()));

    Ok(Json(DashboardResponse {
        student: StudentResponse::from_parts(student, None),
        course_attendance,
        gpa,
        overall_attendance,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    params(("id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student profile", body = StudentResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_student(
    AuthUser(_actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentResponse>, ApiError> {
    let (student, user) = StudentRepository::new()
        .find_with_user(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;
    Ok(Json(StudentResponse::from_parts(student, user)))
}

#[utoipa::path(
    put,
    path = "/api/v1/students/{id}",
    params(("id" = Uuid, Path, description = "Student id")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student profile updated", body = StudentResponse),
        (status = 403, description = "Admin or profile owner only"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn update_student(
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let repo = StudentRepository::new();
    let mut student = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    if !actor.is_admin() && student.user_id != actor.id {
        return Err(ApiError::forbidden("Access denied"));
    }

    if let Some(date_of_birth) = payload.date_of_birth {
        student.date_of_birth = date_of_birth;
    }
    if let Some(grade) = payload.grade {
        student.grade = grade;
    }
    if let Some(section) = payload.section {
        student.section = section;
    }
    if let Some(parent_name) = payload.parent_name {
        student.parent_name = parent_name;
    }
    if let Some(parent_contact) = payload.parent_contact {
        student.parent_contact = parent_contact;
    }
    if let Some(address) = payload.address {
        student.address = address;
    }

    let saved = repo.save(student).await?;
    Ok(Json(StudentResponse::from_parts(saved, None)))
}

#[utoipa::path(
    post,
    path = "/api/v1/students/{id}/courses/{course_id}",
    params(
        ("id" = Uuid, Path, description = "Student id"),
        ("course_id" = Uuid, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Enrolled", body = StudentResponse),
        (status = 400, description = "Already enrolled"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Student or course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn enroll_course(
    AuthUser(actor): AuthUser,
    Path((id, course_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<StudentResponse>, ApiError> {
    if !actor.is_admin() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let student_repo = StudentRepository::new();
    let course_repo = CourseRepository::new();

    let mut student = student_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;
    let mut course = course_repo
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    if student
        .enrolled_courses
        .0
        .iter()
        .any(|e| e.course_id == course_id)
    {
        return Err(ApiError::bad_request("Student already enrolled in course"));
    }

    student.enrolled_courses.0.push(Enrollment {
        course_id,
        enrollment_date: chrono::Utc::now().naive_utc(),
        status: EnrollmentStatus::Active,
    });
    let saved = student_repo.save(student).await?;

    if !course.student_ids.contains(saved.student_id) {
        course.student_ids.0.push(saved.student_id);
        course_repo.save(course).await?;
    }

    Ok(Json(StudentResponse::from_parts(saved, None)))
}

#[utoipa::path(
    put,
    path = "/api/v1/students/{id}/courses/{course_id}",
    params(
        ("id" = Uuid, Path, description = "Student id"),
        ("course_id" = Uuid, Path, description = "Course id")
    ),
    request_body = EnrollmentStatusRequest,
    responses(
        (status = 200, description = "Enrollment status updated", body = StudentResponse),
        (status = 403, description = "Admin or teacher only"),
        (status = 404, description = "Enrollment not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn update_enrollment_status(
    AuthUser(actor): AuthUser,
    Path((id, course_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<EnrollmentStatusRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    if !actor.is_admin() && !actor.is_teacher() {
        return Err(ApiError::forbidden("Access denied"));
    }

    let repo = StudentRepository::new();
    let mut student = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    let enrollment = student
        .enrolled_courses
        .0
        .iter_mut()
        .find(|e| e.course_id == course_id)
        .ok_or_else(|| ApiError::not_found("Enrollment not found"))?;
    enrollment.status = payload.status;

    let saved = repo.save(student).await?;
    Ok(Json(StudentResponse::from_parts(saved, None)))
}
