use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::student::{self, AttendanceLog, EnrollmentStatus, Enrollments};
use crate::entities::user;
use crate::utils::pagination::Pagination;

#[derive(Debug, Deserialize, IntoParams)]
pub struct StudentListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub grade: Option<String>,
    pub section: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub user_id: Uuid,
    pub student_code: Option<String>,
    pub date_of_birth: chrono::NaiveDate,
    pub grade: String,
    pub section: String,
    pub parent_name: String,
    pub parent_contact: String,
    pub address: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub grade: Option<String>,
    pub section: Option<String>,
    pub parent_name: Option<String>,
    pub parent_contact: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollmentStatusRequest {
    pub status: EnrollmentStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub student_id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub student_code: String,
    pub date_of_birth: chrono::NaiveDate,
    pub grade: String,
    pub section: String,
    pub parent_name: String,
    pub parent_contact: String,
    pub address: String,
    pub enrolled_courses: Enrollments,
    pub attendance: AttendanceLog,
}

impl StudentResponse {
    pub fn from_parts(student: student::Model, user: Option<user::Model>) -> Self {
        let (name, email) = match user {
            Some(u) => (Some(u.full_name()), Some(u.email)),
            None => (None, None),
        };
        Self {
            student_id: student.student_id,
            user_id: student.user_id,
            name,
            email,
            student_code: student.student_code,
            date_of_birth: student.date_of_birth,
            grade: student.grade,
            section: student.section,
            parent_name: student.parent_name,
            parent_contact: student.parent_contact,
            address: student.address,
            enrolled_courses: student.enrolled_courses,
            attendance: student.attendance,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentListResponse {
    pub data: Vec<StudentResponse>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseAttendance {
    pub course_id: Uuid,
    pub course_name: Option<String>,
    pub total_classes: u64,
    pub present_classes: u64,
    pub attendance_percentage: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub student: StudentResponse,
    pub course_attendance: Vec<CourseAttendance>,
    pub gpa: Option<f64>,
    pub overall_attendance: f64,
}
