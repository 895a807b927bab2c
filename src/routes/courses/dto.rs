use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::course::{self, CourseSchedule};
use crate::utils::pagination::Pagination;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CourseListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub grade: Option<String>,
    pub teacher_id: Option<Uuid>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub course_code: String,
    pub name: String,
    pub description: String,
    pub grade: String,
    pub teacher_id: Uuid,
    #[serde(default)]
    pub schedule: CourseSchedule,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub grade: Option<String>,
    pub teacher_id: Option<Uuid>,
    pub schedule: Option<CourseSchedule>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollRequest {
    pub student_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    pub data: Vec<course::Model>,
    pub pagination: Pagination,
}
