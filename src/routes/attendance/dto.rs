use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::student::{AttendanceRecord, AttendanceStatus};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordAttendanceRequest {
    pub course_id: Uuid,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAttendanceRequest {
    pub status: Option<AttendanceStatus>,
    pub remarks: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceResponse {
    pub student_id: Uuid,
    pub data: Vec<AttendanceRecord>,
}
