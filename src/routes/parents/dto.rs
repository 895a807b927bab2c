use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::event;
use crate::entities::grade;
use crate::entities::parent::{EmergencyContact, MailingAddress, NotificationPreferences};
use crate::entities::student::AttendanceRecord;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateParentProfileRequest {
    pub relationship: Option<String>,
    pub occupation: Option<String>,
    pub work_phone: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub address: Option<MailingAddress>,
    pub preferred_language: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LinkChildRequest {
    pub student_code: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNotificationsRequest {
    pub notifications: NotificationPreferences,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChildInfo {
    pub user_id: Uuid,
    pub name: String,
    pub grade: Option<String>,
    pub section: Option<String>,
    pub student_code: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceSummary {
    pub total: u64,
    pub present: u64,
    pub absent: u64,
    pub late: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChildProgress {
    pub student: ChildInfo,
    pub attendance: AttendanceSummary,
    pub recent_grades: Vec<grade::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChildReport {
    pub student: ChildInfo,
    pub attendance: Vec<AttendanceRecord>,
    pub grades: Vec<grade::Model>,
    pub upcoming_events: Vec<event::Model>,
}
