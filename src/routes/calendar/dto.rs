use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::calendar::{self, AttendeeStatus};
use crate::entities::sea_orm_active_enums::{
    CalendarType, CalendarVisibility, PriorityEnum, RoleEnum,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct CalendarListQuery {
    pub academic_year: Option<String>,
    pub term: Option<String>,
    pub calendar_type: Option<CalendarType>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCalendarRequest {
    pub name: String,
    pub description: Option<String>,
    pub calendar_type: CalendarType,
    pub academic_year: String,
    pub term: String,
    pub start_date: chrono::NaiveDateTime,
    pub end_date: chrono::NaiveDateTime,
    pub color: Option<String>,
    pub visibility: Option<CalendarVisibility>,
    #[serde(default)]
    pub allowed_roles: Vec<RoleEnum>,
    #[serde(default)]
    pub allowed_grades: Vec<String>,
    #[serde(default)]
    pub allowed_sections: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCalendarRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub calendar_type: Option<CalendarType>,
    pub start_date: Option<chrono::NaiveDateTime>,
    pub end_date: Option<chrono::NaiveDateTime>,
    pub color: Option<String>,
    pub visibility: Option<CalendarVisibility>,
    pub allowed_roles: Option<Vec<RoleEnum>>,
    pub allowed_grades: Option<Vec<String>>,
    pub allowed_sections: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCalendarEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub start_date: chrono::NaiveDateTime,
    pub end_date: chrono::NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
    pub location: Option<String>,
    pub category: Option<String>,
    pub priority: Option<PriorityEnum>,
    #[serde(default)]
    pub attendee_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCalendarEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<chrono::NaiveDateTime>,
    pub end_date: Option<chrono::NaiveDateTime>,
    pub all_day: Option<bool>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub priority: Option<PriorityEnum>,
}

/// Pending is not a valid response; the enum only admits the three
/// deliberate answers.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RespondStatus {
    Accepted,
    Declined,
    Tentative,
}

impl RespondStatus {
    pub fn as_attendee_status(self) -> AttendeeStatus {
        match self {
            Self::Accepted => AttendeeStatus::Accepted,
            Self::Declined => AttendeeStatus::Declined,
            Self::Tentative => AttendeeStatus::Tentative,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Tentative => "tentative",
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RespondRequest {
    pub status: RespondStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarListResponse {
    pub data: Vec<calendar::Model>,
}
