use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::course;
use crate::entities::shared::{IdList, StringList};
use crate::entities::teacher::{self, DaySchedule, WeeklySchedule};
use crate::entities::user;
use crate::utils::pagination::Pagination;

#[derive(Debug, Deserialize, IntoParams)]
pub struct TeacherListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub subject: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTeacherRequest {
    pub user_id: Uuid,
    pub teacher_code: String,
    pub qualification: String,
    pub specialization: String,
    pub experience_years: i32,
    pub subjects: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTeacherRequest {
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub subjects: Option<Vec<String>>,
}

/// Upserts one weekday's period list into the weekly schedule.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertScheduleRequest {
    #[serde(flatten)]
    pub day_schedule: DaySchedule,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherResponse {
    pub teacher_id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub teacher_code: String,
    pub qualification: String,
    pub specialization: String,
    pub experience_years: i32,
    pub subjects: StringList,
    pub schedule: WeeklySchedule,
    pub assigned_course_ids: IdList,
}

impl TeacherResponse {
    pub fn from_parts(teacher: teacher::Model, user: Option<user::Model>) -> Self {
        let (name, email) = match user {
            Some(u) => (Some(u.full_name()), Some(u.email)),
            None => (None, None),
        };
        Self {
            teacher_id: teacher.teacher_id,
            user_id: teacher.user_id,
            name,
            email,
            teacher_code: teacher.teacher_code,
            qualification: teacher.qualification,
            specialization: teacher.specialization,
            experience_years: teacher.experience_years,
            subjects: teacher.subjects,
            schedule: teacher.schedule,
            assigned_course_ids: teacher.assigned_course_ids,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherListResponse {
    pub data: Vec<TeacherResponse>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherCoursesResponse {
    pub data: Vec<course::Model>,
}
