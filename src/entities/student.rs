//! `SeaORM` Entity for students table

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "students"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveModel, DeriveActiveModel, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub student_id: Uuid,
    pub user_id: Uuid,
    pub student_code: String,
    pub date_of_birth: Date,
    pub grade: String,
    pub section: String,
    pub parent_name: String,
    pub parent_contact: String,
    pub address: String,
    pub enrolled_courses: Enrollments,
    pub attendance: AttendanceLog,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
pub struct Enrollments(pub Vec<Enrollment>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Enrollment {
    pub course_id: Uuid,
    pub enrollment_date: DateTime,
    pub status: EnrollmentStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Dropped,
}

#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
pub struct AttendanceLog(pub Vec<AttendanceRecord>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    pub attendance_id: Uuid,
    pub course_id: Uuid,
    pub date: Date,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
    pub recorded_by: Uuid,
    pub updated_at: Option<DateTime>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    StudentId,
    UserId,
    StudentCode,
    DateOfBirth,
    Grade,
    Section,
    ParentName,
    ParentContact,
    Address,
    EnrolledCourses,
    Attendance,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    StudentId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::StudentId => ColumnType::Uuid.def(),
            Self::UserId => ColumnType::Uuid.def(),
            Self::StudentCode => ColumnType::String(StringLen::None).def().unique(),
            Self::DateOfBirth => ColumnType::Date.def(),
            Self::Grade => ColumnType::String(StringLen::None).def(),
            Self::Section => ColumnType::String(StringLen::None).def(),
            Self::ParentName => ColumnType::String(StringLen::None).def(),
            Self::ParentContact => ColumnType::String(StringLen::None).def(),
            Self::Address => ColumnType::String(StringLen::None).def(),
            Self::EnrolledCourses => ColumnType::Json.def(),
            Self::Attendance => ColumnType::Json.def(),
            Self::CreatedAt => ColumnType::DateTime.def(),
            Self::UpdatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(super::user::Entity)
                .from(Column::UserId)
                .to(super::user::Column::UserId)
                .into(),
        }
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
