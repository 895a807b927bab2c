//! `SeaORM` Entity for teachers table

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::shared::{IdList, StringList};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "teachers"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveModel, DeriveActiveModel, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub teacher_id: Uuid,
    pub user_id: Uuid,
    pub teacher_code: String,
    pub qualification: String,
    pub specialization: String,
    pub experience_years: i32,
    pub subjects: StringList,
    pub schedule: WeeklySchedule,
    pub assigned_course_ids: IdList,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
pub struct WeeklySchedule(pub Vec<DaySchedule>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DaySchedule {
    pub day: String,
    pub periods: Vec<Period>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Period {
    pub course_id: Option<Uuid>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    TeacherId,
    UserId,
    TeacherCode,
    Qualification,
    Specialization,
    ExperienceYears,
    Subjects,
    Schedule,
    AssignedCourseIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    TeacherId,
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
            Self::TeacherId => ColumnType::Uuid.def(),
            Self::UserId => ColumnType::Uuid.def(),
            Self::TeacherCode => ColumnType::String(StringLen::None).def().unique(),
            Self::Qualification => ColumnType::String(StringLen::None).def(),
            Self::Specialization => ColumnType::String(StringLen::None).def(),
            Self::ExperienceYears => ColumnType::Integer.def(),
            Self::Subjects => ColumnType::Json.def(),
            Self::Schedule => ColumnType::Json.def(),
            Self::AssignedCourseIds => ColumnType::Json.def(),
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
