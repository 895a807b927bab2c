//! `SeaORM` Entity for courses table

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::shared::IdList;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "courses"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveModel, DeriveActiveModel, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub course_id: Uuid,
    pub course_code: String,
    pub name: String,
    pub description: String,
    pub grade: String,
    pub teacher_id: Uuid,
    pub schedule: CourseSchedule,
    pub student_ids: IdList,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
pub struct CourseSchedule(pub Vec<CourseSession>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseSession {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    CourseId,
    CourseCode,
    Name,
    Description,
    Grade,
    TeacherId,
    Schedule,
    StudentIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    CourseId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Teacher,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::CourseId => ColumnType::Uuid.def(),
            Self::CourseCode => ColumnType::String(StringLen::None).def().unique(),
            Self::Name => ColumnType::String(StringLen::None).def(),
            Self::Description => ColumnType::String(StringLen::None).def(),
            Self::Grade => ColumnType::String(StringLen::None).def(),
            Self::TeacherId => ColumnType::Uuid.def(),
            Self::Schedule => ColumnType::Json.def(),
            Self::StudentIds => ColumnType::Json.def(),
            Self::CreatedAt => ColumnType::DateTime.def(),
            Self::UpdatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Teacher => Entity::belongs_to(super::teacher::Entity)
                .from(Column::TeacherId)
                .to(super::teacher::Column::TeacherId)
                .into(),
        }
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
