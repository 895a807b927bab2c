//! `SeaORM` Entity for grades table

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::grading::{LetterGrade, ScoreItem};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "grades"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub grade_id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub term: String,
    pub academic_year: String,
    pub assignments: ScoreItems,
    pub exams: ScoreItems,
    pub final_grade: f64,
    pub letter_grade: Option<String>,
    pub comments: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Model {
    pub fn letter(&self) -> Option<LetterGrade> {
        self.letter_grade.as_deref().and_then(|s| s.parse().ok())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
pub struct ScoreItems(pub Vec<ScoreItem>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    GradeId,
    StudentId,
    CourseId,
    Term,
    AcademicYear,
    Assignments,
    Exams,
    FinalGrade,
    LetterGrade,
    Comments,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    GradeId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
    Course,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::GradeId => ColumnType::Uuid.def(),
            Self::StudentId => ColumnType::Uuid.def(),
            Self::CourseId => ColumnType::Uuid.def(),
            Self::Term => ColumnType::String(StringLen::None).def(),
            Self::AcademicYear => ColumnType::String(StringLen::None).def(),
            Self::Assignments => ColumnType::Json.def(),
            Self::Exams => ColumnType::Json.def(),
            Self::FinalGrade => ColumnType::Double.def(),
            Self::LetterGrade => ColumnType::String(StringLen::None).def().null(),
            Self::Comments => ColumnType::String(StringLen::None).def().null(),
            Self::CreatedAt => ColumnType::DateTime.def(),
            Self::UpdatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Student => Entity::belongs_to(super::student::Entity)
                .from(Column::StudentId)
                .to(super::student::Column::StudentId)
                .into(),
            Self::Course => Entity::belongs_to(super::course::Entity)
                .from(Column::CourseId)
                .to(super::course::Column::CourseId)
                .into(),
        }
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
