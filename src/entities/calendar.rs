//! `SeaORM` Entity for calendars table

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::sea_orm_active_enums::{CalendarType, CalendarVisibility, PriorityEnum, RoleEnum};
use super::shared::StringList;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "calendars"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub calendar_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub calendar_type: CalendarType,
    pub academic_year: String,
    pub term: String,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub color: String,
    pub visibility: CalendarVisibility,
    pub allowed_roles: RoleList,
    pub allowed_grades: StringList,
    pub allowed_sections: StringList,
    pub events: CalendarEvents,
    pub created_by: Uuid,
    pub last_modified_by: Option<Uuid>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
pub struct RoleList(pub Vec<RoleEnum>);

impl RoleList {
    pub fn contains(&self, role: RoleEnum) -> bool {
        self.0.contains(&role)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
pub struct CalendarEvents(pub Vec<CalendarEvent>);

impl CalendarEvents {
    pub fn find(&self, event_id: Uuid) -> Option<&CalendarEvent> {
        self.0.iter().find(|e| e.event_id == event_id)
    }

    pub fn find_mut(&mut self, event_id: Uuid) -> Option<&mut CalendarEvent> {
        self.0.iter_mut().find(|e| e.event_id == event_id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalendarEvent {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub all_day: bool,
    pub location: Option<String>,
    pub category: Option<String>,
    pub priority: PriorityEnum,
    pub status: EventStatus,
    pub attendees: Vec<Attendee>,
    pub created_by: Uuid,
    pub last_modified_by: Option<Uuid>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Cancelled,
    Postponed,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Attendee {
    pub user_id: Uuid,
    pub status: AttendeeStatus,
    pub response_date: Option<DateTime>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendeeStatus {
    Pending,
    Accepted,
    Declined,
    Tentative,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    CalendarId,
    Name,
    Description,
    CalendarType,
    AcademicYear,
    Term,
    StartDate,
    EndDate,
    Color,
    Visibility,
    AllowedRoles,
    AllowedGrades,
    AllowedSections,
    Events,
    CreatedBy,
    LastModifiedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    CalendarId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::CalendarId => ColumnType::Uuid.def(),
            Self::Name => ColumnType::String(StringLen::None).def(),
            Self::Description => ColumnType::String(StringLen::None).def().null(),
            Self::CalendarType => CalendarType::db_type(),
            Self::AcademicYear => ColumnType::String(StringLen::None).def(),
            Self::Term => ColumnType::String(StringLen::None).def(),
            Self::StartDate => ColumnType::DateTime.def(),
            Self::EndDate => ColumnType::DateTime.def(),
            Self::Color => ColumnType::String(StringLen::None).def(),
            Self::Visibility => CalendarVisibility::db_type(),
            Self::AllowedRoles => ColumnType::Json.def(),
            Self::AllowedGrades => ColumnType::Json.def(),
            Self::AllowedSections => ColumnType::Json.def(),
            Self::Events => ColumnType::Json.def(),
            Self::CreatedBy => ColumnType::Uuid.def(),
            Self::LastModifiedBy => ColumnType::Uuid.def().null(),
            Self::CreatedAt => ColumnType::DateTime.def(),
            Self::UpdatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef")
    }
}

impl ActiveModelBehavior for ActiveModel {}
