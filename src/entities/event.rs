//! `SeaORM` Entity for events table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::shared::IdList;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "events"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveModel, DeriveActiveModel, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub event_id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime,
    pub location: Option<String>,
    pub event_type: Option<String>,
    pub organizer_id: Uuid,
    pub participant_ids: IdList,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    EventId,
    Title,
    Description,
    Date,
    Location,
    EventType,
    OrganizerId,
    ParticipantIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    EventId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organizer,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::EventId => ColumnType::Uuid.def(),
            Self::Title => ColumnType::String(StringLen::None).def(),
            Self::Description => ColumnType::String(StringLen::None).def(),
            Self::Date => ColumnType::DateTime.def(),
            Self::Location => ColumnType::String(StringLen::None).def().null(),
            Self::EventType => ColumnType::String(StringLen::None).def().null(),
            Self::OrganizerId => ColumnType::Uuid.def(),
            Self::ParticipantIds => ColumnType::Json.def(),
            Self::CreatedAt => ColumnType::DateTime.def(),
            Self::UpdatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Organizer => Entity::belongs_to(super::user::Entity)
                .from(Column::OrganizerId)
                .to(super::user::Column::UserId)
                .into(),
        }
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
