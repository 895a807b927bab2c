//! `SeaORM` Entity for parents table

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::shared::IdList;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "parents"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveModel, DeriveActiveModel, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub parent_id: Uuid,
    pub user_id: Uuid,
    pub children: IdList,
    pub relationship: String,
    pub occupation: Option<String>,
    pub work_phone: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub address: Option<MailingAddress>,
    pub notification_preferences: NotificationPreferences,
    pub preferred_language: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
pub struct MailingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
    pub attendance: bool,
    pub grades: bool,
    pub events: bool,
    pub behavior: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            attendance: true,
            grades: true,
            events: true,
            behavior: true,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    ParentId,
    UserId,
    Children,
    Relationship,
    Occupation,
    WorkPhone,
    EmergencyContact,
    Address,
    NotificationPreferences,
    PreferredLanguage,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    ParentId,
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
            Self::ParentId => ColumnType::Uuid.def(),
            Self::UserId => ColumnType::Uuid.def(),
            Self::Children => ColumnType::Json.def(),
            Self::Relationship => ColumnType::String(StringLen::None).def(),
            Self::Occupation => ColumnType::String(StringLen::None).def().null(),
            Self::WorkPhone => ColumnType::String(StringLen::None).def().null(),
            Self::EmergencyContact => ColumnType::Json.def().null(),
            Self::Address => ColumnType::Json.def().null(),
            Self::NotificationPreferences => ColumnType::Json.def(),
            Self::PreferredLanguage => ColumnType::String(StringLen::None).def(),
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
