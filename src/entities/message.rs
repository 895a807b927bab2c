//! `SeaORM` Entity for messages table

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::sea_orm_active_enums::{MessageCategory, MessageStatus, MessageType, PriorityEnum};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "messages"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub message_id: Uuid,
    pub sender_id: Uuid,
    pub recipients: RecipientList,
    pub subject: String,
    pub content: String,
    pub message_type: MessageType,
    pub priority: PriorityEnum,
    pub category: MessageCategory,
    pub status: MessageStatus,
    pub scheduled_for: Option<DateTime>,
    pub expires_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
pub struct RecipientList(pub Vec<MessageRecipient>);

impl RecipientList {
    pub fn find(&self, user_id: Uuid) -> Option<&MessageRecipient> {
        self.0.iter().find(|r| r.user_id == user_id)
    }

    pub fn find_mut(&mut self, user_id: Uuid) -> Option<&mut MessageRecipient> {
        self.0.iter_mut().find(|r| r.user_id == user_id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageRecipient {
    pub user_id: Uuid,
    pub read_at: Option<DateTime>,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    MessageId,
    SenderId,
    Recipients,
    Subject,
    Content,
    MessageType,
    Priority,
    Category,
    Status,
    ScheduledFor,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    MessageId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Sender,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::MessageId => ColumnType::Uuid.def(),
            Self::SenderId => ColumnType::Uuid.def(),
            Self::Recipients => ColumnType::Json.def(),
            Self::Subject => ColumnType::String(StringLen::None).def(),
            Self::Content => ColumnType::String(StringLen::None).def(),
            Self::MessageType => MessageType::db_type(),
            Self::Priority => PriorityEnum::db_type(),
            Self::Category => MessageCategory::db_type(),
            Self::Status => MessageStatus::db_type(),
            Self::ScheduledFor => ColumnType::DateTime.def().null(),
            Self::ExpiresAt => ColumnType::DateTime.def().null(),
            Self::CreatedAt => ColumnType::DateTime.def(),
            Self::UpdatedAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Sender => Entity::belongs_to(super::user::Entity)
                .from(Column::SenderId)
                .to(super::user::Column::UserId)
                .into(),
        }
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
