use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::message;
use crate::entities::sea_orm_active_enums::{MessageCategory, PriorityEnum, RoleEnum};
use crate::utils::pagination::Pagination;

#[derive(Debug, Deserialize, IntoParams)]
pub struct MessageListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub recipient_ids: Vec<Uuid>,
    pub subject: String,
    pub content: String,
    pub priority: Option<PriorityEnum>,
    pub category: Option<MessageCategory>,
    pub scheduled_for: Option<chrono::NaiveDateTime>,
    pub expires_at: Option<chrono::NaiveDateTime>,
}

/// Audience filters for a broadcast; any combination narrows the set.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnnouncementRequest {
    pub subject: String,
    pub content: String,
    pub priority: Option<PriorityEnum>,
    pub category: Option<MessageCategory>,
    pub role: Option<RoleEnum>,
    pub grade: Option<String>,
    pub section: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageListResponse {
    pub data: Vec<message::Model>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteMessageResponse {
    pub message: String,
}
