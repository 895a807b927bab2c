use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::notification;
use crate::entities::parent::NotificationPreferences;
use crate::entities::sea_orm_active_enums::NotificationStatus;
use crate::utils::pagination::Pagination;

#[derive(Debug, Deserialize, IntoParams)]
pub struct NotificationListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<NotificationStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkDeleteRequest {
    pub notification_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationListResponse {
    pub data: Vec<notification::Model>,
    pub unread_count: u64,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AffectedResponse {
    pub affected: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PreferencesResponse {
    pub preferences: NotificationPreferences,
}
