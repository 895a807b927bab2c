use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::event;
use crate::utils::pagination::Pagination;

#[derive(Debug, Deserialize, IntoParams)]
pub struct EventListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub event_type: Option<String>,
    #[serde(default)]
    pub upcoming: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: chrono::NaiveDateTime,
    pub location: Option<String>,
    pub event_type: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<chrono::NaiveDateTime>,
    pub location: Option<String>,
    pub event_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventListResponse {
    pub data: Vec<event::Model>,
    pub pagination: Pagination,
}
