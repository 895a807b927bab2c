use crate::entities::notification;
use crate::entities::sea_orm_active_enums::NotificationStatus;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

pub struct NotificationRepository;

impl NotificationRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, notification_id: Uuid) -> Result<Option<notification::Model>> {
        let db = self.get_connection();
        let notification = notification::Entity::find_by_id(notification_id)
            .one(db)
            .await?;
        Ok(notification)
    }

    pub async fn find_by_recipient(
        &self,
        recipient_id: Uuid,
        status: Option<NotificationStatus>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<notification::Model>, u64)> {
        let db = self.get_connection();
        let mut query =
            notification::Entity::find().filter(notification::Column::RecipientId.eq(recipient_id));
        if let Some(status) = status {
            query = query.filter(notification::Column::Status.eq(status));
        } else {
            query = query.filter(notification::Column::Status.ne(NotificationStatus::Archived));
        }

        let total = query.clone().count(db).await?;
        let notifications = query
            .order_by_desc(notification::Column::CreatedAt)
            .limit(limit)
            .offset((page - 1) * limit)
            .all(db)
            .await?;
        Ok((notifications, total))
    }

    pub async fn count_unread(&self, recipient_id: Uuid) -> Result<u64> {
        let db = self.get_connection();
        let count = notification::Entity::find()
            .filter(notification::Column::RecipientId.eq(recipient_id))
            .filter(notification::Column::Status.eq(NotificationStatus::Unread))
            .count(db)
            .await?;
        Ok(count)
    }

    pub async fn mark_all_read(&self, recipient_id: Uuid) -> Result<u64> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let result = notification::Entity::update_many()
            .col_expr(
                notification::Column::Status,
                sea_orm::sea_query::Expr::value(NotificationStatus::Read),
            )
            .col_expr(notification::Column::ReadAt, sea_orm::sea_query::Expr::value(now))
            .col_expr(
                notification::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(notification::Column::RecipientId.eq(recipient_id))
            .filter(notification::Column::Status.eq(NotificationStatus::Unread))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Bulk "delete" archives the caller's own notifications.
    pub async fn archive_many(&self, recipient_id: Uuid, ids: &[Uuid]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let result = notification::Entity::update_many()
            .col_expr(
                notification::Column::Status,
                sea_orm::sea_query::Expr::value(NotificationStatus::Archived),
            )
            .col_expr(
                notification::Column::ArchivedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .col_expr(
                notification::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(notification::Column::RecipientId.eq(recipient_id))
            .filter(notification::Column::NotificationId.is_in(ids.iter().copied()))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn save(&self, model: notification::Model) -> Result<notification::Model> {
        let db = self.get_connection();
        let mut active = model.into_active_model().reset_all();
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        let saved = active.update(db).await?;
        Ok(saved)
    }
}
