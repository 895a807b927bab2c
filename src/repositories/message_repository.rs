use crate::entities::message;
use crate::entities::sea_orm_active_enums::{MessageStatus, MessageType};
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

pub struct MessageRepository;

impl MessageRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, message_id: Uuid) -> Result<Option<message::Model>> {
        let db = self.get_connection();
        let message = message::Entity::find_by_id(message_id).one(db).await?;
        Ok(message)
    }

    /// Soft-deleted copies are excluded in the query itself so the count
    /// and the page window agree.
    fn inbox_query(user_id: Uuid) -> sea_orm::Select<message::Entity> {
        message::Entity::find()
            .filter(message::Column::Status.eq(MessageStatus::Sent))
            .filter(Expr::cust_with_values(
                "EXISTS (SELECT 1 FROM jsonb_array_elements(messages.recipients) AS r \
                 WHERE r->>'user_id' = $1 AND r->>'deleted_at' IS NULL)",
                [user_id.to_string()],
            ))
    }

    pub async fn find_inbox(
        &self,
        user_id: Uuid,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<message::Model>, u64)> {
        let db = self.get_connection();
        let query = Self::inbox_query(user_id);

        let total = query.clone().count(db).await?;
        let messages = query
            .order_by_desc(message::Column::CreatedAt)
            .limit(limit)
            .offset((page - 1) * limit)
            .all(db)
            .await?;
        Ok((messages, total))
    }

    pub async fn find_sent(
        &self,
        sender_id: Uuid,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<message::Model>, u64)> {
        let db = self.get_connection();
        let query = message::Entity::find()
            .filter(message::Column::SenderId.eq(sender_id))
            .filter(message::Column::Status.ne(MessageStatus::Draft));

        let total = query.clone().count(db).await?;
        let messages = query
            .order_by_desc(message::Column::CreatedAt)
            .limit(limit)
            .offset((page - 1) * limit)
            .all(db)
            .await?;
        Ok((messages, total))
    }

    pub async fn find_announcements(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<message::Model>, u64)> {
        let db = self.get_connection();
        let query = message::Entity::find()
            .filter(message::Column::MessageType.eq(MessageType::Announcement))
            .filter(message::Column::Status.eq(MessageStatus::Sent));

        let total = query.clone().count(db).await?;
        let messages = query
            .order_by_desc(message::Column::CreatedAt)
            .limit(limit)
            .offset((page - 1) * limit)
            .all(db)
            .await?;
        Ok((messages, total))
    }

    pub async fn create(&self, model: message::ActiveModel) -> Result<message::Model> {
        let db = self.get_connection();
        let message = model.insert(db).await?;
        Ok(message)
    }

    pub async fn save(&self, model: message::Model) -> Result<message::Model> {
        let db = self.get_connection();
        let mut active = model.into_active_model().reset_all();
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        let saved = active.update(db).await?;
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn inbox_query_excludes_deleted_copies_in_sql() {
        let user_id = Uuid::new_v4();
        let sql = MessageRepository::inbox_query(user_id)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains("jsonb_array_elements(messages.recipients)"));
        assert!(sql.contains("r->>'deleted_at' IS NULL"));
        assert!(sql.contains(&user_id.to_string()));
        assert!(sql.contains("'sent'"));
    }
}
