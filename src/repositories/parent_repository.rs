use crate::entities::parent;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use uuid::Uuid;

pub struct ParentRepository;

impl ParentRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<parent::Model>> {
        let db = self.get_connection();
        let parent = parent::Entity::find()
            .filter(parent::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(parent)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        relationship: String,
        occupation: Option<String>,
        work_phone: Option<String>,
        preferred_language: String,
    ) -> Result<parent::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let model = parent::ActiveModel {
            parent_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            children: Set(Default::default()),
            relationship: Set(relationship),
            occupation: Set(occupation),
            work_phone: Set(work_phone),
            emergency_contact: Set(None),
            address: Set(None),
            notification_preferences: Set(Default::default()),
            preferred_language: Set(preferred_language),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let parent = model.insert(db).await?;
        Ok(parent)
    }

    pub async fn save(&self, model: parent::Model) -> Result<parent::Model> {
        let db = self.get_connection();
        let mut active = model.into_active_model().reset_all();
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        let saved = active.update(db).await?;
        Ok(saved)
    }
}
