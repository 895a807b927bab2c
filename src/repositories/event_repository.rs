use crate::entities::event;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

pub struct EventRepository;

impl EventRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, event_id: Uuid) -> Result<Option<event::Model>> {
        let db = self.get_connection();
        let event = event::Entity::find_by_id(event_id).one(db).await?;
        Ok(event)
    }

    pub async fn find_all_with_pagination(
        &self,
        page: u64,
        limit: u64,
        event_type: Option<String>,
        upcoming_only: bool,
    ) -> Result<(Vec<event::Model>, u64)> {
        let db = self.get_connection();
        let mut query = event::Entity::find();

        if let Some(event_type) = event_type {
            query = query.filter(event::Column::EventType.eq(event_type));
        }
        if upcoming_only {
            query = query.filter(event::Column::Date.gte(chrono::Utc::now().naive_utc()));
        }

        let total = query.clone().count(db).await?;
        let events = query
            .order_by_asc(event::Column::Date)
            .limit(limit)
            .offset((page - 1) * limit)
            .all(db)
            .await?;

        Ok((events, total))
    }

    /// Participant UUIDs are unique strings, so a text match on the JSON
    /// column is a reliable containment test.
    pub async fn find_upcoming_for_participant(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<event::Model>> {
        let db = self.get_connection();
        let pattern = format!("%{user_id}%");
        let events = event::Entity::find()
            .filter(event::Column::Date.gte(chrono::Utc::now().naive_utc()))
            .filter(sea_orm::sea_query::Expr::cust_with_values(
                "events.participant_ids::text LIKE $1",
                [pattern],
            ))
            .order_by_asc(event::Column::Date)
            .all(db)
            .await?;
        Ok(events)
    }

    pub async fn create(
        &self,
        title: String,
        description: String,
        date: chrono::NaiveDateTime,
        location: Option<String>,
        event_type: Option<String>,
        organizer_id: Uuid,
    ) -> Result<event::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let model = event::ActiveModel {
            event_id: Set(Uuid::new_v4()),
            title: Set(title),
            description: Set(description),
            date: Set(date),
            location: Set(location),
            event_type: Set(event_type),
            organizer_id: Set(organizer_id),
            participant_ids: Set(Default::default()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let event = model.insert(db).await?;
        Ok(event)
    }

    pub async fn save(&self, model: event::Model) -> Result<event::Model> {
        let db = self.get_connection();
        let mut active = model.into_active_model().reset_all();
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        let saved = active.update(db).await?;
        Ok(saved)
    }

    pub async fn delete(&self, event_id: Uuid) -> Result<u64> {
        let db = self.get_connection();
        let result = event::Entity::delete_by_id(event_id).exec(db).await?;
        Ok(result.rows_affected)
    }
}
