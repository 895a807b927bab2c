use crate::entities::calendar;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

pub struct CalendarRepository;

impl CalendarRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, calendar_id: Uuid) -> Result<Option<calendar::Model>> {
        let db = self.get_connection();
        let calendar = calendar::Entity::find_by_id(calendar_id).one(db).await?;
        Ok(calendar)
    }

    /// Visibility filtering happens in the handler; the repository only
    /// narrows by year and term.
    pub async fn find_all(
        &self,
        academic_year: Option<String>,
        term: Option<String>,
    ) -> Result<Vec<calendar::Model>> {
        let db = self.get_connection();
        let mut query = calendar::Entity::find();
        if let Some(year) = academic_year {
            query = query.filter(calendar::Column::AcademicYear.eq(year));
        }
        if let Some(term) = term {
            query = query.filter(calendar::Column::Term.eq(term));
        }
        let calendars = query
            .order_by_asc(calendar::Column::StartDate)
            .all(db)
            .await?;
        Ok(calendars)
    }

    pub async fn create(&self, model: calendar::ActiveModel) -> Result<calendar::Model> {
        let db = self.get_connection();
        let calendar = model.insert(db).await?;
        Ok(calendar)
    }

    /// Rewrites the whole aggregate, embedded events included.
    pub async fn save(&self, model: calendar::Model) -> Result<calendar::Model> {
        let db = self.get_connection();
        let mut active = model.into_active_model().reset_all();
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        let saved = active.update(db).await?;
        Ok(saved)
    }

    pub async fn delete(&self, calendar_id: Uuid) -> Result<u64> {
        let db = self.get_connection();
        let result = calendar::Entity::delete_by_id(calendar_id).exec(db).await?;
        Ok(result.rows_affected)
    }
}
