use crate::entities::{student, user};
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

pub struct StudentRepository;

impl StudentRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, student_id: Uuid) -> Result<Option<student::Model>> {
        let db = self.get_connection();
        let student = student::Entity::find_by_id(student_id).one(db).await?;
        Ok(student)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<student::Model>> {
        let db = self.get_connection();
        let student = student::Entity::find()
            .filter(student::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(student)
    }

    pub async fn find_with_user(
        &self,
        student_id: Uuid,
    ) -> Result<Option<(student::Model, Option<user::Model>)>> {
        let db = self.get_connection();
        let result = student::Entity::find_by_id(student_id)
            .find_also_related(user::Entity)
            .one(db)
            .await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        page: u64,
        limit: u64,
        grade: Option<String>,
        section: Option<String>,
        search: Option<String>,
    ) -> Result<(Vec<(student::Model, Option<user::Model>)>, u64)> {
        let db = self.get_connection();
        let mut query = student::Entity::find().find_also_related(user::Entity);

        if let Some(grade) = grade {
            query = query.filter(student::Column::Grade.eq(grade));
        }
        if let Some(section) = section {
            query = query.filter(student::Column::Section.eq(section));
        }
        if let Some(term) = search {
            let pattern = format!("%{term}%");
            query = query.filter(
                user::Column::FirstName
                    .like(&pattern)
                    .or(user::Column::LastName.like(&pattern))
                    .or(student::Column::StudentCode.like(&pattern)),
            );
        }

        let total = query.clone().count(db).await?;
        let students = query
            .order_by_desc(student::Column::CreatedAt)
            .limit(limit)
            .offset((page - 1) * limit)
            .all(db)
            .await?;

        Ok((students, total))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: Uuid,
        student_code: String,
        date_of_birth: chrono::NaiveDate,
        grade: String,
        section: String,
        parent_name: String,
        parent_contact: String,
        address: String,
    ) -> Result<student::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let model = student::ActiveModel {
            student_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            student_code: Set(student_code),
            date_of_birth: Set(date_of_birth),
            grade: Set(grade),
            section: Set(section),
            parent_name: Set(parent_name),
            parent_contact: Set(parent_contact),
            address: Set(address),
            enrolled_courses: Set(Default::default()),
            attendance: Set(Default::default()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let student = model.insert(db).await?;
        Ok(student)
    }

    /// Rewrites the whole row. Used after any embedded-list mutation
    /// (enrollments, attendance records).
    pub async fn save(&self, model: student::Model) -> Result<student::Model> {
        let db = self.get_connection();
        let mut active = model.into_active_model().reset_all();
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        let saved = active.update(db).await?;
        Ok(saved)
    }

    pub async fn delete(&self, student_id: Uuid) -> Result<u64> {
        let db = self.get_connection();
        let result = student::Entity::delete_by_id(student_id).exec(db).await?;
        Ok(result.rows_affected)
    }
}
