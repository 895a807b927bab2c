use crate::entities::{teacher, user};
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

pub struct TeacherRepository;

impl TeacherRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, teacher_id: Uuid) -> Result<Option<teacher::Model>> {
        let db = self.get_connection();
        let teacher = teacher::Entity::find_by_id(teacher_id).one(db).await?;
        Ok(teacher)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<teacher::Model>> {
        let db = self.get_connection();
        let teacher = teacher::Entity::find()
            .filter(teacher::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(teacher)
    }

    pub async fn find_with_user(
        &self,
        teacher_id: Uuid,
    ) -> Result<Option<(teacher::Model, Option<user::Model>)>> {
        let db = self.get_connection();
        let result = teacher::Entity::find_by_id(teacher_id)
            .find_also_related(user::Entity)
            .one(db)
            .await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        page: u64,
        limit: u64,
        subject: Option<String>,
        search: Option<String>,
    ) -> Result<(Vec<(teacher::Model, Option<user::Model>)>, u64)> {
        let db = self.get_connection();
        let mut query = teacher::Entity::find().find_also_related(user::Entity);

        if let Some(subject) = subject {
            // subjects is a JSON array of strings, match on its text form
            let pattern = format!("%\"{subject}\"%");
            query = query.filter(
                sea_orm::sea_query::Expr::cust_with_values(
                    "teachers.subjects::text LIKE $1",
                    [pattern],
                ),
            );
        }
        if let Some(term) = search {
            let pattern = format!("%{term}%");
            query = query.filter(
                user::Column::FirstName
                    .like(&pattern)
                    .or(user::Column::LastName.like(&pattern))
                    .or(teacher::Column::TeacherCode.like(&pattern)),
            );
        }

        let total = query.clone().count(db).await?;
        let teachers = query
            .order_by_desc(teacher::Column::CreatedAt)
            .limit(limit)
            .offset((page - 1) * limit)
            .all(db)
            .await?;

        Ok((teachers, total))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: Uuid,
        teacher_code: String,
        qualification: String,
        specialization: String,
        experience_years: i32,
        subjects: crate::entities::shared::StringList,
    ) -> Result<teacher::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let model = teacher::ActiveModel {
            teacher_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            teacher_code: Set(teacher_code),
            qualification: Set(qualification),
            specialization: Set(specialization),
            experience_years: Set(experience_years),
            subjects: Set(subjects),
            schedule: Set(Default::default()),
            assigned_course_ids: Set(Default::default()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let teacher = model.insert(db).await?;
        Ok(teacher)
    }

    pub async fn save(&self, model: teacher::Model) -> Result<teacher::Model> {
        let db = self.get_connection();
        let mut active = model.into_active_model().reset_all();
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        let saved = active.update(db).await?;
        Ok(saved)
    }

    pub async fn delete(&self, teacher_id: Uuid) -> Result<u64> {
        let db = self.get_connection();
        let result = teacher::Entity::delete_by_id(teacher_id).exec(db).await?;
        Ok(result.rows_affected)
    }
}
