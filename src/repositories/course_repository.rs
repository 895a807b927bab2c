use crate::entities::course;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

pub struct CourseRepository;

impl CourseRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, course_id: Uuid) -> Result<Option<course::Model>> {
        let db = self.get_connection();
        let course = course::Entity::find_by_id(course_id).one(db).await?;
        Ok(course)
    }

    pub async fn find_by_code(&self, course_code: &str) -> Result<Option<course::Model>> {
        let db = self.get_connection();
        let course = course::Entity::find()
            .filter(course::Column::CourseCode.eq(course_code))
            .one(db)
            .await?;
        Ok(course)
    }

    pub async fn find_many_by_ids(&self, ids: &[Uuid]) -> Result<Vec<course::Model>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let db = self.get_connection();
        let courses = course::Entity::find()
            .filter(course::Column::CourseId.is_in(ids.iter().copied()))
            .all(db)
            .await?;
        Ok(courses)
    }

    pub async fn find_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<course::Model>> {
        let db = self.get_connection();
        let courses = course::Entity::find()
            .filter(course::Column::TeacherId.eq(teacher_id))
            .order_by_asc(course::Column::Name)
            .all(db)
            .await?;
        Ok(courses)
    }

    pub async fn find_all_with_pagination(
        &self,
        page: u64,
        limit: u64,
        grade: Option<String>,
        teacher_id: Option<Uuid>,
        search: Option<String>,
    ) -> Result<(Vec<course::Model>, u64)> {
        let db = self.get_connection();
        let mut query = course::Entity::find();

        if let Some(grade) = grade {
            query = query.filter(course::Column::Grade.eq(grade));
        }
        if let Some(teacher_id) = teacher_id {
            query = query.filter(course::Column::TeacherId.eq(teacher_id));
        }
        if let Some(term) = search {
            let pattern = format!("%{term}%");
            query = query.filter(
                course::Column::Name
                    .like(&pattern)
                    .or(course::Column::CourseCode.like(&pattern)),
            );
        }

        let total = query.clone().count(db).await?;
        let courses = query
            .order_by_asc(course::Column::CourseCode)
            .limit(limit)
            .offset((page - 1) * limit)
            .all(db)
            .await?;

        Ok((courses, total))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        course_code: String,
        name: String,
        description: String,
        grade: String,
        teacher_id: Uuid,
        schedule: course::CourseSchedule,
    ) -> Result<course::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let model = course::ActiveModel {
            course_id: Set(Uuid::new_v4()),
            course_code: Set(course_code),
            name: Set(name),
            description: Set(description),
            grade: Set(grade),
            teacher_id: Set(teacher_id),
            schedule: Set(schedule),
            student_ids: Set(Default::default()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let course = model.insert(db).await?;
        Ok(course)
    }

    pub async fn save(&self, model: course::Model) -> Result<course::Model> {
        let db = self.get_connection();
        let mut active = model.into_active_model().reset_all();
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        let saved = active.update(db).await?;
        Ok(saved)
    }

    pub async fn delete(&self, course_id: Uuid) -> Result<u64> {
        let db = self.get_connection();
        let result = course::Entity::delete_by_id(course_id).exec(db).await?;
        Ok(result.rows_affected)
    }
}
