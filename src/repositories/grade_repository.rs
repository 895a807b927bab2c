use crate::entities::grade;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

pub struct GradeRepository;

impl GradeRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, grade_id: Uuid) -> Result<Option<grade::Model>> {
        let db = self.get_connection();
        let record = grade::Entity::find_by_id(grade_id).one(db).await?;
        Ok(record)
    }

    pub async fn find_by_student(&self, student_id: Uuid) -> Result<Vec<grade::Model>> {
        let db = self.get_connection();
        let records = grade::Entity::find()
            .filter(grade::Column::StudentId.eq(student_id))
            .order_by_desc(grade::Column::UpdatedAt)
            .all(db)
            .await?;
        Ok(records)
    }

    pub async fn find_one(
        &self,
        student_id: Uuid,
        course_id: Uuid,
        term: &str,
    ) -> Result<Option<grade::Model>> {
        let db = self.get_connection();
        let record = grade::Entity::find()
            .filter(grade::Column::StudentId.eq(student_id))
            .filter(grade::Column::CourseId.eq(course_id))
            .filter(grade::Column::Term.eq(term))
            .one(db)
            .await?;
        Ok(record)
    }

    pub async fn find_by_term(
        &self,
        student_id: Uuid,
        term: &str,
        academic_year: &str,
    ) -> Result<Vec<grade::Model>> {
        let db = self.get_connection();
        let records = grade::Entity::find()
            .filter(grade::Column::StudentId.eq(student_id))
            .filter(grade::Column::Term.eq(term))
            .filter(grade::Column::AcademicYear.eq(academic_year))
            .all(db)
            .await?;
        Ok(records)
    }

    pub async fn create(
        &self,
        student_id: Uuid,
        course_id: Uuid,
        term: String,
        academic_year: String,
    ) -> Result<grade::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let model = grade::ActiveModel {
            grade_id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            course_id: Set(course_id),
            term: Set(term),
            academic_year: Set(academic_year),
            assignments: Set(Default::default()),
            exams: Set(Default::default()),
            final_grade: Set(0.0),
            letter_grade: Set(None),
            comments: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let record = model.insert(db).await?;
        Ok(record)
    }

    /// Callers must recompute final_grade/letter_grade before saving.
    pub async fn save(&self, model: grade::Model) -> Result<grade::Model> {
        let db = self.get_connection();
        let mut active = model.into_active_model().reset_all();
        active.updated_at = Set(chrono::Utc::now().naive_utc());
        let saved = active.update(db).await?;
        Ok(saved)
    }
}
