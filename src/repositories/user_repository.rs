use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::user;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_active_by_id(&self, user_id: Uuid) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find_by_id(user_id)
            .filter(user::Column::DeletedAt.is_null())
            .one(db)
            .await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::DeletedAt.is_null())
            .one(db)
            .await?;
        Ok(user)
    }

    pub async fn find_student_by_code(&self, student_code: &str) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find()
            .filter(user::Column::StudentCode.eq(student_code))
            .filter(user::Column::Role.eq(RoleEnum::Student))
            .filter(user::Column::DeletedAt.is_null())
            .one(db)
            .await?;
        Ok(user)
    }

    pub async fn find_many_by_ids(&self, ids: &[Uuid]) -> Result<Vec<user::Model>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let db = self.get_connection();
        let users = user::Entity::find()
            .filter(user::Column::UserId.is_in(ids.iter().copied()))
            .filter(user::Column::DeletedAt.is_null())
            .all(db)
            .await?;
        Ok(users)
    }

    /// Audience resolution for announcements: any combination of role,
    /// grade, and section narrows the set.
    pub async fn find_by_audience(
        &self,
        role: Option<RoleEnum>,
        grade: Option<&str>,
        section: Option<&str>,
    ) -> Result<Vec<user::Model>> {
        let db = self.get_connection();
        let mut query = user::Entity::find().filter(user::Column::DeletedAt.is_null());
        if let Some(role) = role {
            query = query.filter(user::Column::Role.eq(role));
        }
        if let Some(grade) = grade {
            query = query.filter(user::Column::Grade.eq(grade));
        }
        if let Some(section) = section {
            query = query.filter(user::Column::Section.eq(section));
        }
        let users = query.all(db).await?;
        Ok(users)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        hashed_password: String,
        role: RoleEnum,
        grade: Option<String>,
        section: Option<String>,
        student_code: Option<String>,
        phone_number: Option<String>,
        address: Option<String>,
    ) -> Result<user::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let model = user::ActiveModel {
            user_id: Set(Uuid::new_v4()),
            first_name: Set(first_name),
            last_name: Set(last_name),
            email: Set(email),
            password: Set(hashed_password),
            role: Set(role),
            grade: Set(grade),
            section: Set(section),
            student_code: Set(student_code),
            phone_number: Set(phone_number),
            address: Set(address),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };
        let user = model.insert(db).await?;
        Ok(user)
    }
}
