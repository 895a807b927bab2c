use sea_orm_migration::prelude::*;

use crate::m20250612_000001_create_table_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::StudentId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Students::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Students::StudentCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Students::Grade).string().not_null())
                    .col(ColumnDef::new(Students::Section).string().not_null())
                    .col(ColumnDef::new(Students::ParentName).string().not_null())
                    .col(ColumnDef::new(Students::ParentContact).string().not_null())
                    .col(ColumnDef::new(Students::Address).string().not_null())
                    .col(
                        ColumnDef::new(Students::EnrolledCourses)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Students::Attendance)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Students::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_user")
                            .from_tbl(Students::Table)
                            .from_col(Students::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_user_id")
                    .table(Students::Table)
                    .col(Students::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_grade_section")
                    .table(Students::Table)
                    .col(Students::Grade)
                    .col(Students::Section)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::TeacherId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Teachers::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Teachers::TeacherCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Qualification).string().not_null())
                    .col(ColumnDef::new(Teachers::Specialization).string().not_null())
                    .col(
                        ColumnDef::new(Teachers::ExperienceYears)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Teachers::Subjects)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Teachers::Schedule)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Teachers::AssignedCourseIds)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Teachers::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Teachers::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachers_user")
                            .from_tbl(Teachers::Table)
                            .from_col(Teachers::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teachers_user_id")
                    .table(Teachers::Table)
                    .col(Teachers::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Parents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Parents::ParentId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Parents::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Parents::Children)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(ColumnDef::new(Parents::Relationship).string().not_null())
                    .col(ColumnDef::new(Parents::Occupation).string().null())
                    .col(ColumnDef::new(Parents::WorkPhone).string().null())
                    .col(ColumnDef::new(Parents::EmergencyContact).custom("jsonb").null())
                    .col(ColumnDef::new(Parents::Address).custom("jsonb").null())
                    .col(
                        ColumnDef::new(Parents::NotificationPreferences)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '{}'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Parents::PreferredLanguage)
                            .string()
                            .not_null()
                            .default("en"),
                    )
                    .col(
                        ColumnDef::new(Parents::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Parents::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parents_user")
                            .from_tbl(Parents::Table)
                            .from_col(Parents::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parents_user_id")
                    .table(Parents::Table)
                    .col(Parents::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Parents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
    StudentId,
    UserId,
    StudentCode,
    DateOfBirth,
    Grade,
    Section,
    ParentName,
    ParentContact,
    Address,
    EnrolledCourses,
    Attendance,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Teachers {
    Table,
    TeacherId,
    UserId,
    TeacherCode,
    Qualification,
    Specialization,
    ExperienceYears,
    Subjects,
    Schedule,
    AssignedCourseIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Parents {
    Table,
    ParentId,
    UserId,
    Children,
    Relationship,
    Occupation,
    WorkPhone,
    EmergencyContact,
    Address,
    NotificationPreferences,
    PreferredLanguage,
    CreatedAt,
    UpdatedAt,
}
