use sea_orm_migration::prelude::*;

use crate::m20250613_000002_create_profile_tables::{Students, Teachers};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::CourseId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(
                        ColumnDef::new(Courses::CourseCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Description).string().not_null())
                    .col(ColumnDef::new(Courses::Grade).string().not_null())
                    .col(ColumnDef::new(Courses::TeacherId).uuid().not_null())
                    .col(
                        ColumnDef::new(Courses::Schedule)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Courses::StudentIds)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Courses::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_teacher")
                            .from_tbl(Courses::Table)
                            .from_col(Courses::TeacherId)
                            .to_tbl(Teachers::Table)
                            .to_col(Teachers::TeacherId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_teacher_id")
                    .table(Courses::Table)
                    .col(Courses::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::GradeId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Grades::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Grades::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Grades::Term).string().not_null())
                    .col(ColumnDef::new(Grades::AcademicYear).string().not_null())
                    .col(
                        ColumnDef::new(Grades::Assignments)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Grades::Exams)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Grades::FinalGrade)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Grades::LetterGrade).string().null())
                    .col(ColumnDef::new(Grades::Comments).string().null())
                    .col(
                        ColumnDef::new(Grades::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Grades::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grades_student")
                            .from_tbl(Grades::Table)
                            .from_col(Grades::StudentId)
                            .to_tbl(Students::Table)
                            .to_col(Students::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grades_course")
                            .from_tbl(Grades::Table)
                            .from_col(Grades::CourseId)
                            .to_tbl(Courses::Table)
                            .to_col(Courses::CourseId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One grade record per student, course, and term
        manager
            .create_index(
                Index::create()
                    .name("idx_grades_student_course_term")
                    .table(Grades::Table)
                    .col(Grades::StudentId)
                    .col(Grades::CourseId)
                    .col(Grades::Term)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    CourseId,
    CourseCode,
    Name,
    Description,
    Grade,
    TeacherId,
    Schedule,
    StudentIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Grades {
    Table,
    GradeId,
    StudentId,
    CourseId,
    Term,
    AcademicYear,
    Assignments,
    Exams,
    FinalGrade,
    LetterGrade,
    Comments,
    CreatedAt,
    UpdatedAt,
}
