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
                    .table(Calendars::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Calendars::CalendarId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Calendars::Name).string().not_null())
                    .col(ColumnDef::new(Calendars::Description).string().null())
                    .col(
                        ColumnDef::new(Calendars::CalendarType)
                            .string()
                            .not_null()
                            .default("academic"),
                    )
                    .col(ColumnDef::new(Calendars::AcademicYear).string().not_null())
                    .col(ColumnDef::new(Calendars::Term).string().not_null())
                    .col(ColumnDef::new(Calendars::StartDate).timestamp().not_null())
                    .col(ColumnDef::new(Calendars::EndDate).timestamp().not_null())
                    .col(
                        ColumnDef::new(Calendars::Color)
                            .string()
                            .not_null()
                            .default("#1976d2"),
                    )
                    .col(
                        ColumnDef::new(Calendars::Visibility)
                            .string()
                            .not_null()
                            .default("public"),
                    )
                    .col(
                        ColumnDef::new(Calendars::AllowedRoles)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Calendars::AllowedGrades)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Calendars::AllowedSections)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Calendars::Events)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(ColumnDef::new(Calendars::CreatedBy).uuid().not_null())
                    .col(ColumnDef::new(Calendars::LastModifiedBy).uuid().null())
                    .col(
                        ColumnDef::new(Calendars::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Calendars::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendars_creator")
                            .from_tbl(Calendars::Table)
                            .from_col(Calendars::CreatedBy)
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
                    .name("idx_calendars_year_term")
                    .table(Calendars::Table)
                    .col(Calendars::AcademicYear)
                    .col(Calendars::Term)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::EventId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Events::Title).string().not_null())
                    .col(ColumnDef::new(Events::Description).string().not_null())
                    .col(ColumnDef::new(Events::Date).timestamp().not_null())
                    .col(ColumnDef::new(Events::Location).string().null())
                    .col(ColumnDef::new(Events::EventType).string().null())
                    .col(ColumnDef::new(Events::OrganizerId).uuid().not_null())
                    .col(
                        ColumnDef::new(Events::ParticipantIds)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Events::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_organizer")
                            .from_tbl(Events::Table)
                            .from_col(Events::OrganizerId)
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
                    .name("idx_events_date")
                    .table(Events::Table)
                    .col(Events::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Calendars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Calendars {
    Table,
    CalendarId,
    Name,
    Description,
    CalendarType,
    AcademicYear,
    Term,
    StartDate,
    EndDate,
    Color,
    Visibility,
    AllowedRoles,
    AllowedGrades,
    AllowedSections,
    Events,
    CreatedBy,
    LastModifiedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    EventId,
    Title,
    Description,
    Date,
    Location,
    EventType,
    OrganizerId,
    ParticipantIds,
    CreatedAt,
    UpdatedAt,
}
