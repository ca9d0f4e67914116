use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Name))
                    .col(string(Course::TeacherId))
                    .col(text(Course::Remark).default(""))
                    .col(integer(Course::StudentMaxNum))
                    .col(integer(Course::Hours))
                    .col(timestamp(Course::StartDate))
                    .col(string(Course::Semester))
                    .col(
                        timestamp(Course::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_teacher_id")
                            .from(Course::Table, Course::TeacherId)
                            .to(User::Table, User::IdCard)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_semester")
                    .table(Course::Table)
                    .col(Course::Semester)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Name,
    TeacherId,
    Remark,
    StudentMaxNum,
    Hours,
    StartDate,
    Semester,
    CreatedAt,
}
