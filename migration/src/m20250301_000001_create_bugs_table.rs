use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bugs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bugs::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Bugs::Title)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bugs::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bugs::ReportedBy)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bugs::Status)
                            .string()
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(Bugs::Priority)
                            .string()
                            .not_null()
                            .default("medium"),
                    )
                    .col(
                        ColumnDef::new(Bugs::AssignedTo)
                            .string()
                            .not_null()
                            .default("Unassigned"),
                    )
                    .col(
                        ColumnDef::new(Bugs::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bugs::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // List endpoint sorts newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bugs_created_at")
                    .table(Bugs::Table)
                    .col(Bugs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bugs_status_priority")
                    .table(Bugs::Table)
                    .col(Bugs::Status)
                    .col(Bugs::Priority)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bugs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bugs {
    Table,
    Id,
    Title,
    Description,
    ReportedBy,
    Status,
    Priority,
    AssignedTo,
    CreatedAt,
    UpdatedAt,
}
