//! Migration to create the dealer_applications table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DealerApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DealerApplications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DealerApplications::Name).string().not_null())
                    .col(
                        ColumnDef::new(DealerApplications::Phone)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DealerApplications::Business)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(DealerApplications::City)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(DealerApplications::Details)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DealerApplications::Status)
                            .string()
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(
                        ColumnDef::new(DealerApplications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DealerApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DealerApplications {
    Table,
    Id,
    Name,
    Phone,
    Business,
    City,
    Details,
    Status,
    CreatedAt,
}
