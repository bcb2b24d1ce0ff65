//! Migration to create the order_inquiries table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderInquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderInquiries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrderInquiries::CustomerName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrderInquiries::Phone).string().not_null())
                    .col(
                        ColumnDef::new(OrderInquiries::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrderInquiries::Quantity).string().not_null())
                    .col(ColumnDef::new(OrderInquiries::District).string().not_null())
                    .col(ColumnDef::new(OrderInquiries::State).string().not_null())
                    .col(ColumnDef::new(OrderInquiries::Pincode).string().not_null())
                    .col(ColumnDef::new(OrderInquiries::Address).text().not_null())
                    .col(
                        ColumnDef::new(OrderInquiries::Notes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(OrderInquiries::Status)
                            .string()
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(
                        ColumnDef::new(OrderInquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_inquiries_product_id")
                            .from(OrderInquiries::Table, OrderInquiries::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_inquiries_status")
                    .table(OrderInquiries::Table)
                    .col(OrderInquiries::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderInquiries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OrderInquiries {
    Table,
    Id,
    CustomerName,
    Phone,
    ProductId,
    Quantity,
    District,
    State,
    Pincode,
    Address,
    Notes,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
}
