//! Initial schema migration - creates all tables from scratch.
//!
//! - `users`: registration/login credentials
//! - `items`: tracked inventory units with derived quantities
//! - `stock_movements`: append-only log of quantity changes
//!
//! `stock_movements.item_id` intentionally carries no foreign key: a
//! movement may reference an item that never existed or was deleted, and is
//! kept as history either way.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordDigest,
    CreatedAt,
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
    Name,
    Code,
    Quantity,
    UnitPriceMinor,
    Location,
    Category,
    MinStock,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum StockMovements {
    Table,
    Id,
    ItemId,
    ItemName,
    Kind,
    Quantity,
    Reason,
    Actor,
    Timestamp,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(
                        ColumnDef::new(Users::PasswordDigest)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Items
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Items::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Items::Name).string().not_null())
                    // Not unique: duplicate codes are allowed.
                    .col(ColumnDef::new(Items::Code).string().not_null())
                    .col(ColumnDef::new(Items::Quantity).big_integer().not_null())
                    .col(
                        ColumnDef::new(Items::UnitPriceMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Items::Location).string().not_null())
                    .col(
                        ColumnDef::new(Items::Category)
                            .string()
                            .not_null()
                            .default("General"),
                    )
                    .col(
                        ColumnDef::new(Items::MinStock)
                            .big_integer()
                            .not_null()
                            .default(10),
                    )
                    .col(ColumnDef::new(Items::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Items::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Stock movements
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(StockMovements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockMovements::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StockMovements::ItemId).string().not_null())
                    .col(
                        ColumnDef::new(StockMovements::ItemName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockMovements::Kind).string().not_null())
                    .col(
                        ColumnDef::new(StockMovements::Quantity)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockMovements::Reason).string().not_null())
                    .col(ColumnDef::new(StockMovements::Actor).string().not_null())
                    .col(
                        ColumnDef::new(StockMovements::Timestamp)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-stock_movements-timestamp")
                    .table(StockMovements::Table)
                    .col(StockMovements::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-stock_movements-item_id")
                    .table(StockMovements::Table)
                    .col(StockMovements::ItemId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StockMovements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}
