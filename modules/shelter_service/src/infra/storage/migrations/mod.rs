//! Database migrations for the shelter service

use sea_orm_migration::prelude::*;

pub struct Migrator;

// Names are spelled out: `DeriveMigrationName` uses the file stem, which is
// `mod` for every migration kept in this file.

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_rsl::Migration),
            Box::new(m20250301_000002_create_staff::Migration),
        ]
    }
}

mod m20250301_000001_create_rsl {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_rsl"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Rsl::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Rsl::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Rsl::Name).string().not_null())
                        .col(ColumnDef::new(Rsl::RegistrationNumber).string())
                        .col(ColumnDef::new(Rsl::Email).string())
                        .col(ColumnDef::new(Rsl::PhoneNumber).string())
                        .col(ColumnDef::new(Rsl::Address).string())
                        .col(ColumnDef::new(Rsl::Website).string())
                        .col(ColumnDef::new(Rsl::Logo).string())
                        .col(
                            ColumnDef::new(Rsl::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Rsl::UpdatedAt)
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
                .drop_table(Table::drop().table(Rsl::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Rsl {
        Table,
        Id,
        Name,
        RegistrationNumber,
        Email,
        PhoneNumber,
        Address,
        Website,
        Logo,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250301_000002_create_staff {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_staff"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Staff::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Staff::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Staff::EmployeeId).string().not_null())
                        .col(ColumnDef::new(Staff::FirstName).string().not_null())
                        .col(ColumnDef::new(Staff::LastName).string().not_null())
                        .col(ColumnDef::new(Staff::Email).string().not_null())
                        .col(ColumnDef::new(Staff::PhoneNumber).string())
                        .col(ColumnDef::new(Staff::Department).string().not_null())
                        .col(ColumnDef::new(Staff::Position).string().not_null())
                        .col(ColumnDef::new(Staff::JoiningDate).date().not_null())
                        .col(ColumnDef::new(Staff::Status).string().not_null())
                        .col(
                            ColumnDef::new(Staff::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Staff::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_staff_employee_id")
                        .table(Staff::Table)
                        .col(Staff::EmployeeId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_staff_email")
                        .table(Staff::Table)
                        .col(Staff::Email)
                        .unique()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Staff::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Staff {
        Table,
        Id,
        EmployeeId,
        FirstName,
        LastName,
        Email,
        PhoneNumber,
        Department,
        Position,
        JoiningDate,
        Status,
        CreatedAt,
        UpdatedAt,
    }
}
