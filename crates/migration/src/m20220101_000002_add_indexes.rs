use sea_orm_migration::prelude::*;

use crate::m20220101_000001_create_employee::Employee;

pub const EMPLOYEE_EMAIL_UNIQUE: &str = "idx_employee_email_unique";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Employee: at most one row per email
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(EMPLOYEE_EMAIL_UNIQUE)
                    .table(Employee::Table)
                    .col(Employee::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(EMPLOYEE_EMAIL_UNIQUE).table(Employee::Table).to_owned())
            .await
    }
}
