use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Personnel::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Personnel::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Personnel::Name).string().not_null())
                    .col(
                        ColumnDef::new(Personnel::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Personnel::RoleId).integer().null())
                    .col(
                        ColumnDef::new(Personnel::Status)
                            .string()
                            .not_null()
                            .default("Active"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_personnel_role_id")
                            .from(Personnel::Table, Personnel::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_personnel_role_id")
                    .table(Personnel::Table)
                    .col(Personnel::RoleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Personnel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Personnel {
    Table,
    Id,
    Name,
    Email,
    RoleId,
    Status,
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
}
