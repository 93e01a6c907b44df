use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PerformanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PerformanceRecords::PlayerKey)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PerformanceRecords::SchemaVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(PerformanceRecords::Data).text().not_null())
                    .col(
                        ColumnDef::new(PerformanceRecords::TotalGames)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PerformanceRecords::BestWeightedScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PerformanceRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PerformanceRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PerformanceRecords {
    Table,
    PlayerKey,
    SchemaVersion,
    Data,
    TotalGames,
    BestWeightedScore,
    UpdatedAt,
}
