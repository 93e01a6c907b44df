use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "performance_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_key: String,
    pub schema_version: i32,
    /// Serialized `UserPerformance`
    #[sea_orm(column_type = "Text")]
    pub data: String,
    pub total_games: i32,
    pub best_weighted_score: i32,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
