use anyhow::{Context, Result};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};
use spotter_types::{CURRENT_SCHEMA_VERSION, UserPerformance};
use tracing::{debug, warn};

use crate::entities::{performance_records, prelude::*};

/// Best-effort per-player cache of `UserPerformance` records
pub struct PerformanceRepository {
    db: DatabaseConnection,
}

impl PerformanceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_performance(model: performance_records::Model) -> Result<UserPerformance> {
        let mut performance: UserPerformance = serde_json::from_str(&model.data)
            .with_context(|| format!("Corrupt performance record for {}", model.player_key))?;

        if (model.schema_version as u32) < CURRENT_SCHEMA_VERSION {
            debug!(
                "Upgrading performance record for {} from schema v{}",
                model.player_key, model.schema_version
            );
        } else if (model.schema_version as u32) > CURRENT_SCHEMA_VERSION {
            warn!(
                "Performance record for {} has newer schema v{}, unknown fields are dropped",
                model.player_key, model.schema_version
            );
        }
        performance.schema_version = CURRENT_SCHEMA_VERSION;

        Ok(performance)
    }

    /// Stored record for a player, erroring on a corrupt row
    pub async fn find(&self, player_key: &str) -> Result<Option<UserPerformance>> {
        let model = PerformanceRecords::find_by_id(player_key.to_string())
            .one(&self.db)
            .await?;

        model.map(Self::model_to_performance).transpose()
    }

    /// Stored record for a player, or the default record when there is none or it
    /// cannot be read. Never fails; a broken store just means starting from zero.
    pub async fn load(&self, player_key: &str) -> UserPerformance {
        match self.find(player_key).await {
            Ok(Some(performance)) => performance,
            Ok(None) => {
                debug!("No performance record for {}, using defaults", player_key);
                UserPerformance::default()
            }
            Err(err) => {
                warn!(
                    "Failed to load performance for {}, using defaults: {:#}",
                    player_key, err
                );
                UserPerformance::default()
            }
        }
    }

    /// Insert or overwrite the player's record in one statement, last writer wins
    pub async fn save(&self, player_key: &str, performance: &UserPerformance) -> Result<()> {
        let data = serde_json::to_string(performance).context("Failed to serialize performance")?;
        let now = chrono::Utc::now().into();

        let record = performance_records::ActiveModel {
            player_key: ActiveValue::Set(player_key.to_string()),
            schema_version: ActiveValue::Set(CURRENT_SCHEMA_VERSION as i32),
            data: ActiveValue::Set(data),
            total_games: ActiveValue::Set(performance.total_games as i32),
            best_weighted_score: ActiveValue::Set(performance.best_weighted_score as i32),
            updated_at: ActiveValue::Set(now),
        };

        PerformanceRecords::insert(record)
            .on_conflict(
                OnConflict::column(performance_records::Column::PlayerKey)
                    .update_columns([
                        performance_records::Column::SchemaVersion,
                        performance_records::Column::Data,
                        performance_records::Column::TotalGames,
                        performance_records::Column::BestWeightedScore,
                        performance_records::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        debug!(
            "Saved performance for {} ({} games)",
            player_key, performance.total_games
        );
        Ok(())
    }
}
