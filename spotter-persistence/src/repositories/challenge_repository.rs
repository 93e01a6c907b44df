use anyhow::{Context, Result, anyhow};
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};
use spotter_types::{Challenge, SessionLog, SkillLevel};

use crate::entities::{challenges, prelude::*};

pub struct ChallengeRepository {
    db: DatabaseConnection,
}

impl ChallengeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_challenge(model: challenges::Model) -> Result<Challenge> {
        let logs: Vec<SessionLog> = serde_json::from_str(&model.logs)
            .with_context(|| format!("Corrupt logs for challenge {}", model.id))?;
        let skill_level = SkillLevel::from_label(&model.challenger_skill_level).ok_or_else(|| {
            anyhow!(
                "Unknown skill level '{}' for challenge {}",
                model.challenger_skill_level,
                model.id
            )
        })?;

        Ok(Challenge {
            id: model.id,
            challenger_score: model.challenger_score as u32,
            challenger_weighted_score: model.challenger_weighted_score as u32,
            challenger_skill_level: skill_level,
            logs,
            created_at: model.created_at.to_rfc3339(),
        })
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Challenge>> {
        let model = Challenges::find_by_id(id.to_string()).one(&self.db).await?;
        model.map(Self::model_to_challenge).transpose()
    }

    pub async fn create_challenge(&self, challenge: Challenge) -> Result<Challenge> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&challenge.created_at)
            .unwrap_or_else(|_| chrono::Utc::now().into());
        let logs = serde_json::to_string(&challenge.logs).context("Failed to serialize logs")?;

        let model = challenges::ActiveModel {
            id: ActiveValue::Set(challenge.id.clone()),
            challenger_score: ActiveValue::Set(challenge.challenger_score as i32),
            challenger_weighted_score: ActiveValue::Set(challenge.challenger_weighted_score as i32),
            challenger_skill_level: ActiveValue::Set(challenge.challenger_skill_level.to_string()),
            logs: ActiveValue::Set(logs),
            created_at: ActiveValue::Set(created_at),
        };

        Challenges::insert(model).exec(&self.db).await?;

        // Fetch the created challenge
        self.find_by_id(&challenge.id)
            .await?
            .ok_or_else(|| anyhow!("Failed to retrieve created challenge"))
    }
}
