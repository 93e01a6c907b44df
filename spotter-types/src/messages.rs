use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{Answer, GameError, SessionLog, SkillLevel};

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LogsQuery {
    /// Raw tier tag; missing means medium, unrecognised tags get the fallback mix
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LogsResponse {
    pub logs: Vec<SessionLog>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitRoundRequest {
    pub player_id: String,
    pub answers: Vec<Answer>,
    /// Tier the client's session adapted to during the round
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateChallengeRequest {
    pub score: u32,
    pub weighted_score: u32,
    pub skill_level: SkillLevel,
    pub logs: Vec<SessionLog>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateChallengeResponse {
    pub challenge_id: String,
    pub challenge_url: String,
    pub encoded_data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChallengeAttemptRequest {
    pub answers: Vec<Answer>,
    /// When set, the attempt also counts toward this player's performance
    #[serde(default)]
    pub player_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<GameError>,
}
