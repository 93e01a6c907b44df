use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    RoundNotStarted,
    RoundAlreadyFinished,
    EmptyRound,
    ChallengeNotFound { challenge_id: String },
    InvalidPlayer { player_id: String },
    InvalidGameState { current_state: String },
}
