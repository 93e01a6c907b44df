use spotter_types::{ErrorResponse, GameError};
use thiserror::Error;
use warp::http::StatusCode;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Round has no answers")]
    EmptyRound,

    #[error("Invalid player id: {0:?}")]
    InvalidPlayer(String),

    #[error("Challenge not found: {0}")]
    ChallengeNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmptyRound | ApiError::InvalidPlayer(_) | ApiError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ChallengeNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> Option<GameError> {
        match self {
            ApiError::EmptyRound => Some(GameError::EmptyRound),
            ApiError::InvalidPlayer(player_id) => Some(GameError::InvalidPlayer {
                player_id: player_id.clone(),
            }),
            ApiError::ChallengeNotFound(challenge_id) => Some(GameError::ChallengeNotFound {
                challenge_id: challenge_id.clone(),
            }),
            ApiError::InvalidRequest(_) | ApiError::Internal(_) => None,
        }
    }

    pub fn into_reply(self) -> warp::reply::WithStatus<warp::reply::Json> {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code(),
        };
        warp::reply::with_status(warp::reply::json(&body), status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::EmptyRound.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::ChallengeNotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_codes_only_for_client_errors() {
        assert_eq!(ApiError::EmptyRound.code(), Some(GameError::EmptyRound));
        assert_eq!(ApiError::Internal("boom".to_string()).code(), None);
    }
}
