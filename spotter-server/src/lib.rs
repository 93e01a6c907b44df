use std::sync::Arc;
use tracing::{error, info};
use warp::Filter;
use warp::http::StatusCode;

use crate::config::Config;
use crate::error::ApiError;
use spotter_core::{BotMix, ChallengeBuilder, LogSelector, score_round};
use spotter_persistence::{ChallengeRepository, PerformanceRepository};
use spotter_types::{
    ChallengeAttemptRequest, CreateChallengeRequest, CreateChallengeResponse, LogsQuery,
    LogsResponse, SubmitRoundRequest, Tier, UserPerformance,
};

pub mod config;
pub mod error;

const MAX_BODY_BYTES: u64 = 256 * 1024;
const MAX_PLAYER_ID_LEN: usize = 128;

pub fn create_routes(
    log_selector: Arc<LogSelector>,
    performance_repository: Arc<PerformanceRepository>,
    challenge_repository: Arc<ChallengeRepository>,
    config: Arc<Config>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let log_selector_filter = warp::any().map({
        let log_selector = log_selector.clone();
        move || log_selector.clone()
    });

    let performance_filter = warp::any().map({
        let performance_repository = performance_repository.clone();
        move || performance_repository.clone()
    });

    let challenge_filter = warp::any().map({
        let challenge_repository = challenge_repository.clone();
        move || challenge_repository.clone()
    });

    let config_filter = warp::any().map({
        let config = config.clone();
        move || config.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let logs = warp::path!("api" / "logs")
        .and(warp::get())
        .and(warp::query::<LogsQuery>())
        .and(log_selector_filter.clone())
        .and_then(handle_logs_request);

    let get_performance = warp::path!("api" / "performance" / String)
        .and(warp::get())
        .and(performance_filter.clone())
        .and_then(handle_get_performance);

    let put_performance = warp::path!("api" / "performance" / String)
        .and(warp::put())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(performance_filter.clone())
        .and_then(handle_put_performance);

    let submit_round = warp::path!("api" / "rounds")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(performance_filter.clone())
        .and_then(handle_submit_round);

    let create_challenge = warp::path!("api" / "challenges")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(challenge_filter.clone())
        .and(config_filter.clone())
        .and_then(handle_create_challenge);

    let get_challenge = warp::path!("api" / "challenges" / String)
        .and(warp::get())
        .and(challenge_filter.clone())
        .and_then(handle_get_challenge);

    let attempt_challenge = warp::path!("api" / "challenges" / String / "attempts")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(challenge_filter.clone())
        .and(performance_filter.clone())
        .and_then(handle_challenge_attempt);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "PUT"]);

    health
        .or(logs)
        .or(get_performance)
        .or(put_performance)
        .or(submit_round)
        .or(create_challenge)
        .or(get_challenge)
        .or(attempt_challenge)
        .with(cors)
        .with(warp::log("spot_the_bot"))
}

fn validate_player_id(player_id: &str) -> Result<(), ApiError> {
    if player_id.trim().is_empty() || player_id.len() > MAX_PLAYER_ID_LEN {
        return Err(ApiError::InvalidPlayer(player_id.to_string()));
    }
    Ok(())
}

async fn handle_logs_request(
    query: LogsQuery,
    log_selector: Arc<LogSelector>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let mix = BotMix::for_tag(query.difficulty.as_deref());
    let logs = log_selector.select_mix(mix);
    Ok(warp::reply::with_status(
        warp::reply::json(&LogsResponse { logs }),
        StatusCode::OK,
    ))
}

async fn handle_get_performance(
    player_id: String,
    performance_repository: Arc<PerformanceRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Err(err) = validate_player_id(&player_id) {
        return Ok(err.into_reply());
    }

    let performance = performance_repository.load(&player_id).await;
    Ok(warp::reply::with_status(
        warp::reply::json(&performance),
        StatusCode::OK,
    ))
}

async fn handle_put_performance(
    player_id: String,
    mut performance: UserPerformance,
    performance_repository: Arc<PerformanceRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Err(err) = validate_player_id(&player_id) {
        return Ok(err.into_reply());
    }

    performance.schema_version = spotter_types::CURRENT_SCHEMA_VERSION;
    match performance_repository.save(&player_id, &performance).await {
        Ok(()) => Ok(warp::reply::with_status(
            warp::reply::json(&performance),
            StatusCode::OK,
        )),
        Err(err) => {
            error!("Failed to save performance for {}: {:#}", player_id, err);
            Ok(ApiError::Internal("Failed to save performance".to_string()).into_reply())
        }
    }
}

async fn handle_submit_round(
    request: SubmitRoundRequest,
    performance_repository: Arc<PerformanceRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Err(err) = validate_player_id(&request.player_id) {
        return Ok(err.into_reply());
    }
    if request.answers.is_empty() {
        return Ok(ApiError::EmptyRound.into_reply());
    }

    let prior = performance_repository.load(&request.player_id).await;
    let mut report = score_round(&prior, request.answers);
    if let Some(tier) = request.difficulty.as_deref().and_then(Tier::from_tag) {
        report.performance.difficulty_level = tier;
    }

    // The round still counts for the client when the store is unavailable
    if let Err(err) = performance_repository
        .save(&request.player_id, &report.performance)
        .await
    {
        error!(
            "Failed to save performance for {}: {:#}",
            request.player_id, err
        );
    }

    info!(
        "Round for {}: weighted {} simple {} ({})",
        request.player_id, report.weighted_score, report.simple_score, report.skill_level
    );

    Ok(warp::reply::with_status(
        warp::reply::json(&report),
        StatusCode::OK,
    ))
}

async fn handle_create_challenge(
    request: CreateChallengeRequest,
    challenge_repository: Arc<ChallengeRepository>,
    config: Arc<Config>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if request.logs.is_empty() {
        return Ok(
            ApiError::InvalidRequest("A challenge needs at least one log".to_string())
                .into_reply(),
        );
    }
    if request.score > 100 || request.weighted_score > 100 {
        return Ok(
            ApiError::InvalidRequest("Scores must be between 0 and 100".to_string()).into_reply(),
        );
    }

    let challenge = ChallengeBuilder::create(
        request.score,
        request.weighted_score,
        request.skill_level,
        request.logs,
    );

    let challenge = match challenge_repository.create_challenge(challenge).await {
        Ok(challenge) => challenge,
        Err(err) => {
            error!("Failed to store challenge: {:#}", err);
            return Ok(ApiError::Internal("Failed to create challenge".to_string()).into_reply());
        }
    };

    let encoded_data = match ChallengeBuilder::encode(&challenge) {
        Ok(encoded) => encoded,
        Err(err) => {
            error!("Failed to encode challenge {}: {:#}", challenge.id, err);
            return Ok(ApiError::Internal("Failed to create challenge".to_string()).into_reply());
        }
    };

    info!("Created challenge {}", challenge.id);

    let response = CreateChallengeResponse {
        challenge_url: ChallengeBuilder::challenge_url(&config.public_base_url, &challenge.id),
        challenge_id: challenge.id,
        encoded_data,
    };
    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::CREATED,
    ))
}

async fn handle_get_challenge(
    challenge_id: String,
    challenge_repository: Arc<ChallengeRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match challenge_repository.find_by_id(&challenge_id).await {
        Ok(Some(challenge)) => Ok(warp::reply::with_status(
            warp::reply::json(&challenge),
            StatusCode::OK,
        )),
        Ok(None) => Ok(ApiError::ChallengeNotFound(challenge_id).into_reply()),
        Err(err) => {
            error!("Failed to fetch challenge {}: {:#}", challenge_id, err);
            Ok(ApiError::Internal("Failed to fetch challenge".to_string()).into_reply())
        }
    }
}

async fn handle_challenge_attempt(
    challenge_id: String,
    request: ChallengeAttemptRequest,
    challenge_repository: Arc<ChallengeRepository>,
    performance_repository: Arc<PerformanceRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let challenge = match challenge_repository.find_by_id(&challenge_id).await {
        Ok(Some(challenge)) => challenge,
        Ok(None) => return Ok(ApiError::ChallengeNotFound(challenge_id).into_reply()),
        Err(err) => {
            error!("Failed to fetch challenge {}: {:#}", challenge_id, err);
            return Ok(ApiError::Internal("Failed to fetch challenge".to_string()).into_reply());
        }
    };

    if let Some(player_id) = &request.player_id {
        if let Err(err) = validate_player_id(player_id) {
            return Ok(err.into_reply());
        }
    }
    if request.answers.is_empty() {
        return Ok(ApiError::EmptyRound.into_reply());
    }

    let answers = match ChallengeBuilder::grade(&challenge, &request.answers) {
        Ok(answers) => answers,
        Err(err) => return Ok(ApiError::InvalidRequest(format!("{:#}", err)).into_reply()),
    };

    let prior = match &request.player_id {
        Some(player_id) => performance_repository.load(player_id).await,
        None => UserPerformance::default(),
    };
    let report = score_round(&prior, answers);

    if let Some(player_id) = &request.player_id {
        if let Err(err) = performance_repository
            .save(player_id, &report.performance)
            .await
        {
            error!("Failed to save performance for {}: {:#}", player_id, err);
        }
    }

    let outcome = ChallengeBuilder::compare(&challenge, &report);
    info!(
        "Challenge {} attempt: {} vs {} ({})",
        challenge.id,
        outcome.my_weighted_score,
        outcome.challenger_weighted_score,
        if outcome.won { "won" } else { "lost" }
    );

    Ok(warp::reply::with_status(
        warp::reply::json(&outcome),
        StatusCode::OK,
    ))
}
