#![allow(dead_code)]

use migration::{Migrator, MigratorTrait};
use spotter_core::LogSelector;
use spotter_persistence::connection::connect_to_memory_database;
use spotter_persistence::{ChallengeRepository, PerformanceRepository};
use spotter_server::{config::Config, create_routes};
use spotter_types::{Answer, LogsResponse, SessionLog};
use std::sync::Arc;
use warp::Filter;

pub const TEST_BASE_URL: &str = "https://spot.example";

/// Test setup that keeps handles on the repositories behind the routes
pub struct TestServerSetup {
    pub log_selector: Arc<LogSelector>,
    pub performance_repository: Arc<PerformanceRepository>,
    pub challenge_repository: Arc<ChallengeRepository>,
    pub config: Arc<Config>,
}

impl TestServerSetup {
    pub async fn new() -> Self {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let config = Config {
            public_base_url: TEST_BASE_URL.to_string(),
            ..Config::default()
        };

        Self {
            log_selector: Arc::new(LogSelector::new(config.round_size)),
            performance_repository: Arc::new(PerformanceRepository::new(db.clone())),
            challenge_repository: Arc::new(ChallengeRepository::new(db)),
            config: Arc::new(config),
        }
    }

    pub fn app(&self) -> impl Filter<Extract = impl warp::Reply + use<>, Error = warp::Rejection> + Clone + use<> {
        create_routes(
            self.log_selector.clone(),
            self.performance_repository.clone(),
            self.challenge_repository.clone(),
            self.config.clone(),
        )
    }
}

/// Fetch a generated round through the API
pub async fn fetch_logs<F>(app: &F, difficulty: &str) -> Vec<SessionLog>
where
    F: Filter + 'static,
    F::Extract: warp::Reply + Send,
{
    let response = warp::test::request()
        .method("GET")
        .path(&format!("/api/logs?difficulty={}", difficulty))
        .reply(app)
        .await;
    assert_eq!(response.status(), 200);

    let body: LogsResponse = serde_json::from_slice(response.body()).unwrap();
    body.logs
}

/// Answer every log, either all correctly or all wrongly
pub fn answer_all(logs: &[SessionLog], correctly: bool) -> Vec<Answer> {
    logs.iter()
        .map(|log| {
            let user_guess = if correctly { log.is_bot } else { !log.is_bot };
            Answer {
                log_id: log.id.clone(),
                user_guess,
                correct: user_guess == log.is_bot,
                actual_value: log.is_bot,
                difficulty: log.difficulty.as_str().to_string(),
                pattern: log.pattern.clone(),
            }
        })
        .collect()
}
