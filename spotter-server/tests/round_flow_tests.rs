mod test_helpers;

use spotter_core::pattern_hint;
use spotter_types::{RoundReport, SkillLevel, SubmitRoundRequest, Tier};
use test_helpers::*;

#[tokio::test]
async fn test_perfect_round_is_scored_and_saved() {
    let setup = TestServerSetup::new().await;
    let app = setup.app();

    let logs = fetch_logs(&app, "hard").await;
    let response = warp::test::request()
        .method("POST")
        .path("/api/rounds")
        .json(&SubmitRoundRequest {
            player_id: "device-1".to_string(),
            answers: answer_all(&logs, true),
            difficulty: Some("hard".to_string()),
        })
        .reply(&app)
        .await;

    assert_eq!(response.status(), 200);
    let report: RoundReport = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(report.weighted_score, 100);
    assert_eq!(report.simple_score, 100);
    assert_eq!(report.skill_level, SkillLevel::Expert);
    assert_eq!(report.answers.len(), logs.len());
    assert!(report.hints.is_empty());

    let stored = setup.performance_repository.load("device-1").await;
    assert_eq!(stored, report.performance);
    assert_eq!(stored.total_games, 1);
    assert_eq!(stored.current_streak, 1);
    assert_eq!(stored.difficulty_level, Tier::Hard);
    assert_eq!(stored.skill_level, SkillLevel::Expert);
}

#[tokio::test]
async fn test_rounds_accumulate_per_player() {
    let setup = TestServerSetup::new().await;
    let app = setup.app();

    let logs = fetch_logs(&app, "medium").await;
    for correctly in [true, false] {
        let response = warp::test::request()
            .method("POST")
            .path("/api/rounds")
            .json(&SubmitRoundRequest {
                player_id: "device-2".to_string(),
                answers: answer_all(&logs, correctly),
                difficulty: None,
            })
            .reply(&app)
            .await;
        assert_eq!(response.status(), 200);
    }

    let stored = setup.performance_repository.load("device-2").await;
    assert_eq!(stored.total_games, 2);
    assert_eq!(stored.best_weighted_score, 100);
    assert_eq!(stored.best_simple_score, 100);
    assert_eq!(stored.current_streak, 0);
    assert_eq!(stored.best_streak, 1);
    assert_eq!(stored.skill_level, SkillLevel::Learning);
    // No tier in the request keeps the stored one
    assert_eq!(stored.difficulty_level, Tier::Medium);

    // Another device starts from scratch
    assert_eq!(setup.performance_repository.load("device-3").await.total_games, 0);
}

#[tokio::test]
async fn test_unknown_tier_in_request_is_ignored() {
    let setup = TestServerSetup::new().await;
    let app = setup.app();

    let logs = fetch_logs(&app, "easy").await;
    let response = warp::test::request()
        .method("POST")
        .path("/api/rounds")
        .json(&SubmitRoundRequest {
            player_id: "device-4".to_string(),
            answers: answer_all(&logs, true),
            difficulty: Some("nightmare".to_string()),
        })
        .reply(&app)
        .await;

    assert_eq!(response.status(), 200);
    let report: RoundReport = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(report.performance.difficulty_level, Tier::Medium);
}

#[tokio::test]
async fn test_malformed_round_body_is_rejected() {
    let setup = TestServerSetup::new().await;
    let app = setup.app();

    let response = warp::test::request()
        .method("POST")
        .path("/api/rounds")
        .header("content-type", "application/json")
        .body(r#"{"player_id": "device-5"}"#)
        .reply(&app)
        .await;

    assert_eq!(response.status(), 400);
    assert_eq!(setup.performance_repository.load("device-5").await.total_games, 0);
}

#[tokio::test]
async fn test_missed_bots_come_back_with_hints() {
    let setup = TestServerSetup::new().await;
    let app = setup.app();

    let logs = fetch_logs(&app, "hard").await;
    let response = warp::test::request()
        .method("POST")
        .path("/api/rounds")
        .json(&SubmitRoundRequest {
            player_id: "device-6".to_string(),
            answers: answer_all(&logs, false),
            difficulty: None,
        })
        .reply(&app)
        .await;

    assert_eq!(response.status(), 200);
    let report: RoundReport = serde_json::from_slice(response.body()).unwrap();

    let bots: Vec<_> = logs.iter().filter(|log| log.is_bot).collect();
    assert_eq!(report.hints.len(), bots.len());
    for (hint, bot) in report.hints.iter().zip(&bots) {
        assert_eq!(hint.log_id, bot.id);
        assert_eq!(hint.hint, pattern_hint(&bot.pattern));
    }
    assert!(report.hints.iter().any(|hint| {
        hint.hint == "Minor version difference between User-Agent and Navigator"
    }));
}
