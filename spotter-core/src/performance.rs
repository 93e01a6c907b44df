use chrono::{DateTime, Utc};
use spotter_types::{Answer, PatternStats, UserPerformance};
use tracing::debug;

use crate::ScoringEngine;

pub struct PerformanceTracker;

impl PerformanceTracker {
    /// Fold a finished round into the running performance record
    pub fn apply_round_result(
        prior: &UserPerformance,
        answers: &[Answer],
        weighted_score: u32,
        simple_score: u32,
    ) -> UserPerformance {
        Self::apply_round_result_at(prior, answers, weighted_score, simple_score, Utc::now())
    }

    /// Same as `apply_round_result` with an explicit completion time
    pub fn apply_round_result_at(
        prior: &UserPerformance,
        answers: &[Answer],
        weighted_score: u32,
        simple_score: u32,
        now: DateTime<Utc>,
    ) -> UserPerformance {
        let mut updated = prior.clone();

        updated.total_games += 1;
        updated.best_weighted_score = updated.best_weighted_score.max(weighted_score);
        updated.best_simple_score = updated.best_simple_score.max(simple_score);
        updated.last_played = Some(now.to_rfc3339());

        // Streaks are all-or-nothing per round
        if answers.iter().all(|a| a.correct) {
            updated.current_streak += 1;
            updated.best_streak = updated.best_streak.max(updated.current_streak);
        } else {
            updated.current_streak = 0;
        }

        for answer in answers {
            // Unknown tags still count toward their pattern, just not toward a tier
            if let Some(tier) = answer.tier() {
                updated
                    .difficulty_performance
                    .get_mut(tier)
                    .record(answer.correct);
            }

            let pattern = updated
                .pattern_accuracy
                .entry(answer.pattern.clone())
                .or_insert_with(|| PatternStats {
                    attempts: 0,
                    correct: 0,
                    difficulty: answer.difficulty.clone(),
                });
            pattern.attempts += 1;
            if answer.correct {
                pattern.correct += 1;
            }
        }

        // Round-scoped, not the lifetime hard counters
        let hard_correct = ScoringEngine::hard_correct(answers);
        updated.skill_level = ScoringEngine::classify_skill(weighted_score, hard_correct);

        debug!(
            "Applied round: games={} weighted={} simple={} streak={} skill={}",
            updated.total_games,
            weighted_score,
            simple_score,
            updated.current_streak,
            updated.skill_level
        );

        updated
    }
}
