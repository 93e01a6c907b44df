use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::{SkillLevel, Tier};

/// Bumped whenever a field is added to `UserPerformance`
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TierStats {
    pub total_attempts: u32,
    pub correct: u32,
    /// correct / total_attempts, 0.0 with no attempts
    pub avg_points: f64,
}

impl TierStats {
    pub fn record(&mut self, correct: bool) {
        self.total_attempts += 1;
        if correct {
            self.correct += 1;
        }
        self.avg_points = if self.total_attempts > 0 {
            self.correct as f64 / self.total_attempts as f64
        } else {
            0.0
        };
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DifficultyPerformance {
    pub easy: TierStats,
    pub medium: TierStats,
    pub hard: TierStats,
}

impl DifficultyPerformance {
    pub fn get(&self, tier: Tier) -> &TierStats {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Medium => &self.medium,
            Tier::Hard => &self.hard,
        }
    }

    pub fn get_mut(&mut self, tier: Tier) -> &mut TierStats {
        match tier {
            Tier::Easy => &mut self.easy,
            Tier::Medium => &mut self.medium,
            Tier::Hard => &mut self.hard,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PatternStats {
    pub attempts: u32,
    pub correct: u32,
    /// Tier tag the pattern was first seen at
    pub difficulty: String,
}

/// Accumulated game performance for one player, persisted as a single record.
///
/// Every field has a serde default, so records saved by older builds load with
/// the missing fields filled in instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct UserPerformance {
    pub schema_version: u32,
    pub total_games: u32,
    pub best_weighted_score: u32,
    pub best_simple_score: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub difficulty_level: Tier,
    pub skill_level: SkillLevel,
    pub last_played: Option<String>, // ISO 8601 string
    pub difficulty_performance: DifficultyPerformance,
    pub pattern_accuracy: BTreeMap<String, PatternStats>,
}

impl Default for UserPerformance {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            total_games: 0,
            best_weighted_score: 0,
            best_simple_score: 0,
            current_streak: 0,
            best_streak: 0,
            difficulty_level: Tier::Medium,
            skill_level: SkillLevel::Learning,
            last_played: None,
            difficulty_performance: DifficultyPerformance::default(),
            pattern_accuracy: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let perf = UserPerformance::default();
        assert_eq!(perf.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(perf.total_games, 0);
        assert_eq!(perf.difficulty_level, Tier::Medium);
        assert_eq!(perf.skill_level, SkillLevel::Learning);
        assert!(perf.last_played.is_none());
        assert!(perf.pattern_accuracy.is_empty());
    }

    #[test]
    fn test_missing_fields_fill_from_defaults() {
        let perf: UserPerformance =
            serde_json::from_str(r#"{"total_games": 4, "best_streak": 2}"#).unwrap();
        assert_eq!(perf.total_games, 4);
        assert_eq!(perf.best_streak, 2);
        assert_eq!(perf.difficulty_level, Tier::Medium);
        assert_eq!(perf.difficulty_performance.hard.total_attempts, 0);
        assert_eq!(perf.schema_version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_tier_stats_record() {
        let mut stats = TierStats::default();
        stats.record(true);
        stats.record(false);
        stats.record(true);
        stats.record(true);
        assert_eq!(stats.total_attempts, 4);
        assert_eq!(stats.correct, 3);
        assert!((stats.avg_points - 0.75).abs() < f64::EPSILON);
    }
}
