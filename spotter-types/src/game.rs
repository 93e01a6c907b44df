use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::UserPerformance;

/// Difficulty tier of a session log, and of the round mix requested from the selector
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Tier {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        }
    }

    /// Parse a wire tag. Tags are matched exactly, so "Hard" is not a tier.
    pub fn from_tag(tag: &str) -> Option<Tier> {
        match tag {
            "easy" => Some(Tier::Easy),
            "medium" => Some(Tier::Medium),
            "hard" => Some(Tier::Hard),
            _ => None,
        }
    }

    /// One step harder, saturating at `Hard`
    pub fn harder(self) -> Tier {
        match self {
            Tier::Easy => Tier::Medium,
            Tier::Medium | Tier::Hard => Tier::Hard,
        }
    }

    /// One step easier, saturating at `Easy`
    pub fn easier(self) -> Tier {
        match self {
            Tier::Hard => Tier::Medium,
            Tier::Medium | Tier::Easy => Tier::Easy,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SkillLevel {
    #[default]
    Learning,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn from_label(label: &str) -> Option<SkillLevel> {
        match label {
            "Learning" => Some(SkillLevel::Learning),
            "Beginner" => Some(SkillLevel::Beginner),
            "Intermediate" => Some(SkillLevel::Intermediate),
            "Advanced" => Some(SkillLevel::Advanced),
            "Expert" => Some(SkillLevel::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillLevel::Learning => "Learning",
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        };
        f.write_str(label)
    }
}

/// One guess on one presented log. Lives only for the duration of a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub log_id: String,
    pub user_guess: bool,
    pub correct: bool,
    pub actual_value: bool,
    /// Raw tier tag of the log; unknown tags are kept so the scorer can fall back to medium
    pub difficulty: String,
    pub pattern: String,
}

impl Answer {
    pub fn tier(&self) -> Option<Tier> {
        Tier::from_tag(&self.difficulty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierBreakdown {
    pub tier: Tier,
    pub attempts: u32,
    pub correct: u32,
}

/// Why a bot the player let through was a bot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BotHint {
    pub log_id: String,
    pub pattern: String,
    pub hint: String,
}

/// Everything the results screen needs once a round has been reduced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundReport {
    pub answers: Vec<Answer>,
    pub weighted_score: u32,
    pub simple_score: u32,
    pub skill_level: SkillLevel,
    pub hard_correct: u32,
    pub tier_breakdown: Vec<TierBreakdown>,
    /// One entry per bot guessed as human, in answer order
    #[serde(default)]
    pub hints: Vec<BotHint>,
    pub performance: UserPerformance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChallengeOutcome {
    pub challenge_id: String,
    pub won: bool,
    pub my_score: u32,
    pub my_weighted_score: u32,
    pub my_skill_level: SkillLevel,
    pub challenger_score: u32,
    pub challenger_weighted_score: u32,
    pub challenger_skill_level: SkillLevel,
}
