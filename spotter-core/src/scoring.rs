use spotter_types::{Answer, SkillLevel, Tier, TierBreakdown};

/// Points awarded for one answer at a given tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierWeights {
    pub correct: f64,
    pub incorrect: f64,
}

pub const EASY_WEIGHTS: TierWeights = TierWeights {
    correct: 1.0,
    incorrect: -0.5,
};
pub const MEDIUM_WEIGHTS: TierWeights = TierWeights {
    correct: 2.0,
    incorrect: -1.0,
};
pub const HARD_WEIGHTS: TierWeights = TierWeights {
    correct: 4.0,
    incorrect: -1.0,
};

/// The scoring-relevant part of an answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub correct: bool,
    /// `None` for a tag the scorer does not recognise
    pub tier: Option<Tier>,
}

impl Outcome {
    pub fn new(correct: bool, tier: Tier) -> Self {
        Self {
            correct,
            tier: Some(tier),
        }
    }
}

impl From<&Answer> for Outcome {
    fn from(answer: &Answer) -> Self {
        Self {
            correct: answer.correct,
            tier: answer.tier(),
        }
    }
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Weight row for a tier; unrecognised tags score like medium
    pub fn weights_for(tier: Option<Tier>) -> TierWeights {
        match tier {
            Some(Tier::Easy) => EASY_WEIGHTS,
            Some(Tier::Hard) => HARD_WEIGHTS,
            Some(Tier::Medium) | None => MEDIUM_WEIGHTS,
        }
    }

    /// Normalised 0-100 score that rewards harder items more.
    ///
    /// Every answer adds its correct-weight to the ceiling. The running total is
    /// floored at zero once at the end, so a bad round scores 0, never less.
    pub fn weighted_score(outcomes: &[Outcome]) -> u32 {
        let mut total_points = 0.0;
        let mut max_possible_points = 0.0;

        for outcome in outcomes {
            let weights = Self::weights_for(outcome.tier);
            max_possible_points += weights.correct;
            total_points += if outcome.correct {
                weights.correct
            } else {
                weights.incorrect
            };
        }

        let total_points = f64::max(0.0, total_points);
        if max_possible_points > 0.0 {
            (total_points / max_possible_points * 100.0).round() as u32
        } else {
            0
        }
    }

    pub fn weighted_score_for_answers(answers: &[Answer]) -> u32 {
        let outcomes: Vec<Outcome> = answers.iter().map(Outcome::from).collect();
        Self::weighted_score(&outcomes)
    }

    /// Plain percentage of correct answers, 0 for an empty round
    pub fn simple_score(answers: &[Answer]) -> u32 {
        if answers.is_empty() {
            return 0;
        }
        let correct = answers.iter().filter(|a| a.correct).count();
        (correct as f64 / answers.len() as f64 * 100.0).round() as u32
    }

    /// Correct answers on hard-tier logs within this round only
    pub fn hard_correct(answers: &[Answer]) -> u32 {
        answers
            .iter()
            .filter(|a| a.correct && a.tier() == Some(Tier::Hard))
            .count() as u32
    }

    /// Map a weighted score to a skill label.
    ///
    /// The hard-pattern bonus sits below the Beginner threshold, so a 55-59
    /// score with a hard catch reports Advanced while 60-69 reports Beginner.
    pub fn classify_skill(weighted_score: u32, hard_correct: u32) -> SkillLevel {
        if weighted_score >= 90 {
            SkillLevel::Expert
        } else if weighted_score >= 80 {
            SkillLevel::Advanced
        } else if weighted_score >= 70 {
            SkillLevel::Intermediate
        } else if weighted_score >= 60 {
            SkillLevel::Beginner
        } else if hard_correct > 0 && weighted_score >= 55 {
            SkillLevel::Advanced
        } else {
            SkillLevel::Learning
        }
    }

    /// Per-tier attempt and correct counts for the results screen
    pub fn tier_breakdown(answers: &[Answer]) -> Vec<TierBreakdown> {
        Tier::ALL
            .iter()
            .map(|&tier| {
                let in_tier = answers.iter().filter(|a| a.tier() == Some(tier));
                let (attempts, correct) = in_tier.fold((0, 0), |(attempts, correct), a| {
                    (attempts + 1, correct + u32::from(a.correct))
                });
                TierBreakdown {
                    tier,
                    attempts,
                    correct,
                }
            })
            .collect()
    }
}
