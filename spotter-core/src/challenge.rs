use anyhow::{Context, Result, anyhow, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use rand::Rng;
use std::collections::HashSet;

use spotter_types::{Answer, Challenge, ChallengeOutcome, RoundReport, SessionLog, SkillLevel};

use crate::log_selector::random_id;

pub const CHALLENGE_ID_LEN: usize = 12;

pub struct ChallengeBuilder;

impl ChallengeBuilder {
    pub fn create(
        score: u32,
        weighted_score: u32,
        skill_level: SkillLevel,
        logs: Vec<SessionLog>,
    ) -> Challenge {
        Self::create_with_rng(score, weighted_score, skill_level, logs, &mut rand::rng())
    }

    pub fn create_with_rng<R: Rng + ?Sized>(
        score: u32,
        weighted_score: u32,
        skill_level: SkillLevel,
        logs: Vec<SessionLog>,
        rng: &mut R,
    ) -> Challenge {
        Challenge {
            id: random_id(rng, CHALLENGE_ID_LEN),
            challenger_score: score,
            challenger_weighted_score: weighted_score,
            challenger_skill_level: skill_level,
            logs,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Freeze a finished round so a friend can replay the same logs
    pub fn from_round(report: &RoundReport, logs: Vec<SessionLog>) -> Challenge {
        Self::create(
            report.simple_score,
            report.weighted_score,
            report.skill_level,
            logs,
        )
    }

    /// Self-contained share token carrying the whole challenge
    pub fn encode(challenge: &Challenge) -> Result<String> {
        let json = serde_json::to_vec(challenge).context("Failed to serialize challenge")?;
        Ok(STANDARD.encode(json))
    }

    pub fn decode(token: &str) -> Result<Challenge> {
        let bytes = STANDARD
            .decode(token.trim())
            .context("Challenge token is not valid base64")?;
        serde_json::from_slice(&bytes).context("Challenge token does not contain a challenge")
    }

    pub fn challenge_url(base_url: &str, challenge_id: &str) -> String {
        format!("{}/challenge/{}", base_url.trim_end_matches('/'), challenge_id)
    }

    /// Rebuild submitted answers from the challenge's own logs so the client only
    /// supplies guesses; correctness, tier and pattern come from the stored logs.
    /// Every challenge log must be answered exactly once.
    pub fn grade(challenge: &Challenge, submitted: &[Answer]) -> Result<Vec<Answer>> {
        let mut seen = HashSet::with_capacity(submitted.len());
        let graded = submitted
            .iter()
            .map(|answer| {
                let log = challenge
                    .logs
                    .iter()
                    .find(|log| log.id == answer.log_id)
                    .ok_or_else(|| anyhow!("Unknown log {} for challenge {}", answer.log_id, challenge.id))?;
                if !seen.insert(log.id.as_str()) {
                    bail!("Log {} answered more than once", log.id);
                }
                Ok(Answer {
                    log_id: log.id.clone(),
                    user_guess: answer.user_guess,
                    correct: answer.user_guess == log.is_bot,
                    actual_value: log.is_bot,
                    difficulty: log.difficulty.as_str().to_string(),
                    pattern: log.pattern.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if graded.len() != challenge.logs.len() {
            bail!(
                "Challenge {} has {} logs but {} were answered",
                challenge.id,
                challenge.logs.len(),
                graded.len()
            );
        }
        Ok(graded)
    }

    /// The challenged player wins only by strictly beating the weighted score
    pub fn compare(challenge: &Challenge, mine: &RoundReport) -> ChallengeOutcome {
        ChallengeOutcome {
            challenge_id: challenge.id.clone(),
            won: mine.weighted_score > challenge.challenger_weighted_score,
            my_score: mine.simple_score,
            my_weighted_score: mine.weighted_score,
            my_skill_level: mine.skill_level,
            challenger_score: challenge.challenger_score,
            challenger_weighted_score: challenge.challenger_weighted_score,
            challenger_skill_level: challenge.challenger_skill_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_catalog::HUMANS;
    use crate::score_round;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use spotter_types::{Answer, UserPerformance};

    fn report_with_weighted(weighted_score: u32) -> RoundReport {
        let mut report = score_round(&UserPerformance::default(), Vec::<Answer>::new());
        report.weighted_score = weighted_score;
        report
    }

    #[test]
    fn test_create_assigns_short_id() {
        let mut rng = StdRng::seed_from_u64(5);
        let challenge = ChallengeBuilder::create_with_rng(85, 78, SkillLevel::Advanced, vec![], &mut rng);
        assert_eq!(challenge.id.len(), CHALLENGE_ID_LEN);
        assert_eq!(challenge.challenger_weighted_score, 78);
        assert_eq!(challenge.challenger_skill_level, SkillLevel::Advanced);
    }

    #[test]
    fn test_token_round_trip_keeps_logs() {
        let logs = vec![HUMANS[0].instantiate("h1".to_string())];
        let challenge = ChallengeBuilder::create(90, 88, SkillLevel::Advanced, logs);
        let token = ChallengeBuilder::encode(&challenge).unwrap();
        let decoded = ChallengeBuilder::decode(&token).unwrap();
        assert_eq!(decoded, challenge);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(ChallengeBuilder::decode("not base64!!").is_err());
        assert!(ChallengeBuilder::decode(&STANDARD.encode("{}")).is_err());
    }

    #[test]
    fn test_compare_requires_strict_win() {
        let challenge = ChallengeBuilder::create(80, 70, SkillLevel::Intermediate, vec![]);
        assert!(ChallengeBuilder::compare(&challenge, &report_with_weighted(71)).won);
        assert!(!ChallengeBuilder::compare(&challenge, &report_with_weighted(70)).won);
        assert!(!ChallengeBuilder::compare(&challenge, &report_with_weighted(10)).won);
    }

    #[test]
    fn test_grade_uses_stored_ground_truth() {
        let logs = vec![
            crate::log_catalog::HARD_BOTS[0].instantiate("bot".to_string()),
            HUMANS[0].instantiate("human".to_string()),
        ];
        let challenge = ChallengeBuilder::create(0, 0, SkillLevel::Learning, logs);

        // Client claims both were correct and lies about the tier
        let submitted = vec![
            Answer {
                log_id: "bot".to_string(),
                user_guess: false,
                correct: true,
                actual_value: false,
                difficulty: "easy".to_string(),
                pattern: "whatever".to_string(),
            },
            Answer {
                log_id: "human".to_string(),
                user_guess: false,
                correct: true,
                actual_value: false,
                difficulty: "easy".to_string(),
                pattern: "whatever".to_string(),
            },
        ];

        let graded = ChallengeBuilder::grade(&challenge, &submitted).unwrap();
        assert!(!graded[0].correct);
        assert!(graded[0].actual_value);
        assert_eq!(graded[0].difficulty, "hard");
        assert_eq!(graded[0].pattern, "minor-version-diff");
        assert!(graded[1].correct);
    }

    fn guess(log_id: &str, user_guess: bool) -> Answer {
        Answer {
            log_id: log_id.to_string(),
            user_guess,
            correct: true,
            actual_value: user_guess,
            difficulty: "hard".to_string(),
            pattern: "p".to_string(),
        }
    }

    fn three_log_challenge() -> Challenge {
        let logs = vec![
            crate::log_catalog::HARD_BOTS[0].instantiate("a".to_string()),
            HUMANS[0].instantiate("b".to_string()),
            HUMANS[1].instantiate("c".to_string()),
        ];
        ChallengeBuilder::create(90, 99, SkillLevel::Expert, logs)
    }

    #[test]
    fn test_grade_rejects_unknown_log() {
        let challenge = ChallengeBuilder::create(0, 0, SkillLevel::Learning, vec![]);
        assert!(ChallengeBuilder::grade(&challenge, &[guess("ghost", true)]).is_err());
    }

    #[test]
    fn test_grade_rejects_partial_replay() {
        let challenge = three_log_challenge();
        let err = ChallengeBuilder::grade(&challenge, &[guess("a", true)]).unwrap_err();
        assert!(err.to_string().contains("has 3 logs but 1 were answered"));
    }

    #[test]
    fn test_grade_rejects_repeated_log() {
        let challenge = three_log_challenge();
        let submitted = vec![guess("a", true), guess("a", true), guess("a", true)];
        let err = ChallengeBuilder::grade(&challenge, &submitted).unwrap_err();
        assert!(err.to_string().contains("answered more than once"));
    }

    #[test]
    fn test_grade_accepts_full_replay_in_any_order() {
        let challenge = three_log_challenge();
        let submitted = vec![guess("c", false), guess("a", true), guess("b", true)];
        let graded = ChallengeBuilder::grade(&challenge, &submitted).unwrap();
        assert_eq!(graded.len(), 3);
        assert!(graded[0].correct);
        assert!(graded[1].correct);
        assert!(!graded[2].correct);
    }

    #[test]
    fn test_challenge_url() {
        assert_eq!(
            ChallengeBuilder::challenge_url("https://example.com/", "abc"),
            "https://example.com/challenge/abc"
        );
    }
}
