use spotter_types::{Answer, BotHint, GameError, RoundReport, SessionLog, Tier, UserPerformance};
use thiserror::Error;
use tracing::{debug, info};

use crate::log_catalog::pattern_hint;
use crate::{
    PerformanceTracker, ScoringEngine, SessionEvent, SessionEventBus, SessionEventHandler,
    next_difficulty,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("no round in progress (session is {0})")]
    NotInRound(&'static str),
    #[error("a round is already in progress")]
    RoundInProgress,
    #[error("cannot start a round without logs")]
    EmptyRound,
}

impl SessionError {
    pub fn to_game_error(&self) -> GameError {
        match self {
            SessionError::NotInRound("reporting") => GameError::RoundAlreadyFinished,
            SessionError::NotInRound(_) => GameError::RoundNotStarted,
            SessionError::RoundInProgress => GameError::InvalidGameState {
                current_state: "in-round".to_string(),
            },
            SessionError::EmptyRound => GameError::EmptyRound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundMode {
    /// Normal play, difficulty adapts as answers come in
    Adaptive,
    /// Replaying a friend's fixed logs, no adaptation
    Challenge,
}

#[derive(Debug, Clone)]
pub struct ActiveRound {
    logs: Vec<SessionLog>,
    index: usize,
    answers: Vec<Answer>,
    recent: Vec<bool>,
    mode: RoundMode,
}

#[derive(Debug, Clone)]
pub enum SessionState {
    Idle,
    InRound(ActiveRound),
    Reporting(RoundReport),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::InRound(_) => "in-round",
            SessionState::Reporting(_) => "reporting",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub answer: Answer,
    pub difficulty_change: Option<(Tier, Tier)>,
    pub round_finished: bool,
}

/// Drives one player's rounds: idle -> in-round -> reporting -> (idle | in-round)
#[derive(Debug)]
pub struct GameSession {
    state: SessionState,
    performance: UserPerformance,
    current_tier: Tier,
    event_bus: SessionEventBus,
}

impl GameSession {
    pub fn new(performance: UserPerformance) -> Self {
        let current_tier = performance.difficulty_level;
        Self {
            state: SessionState::Idle,
            performance,
            current_tier,
            event_bus: SessionEventBus::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn SessionEventHandler + Send>) {
        self.event_bus.add_handler(handler);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn performance(&self) -> &UserPerformance {
        &self.performance
    }

    /// Tier the next batch of logs should be requested at
    pub fn current_tier(&self) -> Tier {
        self.current_tier
    }

    pub fn start_round(&mut self, logs: Vec<SessionLog>) -> Result<(), SessionError> {
        self.begin(logs, RoundMode::Adaptive)
    }

    pub fn start_challenge_round(&mut self, logs: Vec<SessionLog>) -> Result<(), SessionError> {
        self.begin(logs, RoundMode::Challenge)
    }

    fn begin(&mut self, logs: Vec<SessionLog>, mode: RoundMode) -> Result<(), SessionError> {
        if matches!(self.state, SessionState::InRound(_)) {
            return Err(SessionError::RoundInProgress);
        }
        if logs.is_empty() {
            return Err(SessionError::EmptyRound);
        }

        info!(
            "Starting {:?} round with {} logs at {}",
            mode,
            logs.len(),
            self.current_tier
        );
        self.event_bus.publish(SessionEvent::RoundStarted {
            tier: self.current_tier,
            log_count: logs.len(),
        });

        let capacity = logs.len();
        self.state = SessionState::InRound(ActiveRound {
            logs,
            index: 0,
            answers: Vec::with_capacity(capacity),
            recent: Vec::with_capacity(capacity),
            mode,
        });
        Ok(())
    }

    pub fn current_log(&self) -> Option<&SessionLog> {
        match &self.state {
            SessionState::InRound(round) => round.logs.get(round.index),
            _ => None,
        }
    }

    /// (answered, total) for the round in progress
    pub fn progress(&self) -> Option<(usize, usize)> {
        match &self.state {
            SessionState::InRound(round) => Some((round.index, round.logs.len())),
            _ => None,
        }
    }

    /// Record a bot/human guess for the current log
    pub fn submit_guess(&mut self, guessed_bot: bool) -> Result<GuessOutcome, SessionError> {
        let round = match &mut self.state {
            SessionState::InRound(round) => round,
            other => return Err(SessionError::NotInRound(other.name())),
        };

        let log = &round.logs[round.index];
        let correct = guessed_bot == log.is_bot;
        let answer = Answer {
            log_id: log.id.clone(),
            user_guess: guessed_bot,
            correct,
            actual_value: log.is_bot,
            difficulty: log.difficulty.as_str().to_string(),
            pattern: log.pattern.clone(),
        };

        round.answers.push(answer.clone());
        round.recent.push(correct);
        round.index += 1;

        let mut difficulty_change = None;
        if round.mode == RoundMode::Adaptive {
            let next = next_difficulty(self.current_tier, &round.recent);
            if next != self.current_tier {
                debug!("Difficulty changed: {} -> {}", self.current_tier, next);
                difficulty_change = Some((self.current_tier, next));
                self.current_tier = next;
            }
        }

        let round_finished = round.index >= round.logs.len();

        self.event_bus.publish(SessionEvent::GuessRecorded {
            log_id: answer.log_id.clone(),
            correct,
        });
        if let Some((from, to)) = difficulty_change {
            self.event_bus
                .publish(SessionEvent::DifficultyChanged { from, to });
        }

        if round_finished {
            self.finish_round();
        }

        Ok(GuessOutcome {
            answer,
            difficulty_change,
            round_finished,
        })
    }

    fn finish_round(&mut self) {
        let round = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::InRound(round) => round,
            other => {
                self.state = other;
                return;
            }
        };

        let mut report = score_round(&self.performance, round.answers);
        if round.mode == RoundMode::Adaptive {
            report.performance.difficulty_level = self.current_tier;
        }
        self.performance = report.performance.clone();

        info!(
            "Round complete: weighted={} simple={} skill={}",
            report.weighted_score, report.simple_score, report.skill_level
        );
        self.event_bus.publish(SessionEvent::RoundCompleted {
            weighted_score: report.weighted_score,
            simple_score: report.simple_score,
            skill_level: report.skill_level,
        });

        self.state = SessionState::Reporting(report);
    }

    pub fn report(&self) -> Option<&RoundReport> {
        match &self.state {
            SessionState::Reporting(report) => Some(report),
            _ => None,
        }
    }

    /// Abandon whatever is in progress and go back to idle
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.event_bus.publish(SessionEvent::SessionReset);
    }
}

/// Score a complete answer list and fold it into `prior`
pub fn score_round(prior: &UserPerformance, answers: Vec<Answer>) -> RoundReport {
    let weighted_score = ScoringEngine::weighted_score_for_answers(&answers);
    let simple_score = ScoringEngine::simple_score(&answers);
    let hard_correct = ScoringEngine::hard_correct(&answers);
    let skill_level = ScoringEngine::classify_skill(weighted_score, hard_correct);
    let tier_breakdown = ScoringEngine::tier_breakdown(&answers);
    let hints = missed_bot_hints(&answers);
    let performance =
        PerformanceTracker::apply_round_result(prior, &answers, weighted_score, simple_score);

    RoundReport {
        answers,
        weighted_score,
        simple_score,
        skill_level,
        hard_correct,
        tier_breakdown,
        hints,
        performance,
    }
}

fn missed_bot_hints(answers: &[Answer]) -> Vec<BotHint> {
    answers
        .iter()
        .filter(|answer| answer.actual_value && !answer.correct)
        .map(|answer| BotHint {
            log_id: answer.log_id.clone(),
            pattern: answer.pattern.clone(),
            hint: pattern_hint(&answer.pattern).to_string(),
        })
        .collect()
}
