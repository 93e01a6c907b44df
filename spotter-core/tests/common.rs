#![allow(dead_code)]

use spotter_core::{GameSession, LogSelector, SessionEvent, SessionEventHandler};
use spotter_types::{Answer, SessionLog, Tier, UserPerformance};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};

/// Creates an answer with the given outcome, tier tag and pattern
pub fn create_answer(correct: bool, difficulty: &str, pattern: &str) -> Answer {
    Answer {
        log_id: format!("test-{}-{}", pattern, difficulty),
        user_guess: true,
        correct,
        actual_value: correct,
        difficulty: difficulty.to_string(),
        pattern: pattern.to_string(),
    }
}

/// Creates a round where every answer has the same outcome and tier
pub fn create_uniform_round(count: usize, correct: bool, tier: Tier) -> Vec<Answer> {
    (0..count)
        .map(|i| create_answer(correct, tier.as_str(), &format!("pattern-{}", i)))
        .collect()
}

/// Deterministic round of logs for a tier
pub fn create_seeded_logs(tier: Tier, seed: u64) -> Vec<SessionLog> {
    LogSelector::default().select_with_rng(tier, &mut StdRng::seed_from_u64(seed))
}

/// Creates a session from a fresh performance record
pub fn create_test_session() -> GameSession {
    GameSession::new(UserPerformance::default())
}

/// Answers every remaining log in the round, right or wrong
pub fn play_round(session: &mut GameSession, answer_correctly: bool) {
    while let Some(log) = session.current_log() {
        let guess = if answer_correctly { log.is_bot } else { !log.is_bot };
        session.submit_guess(guess).unwrap();
    }
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&SessionEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl SessionEventHandler for EventCollector {
    fn handle_event(&mut self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}
