use spotter_types::{SkillLevel, Tier};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    RoundStarted {
        tier: Tier,
        log_count: usize,
    },
    GuessRecorded {
        log_id: String,
        correct: bool,
    },
    DifficultyChanged {
        from: Tier,
        to: Tier,
    },
    RoundCompleted {
        weighted_score: u32,
        simple_score: u32,
        skill_level: SkillLevel,
    },
    SessionReset,
}

/// Event handler trait for reacting to session events
pub trait SessionEventHandler {
    fn handle_event(&mut self, event: SessionEvent);
}

/// Simple event bus for distributing session events
pub struct SessionEventBus {
    handlers: Vec<Box<dyn SessionEventHandler + Send>>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn SessionEventHandler + Send>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: SessionEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
