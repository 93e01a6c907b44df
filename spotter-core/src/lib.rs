pub mod challenge;
pub mod difficulty;
pub mod game_events;
pub mod game_session;
pub mod log_catalog;
pub mod log_selector;
pub mod performance;
pub mod scoring;

// Re-export main components
pub use challenge::*;
pub use difficulty::*;
pub use game_events::*;
pub use game_session::*;
pub use log_catalog::pattern_hint;
pub use log_selector::*;
pub use performance::*;
pub use scoring::*;
