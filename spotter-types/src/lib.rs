pub mod game;
pub mod messages;
pub mod performance;
pub mod session_log;
pub mod errors;

// Re-export all types
pub use game::*;
pub use messages::*;
pub use performance::*;
pub use session_log::*;
pub use errors::*;
