pub mod challenge_repository;
pub mod performance_repository;

pub use challenge_repository::ChallengeRepository;
pub use performance_repository::PerformanceRepository;
