pub use super::challenges::Entity as Challenges;
pub use super::performance_records::Entity as PerformanceRecords;
