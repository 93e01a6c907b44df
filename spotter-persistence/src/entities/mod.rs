pub mod prelude;

pub mod challenges;
pub mod performance_records;
