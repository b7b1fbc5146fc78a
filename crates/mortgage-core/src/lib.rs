pub mod analysis;
pub mod calculator;
pub mod error;
pub mod format;
pub mod lifecycle;
pub mod schedule;
pub mod types;

#[cfg(feature = "export")]
pub mod report;

pub use calculator::AmortizationCalculator;
pub use error::MortgageError;
pub use schedule::{Schedule, ScheduleRow};
pub use types::*;

/// Standard result type for all mortgage operations
pub type MortgageResult<T> = Result<T, MortgageError>;
