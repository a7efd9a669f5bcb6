//! Streak engine.
//!
//! Given a habit's weekly schedule and its log of completed days, the engine
//! answers two questions for any calendar day: which streak window contains
//! it ([`StreakEngine::compute_streak`]) and how it should be shown
//! ([`StreakEngine::classify_day`]).

mod classification;
mod engine;

pub use classification::DayClassification;
pub use engine::{StreakDescriptor, StreakEngine};
