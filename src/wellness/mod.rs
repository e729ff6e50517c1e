//! Pure wellness calculations.
//!
//! Every function here is deterministic: validated numeric inputs in,
//! derived value out. No I/O, no shared state.

pub mod bmi;
pub mod calories;
pub mod hydration;
pub mod sleep;

pub use bmi::calculate_bmi;
pub use calories::{calories_burned, ActivityLevel};
pub use hydration::{hydration_status, HydrationReport};
pub use sleep::{assess_sleep, SleepAssessment};

use thiserror::Error;

/// Input-validation failures for the wellness calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WellnessError {
    /// A numeric input was zero or negative.
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    /// The activity level is not one of the known values.
    #[error("invalid activity level '{0}': choose light, moderate, or vigorous")]
    UnknownActivityLevel(String),
}
