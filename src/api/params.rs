//! Query-parameter decoding for the API endpoints.
//!
//! Every endpoint declares a raw params struct whose fields are all
//! optional strings, so extraction itself never fails; `decode` then
//! checks presence and parses types, collecting one [`ParamError`] per
//! offending parameter for the 422 response body. Domain rules
//! (positivity, enum membership) are checked later, in [`crate::wellness`].

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{ApiError, ParamError};

/// Query parameters for `/bmi`.
#[derive(Debug, Deserialize)]
pub struct BmiParams {
    pub weight: Option<String>,
    pub height: Option<String>,
}

impl BmiParams {
    /// Decode into (weight, height).
    pub fn decode(self) -> Result<(Decimal, Decimal), ApiError> {
        let mut errors = Vec::new();
        let weight = decimal_param(&mut errors, "weight", self.weight);
        let height = decimal_param(&mut errors, "height", self.height);

        match (weight, height) {
            (Some(weight), Some(height)) => Ok((weight, height)),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

/// Query parameters for `/calories`.
#[derive(Debug, Deserialize)]
pub struct CaloriesParams {
    pub weight: Option<String>,
    pub duration: Option<String>,
    pub activity_level: Option<String>,
}

impl CaloriesParams {
    /// Decode into (weight, duration, activity_level).
    pub fn decode(self) -> Result<(Decimal, Decimal, String), ApiError> {
        let mut errors = Vec::new();
        let weight = decimal_param(&mut errors, "weight", self.weight);
        let duration = decimal_param(&mut errors, "duration", self.duration);
        let level = string_param(&mut errors, "activity_level", self.activity_level);

        match (weight, duration, level) {
            (Some(weight), Some(duration), Some(level)) => Ok((weight, duration, level)),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

/// Query parameters for `/weather`.
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
}

impl WeatherParams {
    /// Decode into the city name.
    pub fn decode(self) -> Result<String, ApiError> {
        let mut errors = Vec::new();
        string_param(&mut errors, "city", self.city).ok_or(ApiError::Validation(errors))
    }
}

/// Query parameters for `/ask-openai`.
#[derive(Debug, Deserialize)]
pub struct AskParams {
    pub request: Option<String>,
}

impl AskParams {
    /// Decode into the user prompt.
    pub fn decode(self) -> Result<String, ApiError> {
        let mut errors = Vec::new();
        string_param(&mut errors, "request", self.request).ok_or(ApiError::Validation(errors))
    }
}

/// Query parameters for `/hydration`.
#[derive(Debug, Deserialize)]
pub struct HydrationParams {
    pub water_ml: Option<String>,
}

impl HydrationParams {
    /// Decode into milliliters of water.
    pub fn decode(self) -> Result<i64, ApiError> {
        let mut errors = Vec::new();
        int_param(&mut errors, "water_ml", self.water_ml).ok_or(ApiError::Validation(errors))
    }
}

/// Query parameters for `/sleep-score`.
#[derive(Debug, Deserialize)]
pub struct SleepParams {
    pub hours: Option<String>,
}

impl SleepParams {
    /// Decode into hours of sleep.
    pub fn decode(self) -> Result<Decimal, ApiError> {
        let mut errors = Vec::new();
        decimal_param(&mut errors, "hours", self.hours).ok_or(ApiError::Validation(errors))
    }
}

fn decimal_param(
    errors: &mut Vec<ParamError>,
    name: &'static str,
    value: Option<String>,
) -> Option<Decimal> {
    match value {
        None => {
            errors.push(ParamError::missing(name));
            None
        }
        Some(raw) => match raw.trim().parse::<Decimal>() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.push(ParamError::invalid(name, "must be a number"));
                None
            }
        },
    }
}

fn int_param(
    errors: &mut Vec<ParamError>,
    name: &'static str,
    value: Option<String>,
) -> Option<i64> {
    match value {
        None => {
            errors.push(ParamError::missing(name));
            None
        }
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.push(ParamError::invalid(name, "must be an integer"));
                None
            }
        },
    }
}

fn string_param(
    errors: &mut Vec<ParamError>,
    name: &'static str,
    value: Option<String>,
) -> Option<String> {
    match value {
        None => {
            errors.push(ParamError::missing(name));
            None
        }
        Some(value) => Some(value),
    }
}
