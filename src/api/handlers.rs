//! HTTP API handlers.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::upstream::{OpenAiClient, WeatherClient, COMPLETION_PROVIDER, WEATHER_PROVIDER};
use crate::wellness;

use super::params::{
    AskParams, BmiParams, CaloriesParams, HydrationParams, SleepParams, WeatherParams,
};

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather provider client.
    pub weather: WeatherClient,
    /// Completion provider client.
    pub openai: OpenAiClient,
}

impl AppState {
    /// Create app state from config.
    pub fn new(config: &Config) -> Self {
        Self {
            weather: WeatherClient::new(config),
            openai: OpenAiClient::new(config),
        }
    }
}

/// Root response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Greeting message.
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// BMI response.
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    /// Body Mass Index, rounded to 2 decimals.
    pub bmi: Decimal,
}

/// Calories response.
#[derive(Debug, Serialize)]
pub struct CaloriesResponse {
    /// Estimated calories burned, rounded to 2 decimals.
    pub calories_burned: Decimal,
}

/// Weather response.
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    /// City the conditions apply to, echoed from the request.
    pub city: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Short text description of conditions.
    pub description: String,
}

/// Completion response.
#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    /// Assistant message text.
    pub response: String,
}

/// Hydration response.
#[derive(Debug, Serialize)]
pub struct HydrationResponse {
    /// Short status line.
    pub status: &'static str,
    /// What to do about it.
    pub advice: &'static str,
}

/// Sleep score response.
#[derive(Debug, Serialize)]
pub struct SleepScoreResponse {
    /// Score out of 100.
    pub score: u32,
    /// Short status line.
    pub status: &'static str,
}

/// Root handler - confirms the API is running.
pub async fn root() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Wellness API is running",
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Calculate Body Mass Index from weight (kg) and height (m or cm).
pub async fn bmi(Query(params): Query<BmiParams>) -> Result<Json<BmiResponse>> {
    let (weight, height) = params.decode()?;
    let bmi = wellness::calculate_bmi(weight, height)?;

    Ok(Json(BmiResponse { bmi }))
}

/// Estimate calories burned from weight, duration, and activity level.
pub async fn calories(Query(params): Query<CaloriesParams>) -> Result<Json<CaloriesResponse>> {
    let (weight, duration, activity_level) = params.decode()?;
    let calories_burned = wellness::calories_burned(weight, duration, &activity_level)?;

    Ok(Json(CaloriesResponse { calories_burned }))
}

/// Fetch current weather conditions for a city.
pub async fn weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherResponse>> {
    let city = params.decode()?;

    let report = state
        .weather
        .current(&city)
        .await
        .map_err(|err| ApiError::upstream(WEATHER_PROVIDER, err))?;

    Ok(Json(WeatherResponse {
        city,
        temperature: report.temperature,
        description: report.description,
    }))
}

/// Forward a prompt to the completion provider.
pub async fn ask_openai(
    State(state): State<AppState>,
    Query(params): Query<AskParams>,
) -> Result<Json<CompletionResponse>> {
    let prompt = params.decode()?;

    let response = state
        .openai
        .complete(&prompt)
        .await
        .map_err(|err| ApiError::upstream(COMPLETION_PROVIDER, err))?;

    Ok(Json(CompletionResponse { response }))
}

/// Classify daily water intake.
pub async fn hydration(Query(params): Query<HydrationParams>) -> Result<Json<HydrationResponse>> {
    let water_ml = params.decode()?;
    let report = wellness::hydration_status(water_ml);

    Ok(Json(HydrationResponse {
        status: report.status,
        advice: report.advice,
    }))
}

/// Score a night's sleep.
pub async fn sleep_score(Query(params): Query<SleepParams>) -> Result<Json<SleepScoreResponse>> {
    let hours = params.decode()?;
    let assessment = wellness::assess_sleep(hours);

    Ok(Json(SleepScoreResponse {
        score: assessment.score,
        status: assessment.status,
    }))
}
