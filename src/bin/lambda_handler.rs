//! AWS Lambda handler for SIP projections and the risk quiz
//!
//! `POST /` (any path other than `/quiz`) accepts projection inputs as JSON and
//! returns the projection with formatted totals. `POST /quiz` scores a set of
//! quiz answers. Missing projection inputs fall back to the calculator defaults.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sip_planner::{
    format::{format_amount, projection_headline},
    projection::{InputField, ProjectionEngine, ProjectionInput, ProjectionResult},
    risk::{RiskAssessment, RiskQuiz},
    CalculatorSettings,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Environment variable naming an optional settings JSON file
const SETTINGS_PATH_ENV: &str = "SIP_SETTINGS_PATH";

/// Projection inputs; any omitted field uses the calculator default
#[derive(Debug, Default, Deserialize)]
pub struct ProjectionRequest {
    #[serde(default)]
    pub monthly_contribution: Option<f64>,

    #[serde(default)]
    pub annual_return_rate_percent: Option<f64>,

    #[serde(default)]
    pub horizon_years: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct FormattedTotals {
    pub invested: String,
    pub returns: String,
    pub total: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub input: ProjectionInput,
    pub result: ProjectionResult,
    pub formatted: FormattedTotals,
    pub headline: String,
    pub execution_time_us: u64,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub answers: BTreeMap<u32, u32>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub description: &'static str,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?;
    Ok(response)
}

fn error_response(status: u16, message: &str, field: Option<InputField>) -> Result<Response<Body>, Error> {
    json_response(status, &json!({ "error": message, "field": field }))
}

fn body_text(event: &Request) -> String {
    match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    }
}

fn handle_projection(body: &str, settings: &CalculatorSettings) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    let request: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e), None),
    };

    let input = match ProjectionInput::new(
        request.monthly_contribution.unwrap_or(settings.monthly_contribution.default),
        request.annual_return_rate_percent.unwrap_or(settings.return_rate_percent.default),
        request.horizon_years.unwrap_or(settings.horizon_years.default.round() as u32),
    ) {
        Ok(input) => input,
        Err(e) => return error_response(400, &e.to_string(), Some(e.field())),
    };

    let issues = settings.out_of_range(&input);
    if !issues.is_empty() {
        warn!("Rejecting out-of-range request: {}", issues.join("; "));
        return error_response(422, &issues.join("; "), None);
    }

    let result = ProjectionEngine::new(&input).project();
    let response = ProjectionResponse {
        input,
        formatted: FormattedTotals {
            invested: format_amount(result.total_invested),
            returns: format_amount(result.total_returns),
            total: format_amount(result.total_value),
        },
        headline: projection_headline(&result),
        result,
        execution_time_us: start.elapsed().as_micros() as u64,
    };

    json_response(200, &response)
}

fn handle_quiz(body: &str) -> Result<Response<Body>, Error> {
    let request: QuizRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e), None),
    };

    match RiskQuiz::standard().assess(&request.answers) {
        Ok(assessment) => json_response(
            200,
            &QuizResponse { description: assessment.profile.description(), assessment },
        ),
        Err(e) => error_response(400, &e.to_string(), None),
    }
}

/// Lambda handler function
async fn handler(event: Request, settings: &CalculatorSettings) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    if event.method().as_str() != "POST" {
        return error_response(405, "Only POST is supported", None);
    }

    let body = body_text(&event);
    let path = event.uri().path().trim_end_matches('/');
    info!("POST {}", if path.is_empty() { "/" } else { path });

    if path.ends_with("/quiz") {
        handle_quiz(&body)
    } else {
        handle_projection(&body, settings)
    }
}

fn load_settings() -> Result<CalculatorSettings, Error> {
    match std::env::var(SETTINGS_PATH_ENV) {
        Ok(path) => {
            info!("Loading calculator settings from {}", path);
            Ok(CalculatorSettings::from_json_path(&path)?)
        }
        Err(_) => Ok(CalculatorSettings::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let settings = Arc::new(load_settings()?);

    run(service_fn(move |event: Request| {
        let settings = Arc::clone(&settings);
        async move { handler(event, &settings).await }
    }))
    .await
}
