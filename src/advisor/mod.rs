//! Language-model backed advisor flows
//!
//! Each flow validates its form input, renders a prompt, asks a
//! [`LanguageModel`] for a JSON reply and parses that reply into a typed
//! response. The model client itself lives outside this crate.

mod prompts;
mod requests;
mod responses;

pub use prompts::{explain_prompt, plan_prompt, product_prompt, CatalogueEntry, ASSISTANT_NAME, PRODUCT_CATALOGUE};
pub use requests::{ExplainRequest, PlanRequest, ProductRequest, TimeHorizon, MIN_AGE, MIN_GOALS_CHARS};
pub use responses::{
    parse_json, Explanation, InvestmentPlan, PlannedProduct, ProductRecommendations,
    RecommendedProduct, RiskLevel,
};

use log::{debug, error, info, warn};
use serde::Serialize;
use thiserror::Error;

/// A single rejected form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("invalid form input: {}", summarize(.0))]
    Validation(Vec<FieldIssue>),

    #[error("language model call failed: {0}")]
    Model(String),

    #[error("language model returned malformed JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("language model response violates its schema: {0}")]
    InvalidResponse(String),
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl AdvisorError {
    /// Message suitable for showing next to the form
    pub fn user_message(&self) -> &'static str {
        match self {
            AdvisorError::Validation(_) => "Please fix the errors below.",
            _ => "An unexpected error occurred on the server. Please try again.",
        }
    }

    /// Field-level issues, empty unless this is a validation failure
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            AdvisorError::Validation(issues) => issues,
            _ => &[],
        }
    }
}

/// Text-completion backend
pub trait LanguageModel: Send + Sync {
    /// Complete `prompt`, returning the raw reply text
    fn complete(&self, prompt: &str) -> Result<String, AdvisorError>;
}

impl<F> LanguageModel for F
where
    F: Fn(&str) -> Result<String, AdvisorError> + Send + Sync,
{
    fn complete(&self, prompt: &str) -> Result<String, AdvisorError> {
        self(prompt)
    }
}

/// Runs the advisor flows against one model backend
pub struct Advisor<M> {
    model: M,
}

impl<M: LanguageModel> Advisor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Personalised investment plan for a validated profile
    pub fn generate_plan(&self, request: &PlanRequest) -> Result<InvestmentPlan, AdvisorError> {
        request.validate()?;
        info!("Generating investment plan (age {}, {})", request.age, request.risk_tolerance);

        let plan: InvestmentPlan = self.ask("plan", &plan_prompt(request))?;
        plan.check()?;
        let total = plan.total_allocation();
        if (total - 100.0).abs() > 0.5 {
            warn!("Plan allocations sum to {}%", total);
        }
        Ok(plan)
    }

    /// Product shortlist for a validated profile
    pub fn recommend_products(&self, request: &ProductRequest) -> Result<ProductRecommendations, AdvisorError> {
        request.validate()?;
        info!(
            "Recommending products (age {}, {}, {})",
            request.age, request.risk_tolerance, request.time_horizon
        );

        self.ask("products", &product_prompt(request))
    }

    /// Plain-language explanation of a financial question
    pub fn explain(&self, request: &ExplainRequest) -> Result<Explanation, AdvisorError> {
        request.validate()?;
        info!("Explaining question in {}", request.language());

        self.ask("explain", &explain_prompt(request))
    }

    fn ask<T: serde::de::DeserializeOwned>(&self, flow: &str, prompt: &str) -> Result<T, AdvisorError> {
        debug!("{} prompt: {} chars", flow, prompt.len());
        let reply = self.model.complete(prompt).map_err(|e| {
            error!("{} flow: model call failed: {}", flow, e);
            e
        })?;

        parse_json(&reply).map_err(|e| {
            error!("{} flow: could not parse model reply: {}", flow, e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskProfile;
    use std::sync::Mutex;

    struct ScriptedModel {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn replying(reply: &str) -> Self {
            Self { reply: reply.to_string(), prompts: Mutex::new(Vec::new()) }
        }
    }

    impl LanguageModel for ScriptedModel {
        fn complete(&self, prompt: &str) -> Result<String, AdvisorError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn product_request() -> ProductRequest {
        ProductRequest {
            age: 27,
            monthly_income: 45_000.0,
            risk_tolerance: RiskProfile::Moderate,
            financial_goals: "Build an emergency fund and start investing".to_string(),
            time_horizon: TimeHorizon::LongTerm,
            existing_investments: Some("Rs 50,000 in a savings account".to_string()),
        }
    }

    #[test]
    fn test_recommend_products_round_trip() {
        let model = ScriptedModel::replying(
            r#"{"recommendations": [{"name": "ELSS", "description": "Tax-saving equity fund",
                "pros": ["80C"], "cons": ["Market risk"], "riskLevel": "High",
                "suitabilityReason": "Long horizon suits equity"}],
                "disclaimer": "Investments are subject to market risks."}"#,
        );
        let advisor = Advisor::new(model);

        let result = advisor.recommend_products(&product_request()).unwrap();
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].risk_level, RiskLevel::High);

        let prompts = advisor.model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Existing investments: Rs 50,000 in a savings account"));
    }

    #[test]
    fn test_invalid_form_never_reaches_model() {
        let advisor = Advisor::new(ScriptedModel::replying("{}"));
        let request = ProductRequest { age: 15, ..product_request() };

        let err = advisor.recommend_products(&request).unwrap_err();
        assert_eq!(err.user_message(), "Please fix the errors below.");
        assert_eq!(err.issues()[0].field, "age");
        assert!(advisor.model.prompts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_model_failure_maps_to_server_message() {
        let advisor = Advisor::new(|_: &str| -> Result<String, AdvisorError> {
            Err(AdvisorError::Model("quota exceeded".to_string()))
        });

        let err = advisor
            .explain(&ExplainRequest { question: "What is NPS?".to_string(), preferred_language: None })
            .unwrap_err();
        assert!(matches!(err, AdvisorError::Model(_)));
        assert_eq!(err.user_message(), "An unexpected error occurred on the server. Please try again.");
        assert!(err.issues().is_empty());
    }

    #[test]
    fn test_plan_with_bad_allocation_rejected() {
        let advisor = Advisor::new(|_: &str| -> Result<String, AdvisorError> {
            Ok(r#"{"planSummary": "s", "riskProfile": "Moderate", "recommendedProducts": [
                {"name": "FD", "description": "d", "allocationPercentage": 120,
                 "pros": [], "cons": [], "riskLevel": "Low"}],
                "nextSteps": [], "disclaimer": "d"}"#
                .to_string())
        });
        let request = PlanRequest {
            age: 30,
            annual_income: 600_000.0,
            risk_tolerance: RiskProfile::Conservative,
            financial_goals: "Save for a car in three years".to_string(),
        };

        assert!(matches!(advisor.generate_plan(&request), Err(AdvisorError::InvalidResponse(_))));
    }

    #[test]
    fn test_explain_parses_follow_ups() {
        let advisor = Advisor::new(|prompt: &str| -> Result<String, AdvisorError> {
            assert!(prompt.contains("Respond in Hindi."));
            Ok("```json\n{\"explanation\": \"SIP ek niyamit nivesh hai.\", \
                \"followUpQuestions\": [\"Aapka lakshya kya hai?\"], \"language\": \"Hindi\"}\n```"
                .to_string())
        });

        let result = advisor
            .explain(&ExplainRequest {
                question: "SIP kya hai?".to_string(),
                preferred_language: Some("Hindi".to_string()),
            })
            .unwrap();
        assert_eq!(result.language, "Hindi");
        assert_eq!(result.follow_up_questions.map(|q| q.len()), Some(1));
    }
}
