//! Structured language-model output for the advisor flows

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::AdvisorError;

/// Risk label attached to every recommended product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// A product inside a personalised plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedProduct {
    pub name: String,
    pub description: String,
    /// Suggested share of the portfolio, 0..=100
    pub allocation_percentage: f64,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPlan {
    pub plan_summary: String,
    pub risk_profile: String,
    pub recommended_products: Vec<PlannedProduct>,
    pub next_steps: Vec<String>,
    pub disclaimer: String,
}

impl InvestmentPlan {
    pub(crate) fn check(&self) -> Result<(), AdvisorError> {
        for product in &self.recommended_products {
            let pct = product.allocation_percentage;
            if !(0.0..=100.0).contains(&pct) {
                return Err(AdvisorError::InvalidResponse(format!(
                    "allocation for {} is {}%, expected 0-100",
                    product.name, pct
                )));
            }
        }
        Ok(())
    }

    /// Sum of all suggested allocations
    pub fn total_allocation(&self) -> f64 {
        self.recommended_products
            .iter()
            .map(|p| p.allocation_percentage)
            .sum()
    }
}

/// A product suggested by the product finder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedProduct {
    pub name: String,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub risk_level: RiskLevel,
    pub suitability_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecommendations {
    pub recommendations: Vec<RecommendedProduct>,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<Vec<String>>,
    pub language: String,
}

/// Parse a model reply as JSON, tolerating a surrounding code fence
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, AdvisorError> {
    let body = strip_code_fence(raw.trim());
    Ok(serde_json::from_str(body)?)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Info string (e.g. "json") may sit on its own line or directly before the body
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()).trim_start();
    let rest = rest.trim_end();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN_JSON: &str = r#"{
        "planSummary": "A steady mix of growth and safety.",
        "riskProfile": "Based on your inputs, your risk profile is Moderate.",
        "recommendedProducts": [
            {
                "name": "Equity Mutual Fund SIP",
                "description": "Monthly investment into a diversified equity fund.",
                "allocationPercentage": 60,
                "pros": ["Rupee cost averaging"],
                "cons": ["Market risk"],
                "riskLevel": "High"
            },
            {
                "name": "Public Provident Fund (PPF)",
                "description": "Government-backed long-term savings.",
                "allocationPercentage": 40,
                "pros": ["EEE tax status"],
                "cons": ["15 year lock-in"],
                "riskLevel": "Low"
            }
        ],
        "nextSteps": ["Complete your KYC"],
        "disclaimer": "Investments are subject to market risks."
    }"#;

    #[test]
    fn test_parse_plan() {
        let plan: InvestmentPlan = parse_json(PLAN_JSON).unwrap();

        assert_eq!(plan.recommended_products.len(), 2);
        assert_eq!(plan.recommended_products[0].risk_level, RiskLevel::High);
        assert!((plan.total_allocation() - 100.0).abs() < 1e-9);
        assert!(plan.check().is_ok());
    }

    #[test]
    fn test_parse_fenced_reply() {
        let fenced = format!("```json\n{}\n```", PLAN_JSON);
        let plan: InvestmentPlan = parse_json(&fenced).unwrap();
        assert_eq!(plan.next_steps, vec!["Complete your KYC".to_string()]);

        let one_line = "```json{\"explanation\": \"x\", \"language\": \"English\"}```";
        let explanation: Explanation = parse_json(one_line).unwrap();
        assert_eq!(explanation.explanation, "x");

        let bare_fence = "```\n{\"explanation\": \"x\", \"language\": \"English\"}\n```";
        let explanation: Explanation = parse_json(bare_fence).unwrap();
        assert_eq!(explanation.follow_up_questions, None);
    }

    #[test]
    fn test_allocation_out_of_range() {
        let mut plan: InvestmentPlan = parse_json(PLAN_JSON).unwrap();
        plan.recommended_products[1].allocation_percentage = 140.0;
        assert!(matches!(plan.check(), Err(AdvisorError::InvalidResponse(_))));
    }

    #[test]
    fn test_very_high_risk_label() {
        let level: RiskLevel = serde_json::from_str("\"Very High\"").unwrap();
        assert_eq!(level, RiskLevel::VeryHigh);
    }

    #[test]
    fn test_malformed_reply() {
        let result = parse_json::<ProductRecommendations>("Sure! Here are some ideas.");
        assert!(matches!(result, Err(AdvisorError::MalformedResponse(_))));
    }
}
