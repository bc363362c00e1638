//! Prompt templates for the advisor flows

use super::requests::{ExplainRequest, PlanRequest, ProductRequest};
use crate::format::{format_currency, CURRENCY_MARKER};

/// Name the assistant introduces itself with
pub const ASSISTANT_NAME: &str = "DhanMitra";

/// Reference product shown to the model when recommending
#[derive(Debug, Clone, Copy)]
pub struct CatalogueEntry {
    pub name: &'static str,
    pub summary: &'static str,
    pub risk: &'static str,
    pub pros: &'static str,
    pub cons: &'static str,
}

/// Common Indian investment products the finder recommends from
pub const PRODUCT_CATALOGUE: &[CatalogueEntry] = &[
    CatalogueEntry {
        name: "Public Provident Fund (PPF)",
        summary: "Government-backed long-term savings and tax-saving scheme.",
        risk: "Low",
        pros: "EEE tax treatment, guaranteed returns, sovereign guarantee.",
        cons: "15-year lock-in, lower returns than equity, limited early liquidity.",
    },
    CatalogueEntry {
        name: "National Pension System (NPS)",
        summary: "Market-linked, government-sponsored retirement scheme.",
        risk: "Moderate to High",
        pros: "Section 80CCD tax benefits, flexible asset mix, low cost.",
        cons: "Withdrawal restrictions, mandatory annuity at maturity.",
    },
    CatalogueEntry {
        name: "Systematic Investment Plan (SIP) into Equity Mutual Funds",
        summary: "Regular investment into a professionally managed stock portfolio.",
        risk: "High",
        pros: "Diversification, rupee cost averaging, long-term growth potential.",
        cons: "Market risk, no guaranteed returns, expense ratios.",
    },
    CatalogueEntry {
        name: "Equity Linked Savings Scheme (ELSS)",
        summary: "Equity mutual fund eligible for Section 80C deductions.",
        risk: "High",
        pros: "Tax saving, growth potential, shortest 80C lock-in (3 years).",
        cons: "Market risk, no guaranteed returns.",
    },
    CatalogueEntry {
        name: "Fixed Deposits (FDs)",
        summary: "Bank deposit paying a fixed rate for a chosen tenure.",
        risk: "Low",
        pros: "Guaranteed returns, capital protection, simple.",
        cons: "Lower post-tax returns, inflation risk.",
    },
    CatalogueEntry {
        name: "Debt Mutual Funds",
        summary: "Funds holding government bonds, corporate bonds and money market paper.",
        risk: "Low to Medium",
        pros: "More liquid than FDs, diversified, professionally managed.",
        cons: "Interest rate risk, credit risk, no guaranteed returns.",
    },
    CatalogueEntry {
        name: "Sovereign Gold Bonds (SGBs)",
        summary: "RBI-issued securities denominated in grams of gold.",
        risk: "Moderate",
        pros: "Tracks gold price, extra interest, no storage or purity worries.",
        cons: "Gold price risk, 8-year tenure with exit after year 5.",
    },
];

fn persona() -> String {
    format!(
        "You are {}, a friendly, patient and non-judgmental financial assistant for the Indian market.",
        ASSISTANT_NAME
    )
}

fn currency_rule() -> String {
    format!(
        "Whenever you mention money, always write amounts with the \"{marker}\" marker (e.g. \"{marker} 50,000\"), never \"₹\" or \"INR\".",
        marker = CURRENCY_MARKER
    )
}

pub fn plan_prompt(request: &PlanRequest) -> String {
    format!(
        "{persona}\n\
         Help people with low to moderate financial literacy make informed decisions. Avoid jargon and favour culturally relevant Indian options.\n\
         \n\
         User profile:\n\
         Age: {age} years\n\
         Annual income: {income}\n\
         Risk tolerance: {risk}\n\
         Financial goals: {goals}\n\
         \n\
         Reply with JSON only, using the keys planSummary (friendly overview), riskProfile (assessed profile), \
         recommendedProducts (3-5 items, each with name, description, allocationPercentage 0-100 summing to 100, \
         pros, cons, riskLevel one of Low/Medium/High/Very High), nextSteps (actionable list) and disclaimer \
         (investments are subject to market risks; consult a financial advisor).\n\
         {currency}",
        persona = persona(),
        age = request.age,
        income = format_currency(request.annual_income),
        risk = request.risk_tolerance,
        goals = request.financial_goals,
        currency = currency_rule(),
    )
}

fn catalogue_lines() -> String {
    PRODUCT_CATALOGUE
        .iter()
        .enumerate()
        .map(|(n, entry)| {
            format!(
                "{}. {}: {} Risk: {}. Pros: {} Cons: {}\n",
                n + 1,
                entry.name,
                entry.summary,
                entry.risk,
                entry.pros,
                entry.cons
            )
        })
        .collect()
}

pub fn product_prompt(request: &ProductRequest) -> String {
    format!(
        "{persona}\n\
         Recommend suitable products for the user below. Favour long-term, consistent investing over speculation.\n\
         \n\
         Reference products:\n\
         {catalogue}\
         \n\
         User profile:\n\
         Age: {age} years\n\
         Monthly income: {income}\n\
         Risk tolerance: {risk}\n\
         Financial goals: {goals}\n\
         Time horizon: {horizon}\n\
         Existing investments: {existing}\n\
         \n\
         Recommend 2-4 products. Reply with JSON only: {{\"recommendations\": [{{name, description, pros, cons, \
         riskLevel (Low/Medium/High/Very High), suitabilityReason}}], \"disclaimer\": string}}.\n\
         {currency}",
        persona = persona(),
        catalogue = catalogue_lines(),
        age = request.age,
        income = format_currency(request.monthly_income),
        risk = request.risk_tolerance,
        goals = request.financial_goals,
        horizon = request.time_horizon,
        existing = request.existing_investments.as_deref().unwrap_or("None"),
        currency = currency_rule(),
    )
}

pub fn explain_prompt(request: &ExplainRequest) -> String {
    format!(
        "{persona}\n\
         Explain financial concepts, products and tax-saving options clearly and without jargon, like a financially savvy elder sibling. \
         Use culturally relevant examples such as gold or LIC policies where they help.\n\
         If the question is vague, add 1-3 follow-up questions about the user's goals.\n\
         Respond in {language}.\n\
         \n\
         User's question: \"{question}\"\n\
         \n\
         Reply with JSON only, using the keys explanation, followUpQuestions (optional list) and language.",
        persona = persona(),
        language = request.language(),
        question = request.question.trim(),
    )
}
