//! Financial learning hub content

use serde::Serialize;

pub const HUB_TITLE: &str = "Financial Learning Hub";
pub const HUB_TAGLINE: &str =
    "Empower yourself with knowledge. Start your journey to financial literacy here.";

/// One beginner-level reading topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningPath {
    pub id: &'static str,
    pub title: &'static str,
    /// Lightly marked-up text; `**` marks emphasis
    pub content: &'static str,
}

impl LearningPath {
    /// Content without emphasis markers
    pub fn plain_text(&self) -> String {
        self.content.replace("**", "")
    }
}

pub const LEARNING_PATHS: &[LearningPath] = &[
    LearningPath {
        id: "investing-101",
        title: "Investing 101: The Basics",
        content: r#"Investing can seem complicated, but it's really just about making your money work for you. Think of it like planting a seed. You put a small amount of money (the seed) into an investment (the soil), and over time, it grows into a bigger amount (the plant).

Key Concepts:
- **Stocks:** Owning a small piece of a company.
- **Bonds:** Loaning money to a company or government.
- **Mutual Funds:** A basket of many stocks and/or bonds. This is like buying a fruit salad instead of just one type of fruit, which spreads out your risk (diversification).
- **SIP (Systematic Investment Plan):** A way to invest a fixed amount of money regularly into mutual funds. It's like a recurring payment that builds your wealth over time."#,
    },
    LearningPath {
        id: "tax-saving",
        title: "Tax-Saving Options",
        content: r#"In India, the government encourages you to save and invest by offering tax deductions on certain investments. This means you can reduce your taxable income and pay less tax.

Popular Options under Section 80C (up to Rs 1.5 lakh deduction):
- **PPF (Public Provident Fund):** A long-term, safe investment backed by the government. Lock-in period is 15 years.
- **ELSS (Equity Linked Savings Scheme):** A type of mutual fund with a shorter lock-in of 3 years. It invests in stocks, so it has higher risk but also potential for higher returns.
- **NPS (National Pension System):** A retirement-focused investment. It gives you tax benefits beyond the 80C limit as well."#,
    },
    LearningPath {
        id: "first-time-stock",
        title: "First-Time Stock Investor Guide",
        content: r#"Buying your first stock is exciting! Here's a simple guide:

1. **Open a Demat & Trading Account:** This is like a bank account for your stocks. You'll need your PAN card, Aadhaar card, and bank details.
2. **Do Your Research:** Don't just buy a stock because it's popular. Understand what the company does and its financial health. Start with large, well-known companies (often called "blue-chip" stocks).
3. **Start Small:** You don't need a lot of money to start. Invest an amount you're comfortable with losing, as stocks can be risky.
4. **Think Long-Term:** The stock market goes up and down. The key to wealth creation is to stay invested for a long time and not panic during downturns."#,
    },
];

/// Look up a path by id, ignoring case and surrounding whitespace
pub fn learning_path(id: &str) -> Option<&'static LearningPath> {
    let id = id.trim();
    LEARNING_PATHS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}
