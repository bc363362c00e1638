//! Point-scored risk-tolerance quiz

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{QuizError, RiskProfile};

/// One selectable answer and the points it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    fn new(id: u32, text: &str, options: [&str; 3]) -> Self {
        Self {
            id,
            text: text.to_string(),
            options: options
                .iter()
                .zip(1..)
                .map(|(text, value)| QuizOption { text: text.to_string(), value })
                .collect(),
        }
    }

    fn accepts(&self, value: u32) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

/// Outcome of a fully answered quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub max_score: u32,
    pub profile: RiskProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskQuiz {
    questions: Vec<QuizQuestion>,
}

impl RiskQuiz {
    /// The three-question quiz shown to investors
    pub fn standard() -> Self {
        Self {
            questions: vec![
                QuizQuestion::new(
                    1,
                    "You have some extra money. What are you most likely to do with it?",
                    [
                        "Put it in a safe fixed deposit",
                        "Invest in a mix of stocks and bonds",
                        "Invest in high-growth stocks",
                    ],
                ),
                QuizQuestion::new(
                    2,
                    "Imagine the stock market drops 20%. How do you feel?",
                    [
                        "Anxious. I would likely sell my investments.",
                        "Concerned, but I would hold on.",
                        "Excited. It's a buying opportunity!",
                    ],
                ),
                QuizQuestion::new(
                    3,
                    "What is your primary goal for this investment?",
                    [
                        "Preserve my capital and avoid losses.",
                        "Generate some income with low risk.",
                        "Achieve significant long-term growth, accepting some risk.",
                    ],
                ),
            ],
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Score answers keyed by question id
    ///
    /// Every question must be answered with one of its own option values.
    pub fn assess(&self, answers: &BTreeMap<u32, u32>) -> Result<RiskAssessment, QuizError> {
        if let Some(&question_id) = answers
            .keys()
            .find(|id| !self.questions.iter().any(|q| q.id == **id))
        {
            return Err(QuizError::UnknownQuestion { question_id });
        }

        let mut score = 0;
        for question in &self.questions {
            let value = *answers
                .get(&question.id)
                .ok_or(QuizError::Unanswered { question_id: question.id })?;
            if !question.accepts(value) {
                return Err(QuizError::InvalidOption { question_id: question.id, value });
            }
            score += value;
        }

        Ok(RiskAssessment {
            score,
            max_score: self.max_score(),
            profile: RiskProfile::from_score(score),
        })
    }

    /// Score answers given in question order
    pub fn assess_in_order(&self, values: &[u32]) -> Result<RiskAssessment, QuizError> {
        if values.len() > self.questions.len() {
            return Err(QuizError::TooManyAnswers {
                given: values.len(),
                expected: self.questions.len(),
            });
        }
        let answers: BTreeMap<u32, u32> = self
            .questions
            .iter()
            .zip(values)
            .map(|(q, &v)| (q.id, v))
            .collect();
        self.assess(&answers)
    }

    fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .filter_map(|q| q.options.iter().map(|o| o.value).max())
            .sum()
    }
}

impl Default for RiskQuiz {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[(u32, u32)]) -> BTreeMap<u32, u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_standard_quiz_shape() {
        let quiz = RiskQuiz::standard();
        assert_eq!(quiz.questions().len(), 3);
        for question in quiz.questions() {
            let values: Vec<u32> = question.options.iter().map(|o| o.value).collect();
            assert_eq!(values, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_all_cautious_answers_are_conservative() {
        let result = RiskQuiz::standard().assess(&answers(&[(1, 1), (2, 1), (3, 1)])).unwrap();
        assert_eq!(result.score, 3);
        assert_eq!(result.max_score, 9);
        assert_eq!(result.profile, RiskProfile::Conservative);
    }

    #[test]
    fn test_profile_boundaries() {
        let quiz = RiskQuiz::standard();
        assert_eq!(quiz.assess_in_order(&[1, 1, 2]).unwrap().profile, RiskProfile::Conservative);
        assert_eq!(quiz.assess_in_order(&[1, 2, 2]).unwrap().profile, RiskProfile::Moderate);
        assert_eq!(quiz.assess_in_order(&[2, 2, 3]).unwrap().profile, RiskProfile::Moderate);
        assert_eq!(quiz.assess_in_order(&[3, 2, 3]).unwrap().profile, RiskProfile::Aggressive);
        assert_eq!(quiz.assess_in_order(&[3, 3, 3]).unwrap().score, 9);
    }

    #[test]
    fn test_unanswered_question_rejected() {
        let err = RiskQuiz::standard().assess(&answers(&[(1, 2), (3, 2)])).unwrap_err();
        assert_eq!(err, QuizError::Unanswered { question_id: 2 });

        let err = RiskQuiz::standard().assess_in_order(&[2]).unwrap_err();
        assert_eq!(err, QuizError::Unanswered { question_id: 2 });
    }

    #[test]
    fn test_extra_answers_rejected() {
        let err = RiskQuiz::standard().assess_in_order(&[1, 1, 1, 3, 3]).unwrap_err();
        assert_eq!(err, QuizError::TooManyAnswers { given: 5, expected: 3 });
    }

    #[test]
    fn test_out_of_range_option_rejected() {
        let err = RiskQuiz::standard().assess(&answers(&[(1, 2), (2, 4), (3, 2)])).unwrap_err();
        assert_eq!(err, QuizError::InvalidOption { question_id: 2, value: 4 });
    }

    #[test]
    fn test_unknown_question_rejected() {
        let err = RiskQuiz::standard()
            .assess(&answers(&[(1, 2), (2, 2), (3, 2), (7, 1)]))
            .unwrap_err();
        assert_eq!(err, QuizError::UnknownQuestion { question_id: 7 });
    }
}
