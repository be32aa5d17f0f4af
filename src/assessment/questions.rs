//! Static catalogue for the readiness assessment.
//!
//! Questions are defined once at compile time and never mutated. Each option
//! carries an integer maturity weight (0 = none, 5 = partial, 10 = full).

/// One selectable answer for a question.
#[derive(Debug, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub weight: u32,
}

/// A single assessment question with its ordered options.
#[derive(Debug, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub category: &'static str,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Highest weight obtainable on this question. Scoring divides by the
    /// sum of these, so questions may use different scales.
    pub fn max_weight(&self) -> u32 {
        self.options.iter().map(|o| o.weight).max().unwrap_or(0)
    }
}

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "isms",
        category: "ISMS Documentation",
        prompt: "Do you currently have a documented Information Security Management System (ISMS)?",
        options: &[
            AnswerOption { label: "No", weight: 0 },
            AnswerOption { label: "In Progress", weight: 5 },
            AnswerOption { label: "Fully Implemented", weight: 10 },
        ],
    },
    Question {
        id: "access",
        category: "Access Control",
        prompt: "Are multi-factor authentication (MFA) and strict access controls implemented across all Tier-1 systems?",
        options: &[
            AnswerOption { label: "No", weight: 0 },
            AnswerOption { label: "Partial Implementation", weight: 5 },
            AnswerOption { label: "Yes, Fully Implemented", weight: 10 },
        ],
    },
    Question {
        id: "risk",
        category: "Risk Management",
        prompt: "Do you conduct annual internal audits and risk assessments?",
        options: &[
            AnswerOption { label: "No", weight: 0 },
            AnswerOption { label: "Occasionally", weight: 5 },
            AnswerOption { label: "Yes, Annually", weight: 10 },
        ],
    },
    Question {
        id: "thirdparty",
        category: "Third-Party Management",
        prompt: "Do you have documented processes for managing third-party security risks?",
        options: &[
            AnswerOption { label: "No", weight: 0 },
            AnswerOption { label: "In Development", weight: 5 },
            AnswerOption { label: "Fully Documented", weight: 10 },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogue_ids_are_unique() {
        let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn every_question_has_options_and_a_positive_max() {
        for question in QUESTIONS {
            assert!(!question.options.is_empty(), "{} has no options", question.id);
            assert!(question.max_weight() > 0, "{} cannot be scored", question.id);
        }
    }
}
