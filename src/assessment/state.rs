//! Wizard state machine and scoring for the readiness assessment.
//!
//! The whole flow is synchronous and owned by a single component instance:
//! `Question(0) .. Question(N-1)` -> `LeadCapture` -> `Results`. Selecting an
//! option records (or overwrites) the answer for the current question before
//! any step change; submitting the captured email is the only transition that
//! can fail, and it fails before any network dispatch is attempted.

use crate::assessment::questions::{Question, QUESTIONS};
use thiserror::Error;

/// A recorded selection. Category, label and scale are denormalized from the
/// question so the results breakdown needs no catalogue lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question_id: &'static str,
    pub category: &'static str,
    pub label: &'static str,
    pub weight: u32,
    pub out_of: u32,
}

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Question(usize),
    LeadCapture,
    Results,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please enter your work email to see your results.")]
    MissingEmail,
    #[error("That doesn't look like a valid email address.")]
    InvalidEmail,
}

/// Qualitative band for a percentage score. Boundaries are inclusive on the
/// lower bound of each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessTier {
    AuditReady,
    GoodStanding,
    ModerateRisk,
    HighRisk,
}

impl ReadinessTier {
    pub fn for_score(score: u32) -> Self {
        match score {
            91.. => ReadinessTier::AuditReady,
            71..=90 => ReadinessTier::GoodStanding,
            41..=70 => ReadinessTier::ModerateRisk,
            _ => ReadinessTier::HighRisk,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadinessTier::AuditReady => "Audit Ready",
            ReadinessTier::GoodStanding => "Good Standing",
            ReadinessTier::ModerateRisk => "Moderate Risk",
            ReadinessTier::HighRisk => "High Risk",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            ReadinessTier::AuditReady => "Excellent Compliance",
            ReadinessTier::GoodStanding => "Minor Improvements Needed",
            ReadinessTier::ModerateRisk => "Gaps Identified",
            ReadinessTier::HighRisk => "Immediate Action Required",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ReadinessTier::AuditReady => "tier-green",
            ReadinessTier::GoodStanding => "tier-blue",
            ReadinessTier::ModerateRisk => "tier-amber",
            ReadinessTier::HighRisk => "tier-red",
        }
    }
}

/// Answers keyed by question id. Re-recording a question overwrites its entry
/// in place, so the breakdown keeps first-answered order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn record(&mut self, question: &'static Question, option_index: usize) -> bool {
        let Some(option) = question.options.get(option_index) else {
            return false;
        };
        let answer = Answer {
            question_id: question.id,
            category: question.category,
            label: option.label,
            weight: option.weight,
            out_of: question.max_weight(),
        };
        match self.answers.iter_mut().find(|a| a.question_id == question.id) {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
        true
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn total_weight(&self) -> u32 {
        self.answers.iter().map(|a| a.weight).sum()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

/// One wizard session. Created fresh on open, thrown away on close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    questions: &'static [Question],
    step: Step,
    sheet: AnswerSheet,
    email: String,
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}

impl Assessment {
    pub fn new() -> Self {
        Self::over(QUESTIONS)
    }

    pub fn over(questions: &'static [Question]) -> Self {
        Assessment {
            questions,
            step: Step::Question(0),
            sheet: AnswerSheet::default(),
            email: String::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.step {
            Step::Question(i) => self.questions.get(i),
            _ => None,
        }
    }

    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Record the option picked for the current question. Returns false when
    /// not on a question step or the index is out of range; the step does not
    /// change here (the UI defers the advance behind a short timer).
    pub fn record_answer(&mut self, option_index: usize) -> bool {
        match self.current_question() {
            Some(question) => self.sheet.record(question, option_index),
            None => false,
        }
    }

    /// Move past the current question once it has an answer. The last
    /// question advances into lead capture.
    pub fn advance(&mut self) {
        if let Step::Question(i) = self.step {
            let answered = self
                .questions
                .get(i)
                .and_then(|q| self.sheet.answer_for(q.id))
                .is_some();
            if !answered {
                return;
            }
            self.step = if i + 1 < self.questions.len() {
                Step::Question(i + 1)
            } else {
                Step::LeadCapture
            };
        }
    }

    pub fn back(&mut self) {
        match self.step {
            Step::Question(i) if i > 0 => self.step = Step::Question(i - 1),
            Step::LeadCapture => {
                self.step = Step::Question(self.questions.len().saturating_sub(1))
            }
            _ => {}
        }
    }

    /// Validate the captured email and move to the results screen. Dispatching
    /// the report is the caller's business and must not gate this transition.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.step != Step::LeadCapture {
            return Ok(());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(SubmitError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(SubmitError::InvalidEmail);
        }
        self.email = email.to_string();
        self.step = Step::Results;
        Ok(())
    }

    pub fn restart(&mut self) {
        self.step = Step::Question(0);
        self.sheet.clear();
        self.email.clear();
    }

    /// Percentage of the maximum obtainable weight, summed per question so
    /// mixed scales stay correct. Rounded half-up.
    pub fn score_percent(&self) -> u32 {
        let denominator: u32 = self.questions.iter().map(|q| q.max_weight()).sum();
        if denominator == 0 {
            return 0;
        }
        let total = self.sheet.total_weight();
        ((total as f64) * 100.0 / denominator as f64).round() as u32
    }

    pub fn tier(&self) -> ReadinessTier {
        ReadinessTier::for_score(self.score_percent())
    }

    /// Progress through the wizard including the lead-capture step, for the
    /// progress bar.
    pub fn progress_percent(&self) -> u32 {
        let total = self.questions.len() + 1;
        match self.step {
            Step::Question(i) => (((i + 1) * 100) / total) as u32,
            Step::LeadCapture | Step::Results => 100,
        }
    }

    /// Plain-text report sent to the form relay, one breakdown line per
    /// answer in first-answered order.
    pub fn report(&self) -> String {
        let mut report = String::from("TISAX Readiness Assessment Results\n\n");
        report.push_str(&format!("Overall Score: {}%\n\n", self.score_percent()));
        report.push_str("Breakdown:\n");
        for answer in self.sheet.iter() {
            report.push_str(&format!(
                "- {}: {} ({}/{})\n",
                answer.category, answer.label, answer.weight, answer.out_of
            ));
        }
        report
    }
}

/// Structural email check mirroring the browser's `type="email"` gate, so the
/// state machine rejects bad input even without a DOM in front of it.
pub fn is_valid_email(raw: &str) -> bool {
    let s = raw.trim();
    if s.is_empty() || s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && !host.starts_with('.')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::QUESTIONS;

    /// Answer every question with the option at `index`, advancing through
    /// the wizard as the UI would.
    fn answer_all(assessment: &mut Assessment, index: usize) {
        for _ in 0..assessment.question_count() {
            assert!(assessment.record_answer(index));
            assessment.advance();
        }
    }

    fn submit_with(assessment: &mut Assessment, email: &str) -> Result<(), SubmitError> {
        assessment.set_email(email.to_string());
        assessment.submit()
    }

    #[test]
    fn score_is_order_independent() {
        // Same (question, option) picks, recorded in reverse on the second
        // run by walking forward with placeholders first.
        let picks = [2usize, 0, 1, 2];

        let mut forward = Assessment::new();
        for &pick in &picks {
            forward.record_answer(pick);
            forward.advance();
        }

        let mut reversed = Assessment::new();
        answer_all(&mut reversed, 0);
        for (i, &pick) in picks.iter().enumerate().rev() {
            while reversed.step() != Step::Question(i) {
                reversed.back();
            }
            reversed.record_answer(pick);
            while reversed.step() != Step::LeadCapture {
                reversed.advance();
            }
        }

        assert_eq!(forward.score_percent(), reversed.score_percent());
    }

    #[test]
    fn reanswering_overwrites_instead_of_duplicating() {
        let mut assessment = Assessment::new();
        assessment.record_answer(0);
        assessment.record_answer(2);
        assert_eq!(assessment.sheet().len(), 1);
        let answer = assessment.sheet().answer_for(QUESTIONS[0].id).unwrap();
        assert_eq!(answer.weight, 10);
    }

    #[test]
    fn reanswering_keeps_first_answered_order() {
        let mut assessment = Assessment::new();
        answer_all(&mut assessment, 1);
        assessment.back();
        assessment.record_answer(2);
        let ids: Vec<_> = assessment.sheet().iter().map(|a| a.question_id).collect();
        assert_eq!(ids, vec!["isms", "access", "risk", "thirdparty"]);
    }

    #[test]
    fn score_is_monotonic_in_each_answer() {
        for varying in 0..QUESTIONS.len() {
            let mut last = None;
            for pick in 0..QUESTIONS[varying].options.len() {
                let mut assessment = Assessment::new();
                for i in 0..QUESTIONS.len() {
                    assessment.record_answer(if i == varying { pick } else { 1 });
                    assessment.advance();
                }
                let score = assessment.score_percent();
                if let Some(previous) = last {
                    assert!(score >= previous);
                }
                last = Some(score);
            }
        }
    }

    #[test]
    fn score_stays_within_bounds_for_every_combination() {
        // 3 options x 4 questions: walk the full grid.
        for combo in 0..3u32.pow(4) {
            let mut assessment = Assessment::new();
            let mut rest = combo;
            for _ in 0..4 {
                assessment.record_answer((rest % 3) as usize);
                assessment.advance();
                rest /= 3;
            }
            assert!(assessment.score_percent() <= 100);
        }
    }

    #[test]
    fn score_rounds_half_up() {
        // 5 of 40 is 12.5%, which must land on 13.
        let mut assessment = Assessment::new();
        assessment.record_answer(1);
        assessment.advance();
        for _ in 1..4 {
            assessment.record_answer(0);
            assessment.advance();
        }
        assert_eq!(assessment.score_percent(), 13);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(ReadinessTier::for_score(0), ReadinessTier::HighRisk);
        assert_eq!(ReadinessTier::for_score(40), ReadinessTier::HighRisk);
        assert_eq!(ReadinessTier::for_score(41), ReadinessTier::ModerateRisk);
        assert_eq!(ReadinessTier::for_score(70), ReadinessTier::ModerateRisk);
        assert_eq!(ReadinessTier::for_score(71), ReadinessTier::GoodStanding);
        assert_eq!(ReadinessTier::for_score(90), ReadinessTier::GoodStanding);
        assert_eq!(ReadinessTier::for_score(91), ReadinessTier::AuditReady);
        assert_eq!(ReadinessTier::for_score(100), ReadinessTier::AuditReady);
    }

    #[test]
    fn lowest_everywhere_is_high_risk_zero() {
        let mut assessment = Assessment::new();
        answer_all(&mut assessment, 0);
        assert_eq!(assessment.score_percent(), 0);
        assert_eq!(assessment.tier(), ReadinessTier::HighRisk);
    }

    #[test]
    fn highest_everywhere_is_audit_ready_hundred() {
        let mut assessment = Assessment::new();
        answer_all(&mut assessment, 2);
        assert_eq!(assessment.score_percent(), 100);
        assert_eq!(assessment.tier(), ReadinessTier::AuditReady);
    }

    #[test]
    fn two_highest_two_middle_is_good_standing() {
        let mut assessment = Assessment::new();
        for pick in [2, 2, 1, 1] {
            assessment.record_answer(pick);
            assessment.advance();
        }
        assert_eq!(assessment.score_percent(), 75);
        assert_eq!(assessment.tier(), ReadinessTier::GoodStanding);
    }

    #[test]
    fn full_run_reaches_results() {
        let mut assessment = Assessment::new();
        answer_all(&mut assessment, 2);
        assert_eq!(assessment.step(), Step::LeadCapture);
        assert!(submit_with(&mut assessment, "cso@supplier.example").is_ok());
        assert_eq!(assessment.step(), Step::Results);
    }

    #[test]
    fn empty_email_is_rejected_before_dispatch() {
        let mut assessment = Assessment::new();
        answer_all(&mut assessment, 1);
        assert_eq!(
            submit_with(&mut assessment, ""),
            Err(SubmitError::MissingEmail)
        );
        assert_eq!(assessment.step(), Step::LeadCapture);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut assessment = Assessment::new();
        answer_all(&mut assessment, 1);
        assert_eq!(
            submit_with(&mut assessment, "not-an-email"),
            Err(SubmitError::InvalidEmail)
        );
        assert_eq!(assessment.step(), Step::LeadCapture);
    }

    #[test]
    fn restart_clears_answers_and_email() {
        let mut assessment = Assessment::new();
        answer_all(&mut assessment, 2);
        submit_with(&mut assessment, "cso@supplier.example").unwrap();
        assessment.restart();
        assert_eq!(assessment.step(), Step::Question(0));
        assert!(assessment.sheet().is_empty());
        assert!(assessment.email().is_empty());
        assert!(assessment
            .sheet()
            .answer_for(QUESTIONS[0].id)
            .is_none());
    }

    #[test]
    fn back_from_lead_capture_keeps_selection() {
        let mut assessment = Assessment::new();
        answer_all(&mut assessment, 1);
        assessment.back();
        assert_eq!(assessment.step(), Step::Question(3));
        let kept = assessment
            .sheet()
            .answer_for(QUESTIONS[3].id)
            .expect("selection survives back-navigation");
        assert_eq!(kept.label, "In Development");
    }

    #[test]
    fn back_at_first_question_is_a_no_op() {
        let mut assessment = Assessment::new();
        assessment.back();
        assert_eq!(assessment.step(), Step::Question(0));
    }

    #[test]
    fn advance_without_an_answer_is_a_no_op() {
        let mut assessment = Assessment::new();
        assessment.advance();
        assert_eq!(assessment.step(), Step::Question(0));
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut assessment = Assessment::new();
        assert!(!assessment.record_answer(99));
        assert!(assessment.sheet().is_empty());
    }

    #[test]
    fn report_lists_answers_in_order_with_scales() {
        let mut assessment = Assessment::new();
        for pick in [2, 2, 1, 1] {
            assessment.record_answer(pick);
            assessment.advance();
        }
        let report = assessment.report();
        assert!(report.starts_with("TISAX Readiness Assessment Results\n"));
        assert!(report.contains("Overall Score: 75%"));
        let breakdown = report.split("Breakdown:\n").nth(1).unwrap();
        let lines: Vec<_> = breakdown.lines().collect();
        assert_eq!(lines[0], "- ISMS Documentation: Fully Implemented (10/10)");
        assert_eq!(lines[2], "- Risk Management: Occasionally (5/10)");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn progress_covers_lead_capture_step() {
        let mut assessment = Assessment::new();
        assert_eq!(assessment.progress_percent(), 20);
        answer_all(&mut assessment, 0);
        assert_eq!(assessment.progress_percent(), 100);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("it@supplier.example"));
        assert!(is_valid_email("  padded@supplier.example  "));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("no-at-sign.example"));
        assert!(!is_valid_email("@supplier.example"));
        assert!(!is_valid_email("it@supplier"));
        assert!(!is_valid_email("it@@supplier.example"));
        assert!(!is_valid_email("two words@supplier.example"));
        assert!(!is_valid_email("it@supplier.123"));
    }
}
