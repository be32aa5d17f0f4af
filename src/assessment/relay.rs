//! Submission plumbing for the hosted form relay (Web3Forms).
//!
//! Both the contact form and the assessment-report dispatch go through the
//! same endpoint as `application/x-www-form-urlencoded` bodies. The caller
//! decides what a failure means: the wizard logs and moves on, the contact
//! form shows it.

use crate::config;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use thiserror::Error;

const DISPATCH_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay rejected the submission: {0}")]
    Rejected(String),
    #[error("no response from the form relay within 10s")]
    TimedOut,
}

#[derive(Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

/// An ordered set of form fields, pre-seeded with the relay access key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    fields: Vec<(&'static str, String)>,
}

impl FormSubmission {
    pub fn new() -> Self {
        FormSubmission {
            fields: vec![("access_key", config::RELAY_ACCESS_KEY.to_string())],
        }
    }

    pub fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// POST the submission, racing a timeout so a hung relay cannot pin the
    /// caller indefinitely. There is no retry; one attempt, then a verdict.
    pub async fn send(self) -> Result<(), RelayError> {
        let request = Request::post(config::RELAY_ENDPOINT)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(self.encode());

        let send = request.send();
        pin_mut!(send);
        let response = match select(send, TimeoutFuture::new(DISPATCH_TIMEOUT_MS)).await {
            Either::Left((Ok(response), _)) => response,
            Either::Left((Err(err), _)) => return Err(RelayError::Transport(err.to_string())),
            Either::Right((_, _)) => return Err(RelayError::TimedOut),
        };

        if !response.ok() {
            return Err(RelayError::Rejected(format!("HTTP {}", response.status())));
        }
        match response.json::<RelayResponse>().await {
            Ok(body) if body.success => Ok(()),
            Ok(body) => Err(RelayError::Rejected(body.message)),
            // A 2xx with an unreadable body still means the relay took it.
            Err(_) => Ok(()),
        }
    }
}

impl Default for FormSubmission {
    fn default() -> Self {
        Self::new()
    }
}

/// The readiness report, addressed back to the respondent.
pub fn assessment_report(email: &str, score: u32, report: &str) -> FormSubmission {
    FormSubmission::new()
        .field("email", email)
        .field("subject", format!("TISAX Readiness Assessment - {}%", score))
        .field("message", report)
}

/// A contact-form message.
pub fn contact_message(
    name: &str,
    email: &str,
    company: &str,
    service: &str,
    message: &str,
) -> FormSubmission {
    FormSubmission::new()
        .field("name", name)
        .field("email", email)
        .field("company", company)
        .field("service", service)
        .field("subject", format!("Website inquiry from {}", name))
        .field("message", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_form_encoded() {
        let body = FormSubmission::new()
            .field("email", "cso@supplier.example")
            .field("message", "Overall Score: 75%\nline two")
            .encode();
        assert!(body.starts_with(&format!(
            "access_key={}",
            crate::config::RELAY_ACCESS_KEY
        )));
        assert!(body.contains("email=cso%40supplier.example"));
        assert!(body.contains("message=Overall%20Score%3A%2075%25%0Aline%20two"));
    }

    #[test]
    fn report_subject_carries_the_score() {
        let submission = assessment_report("cso@supplier.example", 75, "report body");
        let body = submission.encode();
        assert!(body.contains("subject=TISAX%20Readiness%20Assessment%20-%2075%25"));
    }

    #[test]
    fn contact_fields_are_all_present() {
        let body = contact_message("Jo", "jo@co.example", "Co", "TISAX", "hello").encode();
        for field in ["name=", "email=", "company=", "service=", "subject=", "message="] {
            assert!(body.contains(field), "missing {}", field);
        }
    }
}
