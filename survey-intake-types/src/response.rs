use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Answers;

/// A candidate response as submitted by a respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// The survey this response answers.
    pub survey_id: Uuid,

    /// The submitting user, if not anonymous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_id: Option<Uuid>,

    /// The raw answer map, keyed by question id.
    pub answers: Answers,

    /// Client address, if the transport layer captured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<IpAddr>,
}

impl Submission {
    /// Create an anonymous submission.
    pub fn new(survey_id: Uuid, answers: Answers) -> Self {
        Self {
            survey_id,
            respondent_id: None,
            answers,
            ip_address: None,
        }
    }

    /// Attribute the submission to a respondent.
    pub fn with_respondent(mut self, respondent_id: Uuid) -> Self {
        self.respondent_id = Some(respondent_id);
        self
    }

    /// Record the client address.
    pub fn with_ip_address(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    /// Stamp the submission, producing the store insert payload.
    pub fn into_response(self, submitted_at: DateTime<Utc>) -> NewResponse {
        NewResponse {
            survey_id: self.survey_id,
            respondent_id: self.respondent_id,
            answers: self.answers,
            submitted_at,
            ip_address: self.ip_address,
        }
    }
}

/// An accepted response ready for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewResponse {
    pub survey_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_id: Option<Uuid>,
    pub answers: Answers,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<IpAddr>,
}

impl NewResponse {
    /// Attach the store-assigned id, producing the persisted row.
    pub fn into_stored(self, id: Uuid) -> StoredResponse {
        StoredResponse {
            id,
            survey_id: self.survey_id,
            respondent_id: self.respondent_id,
            answers: self.answers,
            submitted_at: self.submitted_at,
            ip_address: self.ip_address,
        }
    }
}

/// A persisted response row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResponse {
    pub id: Uuid,
    pub survey_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_id: Option<Uuid>,
    pub answers: Answers,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<IpAddr>,
}

impl StoredResponse {
    /// Strip respondent identity and client address for external sharing.
    pub fn anonymized(mut self) -> Self {
        self.respondent_id = None;
        self.ip_address = None;
        self
    }
}

/// Confirmation returned to the submitter after a response is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Identifier of the stored response.
    pub response_id: Uuid,

    /// When the response was accepted.
    pub submitted_at: DateTime<Utc>,
}
