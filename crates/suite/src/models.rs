//! Payload and decoded-result models
//!
//! Outbound payloads are built fresh per scenario and discarded after the
//! send; decoded results live only long enough for the literal assertions.
//! Field names follow the wire format of the target service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials payload for the register and login endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates a new credentials payload.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Name/job payload for the create and update endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobChange {
    /// Person name.
    pub name: String,
    /// Job description.
    pub job: String,
}

impl JobChange {
    /// Creates a new name/job payload.
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// Decoded register/login response.
///
/// The register endpoint returns both fields; login returns only the
/// token. Both are optional so that presence is asserted explicitly by
/// the scenario rather than failing inside the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResult {
    /// Server-assigned account id.
    #[serde(default)]
    pub id: Option<u64>,
    /// Authentication token.
    #[serde(default)]
    pub token: Option<String>,
}

/// The `data` record of a single-user response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserData {
    /// User id.
    pub id: u64,
    /// User email.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Avatar image URL.
    pub avatar: String,
}

/// The `support` record of a single-user response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Support {
    /// Support page URL.
    pub url: String,
    /// Support banner text.
    pub text: String,
}

/// Decoded single-user response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserDetail {
    /// User record.
    pub data: UserData,
    /// Support banner.
    pub support: Support,
}

/// Decoded create/update response.
///
/// The service echoes the submitted name and job, and adds an id plus a
/// creation timestamp on create, or an update timestamp on update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult {
    /// Echoed person name.
    pub name: String,
    /// Echoed job description.
    pub job: String,
    /// Server-assigned record id (create only).
    #[serde(default)]
    pub id: Option<String>,
    /// Creation timestamp (create only).
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Update timestamp (update only).
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
