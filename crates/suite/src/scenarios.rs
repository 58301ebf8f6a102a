//! Test scenarios
//!
//! Seven fixed scenarios against the target service's user-management
//! endpoints. Each one is a single linear sequence: build payload, send,
//! verify status and structure, decode, assert literal values. The first
//! failure ends the scenario; remaining checks are skipped. Scenarios
//! share nothing but the immutable templates, so they can run in any
//! order or in isolation.

use std::sync::Arc;

use apivet_application::{ExecuteRequest, HttpClient, ScenarioResult, expect_eq, expect_some};
use apivet_infrastructure::{ResponseVerifier, decode};
use tracing::info;
use url::Url;

use crate::models::{AuthResult, Credentials, JobChange, JobResult, UserDetail};
use crate::specs::SuiteSpecs;

/// The scenario set, bound to one HTTP client and one target service.
pub struct Scenarios<C: HttpClient> {
    exec: ExecuteRequest<C>,
    verifier: ResponseVerifier,
    specs: SuiteSpecs,
}

impl<C: HttpClient> Scenarios<C> {
    /// Creates the scenario set for the given client and base URL.
    pub fn new(client: Arc<C>, base: Url) -> Self {
        Self {
            exec: ExecuteRequest::new(client),
            verifier: ResponseVerifier::new(),
            specs: SuiteSpecs::new(base),
        }
    }

    /// Base URL of the target service.
    #[must_use]
    pub const fn base(&self) -> &Url {
        self.specs.json_request.base()
    }

    /// Registers a known account and checks that the service hands back
    /// an id and a token.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-200 status, or a missing id or
    /// token in the decoded body.
    pub async fn register_user(&self) -> ScenarioResult<()> {
        info!("registering user");
        let payload = Credentials::new("eve.holt@reqres.in", "pistol");
        let request = self
            .specs
            .json_request
            .post("/api/register")?
            .with_json_body(&payload)?;
        let response = self.exec.execute(&request).await?;
        self.verifier
            .verify(&response, &self.specs.token_response.clone().with_status(200))?;

        info!("checking the user is registered");
        let auth: AuthResult = decode(&response)?;
        expect_some("id", auth.id)?;
        expect_some("token", auth.token)?;
        Ok(())
    }

    /// Logs in with known credentials and checks that a token comes back.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-200 status, or a missing token.
    pub async fn login_user(&self) -> ScenarioResult<()> {
        info!("logging in user");
        let payload = Credentials::new("eve.holt@reqres.in", "pistol");
        let request = self
            .specs
            .json_request
            .post("/api/login")?
            .with_json_body(&payload)?;
        let response = self.exec.execute(&request).await?;
        self.verifier
            .verify(&response, &self.specs.token_response.clone().with_status(200))?;

        info!("checking the user is logged in");
        let auth: AuthResult = decode(&response)?;
        expect_some("token", auth.token)?;
        Ok(())
    }

    /// Fetches user 2 and checks every field against the service's
    /// fixture data.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-200 status, a body that does not
    /// decode, or any field differing from the expected fixture value.
    pub async fn fetch_single_user(&self) -> ScenarioResult<()> {
        info!("fetching user 2");
        let request = self.specs.bare_request.get("/api/users/2")?;
        let response = self.exec.execute(&request).await?;
        self.verifier
            .verify(&response, &self.specs.plain_response.clone().with_status(200))?;

        info!("checking the user fields");
        let user: UserDetail = decode(&response)?;
        expect_eq("data.id", &user.data.id, &2)?;
        expect_eq("data.email", user.data.email.as_str(), "janet.weaver@reqres.in")?;
        expect_eq("data.first_name", user.data.first_name.as_str(), "Janet")?;
        expect_eq("data.last_name", user.data.last_name.as_str(), "Weaver")?;
        expect_eq(
            "data.avatar",
            user.data.avatar.as_str(),
            "https://reqres.in/img/faces/2-image.jpg",
        )?;
        expect_eq(
            "support.url",
            user.support.url.as_str(),
            "https://reqres.in/#support-heading",
        )?;
        expect_eq(
            "support.text",
            user.support.text.as_str(),
            "To keep ReqRes free, contributions towards server costs are appreciated!",
        )?;
        Ok(())
    }

    /// Creates a name/job record and checks the service echoes both
    /// fields and assigns an id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-201 status, or an echo that does
    /// not match the submitted payload.
    pub async fn create_job(&self) -> ScenarioResult<()> {
        info!("creating name and job");
        let payload = JobChange::new("Cat", "walk around the house");
        let request = self
            .specs
            .json_request
            .post("/api/users")?
            .with_json_body(&payload)?;
        let response = self.exec.execute(&request).await?;
        self.verifier
            .verify(&response, &self.specs.plain_response.clone().with_status(201))?;

        info!("checking the created record");
        let job: JobResult = decode(&response)?;
        expect_eq("name", job.name.as_str(), payload.name.as_str())?;
        expect_eq("job", job.job.as_str(), payload.job.as_str())?;
        expect_some("id", job.id)?;
        expect_some("createdAt", job.created_at)?;
        Ok(())
    }

    /// Replaces the name/job record of user 2 and checks the echo.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-200 status, or an echo that does
    /// not match the submitted payload.
    pub async fn update_job(&self) -> ScenarioResult<()> {
        info!("updating name and job");
        let payload = JobChange::new("Kitty", "sleep all day");
        let request = self
            .specs
            .json_request
            .put("/api/users/2")?
            .with_json_body(&payload)?;
        let response = self.exec.execute(&request).await?;
        self.verifier
            .verify(&response, &self.specs.plain_response.clone().with_status(200))?;

        info!("checking the updated record");
        let job: JobResult = decode(&response)?;
        expect_eq("name", job.name.as_str(), payload.name.as_str())?;
        expect_eq("job", job.job.as_str(), payload.job.as_str())?;
        expect_some("updatedAt", job.updated_at)?;
        Ok(())
    }

    /// Posts to the users endpoint with no body and no content type and
    /// checks the service rejects it with 415.
    ///
    /// A 415 is the pass condition here, which exercises the harness's
    /// ability to treat an expected failure status as success.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or any status other than 415.
    pub async fn reject_bodyless_create(&self) -> ScenarioResult<()> {
        info!("posting without body or content type");
        let request = self.specs.bare_request.post("/api/users")?;
        let response = self.exec.execute(&request).await?;
        self.verifier
            .verify(&response, &self.specs.plain_response.clone().with_status(415))?;
        Ok(())
    }

    /// Deletes user 2 and checks for 204 with an empty body. No decoding
    /// is attempted.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-204 status, or a non-empty body.
    pub async fn delete_user(&self) -> ScenarioResult<()> {
        info!("deleting user 2");
        let request = self.specs.bare_request.delete("/api/users/2")?;
        let response = self.exec.execute(&request).await?;
        self.verifier
            .verify(&response, &self.specs.plain_response.clone().with_status(204))?;
        expect_eq("body", response.body.as_str(), "")?;
        Ok(())
    }
}
