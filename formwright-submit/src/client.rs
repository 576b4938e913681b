//! Submission client and its variant configuration.

use formwright_types::SchemaField;
use reqwest::{StatusCode, Url};
use tracing::{debug, info, warn};

use crate::{Result, SubmitError};

/// Submission flags read from the two controls outside the field list.
///
/// When present, both are always sent as boolean query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitFlags {
    /// Hide results from respondents.
    pub hide_results: bool,

    /// Require respondents to be logged in.
    pub disallow_anon_answer: bool,
}

/// How the response to a submission is turned into navigation.
///
/// The two form variants diverge here; neither is guessed to be canonical.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitBehavior {
    /// Branch on the response status: 200 redirects to the body text,
    /// 400 keeps the page and surfaces the body as a validation message,
    /// anything else replaces the page with the body.
    #[default]
    StatusDriven,

    /// Ignore the response entirely and redirect to a fixed target.
    AlwaysRedirect {
        /// The redirect target, typically the root path.
        target: String,
    },
}

/// Per-submission options: flags and response handling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitOptions {
    /// Query-parameter flags, absent in the plain variant.
    flags: Option<SubmitFlags>,

    /// Response handling behavior.
    behavior: SubmitBehavior,
}

impl SubmitOptions {
    /// Create options for the plain variant: no flags, status-driven
    /// navigation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the given flags as query parameters.
    pub fn with_flags(mut self, flags: SubmitFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Set the response handling behavior.
    pub fn with_behavior(mut self, behavior: SubmitBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

/// What the caller should do after a completed submission.
///
/// "Completed" means the server answered; transport failures surface as
/// `SubmitError` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Navigate to the given URL.
    Redirect(String),

    /// Stay on the page and show the validation message to the user.
    Rejected(String),

    /// Replace the current document with the given HTML body.
    ErrorPage(String),
}

/// Client for submitting a schema snapshot to a server endpoint.
#[derive(Debug, Clone)]
pub struct SubmitClient {
    /// Submission endpoint.
    endpoint: Url,

    /// HTTP client.
    client: reqwest::Client,
}

impl SubmitClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            client: reqwest::Client::new(),
        })
    }

    /// Use a pre-configured HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// POST the schema as a JSON array and classify the response.
    ///
    /// There is no retry and no timeout policy beyond the client's own; a
    /// transport failure aborts the submit action.
    pub async fn submit(
        &self,
        schema: &[SchemaField],
        options: &SubmitOptions,
    ) -> Result<SubmitOutcome> {
        let mut request = self.client.post(self.endpoint.clone()).json(&schema);
        if let Some(flags) = &options.flags {
            request = request.query(&[
                ("hide_results", flags.hide_results),
                ("disallow_anon_answer", flags.disallow_anon_answer),
            ]);
        }

        debug!(fields = schema.len(), endpoint = %self.endpoint, "submitting form schema");
        let response = request.send().await.map_err(SubmitError::Network)?;

        match &options.behavior {
            SubmitBehavior::AlwaysRedirect { target } => {
                debug!(status = %response.status(), "response ignored, redirecting unconditionally");
                Ok(SubmitOutcome::Redirect(target.clone()))
            }
            SubmitBehavior::StatusDriven => {
                let status = response.status();
                let body = response.text().await.map_err(SubmitError::Network)?;
                match status {
                    StatusCode::OK => {
                        info!(redirect = %body, "form accepted");
                        Ok(SubmitOutcome::Redirect(body))
                    }
                    StatusCode::BAD_REQUEST => {
                        info!(message = %body, "form rejected by server");
                        Ok(SubmitOutcome::Rejected(body))
                    }
                    other => {
                        warn!(status = %other, "unexpected response, replacing page");
                        Ok(SubmitOutcome::ErrorPage(body))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_schema() -> Vec<SchemaField> {
        vec![SchemaField::Text {
            name: "Q1".to_string(),
            default: "A".to_string(),
        }]
    }

    #[tokio::test]
    async fn redirects_to_body_on_ok() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/forms/new"))
            .and(body_json(serde_json::json!([
                {"type": "text", "name": "Q1", "default": "A"}
            ])))
            .respond_with(ResponseTemplate::new(200).set_body_string("/form/42"))
            .mount(&server)
            .await;

        let client = SubmitClient::new(&format!("{}/forms/new", server.uri())).unwrap();
        let outcome = client
            .submit(&sample_schema(), &SubmitOptions::new())
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Redirect("/form/42".to_string()));
    }

    #[tokio::test]
    async fn stays_on_page_when_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("a question has no name"))
            .mount(&server)
            .await;

        let client = SubmitClient::new(&server.uri()).unwrap();
        let outcome = client
            .submit(&sample_schema(), &SubmitOptions::new())
            .await
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("a question has no name".to_string())
        );
    }

    #[tokio::test]
    async fn other_statuses_replace_the_page() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>server error</html>"))
            .mount(&server)
            .await;

        let client = SubmitClient::new(&server.uri()).unwrap();
        let outcome = client
            .submit(&sample_schema(), &SubmitOptions::new())
            .await
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::ErrorPage("<html>server error</html>".to_string())
        );
    }

    #[tokio::test]
    async fn flags_are_sent_as_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(query_param("hide_results", "true"))
            .and(query_param("disallow_anon_answer", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_string("/"))
            .mount(&server)
            .await;

        let client = SubmitClient::new(&server.uri()).unwrap();
        let options = SubmitOptions::new().with_flags(SubmitFlags {
            hide_results: true,
            disallow_anon_answer: false,
        });
        let outcome = client.submit(&sample_schema(), &options).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Redirect("/".to_string()));
    }

    #[tokio::test]
    async fn plain_variant_sends_no_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(query_param_is_missing("hide_results"))
            .and(query_param_is_missing("disallow_anon_answer"))
            .respond_with(ResponseTemplate::new(200).set_body_string("/"))
            .mount(&server)
            .await;

        let client = SubmitClient::new(&server.uri()).unwrap();
        let outcome = client
            .submit(&sample_schema(), &SubmitOptions::new())
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Redirect("/".to_string()));
    }

    #[tokio::test]
    async fn always_redirect_ignores_the_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>ignored</html>"))
            .mount(&server)
            .await;

        let client = SubmitClient::new(&server.uri()).unwrap();
        let options = SubmitOptions::new().with_behavior(SubmitBehavior::AlwaysRedirect {
            target: "/".to_string(),
        });
        let outcome = client.submit(&sample_schema(), &options).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Redirect("/".to_string()));
    }

    #[tokio::test]
    async fn network_failure_is_fatal() {
        // Nothing listens on this port.
        let client = SubmitClient::new("http://127.0.0.1:1/forms/new").unwrap();
        let result = client.submit(&sample_schema(), &SubmitOptions::new()).await;
        assert!(matches!(result, Err(SubmitError::Network(_))));
    }

    #[test]
    fn invalid_endpoint_is_rejected_up_front() {
        assert!(matches!(
            SubmitClient::new("not a url"),
            Err(SubmitError::InvalidEndpoint(_))
        ));
    }
}
