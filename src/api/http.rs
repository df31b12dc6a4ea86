//! HTTP implementation of [`TicketApi`] over reqwest.
//!
//! Endpoints, relative to the configured backend origin:
//! - `GET /tickets` — ticket collection
//! - `POST /tickets` — create a ticket from a JSON draft
//! - `GET /team-members` — skill/assignee directory

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{Result, TixError};
use crate::types::{TeamMember, Ticket, TicketDraft};

use super::TicketApi;

const TICKETS_PATH: &str = "tickets";
const TEAM_MEMBERS_PATH: &str = "team-members";

/// Reqwest-backed client for the ticket backend
pub struct HttpTicketApi {
    client: Client,
    base: Url,
}

impl HttpTicketApi {
    /// Build a client from configuration.
    ///
    /// Configures the HTTP client with a 10s connect timeout and the
    /// configured total timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base = config.backend_url()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| TixError::Config(format!("invalid endpoint '{}': {}", path, e)))
    }

    /// Check the status and decode the body, keeping decode failures
    /// distinguishable from transport failures.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("backend request failed with HTTP {}", status);
            return Err(TixError::api(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl TicketApi for HttpTicketApi {
    fn list_tickets(&self) -> impl std::future::Future<Output = Result<Vec<Ticket>>> + Send {
        async move {
            let response = self.client.get(self.endpoint(TICKETS_PATH)?).send().await?;
            Self::decode(response).await
        }
    }

    fn create_ticket(
        &self,
        draft: &TicketDraft,
    ) -> impl std::future::Future<Output = Result<Ticket>> + Send {
        let draft = draft.clone();
        async move {
            let response = self
                .client
                .post(self.endpoint(TICKETS_PATH)?)
                .json(&draft)
                .send()
                .await?;
            Self::decode(response).await
        }
    }

    fn list_team_members(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<TeamMember>>> + Send {
        async move {
            let response = self
                .client
                .get(self.endpoint(TEAM_MEMBERS_PATH)?)
                .send()
                .await?;
            Self::decode(response).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_for(base: &str) -> HttpTicketApi {
        let config = Config {
            backend_url: base.to_string(),
            ..Config::default()
        };
        HttpTicketApi::from_config(&config).unwrap()
    }

    #[test]
    fn test_endpoints_join_cleanly() {
        let api = api_for("http://localhost:3000");
        assert_eq!(
            api.endpoint(TICKETS_PATH).unwrap().as_str(),
            "http://localhost:3000/tickets"
        );
        assert_eq!(
            api.endpoint(TEAM_MEMBERS_PATH).unwrap().as_str(),
            "http://localhost:3000/team-members"
        );
    }

    #[test]
    fn test_trailing_slash_does_not_double() {
        let api = api_for("http://localhost:3000/");
        assert_eq!(
            api.endpoint(TICKETS_PATH).unwrap().as_str(),
            "http://localhost:3000/tickets"
        );
    }

    #[test]
    fn test_api_error_excerpts_body() {
        let err = TixError::api(reqwest::StatusCode::BAD_REQUEST, "deadline missing");
        assert_eq!(
            err.to_string(),
            "backend returned HTTP 400: deadline missing"
        );
    }

    #[test]
    fn test_api_error_falls_back_to_reason() {
        let err = TixError::api(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "  ");
        assert!(err.to_string().contains("Internal Server Error"));
    }
}
