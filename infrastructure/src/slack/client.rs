//! Thin Slack Web API client
//!
//! Wraps the handful of endpoints this tool touches. No retries, no
//! backoff: a failed call surfaces immediately and the caller decides
//! whether it is fatal (roster fetch) or per-group (delivery).

use crate::slack::types::{
    MembersResponse, OpenConversationResponse, PostMessageResponse, SlackUser, UsersListResponse,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Errors from the Slack Web API
#[derive(Error, Debug)]
pub enum SlackError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered but with `ok: false`
    #[error("Slack API error: {0}")]
    Api(String),
}

/// Client for the Slack Web API
pub struct SlackClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl SlackClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// User IDs of all members of `channel`
    pub async fn conversation_members(&self, channel: &str) -> Result<Vec<String>, SlackError> {
        debug!(channel, "conversations.members");
        let resp: MembersResponse = self
            .get("conversations.members", &[("channel", channel)])
            .await?;
        if !resp.ok {
            return Err(SlackError::Api(unwrap_api_error(resp.error)));
        }
        Ok(resp.members)
    }

    /// The full workspace user directory
    pub async fn users_list(&self) -> Result<Vec<SlackUser>, SlackError> {
        debug!("users.list");
        let resp: UsersListResponse = self.get("users.list", &[]).await?;
        if !resp.ok {
            return Err(SlackError::Api(unwrap_api_error(resp.error)));
        }
        Ok(resp.members)
    }

    /// Open a multi-party IM with `user_ids`, returning the conversation ID
    pub async fn open_conversation(&self, user_ids: &[String]) -> Result<String, SlackError> {
        debug!(users = user_ids.len(), "conversations.open");
        let resp: OpenConversationResponse = self
            .post(
                "conversations.open",
                json!({ "users": user_ids.join(",") }),
            )
            .await?;
        if !resp.ok {
            return Err(SlackError::Api(unwrap_api_error(resp.error)));
        }
        resp.channel
            .map(|c| c.id)
            .ok_or_else(|| SlackError::Api("conversations.open returned no channel".to_string()))
    }

    /// Post `text` to a channel, conversation or `@user` recipient
    pub async fn post_message(&self, channel: &str, text: &str) -> Result<(), SlackError> {
        debug!(channel, "chat.postMessage");
        let resp: PostMessageResponse = self
            .post(
                "chat.postMessage",
                json!({
                    "channel": channel,
                    "text": text,
                    "link_names": 1,
                    "as_user": true,
                }),
            )
            .await?;
        if !resp.ok {
            return Err(SlackError::Api(unwrap_api_error(resp.error)));
        }
        Ok(())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SlackError> {
        let response = self
            .http
            .get(format!("{}/{}", self.base_url, method))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn post<T: DeserializeOwned>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<T, SlackError> {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

fn unwrap_api_error(error: Option<String>) -> String {
    error.unwrap_or_else(|| "unknown error".to_string())
}
