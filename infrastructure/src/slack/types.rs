//! Slack Web API wire types
//!
//! Only the fields this tool reads are modeled; the API returns much more.

use serde::Deserialize;

/// A member of the workspace, as returned by `users.list`
#[derive(Debug, Clone, Deserialize)]
pub struct SlackUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub is_app_user: bool,
    pub tz: Option<String>,
    #[serde(default)]
    pub profile: SlackProfile,
}

impl SlackUser {
    /// Deleted users, bots and app users never join a lunch group
    pub fn is_candidate(&self) -> bool {
        !self.deleted && !self.is_bot && !self.is_app_user
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackProfile {
    pub real_name: Option<String>,
}

/// `conversations.members` response
#[derive(Debug, Deserialize)]
pub struct MembersResponse {
    pub ok: bool,
    #[serde(default)]
    pub members: Vec<String>,
    pub error: Option<String>,
}

/// `users.list` response
#[derive(Debug, Deserialize)]
pub struct UsersListResponse {
    pub ok: bool,
    #[serde(default)]
    pub members: Vec<SlackUser>,
    pub error: Option<String>,
}

/// `conversations.open` response
#[derive(Debug, Deserialize)]
pub struct OpenConversationResponse {
    pub ok: bool,
    pub channel: Option<OpenedChannel>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpenedChannel {
    pub id: String,
}

/// `chat.postMessage` response
#[derive(Debug, Deserialize)]
pub struct PostMessageResponse {
    pub ok: bool,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_with_missing_flags() {
        let user: SlackUser = serde_json::from_str(
            r#"{"id": "U123", "name": "arthur", "tz": "America/Los_Angeles"}"#,
        )
        .unwrap();
        assert!(user.is_candidate());
        assert_eq!(user.tz.as_deref(), Some("America/Los_Angeles"));
        assert!(user.profile.real_name.is_none());
    }

    #[test]
    fn test_bots_and_deleted_users_are_not_candidates() {
        let bot: SlackUser =
            serde_json::from_str(r#"{"id": "B1", "name": "lunchbot", "is_bot": true}"#).unwrap();
        let gone: SlackUser =
            serde_json::from_str(r#"{"id": "U2", "name": "left", "deleted": true}"#).unwrap();
        assert!(!bot.is_candidate());
        assert!(!gone.is_candidate());
    }

    #[test]
    fn test_error_response_shape() {
        let resp: MembersResponse =
            serde_json::from_str(r#"{"ok": false, "error": "channel_not_found"}"#).unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.error.as_deref(), Some("channel_not_found"));
        assert!(resp.members.is_empty());
    }
}
