//! Slack-channel roster source
//!
//! Channel membership arrives as opaque user IDs; the workspace directory
//! (`users.list`) translates them to usernames and timezones. Deleted
//! users, bots and app users are skipped. A channel member missing from the
//! directory entirely is a data-integrity problem and fails the run fast
//! rather than being skipped (silent skips used to cause undercounts).

use crate::slack::client::{SlackClient, SlackError};
use crate::slack::types::SlackUser;
use async_trait::async_trait;
use roulette_application::{RosterSource, SourceError};
use roulette_domain::{Identity, Participant};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Roster source backed by a Slack channel's membership
pub struct SlackRosterSource {
    client: Arc<SlackClient>,
    channel: String,
}

impl SlackRosterSource {
    pub fn new(client: Arc<SlackClient>, channel: impl Into<String>) -> Self {
        Self {
            client,
            channel: channel.into(),
        }
    }
}

#[async_trait]
impl RosterSource for SlackRosterSource {
    async fn fetch_roster(&self) -> Result<Vec<Participant>, SourceError> {
        info!(channel = %self.channel, "fetching channel membership");
        let member_ids = self
            .client
            .conversation_members(&self.channel)
            .await
            .map_err(to_source_error)?;

        info!("fetching user directory");
        let directory: HashMap<String, SlackUser> = self
            .client
            .users_list()
            .await
            .map_err(to_source_error)?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        translate_members(&member_ids, &directory)
    }
}

/// Translate channel member IDs through the user directory
fn translate_members(
    member_ids: &[String],
    directory: &HashMap<String, SlackUser>,
) -> Result<Vec<Participant>, SourceError> {
    let mut participants = Vec::with_capacity(member_ids.len());
    for id in member_ids {
        let user = directory
            .get(id)
            .ok_or_else(|| SourceError::UnknownIdentity(Identity::from(id.as_str())))?;

        if !user.is_candidate() {
            debug!(id = %user.id, name = %user.name, "skipping non-candidate user");
            continue;
        }

        let mut participant = Participant::new(user.name.as_str()).with_contact(user.id.as_str());
        if let Some(tz) = &user.tz {
            participant = participant.with_timezone(tz.as_str());
        }
        if let Some(real_name) = &user.profile.real_name {
            participant = participant.with_display_name(real_name.as_str());
        }
        participants.push(participant);
    }
    Ok(participants)
}

fn to_source_error(e: SlackError) -> SourceError {
    SourceError::Unavailable(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> SlackUser {
        serde_json::from_str(&format!(
            r#"{{"id": "{id}", "name": "{name}", "tz": "America/Los_Angeles"}}"#
        ))
        .unwrap()
    }

    fn directory(users: Vec<SlackUser>) -> HashMap<String, SlackUser> {
        users.into_iter().map(|u| (u.id.clone(), u)).collect()
    }

    #[test]
    fn test_translation_maps_ids_to_usernames() {
        let dir = directory(vec![user("U1", "arthur"), user("U2", "ford")]);
        let ids = vec!["U1".to_string(), "U2".to_string()];

        let roster = translate_members(&ids, &dir).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].identity, Identity::from("arthur"));
        assert_eq!(roster[0].contact.as_deref(), Some("U1"));
        assert_eq!(roster[0].timezone.as_deref(), Some("America/Los_Angeles"));
    }

    #[test]
    fn test_non_candidates_skipped() {
        let mut bot = user("B1", "lunchbot");
        bot.is_bot = true;
        let dir = directory(vec![user("U1", "arthur"), bot]);
        let ids = vec!["U1".to_string(), "B1".to_string()];

        let roster = translate_members(&ids, &dir).unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].identity, Identity::from("arthur"));
    }

    #[test]
    fn test_unknown_member_fails_fast() {
        let dir = directory(vec![user("U1", "arthur")]);
        let ids = vec!["U1".to_string(), "UGHOST".to_string()];

        let err = translate_members(&ids, &dir).unwrap_err();

        assert!(matches!(
            err,
            SourceError::UnknownIdentity(id) if id.as_str() == "UGHOST"
        ));
    }
}
