//! Slack notifier
//!
//! Opens a multi-party IM per group and posts the assignment message there;
//! the admin summary goes to a configured recipient (`@user` or channel).

use crate::slack::client::{SlackClient, SlackError};
use async_trait::async_trait;
use roulette_application::{DeliveryError, Notifier};
use roulette_domain::Group;
use std::sync::Arc;
use tracing::info;

/// Notifier backed by Slack group chats
pub struct SlackNotifier {
    client: Arc<SlackClient>,
    admin_recipient: String,
}

impl SlackNotifier {
    pub fn new(client: Arc<SlackClient>, admin_recipient: impl Into<String>) -> Self {
        Self {
            client,
            admin_recipient: admin_recipient.into(),
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify_group(&self, group: &Group, message: &str) -> Result<(), DeliveryError> {
        let user_ids: Vec<String> = group
            .members()
            .iter()
            .map(|p| {
                p.contact.clone().ok_or_else(|| {
                    DeliveryError::MissingContact(p.identity.to_string())
                })
            })
            .collect::<Result<_, _>>()?;

        let conversation = self
            .client
            .open_conversation(&user_ids)
            .await
            .map_err(to_delivery_error)?;
        info!(conversation = %conversation, members = user_ids.len(), "opened group chat");

        self.client
            .post_message(&conversation, message)
            .await
            .map_err(to_delivery_error)
    }

    async fn notify_admin(&self, message: &str) -> Result<(), DeliveryError> {
        self.client
            .post_message(&self.admin_recipient, message)
            .await
            .map_err(to_delivery_error)
    }
}

fn to_delivery_error(e: SlackError) -> DeliveryError {
    match e {
        SlackError::Transport(e) => DeliveryError::Transport(e.to_string()),
        SlackError::Api(msg) => DeliveryError::Rejected(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_domain::Participant;

    #[tokio::test]
    async fn test_member_without_contact_is_rejected_before_any_call() {
        // Client never reached: the missing handle fails first
        let client = Arc::new(SlackClient::new("xoxb-test").with_base_url("http://127.0.0.1:9"));
        let notifier = SlackNotifier::new(client, "@admin");
        let group = Group::new(vec![Participant::new("nohandle")]);

        let err = notifier.notify_group(&group, "hi").await.unwrap_err();

        assert!(matches!(
            err,
            DeliveryError::MissingContact(id) if id == "nohandle"
        ));
    }
}
