//! Roster entities: participants and the exclusion set

use crate::core::identity::Identity;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A candidate participant as produced by a roster source
///
/// Everything beyond the identity is optional metadata: sources differ in
/// what they can supply (a spreadsheet of form responses has no timezone,
/// a chat directory has no email).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique key within a run
    pub identity: Identity,
    /// Human-readable name, for rendering only
    pub display_name: Option<String>,
    /// IANA timezone tag, e.g. "America/Los_Angeles"
    pub timezone: Option<String>,
    /// Delivery handle for the notifier (chat user ID or email)
    pub contact: Option<String>,
}

impl Participant {
    pub fn new(identity: impl Into<Identity>) -> Self {
        Self {
            identity: identity.into(),
            display_name: None,
            timezone: None,
            contact: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Name to show an operator: display name if known, identity otherwise
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.identity.as_str())
    }
}

/// Identities explicitly opted out for this run
///
/// Read once from the exclusion source and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSet {
    identities: HashSet<Identity>,
}

impl ExclusionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.identities.contains(identity)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.identities.iter()
    }
}

impl<I: Into<Identity>> FromIterator<I> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            identities: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefers_display_name() {
        let p = Participant::new("adent").with_display_name("Arthur Dent");
        assert_eq!(p.label(), "Arthur Dent");

        let bare = Participant::new("adent");
        assert_eq!(bare.label(), "adent");
    }

    #[test]
    fn test_exclusion_set_from_iter_dedups() {
        let set: ExclusionSet = ["zaphod", "trillian", "zaphod"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Identity::from("zaphod")));
        assert!(!set.contains(&Identity::from("marvin")));
    }
}
