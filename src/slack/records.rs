//! Slack record shapes and the per-kind conversion table

use crate::intermediate::Supertag;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A source collection of a Slack export
///
/// Each kind declares where its records live, the container node that groups
/// them, the supertag its records carry and the fields they expose. Only
/// `Users` is converted; channels and messages are declared so that the
/// catalogs and container layout are fixed ahead of their mappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Users,
    Messages,
    Channels,
}

const USER_FIELDS: &[&str] = &["UserName", "tz", "tz_label", "tz_offset", "deleted"];

impl CollectionKind {
    /// All kinds, in supertag catalog order
    pub const ALL: [CollectionKind; 3] = [Self::Users, Self::Messages, Self::Channels];

    /// File name inside the export directory. Messages are spread over
    /// per-channel directories and have no single source file.
    pub fn source_file(&self) -> Option<&'static str> {
        match self {
            Self::Users => Some("users.json"),
            Self::Channels => Some("channels.json"),
            Self::Messages => None,
        }
    }

    pub fn container_name(&self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Messages => "Messages",
            Self::Channels => "Channels",
        }
    }

    pub fn container_uid(&self) -> &'static str {
        match self {
            Self::Users => "usersUid",
            Self::Messages => "messagesUid",
            Self::Channels => "channelsUid",
        }
    }

    pub fn supertag_name(&self) -> &'static str {
        match self {
            Self::Users => "slack-user",
            Self::Messages => "slack-message",
            Self::Channels => "slack-channel",
        }
    }

    pub fn supertag_uid(&self) -> &'static str {
        match self {
            Self::Users => "slack-user-uid",
            Self::Messages => "slack-message-uid",
            Self::Channels => "slack-channel-uid",
        }
    }

    pub fn supertag(&self) -> Supertag {
        Supertag::new(self.supertag_uid(), self.supertag_name())
    }

    /// Field names carried by each record of this kind, in child order
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::Users => USER_FIELDS,
            Self::Messages | Self::Channels => &[],
        }
    }

    /// Whether records of this kind are mapped into the tree
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Users)
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.container_name().to_lowercase())
    }
}

/// A record that maps to one leaf node
pub trait SlackRecord: DeserializeOwned {
    const KIND: CollectionKind;

    /// Source identifier, used verbatim as the node uid
    fn uid(&self) -> &str;

    /// Label for the node
    fn display_name(&self) -> &str;

    /// `(field name, canonical text)` pairs in `KIND.field_names()` order
    fn field_values(&self) -> Vec<(&'static str, String)>;
}

/// One entry of `users.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlackUser {
    pub id: String,
    pub name: String,
    pub real_name: String,
    pub tz: String,
    pub tz_label: String,
    pub tz_offset: serde_json::Number,
    pub deleted: bool,
    #[serde(default)]
    pub image_original: Option<String>,
}

impl SlackRecord for SlackUser {
    const KIND: CollectionKind = CollectionKind::Users;

    fn uid(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.real_name
    }

    fn field_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("UserName", self.name.clone()),
            ("tz", self.tz.clone()),
            ("tz_label", self.tz_label.clone()),
            ("tz_offset", number_text(&self.tz_offset)),
            ("deleted", self.deleted.to_string()),
        ]
    }
}

/// Canonical text for a JSON number: integral values print without a
/// fractional part, whether they were written as `-28800` or `-28800.0`.
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}
