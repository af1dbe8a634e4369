//! SDK-agnostic types for Lex model-building resources
//!
//! These are owned snapshots of the service responses so callers (and tests)
//! never have to construct AWS SDK output types directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version label Lex uses for the unpublished working copy of a bot
pub const BOT_VERSION_LATEST: &str = "$LATEST";

/// Version label Lex uses for the unpublished working copy of an intent
pub const INTENT_VERSION_LATEST: &str = "$LATEST";

/// Version label Lex uses for the unpublished working copy of a slot type
pub const SLOT_TYPE_VERSION_LATEST: &str = "$LATEST";

/// The versioned resource kinds exposed by the Lex model-building service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Bot,
    Intent,
    SlotType,
}

impl ResourceKind {
    /// The reserved label meaning "no version has been published yet"
    pub fn latest_label(&self) -> &'static str {
        match self {
            ResourceKind::Bot => BOT_VERSION_LATEST,
            ResourceKind::Intent => INTENT_VERSION_LATEST,
            ResourceKind::SlotType => SLOT_TYPE_VERSION_LATEST,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Bot => write!(f, "bot"),
            ResourceKind::Intent => write!(f, "intent"),
            ResourceKind::SlotType => write!(f, "slot type"),
        }
    }
}

/// One entry of a `Get*Versions` listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSummary {
    pub name: Option<String>,
    /// Either the `$LATEST` label or a decimal version number; the service
    /// does not guarantee either, so this stays a raw string
    pub version: Option<String>,
    pub description: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_updated_date: Option<DateTime<Utc>>,
}

impl VersionSummary {
    /// Summary carrying only a version label
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Default::default()
        }
    }
}

/// A single page of a version listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionPage {
    pub versions: Vec<VersionSummary>,
    /// Continuation token; `None` on the last page
    pub next_token: Option<String>,
}

impl VersionPage {
    /// Build a page from bare version labels
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            versions: labels
                .into_iter()
                .map(VersionSummary::with_version)
                .collect(),
            next_token: None,
        }
    }

    /// Set the continuation token for this page
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

/// A specific version of a Lex bot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub failure_reason: Option<String>,
    pub checksum: Option<String>,
    pub locale: Option<String>,
    pub child_directed: Option<bool>,
    pub idle_session_ttl_in_seconds: Option<i32>,
    pub voice_id: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_updated_date: Option<DateTime<Utc>>,
}

/// A specific version of a Lex intent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub checksum: Option<String>,
    pub parent_intent_signature: Option<String>,
    pub sample_utterances: Vec<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_updated_date: Option<DateTime<Utc>>,
}

/// A specific version of a Lex slot type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotType {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub checksum: Option<String>,
    pub value_selection_strategy: Option<String>,
    pub parent_slot_type_signature: Option<String>,
    pub enumeration_value_count: usize,
    pub created_date: Option<DateTime<Utc>>,
    pub last_updated_date: Option<DateTime<Utc>>,
}
