//! Type conversions between AWS SDK outputs and lexfind types

use crate::types::{Bot, Intent, SlotType, VersionPage, VersionSummary};
use aws_sdk_lexmodelbuilding::operation::{
    get_bot::GetBotOutput, get_bot_versions::GetBotVersionsOutput, get_intent::GetIntentOutput,
    get_intent_versions::GetIntentVersionsOutput, get_slot_type::GetSlotTypeOutput,
    get_slot_type_versions::GetSlotTypeVersionsOutput,
};
use aws_smithy_types::DateTime as SmithyDateTime;
use chrono::{DateTime, Utc};

// ===== Timestamps =====

pub fn to_chrono(timestamp: Option<&SmithyDateTime>) -> Option<DateTime<Utc>> {
    timestamp.and_then(|ts| DateTime::<Utc>::from_timestamp(ts.secs(), ts.subsec_nanos()))
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

// ===== Single resources =====

/// A `GetBot` response without a name carries no usable payload
pub fn from_get_bot_output(output: &GetBotOutput) -> Option<Bot> {
    let name = output.name()?;
    Some(Bot {
        name: name.to_string(),
        version: owned(output.version()),
        description: owned(output.description()),
        status: output.status().map(|s| s.as_str().to_string()),
        failure_reason: owned(output.failure_reason()),
        checksum: owned(output.checksum()),
        locale: output.locale().map(|l| l.as_str().to_string()),
        child_directed: output.child_directed(),
        idle_session_ttl_in_seconds: output.idle_session_ttl_in_seconds(),
        voice_id: owned(output.voice_id()),
        created_date: to_chrono(output.created_date()),
        last_updated_date: to_chrono(output.last_updated_date()),
    })
}

pub fn from_get_intent_output(output: &GetIntentOutput) -> Option<Intent> {
    let name = output.name()?;
    Some(Intent {
        name: name.to_string(),
        version: owned(output.version()),
        description: owned(output.description()),
        checksum: owned(output.checksum()),
        parent_intent_signature: owned(output.parent_intent_signature()),
        sample_utterances: output.sample_utterances().to_vec(),
        created_date: to_chrono(output.created_date()),
        last_updated_date: to_chrono(output.last_updated_date()),
    })
}

pub fn from_get_slot_type_output(output: &GetSlotTypeOutput) -> Option<SlotType> {
    let name = output.name()?;
    Some(SlotType {
        name: name.to_string(),
        version: owned(output.version()),
        description: owned(output.description()),
        checksum: owned(output.checksum()),
        value_selection_strategy: output
            .value_selection_strategy()
            .map(|s| s.as_str().to_string()),
        parent_slot_type_signature: owned(output.parent_slot_type_signature()),
        enumeration_value_count: output.enumeration_values().len(),
        created_date: to_chrono(output.created_date()),
        last_updated_date: to_chrono(output.last_updated_date()),
    })
}

// ===== Version listings =====

fn summary(
    name: Option<&str>,
    version: Option<&str>,
    description: Option<&str>,
    created_date: Option<&SmithyDateTime>,
    last_updated_date: Option<&SmithyDateTime>,
) -> VersionSummary {
    VersionSummary {
        name: owned(name),
        version: owned(version),
        description: owned(description),
        created_date: to_chrono(created_date),
        last_updated_date: to_chrono(last_updated_date),
    }
}

fn next_token(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(str::to_string)
}

pub fn from_bot_versions_output(output: &GetBotVersionsOutput) -> VersionPage {
    VersionPage {
        versions: output
            .bots()
            .iter()
            .map(|b| {
                summary(
                    b.name(),
                    b.version(),
                    b.description(),
                    b.created_date(),
                    b.last_updated_date(),
                )
            })
            .collect(),
        next_token: next_token(output.next_token()),
    }
}

pub fn from_intent_versions_output(output: &GetIntentVersionsOutput) -> VersionPage {
    VersionPage {
        versions: output
            .intents()
            .iter()
            .map(|i| {
                summary(
                    i.name(),
                    i.version(),
                    i.description(),
                    i.created_date(),
                    i.last_updated_date(),
                )
            })
            .collect(),
        next_token: next_token(output.next_token()),
    }
}

pub fn from_slot_type_versions_output(output: &GetSlotTypeVersionsOutput) -> VersionPage {
    VersionPage {
        versions: output
            .slot_types()
            .iter()
            .map(|s| {
                summary(
                    s.name(),
                    s.version(),
                    s.description(),
                    s.created_date(),
                    s.last_updated_date(),
                )
            })
            .collect(),
        next_token: next_token(output.next_token()),
    }
}
