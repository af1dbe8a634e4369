//! Subcommands of the `lexfind` binary

use std::io::Write;

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use lexfind_core::{
    find_bot_version_by_name, find_intent_version_by_name, find_latest_version_by_name,
    find_slot_type_version_by_name, find_versions_by_name, LexModelsClient, ResourceKind,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Bot,
    Intent,
    SlotType,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Bot => ResourceKind::Bot,
            KindArg::Intent => ResourceKind::Intent,
            KindArg::SlotType => ResourceKind::SlotType,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the latest published version, or $LATEST if none was published
    Latest {
        #[arg(value_enum)]
        kind: KindArg,
        name: String,
    },
    /// Print one version of a resource as JSON
    Get {
        #[arg(value_enum)]
        kind: KindArg,
        name: String,
        /// Version number (or alias, for bots); defaults to $LATEST
        #[arg(long)]
        version: Option<String>,
    },
    /// Print every version of a resource as JSON
    Versions {
        #[arg(value_enum)]
        kind: KindArg,
        name: String,
    },
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub async fn run<C, W>(command: &Command, client: &C, out: &mut W) -> anyhow::Result<()>
where
    C: LexModelsClient + ?Sized,
    W: Write,
{
    match command {
        Command::Latest { kind, name } => {
            let kind = ResourceKind::from(*kind);
            let version = find_latest_version_by_name(client, kind, name)
                .await
                .with_context(|| {
                    format!("failed to resolve latest version of {} {}", kind, name)
                })?;
            writeln!(out, "{}", version)?;
        }
        Command::Get {
            kind,
            name,
            version,
        } => {
            let version = version
                .as_deref()
                .unwrap_or_else(|| ResourceKind::from(*kind).latest_label());
            let context = || {
                format!(
                    "failed to get {} {} version {}",
                    ResourceKind::from(*kind),
                    name,
                    version
                )
            };
            match kind {
                KindArg::Bot => {
                    let bot = find_bot_version_by_name(client, name, version)
                        .await
                        .with_context(context)?;
                    write_json(out, &bot)?;
                }
                KindArg::Intent => {
                    let intent = find_intent_version_by_name(client, name, version)
                        .await
                        .with_context(context)?;
                    write_json(out, &intent)?;
                }
                KindArg::SlotType => {
                    let slot_type = find_slot_type_version_by_name(client, name, version)
                        .await
                        .with_context(context)?;
                    write_json(out, &slot_type)?;
                }
            }
        }
        Command::Versions { kind, name } => {
            let kind = ResourceKind::from(*kind);
            let versions = find_versions_by_name(client, kind, name)
                .await
                .with_context(|| format!("failed to list versions of {} {}", kind, name))?;
            write_json(out, &versions)?;
        }
    }
    Ok(())
}
