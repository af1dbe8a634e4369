//! # lexfind-core
//!
//! Lookups for Amazon Lex (V1) model-building resources: bots, intents and
//! slot types.
//!
//! The finders wrap the Lex model-building API with two conveniences:
//!
//! - **Not-found translation**: single-item lookups report a missing resource
//!   as [`FindError::NotFound`] (or [`FindError::EmptyResult`]) instead of a
//!   raw service error.
//! - **Latest-version resolution**: every page of a version listing is
//!   scanned for the highest published version, falling back to `$LATEST`
//!   when nothing was ever published.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lexfind_core::{
//!     find_bot_version_by_name, find_latest_bot_version_by_name, SdkLexModelsClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> lexfind_core::Result<()> {
//!     let client = SdkLexModelsClient::builder()
//!         .region("us-east-1")
//!         .build()
//!         .await?;
//!
//!     let version = find_latest_bot_version_by_name(&client, "OrderFlowers").await?;
//!     let bot = find_bot_version_by_name(&client, "OrderFlowers", &version).await?;
//!     println!("{} {:?} {:?}", bot.name, bot.version, bot.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! Every finder takes any [`LexModelsClient`]. Enable the `test-utils`
//! feature for [`test_utils::MockLexModelsClient`].

pub mod client;
pub mod error;
pub mod find;
pub mod types;
pub mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::{LexModelsClient, SdkLexModelsClient, SdkLexModelsClientBuilder};
pub use error::{FindError, Result, NOT_FOUND_EXCEPTION};
pub use find::{
    find_bot_version_by_name, find_intent_version_by_name, find_latest_bot_version_by_name,
    find_latest_intent_version_by_name, find_latest_slot_type_version_by_name,
    find_latest_version_by_name, find_slot_type_version_by_name, find_versions_by_name,
    version_pages,
};
pub use types::{
    Bot, Intent, ResourceKind, SlotType, VersionPage, VersionSummary, BOT_VERSION_LATEST,
    INTENT_VERSION_LATEST, SLOT_TYPE_VERSION_LATEST,
};
pub use version::{parse_published_version, resolve_latest_version, ResolvedVersion};
