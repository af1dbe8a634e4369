//! Client seam for the Lex model-building service
//!
//! [`LexModelsClient`] abstracts the handful of read-only operations the
//! finders need, so they can be tested without AWS credentials. The
//! production implementation is [`SdkLexModelsClient`].

pub mod sdk;

pub use sdk::{SdkLexModelsClient, SdkLexModelsClientBuilder};

use crate::error::FindError;
use crate::types::{Bot, Intent, ResourceKind, SlotType, VersionPage};

/// Read-only access to Lex model-building resources
///
/// Errors are returned classified but untranslated: a missing resource shows
/// up as [`FindError::Service`] with the `NotFoundException` code and is left
/// to the finders to interpret. `Ok(None)` means the service answered
/// without a payload.
#[async_trait::async_trait]
pub trait LexModelsClient: Send + Sync {
    /// Fetch a bot by name and version or alias
    async fn get_bot(&self, name: &str, version_or_alias: &str)
        -> Result<Option<Bot>, FindError>;

    /// Fetch an intent by name and version
    async fn get_intent(&self, name: &str, version: &str) -> Result<Option<Intent>, FindError>;

    /// Fetch a slot type by name and version
    async fn get_slot_type(&self, name: &str, version: &str)
        -> Result<Option<SlotType>, FindError>;

    /// Fetch one page of a resource's version listing
    ///
    /// `next_token` is `None` for the first page and the previous page's
    /// continuation token afterwards.
    async fn list_versions(
        &self,
        kind: ResourceKind,
        name: &str,
        next_token: Option<String>,
    ) -> Result<VersionPage, FindError>;
}

#[async_trait::async_trait]
impl<C: LexModelsClient + ?Sized> LexModelsClient for std::sync::Arc<C> {
    async fn get_bot(
        &self,
        name: &str,
        version_or_alias: &str,
    ) -> Result<Option<Bot>, FindError> {
        (**self).get_bot(name, version_or_alias).await
    }

    async fn get_intent(&self, name: &str, version: &str) -> Result<Option<Intent>, FindError> {
        (**self).get_intent(name, version).await
    }

    async fn get_slot_type(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Option<SlotType>, FindError> {
        (**self).get_slot_type(name, version).await
    }

    async fn list_versions(
        &self,
        kind: ResourceKind,
        name: &str,
        next_token: Option<String>,
    ) -> Result<VersionPage, FindError> {
        (**self).list_versions(kind, name, next_token).await
    }
}
