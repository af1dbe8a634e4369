//! Test utilities for lexfind-core.
//!
//! This module provides a mock [`LexModelsClient`] for testing finders
//! without AWS credentials.
//!
//! Enable with the `test-utils` feature:
//!
//! ```toml
//! [dev-dependencies]
//! lexfind-core = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use lexfind_core::test_utils::MockLexModelsClient;
//! use lexfind_core::{find_latest_bot_version_by_name, ResourceKind, VersionPage};
//!
//! # async fn example() -> lexfind_core::Result<()> {
//! let client = MockLexModelsClient::new()
//!     .with_page(ResourceKind::Bot, Ok(VersionPage::from_labels(["$LATEST", "1", "2"])));
//!
//! let version = find_latest_bot_version_by_name(&client, "OrderFlowers").await?;
//! assert_eq!(version, "2");
//! # Ok(())
//! # }
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::client::LexModelsClient;
use crate::error::FindError;
use crate::types::{Bot, Intent, ResourceKind, SlotType, VersionPage};

type Queue<T> = Arc<Mutex<VecDeque<Result<Option<T>, FindError>>>>;

/// A mock Lex client serving queued responses in order.
///
/// Single-item lookups pop from a per-kind queue and fail with
/// [`FindError::Other`] once it is empty. Version listings pop from a
/// per-kind page queue; an empty queue answers with a single empty page.
#[derive(Clone, Default)]
pub struct MockLexModelsClient {
    bots: Queue<Bot>,
    intents: Queue<Intent>,
    slot_types: Queue<SlotType>,
    pages: Arc<Mutex<HashMap<ResourceKind, VecDeque<Result<VersionPage, FindError>>>>>,
    get_calls: Arc<Mutex<Vec<(ResourceKind, String, String)>>>,
    list_calls: Arc<Mutex<Vec<(ResourceKind, String, Option<String>)>>>,
}

impl MockLexModelsClient {
    /// Create a mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a `get_bot` response.
    pub fn with_bot(self, response: Result<Option<Bot>, FindError>) -> Self {
        self.bots.lock().unwrap().push_back(response);
        self
    }

    /// Queue a `get_intent` response.
    pub fn with_intent(self, response: Result<Option<Intent>, FindError>) -> Self {
        self.intents.lock().unwrap().push_back(response);
        self
    }

    /// Queue a `get_slot_type` response.
    pub fn with_slot_type(self, response: Result<Option<SlotType>, FindError>) -> Self {
        self.slot_types.lock().unwrap().push_back(response);
        self
    }

    /// Queue a version listing page for a resource kind.
    pub fn with_page(self, kind: ResourceKind, page: Result<VersionPage, FindError>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(page);
        self
    }

    /// Single-item lookups made so far as `(kind, name, version)`.
    pub fn get_calls(&self) -> Vec<(ResourceKind, String, String)> {
        self.get_calls.lock().unwrap().clone()
    }

    /// Listing requests made so far as `(kind, name, next_token)`.
    pub fn list_calls(&self) -> Vec<(ResourceKind, String, Option<String>)> {
        self.list_calls.lock().unwrap().clone()
    }

    fn pop<T>(
        &self,
        queue: &Queue<T>,
        kind: ResourceKind,
        name: &str,
        version: &str,
    ) -> Result<Option<T>, FindError> {
        self.get_calls
            .lock()
            .unwrap()
            .push((kind, name.to_string(), version.to_string()));
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FindError::Other("No mock response configured".to_string())))
    }
}

#[async_trait::async_trait]
impl LexModelsClient for MockLexModelsClient {
    async fn get_bot(
        &self,
        name: &str,
        version_or_alias: &str,
    ) -> Result<Option<Bot>, FindError> {
        self.pop(&self.bots, ResourceKind::Bot, name, version_or_alias)
    }

    async fn get_intent(&self, name: &str, version: &str) -> Result<Option<Intent>, FindError> {
        self.pop(&self.intents, ResourceKind::Intent, name, version)
    }

    async fn get_slot_type(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Option<SlotType>, FindError> {
        self.pop(&self.slot_types, ResourceKind::SlotType, name, version)
    }

    async fn list_versions(
        &self,
        kind: ResourceKind,
        name: &str,
        next_token: Option<String>,
    ) -> Result<VersionPage, FindError> {
        self.list_calls
            .lock()
            .unwrap()
            .push((kind, name.to_string(), next_token));
        self.pages
            .lock()
            .unwrap()
            .get_mut(&kind)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(VersionPage::default()))
    }
}
