//! Finders for Lex bots, intents and slot types
//!
//! The single-item finders translate a `NotFoundException` into
//! [`FindError::NotFound`] and an empty response into
//! [`FindError::EmptyResult`]. The latest-version finders scan every page of
//! a version listing and leave listing errors untranslated.

use futures::{Stream, TryStreamExt};
use tracing::{debug, warn};

use crate::client::LexModelsClient;
use crate::error::{FindError, NOT_FOUND_EXCEPTION};
use crate::types::{Bot, Intent, ResourceKind, SlotType, VersionPage, VersionSummary};
use crate::version::resolve_latest_version;

/// Translate the outcome of a single-item lookup
fn translate_lookup<T>(
    result: Result<Option<T>, FindError>,
    kind: ResourceKind,
    name: &str,
    version: &str,
) -> Result<T, FindError> {
    match result {
        Ok(Some(output)) => Ok(output),
        Ok(None) => Err(FindError::EmptyResult {
            kind,
            name: name.to_string(),
            version: version.to_string(),
        }),
        Err(FindError::Service { code, message }) if code == NOT_FOUND_EXCEPTION => {
            Err(FindError::NotFound {
                kind,
                name: name.to_string(),
                version: version.to_string(),
                message,
            })
        }
        Err(err) => Err(err),
    }
}

/// Find a bot by name and version or alias
pub async fn find_bot_version_by_name<C>(
    client: &C,
    name: &str,
    version_or_alias: &str,
) -> Result<Bot, FindError>
where
    C: LexModelsClient + ?Sized,
{
    let result = client.get_bot(name, version_or_alias).await;
    translate_lookup(result, ResourceKind::Bot, name, version_or_alias)
}

/// Find an intent by name and version
pub async fn find_intent_version_by_name<C>(
    client: &C,
    name: &str,
    version: &str,
) -> Result<Intent, FindError>
where
    C: LexModelsClient + ?Sized,
{
    let result = client.get_intent(name, version).await;
    translate_lookup(result, ResourceKind::Intent, name, version)
}

/// Find a slot type by name and version
pub async fn find_slot_type_version_by_name<C>(
    client: &C,
    name: &str,
    version: &str,
) -> Result<SlotType, FindError>
where
    C: LexModelsClient + ?Sized,
{
    let result = client.get_slot_type(name, version).await;
    translate_lookup(result, ResourceKind::SlotType, name, version)
}

/// Lazily page through a resource's version listing
///
/// Pages are requested one at a time, in order, while the service keeps
/// returning a new continuation token. A page that hands back the token it
/// was requested with is the last one. The stream ends after the first error.
pub fn version_pages<'a, C>(
    client: &'a C,
    kind: ResourceKind,
    name: &'a str,
) -> impl Stream<Item = Result<VersionPage, FindError>> + 'a
where
    C: LexModelsClient + ?Sized,
{
    // `None` once the last page has been seen
    let start: Option<Option<String>> = Some(None);

    futures::stream::try_unfold(start, move |state| async move {
        let Some(token) = state else {
            return Ok(None);
        };
        let page = client.list_versions(kind, name, token.clone()).await?;
        let next = match &page.next_token {
            Some(next) if token.as_deref() == Some(next.as_str()) => {
                warn!(%kind, name, token = %next, "continuation token repeated, stopping");
                None
            }
            Some(next) => Some(Some(next.clone())),
            None => None,
        };
        Ok::<_, FindError>(Some((page, next)))
    })
}

/// Collect every version summary of a resource across all pages
pub async fn find_versions_by_name<C>(
    client: &C,
    kind: ResourceKind,
    name: &str,
) -> Result<Vec<VersionSummary>, FindError>
where
    C: LexModelsClient + ?Sized,
{
    version_pages(client, kind, name)
        .try_fold(Vec::new(), |mut all, page| async move {
            all.extend(page.versions);
            Ok(all)
        })
        .await
}

/// Resolve the latest published version of any resource kind
///
/// Returns the kind's `$LATEST` label if nothing was ever published.
pub async fn find_latest_version_by_name<C>(
    client: &C,
    kind: ResourceKind,
    name: &str,
) -> Result<String, FindError>
where
    C: LexModelsClient + ?Sized,
{
    let resolved = resolve_latest_version(kind, version_pages(client, kind, name)).await?;
    let label = resolved.label(kind);
    debug!(%kind, name, version = %label, "resolved latest version");
    Ok(label)
}

/// Latest published version of a bot, or `$LATEST` if never published
pub async fn find_latest_bot_version_by_name<C>(client: &C, name: &str) -> Result<String, FindError>
where
    C: LexModelsClient + ?Sized,
{
    find_latest_version_by_name(client, ResourceKind::Bot, name).await
}

/// Latest published version of an intent, or `$LATEST` if never published
pub async fn find_latest_intent_version_by_name<C>(
    client: &C,
    name: &str,
) -> Result<String, FindError>
where
    C: LexModelsClient + ?Sized,
{
    find_latest_version_by_name(client, ResourceKind::Intent, name).await
}

/// Latest published version of a slot type, or `$LATEST` if never published
pub async fn find_latest_slot_type_version_by_name<C>(
    client: &C,
    name: &str,
) -> Result<String, FindError>
where
    C: LexModelsClient + ?Sized,
{
    find_latest_version_by_name(client, ResourceKind::SlotType, name).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockLexModelsClient;

    fn not_found() -> FindError {
        FindError::Service {
            code: NOT_FOUND_EXCEPTION.to_string(),
            message: "The resource does not exist".to_string(),
        }
    }

    // ===== Single-item finders =====

    #[tokio::test]
    async fn test_find_bot_returns_bot() {
        let client = MockLexModelsClient::new().with_bot(Ok(Some(Bot {
            name: "OrderFlowers".into(),
            version: Some("2".into()),
            ..Default::default()
        })));

        let bot = find_bot_version_by_name(&client, "OrderFlowers", "2")
            .await
            .unwrap();
        assert_eq!(bot.name, "OrderFlowers");
        assert_eq!(bot.version.as_deref(), Some("2"));
        assert_eq!(
            client.get_calls(),
            vec![(ResourceKind::Bot, "OrderFlowers".to_string(), "2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_find_bot_translates_not_found() {
        let client = MockLexModelsClient::new().with_bot(Err(not_found()));

        let err = find_bot_version_by_name(&client, "OrderFlowers", "$LATEST")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        match err {
            FindError::NotFound {
                kind,
                name,
                version,
                message,
            } => {
                assert_eq!(kind, ResourceKind::Bot);
                assert_eq!(name, "OrderFlowers");
                assert_eq!(version, "$LATEST");
                assert_eq!(message, "The resource does not exist");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_find_bot_empty_result() {
        let client = MockLexModelsClient::new().with_bot(Ok(None));

        let err = find_bot_version_by_name(&client, "OrderFlowers", "1")
            .await
            .unwrap_err();
        assert!(matches!(err, FindError::EmptyResult { kind: ResourceKind::Bot, .. }));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_bot_other_errors_pass_through() {
        let client =
            MockLexModelsClient::new().with_bot(Err(FindError::RateLimited("slow down".into())));

        let err = find_bot_version_by_name(&client, "OrderFlowers", "1")
            .await
            .unwrap_err();
        assert!(matches!(err, FindError::RateLimited(_)));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_slot_type_translates_not_found() {
        let client = MockLexModelsClient::new().with_slot_type(Err(not_found()));

        let err = find_slot_type_version_by_name(&client, "FlowerTypes", "3")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FindError::NotFound {
                kind: ResourceKind::SlotType,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_find_slot_type_returns_slot_type() {
        let client = MockLexModelsClient::new().with_slot_type(Ok(Some(SlotType {
            name: "FlowerTypes".into(),
            version: Some("3".into()),
            enumeration_value_count: 3,
            ..Default::default()
        })));

        let slot_type = find_slot_type_version_by_name(&client, "FlowerTypes", "3")
            .await
            .unwrap();
        assert_eq!(slot_type.enumeration_value_count, 3);
    }

    #[tokio::test]
    async fn test_find_intent_empty_and_not_found() {
        let client = MockLexModelsClient::new()
            .with_intent(Ok(None))
            .with_intent(Err(not_found()));

        let err = find_intent_version_by_name(&client, "OrderFlowers", "1")
            .await
            .unwrap_err();
        assert!(matches!(err, FindError::EmptyResult { .. }));

        let err = find_intent_version_by_name(&client, "OrderFlowers", "1")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FindError::NotFound {
                kind: ResourceKind::Intent,
                ..
            }
        ));
    }

    // ===== Version listings =====

    #[tokio::test]
    async fn test_version_pages_follow_tokens() {
        let client = MockLexModelsClient::new()
            .with_page(
                ResourceKind::Bot,
                Ok(VersionPage::from_labels(["1"]).with_next_token("t1")),
            )
            .with_page(
                ResourceKind::Bot,
                Ok(VersionPage::from_labels(["2"]).with_next_token("t2")),
            )
            .with_page(ResourceKind::Bot, Ok(VersionPage::from_labels(["3"])));

        let versions = find_versions_by_name(&client, ResourceKind::Bot, "OrderFlowers")
            .await
            .unwrap();
        let labels: Vec<_> = versions
            .iter()
            .map(|v| v.version.clone().unwrap())
            .collect();
        assert_eq!(labels, vec!["1", "2", "3"]);

        let tokens: Vec<_> = client
            .list_calls()
            .into_iter()
            .map(|(_, _, token)| token)
            .collect();
        assert_eq!(
            tokens,
            vec![None, Some("t1".to_string()), Some("t2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_version_pages_stop_on_repeated_token() {
        let client = MockLexModelsClient::new()
            .with_page(
                ResourceKind::Bot,
                Ok(VersionPage::from_labels(["1"]).with_next_token("t1")),
            )
            .with_page(
                ResourceKind::Bot,
                Ok(VersionPage::from_labels(["2"]).with_next_token("t1")),
            )
            .with_page(ResourceKind::Bot, Ok(VersionPage::from_labels(["9"])));

        let version = find_latest_bot_version_by_name(&client, "OrderFlowers")
            .await
            .unwrap();
        assert_eq!(version, "2");

        let tokens: Vec<_> = client
            .list_calls()
            .into_iter()
            .map(|(_, _, token)| token)
            .collect();
        assert_eq!(tokens, vec![None, Some("t1".to_string())]);
    }

    #[tokio::test]
    async fn test_version_pages_stop_after_error() {
        let client = MockLexModelsClient::new()
            .with_page(
                ResourceKind::Intent,
                Err(FindError::Network("connection reset".into())),
            )
            .with_page(ResourceKind::Intent, Ok(VersionPage::from_labels(["1"])));

        let err = find_versions_by_name(&client, ResourceKind::Intent, "OrderFlowers")
            .await
            .unwrap_err();
        assert!(matches!(err, FindError::Network(_)));
        assert_eq!(client.list_calls().len(), 1);
    }

    // ===== Latest version =====

    #[tokio::test]
    async fn test_latest_bot_version_never_published() {
        let client = MockLexModelsClient::new()
            .with_page(ResourceKind::Bot, Ok(VersionPage::from_labels(["$LATEST"])));

        let version = find_latest_bot_version_by_name(&client, "OrderFlowers")
            .await
            .unwrap();
        assert_eq!(version, "$LATEST");
    }

    #[tokio::test]
    async fn test_latest_bot_version_with_no_pages_configured() {
        // An unconfigured mock answers with a single empty page
        let client = MockLexModelsClient::new();

        let version = find_latest_bot_version_by_name(&client, "OrderFlowers")
            .await
            .unwrap();
        assert_eq!(version, "$LATEST");
        assert_eq!(client.list_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_latest_intent_version_across_pages() {
        let client = MockLexModelsClient::new()
            .with_page(
                ResourceKind::Intent,
                Ok(VersionPage::from_labels(["$LATEST", "11"]).with_next_token("t1")),
            )
            .with_page(
                ResourceKind::Intent,
                Ok(VersionPage::from_labels(["4", "not-a-version"])),
            );

        let version = find_latest_intent_version_by_name(&client, "OrderFlowers")
            .await
            .unwrap();
        assert_eq!(version, "11");
        assert_eq!(client.list_calls().len(), 2);
    }

    #[tokio::test]
    async fn test_latest_slot_type_version_keeps_listing_not_found() {
        let client = MockLexModelsClient::new().with_page(ResourceKind::SlotType, Err(not_found()));

        let err = find_latest_slot_type_version_by_name(&client, "FlowerTypes")
            .await
            .unwrap_err();
        assert!(err.has_code(NOT_FOUND_EXCEPTION));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_latest_version_error_on_later_page() {
        let client = MockLexModelsClient::new()
            .with_page(
                ResourceKind::SlotType,
                Ok(VersionPage::from_labels(["8"]).with_next_token("t1")),
            )
            .with_page(
                ResourceKind::SlotType,
                Err(FindError::ServiceUnavailable("internal failure".into())),
            );

        let err = find_latest_slot_type_version_by_name(&client, "FlowerTypes")
            .await
            .unwrap_err();
        assert!(matches!(err, FindError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_kinds_use_their_own_listing() {
        let client = MockLexModelsClient::new()
            .with_page(ResourceKind::Bot, Ok(VersionPage::from_labels(["5"])))
            .with_page(ResourceKind::Intent, Ok(VersionPage::from_labels(["2"])));

        assert_eq!(
            find_latest_intent_version_by_name(&client, "Greeting")
                .await
                .unwrap(),
            "2"
        );
        assert_eq!(
            find_latest_bot_version_by_name(&client, "Greeter")
                .await
                .unwrap(),
            "5"
        );

        let calls = client.list_calls();
        assert_eq!(calls[0].0, ResourceKind::Intent);
        assert_eq!(calls[0].1, "Greeting");
        assert_eq!(calls[1].0, ResourceKind::Bot);
    }
}
