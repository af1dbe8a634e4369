//! AWS SDK implementation of [`LexModelsClient`]
//!
//! Every Lex V1 model-building operation is deprecated upstream in favour of
//! Lex V2; V1 is what this client wraps.
#![allow(deprecated)]

mod conversion;

use super::LexModelsClient;
use crate::error::FindError;
use crate::types::{Bot, Intent, ResourceKind, SlotType, VersionPage};
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_lexmodelbuilding::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_lexmodelbuilding::Client;
use aws_types::region::Region;
use conversion::{
    from_bot_versions_output, from_get_bot_output, from_get_intent_output,
    from_get_slot_type_output, from_intent_versions_output, from_slot_type_versions_output,
};
use std::error::Error as StdError;
use std::time::Duration;
use tracing::debug;

/// Largest `maxResults` the version listing operations accept
pub const MAX_PAGE_SIZE: i32 = 50;

// ===== Error Handling Helpers =====

/// Classify an AWS SDK error into a [`FindError`]
///
/// Modeled and unmodeled service errors are classified by their error code.
/// Errors without a code (dispatch, timeout, construction failures) are
/// classified by walking the error chain.
fn classify_sdk_error<E, R>(err: SdkError<E, R>) -> FindError
where
    E: ProvideErrorMetadata + StdError + 'static,
    R: std::fmt::Debug + 'static,
{
    if let Some(service_err) = err.as_service_error() {
        if let Some(code) = service_err.code() {
            let message = service_err.message().unwrap_or(code).to_string();
            return classify_service_code(code, message);
        }
    }

    let messages = error_chain_messages(&err);

    let root_message = messages
        .last()
        .cloned()
        .unwrap_or_else(|| "Unknown error".to_string());
    let combined = messages.join(" ");

    classify_error_message(&combined, root_message)
}

/// Classify a service error by its code.
///
/// Lex model-building errors:
/// - BadRequestException (400): malformed request
/// - NotFoundException (404): resource missing, left for the finders to translate
/// - LimitExceededException (429): request limit exceeded
/// - InternalFailureException (500): internal service failure
///
/// Reference: https://docs.aws.amazon.com/lex/latest/dg/API_GetBot.html
fn classify_service_code(code: &str, message: String) -> FindError {
    match code {
        "AccessDeniedException"
        | "UnrecognizedClientException"
        | "InvalidSignatureException"
        | "ExpiredTokenException"
        | "IncompleteSignature"
        | "MissingAuthenticationToken" => FindError::Authentication(message),
        "LimitExceededException" | "ThrottlingException" | "TooManyRequestsException" => {
            FindError::RateLimited(message)
        }
        "InternalFailureException" | "ServiceUnavailable" | "ServiceUnavailableException" => {
            FindError::ServiceUnavailable(message)
        }
        "BadRequestException" | "ValidationException" => FindError::Configuration(message),
        _ => FindError::Service {
            code: code.to_string(),
            message,
        },
    }
}

/// Classify an error without a service code based on the error chain text
fn classify_error_message(combined: &str, root_message: String) -> FindError {
    let lower = combined.to_lowercase();

    if lower.contains("credentials")
        || lower.contains("security token")
        || lower.contains("expired token")
    {
        FindError::Authentication(root_message)
    } else if lower.contains("throttl") || lower.contains("too many requests") {
        FindError::RateLimited(root_message)
    } else if lower.contains("service unavailable") || lower.contains("internal server error") {
        FindError::ServiceUnavailable(root_message)
    } else if lower.contains("timeout")
        || lower.contains("timed out")
        || lower.contains("connection")
        || lower.contains("network")
        || lower.contains("dns")
        || lower.contains("io error")
    {
        FindError::Network(root_message)
    } else if lower.contains("failed to construct request") || lower.contains("invalid") {
        FindError::Configuration(root_message)
    } else {
        FindError::Other(root_message)
    }
}

/// Messages the SDK wraps around the actual cause
const WRAPPER_PREFIXES: &[&str] = &[
    "dispatch failure",
    "service error",
    "unhandled error",
    "response error",
];

/// Messages along an error's source chain, outermost first, minus wrappers
fn error_chain_messages(err: &(dyn StdError + 'static)) -> Vec<String> {
    std::iter::successors(Some(err), |&current| current.source())
        .map(ToString::to_string)
        .filter(|msg| {
            !msg.is_empty()
                && !WRAPPER_PREFIXES
                    .iter()
                    .any(|prefix| msg.starts_with(prefix))
        })
        .collect()
}

// ===== Client =====

/// Lex model-building client backed by the AWS SDK
#[derive(Clone, Debug)]
pub struct SdkLexModelsClient {
    client: Client,
    page_size: Option<i32>,
}

/// Builder for [`SdkLexModelsClient`]
///
/// # Example
///
/// ```no_run
/// use lexfind_core::SdkLexModelsClient;
/// use std::time::Duration;
///
/// # async fn example() -> lexfind_core::Result<()> {
/// let client = SdkLexModelsClient::builder()
///     .profile("lex-admin")
///     .region("us-east-1")
///     .operation_timeout(Duration::from_secs(30))
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SdkLexModelsClientBuilder {
    profile: Option<String>,
    region: Option<String>,
    endpoint_url: Option<String>,
    credentials_provider: Option<SharedCredentialsProvider>,
    max_attempts: Option<u32>,
    operation_timeout: Option<Duration>,
    page_size: Option<i32>,
}

impl SdkLexModelsClientBuilder {
    /// Named profile from the shared AWS config files
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// AWS region; defaults to the region resolved by the provider chain
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Override the service endpoint (local mocks, VPC endpoints)
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Inject a credentials provider, bypassing the default chain
    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.credentials_provider = Some(SharedCredentialsProvider::new(provider));
        self
    }

    /// Total attempts the SDK makes per request, including the first
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Upper bound for a whole operation, retries included
    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = Some(timeout);
        self
    }

    /// `maxResults` sent with each version listing request (1..=50)
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Load AWS configuration and build the client.
    ///
    /// # Errors
    ///
    /// Returns [`FindError::Configuration`] if the page size or attempt count
    /// is out of range.
    pub async fn build(self) -> Result<SdkLexModelsClient, FindError> {
        if let Some(page_size) = self.page_size {
            if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
                return Err(FindError::Configuration(format!(
                    "page size must be between 1 and {}, got {}",
                    MAX_PAGE_SIZE, page_size
                )));
            }
        }
        if self.max_attempts == Some(0) {
            return Err(FindError::Configuration(
                "max attempts must be at least 1".to_string(),
            ));
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = self.region {
            loader = loader.region(Region::new(region));
        }
        if let Some(url) = self.endpoint_url {
            loader = loader.endpoint_url(url);
        }
        if let Some(provider) = self.credentials_provider {
            loader = loader.credentials_provider(provider);
        }
        if let Some(attempts) = self.max_attempts {
            loader = loader.retry_config(RetryConfig::standard().with_max_attempts(attempts));
        }
        if let Some(timeout) = self.operation_timeout {
            loader =
                loader.timeout_config(TimeoutConfig::builder().operation_timeout(timeout).build());
        }

        let sdk_config = loader.load().await;
        debug!(
            region = ?sdk_config.region(),
            profile = ?self.profile,
            "loaded AWS configuration"
        );

        Ok(SdkLexModelsClient::from_conf(&sdk_config).with_page_size(self.page_size))
    }
}

impl SdkLexModelsClient {
    /// Create a client from the default AWS configuration chain
    pub async fn new() -> Result<Self, FindError> {
        Self::builder().build().await
    }

    /// Create a builder for custom configuration
    pub fn builder() -> SdkLexModelsClientBuilder {
        SdkLexModelsClientBuilder::default()
    }

    /// Create a client from already-loaded AWS configuration
    pub fn from_conf(sdk_config: &SdkConfig) -> Self {
        Self::from_client(Client::new(sdk_config))
    }

    /// Wrap an existing SDK client
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            page_size: None,
        }
    }

    fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// The underlying SDK client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait::async_trait]
impl LexModelsClient for SdkLexModelsClient {
    async fn get_bot(
        &self,
        name: &str,
        version_or_alias: &str,
    ) -> Result<Option<Bot>, FindError> {
        let output = self
            .client
            .get_bot()
            .name(name)
            .version_or_alias(version_or_alias)
            .send()
            .await
            .map_err(classify_sdk_error)?;

        Ok(from_get_bot_output(&output))
    }

    async fn get_intent(&self, name: &str, version: &str) -> Result<Option<Intent>, FindError> {
        let output = self
            .client
            .get_intent()
            .name(name)
            .version(version)
            .send()
            .await
            .map_err(classify_sdk_error)?;

        Ok(from_get_intent_output(&output))
    }

    async fn get_slot_type(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Option<SlotType>, FindError> {
        let output = self
            .client
            .get_slot_type()
            .name(name)
            .version(version)
            .send()
            .await
            .map_err(classify_sdk_error)?;

        Ok(from_get_slot_type_output(&output))
    }

    async fn list_versions(
        &self,
        kind: ResourceKind,
        name: &str,
        next_token: Option<String>,
    ) -> Result<VersionPage, FindError> {
        debug!(%kind, name, continuation = next_token.is_some(), "fetching version page");

        match kind {
            ResourceKind::Bot => self
                .client
                .get_bot_versions()
                .name(name)
                .set_next_token(next_token)
                .set_max_results(self.page_size)
                .send()
                .await
                .map(|output| from_bot_versions_output(&output))
                .map_err(classify_sdk_error),
            ResourceKind::Intent => self
                .client
                .get_intent_versions()
                .name(name)
                .set_next_token(next_token)
                .set_max_results(self.page_size)
                .send()
                .await
                .map(|output| from_intent_versions_output(&output))
                .map_err(classify_sdk_error),
            ResourceKind::SlotType => self
                .client
                .get_slot_type_versions()
                .name(name)
                .set_next_token(next_token)
                .set_max_results(self.page_size)
                .send()
                .await
                .map(|output| from_slot_type_versions_output(&output))
                .map_err(classify_sdk_error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_service_code_not_found_is_kept() {
        let err = classify_service_code("NotFoundException", "no such bot".into());
        assert!(err.has_code("NotFoundException"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_classify_service_code_categories() {
        assert!(matches!(
            classify_service_code("LimitExceededException", "x".into()),
            FindError::RateLimited(_)
        ));
        assert!(matches!(
            classify_service_code("InternalFailureException", "x".into()),
            FindError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            classify_service_code("BadRequestException", "x".into()),
            FindError::Configuration(_)
        ));
        assert!(matches!(
            classify_service_code("UnrecognizedClientException", "x".into()),
            FindError::Authentication(_)
        ));
        assert!(matches!(
            classify_service_code("ConflictException", "x".into()),
            FindError::Service { .. }
        ));
    }

    #[test]
    fn test_classify_error_message() {
        assert!(matches!(
            classify_error_message("no credentials in the property bag", "x".into()),
            FindError::Authentication(_)
        ));
        assert!(matches!(
            classify_error_message("io error: connection refused", "x".into()),
            FindError::Network(_)
        ));
        assert!(matches!(
            classify_error_message(
                "operation timeout (all attempts including retries) occurred",
                "x".into()
            ),
            FindError::Network(_)
        ));
        assert!(matches!(
            classify_error_message("something odd", "x".into()),
            FindError::Other(_)
        ));
    }

    #[test]
    fn test_error_chain_messages_skips_wrappers() {
        #[derive(Debug)]
        struct Inner;
        impl std::fmt::Display for Inner {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "connection refused")
            }
        }
        impl StdError for Inner {}

        #[derive(Debug)]
        struct Outer(Inner);
        impl std::fmt::Display for Outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "dispatch failure")
            }
        }
        impl StdError for Outer {
            fn source(&self) -> Option<&(dyn StdError + 'static)> {
                Some(&self.0)
            }
        }

        let messages = error_chain_messages(&Outer(Inner));
        assert_eq!(messages, vec!["connection refused".to_string()]);

        let messages = error_chain_messages(&Inner);
        assert_eq!(messages, vec!["connection refused".to_string()]);
    }

    #[tokio::test]
    async fn test_builder_rejects_page_size_out_of_range() {
        let err = SdkLexModelsClient::builder()
            .page_size(0)
            .build()
            .await
            .unwrap_err();
        assert!(matches!(err, FindError::Configuration(_)));

        let err = SdkLexModelsClient::builder()
            .page_size(MAX_PAGE_SIZE + 1)
            .build()
            .await
            .unwrap_err();
        assert!(matches!(err, FindError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_builder_rejects_zero_attempts() {
        let err = SdkLexModelsClient::builder()
            .max_attempts(0)
            .build()
            .await
            .unwrap_err();
        assert!(matches!(err, FindError::Configuration(_)));
    }
}
