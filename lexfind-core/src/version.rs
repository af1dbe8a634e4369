//! Latest-version resolution over paginated version listings
//!
//! Lex publishes numbered versions ("1", "2", ...) next to the mutable
//! `$LATEST` working copy. The latest published version is the highest
//! number across every page of a listing; if nothing was ever published the
//! result is the kind's `$LATEST` label.
//! See <https://docs.aws.amazon.com/lex/latest/dg/versioning-aliases.html>.

use std::num::NonZeroU64;

use futures::{Stream, TryStreamExt};

use crate::types::{ResourceKind, VersionPage};

/// Outcome of scanning a version listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedVersion {
    /// No numeric version was found
    Unpublished,
    /// Highest numeric version found
    Published(NonZeroU64),
}

impl ResolvedVersion {
    fn from_max(max: u64) -> Self {
        match NonZeroU64::new(max) {
            Some(version) => Self::Published(version),
            None => Self::Unpublished,
        }
    }

    /// Render as a version label: the kind's sentinel or a canonical decimal
    pub fn label(&self, kind: ResourceKind) -> String {
        match self {
            Self::Unpublished => kind.latest_label().to_string(),
            Self::Published(version) => version.to_string(),
        }
    }

    pub fn number(&self) -> Option<u64> {
        match self {
            Self::Unpublished => None,
            Self::Published(version) => Some(version.get()),
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published(_))
    }
}

/// Parse a version label as a published version number
///
/// Returns `None` for the sentinel, for anything that is not a signed 64-bit
/// base-10 integer, and for numbers below 1.
pub fn parse_published_version(label: &str, sentinel: &str) -> Option<u64> {
    if label == sentinel {
        return None;
    }
    let number = label.parse::<i64>().ok().filter(|n| *n > 0)?;
    u64::try_from(number).ok()
}

/// Fold one page into the running maximum
fn max_in_page(page: &VersionPage, sentinel: &str, current: u64) -> u64 {
    page.versions
        .iter()
        .filter_map(|summary| summary.version.as_deref())
        .filter_map(|label| parse_published_version(label, sentinel))
        .fold(current, u64::max)
}

/// Scan every page of a version listing and resolve the latest version
///
/// Pages are consumed in order until the stream ends. The first page error
/// aborts the scan and is returned unchanged. Labels that fail to parse are
/// skipped without a diagnostic.
pub async fn resolve_latest_version<S, E>(
    kind: ResourceKind,
    pages: S,
) -> Result<ResolvedVersion, E>
where
    S: Stream<Item = Result<VersionPage, E>>,
{
    let sentinel = kind.latest_label();

    let max = pages
        .try_fold(0u64, |current, page| async move {
            Ok(max_in_page(&page, sentinel, current))
        })
        .await?;

    Ok(ResolvedVersion::from_max(max))
}
