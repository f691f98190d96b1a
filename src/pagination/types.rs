//! Pagination types
//!
//! Request/response envelopes shared by every paged operation, plus the
//! options and summary of a fetch session.

use crate::error::{Error, Result};
use serde::Serialize;

/// Request envelope for a single page call
///
/// `params` is fixed for the life of a session. The continuation token and
/// page-size hint are rewritten by the fetcher before each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<P> {
    /// Operation-specific filter/selection parameters
    pub params: P,
    /// Token returned by the previous page
    pub continuation_token: Option<String>,
    /// Requested page size (maps to `MaxResults`)
    pub page_size_hint: Option<i32>,
}

impl<P> PageRequest<P> {
    /// Create a request with no token and no page-size hint
    pub fn new(params: P) -> Self {
        Self {
            params,
            continuation_token: None,
            page_size_hint: None,
        }
    }

    /// Set the continuation token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.continuation_token = Some(token.into());
        self
    }

    /// Set the page-size hint
    #[must_use]
    pub fn with_page_size_hint(mut self, hint: i32) -> Self {
        self.page_size_hint = Some(hint);
        self
    }

    /// Continuation token as a borrowed str
    pub fn token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }
}

/// One page of results returned by an operation call
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Token for the next page; `None` or empty means no more pages
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page followed by more pages
    pub fn new(items: Vec<T>, next_token: impl Into<String>) -> Self {
        Self {
            items,
            next_token: Some(next_token.into()),
        }
    }

    /// Create the final page
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }

    /// Build a page from an SDK-style optional token
    pub fn from_parts(items: Vec<T>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }

    /// Whether the server signalled another page
    pub fn has_more(&self) -> bool {
        self.next_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Number of items on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Bounds the server accepts for the page-size hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLimits {
    /// Smallest accepted `MaxResults`
    pub min_page_size: i32,
    /// Largest accepted `MaxResults`
    pub max_page_size: i32,
}

impl PageLimits {
    /// Create page limits
    pub const fn new(min_page_size: i32, max_page_size: i32) -> Self {
        Self {
            min_page_size,
            max_page_size,
        }
    }

    /// Clamp a requested size into the accepted range
    pub fn clamp(&self, requested: i64) -> i32 {
        requested.clamp(i64::from(self.min_page_size), i64::from(self.max_page_size)) as i32
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self::new(1, 1000)
    }
}

/// Caller-supplied paging controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingOptions {
    /// Upper bound on items emitted across all pages
    pub max_items: Option<i64>,
    /// Explicit page size, used instead of the server maximum
    pub page_size: Option<i32>,
    /// Token to resume from
    pub starting_token: Option<String>,
    /// Fetch exactly one page and hand the next token back to the caller
    pub caller_controls_paging: bool,
}

impl PagingOptions {
    /// Create default options (auto-paging, no cap)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item cap
    #[must_use]
    pub fn max_items(mut self, max_items: i64) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Set the explicit page size
    #[must_use]
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Resume from a token
    #[must_use]
    pub fn starting_token(mut self, token: impl Into<String>) -> Self {
        self.starting_token = Some(token.into());
        self
    }

    /// Switch to single-page mode
    #[must_use]
    pub fn caller_controls_paging(mut self, enabled: bool) -> Self {
        self.caller_controls_paging = enabled;
        self
    }

    /// Reject caps and page sizes that cannot produce a page
    pub fn validate(&self) -> Result<()> {
        if let Some(max_items) = self.max_items {
            if max_items < 1 {
                return Err(Error::invalid_argument(
                    "max_items",
                    format!("must be at least 1, got {max_items}"),
                ));
            }
        }
        if let Some(page_size) = self.page_size {
            if page_size < 1 {
                return Err(Error::invalid_argument(
                    "page_size",
                    format!("must be at least 1, got {page_size}"),
                ));
            }
        }
        Ok(())
    }
}

/// Lifecycle of a fetch session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// More calls may be made
    Fetching,
    /// Terminal; no further calls
    Done,
}

/// Why a session reached `Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StopReason {
    /// The server returned no continuation token
    Exhausted,
    /// The item cap was satisfied
    CapReached,
    /// A later page failed after items were emitted under a cap
    PartialFailure,
    /// The caller controls paging; one page was fetched
    SinglePage,
    /// The call failed and the error was propagated
    Failed,
}

/// Outcome of a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchSummary {
    /// Items handed downstream
    pub items_emitted: usize,
    /// Successful operation calls
    pub pages_fetched: usize,
    /// Why the session stopped
    pub stop_reason: StopReason,
    /// Next token, only when the caller controls paging
    pub next_token: Option<String>,
}

impl FetchSummary {
    /// Whether a later-page failure was suppressed
    pub fn is_partial(&self) -> bool {
        self.stop_reason == StopReason::PartialFailure
    }
}
