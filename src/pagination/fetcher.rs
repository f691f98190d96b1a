//! Auto-pagination driver
//!
//! [`PaginatedFetcher`] calls a [`PagedOperation`] repeatedly, forwarding the
//! continuation token, until the server stops returning one or the item cap
//! is satisfied. Calls are strictly sequential: page N+1 is requested only
//! after page N has been handed downstream.
//!
//! Failure policy: an error is propagated unless at least one item has
//! already been emitted *and* a cap is set, in which case the session stops
//! and keeps what it has.

use super::operation::PagedOperation;
use super::types::{FetchState, FetchSummary, PageRequest, PagingOptions, StopReason};
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, info, warn};

/// Drives a paged operation to completion
pub struct PaginatedFetcher<'a, O: PagedOperation> {
    operation: &'a O,
    options: PagingOptions,
}

impl<'a, O: PagedOperation> PaginatedFetcher<'a, O> {
    /// Create a fetcher with default options (auto-paging, no cap)
    pub fn new(operation: &'a O) -> Self {
        Self {
            operation,
            options: PagingOptions::default(),
        }
    }

    /// Set paging options
    #[must_use]
    pub fn with_options(mut self, options: PagingOptions) -> Self {
        self.options = options;
        self
    }

    /// Paging options in effect
    pub fn options(&self) -> &PagingOptions {
        &self.options
    }

    /// Open a session for one invocation
    pub fn session(&self, params: O::Params) -> Result<FetchSession<'a, O>> {
        self.options.validate()?;
        Ok(FetchSession::new(self.operation, params, &self.options))
    }

    /// Fetch every page, pushing each item into `sink` as it arrives
    ///
    /// Sink errors are always terminal.
    pub async fn run<F>(&self, params: O::Params, mut sink: F) -> Result<FetchSummary>
    where
        F: FnMut(O::Item) -> Result<()>,
    {
        let mut session = self.session(params)?;
        while let Some(items) = session.next_page().await? {
            for item in items {
                sink(item)?;
            }
        }

        let summary = session.summary();
        info!(
            operation = self.operation.name(),
            items = summary.items_emitted,
            pages = summary.pages_fetched,
            stop_reason = ?summary.stop_reason,
            "Fetch complete"
        );
        Ok(summary)
    }

    /// Fetch every page into a vector
    pub async fn collect(&self, params: O::Params) -> Result<(Vec<O::Item>, FetchSummary)> {
        let mut items = Vec::new();
        let summary = self
            .run(params, |item| {
                items.push(item);
                Ok(())
            })
            .await?;
        Ok((items, summary))
    }
}

/// Per-invocation paging state
///
/// Created by [`PaginatedFetcher::session`] and dropped when the call
/// returns. Not restartable: resume with a fresh session and a token.
pub struct FetchSession<'a, O: PagedOperation> {
    operation: &'a O,
    request: PageRequest<O::Params>,
    remaining_cap: Option<i64>,
    page_size: Option<i32>,
    caller_controls_paging: bool,
    items_emitted: usize,
    pages_fetched: usize,
    state: FetchState,
    stop_reason: Option<StopReason>,
}

impl<'a, O: PagedOperation> FetchSession<'a, O> {
    fn new(operation: &'a O, params: O::Params, options: &PagingOptions) -> Self {
        let mut request = PageRequest::new(params);
        request.continuation_token = options
            .starting_token
            .clone()
            .filter(|token| !token.is_empty());

        Self {
            operation,
            request,
            remaining_cap: options.max_items,
            page_size: options.page_size,
            caller_controls_paging: options.caller_controls_paging,
            items_emitted: 0,
            pages_fetched: 0,
            state: FetchState::Fetching,
            stop_reason: None,
        }
    }

    /// Current state
    pub fn state(&self) -> FetchState {
        self.state
    }

    /// Items emitted so far
    pub fn items_emitted(&self) -> usize {
        self.items_emitted
    }

    /// Items still allowed under the cap, if one is set
    pub fn remaining_cap(&self) -> Option<i64> {
        self.remaining_cap
    }

    /// Token the next call would send
    pub fn continuation_token(&self) -> Option<&str> {
        self.request.token()
    }

    /// Page-size hint for the next call
    ///
    /// With a cap: `min(max page size, remaining)`, where an explicit page
    /// size replaces the maximum. Without a cap: the explicit page size, or
    /// none so the server picks its default. Always clamped to the
    /// operation's limits.
    pub fn page_size_hint(&self) -> Option<i32> {
        let limits = self.operation.limits();
        let preferred = self.page_size.map(|size| limits.clamp(i64::from(size)));

        match self.remaining_cap {
            Some(remaining) => {
                let ceiling = i64::from(preferred.unwrap_or(limits.max_page_size));
                Some(limits.clamp(remaining.min(ceiling)))
            }
            None => preferred,
        }
    }

    /// Fetch the next page
    ///
    /// Returns `Ok(None)` once the session is `Done`.
    pub async fn next_page(&mut self) -> Result<Option<Vec<O::Item>>> {
        if self.state == FetchState::Done {
            return Ok(None);
        }

        self.request.page_size_hint = self.page_size_hint();
        let page_number = self.pages_fetched + 1;
        debug!(
            operation = self.operation.name(),
            page = page_number,
            token = self.request.token().is_some(),
            page_size_hint = ?self.request.page_size_hint,
            "Fetching page"
        );

        let page = match self.operation.fetch_page(&self.request).await {
            Ok(page) => page,
            Err(err) => return self.handle_failure(err),
        };

        let count = page.items.len();
        self.pages_fetched += 1;
        self.items_emitted += count;
        self.request.continuation_token = page.next_token.filter(|token| !token.is_empty());

        debug!(
            operation = self.operation.name(),
            page = page_number,
            count,
            has_more = self.request.continuation_token.is_some(),
            "Page received"
        );

        if self.caller_controls_paging {
            self.finish(StopReason::SinglePage);
            return Ok(Some(page.items));
        }

        if let Some(remaining) = self.remaining_cap.as_mut() {
            *remaining -= count as i64;
        }

        if self.request.continuation_token.is_none() {
            self.finish(StopReason::Exhausted);
        } else if self.remaining_cap.is_some_and(|remaining| remaining <= 0) {
            self.finish(StopReason::CapReached);
        }

        Ok(Some(page.items))
    }

    fn handle_failure(&mut self, err: Error) -> Result<Option<Vec<O::Item>>> {
        if self.items_emitted > 0 && self.remaining_cap.is_some() {
            warn!(
                operation = self.operation.name(),
                items = self.items_emitted,
                error = %err,
                "Page failed after partial results; stopping with what was fetched"
            );
            self.finish(StopReason::PartialFailure);
            return Ok(None);
        }

        self.finish(StopReason::Failed);
        Err(err)
    }

    fn finish(&mut self, reason: StopReason) {
        self.state = FetchState::Done;
        self.stop_reason = Some(reason);
    }

    /// Summarize the session
    pub fn summary(&self) -> FetchSummary {
        FetchSummary {
            items_emitted: self.items_emitted,
            pages_fetched: self.pages_fetched,
            stop_reason: self.stop_reason.unwrap_or(StopReason::Exhausted),
            next_token: if self.caller_controls_paging {
                self.request.continuation_token.clone()
            } else {
                None
            },
        }
    }

    /// Turn the session into a lazy item stream
    ///
    /// Pages are requested only as the stream is polled.
    pub fn into_stream(self) -> impl Stream<Item = Result<O::Item>> + 'a
    where
        O::Params: 'a,
        O::Item: 'a,
    {
        stream::try_unfold(self, |mut session| async move {
            let page = session.next_page().await?;
            Ok::<_, Error>(
                page.map(|items| (stream::iter(items.into_iter().map(Ok::<_, Error>)), session)),
            )
        })
        .try_flatten()
    }
}
