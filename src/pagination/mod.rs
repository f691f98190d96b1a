//! Pagination module
//!
//! # Overview
//!
//! Every list/describe command goes through the same driver:
//! - `PagedOperation` - one remote call per page (service adapters, or any
//!   closure via `FnOperation`)
//! - `PaginatedFetcher` - loops over pages, forwarding continuation tokens,
//!   honouring the item cap and the single-page mode
//! - `FetchSession` - the per-invocation state, usable directly or as a
//!   lazy `Stream` of items

mod fetcher;
mod operation;
mod types;

pub use fetcher::{FetchSession, PaginatedFetcher};
pub use operation::{FnOperation, PagedOperation};
pub use types::{
    FetchState, FetchSummary, Page, PageLimits, PageRequest, PagingOptions, StopReason,
};
