//! Operation contract
//!
//! A paged operation is anything that turns a [`PageRequest`] into a
//! [`Page`]. Service adapters implement the trait directly; ad-hoc callables
//! go through [`FnOperation`].

use super::types::{Page, PageLimits, PageRequest};
use crate::error::Result;
use async_trait::async_trait;
use std::future::Future;
use std::marker::PhantomData;

/// A remote list/describe call that returns one page per invocation
#[async_trait]
pub trait PagedOperation: Send + Sync {
    /// Filter/selection parameters, fixed for a session
    type Params: Send + Sync;
    /// A single result item
    type Item: Send;

    /// AWS operation name (e.g. `DescribeRepositories`)
    fn name(&self) -> &'static str;

    /// Accepted page-size bounds
    fn limits(&self) -> PageLimits {
        PageLimits::default()
    }

    /// Perform one call
    async fn fetch_page(&self, request: &PageRequest<Self::Params>) -> Result<Page<Self::Item>>;
}

/// Adapts an async closure into a [`PagedOperation`]
pub struct FnOperation<P, T, F> {
    name: &'static str,
    limits: PageLimits,
    call: F,
    _marker: PhantomData<fn(P) -> T>,
}

impl<P, T, F> FnOperation<P, T, F> {
    /// Wrap `call` under the given operation name
    pub fn new(name: &'static str, call: F) -> Self {
        Self {
            name,
            limits: PageLimits::default(),
            call,
            _marker: PhantomData,
        }
    }

    /// Override the page-size bounds
    #[must_use]
    pub fn with_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[async_trait]
impl<P, T, F, Fut> PagedOperation for FnOperation<P, T, F>
where
    P: Clone + Send + Sync,
    T: Send,
    F: Fn(PageRequest<P>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>>> + Send,
{
    type Params = P;
    type Item = T;

    fn name(&self) -> &'static str {
        self.name
    }

    fn limits(&self) -> PageLimits {
        self.limits
    }

    async fn fetch_page(&self, request: &PageRequest<P>) -> Result<Page<T>> {
        (self.call)(request.clone()).await
    }
}
