//! Page-following results of list operations.
//!
//! A [`PagedResult`] owns the first page of a list operation together with
//! the input that produced it and a fetcher able to re-issue that input.
//! [`PagedResult::current_page`] never calls the service; the stream returned
//! by [`PagedResult::into_items`] walks every page, starting the fetch of the
//! next page as soon as the current one is loaded.

use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use futures::Stream;
use tokio::task::JoinHandle;

use crate::error::{ErrorTable, ParseError, SdkError, TransportError};
use crate::request::PaginatedInput;
use crate::response::Response;
use crate::result::{FromResponse, LazyResult};
use crate::runtime::{BoxFuture, Runtime};

/// One page of a list operation.
pub trait Page {
    /// Element type of the page.
    type Item;

    /// Continuation token of the next page; `None` on the last page.
    fn next_token(&self) -> Option<&str>;

    /// Elements of this page.
    fn items(&self) -> &[Self::Item];

    /// Consume the page and return its elements.
    fn into_items(self) -> Vec<Self::Item>;
}

/// Re-issues a list input and returns the resulting page.
pub type PageFetcher<I, P, E> =
    Arc<dyn Fn(I) -> BoxFuture<'static, Result<LazyResult<P>, SdkError<E>>> + Send + Sync>;

/// Stream over the elements of every page.
pub type ItemStream<T, E> = Pin<Box<dyn Stream<Item = Result<T, SdkError<E>>> + Send>>;

/// Build a fetcher sending inputs through `runtime`.
#[must_use]
pub fn fetcher<I, P, E>(runtime: Runtime, errors: &'static ErrorTable<E>) -> PageFetcher<I, P, E>
where
    I: PaginatedInput,
    P: FromResponse + Send + Sync + 'static,
    E: Send + 'static,
{
    Arc::new(move |input: I| -> BoxFuture<'static, Result<LazyResult<P>, SdkError<E>>> {
        let runtime = runtime.clone();
        Box::pin(async move {
            let response = runtime.get_response(&input, errors).await?;
            Ok(LazyResult::new(response))
        })
    })
}

/// The result of a list operation.
pub struct PagedResult<I, P, E> {
    first: LazyResult<P>,
    input: I,
    fetch: PageFetcher<I, P, E>,
}

impl<I, P, E> fmt::Debug for PagedResult<I, P, E>
where
    I: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedResult")
            .field("first", &self.first)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

impl<I, P, E> PagedResult<I, P, E>
where
    I: PaginatedInput,
    P: Page + FromResponse + Send + Sync + 'static,
    P::Item: Send + 'static,
    E: Send + 'static,
{
    /// Wrap an already fetched first page.
    #[must_use]
    pub fn new(first: LazyResult<P>, input: I, fetch: PageFetcher<I, P, E>) -> Self {
        Self {
            first,
            input,
            fetch,
        }
    }

    /// Send `input` through `runtime` and wrap the first page.
    pub async fn fetch_first(
        runtime: &Runtime,
        input: I,
        errors: &'static ErrorTable<E>,
    ) -> Result<Self, SdkError<E>> {
        let response = runtime.get_response(&input, errors).await?;
        Ok(Self::new(
            LazyResult::new(response),
            input,
            fetcher(runtime.clone(), errors),
        ))
    }

    /// The first page, parsed on first access.
    pub fn page(&self) -> Result<&P, ParseError> {
        self.first.initialize()
    }

    /// Elements of the first page. Never calls the service.
    pub fn current_page(&self) -> Result<&[P::Item], ParseError> {
        Ok(self.page()?.items())
    }

    /// Continuation token of the first page.
    pub fn next_token(&self) -> Result<Option<&str>, ParseError> {
        Ok(self.page()?.next_token())
    }

    /// The input that produced the first page.
    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Raw response of the first page.
    #[must_use]
    pub fn response(&self) -> &Response {
        self.first.response()
    }

    /// Consume the result and return the owned first page.
    pub fn into_page(self) -> Result<P, ParseError> {
        self.first.into_output()
    }

    /// Stream the elements of every page, in order.
    ///
    /// Each time a page is loaded and carries a continuation token, the next
    /// page is fetched on a spawned task while the current elements are
    /// consumed. Dropping the stream aborts that fetch. An error is yielded
    /// once and ends the stream.
    ///
    /// The stream must be polled within a Tokio runtime.
    #[must_use]
    pub fn into_items(self) -> ItemStream<P::Item, E> {
        let state = Walk {
            first: Some(self.first),
            input: self.input,
            fetch: self.fetch,
            items: Vec::new().into_iter(),
            next: None,
        };

        Box::pin(futures::stream::unfold(state, |mut state| async move {
            loop {
                if let Some(item) = state.items.next() {
                    return Some((Ok(item), state));
                }

                let loaded = match state.first.take() {
                    Some(first) => Ok(first),
                    None => state.next.take()?.join().await,
                };
                if let Err(err) = loaded.and_then(|page| state.load(page)) {
                    return Some((Err(err), state));
                }
            }
        }))
    }
}

/// Iteration state of [`PagedResult::into_items`].
struct Walk<I, P: Page, E> {
    first: Option<LazyResult<P>>,
    input: I,
    fetch: PageFetcher<I, P, E>,
    items: std::vec::IntoIter<P::Item>,
    next: Option<Prefetch<P, E>>,
}

impl<I, P, E> Walk<I, P, E>
where
    I: PaginatedInput,
    P: Page + FromResponse + Send + Sync + 'static,
    P::Item: Send + 'static,
    E: Send + 'static,
{
    /// Make `page` current and start fetching its successor.
    fn load(&mut self, page: LazyResult<P>) -> Result<(), SdkError<E>> {
        let page = page.into_output()?;
        if let Some(token) = page.next_token().filter(|t| !t.is_empty()) {
            let next = self.input.with_continuation(token.to_owned());
            tracing::trace!(operation = I::OPERATION, "prefetching next page");
            self.next = Some(Prefetch(tokio::spawn((self.fetch)(next.clone()))));
            self.input = next;
        }
        self.items = page.into_items().into_iter();
        Ok(())
    }
}

/// A page fetch running on its own task; aborted when dropped.
struct Prefetch<P, E>(JoinHandle<Result<LazyResult<P>, SdkError<E>>>);

impl<P, E> Prefetch<P, E> {
    async fn join(mut self) -> Result<LazyResult<P>, SdkError<E>> {
        match (&mut self.0).await {
            Ok(result) => result,
            Err(err) => Err(SdkError::Transport(
                TransportError::new("page fetch did not complete").with_source(err),
            )),
        }
    }
}

impl<P, E> Drop for Prefetch<P, E> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
