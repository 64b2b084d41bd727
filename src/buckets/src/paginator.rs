// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Streams over list results.
//!
//! List operations return one page at a time. [Paginator] turns the page
//! requests into a stream of pages, following `nextPageToken` until the
//! service returns an empty token. [ItemPaginator] flattens those pages into
//! a stream of items.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes list responses that contain a continuation token.
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the response and returns its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to fetch the next page. Empty when there are no more pages.
    fn next_page_token(&self) -> String;
}

/// A stream of pages, fetched on demand.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new paginator.
    ///
    /// `execute` fetches one page given a page token. The first call receives
    /// `seed_token`, which is empty to start from the beginning of the list.
    pub fn new<F>(
        seed_token: String,
        execute: impl Fn(String) -> F + Clone + Send + 'static,
    ) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page_resp) => {
                        let tok = page_resp.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page_resp), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page, or `None` when the list is exhausted.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the stream of pages into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream of items, fetching additional pages as needed.
///
/// The stream ends after the first error.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T::PageItem, E>> + Send>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    T::PageItem: 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        let stream = pages.flat_map(|page| {
            let items = match page {
                Ok(p) => p.items().into_iter().map(Ok).collect::<Vec<_>>(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next item, or `None` when the list is exhausted.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}
