// Copyright 2024 Google LLC
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

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a page returned by a list operation.
///
/// Azure list operations return a `value` array and, when more results are
/// available, a `nextLink` with the absolute URL of the next page.
pub trait PageableResponse {
    type PageItem: Send;

    /// The absolute URL of the next page, `None` or empty on the last page.
    fn next_link(&self) -> Option<String>;

    /// Consumes the page and returns its items.
    fn items(self) -> Vec<Self::PageItem>;
}

/// An adapter that converts Azure list operations into a [futures::Stream]
/// of pages.
///
/// The first page is fetched with `None`, each following page with the
/// `nextLink` returned by the previous one. The stream terminates after the
/// first page without a `nextLink`, or after the first error.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), Option<String>>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given a function to fetch each page.
    ///
    /// The function receives `None` for the first page, and the `nextLink`
    /// for all other pages.
    pub fn new<F>(execute: impl Fn(Option<String>) -> F + Clone + Send + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(None), move |state| {
            let execute = execute.clone();
            async move {
                let link = match state {
                    ControlFlow::Continue(link) => link,
                    ControlFlow::Break(_) => return None,
                };
                match execute(link).await {
                    Ok(page) => {
                        let next_state = match page.next_link() {
                            Some(l) if !l.is_empty() => ControlFlow::Continue(Some(l)),
                            _ => ControlFlow::Break(()),
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next mutation of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the page stream into a stream of items.
    pub fn items(self) -> ItemPaginator<T::PageItem, E> {
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

/// A stream over the items of all the pages returned by a list operation.
///
/// Pages are fetched lazily, only when the items of the previous page are
/// exhausted.
#[pin_project]
pub struct ItemPaginator<I, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<I, E>> + Send>>,
}

impl<I, E> ItemPaginator<I, E>
where
    I: Send + 'static,
    E: Send + 'static,
{
    fn new<T>(pages: Paginator<T, E>) -> Self
    where
        T: PageableResponse<PageItem = I> + Send + 'static,
    {
        let stream = pages
            .map(|page| match page {
                Ok(p) => futures::stream::iter(p.items().into_iter().map(Ok)).left_stream(),
                Err(e) => futures::stream::once(std::future::ready(Err(e))).right_stream(),
            })
            .flatten();
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next mutation of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<I, E> Stream for ItemPaginator<I, E> {
    type Item = Result<I, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}
