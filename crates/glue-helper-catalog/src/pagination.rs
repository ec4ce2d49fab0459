use std::future::Future;

use futures::{stream, Stream, TryStreamExt};

use crate::error::{CatalogError, CatalogResult};

/// One page of a paginated catalog listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The continuation token for the next page, if any.
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }
}

enum Cursor {
    Start,
    Next(String),
    End,
}

/// Turns a page fetcher into a lazy stream of items.
///
/// `fetch` is called with `None` for the first page and with the previous
/// page's continuation token afterwards. The stream ends when a page comes
/// back without a token (an empty token counts as none) or after the first
/// error. Nothing is fetched until the stream is polled.
pub fn paginate<'a, T, F, Fut>(fetch: F) -> impl Stream<Item = CatalogResult<T>> + 'a
where
    T: 'a,
    F: FnMut(Option<String>) -> Fut + 'a,
    Fut: Future<Output = CatalogResult<Page<T>>> + 'a,
{
    stream::try_unfold((fetch, Cursor::Start), |(mut fetch, cursor)| async move {
        let token = match cursor {
            Cursor::Start => None,
            Cursor::Next(token) => Some(token),
            Cursor::End => return Ok::<_, CatalogError>(None),
        };
        let Page { items, next_token } = fetch(token).await?;
        let cursor = match next_token {
            Some(token) if !token.is_empty() => Cursor::Next(token),
            _ => Cursor::End,
        };
        Ok::<_, CatalogError>(Some((items, (fetch, cursor))))
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, CatalogError>)))
    .try_flatten()
}
