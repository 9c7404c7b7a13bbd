//! Offset pagination over search endpoints.
//!
//! The collections search returns a fixed-size page per request. Walking
//! all of it means asking for `offset = 0, N, 2N, ...` until a page comes
//! back with fewer than `N` records. The server's short page is the only
//! termination signal; there is no upper bound on the number of pages.

use futures_util::future::BoxFuture;

use crate::models::{ApiResponse, SearchPage};
use crate::Result;

/// Default number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Fetch every page and concatenate the records in server order.
///
/// `fetch_page` is called with the offset of the page to fetch, starting
/// at 0 and advancing by `page_size`. Pages are requested one after the
/// other. A provider error payload on any page stops the walk and is
/// returned; records gathered up to that point are dropped.
///
/// # Example
///
/// ```
/// use futures_util::FutureExt;
/// use mercadopago_rs::client::collect_pages;
/// use mercadopago_rs::models::{ApiResponse, SearchPage};
///
/// # async fn example() -> mercadopago_rs::Result<()> {
/// let all = collect_pages(2, |offset| {
///     async move {
///         let results: Vec<u32> = (offset..5).take(2).collect();
///         Ok(ApiResponse::Success(SearchPage { paging: None, results }))
///     }
///     .boxed()
/// })
/// .await?;
///
/// assert_eq!(all.success(), Some(&vec![0, 1, 2, 3, 4]));
/// # Ok(())
/// # }
/// ```
pub async fn collect_pages<'a, T, F>(
    page_size: u32,
    mut fetch_page: F,
) -> Result<ApiResponse<Vec<T>>>
where
    F: FnMut(u32) -> BoxFuture<'a, Result<ApiResponse<SearchPage<T>>>>,
{
    let mut records = Vec::new();
    let mut offset = 0;

    loop {
        let page = match fetch_page(offset).await? {
            ApiResponse::Success(page) => page,
            ApiResponse::Failure(body) => {
                tracing::debug!(offset, error = %body.error, "page request failed");
                return Ok(ApiResponse::Failure(body));
            }
        };

        let count = page.results.len();
        tracing::debug!(offset, count, "fetched page");
        records.extend(page.results);

        // Short (or empty) page: this was the last one.
        if count < page_size as usize {
            break;
        }
        offset += page_size;
    }

    Ok(ApiResponse::Success(records))
}
