//! Collections (payment search) service.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures_util::FutureExt;
use serde::Serialize;

use crate::client::paginated::collect_pages;
use crate::client::ClientInner;
use crate::models::{ApiResponse, PaymentRecord, PaymentStatus, SearchPage, SortCriteria};
use crate::Result;

const SEARCH_PATH: &str = "/collections/search";

/// Service for searching received payments.
///
/// # Example
///
/// ```no_run
/// use mercadopago_rs::api::SearchFilter;
/// use mercadopago_rs::models::PaymentStatus;
///
/// # async fn example(client: mercadopago_rs::MercadoPagoClient) -> mercadopago_rs::Result<()> {
/// let filter = SearchFilter::new()
///     .status(PaymentStatus::Approved)
///     .criterion("operation_type", "regular_payment");
///
/// // Every page, fetched one after another until a short page comes back
/// let all = client.collections().search_all(&filter).await?;
/// # Ok(())
/// # }
/// ```
pub struct CollectionsService {
    inner: Arc<ClientInner>,
}

/// Filter criteria for a collections search.
///
/// Fields map one-to-one onto query parameters. Criteria without a
/// dedicated field go through [`criterion`](Self::criterion).
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchFilter {
    /// Filter by payment status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    /// Filter by payment id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Filter by seller-side reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Filter by payer email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,
    /// Filter by site, e.g. `MLA` or `MLB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// Date field the `begin_date`/`end_date` range applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Start of the date range (ISO 8601 or expressions like `NOW-1MONTH`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_date: Option<String>,
    /// End of the date range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Field to sort by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<SortCriteria>,
    /// Any other criteria, passed through as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl SearchFilter {
    /// Create an empty filter (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by payment status.
    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter by seller-side reference.
    pub fn external_reference(mut self, reference: impl Into<String>) -> Self {
        self.external_reference = Some(reference.into());
        self
    }

    /// Restrict to a date range over the given field.
    pub fn date_range(
        mut self,
        field: impl Into<String>,
        begin: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.range = Some(field.into());
        self.begin_date = Some(begin.into());
        self.end_date = Some(end.into());
        self
    }

    /// Sort results by a field.
    pub fn sort(mut self, field: impl Into<String>, criteria: SortCriteria) -> Self {
        self.sort = Some(field.into());
        self.criteria = Some(criteria);
        self
    }

    /// Add a criterion without a dedicated field.
    pub fn criterion(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.extra.insert(key.into(), value.to_string());
        self
    }
}

/// A filter plus explicit paging parameters.
#[derive(Serialize)]
struct PagedQuery<'a> {
    offset: u32,
    limit: u32,
    #[serde(flatten)]
    filter: &'a SearchFilter,
}

impl CollectionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Search payments, returning the first page only.
    ///
    /// No paging parameters are sent, so the server's default page size
    /// applies.
    pub async fn search(&self, filter: &SearchFilter) -> Result<ApiResponse<Vec<PaymentRecord>>> {
        let page: ApiResponse<SearchPage<PaymentRecord>> =
            self.inner.get_with_query(SEARCH_PATH, filter).await?;
        Ok(page.map(|page| page.results))
    }

    /// Fetch one page of results at the given offset.
    pub async fn search_page(
        &self,
        filter: &SearchFilter,
        offset: u32,
        limit: u32,
    ) -> Result<ApiResponse<SearchPage<PaymentRecord>>> {
        let query = PagedQuery {
            offset,
            limit,
            filter,
        };
        self.inner.get_with_query(SEARCH_PATH, &query).await
    }

    /// Search payments across every page.
    ///
    /// Pages of [`ClientConfig::page_size`](crate::ClientConfig::page_size)
    /// records are requested one after the other until a short page comes
    /// back; the records are returned in server order.
    pub async fn search_all(
        &self,
        filter: &SearchFilter,
    ) -> Result<ApiResponse<Vec<PaymentRecord>>> {
        let page_size = self.inner.config.page_size;
        collect_pages(page_size, move |offset| {
            self.search_page(filter, offset, page_size).boxed()
        })
        .await
    }
}
