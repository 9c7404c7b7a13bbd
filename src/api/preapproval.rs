//! Preapproval (recurring payments) service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{
    ApiResponse, Preapproval, PreapprovalId, PreapprovalRequest, PreapprovalStatus,
    PreapprovalStatusUpdate,
};
use crate::Result;

/// Service for preapproval operations.
pub struct PreapprovalService {
    inner: Arc<ClientInner>,
}

impl PreapprovalService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a recurring payment authorization.
    ///
    /// The payer still has to approve it at the returned `init_point`.
    pub async fn create(&self, request: &PreapprovalRequest) -> Result<ApiResponse<Preapproval>> {
        self.inner.post("/preapproval", request).await
    }

    /// Get a preapproval by id.
    pub async fn get(&self, id: &PreapprovalId) -> Result<ApiResponse<Preapproval>> {
        self.inner.get(&Self::path(id)).await
    }

    /// Cancel a preapproval. No further charges are made.
    pub async fn cancel(&self, id: &PreapprovalId) -> Result<ApiResponse<Preapproval>> {
        self.set_status(id, PreapprovalStatus::Cancelled).await
    }

    /// Pause an authorized preapproval.
    pub async fn pause(&self, id: &PreapprovalId) -> Result<ApiResponse<Preapproval>> {
        self.set_status(id, PreapprovalStatus::Paused).await
    }

    async fn set_status(
        &self,
        id: &PreapprovalId,
        status: PreapprovalStatus,
    ) -> Result<ApiResponse<Preapproval>> {
        self.inner
            .put(&Self::path(id), &PreapprovalStatusUpdate { status })
            .await
    }

    fn path(id: &PreapprovalId) -> String {
        format!("/preapproval/{}", urlencoding::encode(id.as_str()))
    }
}
