use crate::application::services::content_lifecycle_service::ContentLifecycleService;
use crate::domain::entities::ContentKind;
use serde::{Deserialize, Serialize};

/// One entry of a bulk request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkItem {
    pub content_type: ContentKind,
    pub content_id: String,
}

impl BulkItem {
    pub fn new(content_type: ContentKind, content_id: impl Into<String>) -> Self {
        Self {
            content_type,
            content_id: content_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkFailure {
    pub content_type: ContentKind,
    pub content_id: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkTransitionSummary {
    pub succeeded: usize,
    pub failed: Vec<BulkFailure>,
}

/// Applies approval item by item; no atomicity across the batch
#[derive(Clone)]
pub struct BulkTransitionService {
    lifecycle: ContentLifecycleService,
}

impl BulkTransitionService {
    pub fn new(lifecycle: ContentLifecycleService) -> Self {
        Self { lifecycle }
    }

    #[tracing::instrument(skip(self, items), fields(count = items.len()))]
    pub async fn bulk_approve(
        &self,
        items: &[BulkItem],
        performed_by: &str,
    ) -> BulkTransitionSummary {
        let mut summary = BulkTransitionSummary::default();

        for item in items {
            match self
                .lifecycle
                .approve(item.content_type, &item.content_id, performed_by, None)
                .await
            {
                Ok(_) => summary.succeeded += 1,
                Err(e) => {
                    tracing::warn!(
                        "Bulk approval skipped {} {}: {}",
                        item.content_type,
                        item.content_id,
                        e
                    );
                    summary.failed.push(BulkFailure {
                        content_type: item.content_type,
                        content_id: item.content_id.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Bulk approval finished: {} succeeded, {} failed",
            summary.succeeded,
            summary.failed.len()
        );

        summary
    }
}
