//! Moderation endpoints for the admin review workflow

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::types::{ApprovalStatus, AuctionListing};

/// Confirmation returned by a moderation decision
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationReceipt {
    pub id: u64,
    pub approval_status: ApprovalStatus,
}

impl ApiClient {
    /// Fetch every auction awaiting or holding a moderation decision
    /// (pending and rejected listings).
    pub async fn list_moderation_auctions(&self) -> Result<Vec<AuctionListing>, ApiError> {
        self.get("/admin/moderation/auctions").await
    }

    /// Approve a pending auction so it can go live.
    ///
    /// Fails when the auction is no longer pending or the caller lacks
    /// privilege; the server message comes back through [`ApiError::Api`].
    pub async fn approve_auction(&self, id: u64) -> Result<ModerationReceipt, ApiError> {
        self.post(&format!("/admin/auctions/{}/approve", id), &serde_json::json!({}))
            .await
    }

    /// Reject a pending auction, optionally telling the seller why.
    pub async fn reject_auction(
        &self,
        id: u64,
        reason: Option<String>,
    ) -> Result<ModerationReceipt, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            #[serde(skip_serializing_if = "Option::is_none")]
            reason: Option<String>,
        }

        self.post(&format!("/admin/auctions/{}/reject", id), &Body { reason })
            .await
    }
}
