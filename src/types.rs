//! Type definitions for marketplace API responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Auction Types
// ============================================================================

/// Moderation state of a listing. Only `pending` listings accept a
/// decision; `approved` and `rejected` are terminal here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending review",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }
}

/// Lifecycle of the auction itself, independent of moderation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Draft,
    Active,
    Ended,
    Cancelled,
}

impl AuctionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AuctionStatus::Draft => "Draft",
            AuctionStatus::Active => "Active",
            AuctionStatus::Ended => "Ended",
            AuctionStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionListing {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub starting_bid: f64,
    pub current_bid: Option<f64>,
    pub status: AuctionStatus,
    pub approval_status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
    pub seller_id: Uuid,
    pub seller_name: Option<String>,
    pub rejection_reason: Option<String>,
}

// ============================================================================
// Auth Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Seller,
    Buyer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Seller => "Seller",
            UserRole::Buyer => "Buyer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

/// Account page projection of the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub location: Option<String>,
    pub joined_at: DateTime<Utc>,
}

// ============================================================================
// Payment Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub id: Uuid,
    pub auction_id: u64,
    pub auction_title: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: OrderStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub failure_reason: Option<String>,
}
