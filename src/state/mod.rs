//! View-level state for the moderation workflow

mod moderation;

pub use moderation::*;

use crate::types::ApprovalStatus;

/// Tab selector for the admin moderation view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModerationFilter {
    #[default]
    Pending,
    Rejected,
}

impl ModerationFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ModerationFilter::Pending => "Pending",
            ModerationFilter::Rejected => "Rejected",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ModerationFilter::Pending => "No auctions waiting for review.",
            ModerationFilter::Rejected => "No rejected auctions.",
        }
    }

    /// Approval status this tab projects from the moderation list.
    pub fn status(&self) -> ApprovalStatus {
        match self {
            ModerationFilter::Pending => ApprovalStatus::Pending,
            ModerationFilter::Rejected => ApprovalStatus::Rejected,
        }
    }

    pub fn variants() -> &'static [ModerationFilter] {
        &[ModerationFilter::Pending, ModerationFilter::Rejected]
    }
}
