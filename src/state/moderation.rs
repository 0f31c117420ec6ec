//! Client-side state for the auction moderation workflow.
//!
//! The admin review view keeps a local cache of the moderation list (pending
//! and rejected auctions) fetched from the marketplace API. This module holds
//! the pure pieces of that workflow: the cache with its load-sequencing
//! rules, the pending/rejected projections derived from it, the per-item
//! processing marks that guard against duplicate mutation requests, and the
//! reject-reason dialog state.

use std::collections::HashSet;

use crate::types::{ApprovalStatus, AuctionListing};

/// Errors surfaced by the moderation workflow.
///
/// All of them are non-fatal: the view renders the message inline and keeps
/// the last known list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModerationError {
    #[error("Failed to load auctions: {0}")]
    Fetch(String),

    #[error("Approval failed: {0}")]
    Approval(String),

    #[error("Rejection failed: {0}")]
    Rejection(String),
}

/// Local cache of the moderation list.
///
/// The queue is a read-through cache of the remote store. `begin_load` hands
/// out a request sequence number and supersedes any load still in flight;
/// `apply` installs the response for the newest request and discards stale
/// ones; `remove` drops a single entry once the server has confirmed a
/// decision. Responses may arrive out of request order; only the highest
/// sequence number seen so far wins.
#[derive(Debug, Clone, Default)]
pub struct ModerationQueue {
    entries: Vec<AuctionListing>,
    issued_seq: u64,
    applied_seq: u64,
    error: Option<ModerationError>,
}

impl ModerationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Install the response for the load with sequence number `seq`.
    ///
    /// A successful response replaces the entries and clears any earlier
    /// error; a failed one keeps the previous entries (empty on first load)
    /// and records the error for display. Returns false when the response is
    /// stale, i.e. a newer response or a removal already applied.
    pub fn apply(
        &mut self,
        seq: u64,
        result: Result<Vec<AuctionListing>, ModerationError>,
    ) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;

        match result {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    /// Drop the entry with the given id after a confirmed decision.
    ///
    /// Removing an id that is not present is a no-op. Any load that was
    /// issued before the removal no longer reflects it, so its response is
    /// barred from applying.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|listing| listing.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.applied_seq = self.issued_seq;
        }
        removed
    }

    pub fn entries(&self) -> &[AuctionListing] {
        &self.entries
    }

    pub fn last_error(&self) -> Option<&ModerationError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered subsequence of `entries` holding the given approval status.
pub fn project(entries: &[AuctionListing], status: ApprovalStatus) -> Vec<&AuctionListing> {
    entries
        .iter()
        .filter(|listing| listing.approval_status == status)
        .collect()
}

/// Pending/rejected tallies for the tab headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModerationCounts {
    pub pending: usize,
    pub rejected: usize,
}

/// Count pending and rejected entries in a single pass.
pub fn counts(entries: &[AuctionListing]) -> ModerationCounts {
    let mut tally = ModerationCounts::default();
    for listing in entries {
        match listing.approval_status {
            ApprovalStatus::Pending => tally.pending += 1,
            ApprovalStatus::Rejected => tally.rejected += 1,
            ApprovalStatus::Approved => {}
        }
    }
    tally
}

/// Per-item processing marks for in-flight moderation calls.
///
/// `begin` claims an id and refuses while a call for that id is still
/// outstanding, which is what turns a double click into a single request.
/// Marks for different ids are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSet {
    in_flight: HashSet<u64>,
}

impl ProcessingSet {
    /// Claim the mark for `id`. Returns false when it is already claimed.
    pub fn begin(&mut self, id: u64) -> bool {
        self.in_flight.insert(id)
    }

    /// Release the mark. Called on completion regardless of outcome.
    pub fn finish(&mut self, id: u64) {
        self.in_flight.remove(&id);
    }

    pub fn contains(&self, id: u64) -> bool {
        self.in_flight.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}

/// A rejection reason the admin confirmed with an empty input counts as
/// "no reason provided"; the request body omits it entirely.
pub fn normalize_reason(reason: String) -> Option<String> {
    if reason.is_empty() {
        None
    } else {
        Some(reason)
    }
}

/// State for the reject-reason dialog.
///
/// Opening the dialog targets one listing. Confirming yields the target id
/// with its normalized reason; cancelling discards the target so no remote
/// call can be made for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectDialog {
    target: Option<u64>,
    draft: String,
}

impl RejectDialog {
    pub fn open(&mut self, id: u64) {
        self.target = Some(id);
        self.draft.clear();
    }

    pub fn cancel(&mut self) {
        self.target = None;
        self.draft.clear();
    }

    /// Close the dialog and hand back the target with its normalized reason.
    pub fn confirm(&mut self) -> Option<(u64, Option<String>)> {
        let id = self.target.take()?;
        let reason = normalize_reason(std::mem::take(&mut self.draft));
        Some((id, reason))
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::types::AuctionStatus;

    fn listing(id: u64, approval_status: ApprovalStatus) -> AuctionListing {
        AuctionListing {
            id,
            title: format!("Lot {}", id),
            description: None,
            category: Some("Furniture".to_string()),
            starting_bid: 50.0,
            current_bid: None,
            status: AuctionStatus::Draft,
            approval_status,
            created_at: Utc::now(),
            seller_id: Uuid::nil(),
            seller_name: None,
            rejection_reason: None,
        }
    }

    fn loaded_queue(entries: Vec<AuctionListing>) -> ModerationQueue {
        let mut queue = ModerationQueue::new();
        let seq = queue.begin_load();
        assert!(queue.apply(seq, Ok(entries)));
        queue
    }

    fn ids(entries: &[&AuctionListing]) -> Vec<u64> {
        entries.iter().map(|listing| listing.id).collect()
    }

    #[test]
    fn projection_keeps_matching_entries_in_order() {
        let entries = vec![
            listing(1, ApprovalStatus::Pending),
            listing(2, ApprovalStatus::Rejected),
            listing(3, ApprovalStatus::Pending),
        ];

        assert_eq!(ids(&project(&entries, ApprovalStatus::Pending)), vec![1, 3]);
        assert_eq!(ids(&project(&entries, ApprovalStatus::Rejected)), vec![2]);
    }

    #[test]
    fn counts_tally_pending_and_rejected() {
        let entries = vec![
            listing(1, ApprovalStatus::Pending),
            listing(2, ApprovalStatus::Rejected),
            listing(3, ApprovalStatus::Pending),
        ];

        let tally = counts(&entries);
        assert_eq!(tally, ModerationCounts { pending: 2, rejected: 1 });
        assert_eq!(tally.pending + tally.rejected, entries.len());
    }

    #[test]
    fn counts_skip_approved_entries() {
        let entries = vec![
            listing(1, ApprovalStatus::Pending),
            listing(2, ApprovalStatus::Approved),
        ];

        let tally = counts(&entries);
        assert!(tally.pending + tally.rejected < entries.len());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut queue = loaded_queue(vec![
            listing(1, ApprovalStatus::Pending),
            listing(2, ApprovalStatus::Pending),
        ]);

        assert!(queue.remove(2));
        let after_first: Vec<u64> = queue.entries().iter().map(|l| l.id).collect();

        assert!(!queue.remove(2));
        let after_second: Vec<u64> = queue.entries().iter().map(|l| l.id).collect();
        assert_eq!(after_first, after_second);
        assert_eq!(after_second, vec![1]);
    }

    #[test]
    fn load_failure_keeps_previous_entries() {
        let mut queue = loaded_queue(vec![listing(1, ApprovalStatus::Pending)]);

        let seq = queue.begin_load();
        assert!(queue.apply(seq, Err(ModerationError::Fetch("timed out".to_string()))));

        assert_eq!(queue.entries().len(), 1);
        assert_eq!(
            queue.last_error(),
            Some(&ModerationError::Fetch("timed out".to_string()))
        );

        // A later successful load clears the error.
        let seq = queue.begin_load();
        assert!(queue.apply(seq, Ok(vec![])));
        assert!(queue.last_error().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn stale_load_response_is_discarded() {
        let mut queue = ModerationQueue::new();
        let first = queue.begin_load();
        let second = queue.begin_load();

        // The second request's response arrives first.
        assert!(queue.apply(second, Ok(vec![listing(2, ApprovalStatus::Pending)])));
        // The first request's response arrives late and must not clobber it.
        assert!(!queue.apply(first, Ok(vec![listing(1, ApprovalStatus::Pending)])));

        let visible: Vec<u64> = queue.entries().iter().map(|l| l.id).collect();
        assert_eq!(visible, vec![2]);
    }

    #[test]
    fn load_issued_before_remove_cannot_resurrect_entry() {
        let mut queue = loaded_queue(vec![
            listing(1, ApprovalStatus::Pending),
            listing(2, ApprovalStatus::Pending),
        ]);

        // A refresh goes out, then the admin approves id 1 before the
        // refresh response lands.
        let stale = queue.begin_load();
        assert!(queue.remove(1));

        assert!(!queue.apply(
            stale,
            Ok(vec![
                listing(1, ApprovalStatus::Pending),
                listing(2, ApprovalStatus::Pending),
            ])
        ));
        let visible: Vec<u64> = queue.entries().iter().map(|l| l.id).collect();
        assert_eq!(visible, vec![2]);
    }

    #[test]
    fn processing_mark_is_exclusive_per_item() {
        let mut processing = ProcessingSet::default();

        assert!(processing.begin(1));
        assert!(!processing.begin(1));
        // Other ids are independent.
        assert!(processing.begin(2));

        processing.finish(1);
        assert!(!processing.contains(1));
        assert!(processing.begin(1));
    }

    #[test]
    fn reject_dialog_confirm_returns_normalized_reason() {
        let mut dialog = RejectDialog::default();
        dialog.open(3);
        dialog.set_draft("low quality".to_string());

        assert_eq!(dialog.confirm(), Some((3, Some("low quality".to_string()))));
        assert!(!dialog.is_open());
    }

    #[test]
    fn reject_dialog_empty_reason_means_no_reason() {
        let mut dialog = RejectDialog::default();
        dialog.open(3);

        assert_eq!(dialog.confirm(), Some((3, None)));
    }

    #[test]
    fn reject_dialog_cancel_discards_target() {
        let mut dialog = RejectDialog::default();
        dialog.open(3);
        dialog.set_draft("typo in title".to_string());
        dialog.cancel();

        assert!(!dialog.is_open());
        assert_eq!(dialog.confirm(), None);
    }

    /// Scripted stand-in for the marketplace API.
    struct MockRemote {
        calls: Cell<usize>,
        fail_with: Option<ModerationError>,
    }

    impl MockRemote {
        fn succeeding() -> Self {
            Self { calls: Cell::new(0), fail_with: None }
        }

        fn failing(err: ModerationError) -> Self {
            Self { calls: Cell::new(0), fail_with: Some(err) }
        }

        async fn decide(&self, _id: u64) -> Result<(), ModerationError> {
            self.calls.set(self.calls.get() + 1);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    /// Mirrors the dispatch glue in the admin auctions page: claim the
    /// processing mark, call the remote, release the mark, reconcile.
    async fn dispatch(
        queue: &mut ModerationQueue,
        processing: &mut ProcessingSet,
        remote: &MockRemote,
        id: u64,
    ) -> Option<ModerationError> {
        if !processing.begin(id) {
            return None;
        }
        let result = remote.decide(id).await;
        processing.finish(id);
        match result {
            Ok(()) => {
                queue.remove(id);
                None
            }
            Err(err) => Some(err),
        }
    }

    #[tokio::test]
    async fn approve_removes_item_after_confirmation() {
        let mut queue = loaded_queue(vec![
            listing(1, ApprovalStatus::Pending),
            listing(3, ApprovalStatus::Pending),
        ]);
        let mut processing = ProcessingSet::default();
        let remote = MockRemote::succeeding();

        let error = dispatch(&mut queue, &mut processing, &remote, 1).await;

        assert_eq!(error, None);
        assert_eq!(remote.calls.get(), 1);
        assert_eq!(ids(&project(queue.entries(), ApprovalStatus::Pending)), vec![3]);
        assert!(processing.is_empty());
    }

    #[tokio::test]
    async fn failed_rejection_keeps_item_and_clears_mark() {
        let mut queue = loaded_queue(vec![listing(3, ApprovalStatus::Pending)]);
        let mut processing = ProcessingSet::default();
        let remote =
            MockRemote::failing(ModerationError::Rejection("not permitted".to_string()));

        let error = dispatch(&mut queue, &mut processing, &remote, 3).await;

        assert_eq!(
            error,
            Some(ModerationError::Rejection("not permitted".to_string()))
        );
        assert_eq!(ids(&project(queue.entries(), ApprovalStatus::Pending)), vec![3]);
        assert!(!processing.contains(3));
    }

    #[tokio::test]
    async fn in_flight_item_refuses_second_dispatch() {
        let mut queue = loaded_queue(vec![listing(1, ApprovalStatus::Pending)]);
        let mut processing = ProcessingSet::default();
        let remote = MockRemote::succeeding();

        // The first click's call is still outstanding.
        assert!(processing.begin(1));

        let error = dispatch(&mut queue, &mut processing, &remote, 1).await;

        assert_eq!(error, None);
        assert_eq!(remote.calls.get(), 0);
        assert_eq!(queue.entries().len(), 1);
    }
}
