//! Admin auction moderation page

use dioxus::prelude::*;

use crate::components::LoadingDots;
use crate::state::{
    counts, project, ModerationError, ModerationFilter, ModerationQueue, ProcessingSet,
    RejectDialog,
};
use crate::types::{ApprovalStatus, AuctionListing};

/// Admin moderation view: pending and rejected auctions with
/// approve/reject actions
#[component]
pub fn AdminAuctions() -> Element {
    let mut queue = use_signal(ModerationQueue::new);
    let mut processing = use_signal(ProcessingSet::default);
    let mut dialog = use_signal(RejectDialog::default);
    let mut notice = use_signal(|| None::<String>);
    let mut filter = use_signal(|| ModerationFilter::Pending);
    let mut loading = use_signal(|| true);

    let load = move || {
        spawn(async move {
            loading.set(true);
            let seq = queue.write().begin_load();
            let result = fetch_moderation_auctions()
                .await
                .map_err(|e| ModerationError::Fetch(e.to_string()));
            queue.write().apply(seq, result);
            loading.set(false);
        });
    };

    // Initial load on mount
    use_effect(move || {
        load();
    });

    let handle_approve = move |id: u64| {
        spawn(async move {
            if !processing.write().begin(id) {
                return;
            }
            let result = approve_auction(id).await;
            processing.write().finish(id);
            match result {
                Ok(()) => {
                    queue.write().remove(id);
                }
                Err(e) => notice.set(Some(ModerationError::Approval(e.to_string()).to_string())),
            }
        });
    };

    let handle_reject_confirm = move |_| {
        let Some((id, reason)) = dialog.write().confirm() else {
            return;
        };
        spawn(async move {
            if !processing.write().begin(id) {
                return;
            }
            let result = reject_auction(id, reason).await;
            processing.write().finish(id);
            match result {
                Ok(()) => {
                    queue.write().remove(id);
                }
                Err(e) => notice.set(Some(ModerationError::Rejection(e.to_string()).to_string())),
            }
        });
    };

    // Derive the visible projection fresh on every render
    let entries = queue.read().entries().to_vec();
    let tally = counts(&entries);
    let visible: Vec<AuctionListing> = project(&entries, filter().status())
        .into_iter()
        .cloned()
        .collect();

    let banner = notice().or_else(|| queue.read().last_error().map(|e| e.to_string()));
    let is_initial_load = loading() && entries.is_empty();

    let tabs: Vec<(ModerationFilter, String)> = ModerationFilter::variants()
        .iter()
        .map(|tab| {
            let count = match tab {
                ModerationFilter::Pending => tally.pending,
                ModerationFilter::Rejected => tally.rejected,
            };
            (*tab, format!("{} ({})", tab.label(), count))
        })
        .collect();
    let empty_message = filter().empty_message();

    let dialog_open = dialog.read().is_open();
    let dialog_draft = dialog.read().draft().to_string();

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-stone-900", "Manage Auctions" }
                button {
                    class: "px-3 py-1.5 bg-white border border-stone-300 text-stone-700 text-sm rounded hover:bg-stone-50 disabled:opacity-50",
                    disabled: loading(),
                    onclick: move |_| load(),
                    if loading() { "Refreshing..." } else { "Refresh" }
                }
            }

            if let Some(message) = banner {
                div {
                    class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded flex items-center justify-between text-sm",
                    span { "{message}" }
                    button {
                        class: "ml-4 text-red-500 hover:text-red-700",
                        onclick: move |_| {
                            notice.set(None);
                            queue.write().clear_error();
                        },
                        "Dismiss"
                    }
                }
            }

            // Tabs
            div {
                class: "flex items-center gap-1 mb-4",
                for (tab, label) in tabs {
                    button {
                        class: if filter() == tab {
                            "px-3 py-2 rounded-md text-sm font-medium bg-amber-100 text-amber-900"
                        } else {
                            "px-3 py-2 rounded-md text-sm font-medium text-stone-600 hover:bg-stone-100"
                        },
                        onclick: move |_| filter.set(tab),
                        "{label}"
                    }
                }
            }

            if is_initial_load {
                div {
                    class: "text-center py-12",
                    LoadingDots {}
                }
            } else if visible.is_empty() {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-stone-200 p-12 text-center",
                    p { class: "text-stone-500", "{empty_message}" }
                }
            } else {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-stone-200 divide-y divide-stone-200",
                    for listing in visible {
                        AuctionRow {
                            key: "{listing.id}",
                            processing: processing.read().contains(listing.id),
                            listing,
                            on_approve: handle_approve,
                            on_reject: move |id: u64| dialog.write().open(id),
                        }
                    }
                }
            }

            // Reject reason dialog
            if dialog_open {
                div {
                    class: "fixed inset-0 bg-black/40 flex items-center justify-center z-50 px-4",
                    div {
                        class: "bg-white rounded-lg shadow-lg p-6 max-w-md w-full",
                        h2 { class: "text-lg font-semibold text-stone-900 mb-2", "Reject auction" }
                        p {
                            class: "text-sm text-stone-600 mb-4",
                            "Optionally tell the seller why this listing is being rejected."
                        }
                        textarea {
                            class: "w-full px-3 py-2 border border-stone-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-500 text-sm",
                            rows: 3,
                            placeholder: "Reason (optional)",
                            value: "{dialog_draft}",
                            oninput: move |e| dialog.write().set_draft(e.value()),
                        }
                        div {
                            class: "flex justify-end gap-2 mt-4",
                            button {
                                class: "px-4 py-2 bg-stone-100 text-stone-700 text-sm rounded hover:bg-stone-200",
                                onclick: move |_| dialog.write().cancel(),
                                "Cancel"
                            }
                            button {
                                class: "px-4 py-2 bg-red-600 text-white text-sm rounded hover:bg-red-700",
                                onclick: handle_reject_confirm,
                                "Reject"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AuctionRowProps {
    listing: AuctionListing,
    processing: bool,
    on_approve: EventHandler<u64>,
    on_reject: EventHandler<u64>,
}

#[component]
fn AuctionRow(props: AuctionRowProps) -> Element {
    let listing = &props.listing;
    let is_pending = listing.approval_status == ApprovalStatus::Pending;

    let bid_label = match listing.current_bid {
        Some(bid) => format!("Current bid ${:.2}", bid),
        None => format!("Starting bid ${:.2}", listing.starting_bid),
    };
    let seller = listing
        .seller_name
        .clone()
        .unwrap_or_else(|| "Private seller".to_string());
    let submitted = listing.created_at.format("%b %e, %Y").to_string();
    let status_label = listing.status.label();
    let approval_label = listing.approval_status.label();

    rsx! {
        div {
            class: "p-4 hover:bg-stone-50",
            div {
                class: "flex items-start justify-between",
                div {
                    class: "flex-1 min-w-0",
                    h3 { class: "text-sm font-medium text-stone-900 truncate", "{listing.title}" }
                    p { class: "text-sm text-stone-500", "{seller} · {bid_label} · submitted {submitted}" }
                    div {
                        class: "flex items-center gap-2 mt-1",
                        if let Some(category) = &listing.category {
                            span {
                                class: "inline-flex items-center bg-stone-100 px-2 py-0.5 rounded text-xs text-stone-600",
                                "{category}"
                            }
                        }
                        span {
                            class: "text-xs text-stone-400",
                            "{status_label}"
                        }
                    }
                    if let Some(description) = &listing.description {
                        p { class: "text-sm text-stone-600 mt-1 line-clamp-2", "{description}" }
                    }
                    if let Some(reason) = &listing.rejection_reason {
                        p { class: "text-sm text-red-600 mt-1", "Rejected: {reason}" }
                    }
                }
                if !is_pending {
                    div {
                        class: "ml-4",
                        span {
                            class: "px-2 py-1 rounded text-xs font-medium bg-red-100 text-red-700",
                            "{approval_label}"
                        }
                    }
                } else {
                    div {
                        class: "flex items-center gap-2 ml-4",
                        button {
                            class: "px-3 py-1.5 bg-green-100 text-green-700 text-sm rounded hover:bg-green-200 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: props.processing,
                            onclick: {
                                let id = listing.id;
                                move |_| props.on_approve.call(id)
                            },
                            if props.processing { "Working..." } else { "Approve" }
                        }
                        button {
                            class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: props.processing,
                            onclick: {
                                let id = listing.id;
                                move |_| props.on_reject.call(id)
                            },
                            "Reject"
                        }
                    }
                }
            }
        }
    }
}

#[server]
pub async fn fetch_moderation_auctions() -> Result<Vec<AuctionListing>, ServerFnError> {
    let client = crate::auth::authed_client().await?;

    client.list_moderation_auctions().await.map_err(|e| {
        tracing::warn!(error = %e, "moderation list fetch failed");
        ServerFnError::new(e.to_string())
    })
}

#[server]
async fn approve_auction(auction_id: u64) -> Result<(), ServerFnError> {
    let client = crate::auth::authed_client().await?;

    client
        .approve_auction(auction_id)
        .await
        .map(|_| ())
        .map_err(|e| {
            tracing::warn!(auction_id, error = %e, "approval failed");
            ServerFnError::new(e.to_string())
        })
}

#[server]
async fn reject_auction(auction_id: u64, reason: Option<String>) -> Result<(), ServerFnError> {
    let client = crate::auth::authed_client().await?;

    client
        .reject_auction(auction_id, reason)
        .await
        .map(|_| ())
        .map_err(|e| {
            tracing::warn!(auction_id, error = %e, "rejection failed");
            ServerFnError::new(e.to_string())
        })
}
