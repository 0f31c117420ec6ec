//! Admin dashboard page

use dioxus::prelude::*;

use super::auctions::fetch_moderation_auctions;
use crate::routes::Route;
use crate::state::{counts, ModerationCounts};

/// Admin dashboard with a moderation overview
#[component]
pub fn AdminDashboard() -> Element {
    let auctions = use_server_future(fetch_moderation_auctions)?;

    let tally = match auctions.value().read().as_ref() {
        Some(Ok(list)) => counts(list),
        _ => ModerationCounts::default(),
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-stone-900 mb-6", "Dashboard" }

            // Stats Grid
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-8",

                StatCard {
                    title: "Awaiting review",
                    value: tally.pending,
                    icon: "\u{23F3}",
                    color: "amber"
                }
                StatCard {
                    title: "Rejected",
                    value: tally.rejected,
                    icon: "\u{1F6AB}",
                    color: "red"
                }
            }

            // Quick Actions
            div {
                class: "bg-white rounded-lg shadow-sm border border-stone-200 p-6",
                h2 { class: "text-lg font-semibold text-stone-900 mb-4", "Quick Actions" }
                Link {
                    to: Route::AdminAuctions {},
                    class: "inline-flex items-center gap-2 px-4 py-2 bg-stone-100 text-stone-700 rounded-lg hover:bg-stone-200 transition-colors",
                    span { "\u{1F528}" }
                    "Review auctions"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: usize,
    icon: &'static str,
    color: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let bg_class = match props.color {
        "amber" => "bg-amber-50",
        "red" => "bg-red-50",
        _ => "bg-stone-50",
    };

    let text_class = match props.color {
        "amber" => "text-amber-700",
        "red" => "text-red-700",
        _ => "text-stone-700",
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-stone-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-stone-500", "{props.title}" }
                    p { class: "text-3xl font-bold text-stone-900 mt-1", "{props.value}" }
                }
                div {
                    class: "w-12 h-12 rounded-full {bg_class} {text_class} flex items-center justify-center text-2xl",
                    "{props.icon}"
                }
            }
        }
    }
}
