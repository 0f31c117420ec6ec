//! Home page component

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Home page - marketplace landing
#[component]
pub fn Home() -> Element {
    let auth = use_auth();

    rsx! {
        div {
            // Hero Section
            header {
                class: "bg-white border-b border-stone-100",
                div {
                    class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-12 sm:py-16",
                    div {
                        class: "text-center max-w-3xl mx-auto",
                        h1 {
                            class: "text-4xl sm:text-5xl font-bold text-stone-900 mb-4",
                            "Curios"
                        }
                        p {
                            class: "text-lg sm:text-xl text-stone-600 mb-8",
                            "An auction house for antiques. Consign a piece, place a bid, and let every lot find the collector who values it most."
                        }
                        if !auth.is_authenticated() {
                            Link {
                                to: Route::Login {},
                                class: "inline-flex items-center px-6 py-3 bg-amber-800 text-white rounded-md hover:bg-amber-900 font-medium",
                                "Sign in to start bidding"
                            }
                        } else {
                            Link {
                                to: Route::Account {},
                                class: "inline-flex items-center px-6 py-3 bg-amber-800 text-white rounded-md hover:bg-amber-900 font-medium",
                                "Go to your account"
                            }
                        }
                    }
                }
            }

            // How it works
            section {
                class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-6",

                    InfoCard {
                        icon: "\u{1F3FA}",
                        title: "Consign",
                        body: "Submit your antique with photos and provenance. Our specialists review every listing before it goes live."
                    }
                    InfoCard {
                        icon: "\u{1F528}",
                        title: "Bid",
                        body: "Auctions run on a fixed schedule with transparent bid history. No hidden reserves after the hammer falls."
                    }
                    InfoCard {
                        icon: "\u{1F69A}",
                        title: "Collect",
                        body: "Pay securely through our payment partner and arrange insured delivery straight from the seller."
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct InfoCardProps {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

#[component]
fn InfoCard(props: InfoCardProps) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl border border-stone-200 p-6",
            div { class: "text-3xl mb-3", "{props.icon}" }
            h3 { class: "text-lg font-semibold text-stone-900 mb-2", "{props.title}" }
            p { class: "text-sm text-stone-600", "{props.body}" }
        }
    }
}
