//! Public site layout with header navigation and footer

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Layout wrapping the public-facing marketplace pages
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-stone-50",

            SiteHeader {}

            main {
                class: "flex-1",
                Outlet::<Route> {}
            }

            SiteFooter {}
        }
    }
}

#[component]
fn SiteHeader() -> Element {
    let auth = use_auth();

    rsx! {
        header {
            class: "bg-white border-b border-stone-200 px-6 py-3",
            div {
                class: "max-w-6xl mx-auto flex items-center justify-between",

                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold text-amber-800",
                    "Curios"
                }

                div {
                    class: "flex items-center gap-4",
                    if auth.is_admin() {
                        Link {
                            to: Route::AdminDashboard {},
                            class: "text-sm text-stone-600 hover:text-stone-900",
                            "Admin"
                        }
                    }
                    if auth.is_authenticated() {
                        Link {
                            to: Route::Account {},
                            class: "text-sm text-stone-600 hover:text-stone-900",
                            "My account"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "text-sm font-medium text-amber-800 hover:text-amber-900",
                            "Sign in"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "bg-white border-t border-stone-200 px-6 py-8 mt-12",
            div {
                class: "max-w-6xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-4",

                p { class: "text-sm text-stone-500", "Curios — antiques, consigned and sold with care." }

                nav {
                    class: "flex items-center gap-4 text-sm text-stone-500",
                    Link { to: Route::Contact {}, class: "hover:text-stone-800", "Contact" }
                    Link { to: Route::TermsOfService {}, class: "hover:text-stone-800", "Terms" }
                    Link { to: Route::PrivacyPolicy {}, class: "hover:text-stone-800", "Privacy" }
                    Link { to: Route::CookiesPolicy {}, class: "hover:text-stone-800", "Cookies" }
                }
            }
        }
    }
}
