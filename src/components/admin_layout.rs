//! Admin layout wrapper with auth protection

use dioxus::prelude::*;

use super::{AdminNav, LoadingSpinner};
use crate::auth::use_auth;
use crate::routes::Route;

/// Admin layout component that provides navigation and auth protection
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();

    // Check authentication
    if auth.loading.read().clone() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-stone-100",
                LoadingSpinner {}
            }
        };
    }

    // Redirect if not authenticated or not admin
    if !auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Login {} }
        };
    }

    if !auth.is_admin() {
        return rsx! {
            Redirect { to: Route::Home {} }
        };
    }

    rsx! {
        div {
            class: "min-h-screen bg-stone-100",

            // Navigation
            AdminNav {}

            // Main content
            main {
                class: "p-6",
                Outlet::<Route> {}
            }
        }
    }
}
