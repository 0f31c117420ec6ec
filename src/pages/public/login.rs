//! Login page and OAuth callback handling

use dioxus::prelude::*;

use crate::auth::{complete_login, login_url, use_auth};
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::types::UserRole;

/// Login page - hands the user off to the identity provider
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Redirect if already authenticated
    if auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Account {} }
        };
    }

    let handle_login = move |_| {
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match login_url().await {
                Ok(url) => {
                    #[cfg(feature = "web")]
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                    #[cfg(not(feature = "web"))]
                    let _ = url;
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-[60vh] flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-stone-900 mb-2", "Sign in" }
                    p { class: "text-stone-600 text-sm", "Curios auction marketplace" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                        "{err}"
                    }
                }

                button {
                    class: "w-full bg-amber-800 text-white py-2 px-4 rounded-md hover:bg-amber-900 focus:outline-none focus:ring-2 focus:ring-amber-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: is_pending(),
                    onclick: handle_login,
                    if is_pending() { "Redirecting..." } else { "Continue to sign in" }
                }

                p {
                    class: "mt-4 text-xs text-stone-500 text-center",
                    "You will be redirected to our identity provider and returned here once signed in."
                }
            }
        }
    }
}

/// OAuth callback landing page
///
/// The identity provider redirects here with either a signed token or an
/// error in the query string.
#[component]
pub fn AuthCallback(token: String, error: String) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let mut failure = use_signal(|| None::<String>);

    use_effect(move || {
        if !error.is_empty() {
            failure.set(Some(error.clone()));
            return;
        }
        if token.is_empty() {
            failure.set(Some("The sign-in response was missing its token.".to_string()));
            return;
        }

        let token = token.clone();
        let auth = auth.clone();
        spawn(async move {
            match complete_login(token).await {
                Ok(user) => {
                    auth.refresh().await;
                    if user.role == UserRole::Admin {
                        navigator.push(Route::AdminDashboard {});
                    } else {
                        navigator.push(Route::Account {});
                    }
                }
                Err(e) => failure.set(Some(e.to_string())),
            }
        });
    });

    rsx! {
        div {
            class: "min-h-[60vh] flex items-center justify-center px-4",

            if let Some(message) = failure() {
                div {
                    class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full text-center",
                    h1 { class: "text-xl font-bold text-stone-900 mb-2", "Sign-in failed" }
                    p { class: "text-sm text-stone-600 mb-6", "{message}" }
                    Link {
                        to: Route::Login {},
                        class: "inline-flex items-center px-4 py-2 bg-amber-800 text-white text-sm rounded-md hover:bg-amber-900",
                        "Try signing in again"
                    }
                }
            } else {
                div {
                    class: "text-center",
                    LoadingSpinner {}
                    p { class: "mt-2 text-sm text-stone-500", "Completing sign-in..." }
                }
            }
        }
    }
}
