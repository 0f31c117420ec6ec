//! Account management page

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::types::Profile;

/// Account page: profile details and display-name editing
#[component]
pub fn Account() -> Element {
    let auth = use_auth();
    let profile = use_server_future(fetch_profile)?;

    let mut display_name = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    // Seed the edit field once the profile arrives
    use_effect(move || {
        if let Some(Ok(p)) = profile.value().read().as_ref() {
            display_name.set(p.display_name.clone());
        }
    });

    if auth.loading.read().clone() {
        return rsx! {
            div {
                class: "min-h-[60vh] flex items-center justify-center",
                LoadingSpinner {}
            }
        };
    }

    if !auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Login {} }
        };
    }

    let handle_save = move |_| {
        let name = display_name().trim().to_string();
        if name.is_empty() {
            error.set(Some("Display name cannot be empty".to_string()));
            return;
        }

        spawn(async move {
            is_saving.set(true);
            error.set(None);
            notice.set(None);

            match update_display_name(name).await {
                Ok(updated) => {
                    display_name.set(updated.display_name.clone());
                    notice.set(Some("Profile updated".to_string()));
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_saving.set(false);
        });
    };

    rsx! {
        div {
            class: "max-w-2xl mx-auto px-4 py-10",
            h1 { class: "text-2xl font-bold text-stone-900 mb-6", "Your account" }

            match profile.value().read().as_ref() {
                Some(Ok(p)) => rsx! {
                    ProfileCard { profile: p.clone() }

                    div {
                        class: "bg-white rounded-lg shadow-sm border border-stone-200 p-6 mt-6",
                        h2 { class: "text-lg font-semibold text-stone-900 mb-4", "Display name" }
                        p {
                            class: "text-sm text-stone-500 mb-3",
                            "Shown next to your bids and listings instead of your email address."
                        }

                        if let Some(message) = notice() {
                            div {
                                class: "mb-3 p-3 bg-green-50 border border-green-200 text-green-700 rounded text-sm",
                                "{message}"
                            }
                        }
                        if let Some(message) = error() {
                            div {
                                class: "mb-3 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                                "{message}"
                            }
                        }

                        div {
                            class: "flex gap-2",
                            input {
                                r#type: "text",
                                value: "{display_name}",
                                oninput: move |e| display_name.set(e.value()),
                                class: "flex-1 px-3 py-2 border border-stone-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-500 text-sm",
                                disabled: is_saving()
                            }
                            button {
                                class: "px-4 py-2 bg-amber-800 text-white text-sm rounded-md hover:bg-amber-900 disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: is_saving(),
                                onclick: handle_save,
                                if is_saving() { "Saving..." } else { "Save" }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading your profile: {e}"
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", "Loading..." }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ProfileCardProps {
    profile: Profile,
}

#[component]
fn ProfileCard(props: ProfileCardProps) -> Element {
    let profile = &props.profile;
    let joined = profile.joined_at.format("%B %Y").to_string();
    let role_label = profile.role.label();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-stone-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm font-medium text-stone-900", "{profile.email}" }
                    p { class: "text-sm text-stone-500", "Member since {joined}" }
                    if let Some(location) = &profile.location {
                        p { class: "text-sm text-stone-500", "{location}" }
                    }
                }
                span {
                    class: "px-2 py-1 rounded text-xs font-medium bg-stone-100 text-stone-700",
                    "{role_label}"
                }
            }
        }
    }
}

#[server]
async fn fetch_profile() -> Result<Profile, ServerFnError> {
    let user = crate::auth::require_session_user().await?;
    let client = crate::auth::authed_client().await?;

    client
        .fetch_profile(user.id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn update_display_name(display_name: String) -> Result<Profile, ServerFnError> {
    let user = crate::auth::require_session_user().await?;
    let client = crate::auth::authed_client().await?;

    client
        .update_display_name(user.id, &display_name)
        .await
        .map_err(|e| {
            tracing::warn!(user_id = %user.id, error = %e, "profile update failed");
            ServerFnError::new(e.to_string())
        })
}
