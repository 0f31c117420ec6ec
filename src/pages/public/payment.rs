//! Payment result pages
//!
//! The payment provider redirects back here after checkout with the order
//! reference (and, on failure, a reason code) in the query string.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::PaymentOrder;

/// Payment confirmation page
#[component]
pub fn PaymentSuccess(order_id: String) -> Element {
    let order = use_server_future({
        let order_id = order_id.clone();
        move || fetch_order(order_id.clone())
    })?;

    let navigator = use_navigator();
    let mut countdown = use_signal(|| 8_i32);

    // Send the buyer back to their account once they have seen the receipt
    use_effect(move || {
        #[cfg(feature = "web")]
        spawn(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(1_000).await;
                let remaining = countdown() - 1;
                countdown.set(remaining);
                if remaining <= 0 {
                    navigator.push(Route::Account {});
                    break;
                }
            }
        });
        #[cfg(not(feature = "web"))]
        {
            let _ = navigator;
            let _ = &mut countdown;
        }
    });

    rsx! {
        div {
            class: "max-w-lg mx-auto px-4 py-12",
            div {
                class: "bg-white rounded-lg shadow-md p-8 text-center",
                div { class: "text-5xl mb-4", "\u{2705}" }
                h1 { class: "text-2xl font-bold text-stone-900 mb-2", "Payment received" }
                p {
                    class: "text-sm text-stone-600 mb-6",
                    "Thank you — your payment has been confirmed and the seller has been notified."
                }

                match order.value().read().as_ref() {
                    Some(Ok(order)) => rsx! {
                        OrderSummary { order: order.clone() }
                    },
                    Some(Err(_)) => rsx! {
                        p {
                            class: "text-sm text-stone-500 mb-6",
                            "We could not load the order details right now; the receipt is available from your account."
                        }
                    },
                    None => rsx! {
                        p { class: "text-sm text-stone-500 mb-6", "Loading order details..." }
                    }
                }

                Link {
                    to: Route::Account {},
                    class: "inline-flex items-center px-4 py-2 bg-amber-800 text-white text-sm rounded-md hover:bg-amber-900",
                    "Back to your account"
                }
                p {
                    class: "mt-3 text-xs text-stone-400",
                    "Returning automatically in {countdown}s"
                }
            }
        }
    }
}

/// Payment failure page
#[component]
pub fn PaymentFailure(order_id: String, reason: String) -> Element {
    let message = failure_message(&reason);

    rsx! {
        div {
            class: "max-w-lg mx-auto px-4 py-12",
            div {
                class: "bg-white rounded-lg shadow-md p-8 text-center",
                div { class: "text-5xl mb-4", "\u{26A0}\u{FE0F}" }
                h1 { class: "text-2xl font-bold text-stone-900 mb-2", "Payment not completed" }
                p { class: "text-sm text-stone-600 mb-6", "{message} You have not been charged." }

                div {
                    class: "flex flex-col items-center gap-2",
                    if !order_id.is_empty() {
                        a {
                            href: "/quickpay?orderId={order_id}",
                            class: "inline-flex items-center px-4 py-2 bg-amber-800 text-white text-sm rounded-md hover:bg-amber-900",
                            "Try the payment again"
                        }
                    }
                    Link {
                        to: Route::Account {},
                        class: "text-sm text-stone-600 hover:text-stone-900",
                        "View your orders"
                    }
                    Link {
                        to: Route::Home {},
                        class: "text-sm text-stone-500 hover:text-stone-800",
                        "Back to Curios"
                    }
                }
            }
        }
    }
}

/// Map the provider's failure reason code to a displayable sentence.
fn failure_message(reason: &str) -> &'static str {
    match reason {
        "card_declined" => "Your card was declined by the issuer.",
        "insufficient_funds" => "The payment was declined for insufficient funds.",
        "session_expired" | "expired" => "The payment session expired before completion.",
        "cancelled" => "The payment was cancelled before completion.",
        _ => "The payment could not be completed.",
    }
}

#[derive(Props, Clone, PartialEq)]
struct OrderSummaryProps {
    order: PaymentOrder,
}

#[component]
fn OrderSummary(props: OrderSummaryProps) -> Element {
    let order = &props.order;
    let title = order
        .auction_title
        .clone()
        .unwrap_or_else(|| format!("Lot #{}", order.auction_id));
    let amount = format!("{:.2} {}", order.amount, order.currency);

    rsx! {
        div {
            class: "bg-stone-50 rounded-md border border-stone-200 p-4 mb-6 text-left",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm font-medium text-stone-900", "{title}" }
                    p { class: "text-xs text-stone-500", "Order {order.id}" }
                }
                span { class: "text-sm font-semibold text-stone-900", "{amount}" }
            }
        }
    }
}

#[server]
async fn fetch_order(order_id: String) -> Result<PaymentOrder, ServerFnError> {
    let id = uuid::Uuid::parse_str(&order_id)
        .map_err(|_| ServerFnError::new("Invalid order reference"))?;
    let client = crate::auth::authed_client().await?;

    client
        .fetch_order(id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
