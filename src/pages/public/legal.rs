//! Static legal and informational pages

use dioxus::prelude::*;

/// Contact page
#[component]
pub fn Contact() -> Element {
    rsx! {
        LegalShell {
            title: "Contact us",

            p {
                class: "text-stone-600 mb-6",
                "Questions about a lot, a consignment, or an order? We answer within one business day."
            }

            div {
                class: "space-y-4",
                ContactRow {
                    label: "General enquiries",
                    value: "hello@curios.example",
                    href: "mailto:hello@curios.example"
                }
                ContactRow {
                    label: "Consignments & valuations",
                    value: "consign@curios.example",
                    href: "mailto:consign@curios.example"
                }
                ContactRow {
                    label: "Payments & delivery",
                    value: "orders@curios.example",
                    href: "mailto:orders@curios.example"
                }
            }

            p {
                class: "text-sm text-stone-500 mt-8",
                "Curios Auctions Ltd · 14 Portobello Lane · London W11, United Kingdom"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ContactRowProps {
    label: &'static str,
    value: &'static str,
    href: &'static str,
}

#[component]
fn ContactRow(props: ContactRowProps) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between bg-stone-50 border border-stone-200 rounded-md px-4 py-3",
            span { class: "text-sm text-stone-600", "{props.label}" }
            a {
                href: props.href,
                class: "text-sm font-medium text-amber-800 hover:text-amber-900",
                "{props.value}"
            }
        }
    }
}

/// Terms of service page
#[component]
pub fn TermsOfService() -> Element {
    rsx! {
        LegalShell {
            title: "Terms of Service",

            LegalSection {
                heading: "1. The marketplace",
                body: "Curios operates an online auction marketplace for antiques. We list lots on behalf of sellers, run timed auctions, and collect payment from winning bidders. We are not the owner of the lots offered and title passes directly from seller to buyer."
            }
            LegalSection {
                heading: "2. Listings and moderation",
                body: "Every listing is reviewed by our specialists before it is published. We may reject a listing that misrepresents age, provenance, or condition, and we may remove a published lot if new information comes to light. A rejected listing can be resubmitted once the stated concerns have been addressed."
            }
            LegalSection {
                heading: "3. Bidding",
                body: "A bid is a binding offer to buy the lot at that price. Bids cannot be withdrawn once placed. If you win an auction you must complete payment within five days; unpaid lots may be offered to the underbidder."
            }
            LegalSection {
                heading: "4. Payment",
                body: "Payment is processed by our payment partner. Curios never stores your card details. Amounts shown include the buyer's premium; delivery is arranged and charged separately."
            }
            LegalSection {
                heading: "5. Liability",
                body: "Condition reports and attributions are statements of opinion given in good faith. Our liability for any lot is limited to the amount the buyer paid for it."
            }

            p { class: "text-sm text-stone-400 mt-8", "Last updated: March 2026" }
        }
    }
}

/// Privacy policy page
#[component]
pub fn PrivacyPolicy() -> Element {
    rsx! {
        LegalShell {
            title: "Privacy Policy",

            LegalSection {
                heading: "What we collect",
                body: "Your account details (email address, display name), bidding and purchase history, and the information you include in consignment submissions. Sign-in is handled by our identity provider; we never see your password."
            }
            LegalSection {
                heading: "How we use it",
                body: "To run auctions you take part in, to settle payments, to meet our legal obligations around the sale of cultural goods, and to notify you about lots you follow. We do not sell personal data to third parties."
            }
            LegalSection {
                heading: "Who we share it with",
                body: "The seller of a lot you have won (delivery details only), our payment partner (amounts and order references), and authorities where the law requires provenance disclosures."
            }
            LegalSection {
                heading: "Your rights",
                body: "You can request a copy of your data, correct it, or ask us to delete your account from the contact page. Bidding records tied to completed sales are retained for the legally required period."
            }

            p { class: "text-sm text-stone-400 mt-8", "Last updated: March 2026" }
        }
    }
}

/// Cookies policy page
#[component]
pub fn CookiesPolicy() -> Element {
    rsx! {
        LegalShell {
            title: "Cookies Policy",

            LegalSection {
                heading: "Strictly necessary",
                body: "A session cookie keeps you signed in while you browse and bid. Without it the site cannot function, so it cannot be switched off."
            }
            LegalSection {
                heading: "Preferences",
                body: "We remember interface choices such as your last-used currency display. These cookies expire after twelve months."
            }
            LegalSection {
                heading: "What we do not use",
                body: "Curios does not use advertising or cross-site tracking cookies. Auction pages contain no third-party trackers."
            }

            p { class: "text-sm text-stone-400 mt-8", "Last updated: March 2026" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LegalShellProps {
    title: &'static str,
    children: Element,
}

/// Shared shell for the static informational pages
#[component]
fn LegalShell(props: LegalShellProps) -> Element {
    rsx! {
        div {
            class: "max-w-2xl mx-auto px-4 py-10",
            div {
                class: "bg-white rounded-lg shadow-sm border border-stone-200 p-8",
                h1 { class: "text-2xl font-bold text-stone-900 mb-6", "{props.title}" }
                {props.children}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LegalSectionProps {
    heading: &'static str,
    body: &'static str,
}

#[component]
fn LegalSection(props: LegalSectionProps) -> Element {
    rsx! {
        section {
            class: "mb-6",
            h2 { class: "text-base font-semibold text-stone-900 mb-1", "{props.heading}" }
            p { class: "text-sm text-stone-600", "{props.body}" }
        }
    }
}
