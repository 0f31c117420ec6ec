//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::{AdminLayout, SiteLayout};
use crate::pages::admin::{AdminAuctions, AdminDashboard};
use crate::pages::public::{
    Account, AuthCallback, Contact, CookiesPolicy, Home, Login, PaymentFailure, PaymentSuccess,
    PrivacyPolicy, TermsOfService,
};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

        #[route("/auth/callback?:token&:error")]
        AuthCallback { token: String, error: String },

        #[route("/account")]
        Account {},

        #[route("/contact")]
        Contact {},

        #[route("/terms")]
        TermsOfService {},

        #[route("/privacy")]
        PrivacyPolicy {},

        #[route("/cookies")]
        CookiesPolicy {},

        #[route("/payment/success?:order_id")]
        PaymentSuccess { order_id: String },

        #[route("/payment/failure?:order_id&:reason")]
        PaymentFailure { order_id: String, reason: String },
    #[end_layout]

    // Admin routes
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/dashboard")]
            AdminDashboard {},

            #[route("/auctions")]
            AdminAuctions {},
}
