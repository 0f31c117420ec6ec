//! Curios - Dioxus Fullstack Web Application
//!
//! Client-side presentation layer for the Curios antiques auction
//! marketplace. It connects to the marketplace REST API for data.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
