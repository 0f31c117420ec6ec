//! REST client for communicating with the marketplace API

mod account;
mod client;
mod moderation;
mod payments;

pub use client::*;
pub use moderation::*;
