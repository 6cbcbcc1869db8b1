#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

//! Platform-neutral core of the MoodleNet web client.
//!
//! Everything in here is free of browser APIs so the login flow, the
//! pagination logic and the session storage contract can be driven from the
//! Yew front end and from native tests alike.

pub mod auth;
pub mod config;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod session;
