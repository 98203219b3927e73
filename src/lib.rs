//! Core library for chatline - API client, auth, session state, and config.
//!
//! The binary in `main.rs` is a thin front end; everything with a contract
//! lives here so it can be driven from tests as well as the terminal.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
