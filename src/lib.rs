//! Bearer-token gate for an API gateway.
//!
//! Every request is evaluated once by [`gate::AuthGate`] before it reaches the
//! upstream router: it is either forwarded untouched or answered with a
//! `401 application/json` error body.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod gate;
pub mod middleware;
pub mod services;
pub mod state;
