//! Athletics intranet portal library crate.
//!
//! # Purpose
//! Exposes the page chrome, page context, access API, configuration, and
//! directory storage for use by the binary and tests.
//!
//! # Notes
//! Access decisions live in the `intranet-access` crate; this crate loads the
//! directory records they run against and renders the result.
pub mod api;
pub mod app;
pub mod chrome;
pub mod config;
pub mod context;
pub mod model;
pub mod observability;
pub mod session;
pub mod store;
