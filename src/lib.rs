#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! warcall: a terminal client for composing and submitting war orders.
//!
//! Layered bottom-up:
//! - [`model`]: domain types and field validation rules.
//! - [`wire`]: newline-delimited JSON framing for persisted records.
//! - [`client`]: the spool (on-disk record store) and the session over it.
//! - [`tui`]: screens, widgets, and the event loop.

pub mod client;
pub mod model;
pub mod tui;
pub mod wire;
