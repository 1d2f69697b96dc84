//! Call Cost Engine library crate.
//!
//! This crate compares the monthly cost of answering the phone with
//! paid staff against doing so with an automated answering service.
//! External applications may depend on `callcost_engine` and call
//! `engine::project` or `engine::project_raw` directly, debounce
//! interactive recomputation with `debounce::Debouncer`, or embed the
//! HTTP API via `api::build_router`.

pub mod allocation;
pub mod api;
pub mod break_even;
pub mod config;
pub mod curve;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod format;
pub mod hours;
pub mod metrics;
pub mod models;
pub mod presets;
pub mod projection;
pub mod sanitize;
pub mod sensitivity;
