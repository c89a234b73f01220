//! # Pasteur Architecture
//!
//! Pasteur is a **UI-agnostic smart-paste library**: paste anything, find
//! out what it is, and run the right converter on it. The CLI binary is
//! just one client of the library core.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, reads stdin/clipboard, formats output  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Converter logic + the smart-paste flow                   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                          │
//!                  ▼                          ▼
//! ┌──────────────────────────┐  ┌─────────────────────────────┐
//! │  Detection (detect/,     │  │  Storage (store/)           │
//! │  router.rs)              │  │  - PrefStore trait          │
//! │  - Rule table,           │  │  - FileStore (production),  │
//! │    classifier, router    │  │    InMemoryStore (testing)  │
//! └──────────────────────────┘  └─────────────────────────────┘
//! ```
//!
//! ## The Detection Core
//!
//! The interesting decision logic lives in [`detect`]: a fixed, ordered
//! rule table where each format carries a cheap structural test, an
//! authoritative semantic validator, and a hand-tuned confidence weight.
//! The classifier collects every rule that fully validates and returns the
//! highest-confidence candidate; [`router`] adapts that pure function into
//! the event-driven smart-paste entry point with an unknown-routes-to-JSON
//! fallback.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. The same core could
//! back an editor plugin or a web service.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`detect`]: Format rule table and classifier
//! - [`router`]: Paste router (enrichment, callbacks, fallback route)
//! - [`commands`]: Converter logic and the smart-paste/history flows
//! - [`model`]: Core data types (`Format`, `Tool`, `Detection`, history)
//! - [`store`]: Persistence abstraction and implementations
//! - [`config`]: Configuration, including the detector's tuning knobs
//! - [`clipboard`]: Cross-platform clipboard read/write
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod model;
pub mod router;
pub mod store;
