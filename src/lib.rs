//! # Toolbelt TUI
//!
//! A small terminal developer toolbox: five independent tools behind a
//! tabbed interface.
//!
//! ## Tools
//! - Regex tester with live matching
//! - JSON formatter (pretty / minify)
//! - HTTP client (GET, POST, PUT, PATCH, DELETE)
//! - Git command cheatsheet
//! - Code snippet notebook (memory-only)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)
//!
//! Every reactive screen is one instance of [`pipeline::Pipeline`], the
//! shared validate-and-transform core: raw input in, exactly one
//! [`pipeline::Outcome`] out, recomputed on every change.

pub mod app;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod pipeline;
pub mod tools;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Exchange, HttpMethod, RequestForm, RequestPlan};
pub use network::NetworkActor;
pub use pipeline::{Outcome, Pipeline};
