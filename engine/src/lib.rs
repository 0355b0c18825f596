//! Core engine for eperf - page state without TUI dependencies.
//!
//! eperf is a terminal client for the eosc-perf benchmarking portal. This
//! crate holds everything the render layer reads:
//!
//! - **Pages**: descriptor records and the route registry ([`page`])
//! - **Notifications**: transient toasts with a frame-driven auto-hide ([`toast`])
//! - **Form seam**: the outcome channel the submission form reports through ([`form`])
//! - **Application state**: the [`App`] struct tying the above together
//!
//! The TUI layer (`eperf-tui`) reads state from `App` and forwards input back
//! to it. No rendering logic lives in this crate.

mod app;
mod config;
mod form;
mod page;
mod toast;

pub use app::App;
pub use config::{AppConfig, ConfigError, PerfConfig, UiOptions};
pub use form::{FormHandle, FormOutcome};
pub use page::{PageDescriptor, PageKind, PageRegistry, PageRegistryError};
pub use toast::{TOAST_AUTOHIDE, Toast};
