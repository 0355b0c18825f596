//! Application state machine.
//!
//! `App` owns the page registry and the state of the mounted page. The TUI
//! layer reads state from here and forwards input back; no rendering logic
//! lives in this crate. All mutation happens from the single-threaded event
//! loop, so the only cross-task seam is the form outcome channel.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::config::UiOptions;
use crate::form::{self, FormHandle, FormOutcome};
use crate::page::{PageDescriptor, PageRegistry, PageRegistryError};
use crate::toast::Toast;

pub struct App {
    registry: PageRegistry,
    current_path: &'static str,
    toast: Option<Toast>,
    form: FormHandle,
    outcomes: mpsc::UnboundedReceiver<FormOutcome>,
    ui_options: UiOptions,
    last_frame: Instant,
    quit: bool,
}

impl App {
    /// Build the app, registering every page with the router.
    pub fn new(ui_options: UiOptions) -> Result<Self, PageRegistryError> {
        let mut registry = PageRegistry::new();
        let submission = PageDescriptor::benchmark_submission();
        registry.register(submission)?;

        let (form, outcomes) = form::outcome_channel();

        Ok(Self {
            registry,
            current_path: submission.path(),
            toast: None,
            form,
            outcomes,
            ui_options,
            last_frame: Instant::now(),
            quit: false,
        })
    }

    /// Reporting handle handed to the form widget at construction.
    #[must_use]
    pub fn form_handle(&self) -> FormHandle {
        self.form.clone()
    }

    /// Advance state by one frame: drain pending form outcomes, then age the
    /// toast by the elapsed wall time.
    pub fn tick(&mut self) {
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.handle_outcome(outcome);
        }

        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance_ui(delta);
    }

    /// Age time-dependent UI state by `delta`.
    ///
    /// Split out of [`App::tick`] so tests can drive the clock directly.
    pub fn advance_ui(&mut self, delta: Duration) {
        if let Some(toast) = &mut self.toast {
            toast.advance(delta);
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    fn handle_outcome(&mut self, outcome: FormOutcome) {
        match outcome {
            FormOutcome::Success => {
                self.toast = Some(Toast::submission_success());
            }
            FormOutcome::Error => {
                // The form presents its own errors; the page stays silent.
                tracing::debug!("submission form reported an error");
            }
        }
    }

    /// Hide the toast now. Safe to call when nothing is shown, and the
    /// superseded auto-hide timer goes away with the toast.
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    #[must_use]
    pub fn current_page(&self) -> &PageDescriptor {
        self.registry
            .find(self.current_path)
            .expect("current path always points at a registered page")
    }

    pub fn pages(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.registry.iter()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
