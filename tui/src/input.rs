//! Input handling for the eperf TUI.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::debug;

use eperf_engine::App;

use crate::FormWidget;

/// Drain all queued terminal events without blocking the render loop.
///
/// Page-level keys are handled here; everything else is forwarded to the
/// mounted form widget.
pub fn handle_events(app: &mut App, form: &mut dyn FormWidget) -> Result<()> {
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, form, key),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
            _ => {}
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, form: &mut dyn FormWidget, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.request_quit();
        }
        // Esc closes the toast first; with nothing to close it exits.
        KeyCode::Esc => {
            if app.toast().is_some() {
                app.dismiss_toast();
            } else {
                app.request_quit();
            }
        }
        _ => form.handle_key(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eperf_engine::UiOptions;

    struct RecordingForm {
        keys: Vec<KeyCode>,
    }

    impl FormWidget for RecordingForm {
        fn render(
            &mut self,
            _frame: &mut ratatui::Frame,
            _area: ratatui::layout::Rect,
            _palette: &crate::theme::Palette,
        ) {
        }

        fn handle_key(&mut self, key: KeyEvent) {
            self.keys.push(key.code);
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn esc_dismisses_toast_before_quitting() {
        let mut app = App::new(UiOptions::default()).unwrap();
        let mut form = RecordingForm { keys: Vec::new() };

        app.form_handle().success();
        app.tick();
        assert!(app.toast().is_some());

        handle_key(&mut app, &mut form, press(KeyCode::Esc));
        assert!(app.toast().is_none());
        assert!(!app.should_quit());

        handle_key(&mut app, &mut form, press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::new(UiOptions::default()).unwrap();
        let mut form = RecordingForm { keys: Vec::new() };

        handle_key(
            &mut app,
            &mut form,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
        assert!(form.keys.is_empty());
    }

    #[test]
    fn other_keys_go_to_the_form() {
        let mut app = App::new(UiOptions::default()).unwrap();
        let mut form = RecordingForm { keys: Vec::new() };

        handle_key(&mut app, &mut form, press(KeyCode::Char('x')));
        handle_key(&mut app, &mut form, press(KeyCode::Enter));
        assert_eq!(form.keys, vec![KeyCode::Char('x'), KeyCode::Enter]);
        assert!(!app.should_quit());
    }
}
