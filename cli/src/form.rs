//! Keyboard-driven stand-in for the benchmark submission form.
//!
//! The real form (fields, JSON schema validation, upload to the portal) is a
//! separate collaborator; this stub exercises the page contract end to end: it
//! takes one field, runs a trivial check on submit, and reports exactly one
//! outcome per attempt through the page's [`FormHandle`].

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use eperf_engine::FormHandle;
use eperf_tui::{FormWidget, Palette};

pub struct DemoForm {
    handle: FormHandle,
    docker_image: String,
    attempts: u32,
}

impl DemoForm {
    pub fn new(handle: FormHandle) -> Self {
        Self {
            handle,
            docker_image: String::new(),
            attempts: 0,
        }
    }

    fn submit(&mut self) {
        self.attempts += 1;
        if self.docker_image.trim().is_empty() {
            tracing::debug!(attempt = self.attempts, "submission rejected: empty image");
            self.handle.error();
        } else {
            tracing::info!(
                attempt = self.attempts,
                image = %self.docker_image,
                "benchmark submitted"
            );
            self.handle.success();
        }
    }
}

impl FormWidget for DemoForm {
    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let input_style = Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::UNDERLINED);
        let label_style = Style::default().fg(palette.text_muted);

        let lines = vec![
            Line::from(Span::styled("Docker image", label_style)),
            Line::from(Span::styled(
                if self.docker_image.is_empty() {
                    " ".repeat(32)
                } else {
                    self.docker_image.clone()
                },
                input_style,
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Enter submits · an empty image fails validation",
                label_style.add_modifier(Modifier::ITALIC),
            )),
        ];

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border))
                .title(" Benchmark submission ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(widget, area);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.docker_image.push(c),
            KeyCode::Backspace => {
                self.docker_image.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}
