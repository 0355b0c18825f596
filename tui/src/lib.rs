//! TUI rendering for eperf using ratatui.

mod input;
pub mod theme;
mod toast;

pub use input::handle_events;
pub use theme::{Glyphs, Palette, glyphs, palette};
pub use toast::draw_toast;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use eperf_engine::{App, PageKind};

/// Rendering and input surface of the external submission form.
///
/// The form owns its fields, validation, and submission; the page only hands
/// it screen space and keys, and hears back through the outcome channel it
/// was constructed with.
pub trait FormWidget {
    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette);

    fn handle_key(&mut self, key: KeyEvent);
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App, form: &mut dyn FormWidget) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Page heading
            Constraint::Min(1),    // Page content
            Constraint::Length(1), // Navigation bar
        ])
        .split(frame.area());

    match app.current_page().kind() {
        PageKind::BenchmarkSubmission => {
            draw_submission_page(frame, app, form, &palette, chunks[0], chunks[1]);
        }
    }

    draw_nav_bar(frame, app, &palette, &glyphs, chunks[2]);

    if let Some(toast) = app.toast() {
        draw_toast(frame, toast, &palette, &glyphs);
    }
}

fn draw_submission_page(
    frame: &mut Frame,
    _app: &App,
    form: &mut dyn FormWidget,
    palette: &Palette,
    heading_area: Rect,
    content_area: Rect,
) {
    let heading = Paragraph::new(Line::from(Span::styled(
        "Add Benchmark",
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, heading_area);

    form.render(frame, content_area, palette);
}

/// One-line bar listing registered pages by display name, current first
/// highlighted. This is the navigation surface the route registry feeds.
fn draw_nav_bar(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs, area: Rect) {
    let current = app.current_page().path();
    let mut spans = Vec::new();
    for page in app.pages() {
        let style = if page.path() == current {
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted)
        };
        if page.path() == current {
            spans.push(Span::styled(glyphs.selected, style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(page.display_name(), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        "Esc dismiss/quit · Ctrl+C quit",
        Style::default().fg(palette.text_muted),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
