//! Floating toast overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use eperf_engine::Toast;

use crate::theme::{Glyphs, Palette};

const MIN_WIDTH: u16 = 24;
const MARGIN: u16 = 1;

/// Draw the toast anchored to the bottom-right corner of the viewport.
pub fn draw_toast(frame: &mut Frame, toast: &Toast, palette: &Palette, glyphs: &Glyphs) {
    let viewport = frame.area();
    if viewport.width < MIN_WIDTH || viewport.height < 7 {
        return;
    }

    let body_width = toast.body().width() as u16;
    let header_width = toast.header().width() as u16 + 4; // glyph + spacing
    let width = (body_width.max(header_width) + 4)
        .max(MIN_WIDTH)
        .min(viewport.width.saturating_sub(2 * MARGIN));
    let height = 5; // header border, body, hint, countdown track, bottom border

    let area = Rect {
        x: viewport.right().saturating_sub(width + MARGIN),
        y: viewport.bottom().saturating_sub(height + MARGIN),
        width,
        height,
    };

    frame.render_widget(Clear, area);

    let header = Line::from(vec![
        Span::styled(glyphs.success, Style::default().fg(palette.success)),
        Span::raw(" "),
        Span::styled(
            toast.header(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    // Shrinking track showing how long the toast has left before auto-hide.
    let track_width = usize::from(width.saturating_sub(4));
    let filled = (toast.remaining() * track_width as f32).round() as usize;

    let lines = vec![
        Line::from(Span::styled(
            toast.body(),
            Style::default().fg(palette.text_primary),
        )),
        Line::from(Span::styled(
            "Esc to dismiss",
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            glyphs.track.repeat(filled.min(track_width)),
            Style::default().fg(palette.success),
        )),
    ];

    let widget = Paragraph::new(lines)
        .style(Style::default().bg(palette.bg_popup))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.success))
                .title(header)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}
