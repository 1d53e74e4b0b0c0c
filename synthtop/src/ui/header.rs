//! One-line banner naming the current view and the key bindings.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::View;

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, view: View) {
    let line = Line::from(vec![
        Span::styled(
            format!(" synthtop: {} ", view.title()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  space next view | 1/2/3 jump | q quit"),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
