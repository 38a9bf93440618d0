//! Layout and chrome shared by the browser screens

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::current_theme;

/// Split the screen into `[list, detail, status, footer]`.
///
/// List and detail sit side by side (40/60); status and footer are one
/// row each at the bottom.
pub fn build_browser_layout(area: Rect) -> [Rect; 4] {
    let [body, status, footer] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    let [list, detail] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body);
    [list, detail, status, footer]
}

pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str) {
    let theme = current_theme();
    frame.render_widget(
        Paragraph::new(text.to_string()).style(theme.text_secondary_style()),
        area,
    );
}

/// Centered `key: action` hints, keys highlighted.
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    frame.render_widget(
        Paragraph::new(footer_line(hints)).alignment(Alignment::Center),
        area,
    );
}

fn footer_line<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let theme = current_theme();
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(*key, theme.accent_bold_style()));
        spans.push(Span::styled(format!(": {}", action), theme.text_secondary_style()));
    }
    Line::from(spans)
}

/// A rectangle of the given percentages of `area`, centered in it.
/// Percentages above 100 are treated as 100.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let scale = |len: u16, percent: u16| (u32::from(len) * u32::from(percent.min(100)) / 100) as u16;
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
