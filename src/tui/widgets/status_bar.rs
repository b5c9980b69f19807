//! Status bar widget — one-line session activity display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from `Session` so widgets
/// stay renderable without a live spool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Whether a load or submission is currently running.
    pub fetching: bool,
    /// Whether a submission is outstanding (submit disabled).
    pub pending: bool,
    /// The session status message, if any.
    pub status: Option<String>,
}

/// Renders a one-line status bar showing session activity.
///
/// - Pending submission: `SUBMITTING` in yellow, then the status text.
/// - Fetching: `...` in yellow, then the status text.
/// - Otherwise just the status text in cyan.
///
/// Renders nothing when idle with no status message.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if !ctx.fetching && !ctx.pending && ctx.status.is_none() {
        return;
    }

    let cyan = Style::default().fg(Color::Cyan);
    let yellow = Style::default().fg(Color::Yellow);

    let mut spans: Vec<Span> = Vec::new();

    if ctx.pending {
        spans.push(Span::styled("SUBMITTING ", yellow));
    } else if ctx.fetching {
        spans.push(Span::styled("... ", yellow));
    }
    if let Some(ref status) = ctx.status {
        spans.push(Span::styled(status.clone(), cyan));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
