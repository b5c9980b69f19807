//! Team creation screen — single-field form for registering a new team.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::TeamSummary;
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for the team name.
const NAME: usize = 0;

/// Team names share the title bounds.
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 25;

/// State for the team creation screen.
#[derive(Debug, Clone)]
pub struct TeamCreateState {
    form: Form,
    general_error: Option<String>,
}

impl Default for TeamCreateState {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamCreateState {
    /// Creates a new team creation form with an empty name field.
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Team Name", true).with_placeholder("e.g. Night Owls"),
            ]),
            general_error: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc => Action::Navigate(Screen::OrderCreate),
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Sets a general error message not tied to the name field.
    ///
    /// Used to display spool-level errors inline.
    pub fn set_error(&mut self, msg: String) {
        self.general_error = Some(msg);
    }

    /// Returns the general error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Resets the form to its initial empty state.
    pub fn reset(&mut self) {
        self.form.reset();
        self.general_error = None;
    }

    /// Validates the name and builds the team to create.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.general_error = None;

        let name = self.form.value(NAME).trim().to_string();
        let len = name.chars().count();
        if !(NAME_MIN..=NAME_MAX).contains(&len) {
            self.form
                .set_error(NAME, format!("team name: {NAME_MIN}-{NAME_MAX} characters"));
            return Action::None;
        }

        let id = format!("T{}", Utc::now().timestamp_millis());
        Action::CreateTeam(TeamSummary::named(&id, &name))
    }
}

/// Renders the team creation screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_team_create(state: &TeamCreateState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Create Team ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, error_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(Line::from("Enter: create  Esc: back"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
